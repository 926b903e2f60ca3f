// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Curve models for the twisted Edwards curve, used internally to make
//! point addition/doubling cheap.
//!
//! The extended coordinates `(X : Y : Z : T)` with `x = X/Z`, `y = Y/Z`,
//! `x*y = T/Z` (so the invariant `X*Y == Z*T` always holds) are the
//! representation stored in [`EdwardsPoint`] and exposed to callers.
//! Internally, addition and doubling go through three auxiliary shapes
//! so the unified HWCD addition formula needs fewer field
//! multiplications than computing directly on extended coordinates:
//!
//! - [`ProjectiveNielsPoint`]: precomputed `(Y+X, Y-X, Z, 2dT)`, the
//!   shape stored in lookup tables for windowed scalar multiplication
//!   (cheapest to add *from*).
//! - [`AffineNielsPoint`]: the same idea with `Z` implicitly 1, used in
//!   the fixed-basepoint tables.
//! - [`CompletedPoint`]: the `(X:Y:Z:T)` result of an addition/doubling
//!   formula *before* the final `Z`/`T` are forced consistent — kept
//!   split as `((X:Z), (Y:T))` so a subsequent extraction can produce
//!   either extended or projective coordinates without redoing work.

use core::ops::{Add, Neg, Sub};

use subtle::Choice;
use subtle::ConditionallySelectable;

use crate::backend::serial::u64::constants::EDWARDS_D2;
use crate::backend::serial::u64::field::FieldElement51;

/// A point on the twisted Edwards curve, in extended homogeneous
/// coordinates `(X:Y:Z:T)` with `x = X/Z`, `y = Y/Z`, `xy = T/Z`.
#[derive(Copy, Clone)]
pub(crate) struct EdwardsPoint {
    pub(crate) X: FieldElement51,
    pub(crate) Y: FieldElement51,
    pub(crate) Z: FieldElement51,
    pub(crate) T: FieldElement51,
}

/// A pre-computed point in the "Niels" shape used as the addend in a
/// mixed addition: `(Y+X, Y-X, Z, 2dT)`, so curve addition against it
/// needs no multiplication by `d` (that's already folded into the
/// fourth coordinate).
#[derive(Copy, Clone)]
pub(crate) struct ProjectiveNielsPoint {
    pub(crate) Y_plus_X: FieldElement51,
    pub(crate) Y_minus_X: FieldElement51,
    pub(crate) Z: FieldElement51,
    pub(crate) T2d: FieldElement51,
}

/// As [`ProjectiveNielsPoint`], but for points with `Z` implicitly 1
/// (i.e. points given in affine coordinates) — used in the
/// fixed-basepoint tables, where `Z`'s absence saves one field
/// multiplication per addition.
#[derive(Copy, Clone)]
pub(crate) struct AffineNielsPoint {
    pub(crate) y_plus_x: FieldElement51,
    pub(crate) y_minus_x: FieldElement51,
    pub(crate) xy2d: FieldElement51,
}

/// The result of a partially-completed point operation, stored as
/// `((X:Z), (Y:T))` rather than `(X:Y:Z:T)` so callers can extract
/// either extended or projective coordinates from the same value.
#[derive(Copy, Clone)]
pub(crate) struct CompletedPoint {
    pub(crate) X: FieldElement51,
    pub(crate) Y: FieldElement51,
    pub(crate) Z: FieldElement51,
    pub(crate) T: FieldElement51,
}

/// A point in plain projective coordinates `(X:Y:Z)`, with no `T`
/// coordinate — used as the accumulator shape for the few operations
/// (notably point doubling) that don't need `T` until the very end.
#[derive(Copy, Clone)]
pub(crate) struct ProjectivePoint {
    pub(crate) X: FieldElement51,
    pub(crate) Y: FieldElement51,
    pub(crate) Z: FieldElement51,
}

impl ConditionallySelectable for ProjectiveNielsPoint {
    fn conditional_select(
        a: &ProjectiveNielsPoint,
        b: &ProjectiveNielsPoint,
        choice: Choice,
    ) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: FieldElement51::conditional_select(&a.Y_plus_X, &b.Y_plus_X, choice),
            Y_minus_X: FieldElement51::conditional_select(&a.Y_minus_X, &b.Y_minus_X, choice),
            Z: FieldElement51::conditional_select(&a.Z, &b.Z, choice),
            T2d: FieldElement51::conditional_select(&a.T2d, &b.T2d, choice),
        }
    }

    fn conditional_assign(&mut self, other: &ProjectiveNielsPoint, choice: Choice) {
        self.Y_plus_X.conditional_assign(&other.Y_plus_X, choice);
        self.Y_minus_X.conditional_assign(&other.Y_minus_X, choice);
        self.Z.conditional_assign(&other.Z, choice);
        self.T2d.conditional_assign(&other.T2d, choice);
    }
}

impl ConditionallySelectable for AffineNielsPoint {
    fn conditional_select(
        a: &AffineNielsPoint,
        b: &AffineNielsPoint,
        choice: Choice,
    ) -> AffineNielsPoint {
        AffineNielsPoint {
            y_plus_x: FieldElement51::conditional_select(&a.y_plus_x, &b.y_plus_x, choice),
            y_minus_x: FieldElement51::conditional_select(&a.y_minus_x, &b.y_minus_x, choice),
            xy2d: FieldElement51::conditional_select(&a.xy2d, &b.xy2d, choice),
        }
    }

    fn conditional_assign(&mut self, other: &AffineNielsPoint, choice: Choice) {
        self.y_plus_x.conditional_assign(&other.y_plus_x, choice);
        self.y_minus_x.conditional_assign(&other.y_minus_x, choice);
        self.xy2d.conditional_assign(&other.xy2d, choice);
    }
}

impl Neg for &ProjectiveNielsPoint {
    type Output = ProjectiveNielsPoint;

    /// Negating a Niels-shaped point swaps `Y+X`/`Y-X` and negates `2dT`.
    fn neg(self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: self.Y_minus_X,
            Y_minus_X: self.Y_plus_X,
            Z: self.Z,
            T2d: -(&self.T2d),
        }
    }
}

impl Neg for &AffineNielsPoint {
    type Output = AffineNielsPoint;
    fn neg(self) -> AffineNielsPoint {
        AffineNielsPoint {
            y_plus_x: self.y_minus_x,
            y_minus_x: self.y_plus_x,
            xy2d: -(&self.xy2d),
        }
    }
}

impl EdwardsPoint {
    /// Convert to the Niels-shaped addend used by mixed addition.
    pub(crate) fn to_projective_niels(&self) -> ProjectiveNielsPoint {
        ProjectiveNielsPoint {
            Y_plus_X: &self.Y + &self.X,
            Y_minus_X: &self.Y - &self.X,
            Z: self.Z,
            T2d: &self.T * &EDWARDS_D2,
        }
    }

    /// Drop the `T` coordinate, for use as a doubling accumulator.
    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// The unified HWCD addition formula `self + other`, with `other`
    /// given in the cheap-to-add-from Niels shape.
    pub(crate) fn add_projective_niels(
        &self,
        other: &ProjectiveNielsPoint,
    ) -> CompletedPoint {
        let Y_plus_X = &self.Y + &self.X;
        let Y_minus_X = &self.Y - &self.X;
        let PP = &Y_plus_X * &other.Y_plus_X;
        let MM = &Y_minus_X * &other.Y_minus_X;
        let TT2d = &self.T * &other.T2d;
        let ZZ = &self.Z * &other.Z;
        let ZZ2 = &ZZ + &ZZ;

        CompletedPoint {
            X: &PP - &MM,
            Y: &PP + &MM,
            Z: &ZZ2 + &TT2d,
            T: &ZZ2 - &TT2d,
        }
    }

    /// `self - other`, `other` in Niels shape.
    pub(crate) fn sub_projective_niels(
        &self,
        other: &ProjectiveNielsPoint,
    ) -> CompletedPoint {
        let Y_plus_X = &self.Y + &self.X;
        let Y_minus_X = &self.Y - &self.X;
        let PM = &Y_plus_X * &other.Y_minus_X;
        let MP = &Y_minus_X * &other.Y_plus_X;
        let TT2d = &self.T * &other.T2d;
        let ZZ = &self.Z * &other.Z;
        let ZZ2 = &ZZ + &ZZ;

        CompletedPoint {
            X: &PM - &MP,
            Y: &PM + &MP,
            Z: &ZZ2 - &TT2d,
            T: &ZZ2 + &TT2d,
        }
    }

    /// As [`EdwardsPoint::add_projective_niels`], but `other` has an
    /// implicit `Z = 1` (affine Niels shape, from a fixed-basepoint
    /// table).
    pub(crate) fn add_affine_niels(&self, other: &AffineNielsPoint) -> CompletedPoint {
        let Y_plus_X = &self.Y + &self.X;
        let Y_minus_X = &self.Y - &self.X;
        let PP = &Y_plus_X * &other.y_plus_x;
        let MM = &Y_minus_X * &other.y_minus_x;
        let Txy2d = &self.T * &other.xy2d;
        let Z2 = &self.Z + &self.Z;

        CompletedPoint {
            X: &PP - &MM,
            Y: &PP + &MM,
            Z: &Z2 + &Txy2d,
            T: &Z2 - &Txy2d,
        }
    }

    pub(crate) fn sub_affine_niels(&self, other: &AffineNielsPoint) -> CompletedPoint {
        let Y_plus_X = &self.Y + &self.X;
        let Y_minus_X = &self.Y - &self.X;
        let PM = &Y_plus_X * &other.y_minus_x;
        let MP = &Y_minus_X * &other.y_plus_x;
        let Txy2d = &self.T * &other.xy2d;
        let Z2 = &self.Z + &self.Z;

        CompletedPoint {
            X: &PM - &MP,
            Y: &PM + &MP,
            Z: &Z2 - &Txy2d,
            T: &Z2 + &Txy2d,
        }
    }
}

impl EdwardsPoint {
    /// Double this point `k` times via the cheaper projective-coordinate
    /// doubling formula, only converting back to extended coordinates at
    /// the end.
    pub(crate) fn mul_by_pow_2(&self, k: u32) -> EdwardsPoint {
        debug_assert!(k > 0);
        let mut r = self.to_projective();
        for _ in 0..(k - 1) {
            r = r.double().to_projective();
        }
        r.double().to_extended()
    }
}

impl ProjectivePoint {
    /// The curve doubling formula, specialized to not need a `T`
    /// coordinate on the input (doubling doesn't either, since `x*y`
    /// for the doubled point can be recovered from `X`, `Y` alone).
    pub(crate) fn double(&self) -> CompletedPoint {
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ2 = self.Z.square2();
        let X_plus_Y = &self.X + &self.Y;
        let X_plus_Y_sq = X_plus_Y.square();
        let YY_plus_XX = &YY + &XX;
        let YY_minus_XX = &YY - &XX;

        CompletedPoint {
            X: &X_plus_Y_sq - &YY_plus_XX,
            Y: YY_plus_XX,
            Z: YY_minus_XX,
            T: &ZZ2 - &YY_minus_XX,
        }
    }
}

impl CompletedPoint {
    /// Extract the extended-coordinate point `(XZ : YT : ZZ : ZT)` (the
    /// invariant `X*Y == Z*T` holds by construction of the two extra
    /// products).
    pub(crate) fn to_extended(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: &self.X * &self.Z,
            Y: &self.Y * &self.T,
            Z: &self.Z * &self.T,
            T: &self.X * &self.Y,
        }
    }

    /// Extract the projective-coordinate point `(XZ : YT : ZT)`,
    /// cheaper than [`CompletedPoint::to_extended`] when the `T`
    /// coordinate of the result isn't needed (e.g. mid-doubling-chain).
    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: &self.X * &self.Z,
            Y: &self.Y * &self.T,
            Z: &self.Z * &self.T,
        }
    }
}

impl<'a> Add<&'a ProjectiveNielsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: &'a ProjectiveNielsPoint) -> EdwardsPoint {
        self.add_projective_niels(other).to_extended()
    }
}

impl<'a> Sub<&'a ProjectiveNielsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'a ProjectiveNielsPoint) -> EdwardsPoint {
        self.sub_projective_niels(other).to_extended()
    }
}

impl<'a> Add<&'a AffineNielsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: &'a AffineNielsPoint) -> EdwardsPoint {
        self.add_affine_niels(other).to_extended()
    }
}

impl<'a> Sub<&'a AffineNielsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'a AffineNielsPoint) -> EdwardsPoint {
        self.sub_affine_niels(other).to_extended()
    }
}
