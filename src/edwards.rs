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

//! Edwards25519 point arithmetic: the cofactor-8 curve that ristretto255
//! is built on top of. Nothing in this module is exposed publicly —
//! this crate's only public point type is [`crate::ristretto::RistrettoPoint`],
//! which wraps an `EdwardsPoint` and maintains the ristretto255
//! equivalence-class invariants around it.

use core::ops::{Add, Mul, Neg, Sub};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

pub(crate) use crate::backend::serial::curve_models::EdwardsPoint;
use crate::backend::serial::u64::field::FieldElement51;
use crate::backend::serial::scalar_mul;
use crate::scalar::Scalar;
use crate::traits::{Identity, IsIdentity};

impl Identity for EdwardsPoint {
    /// The curve identity `(0 : 1 : 1 : 0)`.
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement51::ZERO,
            Y: FieldElement51::ONE,
            Z: FieldElement51::ONE,
            T: FieldElement51::ZERO,
        }
    }
}

impl Default for EdwardsPoint {
    fn default() -> EdwardsPoint {
        EdwardsPoint::identity()
    }
}

impl ConstantTimeEq for EdwardsPoint {
    /// `self == other` as curve points, i.e. `X1*Z2 == X2*Z1 && Y1*Z2
    /// == Y2*Z1` — comparing the affine coordinates without computing
    /// either inverse.
    fn ct_eq(&self, other: &EdwardsPoint) -> Choice {
        let xz1 = &self.X * &other.Z;
        let xz2 = &other.X * &self.Z;
        let yz1 = &self.Y * &other.Z;
        let yz2 = &other.Y * &self.Z;

        xz1.ct_eq(&xz2) & yz1.ct_eq(&yz2)
    }
}

impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for EdwardsPoint {}

impl IsIdentity for EdwardsPoint {
    fn is_identity(&self) -> Choice {
        self.ct_eq(&EdwardsPoint::identity())
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &EdwardsPoint, b: &EdwardsPoint, choice: Choice) -> EdwardsPoint {
        EdwardsPoint {
            X: FieldElement51::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement51::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement51::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement51::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl<'a> Add<&'a EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: &'a EdwardsPoint) -> EdwardsPoint {
        self.add_projective_niels(&other.to_projective_niels())
            .to_extended()
    }
}

impl Add<EdwardsPoint> for EdwardsPoint {
    type Output = EdwardsPoint;
    fn add(self, other: EdwardsPoint) -> EdwardsPoint {
        &self + &other
    }
}

impl<'a> Sub<&'a EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: &'a EdwardsPoint) -> EdwardsPoint {
        self.sub_projective_niels(&other.to_projective_niels())
            .to_extended()
    }
}

impl Sub<EdwardsPoint> for EdwardsPoint {
    type Output = EdwardsPoint;
    fn sub(self, other: EdwardsPoint) -> EdwardsPoint {
        &self - &other
    }
}

impl Neg for &EdwardsPoint {
    type Output = EdwardsPoint;
    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -(&self.X),
            Y: self.Y,
            Z: self.Z,
            T: -(&self.T),
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;
    fn neg(self) -> EdwardsPoint {
        -(&self)
    }
}

impl EdwardsPoint {
    /// Double this point: `2 * self`.
    pub(crate) fn double(&self) -> EdwardsPoint {
        self.to_projective().double().to_extended()
    }

    /// Constant-time scalar multiplication by the Montgomery-ladder-free
    /// windowed comb method (spec.md §4.5, `scalarmul`): safe to use
    /// with a secret scalar.
    pub(crate) fn mul(&self, scalar: &Scalar) -> EdwardsPoint {
        scalar_mul::variable_base::mul(self, scalar)
    }

    /// Multiply every coordinate by the same nonzero field element `f`:
    /// `(fX : fY : fZ : fT)` represents the same curve point as
    /// `(X : Y : Z : T)` under the projective-coordinate equivalence,
    /// so this is a no-op on the point's *value* — used only to assert
    /// that [`crate::ristretto::RistrettoPoint::compress`] is insensitive
    /// to which scaling of the extended coordinates it's handed.
    #[cfg(test)]
    pub(crate) fn debugging_pscale(&self, f: &FieldElement51) -> EdwardsPoint {
        EdwardsPoint {
            X: &self.X * f,
            Y: &self.Y * f,
            Z: &self.Z * f,
            T: &self.T * f,
        }
    }

    /// `true` iff this point lies on the curve and is consistent
    /// (`X*Y == Z*T`) — a debugging/testing assertion, not part of the
    /// public API (every `EdwardsPoint` this crate constructs satisfies
    /// it by construction).
    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        use crate::backend::serial::u64::constants::EDWARDS_D;

        let xy_invariant = (&self.X * &self.Y).ct_eq(&(&self.Z * &self.T));

        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ = self.Z.square();
        let TT = self.T.square();
        let lhs = &YY - &XX;
        let rhs = &ZZ + &(&EDWARDS_D * &TT);
        let on_curve = lhs.ct_eq(&rhs);

        (xy_invariant & on_curve).into()
    }
}

impl<'a> Mul<&'a Scalar> for &EdwardsPoint {
    type Output = EdwardsPoint;
    fn mul(self, scalar: &'a Scalar) -> EdwardsPoint {
        EdwardsPoint::mul(self, scalar)
    }
}

