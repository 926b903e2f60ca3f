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

//! Lookup tables of small multiples of a point, used by both the
//! constant-time windowed scalar multiplication (radix-16 signed
//! digits, [`LookupTable`]) and the variable-time double-scalar
//! multiplication used for verification (width-5 NAF, [`NafLookupTable5`]).

use core::ops::{Index, Neg};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::backend::serial::curve_models::{AffineNielsPoint, EdwardsPoint, ProjectiveNielsPoint};
use crate::backend::serial::u64::field::FieldElement51;

/// Holds the odd multiples `[1P, 3P, 5P, 7P, 9P, 11P, 13P, 15P]` of a
/// point `P`, in whatever Niels-like shape `T` is — so a radix-16
/// signed digit `d` (`-8..=8`) can be looked up as `table.select(d)`
/// without branching on `d`'s sign or magnitude.
#[derive(Copy, Clone)]
pub(crate) struct LookupTable<T>(pub(crate) [T; 8]);

impl<T> Index<usize> for LookupTable<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl LookupTable<ProjectiveNielsPoint> {
    /// Build the table of odd multiples `1P, 3P, ..., 15P`.
    pub(crate) fn from(point: &EdwardsPoint) -> Self {
        let mut points = [point.to_projective_niels(); 8];
        let point2 = point.double();
        for i in 0..7 {
            points[i + 1] = (&point2 + &points[i]).to_projective_niels();
        }
        LookupTable(points)
    }

    /// Select `signed_digit * P` in constant time, for
    /// `signed_digit` in `-8..=8`.
    pub(crate) fn select(&self, signed_digit: i8) -> ProjectiveNielsPoint {
        debug_assert!((-8..=8).contains(&signed_digit));

        let sign = (signed_digit as i16 as u16 >> 15) as u8;
        let abs_digit = (signed_digit as i16).unsigned_abs() as u8;

        let mut result = ProjectiveNielsPoint {
            Y_plus_X: FieldElement51::ONE,
            Y_minus_X: FieldElement51::ONE,
            Z: FieldElement51::ONE,
            T2d: FieldElement51::ZERO,
        };

        for i in 1..9u8 {
            let select_this = (i as u8).ct_eq(&abs_digit);
            result.conditional_assign(&self.0[(i - 1) as usize], select_this);
        }

        let minus_result = -&result;
        ProjectiveNielsPoint::conditional_select(&result, &minus_result, Choice::from(sign))
    }
}

impl LookupTable<AffineNielsPoint> {
    /// As [`LookupTable::<ProjectiveNielsPoint>::select`], for the
    /// affine-Niels tables used by precomputed fixed-basepoint
    /// multiplication.
    pub(crate) fn select(&self, signed_digit: i8) -> AffineNielsPoint {
        debug_assert!((-8..=8).contains(&signed_digit));

        let sign = (signed_digit as i16 as u16 >> 15) as u8;
        let abs_digit = (signed_digit as i16).unsigned_abs() as u8;

        let mut result = AffineNielsPoint {
            y_plus_x: FieldElement51::ONE,
            y_minus_x: FieldElement51::ONE,
            xy2d: FieldElement51::ZERO,
        };

        for i in 1..9u8 {
            let select_this = i.ct_eq(&abs_digit);
            result.conditional_assign(&self.0[(i - 1) as usize], select_this);
        }

        let minus_result = -&result;
        AffineNielsPoint::conditional_select(&result, &minus_result, Choice::from(sign))
    }
}

/// A lookup table of `[1P, 3P, 5P, ..., 15P]` for variable-time
/// width-5 NAF-based scalar multiplication. Unlike [`LookupTable`],
/// selection here is an ordinary (non-constant-time) array index,
/// since every caller of [`NafLookupTable5`] is a `vartime_*` entry
/// point that only ever sees public scalars.
pub(crate) struct NafLookupTable5<T>(pub(crate) [T; 8]);

impl<T> Index<usize> for NafLookupTable5<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl NafLookupTable5<ProjectiveNielsPoint> {
    pub(crate) fn from(point: &EdwardsPoint) -> Self {
        let mut points = [point.to_projective_niels(); 8];
        let point2 = point.double();
        for i in 0..7 {
            points[i + 1] = (&point2 + &points[i]).to_projective_niels();
        }
        NafLookupTable5(points)
    }

    /// Look up `x*P` for odd `x` in `-15..=15` (vartime array index).
    pub(crate) fn select(&self, x: i8) -> ProjectiveNielsPoint {
        debug_assert_eq!(x & 1, 1);
        debug_assert!((-15..=15).contains(&x));

        if x > 0 {
            self.0[(x / 2) as usize]
        } else {
            -&self.0[(-x / 2) as usize]
        }
    }
}
