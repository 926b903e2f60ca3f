// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Constant-time two-point, two-scalar multiplication `a*A + b*B`:
//! spec.md §4.5's `double_scalarmul`, safe to call with secret `a`/`b`.
//!
//! Same windowed-comb structure as [`super::variable_base`], but with
//! two independent lookup tables walked in lockstep so the combined
//! accumulator only needs one quadrupling pass instead of two
//! independent multiplications followed by an add.

use crate::backend::serial::curve_models::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::LookupTable;

pub(crate) fn mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar, B: &EdwardsPoint) -> EdwardsPoint {
    let table_a = LookupTable::from(A);
    let table_b = LookupTable::from(B);

    let a_digits = a.as_radix_16();
    let b_digits = b.as_radix_16();

    let mut q = EdwardsPoint::identity();
    for i in (0..64).rev() {
        q = q.mul_by_pow_2(4);
        q = &q + &table_a.select(a_digits[i]);
        q = &q + &table_b.select(b_digits[i]);
    }
    q
}
