// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! `dual_scalarmul(P, s1, s2) = (s1*P, s2*P)`: spec.md §4.5's
//! `dual_scalarmul`, safe to call with secret `s1`/`s2`.
//!
//! One lookup table built from `P`, walked twice in the same pass:
//! both accumulators are quadrupled together and each picks its own
//! digit out of the shared table, so the whole thing costs roughly one
//! and a half single-point multiplications rather than two.

use crate::backend::serial::curve_models::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::LookupTable;

pub(crate) fn mul(
    s1: &Scalar,
    s2: &Scalar,
    P: &EdwardsPoint,
) -> (EdwardsPoint, EdwardsPoint) {
    let table_p = LookupTable::from(P);

    let s1_digits = s1.as_radix_16();
    let s2_digits = s2.as_radix_16();

    let mut q1 = EdwardsPoint::identity();
    let mut q2 = EdwardsPoint::identity();
    for i in (0..64).rev() {
        q1 = q1.mul_by_pow_2(4);
        q2 = q2.mul_by_pow_2(4);
        q1 = &q1 + &table_p.select(s1_digits[i]);
        q2 = &q2 + &table_p.select(s2_digits[i]);
    }
    (q1, q2)
}
