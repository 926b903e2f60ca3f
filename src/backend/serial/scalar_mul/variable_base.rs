// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Constant-time scalar multiplication by a runtime (not
//! fixed-at-compile-time) point: spec.md §4.5's `scalarmul`.
//!
//! Uses the standard windowed-comb approach: decompose the scalar into
//! 64 signed radix-16 digits via [`crate::scalar::Scalar::as_radix_16`],
//! precompute the 8 odd multiples `1P, 3P, ..., 15P` once, then walk the
//! digits from most to least significant, quadrupling the accumulator
//! (4 doublings = one radix-16 digit) and adding in the digit's multiple
//! each step. Every digit, including zero, goes through the same
//! constant-time table lookup and the same add, so the sequence of field
//! operations executed doesn't depend on the scalar's value.

use crate::backend::serial::curve_models::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::LookupTable;

pub(crate) fn mul(point: &EdwardsPoint, scalar: &Scalar) -> EdwardsPoint {
    let table = LookupTable::from(point);
    let digits = scalar.as_radix_16();

    let mut q = EdwardsPoint::identity();
    for i in (0..64).rev() {
        q = q.mul_by_pow_2(4);
        q = &q + &table.select(digits[i]);
    }
    q
}
