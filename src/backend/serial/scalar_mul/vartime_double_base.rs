// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Variable-time `a*A + b*B`, for signature *verification* only — never
//! call this with a secret scalar. Used by
//! [`crate::ristretto::RistrettoPoint::vartime_double_scalar_mul_basepoint`].
//!
//! Each scalar is converted to a width-5 non-adjacent form (at most one
//! nonzero digit in every run of 5 bits), which needs roughly a third
//! fewer additions than the constant-time radix-16 approach above —
//! affordable here because branching on public data leaks nothing.

use crate::backend::serial::curve_models::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use crate::window::NafLookupTable5;

const NAF_WIDTH: usize = 5;

pub(crate) fn mul(a: &Scalar, A: &EdwardsPoint, b: &Scalar, B: &EdwardsPoint) -> EdwardsPoint {
    let a_naf = a.non_adjacent_form(NAF_WIDTH);
    let b_naf = b.non_adjacent_form(NAF_WIDTH);

    let table_a = NafLookupTable5::from(A);
    let table_b = NafLookupTable5::from(B);

    let mut i: usize = 255;
    while i > 0 && a_naf[i] == 0 && b_naf[i] == 0 {
        i -= 1;
    }

    let mut q = EdwardsPoint::identity();
    loop {
        q = q.double();

        let a_digit = a_naf[i];
        if a_digit > 0 {
            q = &q + &table_a.select(a_digit);
        } else if a_digit < 0 {
            q = &q - &table_a.select(-a_digit);
        }

        let b_digit = b_naf[i];
        if b_digit > 0 {
            q = &q + &table_b.select(b_digit);
        } else if b_digit < 0 {
            q = &q - &table_b.select(-b_digit);
        }

        if i == 0 {
            break;
        }
        i -= 1;
    }
    q
}
