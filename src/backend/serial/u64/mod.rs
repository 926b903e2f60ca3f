// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! The 64-bit serial backend, used on any platform with 64-bit-wide
//! multiplication: field elements as five 51-bit limbs, scalars as five
//! 52-bit limbs.

pub(crate) mod constants;
pub(crate) mod field;
pub(crate) mod scalar;
