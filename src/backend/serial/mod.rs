// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! The serial (non-SIMD) back end: plain scalar-machine-word arithmetic.

pub(crate) mod curve_models;
pub(crate) mod scalar_mul;
pub(crate) mod u64;
pub(crate) mod wordops;
