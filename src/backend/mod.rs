// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Pluggable arithmetic back ends.
//!
//! The rest of the crate is written against the types this module
//! exposes ([`FieldElement`](crate::field::FieldElement) and
//! [`Scalar52`](serial::u64::scalar::Scalar52)/friends) rather than
//! against a concrete limb width, so that a different back end —
//! another limb count, a SIMD implementation, a formally verified one —
//! can be dropped in without touching `field.rs`, `scalar.rs`,
//! `edwards.rs`, or `ristretto.rs`. This crate ships exactly one: the
//! serial, 64-bit, five-limb back end in [`serial::u64`].

pub(crate) mod serial;
