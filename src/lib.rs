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

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(non_snake_case)]

//! A pure-Rust implementation of the **ristretto255** prime-order group.
//!
//! ristretto255 quotients the Edwards25519 curve (cofactor 8) by its
//! 4-torsion subgroup and sign ambiguity, producing a clean group of
//! prime order
//! \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\)
//! with a unique 32-byte encoding per group element. This eliminates an
//! entire class of small-subgroup and point-malleability bugs from
//! protocols built on top of it (signatures, PAKEs, VRFs, zero-knowledge
//! proofs) without requiring those protocols to reason about the
//! underlying curve's cofactor at all.
//!
//! The public surface of this crate is deliberately narrow:
//!
//! - [`scalar::Scalar`] — integers modulo the group order \\( \ell \\).
//! - [`ristretto::RistrettoPoint`] — group elements.
//! - [`ristretto::CompressedRistretto`] — their canonical 32-byte encoding.
//!
//! Everything else (`edwards`, `field`, `backend`, `window`) is internal
//! machinery: the Edwards25519 point representation the ristretto255
//! quotient is built on top of, and the field/scalar arithmetic that
//! underlies both.
//!
//! # A word on constant time
//!
//! Every operation that touches a secret scalar or an undecoded point is
//! written without secret-dependent branches or secret-dependent memory
//! access, using [`subtle`] masks throughout. The sole documented
//! exception is
//! [`ristretto::RistrettoPoint::vartime_double_scalar_mul_basepoint`],
//! which is for signature *verification* (no secret inputs) and is named
//! `vartime_*` for exactly that reason — never call it with a secret
//! scalar.

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

pub use subtle;

pub(crate) mod backend;
pub(crate) mod edwards;
pub(crate) mod field;
pub(crate) mod traits;
pub(crate) mod window;

pub mod constants;
pub mod ristretto;
pub mod scalar;

pub use crate::ristretto::{CompressedRistretto, RistrettoPoint};
pub use crate::scalar::Scalar;
