// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Scalar multiplication algorithms, layered over the curve models in
//! [`crate::backend::serial::curve_models`].
//!
//! - [`variable_base`]: constant-time single-scalar multiplication by a
//!   runtime point, safe for secret scalars (spec.md's `scalarmul`).
//! - [`double_base`]: constant-time `a*A + b*B` for two runtime points,
//!   safe for secret scalars (spec.md's `double_scalarmul`).
//! - [`dual_base`]: constant-time `(s1*P, s2*P)` for one runtime point
//!   and two scalars sharing a single table (spec.md's `dual_scalarmul`).
//! - [`vartime_double_base`]: variable-time `a*A + b*B`, for signature
//!   *verification* only.
//! - [`precomputed`]: fixed-basepoint multiplication built around a
//!   reusable lookup table.

pub(crate) mod double_base;
pub(crate) mod dual_base;
pub(crate) mod precomputed;
pub(crate) mod variable_base;
pub(crate) mod vartime_double_base;
