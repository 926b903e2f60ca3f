// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Crate-private facade over the active backend's field element type.
//! Everything here just re-exports or thinly wraps
//! [`crate::backend::serial::u64::field::FieldElement51`] — kept as its
//! own module (rather than having `ristretto`/`edwards` reach into
//! `backend` directly) so a second backend could be added later without
//! touching those callers.

pub(crate) use crate::backend::serial::u64::field::FieldElement51 as FieldElement;
