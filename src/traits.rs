// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Small shared traits used by both the internal Edwards representation
//! and the public Ristretto point type.

use subtle::Choice;

/// A type with a well-defined group identity element.
pub(crate) trait Identity {
    fn identity() -> Self;
}

/// A type that can check itself against the identity element in
/// constant time.
pub(crate) trait IsIdentity {
    fn is_identity(&self) -> Choice;
}
