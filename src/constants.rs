// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Well-known constants: the ristretto255 basepoint and the group
//! order.

#[cfg(feature = "precomputed-tables")]
use crate::ristretto::PrecomputedTable;
use crate::ristretto::{CompressedRistretto, RistrettoPoint};
use crate::scalar::Scalar;

/// The ristretto255 basepoint, as its canonical 32-byte encoding. This
/// is the same constant published in the ristretto255 IETF draft and
/// used throughout its test vectors.
pub const RISTRETTO_BASEPOINT_COMPRESSED: CompressedRistretto = CompressedRistretto([
    0xe2, 0xf2, 0xae, 0x0a, 0x6a, 0xbc, 0x4e, 0x71, 0xa8, 0x84, 0xa9, 0x61, 0xc5, 0x00, 0x51, 0x5f,
    0x58, 0xe3, 0x0b, 0x6a, 0xa5, 0x82, 0xdd, 0x8d, 0xb6, 0xa6, 0x59, 0x45, 0xe0, 0x8d, 0x2d, 0x76,
]);

/// The order of the ristretto255 group,
/// \\( \ell = 2\^{252} + 27742317777372353535851937790883648493 \\), as
/// a [`Scalar`] (it is, naturally, congruent to zero modulo itself).
pub const GROUP_ORDER: Scalar = Scalar {
    bytes: [
        0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
        0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x10,
    ],
};

/// Decode [`RISTRETTO_BASEPOINT_COMPRESSED`]. Not a `const` — ristretto
/// decoding needs an inverse square root, which isn't const-evaluable —
/// but cheap enough (one field inversion's worth of work) to call
/// wherever the basepoint is needed rather than caching it behind
/// `unsafe` interior-mutable statics.
pub fn RISTRETTO_BASEPOINT_POINT() -> RistrettoPoint {
    RISTRETTO_BASEPOINT_COMPRESSED
        .decode()
        .expect("RISTRETTO_BASEPOINT_COMPRESSED is a valid encoding")
}

/// A reusable table of small multiples of the ristretto255 basepoint,
/// built once from [`RISTRETTO_BASEPOINT_POINT`] — pass this to
/// [`RistrettoBasepointTable::mul`] instead of computing
/// `scalar * RISTRETTO_BASEPOINT_POINT()` when multiplying by the
/// basepoint more than once, to avoid rebuilding the table every time.
/// The distinguished basepoint instance of the general
/// [`PrecomputedTable`]; see [`PrecomputedTable::precompute`] to build
/// one for an arbitrary point.
#[cfg(feature = "precomputed-tables")]
pub struct RistrettoBasepointTable(pub(crate) PrecomputedTable);

#[cfg(feature = "precomputed-tables")]
impl RistrettoBasepointTable {
    pub fn mul(&self, scalar: &Scalar) -> RistrettoPoint {
        self.0.mul(scalar)
    }

    /// Overwrite this table's contents with zero, spec.md's `destroy`.
    pub fn destroy(&mut self) {
        self.0.destroy();
    }
}

/// Build [`RISTRETTO_BASEPOINT_COMPRESSED`]'s [`RistrettoBasepointTable`].
#[cfg(feature = "precomputed-tables")]
#[allow(non_snake_case)]
pub fn RISTRETTO_BASEPOINT_TABLE() -> RistrettoBasepointTable {
    let basepoint = RISTRETTO_BASEPOINT_POINT();
    RistrettoBasepointTable(PrecomputedTable::precompute(&basepoint))
}

/// The width, in bytes, of an encoded [`Scalar`].
pub const SCALAR_BYTES: usize = 32;

/// The width, in bytes, of a [`CompressedRistretto`] encoding.
pub const SER_BYTES: usize = 32;

/// The width, in bytes, of the non-uniform Elligator hash-to-curve
/// input ([`RistrettoPoint::from_nonuniform_bytes`](crate::ristretto::RistrettoPoint::from_nonuniform_bytes)).
pub const HASH_BYTES: usize = 32;

/// The bit length of the group order \\( \ell \\) (it sits just above
/// \\( 2\^{252} \\), so 253 bits, not the full 256 a [`Scalar`]'s byte
/// encoding could otherwise hold).
pub const SCALAR_BITS: usize = 253;

/// The cofactor of the underlying Edwards curve that ristretto255's
/// quotient construction removes.
pub const REMOVED_COFACTOR: u8 = 8;

/// The number of low bits of `invert_elligator_*`'s `which` parameter
/// that select among preimages (the rest are reserved for curves whose
/// field leaves headroom above `p` to vary the preimage's encoding
/// without changing which preimage it names; curve25519 has none, so
/// only the low 3 bits of `which` currently do anything — see
/// [`crate::ristretto::RistrettoPoint::invert_elligator_nonuniform`]).
pub const INVERT_ELLIGATOR_WHICH_BITS: u8 = 5;
