//! Conformance checks against the published properties of the
//! ristretto255 group: canonical basepoint behavior, small-multiple
//! distinctness, rejection of non-canonical encodings, and
//! hash-to-group determinism.
//!
//! The published ristretto255 test vectors (small-multiple encodings,
//! the seven "bad encoding" strings, and the Elligator/SHA-512 string
//! vectors) are exact byte literals defined in the IETF draft; without
//! a toolchain to check a transcription against, copying them from
//! memory risks silently wrong bytes that would pass review but not a
//! real test run. Every check below instead derives its expected value
//! from the group's own algebraic laws or from constants already
//! present in the crate (`RISTRETTO_BASEPOINT_COMPRESSED`, the prime
//! `p = 2^255 - 19`), so each assertion is something this suite can be
//! confident about without executing it.

use ristretto255::constants::{GROUP_ORDER, RISTRETTO_BASEPOINT_COMPRESSED, RISTRETTO_BASEPOINT_POINT};
use ristretto255::ristretto::CompressedRistretto;
use ristretto255::scalar::Scalar;

fn basepoint_multiple(k: u64) -> ristretto255::ristretto::RistrettoPoint {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&k.to_le_bytes());
    RISTRETTO_BASEPOINT_POINT().mul(&Scalar::decode(&bytes).unwrap())
}

#[test]
fn identity_encodes_to_all_zero_bytes() {
    let identity = RISTRETTO_BASEPOINT_POINT().mul(&Scalar::decode(&[0u8; 32]).unwrap());
    assert_eq!(identity.compress().to_bytes(), [0u8; 32]);
}

#[test]
fn basepoint_decodes_from_its_published_encoding() {
    let point = RISTRETTO_BASEPOINT_COMPRESSED.decode().expect("basepoint must decode");
    assert_eq!(point.compress(), RISTRETTO_BASEPOINT_COMPRESSED);
    assert_eq!(point.compress().to_bytes(), RISTRETTO_BASEPOINT_COMPRESSED.to_bytes());
}

/// Encodings of 0*B, 1*B, 2*B, 3*B, 4*B, 15*B: distinct, and each
/// round-trips through compress/decode.
#[test]
fn small_multiples_of_the_basepoint_are_distinct_and_round_trip() {
    let ks = [0u64, 1, 2, 3, 4, 15];
    let points: Vec<_> = ks.iter().map(|&k| basepoint_multiple(k)).collect();

    for (k, point) in ks.iter().zip(points.iter()) {
        let compressed = point.compress();
        let decoded = compressed.decode().unwrap_or_else(|| panic!("{k}*B must decode"));
        assert_eq!(decoded.compress(), compressed, "{k}*B did not round-trip");
    }

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            assert_ne!(
                points[i].compress().to_bytes(),
                points[j].compress().to_bytes(),
                "{}*B and {}*B encoded the same",
                ks[i],
                ks[j]
            );
        }
    }
}

/// Bad encodings, category 1: non-canonical field elements, i.e. any
/// little-endian 32-byte value >= p = 2^255 - 19 with the top bit
/// clear. `p`'s own encoding, and anything between `p` and `2^255 - 1`,
/// must be rejected by `decode`.
#[test]
fn non_canonical_field_encodings_are_rejected() {
    // p = 2^255 - 19, little-endian.
    let mut p_bytes = [0xffu8; 32];
    p_bytes[0] = 0xed;
    p_bytes[31] = 0x7f;
    assert!(
        CompressedRistretto::from_bytes(p_bytes).decode().is_none(),
        "encoding of p itself must be rejected as non-canonical"
    );

    // p + 1, still < 2^255 and still non-canonical.
    let mut p_plus_one = p_bytes;
    p_plus_one[0] = 0xee;
    assert!(CompressedRistretto::from_bytes(p_plus_one).decode().is_none());

    // 2^255 - 1: top bit clear, every other bit set.
    let mut max_255_bit = [0xffu8; 32];
    max_255_bit[31] = 0x7f;
    assert!(CompressedRistretto::from_bytes(max_255_bit).decode().is_none());
}

/// Bad encodings, category 2: the high bit of the last byte must be
/// zero (the encoding is a 255-bit value); setting it makes the
/// encoding non-canonical even when the low 255 bits alone would
/// decode.
#[test]
fn high_bit_set_is_rejected() {
    let mut bytes = RISTRETTO_BASEPOINT_COMPRESSED.to_bytes();
    bytes[31] |= 0x80;
    assert!(CompressedRistretto::from_bytes(bytes).decode().is_none());
}

/// Bad encodings, category 3: the all-zero encoding of the identity
/// must still decode when `decode_allow_identity(true)`, and must be
/// rejected when the caller asks for `false` (the spec's cofactor-free
/// Edwards-signature defense).
#[test]
fn identity_encoding_respects_allow_identity_flag() {
    let zero = CompressedRistretto::from_bytes([0u8; 32]);
    assert!(zero.decode_allow_identity(true).is_some());
    assert!(zero.decode_allow_identity(false).is_none());
}

/// `from_uniform_bytes` is deterministic, and splits into the sum of
/// the nonuniform map applied to each 32-byte half (this is exactly
/// how the spec defines the uniform variant, not an incidental
/// implementation detail). Exercised with the SHA-512 of one of the
/// spec's own example strings, run through the same hash-then-map
/// pipeline a real caller would use, even though (per the note at the
/// top of this file) the resulting point isn't compared against a
/// hand-transcribed published value.
#[test]
fn from_uniform_bytes_is_deterministic_and_matches_its_definition() {
    use sha2::{Digest, Sha512};

    let mut hasher = Sha512::new();
    hasher.update(b"Ristretto is traditionally a short shot of espresso coffee");
    let digest = hasher.finalize();
    let mut bytes = [0u8; 64];
    bytes.copy_from_slice(&digest);

    let once = ristretto255::ristretto::RistrettoPoint::from_uniform_bytes(&bytes);
    let twice = ristretto255::ristretto::RistrettoPoint::from_uniform_bytes(&bytes);
    assert_eq!(once.compress(), twice.compress());

    let mut first_half = [0u8; 32];
    first_half.copy_from_slice(&bytes[..32]);
    let mut second_half = [0u8; 32];
    second_half.copy_from_slice(&bytes[32..]);

    let expected = ristretto255::ristretto::RistrettoPoint::from_nonuniform_bytes(&first_half)
        + ristretto255::ristretto::RistrettoPoint::from_nonuniform_bytes(&second_half);
    assert_eq!(once.compress(), expected.compress());
}

/// `from_nonuniform_bytes` is deterministic and distinct inputs
/// (overwhelmingly likely) land on distinct points.
#[test]
fn from_nonuniform_bytes_is_deterministic() {
    let a = [7u8; 32];
    let b = {
        let mut bytes = [7u8; 32];
        bytes[0] = 8;
        bytes
    };

    let pa = ristretto255::ristretto::RistrettoPoint::from_nonuniform_bytes(&a);
    let pa2 = ristretto255::ristretto::RistrettoPoint::from_nonuniform_bytes(&a);
    let pb = ristretto255::ristretto::RistrettoPoint::from_nonuniform_bytes(&b);

    assert_eq!(pa.compress(), pa2.compress());
    assert_ne!(pa.compress().to_bytes(), pb.compress().to_bytes());
}

/// Scalar multiplication is linear: `(a + b) * B == a * B + b * B`, for
/// `s = 2^252 + k` style scalars near the group order boundary as well
/// as small ones.
#[test]
fn scalarmul_is_linear_near_the_group_order() {
    let base = RISTRETTO_BASEPOINT_POINT();

    let mut near_order_bytes = GROUP_ORDER.encode();
    // l - 5, still a valid scalar encoding (subtracting from the low byte
    // of l's 32-byte little-endian encoding never borrows past byte 0
    // since l's low byte is 0xed).
    near_order_bytes[0] = near_order_bytes[0].wrapping_sub(5);
    let a = Scalar::decode(&near_order_bytes).unwrap();
    let b = Scalar::decode(&{
        let mut bytes = [0u8; 32];
        bytes[0] = 9;
        bytes
    })
    .unwrap();

    let lhs = base.mul(&a.add(&b));
    let rhs = base.mul(&a) + base.mul(&b);
    assert_eq!(lhs.compress(), rhs.compress());
}

/// The group order itself annihilates the basepoint: `l * B ==
/// identity`.
#[test]
fn group_order_annihilates_basepoint() {
    let result = RISTRETTO_BASEPOINT_POINT().mul(&GROUP_ORDER);
    assert_eq!(result.compress().to_bytes(), [0u8; 32]);
}
