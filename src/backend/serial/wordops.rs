// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Constant-time primitives over machine words.
//!
//! `field` and `scalar` are built out of arrays of `u64` limbs. Every
//! place those limbs are combined based on a secret condition — picking
//! one of two limbs, testing a limb array for all-zero, building a mask
//! from a bit — goes through one of these helpers instead of an `if`, so
//! that the resulting machine code has no secret-dependent branch and no
//! secret-dependent memory address. This is a thin, word-oriented layer
//! on top of [`subtle`]; nothing here does its own constant-time trick
//! that `subtle` doesn't already provide — the point of factoring it out
//! is so `field.rs`/`scalar.rs` read in terms of limbs, not in terms of
//! `subtle`'s generic `Choice` plumbing.

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

/// Build an all-ones (`u64::MAX`) or all-zeros mask from a `Choice`,
/// for use as a bitmask rather than a 0/1 selector.
#[inline]
pub(crate) fn mask_u64(choice: Choice) -> u64 {
    // `Choice` is guaranteed to hold exactly 0u8 or 1u8; negating after
    // widening turns that into all-zero or all-one bits, branchlessly.
    (choice.unwrap_u8() as u64).wrapping_neg()
}

/// Constant-time conditional select between two limbs: `if choice { b }
/// else { a }`, without branching on `choice`.
#[inline]
pub(crate) fn conditional_select_u64(a: u64, b: u64, choice: Choice) -> u64 {
    u64::conditional_select(&a, &b, choice)
}

/// Constant-time conditional select over an entire limb array.
#[inline]
pub(crate) fn conditional_select_limbs<const N: usize>(
    a: &[u64; N],
    b: &[u64; N],
    choice: Choice,
) -> [u64; N] {
    let mut out = [0u64; N];
    for i in 0..N {
        out[i] = conditional_select_u64(a[i], b[i], choice);
    }
    out
}

/// Constant-time equality-to-zero test over a limb array: `true` iff
/// every limb is zero.
#[inline]
pub(crate) fn limbs_are_zero<const N: usize>(limbs: &[u64; N]) -> Choice {
    let mut acc = 0u64;
    for &limb in limbs.iter() {
        acc |= limb;
    }
    acc.ct_eq(&0)
}

/// Constant-time equality test between two limb arrays.
#[inline]
pub(crate) fn limbs_ct_eq<const N: usize>(a: &[u64; N], b: &[u64; N]) -> Choice {
    let mut acc = 0u64;
    for i in 0..N {
        acc |= a[i] ^ b[i];
    }
    acc.ct_eq(&0)
}

/// Overwrite `limbs` with zero through a volatile write per limb,
/// followed by a compiler fence — the same guarantee `zeroize` gives,
/// for use by the `destroy` family of operations on secret-carrying
/// types when the `zeroize` feature is off (when it's on, those types
/// derive `Zeroize` instead and go through its own protected writes).
#[inline]
pub(crate) fn clear_limbs<const N: usize>(limbs: &mut [u64; N]) {
    for limb in limbs.iter_mut() {
        unsafe { core::ptr::write_volatile(limb, 0) };
    }
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

/// Overwrite `bytes` with zero; the byte-array counterpart of
/// [`clear_limbs`] for the publicly-encoded types (`Scalar`,
/// `CompressedRistretto`) that store `[u8; 32]` rather than limbs.
#[inline]
pub(crate) fn clear_bytes(bytes: &mut [u8]) {
    for byte in bytes.iter_mut() {
        unsafe { core::ptr::write_volatile(byte, 0) };
    }
    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_roundtrip() {
        assert_eq!(mask_u64(Choice::from(0)), 0);
        assert_eq!(mask_u64(Choice::from(1)), u64::MAX);
    }

    #[test]
    fn select_picks_correct_branch() {
        assert_eq!(conditional_select_u64(1, 2, Choice::from(0)), 1);
        assert_eq!(conditional_select_u64(1, 2, Choice::from(1)), 2);
    }

    #[test]
    fn zero_detection() {
        assert_eq!(limbs_are_zero(&[0u64; 5]).unwrap_u8(), 1);
        assert_eq!(limbs_are_zero(&[0, 0, 1, 0, 0]).unwrap_u8(), 0);
    }

    #[test]
    fn limb_equality() {
        assert_eq!(limbs_ct_eq(&[1, 2, 3], &[1, 2, 3]).unwrap_u8(), 1);
        assert_eq!(limbs_ct_eq(&[1, 2, 3], &[1, 2, 4]).unwrap_u8(), 0);
    }

    #[test]
    fn clear_limbs_zeroes_all() {
        let mut limbs = [1u64, 2, 3, 4, 5];
        clear_limbs(&mut limbs);
        assert_eq!(limbs, [0u64; 5]);
    }

    #[test]
    fn clear_bytes_zeroes_all() {
        let mut bytes = [0xffu8; 32];
        clear_bytes(&mut bytes);
        assert_eq!(bytes, [0u8; 32]);
    }
}
