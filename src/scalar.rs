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

//! Integers modulo the group order \\( \ell =
//! 2\^{252} + 27742317777372353535851937790883648493 \\).
//!
//! A [`Scalar`] always stores a *canonical* little-endian encoding (the
//! unique representative less than \\(\ell\\)): every constructor either
//! reduces its input or rejects it, so arithmetic never needs to worry
//! about a non-canonical scalar sneaking in. This mirrors spec.md §4.2's
//! choice to keep canonicity an invariant of the type rather than a
//! property callers must remember to check.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;
use subtle::CtOption;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::u64::constants::L;
use crate::backend::serial::u64::scalar::Scalar52;

/// An integer modulo \\(\ell\\), stored as 32 canonical little-endian
/// bytes.
#[derive(Copy, Clone)]
pub struct Scalar {
    pub(crate) bytes: [u8; 32],
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar{{\n\tbytes: {:?},\n}}", &self.bytes)
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Scalar, b: &Scalar, choice: Choice) -> Scalar {
        let mut bytes = [0u8; 32];
        for i in 0..32 {
            bytes[i] = u8::conditional_select(&a.bytes[i], &b.bytes[i], choice);
        }
        Scalar { bytes }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl Scalar {
    /// The additive identity.
    pub const ZERO: Scalar = Scalar { bytes: [0u8; 32] };

    /// The multiplicative identity.
    pub const ONE: Scalar = Scalar {
        bytes: [
            1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0,
        ],
    };

    /// The scalar whose value is `x`, spec.md's `set_unsigned`.
    pub fn set_unsigned(x: u64) -> Scalar {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&x.to_le_bytes());
        Scalar { bytes }
    }

    /// Decode a scalar from 32 canonical little-endian bytes,
    /// spec.md's `decode`. Returns `None` (FAILURE) if `bytes` does not
    /// represent an integer strictly less than \\(\ell\\).
    pub fn decode(bytes: &[u8; 32]) -> Option<Scalar> {
        let candidate = Scalar { bytes: *bytes };
        CtOption::new(candidate, candidate.is_canonical()).into()
    }

    /// As [`Scalar::decode`], but does not check canonicity. Only safe
    /// to call on bytes already known to be `< \ell` (e.g. the output
    /// of [`Scalar::decode_long`]).
    pub(crate) fn from_canonical_bytes_unchecked(bytes: [u8; 32]) -> Scalar {
        Scalar { bytes }
    }

    /// Reduce an arbitrary-length little-endian byte string modulo
    /// \\(\ell\\) (spec.md §4.2 `decode_long`) — used to turn, e.g., a
    /// 64-byte hash output into a scalar without the small bias a naive
    /// `mod` over the raw bytes would introduce.
    pub fn decode_long(bytes: &[u8]) -> Scalar {
        let reduced = Scalar52::from_bytes_wide(bytes);
        Scalar::from_canonical_bytes_unchecked(reduced.to_bytes())
    }

    /// Encode this scalar as 32 canonical little-endian bytes.
    pub fn encode(&self) -> [u8; 32] {
        self.bytes
    }

    /// `true` iff `self`'s byte encoding is the unique representative
    /// less than \\(\ell\\) (i.e. `self.bytes` would round-trip through
    /// [`Scalar::decode`]).
    pub fn is_canonical(&self) -> Choice {
        let s = Scalar52::from_bytes(&self.bytes);
        is_less_than_l(&s)
    }

    fn to_backend(&self) -> Scalar52 {
        Scalar52::from_bytes(&self.bytes)
    }

    fn from_backend(s: Scalar52) -> Scalar {
        Scalar {
            bytes: s.to_bytes(),
        }
    }

    /// `self + other` mod \\(\ell\\).
    pub fn add(&self, other: &Scalar) -> Scalar {
        Scalar::from_backend(Scalar52::add(&self.to_backend(), &other.to_backend()))
    }

    /// `self - other` mod \\(\ell\\).
    pub fn sub(&self, other: &Scalar) -> Scalar {
        Scalar::from_backend(Scalar52::sub(&self.to_backend(), &other.to_backend()))
    }

    /// `self * other` mod \\(\ell\\).
    pub fn mul(&self, other: &Scalar) -> Scalar {
        Scalar::from_backend(Scalar52::mul(&self.to_backend(), &other.to_backend()))
    }

    /// `-self` mod \\(\ell\\).
    pub fn negate(&self) -> Scalar {
        Scalar::ZERO.sub(self)
    }

    /// `self / 2` mod \\(\ell\\).
    pub fn halve(&self) -> Scalar {
        Scalar::from_backend(Scalar52::halve(&self.to_backend()))
    }

    /// The multiplicative inverse of `self` mod \\(\ell\\), or `None`
    /// (FAILURE) if `self` is zero.
    pub fn invert(&self) -> Option<Scalar> {
        let inverse = Scalar::from_backend(self.to_backend().invert());
        CtOption::new(inverse, !self.ct_eq(&Scalar::ZERO)).into()
    }

    /// `true` iff `self == 0`.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Scalar::ZERO)
    }

    /// Overwrite this scalar's bytes with zero, spec.md's `destroy`.
    /// `Scalar` is `Copy` (spec.md §3's value semantics), which rules out
    /// an automatic zeroize-on-drop (a type can't implement both `Copy`
    /// and `Drop`); call this explicitly wherever a scalar's lifetime
    /// ends and its bytes must not linger.
    pub fn destroy(&mut self) {
        #[cfg(feature = "zeroize")]
        {
            self.zeroize();
        }
        #[cfg(not(feature = "zeroize"))]
        {
            crate::backend::serial::wordops::clear_bytes(&mut self.bytes);
        }
    }

    /// Decompose into 64 signed radix-16 digits in `[-8, 8)`, most
    /// significant digit last, such that
    /// `self = sum(digits[i] * 16^i for i in 0..64)`.
    /// Used by the constant-time windowed scalar multiplication.
    pub(crate) fn as_radix_16(&self) -> [i8; 64] {
        debug_assert!(self.bytes[31] <= 127);
        let mut output = [0i8; 64];

        #[inline(always)]
        fn bot_half(x: u8) -> u8 {
            x & 15
        }
        #[inline(always)]
        fn top_half(x: u8) -> u8 {
            (x >> 4) & 15
        }

        for i in 0..32 {
            output[2 * i] = bot_half(self.bytes[i]) as i8;
            output[2 * i + 1] = top_half(self.bytes[i]) as i8;
        }

        for i in 0..63 {
            let carry = (output[i] + 8) >> 4;
            output[i] -= carry << 4;
            output[i + 1] += carry;
        }

        output
    }

    /// Compute the width-`w` non-adjacent form of this scalar: 256
    /// signed digits, each either `0` or odd and `< 2^(w-1)` in absolute
    /// value, with no two adjacent nonzero digits. Used by variable-time
    /// double-scalar multiplication; never call this on a secret scalar
    /// (the digit positions and values leak through the lookup pattern
    /// of whatever uses the result).
    pub(crate) fn non_adjacent_form(&self, w: usize) -> [i8; 256] {
        debug_assert!((2..=8).contains(&w));

        let mut naf = [0i8; 256];

        let mut x_u64 = [0u64; 5];
        for i in 0..4 {
            let mut word = 0u64;
            for j in 0..8 {
                word |= (self.bytes[i * 8 + j] as u64) << (j * 8);
            }
            x_u64[i] = word;
        }

        let width = 1u64 << w;
        let window_mask = width - 1;

        let mut pos = 0usize;
        let mut carry = 0u64;
        while pos < 256 {
            let u64_idx = pos / 64;
            let bit_idx = pos % 64;
            let bit_buf = if bit_idx < 64 - w {
                x_u64[u64_idx] >> bit_idx
            } else {
                (x_u64[u64_idx] >> bit_idx) | (x_u64[u64_idx + 1] << (64 - bit_idx))
            };

            let window = carry + (bit_buf & window_mask);

            if window & 1 == 0 {
                pos += 1;
                continue;
            }

            if window < width / 2 {
                carry = 0;
                naf[pos] = window as i8;
            } else {
                carry = 1;
                naf[pos] = (window as i8).wrapping_sub(width as i8);
            }

            pos += w;
        }

        naf
    }
}

/// `true` iff the backend value `s` is strictly less than `l`, via a
/// limb-wise borrow chain (no modular wraparound, unlike
/// [`Scalar52::sub`]).
fn is_less_than_l(s: &Scalar52) -> Choice {
    let mut borrow: i128 = 0;
    for i in 0..5 {
        borrow = (s.0[i] as i128) - (L.0[i] as i128) + (borrow >> 52);
    }
    // An arithmetic shift by the full width pulls the sign bit down into
    // bit 0: borrow < 0 (i.e. s < l) iff that bit is 1.
    Choice::from(((borrow >> 127) & 1) as u8)
}

impl<'a> Add<&'a Scalar> for &Scalar {
    type Output = Scalar;
    fn add(self, other: &'a Scalar) -> Scalar {
        Scalar::add(self, other)
    }
}
impl Add<Scalar> for Scalar {
    type Output = Scalar;
    fn add(self, other: Scalar) -> Scalar {
        Scalar::add(&self, &other)
    }
}
impl AddAssign<&Scalar> for Scalar {
    fn add_assign(&mut self, other: &Scalar) {
        *self = Scalar::add(self, other);
    }
}

impl<'a> Sub<&'a Scalar> for &Scalar {
    type Output = Scalar;
    fn sub(self, other: &'a Scalar) -> Scalar {
        Scalar::sub(self, other)
    }
}
impl Sub<Scalar> for Scalar {
    type Output = Scalar;
    fn sub(self, other: Scalar) -> Scalar {
        Scalar::sub(&self, &other)
    }
}
impl SubAssign<&Scalar> for Scalar {
    fn sub_assign(&mut self, other: &Scalar) {
        *self = Scalar::sub(self, other);
    }
}

impl<'a> Mul<&'a Scalar> for &Scalar {
    type Output = Scalar;
    fn mul(self, other: &'a Scalar) -> Scalar {
        Scalar::mul(self, other)
    }
}
impl Mul<Scalar> for Scalar {
    type Output = Scalar;
    fn mul(self, other: Scalar) -> Scalar {
        Scalar::mul(&self, &other)
    }
}
impl MulAssign<&Scalar> for Scalar {
    fn mul_assign(&mut self, other: &Scalar) {
        *self = Scalar::mul(self, other);
    }
}

impl Neg for &Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        Scalar::negate(self)
    }
}
impl Neg for Scalar {
    type Output = Scalar;
    fn neg(self) -> Scalar {
        Scalar::negate(&self)
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::Scalar;
    use serde::de::Visitor;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Scalar {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_bytes(&self.bytes)
        }
    }

    struct ScalarVisitor;

    impl<'de> Visitor<'de> for ScalarVisitor {
        type Value = Scalar;

        fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            formatter.write_str("32 bytes, representing an integer less than the group order")
        }

        fn visit_bytes<E>(self, value: &[u8]) -> Result<Scalar, E>
        where
            E: serde::de::Error,
        {
            if value.len() != 32 {
                return Err(serde::de::Error::invalid_length(value.len(), &self));
            }
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(value);
            Scalar::decode(&bytes)
                .ok_or_else(|| serde::de::Error::custom("scalar bytes were not canonical"))
        }
    }

    impl<'de> Deserialize<'de> for Scalar {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_bytes(ScalarVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_canonical() {
        assert!(bool::from(Scalar::ZERO.is_canonical()));
    }

    #[test]
    fn set_unsigned_matches_decode() {
        let mut expected = [0u8; 32];
        expected[0] = 0xef;
        expected[1] = 0xcd;
        expected[2] = 0xab;
        assert_eq!(Scalar::set_unsigned(0x00ab_cdef).encode(), expected);
        assert_eq!(Scalar::set_unsigned(0), Scalar::ZERO);
        assert_eq!(Scalar::set_unsigned(1), Scalar::ONE);
    }

    #[test]
    fn destroy_zeroes_bytes() {
        let mut s = Scalar::decode(&{
            let mut b = [0u8; 32];
            b[0] = 99;
            b
        })
        .unwrap();
        s.destroy();
        assert_eq!(s.encode(), [0u8; 32]);
    }

    #[test]
    fn l_minus_one_is_canonical_but_l_is_not() {
        let l_bytes = L.to_bytes();
        assert!(!bool::from(Scalar::decode(&l_bytes).is_some()));

        let l_minus_one = Scalar52::sub(&L, &Scalar52::ONE).to_bytes();
        assert!(Scalar::decode(&l_minus_one).is_some());
    }

    #[test]
    fn add_sub_roundtrip() {
        let a = Scalar::decode(&{
            let mut b = [0u8; 32];
            b[0] = 42;
            b
        })
        .unwrap();
        let b = Scalar::decode(&{
            let mut b = [0u8; 32];
            b[0] = 7;
            b
        })
        .unwrap();
        let sum = a.add(&b);
        assert_eq!(sum.sub(&b).encode(), a.encode());
    }

    #[test]
    fn mul_one_is_identity() {
        let a = Scalar::decode(&{
            let mut b = [0u8; 32];
            b[0] = 200;
            b[1] = 7;
            b
        })
        .unwrap();
        assert_eq!(a.mul(&Scalar::ONE).encode(), a.encode());
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        let a = Scalar::decode(&{
            let mut b = [0u8; 32];
            b[0] = 11;
            b
        })
        .unwrap();
        let a_inv = a.invert().unwrap();
        assert_eq!(a.mul(&a_inv).encode(), Scalar::ONE.encode());
    }

    #[test]
    fn invert_of_zero_fails() {
        assert!(Scalar::ZERO.invert().is_none());
    }

    #[test]
    fn decode_long_of_32_canonical_bytes_matches_decode() {
        let mut bytes = [0u8; 32];
        bytes[0] = 200;
        bytes[5] = 3;
        let direct = Scalar::decode(&bytes).unwrap();
        let long = Scalar::decode_long(&bytes);
        assert_eq!(direct.encode(), long.encode());
    }

    #[test]
    fn decode_long_reduces_64_bytes() {
        let bytes = [0xffu8; 64];
        let reduced = Scalar::decode_long(&bytes);
        assert!(bool::from(reduced.is_canonical()));
    }

    #[test]
    fn as_radix_16_round_trips_small_values() {
        let a = Scalar::decode(&{
            let mut b = [0u8; 32];
            b[0] = 0xAB;
            b[1] = 0x03;
            b
        })
        .unwrap();
        let digits = a.as_radix_16();
        let mut acc = Scalar::ZERO;
        let sixteen = Scalar::decode(&{
            let mut b = [0u8; 32];
            b[0] = 16;
            b
        })
        .unwrap();
        for &d in digits.iter().rev() {
            acc = acc.mul(&sixteen);
            if d >= 0 {
                let mut db = [0u8; 32];
                db[0] = d as u8;
                acc = acc.add(&Scalar::decode(&db).unwrap());
            } else {
                let mut db = [0u8; 32];
                db[0] = (-d) as u8;
                acc = acc.sub(&Scalar::decode(&db).unwrap());
            }
        }
        assert_eq!(acc.encode(), a.encode());
    }
}
