// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// Portions Copyright 2017 Brian Smith
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>
// - Brian Smith <brian@briansmith.org>

//! Scalar arithmetic modulo \\( \ell = 2\^{252} +
//! 27742317777372353535851937790883648493 \\), using five 52-bit limbs.
//!
//! Reduction of a wide (512-bit, or arbitrary-length per
//! [`Scalar52::from_bytes_wide`]) product is done by a bit-serial
//! double-and-add pass against [`crate::backend::serial::u64::constants::L`]
//! rather than the Montgomery-form reduction upstream curve25519-dalek
//! uses. This costs a few hundred extra additions per multiplication,
//! but needs no Montgomery radix/`LFACTOR`/`RR` constants beyond `L`
//! itself — one well-known number instead of four derived ones — which
//! matters more here than raw speed, since this crate's scalar
//! multiplication is not a hot loop the way a signing server's would be.

use crate::backend::serial::u64::constants as c;

/// An unpacked scalar, carried in five 52-bit limbs.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Scalar52(pub(crate) [u64; 5]);

const MASK: u64 = (1u64 << 52) - 1;

impl Scalar52 {
    pub(crate) const ZERO: Scalar52 = Scalar52([0, 0, 0, 0, 0]);
    pub(crate) const ONE: Scalar52 = Scalar52([1, 0, 0, 0, 0]);

    /// Unpack a 32-byte little-endian integer into 52-bit limbs. Does
    /// not reduce and does not check canonicity — both are the caller's
    /// job (see `scalar::Scalar::decode`).
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> Scalar52 {
        let mut words = [0u64; 4];
        for i in 0..4 {
            for j in 0..8 {
                words[i] |= (bytes[(i * 8) + j] as u64) << (j * 8);
            }
        }

        let mask = MASK;
        let top_mask = (1u64 << 48) - 1;
        let mut s = Scalar52::ZERO;

        s.0[0] = words[0] & mask;
        s.0[1] = ((words[0] >> 52) | (words[1] << 12)) & mask;
        s.0[2] = ((words[1] >> 40) | (words[2] << 24)) & mask;
        s.0[3] = ((words[2] >> 28) | (words[3] << 36)) & mask;
        s.0[4] = (words[3] >> 16) & top_mask;

        s
    }

    /// Pack this (assumed already reduced, or at least < 2^256) scalar
    /// into 32 little-endian bytes.
    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let mut s = [0u8; 32];

        s[0] = self.0[0] as u8;
        s[1] = (self.0[0] >> 8) as u8;
        s[2] = (self.0[0] >> 16) as u8;
        s[3] = (self.0[0] >> 24) as u8;
        s[4] = (self.0[0] >> 32) as u8;
        s[5] = (self.0[0] >> 40) as u8;
        s[6] = ((self.0[0] >> 48) | (self.0[1] << 4)) as u8;
        s[7] = (self.0[1] >> 4) as u8;
        s[8] = (self.0[1] >> 12) as u8;
        s[9] = (self.0[1] >> 20) as u8;
        s[10] = (self.0[1] >> 28) as u8;
        s[11] = (self.0[1] >> 36) as u8;
        s[12] = (self.0[1] >> 44) as u8;
        s[13] = self.0[2] as u8;
        s[14] = (self.0[2] >> 8) as u8;
        s[15] = (self.0[2] >> 16) as u8;
        s[16] = (self.0[2] >> 24) as u8;
        s[17] = (self.0[2] >> 32) as u8;
        s[18] = (self.0[2] >> 40) as u8;
        s[19] = ((self.0[2] >> 48) | (self.0[3] << 4)) as u8;
        s[20] = (self.0[3] >> 4) as u8;
        s[21] = (self.0[3] >> 12) as u8;
        s[22] = (self.0[3] >> 20) as u8;
        s[23] = (self.0[3] >> 28) as u8;
        s[24] = (self.0[3] >> 36) as u8;
        s[25] = (self.0[3] >> 44) as u8;
        s[26] = self.0[4] as u8;
        s[27] = (self.0[4] >> 8) as u8;
        s[28] = (self.0[4] >> 16) as u8;
        s[29] = (self.0[4] >> 24) as u8;
        s[30] = (self.0[4] >> 32) as u8;
        s[31] = (self.0[4] >> 40) as u8;

        s
    }

    /// `a + b` mod \\(\ell\\). Both inputs must already be canonical
    /// (< \\(\ell\\)); the result is too.
    pub(crate) fn add(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut sum = Scalar52::ZERO;
        let mask = MASK;

        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = a.0[i] + b.0[i] + (carry >> 52);
            sum.0[i] = carry & mask;
        }

        Scalar52::sub(&sum, &c::L)
    }

    /// `a - b` mod \\(\ell\\).
    pub(crate) fn sub(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        let mut difference = Scalar52::ZERO;
        let mask = MASK;

        let mut borrow: u64 = 0;
        for i in 0..5 {
            borrow = a.0[i].wrapping_sub(b.0[i] + (borrow >> 63));
            difference.0[i] = borrow & mask;
        }

        // `borrow`'s top bit is set iff a - b underflowed; turn that into
        // an all-ones/all-zeros mask and conditionally add `l` back.
        let underflow_mask = ((borrow >> 63) ^ 1).wrapping_sub(1);
        let mut carry: u64 = 0;
        for i in 0..5 {
            carry = (carry >> 52) + difference.0[i] + (underflow_mask & c::L.0[i]);
            difference.0[i] = carry & mask;
        }

        difference
    }

    /// `a * b` mod \\(\ell\\).
    pub(crate) fn mul(a: &Scalar52, b: &Scalar52) -> Scalar52 {
        Scalar52::reduce_wide(&Scalar52::mul_internal(a, b))
    }

    fn square(&self) -> Scalar52 {
        Scalar52::mul(self, self)
    }

    /// `a / 2` mod \\(\ell\\): if `a` is even, shift right; otherwise add
    /// \\(\ell\\) first (odd + odd = even) and then shift.
    pub(crate) fn halve(a: &Scalar52) -> Scalar52 {
        let mask = MASK;
        let is_odd = a.0[0] & 1;
        let addend = if is_odd == 1 { c::L } else { Scalar52::ZERO };

        let mut carry: u64 = 0;
        let mut sum = Scalar52::ZERO;
        for i in 0..5 {
            carry = (carry >> 52) + a.0[i] + addend.0[i];
            sum.0[i] = carry & mask;
        }

        let mut result = Scalar52::ZERO;
        for i in 0..4 {
            result.0[i] = (sum.0[i] >> 1) | ((sum.0[i + 1] & 1) << 51);
        }
        result.0[4] = sum.0[4] >> 1;

        result
    }

    /// Compute the multiplicative inverse of this scalar modulo
    /// \\(\ell\\) via Fermat's little theorem: `self^(ell-2)`. Returns
    /// `ZERO` if `self` is `ZERO` — callers (`scalar::Scalar::invert`)
    /// turn that into the spec's FAILURE mask.
    pub(crate) fn invert(&self) -> Scalar52 {
        let exponent = Scalar52::sub(&c::L, &Scalar52([2, 0, 0, 0, 0]));
        let exponent_bytes = exponent.to_bytes();
        let bit = |i: usize| -> u8 { (exponent_bytes[i / 8] >> (i % 8)) & 1 };

        let mut top = 255;
        while bit(top) == 0 && top > 0 {
            top -= 1;
        }

        let mut acc = *self;
        let mut i = top;
        while i > 0 {
            i -= 1;
            acc = acc.square();
            if bit(i) == 1 {
                acc = Scalar52::mul(&acc, self);
            }
        }

        acc
    }

    /// `a * b` as an unreduced product, stored as nine `u128`
    /// accumulators (schoolbook multiplication over five 52-bit limbs —
    /// the top limb is the only one with room for 48 bits, but the
    /// extra headroom costs nothing here since [`Scalar52::reduce_wide`]
    /// carry-propagates the whole thing into a flat bit array before
    /// using it).
    pub(crate) fn mul_internal(a: &Scalar52, b: &Scalar52) -> [u128; 9] {
        let mut z = [0u128; 9];

        z[0] = m(a.0[0], b.0[0]);
        z[1] = m(a.0[0], b.0[1]) + m(a.0[1], b.0[0]);
        z[2] = m(a.0[0], b.0[2]) + m(a.0[1], b.0[1]) + m(a.0[2], b.0[0]);
        z[3] = m(a.0[0], b.0[3]) + m(a.0[1], b.0[2]) + m(a.0[2], b.0[1]) + m(a.0[3], b.0[0]);
        z[4] = m(a.0[0], b.0[4])
            + m(a.0[1], b.0[3])
            + m(a.0[2], b.0[2])
            + m(a.0[3], b.0[1])
            + m(a.0[4], b.0[0]);
        z[5] = m(a.0[1], b.0[4]) + m(a.0[2], b.0[3]) + m(a.0[3], b.0[2]) + m(a.0[4], b.0[1]);
        z[6] = m(a.0[2], b.0[4]) + m(a.0[3], b.0[3]) + m(a.0[4], b.0[2]);
        z[7] = m(a.0[3], b.0[4]) + m(a.0[4], b.0[3]);
        z[8] = m(a.0[4], b.0[4]);

        z
    }

    /// Carry-propagate a `mul_internal`-shaped product (base \\(2\^{52}\\),
    /// 9 limbs, i.e. up to 468 bits, with headroom) into a flat bit
    /// array, most significant bit first, suitable for the double-and-add
    /// reduction both [`Scalar52::reduce_wide`] and
    /// [`Scalar52::from_bytes_wide`] share.
    fn product_bits(limbs: &[u128; 9]) -> [u8; 512] {
        let mut carried = [0u64; 10];
        let mut carry: u128 = 0;
        for i in 0..9 {
            carry += limbs[i];
            carried[i] = (carry & (MASK as u128)) as u64;
            carry >>= 52;
        }
        carried[9] = carry as u64;

        let mut bits = [0u8; 512];
        for (i, bit) in bits.iter_mut().enumerate() {
            let limb = i / 52;
            let offset = i % 52;
            *bit = ((carried[limb] >> offset) & 1) as u8;
        }
        bits
    }

    /// Reduce a `mul_internal`-shaped wide product modulo \\(\ell\\) by a
    /// constant-time double-and-add pass over its bits, most significant
    /// first: `acc = 0; for each bit, acc = 2*acc + bit (mod l)`.
    pub(crate) fn reduce_wide(limbs: &[u128; 9]) -> Scalar52 {
        let bits = Scalar52::product_bits(limbs);

        let mut acc = Scalar52::ZERO;
        for i in (0..512).rev() {
            acc = Scalar52::add(&acc, &acc);
            if bits[i] == 1 {
                acc = Scalar52::add(&acc, &Scalar52::ONE);
            }
        }
        acc
    }

    /// Reduce an arbitrary-length little-endian byte string modulo
    /// \\(\ell\\), per spec.md §4.2's `decode_long`: this is the wide
    /// reduction `Scalar::from_bytes_mod_order_wide` and
    /// `Scalar::decode_long` both build on. Equivalent to (but simpler
    /// than) chunking the input into 32-byte pieces and folding each in
    /// via `r <- r*2^256 + chunk`, since that's exactly Horner's rule
    /// applied to the little-endian digits of the whole buffer.
    pub(crate) fn from_bytes_wide(bytes: &[u8]) -> Scalar52 {
        let mut acc = Scalar52::ZERO;
        for &byte in bytes.iter().rev() {
            for bit_index in (0..8).rev() {
                acc = Scalar52::add(&acc, &acc);
                if (byte >> bit_index) & 1 == 1 {
                    acc = Scalar52::add(&acc, &Scalar52::ONE);
                }
            }
        }
        acc
    }
}

#[inline(always)]
fn m(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_roundtrip() {
        let mut bytes = [0u8; 32];
        bytes[0] = 7;
        bytes[17] = 3;
        let s = Scalar52::from_bytes(&bytes);
        assert_eq!(s.to_bytes(), bytes);
    }

    #[test]
    fn add_then_sub_is_identity() {
        let a = Scalar52::from_bytes(&{
            let mut b = [0u8; 32];
            b[0] = 9;
            b
        });
        let b = Scalar52::from_bytes(&{
            let mut b = [0u8; 32];
            b[0] = 4;
            b
        });
        let sum = Scalar52::add(&a, &b);
        let back = Scalar52::sub(&sum, &b);
        assert_eq!(back.to_bytes(), a.to_bytes());
    }

    #[test]
    fn mul_one_is_identity() {
        let a = Scalar52::from_bytes(&{
            let mut b = [0u8; 32];
            b[0] = 200;
            b[3] = 9;
            b
        });
        let product = Scalar52::mul(&a, &Scalar52::ONE);
        assert_eq!(product.to_bytes(), a.to_bytes());
    }

    #[test]
    fn from_bytes_wide_of_l_is_zero() {
        let l_bytes = c::L.to_bytes();
        let reduced = Scalar52::from_bytes_wide(&l_bytes);
        assert_eq!(reduced.to_bytes(), Scalar52::ZERO.to_bytes());
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        let a = Scalar52::from_bytes(&{
            let mut b = [0u8; 32];
            b[0] = 5;
            b
        });
        let a_inv = a.invert();
        let product = Scalar52::mul(&a, &a_inv);
        assert_eq!(product.to_bytes(), Scalar52::ONE.to_bytes());
    }
}
