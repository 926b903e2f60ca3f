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

//! Field arithmetic modulo \\(p = 2\^{255} - 19\\), using five 51-bit
//! limbs (so a `u64` has 13 bits of headroom above the nominal
//! place-value for carries to live in during a multiplication).
//!
//! Limbs are *not* kept canonical between operations: `add`/`sub`/`mul`/
//! `square` all return a "weakly reduced" representation (each limb fits
//! below \\(2\^{52}\\)) and only [`FieldElement51::strong_reduce`] (called
//! internally by [`FieldElement51::as_bytes`], [`FieldElement51::is_negative`]
//! and equality) forces the unique representative in \\([0, p)\\). This
//! mirrors the real cost structure of the arithmetic: reducing after every
//! limb op would be wasted work, since a chain of several multiplications
//! tolerates the non-canonical headroom just fine.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

use crate::backend::serial::u64::constants::SQRT_M1;

/// A field element, represented as five `u64`s in radix \\(2\^{51}\\).
///
/// Invariant: limbs `[0,1,2,3,4]` are each less than \\(2\^{54}\\) (we
/// allow a few bits above the `2^{51}`-after-weak-reduction bound so a
/// handful of additions can be chained before a `weak_reduce` is
/// required; `mul`/`square` always weak-reduce their output).
#[derive(Copy, Clone)]
pub(crate) struct FieldElement51(pub(crate) [u64; 5]);

impl Debug for FieldElement51 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "FieldElement51({:?})", &self.0[..])
    }
}

impl Eq for FieldElement51 {}
impl PartialEq for FieldElement51 {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl ConstantTimeEq for FieldElement51 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.as_bytes().ct_eq(&other.as_bytes())
    }
}

impl ConditionallySelectable for FieldElement51 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        FieldElement51([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }

    fn conditional_assign(&mut self, other: &Self, choice: Choice) {
        self.0[0].conditional_assign(&other.0[0], choice);
        self.0[1].conditional_assign(&other.0[1], choice);
        self.0[2].conditional_assign(&other.0[2], choice);
        self.0[3].conditional_assign(&other.0[3], choice);
        self.0[4].conditional_assign(&other.0[4], choice);
    }
}

impl ConditionallyNegatable for FieldElement51 {
    fn conditional_negate(&mut self, choice: Choice) {
        let neg = self.neg();
        self.conditional_assign(&neg, choice);
    }
}

/// u64 * u64 -> u128 multiply helper, named the way upstream dalek names
/// it: the whole module is built on this one primitive.
#[inline(always)]
fn m(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

/// Low 51 bits.
const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

impl FieldElement51 {
    pub(crate) const ZERO: FieldElement51 = FieldElement51([0, 0, 0, 0, 0]);
    pub(crate) const ONE: FieldElement51 = FieldElement51([1, 0, 0, 0, 0]);

    pub(crate) const fn from_limbs(limbs: [u64; 5]) -> FieldElement51 {
        FieldElement51(limbs)
    }

    /// Load a field element from 32 little-endian bytes, reducing the
    /// high bit(s) away per `hi_nmask` but *not* checking canonicity —
    /// that's `from_bytes`'s job.
    fn load8(input: &[u8]) -> u64 {
        (input[0] as u64)
            | ((input[1] as u64) << 8)
            | ((input[2] as u64) << 16)
            | ((input[3] as u64) << 24)
            | ((input[4] as u64) << 32)
            | ((input[5] as u64) << 40)
            | ((input[6] as u64) << 48)
            | ((input[7] as u64) << 56)
    }

    /// Unpacks a field element from 32 bytes, without checking that the
    /// result is a canonical representative. Used internally by
    /// [`FieldElement51::from_bytes`] (which does check) and by the
    /// Ristretto decoder, which performs its own canonicity check on the
    /// *scalar* `s` before this is ever called.
    pub(crate) fn from_bytes(bytes: &[u8; 32]) -> FieldElement51 {
        let low_51_bit_mask = (1u64 << 51) - 1;
        FieldElement51([
            Self::load8(&bytes[0..8]) & low_51_bit_mask,
            (Self::load8(&bytes[6..14]) >> 3) & low_51_bit_mask,
            (Self::load8(&bytes[12..20]) >> 6) & low_51_bit_mask,
            (Self::load8(&bytes[19..27]) >> 1) & low_51_bit_mask,
            (Self::load8(&bytes[24..32]) >> 12) & low_51_bit_mask,
        ])
    }

    /// Reduce this field element's limbs so each fits below
    /// \\(2\^{51+1}\\) (weak reduction, per spec.md §4.1): one
    /// carry-propagation pass, folding the overflow above \\(2\^{255}\\)
    /// back in multiplied by 19 (since \\(2\^{255} \equiv 19 \pmod p\\)).
    /// This is *not* guaranteed to be the canonical representative.
    #[inline(always)]
    fn weak_reduce(mut limbs: [u64; 5]) -> FieldElement51 {
        let mut c: u64;
        c = limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] += c;
        c = limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] += c;
        c = limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] += c;
        c = limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] += c;
        c = limbs[4] >> 51;
        limbs[4] &= LOW_51_BIT_MASK;
        limbs[0] += c * 19;
        c = limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] += c;

        FieldElement51(limbs)
    }

    /// Strong reduction: weak-reduce, then conditionally subtract `p` so
    /// the result is the unique representative in `[0, p)`. This is the
    /// only place canonicity is enforced; every other operation on
    /// `FieldElement51` tolerates (and usually produces) a non-canonical
    /// representation.
    fn strong_reduce_limbs(&self) -> [u64; 5] {
        let FieldElement51(mut limbs) = FieldElement51::weak_reduce(self.0);

        // Determine if the value is >= p by computing limbs - p and
        // checking whether that underflows (branchlessly): add 19 to the
        // bottom limb (the two's-complement trick for subtracting p =
        // 2^255 - 19, i.e. adding -p = -(2^255) + 19, is equivalent to
        // subtracting 2^255 and adding 19); after propagating carries the
        // top limb's bit 51 tells us whether we underflowed.
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        // q = 1 iff limbs >= p (mod 2^255), so conditionally subtract p.
        limbs[0] += 19 * q;

        let mut c: u64;
        c = limbs[0] >> 51;
        limbs[0] &= LOW_51_BIT_MASK;
        limbs[1] += c;
        c = limbs[1] >> 51;
        limbs[1] &= LOW_51_BIT_MASK;
        limbs[2] += c;
        c = limbs[2] >> 51;
        limbs[2] &= LOW_51_BIT_MASK;
        limbs[3] += c;
        c = limbs[3] >> 51;
        limbs[3] &= LOW_51_BIT_MASK;
        limbs[4] += c;
        limbs[4] &= LOW_51_BIT_MASK;

        limbs
    }

    /// Strong-reduce `self` in place to the canonical representative.
    pub(crate) fn strong_reduce(&mut self) {
        self.0 = self.strong_reduce_limbs();
    }

    /// Pack this field element into 32 little-endian bytes, forcing
    /// strong reduction first. When `with_hibit` is false, byte 31's top
    /// bit is asserted zero (guaranteed, since every canonical
    /// representative of a field element mod \\(2\^{255}-19\\) is less
    /// than \\(2\^{255}\\)).
    pub(crate) fn as_bytes(&self) -> [u8; 32] {
        let limbs = self.strong_reduce_limbs();

        let mut s = [0u8; 32];
        s[0] = limbs[0] as u8;
        s[1] = (limbs[0] >> 8) as u8;
        s[2] = (limbs[0] >> 16) as u8;
        s[3] = (limbs[0] >> 24) as u8;
        s[4] = (limbs[0] >> 32) as u8;
        s[5] = (limbs[0] >> 40) as u8;
        s[6] = ((limbs[0] >> 48) | (limbs[1] << 3)) as u8;
        s[7] = (limbs[1] >> 5) as u8;
        s[8] = (limbs[1] >> 13) as u8;
        s[9] = (limbs[1] >> 21) as u8;
        s[10] = (limbs[1] >> 29) as u8;
        s[11] = (limbs[1] >> 37) as u8;
        s[12] = ((limbs[1] >> 45) | (limbs[2] << 6)) as u8;
        s[13] = (limbs[2] >> 2) as u8;
        s[14] = (limbs[2] >> 10) as u8;
        s[15] = (limbs[2] >> 18) as u8;
        s[16] = (limbs[2] >> 26) as u8;
        s[17] = (limbs[2] >> 34) as u8;
        s[18] = (limbs[2] >> 42) as u8;
        s[19] = ((limbs[2] >> 50) | (limbs[3] << 1)) as u8;
        s[20] = (limbs[3] >> 7) as u8;
        s[21] = (limbs[3] >> 15) as u8;
        s[22] = (limbs[3] >> 23) as u8;
        s[23] = (limbs[3] >> 31) as u8;
        s[24] = (limbs[3] >> 39) as u8;
        s[25] = ((limbs[3] >> 47) | (limbs[4] << 4)) as u8;
        s[26] = (limbs[4] >> 4) as u8;
        s[27] = (limbs[4] >> 12) as u8;
        s[28] = (limbs[4] >> 20) as u8;
        s[29] = (limbs[4] >> 28) as u8;
        s[30] = (limbs[4] >> 36) as u8;
        s[31] = (limbs[4] >> 44) as u8;

        debug_assert_eq!(s[31] & 0b1000_0000, 0);

        s
    }

    /// The low bit of the canonical representative — used to implement
    /// spec's `lobit`.
    pub(crate) fn is_negative(&self) -> Choice {
        let bytes = self.as_bytes();
        (bytes[0] & 1).into()
    }

    /// `true` iff `self` is the zero residue (strongly reduced first).
    pub(crate) fn is_zero(&self) -> Choice {
        let zero = [0u8; 32];
        let bytes = self.as_bytes();
        bytes.ct_eq(&zero)
    }

    /// `-self`.
    pub(crate) fn neg(&self) -> FieldElement51 {
        FieldElement51::ZERO - self
    }

    /// Given `u` and `v`, compute an `r` such that `r^2 * v == u` (i.e.
    /// `r = sqrt(u/v)`) when `u/v` is a square, or `r^2 * v == -u`
    /// otherwise, returning a `Choice` that is true in the first case.
    /// This is the workhorse behind [`FieldElement51::invsqrt`] (spec's
    /// `isr`): `isr(x) = sqrt_ratio_i(1, x)`.
    pub(crate) fn sqrt_ratio_i(u: &FieldElement51, v: &FieldElement51) -> (Choice, FieldElement51) {
        let v3 = &v.square() * v;
        let v7 = &v3.square() * v;
        let mut r = &(u * &v3) * &(u * &v7).pow_p58();
        let check = v * &r.square();

        let i = &SQRT_M1;

        let correct_sign_sqrt = check.ct_eq(u);
        let flipped_sign_sqrt = check.ct_eq(&(-u));
        let flipped_sign_sqrt_i = check.ct_eq(&(&(-u) * i));

        let r_prime = &SQRT_M1 * &r;
        r.conditional_assign(&r_prime, flipped_sign_sqrt | flipped_sign_sqrt_i);

        // Choose the non-negative square root.
        let r_is_negative = r.is_negative();
        r.conditional_negate(r_is_negative);

        // `v == 0` forces `r == 0` and `check == 0` regardless of `u`,
        // which matches neither `u` nor `-u` when `u != 0` — so without
        // this, `invsqrt`'s `isr(0) = sqrt_ratio_i(1, 0)` would report
        // `ok = false` for a zero input, contradicting the documented
        // "if x == 0, a == 0 and ok == true" contract. OR it into the
        // result mask (the `u == 0` case is already covered: `check ==
        // 0 == u` makes `correct_sign_sqrt` true on its own).
        let was_nonzero_square = (correct_sign_sqrt | flipped_sign_sqrt) | (u.is_zero() | v.is_zero());

        (was_nonzero_square, r)
    }

    /// Inverse square root: spec's `isr(x) -> (a, ok)`. If `x == 0`,
    /// returns `(0, true)`; otherwise returns `a` with `a^2 * x` equal to
    /// `1` (and `ok = true`) if `x` is a quadratic residue, or equal to
    /// `i` (and `ok = false`) otherwise.
    pub(crate) fn invsqrt(&self) -> (Choice, FieldElement51) {
        FieldElement51::sqrt_ratio_i(&FieldElement51::ONE, self)
    }

    /// Raise this field element to the power \\((p-5)/8\\), the
    /// exponent used inside `sqrt_ratio_i`'s fixed 255-bit addition
    /// chain (11 multiplications, 250 squarings total across the helper
    /// `pow22501`).
    fn pow_p58(&self) -> FieldElement51 {
        let (t19, _t3) = self.pow22501();
        let t20 = t19.pow2k(2);
        &t20 * self
    }

    /// Returns `(self^((2^252)-3), self^11)`. Used only by `pow_p58`.
    fn pow22501(&self) -> (FieldElement51, FieldElement51) {
        let t0 = self.square();
        let t1 = t0.square().square();
        let t2 = self * &t1;
        let t3 = &t0 * &t2;
        let t4 = t3.square();
        let t5 = &t2 * &t4;
        let t6 = t5.pow2k(5);
        let t7 = &t6 * &t5;
        let t8 = t7.pow2k(10);
        let t9 = &t8 * &t7;
        let t10 = t9.pow2k(20);
        let t11 = &t10 * &t9;
        let t12 = t11.pow2k(10);
        let t13 = &t12 * &t7;
        let t14 = t13.pow2k(50);
        let t15 = &t14 * &t13;
        let t16 = t15.pow2k(100);
        let t17 = &t16 * &t15;
        let t18 = t17.pow2k(50);
        let t19 = &t18 * &t13;

        (t19, t3)
    }

    /// Modular inverse via Fermat's little theorem: `self^(p-2)`.
    /// Returns `ZERO` if `self` is zero (the caller, `scalar`/`ristretto`
    /// code, is responsible for treating that as FAILURE where the spec
    /// calls for it).
    pub(crate) fn invert(&self) -> FieldElement51 {
        // self^(p-2) = self^(2^255 - 21)
        let (t19, t3) = self.pow22501(); // self^(2^250 - 1), self^11
        let t20 = t19.pow2k(5); // self^(2^255 - 32)
        &t20 * &t3 // self^(2^255 - 21)
    }

    /// Compute `self^(2^k)` by `k` repeated squarings.
    fn pow2k(&self, mut k: u32) -> FieldElement51 {
        debug_assert!(k > 0);
        let mut z = self.square();
        k -= 1;
        while k > 0 {
            z = z.square();
            k -= 1;
        }
        z
    }

    /// Square this field element, weakly reduced.
    pub(crate) fn square(&self) -> FieldElement51 {
        self.square_internal()
    }

    /// Square and double: `2 * self^2`, used by the point-doubling
    /// formula (`2*X*Y`, `2*X*T`, ... terms) without an extra `add`.
    pub(crate) fn square2(&self) -> FieldElement51 {
        let mut square = self.square_internal();
        for i in 0..5 {
            square.0[i] *= 2;
        }
        FieldElement51::weak_reduce(square.0)
    }

    fn square_internal(&self) -> FieldElement51 {
        let a = &self.0;

        let aa = [a[0] * 2, a[1] * 2, a[2] * 2, a[3] * 2];

        let c0 = m(a[0], a[0]) + m(aa[1], a[4] * 19) + m(aa[2], a[3] * 19);
        let mut c1 = m(aa[0], a[1]) + m(aa[2], a[4] * 19) + m(a[3], a[3] * 19);
        let mut c2 = m(aa[0], a[2]) + m(a[1], a[1]) + m(aa[3], a[4] * 19);
        let mut c3 = m(aa[0], a[3]) + m(aa[1], a[2]) + m(a[4], a[4] * 19);
        let mut c4 = m(aa[0], a[4]) + m(aa[1], a[3]) + m(a[2], a[2]);

        let low_51_bit_mask = (1u128 << 51) - 1;

        c1 += (c0 >> 51) as u128;
        let r0 = (c0 & low_51_bit_mask) as u64;
        c2 += (c1 >> 51) as u128;
        let r1 = (c1 & low_51_bit_mask) as u64;
        c3 += (c2 >> 51) as u128;
        let r2 = (c2 & low_51_bit_mask) as u64;
        c4 += (c3 >> 51) as u128;
        let r3 = (c3 & low_51_bit_mask) as u64;
        let carry = (c4 >> 51) as u64;
        let r4 = (c4 & low_51_bit_mask) as u64;

        let mut out = [r0, r1, r2, r3, r4];
        out[0] += carry * 19;

        FieldElement51::weak_reduce(out)
    }
}

impl Mul<&FieldElement51> for &FieldElement51 {
    type Output = FieldElement51;

    /// Multiply two field elements, back-end-provided per spec.md §4.1:
    /// schoolbook multiplication over 5 limbs with `u128` accumulators,
    /// folding the high terms back in multiplied by 19, then one carry
    /// pass (weak reduction). Inputs are assumed weakly reduced; output
    /// is weakly reduced.
    fn mul(self, rhs: &FieldElement51) -> FieldElement51 {
        let a = &self.0;
        let b = &rhs.0;

        // 19 * b[1..5], used for the "wraparound" terms below.
        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let c0 = m(a[0], b[0]) + m(a[1], b4_19) + m(a[2], b3_19) + m(a[3], b2_19) + m(a[4], b1_19);
        let mut c1 =
            m(a[0], b[1]) + m(a[1], b[0]) + m(a[2], b4_19) + m(a[3], b3_19) + m(a[4], b2_19);
        let mut c2 =
            m(a[0], b[2]) + m(a[1], b[1]) + m(a[2], b[0]) + m(a[3], b4_19) + m(a[4], b3_19);
        let mut c3 =
            m(a[0], b[3]) + m(a[1], b[2]) + m(a[2], b[1]) + m(a[3], b[0]) + m(a[4], b4_19);
        let mut c4 = m(a[0], b[4]) + m(a[1], b[3]) + m(a[2], b[2]) + m(a[3], b[1]) + m(a[4], b[0]);

        let low_51_bit_mask = (1u128 << 51) - 1;

        c1 += (c0 >> 51) as u128;
        let r0 = (c0 & low_51_bit_mask) as u64;
        c2 += (c1 >> 51) as u128;
        let r1 = (c1 & low_51_bit_mask) as u64;
        c3 += (c2 >> 51) as u128;
        let r2 = (c2 & low_51_bit_mask) as u64;
        c4 += (c3 >> 51) as u128;
        let r3 = (c3 & low_51_bit_mask) as u64;
        let carry = (c4 >> 51) as u64;
        let r4 = (c4 & low_51_bit_mask) as u64;

        let mut out = [r0, r1, r2, r3, r4];
        out[0] += carry * 19;

        FieldElement51::weak_reduce(out)
    }
}

impl Mul<FieldElement51> for FieldElement51 {
    type Output = FieldElement51;
    fn mul(self, rhs: FieldElement51) -> FieldElement51 {
        &self * &rhs
    }
}

impl MulAssign<&FieldElement51> for FieldElement51 {
    fn mul_assign(&mut self, rhs: &FieldElement51) {
        *self = &*self * rhs;
    }
}

impl<'a> Add<&'a FieldElement51> for &FieldElement51 {
    type Output = FieldElement51;

    /// Raw limb-wise addition, per spec.md §4.1. No reduction: callers
    /// chain a bounded number of `add`s before a `mul`/`square`
    /// re-reduces, relying on the limb headroom documented on
    /// [`FieldElement51`].
    fn add(self, rhs: &'a FieldElement51) -> FieldElement51 {
        FieldElement51([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
            self.0[4] + rhs.0[4],
        ])
    }
}

impl Add<FieldElement51> for FieldElement51 {
    type Output = FieldElement51;
    fn add(self, rhs: FieldElement51) -> FieldElement51 {
        &self + &rhs
    }
}

impl AddAssign<&FieldElement51> for FieldElement51 {
    fn add_assign(&mut self, rhs: &FieldElement51) {
        *self = &*self + rhs;
    }
}

/// `2*p`'s limbs, biased so that limb-wise subtraction never underflows
/// a `u64`: spec.md §4.1 ("`sub` first biases the minuend by a
/// curve-specific constant"). `p = 2^255 - 19`, so `2p`'s limbs in radix
/// `2^51` are `2*2^51 - 38` in the bottom limb and `2*2^51 - 2` above.
const TWO_P: [u64; 5] = [
    36028797018963664, // 2*(2^51 - 19)
    36028797018963952, // 2*(2^51 - 1)
    36028797018963952,
    36028797018963952,
    36028797018963952,
];

impl<'a> Sub<&'a FieldElement51> for &FieldElement51 {
    type Output = FieldElement51;

    /// Raw limb-wise subtraction, per spec.md §4.1: bias the minuend by
    /// `2p` first so every limb subtraction stays non-negative, then let
    /// the next `weak_reduce` (happening implicitly inside the next
    /// `mul`/`square`, or explicitly if the caller needs it sooner) fold
    /// the bias back out.
    fn sub(self, rhs: &'a FieldElement51) -> FieldElement51 {
        FieldElement51::weak_reduce([
            (self.0[0] + TWO_P[0]) - rhs.0[0],
            (self.0[1] + TWO_P[1]) - rhs.0[1],
            (self.0[2] + TWO_P[2]) - rhs.0[2],
            (self.0[3] + TWO_P[3]) - rhs.0[3],
            (self.0[4] + TWO_P[4]) - rhs.0[4],
        ])
    }
}

impl Sub<FieldElement51> for FieldElement51 {
    type Output = FieldElement51;
    fn sub(self, rhs: FieldElement51) -> FieldElement51 {
        &self - &rhs
    }
}

impl SubAssign<&FieldElement51> for FieldElement51 {
    fn sub_assign(&mut self, rhs: &FieldElement51) {
        *self = &*self - rhs;
    }
}

impl Neg for &FieldElement51 {
    type Output = FieldElement51;
    fn neg(self) -> FieldElement51 {
        FieldElement51::neg(self)
    }
}

impl Neg for FieldElement51 {
    type Output = FieldElement51;
    fn neg(self) -> FieldElement51 {
        FieldElement51::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_roundtrip() {
        let a = FieldElement51::from_limbs([5, 4, 3, 2, 1]);
        let b = FieldElement51::from_limbs([1, 1, 1, 1, 1]);
        let sum = &a + &b;
        let back = &sum - &b;
        assert_eq!(back.as_bytes(), a.as_bytes());
    }

    #[test]
    fn mul_identity() {
        let a = FieldElement51::from_bytes(&[7u8; 32]);
        let one = FieldElement51::ONE;
        assert_eq!((&a * &one).as_bytes(), a.as_bytes());
    }

    #[test]
    fn square_matches_mul_self() {
        let a = FieldElement51::from_bytes(&[9u8; 32]);
        assert_eq!(a.square().as_bytes(), (&a * &a).as_bytes());
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(FieldElement51::ZERO.is_zero().unwrap_u8(), 1);
        assert_eq!(FieldElement51::ONE.is_zero().unwrap_u8(), 0);
    }

    #[test]
    fn invert_is_multiplicative_inverse() {
        let a = FieldElement51::from_bytes(&[3u8; 32]);
        let a_inv = a.invert();
        let product = &a * &a_inv;
        assert_eq!(product.as_bytes(), FieldElement51::ONE.as_bytes());
    }

    #[test]
    fn invsqrt_of_zero_is_zero_and_ok() {
        let (ok, root) = FieldElement51::ZERO.invsqrt();
        assert_eq!(ok.unwrap_u8(), 1);
        assert_eq!(root.as_bytes(), FieldElement51::ZERO.as_bytes());
    }

    #[test]
    fn invsqrt_of_square_is_ok() {
        let a = FieldElement51::from_bytes(&[2u8; 32]);
        let asq = a.square();
        let (ok, _root) = asq.invsqrt();
        assert_eq!(ok.unwrap_u8(), 1);
    }
}
