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

//! An implementation of **Ristretto**, which constructs a prime-order
//! group out of a non-prime-order Edwards curve.
//!
//! Ristretto is a modification of
//! [Mike Hamburg's Decaf](https://www.shiftleft.org/papers/decaf/decaf.pdf)
//! approach, applied to Curve25519/Edwards25519. The underlying curve
//! has cofactor 8: every group element has 8 distinct representations
//! as a curve point, which historically made it easy to build protocols
//! with subtle bugs around small-subgroup confinement and point
//! malleability. Ristretto's quotient construction collapses those 8
//! representations into one, so `RistrettoPoint` equality is exactly
//! group equality, and every group element has a single canonical
//! 32-byte encoding.
//!
//! Nothing here should be confused with an "Edwards point with the top
//! 3 bits cleared" or similar bit-twiddling hack: the quotient really
//! is a different mathematical object (a group of prime order \\(
//! \ell \\)), and this module's job is to make arithmetic and encoding
//! on that quotient transparent to callers who never need to think
//! about the curve underneath at all.

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use subtle::Choice;
use subtle::ConditionallyNegatable;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::backend::serial::scalar_mul;
use crate::backend::serial::u64::constants::{
    EDWARDS_D, EDWARDS_D_MINUS_ONE_SQUARED, INVSQRT_A_MINUS_D, ONE_MINUS_EDWARDS_D_SQUARED,
    SQRT_AD_MINUS_ONE, SQRT_M1,
};
use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::traits::{Identity, IsIdentity};

/// The canonical 32-byte encoding of a [`RistrettoPoint`].
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct CompressedRistretto(pub [u8; 32]);

impl core::fmt::Debug for CompressedRistretto {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CompressedRistretto: {:?}", self.0)
    }
}

impl Default for CompressedRistretto {
    fn default() -> CompressedRistretto {
        CompressedRistretto([0u8; 32])
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for CompressedRistretto {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl CompressedRistretto {
    /// View this encoding as a byte slice.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Consume this encoding, returning its bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Build a `CompressedRistretto` directly from 32 bytes, without
    /// attempting to decode them. Decoding (and thus validating the
    /// encoding) happens in [`CompressedRistretto::decode`].
    pub fn from_bytes(bytes: [u8; 32]) -> CompressedRistretto {
        CompressedRistretto(bytes)
    }

    /// Overwrite this encoding's bytes with zero, spec.md's `destroy`.
    /// `CompressedRistretto` is `Copy`, so there's no automatic
    /// zeroize-on-drop to lean on; call this explicitly wherever an
    /// encoding's lifetime ends and its bytes must not linger.
    pub fn destroy(&mut self) {
        #[cfg(feature = "zeroize")]
        {
            self.zeroize();
        }
        #[cfg(not(feature = "zeroize"))]
        {
            crate::backend::serial::wordops::clear_bytes(&mut self.0);
        }
    }

    /// Attempt to decode this encoding as a ristretto255 group element,
    /// spec.md §4.4's `decode`, with `allow_identity` always `true` — the
    /// all-zero encoding decodes to the group identity. Use
    /// [`CompressedRistretto::decode_allow_identity`] to reject it
    /// instead.
    pub fn decode(&self) -> Option<RistrettoPoint> {
        self.decode_allow_identity(true)
    }

    /// As [`CompressedRistretto::decode`], but additionally rejects the
    /// identity element when `allow_identity` is `false` — spec.md
    /// §4.4's full `decode(bytes, allow_identity)`, for protocols (e.g.
    /// key agreement) where an identity public key must be treated as a
    /// malformed input rather than a valid one. Returns `None` (FAILURE)
    /// for any of the seven families of invalid encodings spec.md's edge
    /// cases call out: a non-canonical field element, a negative `s`, a
    /// non-square `s^2 * (stuff)`, a negative `t`, `y == 0`, or (when
    /// `allow_identity` is false) `x == 0`.
    pub fn decode_allow_identity(&self, allow_identity: bool) -> Option<RistrettoPoint> {
        // Step 1: reject any encoding that isn't the canonical
        // representative of a non-negative field element.
        let s = FieldElement::from_bytes(&self.0);
        let s_bytes_check = s.as_bytes();
        let s_encoding_is_canonical = s_bytes_check.ct_eq(&self.0);
        let s_is_negative = s.is_negative();

        if s_encoding_is_canonical.unwrap_u8() == 0 || s_is_negative.unwrap_u8() == 1 {
            return None;
        }

        // Step 2: recover the candidate Edwards point.
        let one = FieldElement::ONE;
        let ss = s.square();
        let u1 = &one - &ss; // 1 - s^2
        let u2 = &one + &ss; // 1 + s^2
        let u2_sqr = u2.square(); // (1 + s^2)^2

        // v = a*d*(1+s^2)^2 - (1-s^2)^2, with a = -1.
        let v = &(&(-&EDWARDS_D) * &u1.square()) - &u2_sqr;

        let (ok, invsqrt) = (&v * &u2_sqr).invsqrt();

        let den_x = &invsqrt * &u2; // 1/sqrt(v) * 1/u2 ... (see Dx below)
        let den_y = &invsqrt * &(&den_x * &v);

        let mut x = &(&s + &s) * &den_x;
        let x_is_negative = x.is_negative();
        x.conditional_negate(x_is_negative);

        let y = &u1 * &den_y;
        let t = &x * &y;

        if ok.unwrap_u8() == 0
            || t.is_negative().unwrap_u8() == 1
            || y.is_zero().unwrap_u8() == 1
            || (!allow_identity && x.is_zero().unwrap_u8() == 1)
        {
            None
        } else {
            Some(RistrettoPoint(EdwardsPoint {
                X: x,
                Y: y,
                Z: one,
                T: t,
            }))
        }
    }

    /// Combined decode → constant-time scalar multiplication → encode,
    /// spec.md §4.6's `direct_scalarmul`. If `short_circuit` is `true`,
    /// a malformed input returns `None` as soon as decode fails —
    /// faster, but variable-time in whether the *input* was valid (never
    /// in the scalar). If `false`, a throwaway multiplication still runs
    /// on failure so the function takes the same number of field
    /// operations whether or not `self` was a valid encoding; callers
    /// must decide which trade-off fits their threat model; there is no
    /// default, since accepting latency to keep the validity check
    /// constant-time is only "safe" for secret `self`, never for secret
    /// `scalar` alone.
    pub fn direct_scalarmul(
        &self,
        scalar: &Scalar,
        allow_identity: bool,
        short_circuit: bool,
    ) -> Option<[u8; 32]> {
        match self.decode_allow_identity(allow_identity) {
            Some(point) => Some(point.mul(scalar).compress().to_bytes()),
            None if short_circuit => None,
            None => {
                let _ = RistrettoPoint::identity().mul(scalar).compress();
                None
            }
        }
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::CompressedRistretto;
    use serde::de::Visitor;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for CompressedRistretto {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_bytes(&self.0)
        }
    }

    struct CompressedRistrettoVisitor;

    impl<'de> Visitor<'de> for CompressedRistrettoVisitor {
        type Value = CompressedRistretto;

        fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            formatter.write_str("32 bytes of ristretto255 point data")
        }

        fn visit_bytes<E>(self, value: &[u8]) -> Result<CompressedRistretto, E>
        where
            E: serde::de::Error,
        {
            if value.len() != 32 {
                return Err(serde::de::Error::invalid_length(value.len(), &self));
            }
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(value);
            Ok(CompressedRistretto(bytes))
        }
    }

    impl<'de> Deserialize<'de> for CompressedRistretto {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_bytes(CompressedRistrettoVisitor)
        }
    }
}

/// A group element of the ristretto255 group.
///
/// Internally stored as an [`EdwardsPoint`] — one of the 4 curve points
/// in this element's equivalence class — but [`RistrettoPoint`]'s
/// `PartialEq`/`Eq`, `Hash`-via-`compress`, and encode/decode all treat
/// the equivalence class as the value, so which representative happens
/// to be stored is never observable.
#[derive(Copy, Clone)]
pub struct RistrettoPoint(pub(crate) EdwardsPoint);

impl RistrettoPoint {
    /// Overwrite this point's coordinates, spec.md's `destroy`.
    /// `RistrettoPoint` is `Copy`, so there's no automatic
    /// zeroize-on-drop to lean on; call this explicitly wherever a
    /// point's lifetime ends and its coordinates must not linger.
    pub fn destroy(&mut self) {
        #[cfg(feature = "zeroize")]
        {
            self.zeroize();
        }
        #[cfg(not(feature = "zeroize"))]
        {
            crate::backend::serial::wordops::clear_limbs(&mut self.0.X.0);
            crate::backend::serial::wordops::clear_limbs(&mut self.0.Y.0);
            crate::backend::serial::wordops::clear_limbs(&mut self.0.Z.0);
            crate::backend::serial::wordops::clear_limbs(&mut self.0.T.0);
        }
    }

    /// Encode this point as its canonical 32-byte representative,
    /// spec.md §4.4's `encode`.
    pub fn compress(&self) -> CompressedRistretto {
        let mut X = self.0.X;
        let mut Y = self.0.Y;
        let Z = &self.0.Z;
        let T = &self.0.T;

        let u1 = &(Z + &Y) * &(Z - &Y);
        let u2 = &X * &Y;
        // u1*u2^2 is always square for a point in the image of
        // decode/elligator, so the `ok` flag from invsqrt is ignored.
        let (_, invsqrt) = (&u1 * &u2.square()).invsqrt();
        let i1 = &invsqrt * &u1;
        let i2 = &invsqrt * &u2;
        let z_inv = &i1 * &(&i2 * T);

        let mut den_inv = i2;

        let iX = &X * &SQRT_M1;
        let iY = &Y * &SQRT_M1;
        let enchanted_denominator = &i1 * &INVSQRT_A_MINUS_D;

        let rotate = (T * &z_inv).is_negative();

        X.conditional_assign(&iY, rotate);
        Y.conditional_assign(&iX, rotate);
        den_inv.conditional_assign(&enchanted_denominator, rotate);

        Y.conditional_negate((&X * &z_inv).is_negative());

        let mut s = &den_inv * &(Z - &Y);
        let s_is_negative = s.is_negative();
        s.conditional_negate(s_is_negative);

        CompressedRistretto(s.as_bytes())
    }

    /// `self + self`, spec.md §4.3's `double`.
    pub fn double(&self) -> RistrettoPoint {
        RistrettoPoint(self.0.double())
    }

    /// Constant-time scalar multiplication, spec.md §4.5 `scalarmul`.
    /// Safe to call with a secret scalar.
    pub fn mul(&self, scalar: &Scalar) -> RistrettoPoint {
        RistrettoPoint(self.0.mul(scalar))
    }

    /// Constant-time two-point two-scalar multiplication `a*A + b*B`,
    /// spec.md §4.5 `double_scalarmul`. Safe to call with secret
    /// scalars.
    pub fn double_scalarmul(a: &Scalar, A: &RistrettoPoint, b: &Scalar, B: &RistrettoPoint) -> RistrettoPoint {
        RistrettoPoint(scalar_mul::double_base::mul(a, &A.0, b, &B.0))
    }

    /// Constant-time single-point two-scalar multiplication
    /// `(s1*P, s2*P)`, spec.md §4.5 `dual_scalarmul`. Shares one
    /// lookup table for `P` between both scalars instead of running
    /// two independent multiplications. Safe to call with secret
    /// scalars.
    pub fn dual_scalarmul(s1: &Scalar, s2: &Scalar, P: &RistrettoPoint) -> (RistrettoPoint, RistrettoPoint) {
        let (q1, q2) = scalar_mul::dual_base::mul(s1, s2, &P.0);
        (RistrettoPoint(q1), RistrettoPoint(q2))
    }

    /// Variable-time `a*A + b*B`, for signature *verification* only —
    /// never call with a secret scalar.
    pub fn vartime_double_scalar_mul_basepoint(
        a: &Scalar,
        A: &RistrettoPoint,
        b: &Scalar,
    ) -> RistrettoPoint {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        RistrettoPoint(scalar_mul::vartime_double_base::mul(a, &A.0, b, &basepoint.0))
    }

    /// Map a uniformly-distributed 64-byte string to a group element,
    /// spec.md §4.6's `from_hash` (uniform variant): split the input in
    /// half, run each half through the Elligator2-on-Jacobi-quartic map
    /// [`elligator_ristretto_flavor`], and add the two results. Adding
    /// two independently-mapped points is what makes the overall map's
    /// output indistinguishable from uniform (a single Elligator2 call
    /// only covers half the curve's points).
    pub fn from_uniform_bytes(bytes: &[u8; 64]) -> RistrettoPoint {
        let mut r1_bytes = [0u8; 32];
        r1_bytes.copy_from_slice(&bytes[0..32]);
        let r_1 = FieldElement::from_bytes(&r1_bytes);
        let R_1 = RistrettoPoint::elligator_ristretto_flavor(&r_1);

        let mut r2_bytes = [0u8; 32];
        r2_bytes.copy_from_slice(&bytes[32..64]);
        let r_2 = FieldElement::from_bytes(&r2_bytes);
        let R_2 = RistrettoPoint::elligator_ristretto_flavor(&r_2);

        RistrettoPoint(&R_1.0 + &R_2.0)
    }

    /// Map a single 32-byte string to a group element, spec.md §4.6's
    /// `from_hash` (non-uniform variant): a single Elligator2 call,
    /// cheaper but — unlike [`RistrettoPoint::from_uniform_bytes`] —
    /// its image only covers half of the group's points, so this is
    /// only appropriate when the input already came from a wide-output
    /// hash and uniformity over the whole group isn't required.
    pub fn from_nonuniform_bytes(bytes: &[u8; 32]) -> RistrettoPoint {
        let r = FieldElement::from_bytes(bytes);
        RistrettoPoint::elligator_ristretto_flavor(&r)
    }

    /// Attempt to find one of the (up to 8) preimages of this point
    /// under [`elligator_ristretto_flavor`](RistrettoPoint::from_nonuniform_bytes)'s
    /// map, i.e. a 32-byte string `r0` with
    /// `RistrettoPoint::from_nonuniform_bytes(&r0) == *self`.
    ///
    /// The forward map factors as: a branch choice (`c = -1` or `c =
    /// r`, selected by whether `Ns/D` is a square), a quadratic in the
    /// branch's free variable, and the sign folded into `r0` by
    /// squaring it away as `r = i * r0^2`. Inverting walks that
    /// factorization backwards, so `which`'s 3 low bits select a branch
    /// (bit 0), a root of the resulting quadratic (bit 1), and a sign
    /// of `r0` (bit 2) — the remaining bits of
    /// [`crate::constants::INVERT_ELLIGATOR_WHICH_BITS`] have no effect
    /// for this curve, since curve25519's field leaves no headroom
    /// above `p` within a 32-byte, top-bit-clear encoding to carry
    /// extra entropy without producing a non-canonical byte string.
    ///
    /// Every candidate is checked against the forward map before being
    /// returned, so a `Some` result is always a genuine preimage; a
    /// `None` only means this particular `which` doesn't name one (the
    /// 8 slots aren't equally likely to be occupied, so a caller
    /// wanting a uniformly random preimage should retry across `which`
    /// rather than stopping at the first hit).
    pub fn invert_elligator_nonuniform(&self, which: u8) -> Option<[u8; 32]> {
        let z_inv = self.0.Z.invert();
        let y = &self.0.Y * &z_inv;

        let one = FieldElement::ONE;
        let one_plus_y = &one + &y;
        if bool::from(one_plus_y.is_zero()) {
            // y == -1: the order-2 point, outside the map's image.
            return None;
        }
        let one_minus_y = &one - &y;

        let (s_is_square, s_abs) = FieldElement::sqrt_ratio_i(&one_minus_y, &one_plus_y);
        if !bool::from(s_is_square) {
            // (1-y)/(1+y) isn't a square: this point isn't reachable at all.
            return None;
        }
        let s_sq = s_abs.square();

        let d = &EDWARDS_D;
        let d_sq = d.square();
        let one_minus_d_sq = &ONE_MINUS_EDWARDS_D_SQUARED;

        let branch_b = which & 1 != 0;
        let want_plus_root = which & 2 != 0;
        let want_plus_r0 = which & 4 != 0;

        let inner = &(&s_sq * &(&one + &d_sq)) + one_minus_d_sq;

        let u = if !branch_b {
            // Branch A (c = -1): s^2 * D(r) = Ns(r), quadratic in r.
            let a = &s_sq * d;
            let b = &inner;
            let c = &a + one_minus_d_sq;
            let r = solve_quadratic(&a, b, &c, want_plus_root)?;
            &(-&SQRT_M1) * &r
        } else {
            // Branch B (c = r): the same relation with r = i*r0^2
            // substituted in, solved directly for u = r0^2.
            let a_prime = &(&s_sq * d) + one_minus_d_sq;
            let b_prime = &(-&SQRT_M1) * &inner;
            let c_prime = -&(&s_sq * d);
            solve_quadratic(&a_prime, &b_prime, &c_prime, want_plus_root)?
        };

        let (u_is_square, r0_abs) = FieldElement::sqrt_ratio_i(&u, &one);
        if !bool::from(u_is_square) {
            return None;
        }
        let r0 = if want_plus_r0 { -&r0_abs } else { r0_abs };

        if bool::from(RistrettoPoint::elligator_ristretto_flavor(&r0).ct_eq(self)) {
            Some(r0.as_bytes())
        } else {
            None
        }
    }

    /// The uniform counterpart of [`RistrettoPoint::invert_elligator_nonuniform`],
    /// inverting [`RistrettoPoint::from_uniform_bytes`]. That map sums
    /// two independent Elligator images, so inverting it is normally
    /// one-to-infinity — fixing the caller's choice of first half `r1`
    /// turns it back into the same up-to-8 search as the non-uniform
    /// case, now applied to `self - from_nonuniform_bytes(r1)`.
    pub fn invert_elligator_uniform(&self, r1_bytes: &[u8; 32], which: u8) -> Option<[u8; 64]> {
        let r1_point = RistrettoPoint::from_nonuniform_bytes(r1_bytes);
        let remainder = self - &r1_point;
        let r2_bytes = remainder.invert_elligator_nonuniform(which)?;

        let mut out = [0u8; 64];
        out[..32].copy_from_slice(r1_bytes);
        out[32..].copy_from_slice(&r2_bytes);
        Some(out)
    }

    /// The Elligator2-on-Jacobi-quartic map underlying both
    /// `from_hash` variants: deterministically maps a field element to
    /// a ristretto255 group element.
    fn elligator_ristretto_flavor(r_0: &FieldElement) -> RistrettoPoint {
        let i = &SQRT_M1;
        let d = &EDWARDS_D;
        let one = FieldElement::ONE;
        let one_minus_d_sq = &ONE_MINUS_EDWARDS_D_SQUARED;
        let d_minus_one_sq = &EDWARDS_D_MINUS_ONE_SQUARED;

        let mut c = -&one;

        let r = i * &r_0.square();
        let Ns = &(&r + &one) * one_minus_d_sq;
        let D = &(&c - &(d * &r)) * &(&r + d);

        let (Ns_D_is_sq, mut s) = FieldElement::sqrt_ratio_i(&Ns, &D);
        let mut s_prime = &s * r_0;
        let s_prime_is_nonneg = !s_prime.is_negative();
        s_prime.conditional_negate(s_prime_is_nonneg);

        let s_not_sq = !Ns_D_is_sq;
        s.conditional_assign(&s_prime, s_not_sq);
        c.conditional_assign(&r, s_not_sq);

        let Nt = &(&(&c * &(&r - &one)) * d_minus_one_sq) - &D;
        let s_sq = s.square();

        let W0 = &(&s + &s) * &D;
        let W1 = &Nt * &SQRT_AD_MINUS_ONE;
        let W2 = &one - &s_sq;
        let W3 = &one + &s_sq;

        RistrettoPoint(EdwardsPoint {
            X: &W0 * &W3,
            Y: &W2 * &W1,
            Z: &W1 * &W3,
            T: &W0 * &W2,
        })
    }
}

/// Solve `a*t^2 + b*t + c = 0` for `t`, returning the root selected by
/// `want_plus_root` (`+` or `-` ahead of the discriminant's square root
/// in the usual quadratic formula), or `None` if the discriminant isn't
/// a square (no root exists in the field).
fn solve_quadratic(
    a: &FieldElement,
    b: &FieldElement,
    c: &FieldElement,
    want_plus_root: bool,
) -> Option<FieldElement> {
    if bool::from(a.is_zero()) {
        if bool::from(b.is_zero()) {
            return None;
        }
        let b_inv = b.invert();
        return Some(-(c * &b_inv));
    }

    let two_a = a + a;
    let four_a_c = &(&two_a + &two_a) * c;
    let discriminant = &b.square() - &four_a_c;
    let (is_square, sqrt_disc) = FieldElement::sqrt_ratio_i(&discriminant, &FieldElement::ONE);
    if !bool::from(is_square) {
        return None;
    }

    let neg_b = -b;
    let numerator = if want_plus_root {
        &neg_b + &sqrt_disc
    } else {
        &neg_b - &sqrt_disc
    };
    let two_a_inv = two_a.invert();
    Some(&numerator * &two_a_inv)
}

impl core::fmt::Debug for RistrettoPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "RistrettoPoint{{{:?}}}", self.compress())
    }
}

impl Identity for RistrettoPoint {
    fn identity() -> RistrettoPoint {
        RistrettoPoint(EdwardsPoint::identity())
    }
}

impl Default for RistrettoPoint {
    fn default() -> RistrettoPoint {
        RistrettoPoint::identity()
    }
}

impl IsIdentity for RistrettoPoint {
    fn is_identity(&self) -> Choice {
        self.ct_eq(&RistrettoPoint::identity())
    }
}

impl ConstantTimeEq for RistrettoPoint {
    /// Two ristretto255 points are equal iff their underlying Edwards
    /// points satisfy `X1*Y2 == Y1*X2 || X1*X2 == Y1*Y2` — checking
    /// both cross-products rather than a single one accounts for the
    /// two Edwards sub-cosets a given ristretto255 element's stored
    /// representative can land in.
    fn ct_eq(&self, other: &RistrettoPoint) -> Choice {
        let X1Y2 = &self.0.X * &other.0.Y;
        let Y1X2 = &self.0.Y * &other.0.X;
        let X1X2 = &self.0.X * &other.0.X;
        let Y1Y2 = &self.0.Y * &other.0.Y;

        X1Y2.ct_eq(&Y1X2) | X1X2.ct_eq(&Y1Y2)
    }
}

impl PartialEq for RistrettoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for RistrettoPoint {}

impl ConditionallySelectable for RistrettoPoint {
    fn conditional_select(a: &RistrettoPoint, b: &RistrettoPoint, choice: Choice) -> RistrettoPoint {
        RistrettoPoint(EdwardsPoint::conditional_select(&a.0, &b.0, choice))
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for RistrettoPoint {
    fn zeroize(&mut self) {
        self.0.X = FieldElement::ZERO;
        self.0.Y = FieldElement::ONE;
        self.0.Z = FieldElement::ONE;
        self.0.T = FieldElement::ZERO;
    }
}

impl<'a> Add<&'a RistrettoPoint> for &RistrettoPoint {
    type Output = RistrettoPoint;
    fn add(self, other: &'a RistrettoPoint) -> RistrettoPoint {
        RistrettoPoint(&self.0 + &other.0)
    }
}
impl Add<RistrettoPoint> for RistrettoPoint {
    type Output = RistrettoPoint;
    fn add(self, other: RistrettoPoint) -> RistrettoPoint {
        &self + &other
    }
}
impl AddAssign<&RistrettoPoint> for RistrettoPoint {
    fn add_assign(&mut self, other: &RistrettoPoint) {
        *self = &*self + other;
    }
}

impl<'a> Sub<&'a RistrettoPoint> for &RistrettoPoint {
    type Output = RistrettoPoint;
    fn sub(self, other: &'a RistrettoPoint) -> RistrettoPoint {
        RistrettoPoint(&self.0 - &other.0)
    }
}
impl Sub<RistrettoPoint> for RistrettoPoint {
    type Output = RistrettoPoint;
    fn sub(self, other: RistrettoPoint) -> RistrettoPoint {
        &self - &other
    }
}
impl SubAssign<&RistrettoPoint> for RistrettoPoint {
    fn sub_assign(&mut self, other: &RistrettoPoint) {
        *self = &*self - other;
    }
}

impl Neg for &RistrettoPoint {
    type Output = RistrettoPoint;
    fn neg(self) -> RistrettoPoint {
        RistrettoPoint(-&self.0)
    }
}
impl Neg for RistrettoPoint {
    type Output = RistrettoPoint;
    fn neg(self) -> RistrettoPoint {
        -&self
    }
}

impl<'a> Mul<&'a Scalar> for &RistrettoPoint {
    type Output = RistrettoPoint;
    fn mul(self, scalar: &'a Scalar) -> RistrettoPoint {
        RistrettoPoint::mul(self, scalar)
    }
}

/// A reusable table of small multiples of a fixed [`RistrettoPoint`],
/// spec.md §3/§6's `Pre`: build once via [`PrecomputedTable::precompute`],
/// then reuse across many [`PrecomputedTable::mul`] calls (spec.md's
/// `precomputed_scalarmul`) against the same point instead of rebuilding
/// its table every time. [`crate::constants::RISTRETTO_BASEPOINT_TABLE`]
/// is the distinguished instance of this built from the group's
/// basepoint; this type is the general form, buildable from any point.
#[cfg(feature = "precomputed-tables")]
pub struct PrecomputedTable(pub(crate) scalar_mul::precomputed::BasepointTable);

#[cfg(feature = "precomputed-tables")]
impl PrecomputedTable {
    /// Build the table of small multiples of `point`, spec.md's
    /// `precompute(P)`.
    pub fn precompute(point: &RistrettoPoint) -> PrecomputedTable {
        PrecomputedTable(scalar_mul::precomputed::BasepointTable::create(&point.0))
    }

    /// `scalar * point`, for the `point` this table was built from,
    /// spec.md's `precomputed_scalarmul`.
    pub fn mul(&self, scalar: &Scalar) -> RistrettoPoint {
        RistrettoPoint(self.0.mul(scalar))
    }

    /// Overwrite this table's contents with zero, spec.md's `destroy`.
    /// `FieldElement51` has no `Zeroize` impl of its own (it's a
    /// crate-private backend type, never handed to a caller who'd need
    /// to zeroize one directly), so this always goes through the same
    /// volatile-write-plus-fence helper the feature-off `destroy` paths
    /// elsewhere in the crate use.
    pub fn destroy(&mut self) {
        for point in self.0.entries_mut() {
            crate::backend::serial::wordops::clear_limbs(&mut point.X.0);
            crate::backend::serial::wordops::clear_limbs(&mut point.Y.0);
            crate::backend::serial::wordops::clear_limbs(&mut point.Z.0);
            crate::backend::serial::wordops::clear_limbs(&mut point.T.0);
        }
    }
}

/// The size, in bytes, of a [`PrecomputedTable`] — spec.md §3/§6's
/// `sizeof_precomputed`, published so callers can allocate storage for
/// one without depending on its (opaque) internal layout.
#[cfg(feature = "precomputed-tables")]
pub const SIZEOF_PRECOMPUTED: usize = core::mem::size_of::<PrecomputedTable>();

/// The alignment, in bytes, required by a [`PrecomputedTable`] —
/// spec.md §3/§6's `alignof_precomputed`.
#[cfg(feature = "precomputed-tables")]
pub const ALIGNOF_PRECOMPUTED: usize = core::mem::align_of::<PrecomputedTable>();

/// Torque this point by one of its 4-torsion coset representatives
/// (spec.md §4.3's `debugging_torque`), for testing the "any of 4 curve
/// representatives decode/compress to the same ristretto255 point"
/// invariant. Not part of the public API.
#[cfg(test)]
pub(crate) fn debugging_torque(point: &RistrettoPoint, which: u8) -> RistrettoPoint {
    // The 4-torsion subgroup is generated by (x,y) -> (-x,-y) and
    // (x,y) -> (iy, ix) for i = sqrt(-1). Composing those two
    // generators as indicated by `which`'s low 2 bits reaches all 4
    // cosets.
    let mut p = point.0;
    if which & 1 != 0 {
        p = EdwardsPoint {
            X: -&p.X,
            Y: -&p.Y,
            Z: p.Z,
            T: p.T,
        };
    }
    if which & 2 != 0 {
        let ix = &p.X * &SQRT_M1;
        let iy = &p.Y * &SQRT_M1;
        p = EdwardsPoint {
            X: iy,
            Y: ix,
            Z: p.Z,
            T: -&p.T,
        };
    }
    RistrettoPoint(p)
}

/// Rescale this point's internal representation by a nonzero field
/// element (spec.md §4.3's `debugging_pscale`), for testing that
/// [`RistrettoPoint::compress`] only depends on the point's value, never
/// on which scaling of its extended coordinates happens to be stored.
/// Not part of the public API.
#[cfg(test)]
pub(crate) fn debugging_pscale(point: &RistrettoPoint, f: &FieldElement) -> RistrettoPoint {
    RistrettoPoint(point.0.debugging_pscale(f))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destroy_clears_point_to_identity() {
        let mut p = crate::constants::RISTRETTO_BASEPOINT_POINT();
        p.destroy();
        assert!(bool::from(p.is_identity()));
    }

    #[test]
    fn destroy_clears_compressed_bytes() {
        let mut c = crate::constants::RISTRETTO_BASEPOINT_COMPRESSED;
        c.destroy();
        assert_eq!(c.to_bytes(), [0u8; 32]);
    }

    #[test]
    fn identity_round_trips() {
        let id = RistrettoPoint::identity();
        let compressed = id.compress();
        let decoded = compressed.decode().unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn double_matches_self_addition() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        assert_eq!(basepoint.double(), &basepoint + &basepoint);
    }

    #[test]
    fn add_then_sub_is_identity() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        let doubled = &basepoint + &basepoint;
        let back = &doubled - &basepoint;
        assert_eq!(back, basepoint);
    }

    #[test]
    fn mul_by_one_is_identity_map() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        assert_eq!(basepoint.mul(&Scalar::ONE), basepoint);
    }

    #[test]
    fn mul_by_zero_is_group_identity() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        assert!(bool::from(basepoint.mul(&Scalar::ZERO).is_identity()));
    }

    #[test]
    fn double_scalarmul_matches_two_separate_muls() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        let other = basepoint + basepoint;
        let a = Scalar::decode(&[3u8; 32]).expect("small scalar is canonical");
        let b = Scalar::decode(&{
            let mut bytes = [0u8; 32];
            bytes[0] = 11;
            bytes
        })
        .unwrap();

        let combined = RistrettoPoint::double_scalarmul(&a, &basepoint, &b, &other);
        let separate = basepoint.mul(&a) + other.mul(&b);
        assert_eq!(combined, separate);
    }

    #[test]
    fn dual_scalarmul_matches_two_separate_muls() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        let a = Scalar::decode(&[5u8; 32]).expect("small scalar is canonical");
        let b = Scalar::decode(&{
            let mut bytes = [0u8; 32];
            bytes[0] = 13;
            bytes
        })
        .unwrap();

        let (p1, p2) = RistrettoPoint::dual_scalarmul(&a, &b, &basepoint);
        assert_eq!(p1, basepoint.mul(&a));
        assert_eq!(p2, basepoint.mul(&b));
    }

    #[test]
    fn from_uniform_bytes_is_deterministic() {
        let bytes = [7u8; 64];
        let a = RistrettoPoint::from_uniform_bytes(&bytes);
        let b = RistrettoPoint::from_uniform_bytes(&bytes);
        assert_eq!(a, b);
    }

    #[test]
    fn from_nonuniform_bytes_is_deterministic() {
        let bytes = [9u8; 32];
        let a = RistrettoPoint::from_nonuniform_bytes(&bytes);
        let b = RistrettoPoint::from_nonuniform_bytes(&bytes);
        assert_eq!(a, b);
    }

    #[test]
    fn decode_rejects_non_canonical_s() {
        // p = 2^255 - 19, so p's own little-endian encoding is a
        // non-canonical encoding of the zero residue.
        let mut bytes = [0xffu8; 32];
        bytes[0] = 0xed;
        bytes[31] = 0x7f;
        let encoded = CompressedRistretto(bytes);
        assert!(encoded.decode().is_none());
    }

    #[test]
    fn decode_rejects_all_zero_minus_identity_ambiguity() {
        // This is not actually a rejection case (all-zero *is* the
        // identity's canonical encoding) -- asserted here to document
        // the boundary against the non-canonical-encoding tests above.
        let encoded = CompressedRistretto([0u8; 32]);
        assert!(encoded.decode().is_some());
    }

    #[test]
    fn torqued_points_compress_identically() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        let base_compressed = basepoint.compress();
        for which in 0..4u8 {
            let torqued = debugging_torque(&basepoint, which);
            assert_eq!(torqued.compress(), base_compressed);
        }
    }

    #[test]
    fn pscaled_points_compress_identically() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        let base_compressed = basepoint.compress();
        let f = FieldElement::from_bytes(&[7u8; 32]);
        let scaled = debugging_pscale(&basepoint, &f);
        assert_eq!(scaled.compress(), base_compressed);
        assert_eq!(scaled, basepoint);
    }

    #[test]
    #[cfg(feature = "precomputed-tables")]
    fn precomputed_table_matches_direct_multiplication() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        let doubled = basepoint + basepoint;
        let table = PrecomputedTable::precompute(&doubled);
        let s = Scalar::decode(&{
            let mut bytes = [0u8; 32];
            bytes[0] = 77;
            bytes
        })
        .unwrap();
        assert_eq!(table.mul(&s), doubled.mul(&s));
    }

    #[test]
    #[cfg(feature = "precomputed-tables")]
    fn precomputed_table_destroy_zeroes_it() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        let mut table = PrecomputedTable::precompute(&basepoint);
        table.destroy();
        for entry in table.0.entries_mut() {
            assert_eq!(entry.Z.as_bytes(), [0u8; 32]);
        }
    }

    #[test]
    fn torqued_and_pscaled_points_are_ristretto_equal() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        let f = FieldElement::from_bytes(&[11u8; 32]);
        for which in 0..4u8 {
            let transformed = debugging_pscale(&debugging_torque(&basepoint, which), &f);
            assert_eq!(transformed, basepoint);
        }
    }

    #[test]
    fn decode_allow_identity_false_rejects_identity() {
        let encoded = CompressedRistretto([0u8; 32]);
        assert!(encoded.decode_allow_identity(true).is_some());
        assert!(encoded.decode_allow_identity(false).is_none());
    }

    #[test]
    fn direct_scalarmul_matches_decode_mul_compress() {
        let basepoint = crate::constants::RISTRETTO_BASEPOINT_POINT();
        let encoded = basepoint.compress();
        let two = Scalar::ONE.add(&Scalar::ONE);

        let expected = basepoint.mul(&two).compress().to_bytes();
        let got = encoded.direct_scalarmul(&two, true, true).unwrap();
        assert_eq!(got, expected);

        let got_no_short_circuit = encoded.direct_scalarmul(&two, true, false).unwrap();
        assert_eq!(got_no_short_circuit, expected);
    }

    #[test]
    fn direct_scalarmul_fails_on_bad_encoding_both_ways() {
        let mut bad = [0xffu8; 32];
        bad[0] = 0xed;
        bad[31] = 0x7f;
        let encoded = CompressedRistretto(bad);
        let s = Scalar::ONE;
        assert!(encoded.direct_scalarmul(&s, true, true).is_none());
        assert!(encoded.direct_scalarmul(&s, true, false).is_none());
    }

    #[test]
    fn invert_elligator_nonuniform_round_trips_for_some_which() {
        // Every point this crate can name is reachable from some seed
        // via from_nonuniform_bytes (the map's image is half the
        // group, and the basepoint is a generator of that half's
        // orbit under small scalars for the seeds tried here), so at
        // least one of the 8 candidate slots must verify.
        for seed in 0u8..8 {
            let bytes = [seed; 32];
            let point = RistrettoPoint::from_nonuniform_bytes(&bytes);

            let mut found = false;
            for which in 0..8u8 {
                if let Some(preimage) = point.invert_elligator_nonuniform(which) {
                    let recovered = RistrettoPoint::from_nonuniform_bytes(&preimage);
                    assert_eq!(recovered, point);
                    found = true;
                }
            }
            assert!(found, "no preimage recovered for seed {}", seed);
        }
    }

    #[test]
    fn invert_elligator_nonuniform_rejects_order_two_point() {
        // (0, -1): the unique Edwards point with y = -1, outside the
        // Elligator map's image for any r0.
        let minus_one = -&FieldElement::ONE;
        let order_two = RistrettoPoint(EdwardsPoint {
            X: FieldElement::ZERO,
            Y: minus_one,
            Z: FieldElement::ONE,
            T: FieldElement::ZERO,
        });
        for which in 0..8u8 {
            assert!(order_two.invert_elligator_nonuniform(which).is_none());
        }
    }

    #[test]
    fn invert_elligator_uniform_round_trips_for_some_which() {
        let r1_bytes = [3u8; 32];
        let mut uniform_bytes = [0u8; 64];
        uniform_bytes[..32].copy_from_slice(&r1_bytes);
        uniform_bytes[32..].copy_from_slice(&[5u8; 32]);
        // Built from a genuine from_uniform_bytes seed, so the
        // remainder after subtracting off r1's half is guaranteed to
        // sit in the non-uniform map's image.
        let target = RistrettoPoint::from_uniform_bytes(&uniform_bytes);

        let mut found = false;
        for which in 0..8u8 {
            if let Some(preimage) = target.invert_elligator_uniform(&r1_bytes, which) {
                let recovered = RistrettoPoint::from_uniform_bytes(&preimage);
                assert_eq!(recovered, target);
                assert_eq!(&preimage[..32], &r1_bytes[..]);
                found = true;
            }
        }
        assert!(found, "no uniform preimage recovered");
    }
}
