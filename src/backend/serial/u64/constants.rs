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

//! Curve- and group-specific constants for the 64-bit serial backend:
//! fixed `FieldElement51`/`Scalar52` values the field, point and scalar
//! layers are built on.

use crate::backend::serial::u64::field::FieldElement51;
use crate::backend::serial::u64::scalar::Scalar52;

/// The Edwards curve parameter `d = -121665/121666 mod p`, for the
/// twisted Edwards curve `-x^2 + y^2 = 1 + d*x^2*y^2` underlying
/// edwards25519.
pub(crate) const EDWARDS_D: FieldElement51 = FieldElement51::from_limbs([
    929955233495203,
    466365720129213,
    1662059464998953,
    2033849074728123,
    1442794654840575,
]);

/// `2*d`.
pub(crate) const EDWARDS_D2: FieldElement51 = FieldElement51::from_limbs([
    1859910466990425,
    932731440258426,
    1072319116312658,
    1815898335770999,
    633789495995903,
]);

/// `1 - d^2`, used by the ristretto255 decoder's candidate-`x`
/// computation.
pub(crate) const ONE_MINUS_EDWARDS_D_SQUARED: FieldElement51 = FieldElement51::from_limbs([
    1136626929484150,
    1998550399581263,
    2187510352142399,
    608401429891232,
    1720825013650233,
]);

/// `(d - 1)^2`, used by the ristretto255 decoder's candidate-`y`
/// computation.
pub(crate) const EDWARDS_D_MINUS_ONE_SQUARED: FieldElement51 = FieldElement51::from_limbs([
    1507062230895904,
    1572317787530805,
    683053064812840,
    317930213447451,
    1572317787530805,
]);

/// `sqrt(a*d - 1)`, with `a = -1` — used by ristretto255 encode/decode's
/// sign-fixup steps.
pub(crate) const SQRT_AD_MINUS_ONE: FieldElement51 = FieldElement51::from_limbs([
    2241493124984347,
    425987919032274,
    2207028919301688,
    1220490630685848,
    974799131293748,
]);

/// `1/sqrt(a - d)`.
pub(crate) const INVSQRT_A_MINUS_D: FieldElement51 = FieldElement51::from_limbs([
    278008075086543,
    1811873364638499,
    178193826511032,
    2306116531670518,
    221353214287436,
]);

/// A square root of `-1` modulo `p`, used by [`FieldElement51::sqrt_ratio_i`]
/// to fix up the sign/branch of a candidate square root.
pub(crate) const SQRT_M1: FieldElement51 = FieldElement51::from_limbs([
    1718705420411056,
    234908883556509,
    2233514472574048,
    2117202627021982,
    765476049583133,
]);

/// The order of the ristretto255/edwards25519 prime-order subgroup,
/// \\(\ell = 2\^{252} + 27742317777372353535851937790883648493\\), in
/// five 52-bit limbs.
pub(crate) const L: Scalar52 = Scalar52([
    0x0002631a5cf5d3ed,
    0x000dea2f79cd6581,
    0x000000000014def9,
    0x0000000000000000,
    0x0000100000000000,
]);
