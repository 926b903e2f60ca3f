// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// See LICENSE for licensing information.

//! Fixed-basepoint scalar multiplication via a runtime-built Lim-Lee
//! comb, spec.md §4.5's `precomputed_scalarmul` — structurally distinct
//! from [`super::variable_base::mul`]'s per-digit windowed comb: a fixed
//! number of doublings (`COMB_SPACING`) with one table lookup per
//! doubling, rather than one lookup per radix-16 digit of the scalar.
//!
//! Upstream curve25519-dalek gets this by embedding 32 separate windows
//! of precomputed affine constants (several hundred literal field
//! elements) so a multiply costs only additions, no doublings at all.
//! Reproducing that table from memory, with no compiler available to
//! catch a transposed digit, isn't a risk worth taking. [`BasepointTable`]
//! instead builds its comb table *at runtime*, in [`BasepointTable::create`],
//! from the point handed to it: `COMB_TEETH` "tooth" base points
//! `2^(j * COMB_SPACING) * basepoint` are produced by repeated doubling,
//! and the `2^COMB_TEETH`-entry table of all their subset sums is built
//! from those by addition alone. No literal curve constants appear
//! anywhere in this file.

use crate::backend::serial::curve_models::EdwardsPoint;
use crate::scalar::Scalar;
use crate::traits::Identity;
use subtle::ConditionallySelectable;
use subtle::ConstantTimeEq;

/// Number of comb teeth: each of the `COMB_SPACING` rows contributes one
/// bit per tooth, so `COMB_TEETH * COMB_SPACING` must cover every bit of
/// a scalar (256).
const COMB_TEETH: usize = 8;

/// Number of doublings `mul` performs — and the spacing, in bits,
/// between one tooth's base point and the next.
const COMB_SPACING: usize = 256 / COMB_TEETH;

const COMB_TABLE_SIZE: usize = 1 << COMB_TEETH;

/// A reusable comb table of subset sums of a single fixed point (in
/// practice, the ristretto255 basepoint), built once and reused across
/// multiplications by that point.
pub(crate) struct BasepointTable {
    entries: [EdwardsPoint; COMB_TABLE_SIZE],
}

impl BasepointTable {
    pub(crate) fn create(basepoint: &EdwardsPoint) -> BasepointTable {
        let mut teeth = [EdwardsPoint::identity(); COMB_TEETH];
        let mut p = *basepoint;
        for (j, tooth) in teeth.iter_mut().enumerate() {
            *tooth = p;
            if j + 1 < COMB_TEETH {
                for _ in 0..COMB_SPACING {
                    p = p.double();
                }
            }
        }

        // entries[b] = sum of teeth[j] for every bit j set in b, built
        // by peeling off the lowest set bit of b at each step so every
        // entry after the first costs one addition, not a fresh sum.
        let mut entries = [EdwardsPoint::identity(); COMB_TABLE_SIZE];
        for b in 1..COMB_TABLE_SIZE {
            let lowest_tooth = b.trailing_zeros() as usize;
            let rest = b & (b - 1);
            entries[b] = &entries[rest] + &teeth[lowest_tooth];
        }

        BasepointTable { entries }
    }

    /// Constant-time select of `self.entries[index]`: scans every entry
    /// so the memory access pattern doesn't depend on `index`.
    fn select(&self, index: usize) -> EdwardsPoint {
        let mut result = EdwardsPoint::identity();
        for (i, entry) in self.entries.iter().enumerate() {
            let is_match = (i as u64).ct_eq(&(index as u64));
            result.conditional_assign(entry, is_match);
        }
        result
    }

    pub(crate) fn mul(&self, scalar: &Scalar) -> EdwardsPoint {
        let bytes = scalar.bytes;
        let bit = |k: usize| -> usize { ((bytes[k / 8] >> (k % 8)) & 1) as usize };

        let mut q = EdwardsPoint::identity();
        for row in (0..COMB_SPACING).rev() {
            q = q.double();

            let mut index = 0usize;
            for tooth in 0..COMB_TEETH {
                index |= bit(row + tooth * COMB_SPACING) << tooth;
            }
            q = &q + &self.select(index);
        }
        q
    }

    /// Mutable access to the table's raw entries, for `destroy`'s
    /// zeroization pass. Not part of this type's scalar-multiplication
    /// contract, hence kept separate from `mul`/`create`.
    pub(crate) fn entries_mut(&mut self) -> &mut [EdwardsPoint; COMB_TABLE_SIZE] {
        &mut self.entries
    }
}
