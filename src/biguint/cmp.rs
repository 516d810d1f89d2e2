// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements comparing operations.

use super::biguint_core::BigUint;
use super::biguint_slice::{is_valid_biguint_slice, BigUintSlice};
use std::cmp::Ordering;

/// Returns an Ordering between `a` and `b`.
///
/// A shorter digit sequence is strictly smaller,
/// thanks to the no-most-significant-zero invariant;
/// sequences of equal length compare digit by digit downwards.
pub(crate) fn cmp_digits(a: &BigUintSlice, b: &BigUintSlice) -> Ordering {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));

    match a.len().cmp(&b.len()) {
        Ordering::Greater => Ordering::Greater,
        Ordering::Less => Ordering::Less,
        Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
    }
}

impl PartialEq<Self> for BigUint {
    fn eq(&self, other: &Self) -> bool {
        self.as_digits() == other.as_digits()
    }
}

impl Eq for BigUint {}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(self.as_digits(), other.as_digits())
    }
}

impl PartialOrd<Self> for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
