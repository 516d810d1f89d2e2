// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Defines `BigUint`.

use super::digit::Digit;

/// An arbitrary-precision unsigned integer.
///
/// Digits are stored in little-endian order,
/// e.g., the "least significant digit" is stored at position 0.
///
/// `digits_storage` may be longer than the value requires;
/// `digits_len` is the number of significant digits, and
/// [`as_digits`](BigUint::as_digits) exposes the canonical slice:
/// never empty, no most significant zero unless the value is zero.
#[derive(Clone, Debug)]
pub struct BigUint {
    pub(crate) digits_storage: Vec<Digit>,
    pub(crate) digits_len: usize, // The length of digits stored in `digits_storage`
}
