// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the whole-digit left shift.

use super::biguint_core::BigUint;
use super::biguint_vec::DigitVec;
use super::zero::is_zero_digits;

/// Shifts the significant digits left by `positions` whole digit slots,
/// multiplying the value by `BASE^positions`.
/// Returns the effective digits length of the shifted.
pub(crate) fn shift_left_digits(
    digits: &mut DigitVec,
    digits_len: usize,
    positions: usize,
) -> usize {
    if positions == 0 || is_zero_digits(&digits[..digits_len]) {
        return digits_len;
    }

    let shifted_len = digits_len + positions;
    if digits.len() < shifted_len {
        digits.resize(shifted_len, 0);
    }

    // Rotating moves the tail slots (whatever they held) to the front;
    // they become the vacated low positions and are zeroed.
    digits[..shifted_len].rotate_right(positions);
    digits[..positions].fill(0);

    shifted_len
}

impl BigUint {
    /// Shifts this value left by `positions` whole digits in place,
    /// multiplying it by `BASE^positions`.
    ///
    /// Shifting zero, or shifting by zero positions, is a no-op.
    pub fn shift_left(&mut self, positions: usize) {
        self.digits_len = shift_left_digits(&mut self.digits_storage, self.digits_len, positions);
    }

    /// Returns this value shifted left by `positions` whole digits.
    pub fn shifted_left(&self, positions: usize) -> BigUint {
        let mut result = self.clone();
        result.shift_left(positions);
        result
    }
}
