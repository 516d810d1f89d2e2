// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the narrowing accessors.

use super::biguint_core::BigUint;
use super::digit::{Byte, Digit, DoubleDigit, DIGIT_BITS};

impl BigUint {
    /// Returns the value if it fits a single digit.
    pub fn as_digit(&self) -> Option<Digit> {
        match self.as_digits() {
            &[digit] => Some(digit),
            _ => None,
        }
    }

    /// Returns the value if it fits a double digit,
    /// i.e., if it has at most two significant digits.
    pub fn as_double_digit(&self) -> Option<DoubleDigit> {
        match self.as_digits() {
            &[low] => Some(low as DoubleDigit),
            &[low, high] => Some(((high as DoubleDigit) << DIGIT_BITS) | low as DoubleDigit),
            _ => None,
        }
    }

    /// Returns the value if it fits a byte.
    pub fn as_byte(&self) -> Option<Byte> {
        match self.as_digit() {
            Some(digit) if digit < 256 => Some(digit as Byte),
            _ => None,
        }
    }

    pub fn least_significant_digit(&self) -> Digit {
        self.as_digits()[0]
    }

    pub fn most_significant_digit(&self) -> Digit {
        self.as_digits()[self.digits_len - 1]
    }
}
