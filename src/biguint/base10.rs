// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the base-10 string conversions.

use super::biguint_core::BigUint;
use super::biguint_vec::digitvec_with_len;
use super::digit::Digit;
use super::divrem::div_rem_digit_digits;
use super::errors::ParseBigUintError;

impl BigUint {
    /// Parses a base-10 decimal string.
    ///
    /// Every character must be an ASCII decimal digit; leading zeros are
    /// permitted and collapse naturally.
    pub fn from_base10_str(decimal: &str) -> Result<BigUint, ParseBigUintError> {
        if decimal.is_empty() {
            return Err(ParseBigUintError::Empty);
        }

        let mut result = BigUint::zero();
        for c in decimal.bytes() {
            if !c.is_ascii_digit() {
                return Err(ParseBigUintError::InvalidCharFound);
            }
            result = result.mul_digit(10);
            result += (c - b'0') as Digit;
        }

        Ok(result)
    }

    /// Returns the base-10 decimal representation.
    pub fn to_base10_string(&self) -> String {
        if let Some(digit) = self.as_digit() {
            return digit.to_string();
        }

        // Repeatedly divides by ten, extracting the next least significant
        // decimal character, until one radix digit remains; that most
        // significant chunk is formatted by the platform.
        let mut value = self.clone();
        let mut reversed_tail = String::new();
        while value.digits_len > 1 {
            let mut quotient = digitvec_with_len(value.digits_len);
            let (quotient_len, remainder) =
                div_rem_digit_digits(value.as_digits(), 10, &mut quotient);
            reversed_tail.push(char::from(b'0' + remainder as u8));
            value = BigUint::new(quotient, quotient_len);
        }

        let mut result = value.least_significant_digit().to_string();
        result.extend(reversed_tail.chars().rev());
        result
    }
}
