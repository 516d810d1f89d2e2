// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the increment and decrement operations.

use super::biguint_core::BigUint;
use super::digit::Digit;
use super::errors::ArithmeticError;
use super::len::len_digits;

impl BigUint {
    /// Adds one to this value in place.
    ///
    /// The first digit below the maximum is incremented and the walk stops;
    /// every full digit before it carries over to zero.
    pub fn increment(&mut self) {
        for digit in self.digits_storage[..self.digits_len].iter_mut() {
            if *digit < Digit::MAX {
                *digit += 1;
                return;
            }
            *digit = 0;
        }

        // Every digit carried: the value was BASE^digits_len - 1.
        if self.digits_len < self.digits_storage.len() {
            self.digits_storage[self.digits_len] = 1;
        } else {
            self.digits_storage.push(1);
        }
        self.digits_len += 1;
    }

    /// Returns this value plus one.
    pub fn incremented(&self) -> BigUint {
        let mut result = self.clone();
        result.increment();
        result
    }

    /// Subtracts one from this value in place,
    /// failing with [`ArithmeticError::Underflow`] on zero.
    ///
    /// The first non-zero digit is decremented and the walk stops;
    /// every zero digit before it borrows over to the maximum digit.
    pub fn decrement(&mut self) -> Result<(), ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::Underflow);
        }

        for digit in self.digits_storage[..self.digits_len].iter_mut() {
            if *digit > 0 {
                *digit -= 1;
                break;
            }
            *digit = Digit::MAX;
        }

        // The most significant digit may have become zero.
        self.digits_len = len_digits(&self.digits_storage[..self.digits_len]);
        Ok(())
    }

    /// Returns this value minus one,
    /// failing with [`ArithmeticError::Underflow`] on zero.
    pub fn decremented(&self) -> Result<BigUint, ArithmeticError> {
        let mut result = self.clone();
        result.decrement()?;
        Ok(result)
    }
}
