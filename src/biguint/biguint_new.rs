// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements BigUint constructors.

use super::biguint_core::BigUint;
use super::biguint_vec::DigitVec;
use super::digit::Digit;
use super::len::len_digits;

impl BigUint {
    /// Creates and initializes a `BigUint`.
    ///
    /// This is the designated constructor that all other constructors should call.
    pub(crate) fn new(digits: DigitVec, digits_len: usize) -> BigUint {
        debug_assert!(digits_len > 0);
        debug_assert!(digits_len <= digits.len());

        BigUint {
            digits_storage: digits,
            digits_len,
        }
    }

    /// Creates a `BigUint` from digits in big-endian order.
    ///
    /// An empty sequence creates zero.
    pub fn from_digits_be(digits_be: &[Digit]) -> BigUint {
        let mut digits = digits_be.to_vec();
        digits.reverse();
        if digits.is_empty() {
            digits.push(0);
        }
        let digits_len = len_digits(&digits);

        Self::new(digits, digits_len)
    }

    pub fn zero() -> BigUint {
        Self::from(0 as Digit)
    }

    pub fn one() -> BigUint {
        Self::from(1 as Digit)
    }

    pub fn two() -> BigUint {
        Self::from(2 as Digit)
    }

    pub fn ten() -> BigUint {
        Self::from(10 as Digit)
    }
}

impl Default for BigUint {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biguint::biguint_vec::digits_be;

    #[test]
    fn test_from_digits_be() {
        let a = BigUint::from_digits_be(&[3, 2, 1]);
        assert_eq!(a.as_digits(), digits_be!(3, 2, 1));

        // most significant zeros collapse
        let a = BigUint::from_digits_be(&[0, 0, 3, 2, 1]);
        assert_eq!(a.as_digits(), digits_be!(3, 2, 1));

        // empty input is zero
        let a = BigUint::from_digits_be(&[]);
        assert!(a.is_zero());
    }

    #[test]
    fn test_default_is_zero() {
        let a = BigUint::default();
        assert_eq!(a.as_digits(), [0]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(BigUint::zero().as_digits(), [0]);
        assert_eq!(BigUint::one().as_digits(), [1]);
        assert_eq!(BigUint::two().as_digits(), [2]);
        assert_eq!(BigUint::ten().as_digits(), [10]);
    }
}
