// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements exponentiation by squaring.

use super::biguint_core::BigUint;
use super::biguint_vec::digitvec_with_len;
use super::digit::Digit;
use super::divrem::div_rem_digit_digits;
use super::errors::ArithmeticError;

impl BigUint {
    /// Raises this value to the power of `exponent`,
    /// with O(log exponent) big-integer multiplications.
    ///
    /// `0^0` fails with [`ArithmeticError::ZeroPowZero`];
    /// `0^n` is zero for `n > 0`.
    pub fn pow_by(&self, exponent: Digit) -> Result<BigUint, ArithmeticError> {
        if self.is_zero() {
            return if exponent == 0 {
                Err(ArithmeticError::ZeroPowZero)
            } else {
                Ok(BigUint::zero())
            };
        }
        if self.is_one() {
            return Ok(BigUint::one());
        }

        // Walks the exponent bits from the least significant up;
        // `base` holds self^(2^k) at step k.
        let mut result = BigUint::one();
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = &result * &base;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.square();
            }
        }

        Ok(result)
    }

    /// Raises this value to the power of `exponent` in place.
    pub fn pow_me_by(&mut self, exponent: Digit) -> Result<(), ArithmeticError> {
        *self = self.pow_by(exponent)?;
        Ok(())
    }

    /// Same as [`pow_by`](BigUint::pow_by), with a big-integer exponent.
    pub fn pow_by_biguint(&self, exponent: &BigUint) -> Result<BigUint, ArithmeticError> {
        if let Some(digit) = exponent.as_digit() {
            return self.pow_by(digit);
        }

        // The exponent has at least two digits here, so it is positive.
        if self.is_zero() {
            return Ok(BigUint::zero());
        }
        if self.is_one() {
            return Ok(BigUint::one());
        }

        let mut result = BigUint::one();
        let mut base = self.clone();
        let mut exponent = exponent.clone();
        while !exponent.is_zero() {
            if exponent.is_odd() {
                result = &result * &base;
            }
            exponent = half(&exponent);
            if !exponent.is_zero() {
                base = base.square();
            }
        }

        Ok(result)
    }
}

/// Returns `value / 2`.
fn half(value: &BigUint) -> BigUint {
    let mut quotient = digitvec_with_len(value.digits_len);
    let (quotient_len, _) = div_rem_digit_digits(value.as_digits(), 2, &mut quotient);
    BigUint::new(quotient, quotient_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_tools::quickcheck::DecimalString;
    use quickcheck::QuickCheck;

    #[test]
    fn test_pow_by_known_values() {
        let two_to_16 = BigUint::two().pow_by(16).unwrap();
        assert_eq!(two_to_16, BigUint::from_base10_str("65536").unwrap());

        let ten_to_19 = BigUint::ten().pow_by(19).unwrap();
        assert_eq!(
            ten_to_19,
            BigUint::from_base10_str("10000000000000000000").unwrap()
        );
    }

    #[test]
    fn test_pow_by_zero_base() {
        assert_eq!(
            BigUint::zero().pow_by(0),
            Err(ArithmeticError::ZeroPowZero)
        );
        assert!(BigUint::zero().pow_by(5).unwrap().is_zero());
    }

    #[test]
    fn test_pow_by_trivial_cases() {
        let a = BigUint::from_base10_str("123456789").unwrap();
        assert!(a.pow_by(0).unwrap().is_one());
        assert_eq!(a.pow_by(1).unwrap(), a);
        assert!(BigUint::one().pow_by(12345).unwrap().is_one());
    }

    #[test]
    fn test_pow_by_matches_repeated_multiplication() {
        let a = BigUint::from_base10_str("123456").unwrap();
        let mut product = BigUint::one();
        for exponent in 0..8 {
            assert_eq!(a.pow_by(exponent).unwrap(), product);
            product = &product * &a;
        }
    }

    #[test]
    fn test_pow_me_by() {
        let mut a = BigUint::two();
        a.pow_me_by(16).unwrap();
        assert_eq!(a, BigUint::from_base10_str("65536").unwrap());
    }

    #[test]
    fn test_pow_by_biguint_agrees_with_the_digit_form() {
        let a = BigUint::two();
        let exponent = BigUint::from(100 as Digit);
        assert_eq!(
            a.pow_by_biguint(&exponent).unwrap(),
            a.pow_by(100).unwrap()
        );

        // big-integer exponents on a trivial base
        let exponent = BigUint::from_digits_be(&[1, 0]);
        assert!(BigUint::one().pow_by_biguint(&exponent).unwrap().is_one());
        assert!(BigUint::zero().pow_by_biguint(&exponent).unwrap().is_zero());
    }

    #[test]
    fn test_pow_by_splits_over_exponent_addition() {
        const TEST_NUMBER: u64 = 50;

        fn prop(decimal: DecimalString, a: u8, b: u8) -> bool {
            let x = BigUint::from_base10_str(&decimal.0).unwrap();
            if x.is_zero() {
                return true;
            }
            let (a, b) = (a as Digit % 16, b as Digit % 16);

            let split = x.pow_by(a).unwrap() * x.pow_by(b).unwrap();
            x.pow_by(a + b).unwrap() == split
        }

        QuickCheck::new()
            .tests(TEST_NUMBER)
            .quickcheck(prop as fn(DecimalString, u8, u8) -> bool);
    }
}
