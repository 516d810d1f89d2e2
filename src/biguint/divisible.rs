// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements divisibility predicates.

use super::biguint_core::BigUint;
use super::digit::{Byte, Digit};
use super::errors::ArithmeticError;

impl BigUint {
    /// Returns whether the single-byte `divisor` divides this value,
    /// computed with the single-digit remainder pass over the full value.
    ///
    /// A `divisor` of zero fails with [`ArithmeticError::ZeroDivisorDigit`];
    /// every value is divisible by one.
    pub fn is_divisible_by_digit(&self, divisor: Byte) -> Result<bool, ArithmeticError> {
        if divisor == 0 {
            return Err(ArithmeticError::ZeroDivisorDigit);
        }
        if divisor == 1 {
            return Ok(true);
        }

        let (_, remainder) = self.div_rem_digit(divisor as Digit)?;
        Ok(remainder == 0)
    }

    /// Returns whether `divisor` divides this value.
    ///
    /// A zero `divisor` fails with [`ArithmeticError::DivisionByZero`].
    pub fn is_divisible_by(&self, divisor: &BigUint) -> Result<bool, ArithmeticError> {
        let (_, remainder) = self.div_rem(divisor)?;
        Ok(remainder.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_divisible_by_digit() {
        let seventy_thousand = BigUint::from_base10_str("70000").unwrap();
        assert!(seventy_thousand.is_divisible_by_digit(1).unwrap());
        assert!(seventy_thousand.is_divisible_by_digit(2).unwrap());
        assert!(!seventy_thousand.is_divisible_by_digit(3).unwrap());
        assert!(seventy_thousand.is_divisible_by_digit(10).unwrap());

        assert_eq!(
            seventy_thousand.is_divisible_by_digit(0),
            Err(ArithmeticError::ZeroDivisorDigit)
        );
    }

    #[test]
    fn test_is_divisible_by_digit_uses_the_full_value() {
        // 65536 = BASE: its least significant byte is zero,
        // yet it is not divisible by 10
        let base = BigUint::from_base10_str("65536").unwrap();
        assert!(!base.is_divisible_by_digit(10).unwrap());
        assert!(base.is_divisible_by_digit(2).unwrap());
        assert!(base.is_divisible_by_digit(16).unwrap());
    }

    #[test]
    fn test_is_divisible_by() {
        let a = BigUint::from_base10_str("121932631112635269").unwrap();
        let b = BigUint::from_base10_str("987654321").unwrap();
        assert!(a.is_divisible_by(&b).unwrap());
        assert!(!a.is_divisible_by(&b.incremented()).unwrap());

        assert_eq!(
            a.is_divisible_by(&BigUint::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
    }
}
