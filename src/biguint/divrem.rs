// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements division operations.

use super::biguint_core::BigUint;
use super::biguint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::biguint_vec::{digitvec_with_len, DigitVec};
use super::digit::{Digit, DoubleDigit, BASE, DIGIT_BITS};
use super::errors::ArithmeticError;
use super::len::len_digits;
use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

/// Divides `dividend` by the single `divisor` digit, filling `quotient` and
/// returning the length of the quotient digits together with the remainder.
///
/// A single pass from the most significant digit to the least: the running
/// remainder is carried in a double digit, prepended to each dividend digit,
/// and split by the machine division.
///
/// - `quotient` must have a length no less than `dividend.len()`.
/// - `quotient` will be filled with 0 first, and then the output digits.
///
/// # Panics
///
/// Panics when `divisor` is zero.
#[inline]
pub(crate) fn div_rem_digit_digits(
    dividend: &BigUintSlice,
    divisor: Digit,
    quotient: &mut [Digit],
) -> (usize, Digit) {
    debug_assert!(is_valid_biguint_slice(dividend));
    debug_assert!(quotient.len() >= dividend.len());
    assert!(divisor != 0, "attempt to divide by zero");

    quotient.fill(0);

    let divisor = divisor as DoubleDigit;
    let mut remainder: DoubleDigit = 0;

    // The iterators' direction is reversed,
    // for the digits are stored in little-endian order.
    for (&dividend_digit, quotient_digit) in dividend
        .iter()
        .rev()
        .zip(quotient[..dividend.len()].iter_mut().rev())
    {
        let t = (remainder << DIGIT_BITS) | dividend_digit as DoubleDigit;
        *quotient_digit = (t / divisor) as Digit;
        remainder = t % divisor;
    }

    // The final remainder is below the divisor, which fits one digit.
    (len_digits(&quotient[..dividend.len()]), remainder as Digit)
}

impl BigUint {
    /// Divides by a single digit, returning `(quotient, remainder)`.
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    pub fn div_rem_digit(&self, divisor: Digit) -> Result<(BigUint, Digit), ArithmeticError> {
        if divisor == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        if divisor == 1 {
            return Ok((self.clone(), 0));
        }
        if self.is_zero() {
            return Ok((BigUint::zero(), 0));
        }

        let mut quotient = digitvec_with_len(self.digits_len);
        let (quotient_len, remainder) =
            div_rem_digit_digits(self.as_digits(), divisor, &mut quotient);

        Ok((BigUint::new(quotient, quotient_len), remainder))
    }

    /// Divides by `divisor`, returning `(quotient, remainder)`.
    ///
    /// Fails with [`ArithmeticError::DivisionByZero`] when `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigUint) -> Result<(BigUint, BigUint), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if divisor.is_one() {
            return Ok((self.clone(), BigUint::zero()));
        }

        match self.cmp(divisor) {
            Ordering::Equal => return Ok((BigUint::one(), BigUint::zero())),
            Ordering::Less => return Ok((BigUint::zero(), self.clone())),
            Ordering::Greater => {}
        }

        if let Some(divisor_digit) = divisor.as_digit() {
            let (quotient, remainder) = self.div_rem_digit(divisor_digit)?;
            return Ok((quotient, BigUint::from(remainder)));
        }

        // Long division: scan the dividend digits from the most significant
        // down, prepending each to the running remainder. Whenever the
        // remainder reaches the divisor, the quotient digit is the largest
        // `q` in [0, BASE) with `divisor·q <= remainder`, found by binary
        // search rather than repeated subtraction.
        let mut quotient_digits: DigitVec = Vec::with_capacity(self.digits_len);
        let mut remainder = BigUint::zero();
        for &dividend_digit in self.as_digits().iter().rev() {
            remainder.shift_left(1);
            remainder += dividend_digit;

            let mut q: Digit = 0;
            if remainder >= *divisor {
                let mut low: DoubleDigit = 1;
                let mut high: DoubleDigit = BASE - 1;
                while low <= high {
                    let mid = ((low + high) / 2) as Digit;
                    if divisor.mul_digit(mid) <= remainder {
                        q = mid;
                        low = mid as DoubleDigit + 1;
                    } else {
                        high = mid as DoubleDigit - 1;
                    }
                }

                remainder -= &divisor.mul_digit(q);
            }
            quotient_digits.push(q);
        }

        // The digits were produced from the most significant down.
        quotient_digits.reverse();
        let quotient_len = len_digits(&quotient_digits);

        Ok((BigUint::new(quotient_digits, quotient_len), remainder))
    }
}

impl<'a, 'b> Div<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    fn div(self, rhs: &BigUint) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl<'a> Div<&'a BigUint> for BigUint {
    type Output = BigUint;

    fn div(self, rhs: &Self) -> Self::Output {
        (&self).div(rhs)
    }
}

impl Div for BigUint {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        (&self).div(&rhs)
    }
}

impl<'a, 'b> Rem<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    fn rem(self, rhs: &BigUint) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl<'a> Rem<&'a BigUint> for BigUint {
    type Output = BigUint;

    fn rem(self, rhs: &Self) -> Self::Output {
        (&self).rem(rhs)
    }
}

impl Rem for BigUint {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        (&self).rem(&rhs)
    }
}

impl DivAssign<&BigUint> for BigUint {
    fn div_assign(&mut self, rhs: &BigUint) {
        *self = (&*self).div(rhs);
    }
}

impl DivAssign for BigUint {
    fn div_assign(&mut self, rhs: Self) {
        *self = (&*self).div(&rhs);
    }
}

impl RemAssign<&BigUint> for BigUint {
    fn rem_assign(&mut self, rhs: &BigUint) {
        *self = (&*self).rem(rhs);
    }
}

impl RemAssign for BigUint {
    fn rem_assign(&mut self, rhs: Self) {
        *self = (&*self).rem(&rhs);
    }
}
