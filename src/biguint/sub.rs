// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements subtraction operations.

use super::biguint_core::BigUint;
use super::biguint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::biguint_vec::{digitvec_with_len, DigitVec};
use super::cmp::cmp_digits;
use super::digit::{Digit, DoubleDigit, BASE, DIGIT_BITS};
use super::errors::ArithmeticError;
use super::len::len_digits;
use std::cmp;
use std::cmp::Ordering;
use std::ops::{Sub, SubAssign};

/// Subtracts `b` from `a`, and fills the output to `result`,
/// returning the length of the output digits.
///
/// - `a` must be no less than `b` (a >= b).
/// - `result` must have a length no less than the return value of [`subtracting_output_max_len`].
/// - `result` will be filled with 0 first, and then the output digits.
///
/// # Panics
///
/// Panics when `cmp_digits(a, b) == Ordering::Less`.
#[inline]
pub(crate) fn sub_digits(a: &BigUintSlice, b: &BigUintSlice, result: &mut [Digit]) -> usize {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));
    debug_assert!(result.len() >= subtracting_output_max_len(a.len(), b.len()));

    result.fill(0);

    match cmp_digits(a, b) {
        Ordering::Equal => return 1,
        Ordering::Less => panic!("attempt to subtract with overflow"),
        Ordering::Greater => {}
    }

    // Employs the "long subtraction" algorithm:
    // subtracting digits from the least significant position to the most
    // significant. Each column computes `BASE + a_i - b_i - borrow` in a
    // double digit; the low part is the output digit, and a high part of
    // zero flags a borrow from the next column.
    let mut borrow: DoubleDigit = 0;
    for (i, result_digit) in result[..a.len()].iter_mut().enumerate() {
        let b_digit = if i < b.len() { b[i] as DoubleDigit } else { 0 };
        let difference = BASE + a[i] as DoubleDigit - b_digit - borrow;
        *result_digit = difference as Digit; // difference mod BASE
        borrow = 1 - (difference >> DIGIT_BITS);
    }

    len_digits(&result[..a.len()])
}

/// Subtracts the single `digit` from `a`, and fills the output to `result`,
/// returning the length of the output digits.
///
/// The contracts on `a` and `result` are the same as for [`sub_digits`].
#[inline]
pub(crate) fn sub_digit(a: &BigUintSlice, digit: Digit, result: &mut [Digit]) -> usize {
    sub_digits(a, &[digit], result)
}

impl BigUint {
    /// Returns `self - rhs`,
    /// failing with [`ArithmeticError::Underflow`] when `rhs > self`.
    pub fn checked_sub(&self, rhs: &BigUint) -> Result<BigUint, ArithmeticError> {
        if self < rhs {
            return Err(ArithmeticError::Underflow);
        }

        Ok(self - rhs)
    }

    /// Returns `self - digit`,
    /// failing with [`ArithmeticError::Underflow`] when `digit > self`.
    pub fn checked_sub_digit(&self, digit: Digit) -> Result<BigUint, ArithmeticError> {
        if *self < BigUint::from(digit) {
            return Err(ArithmeticError::Underflow);
        }

        Ok(self - digit)
    }
}

impl<'a, 'b> Sub<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    fn sub(self, rhs: &BigUint) -> Self::Output {
        let a = self.as_digits();
        let b = rhs.as_digits();
        let mut output = digitvec_subtracting_output(a.len(), b.len());
        let output_len = sub_digits(a, b, &mut output);

        BigUint::new(output, output_len)
    }
}

impl<'a> Sub<&'a BigUint> for BigUint {
    type Output = BigUint;

    fn sub(self, rhs: &Self) -> Self::Output {
        (&self).sub(rhs)
    }
}

impl<'a> Sub<BigUint> for &'a BigUint {
    type Output = BigUint;

    fn sub(self, rhs: BigUint) -> Self::Output {
        self.sub(&rhs)
    }
}

impl Sub for BigUint {
    type Output = BigUint;

    fn sub(self, rhs: Self) -> Self::Output {
        (&self).sub(&rhs)
    }
}

impl<'a> Sub<Digit> for &'a BigUint {
    type Output = BigUint;

    fn sub(self, rhs: Digit) -> Self::Output {
        let a = self.as_digits();
        let mut output = digitvec_subtracting_output(a.len(), 1);
        let output_len = sub_digit(a, rhs, &mut output);

        BigUint::new(output, output_len)
    }
}

impl Sub<Digit> for BigUint {
    type Output = BigUint;

    fn sub(self, rhs: Digit) -> Self::Output {
        (&self).sub(rhs)
    }
}

impl SubAssign<&BigUint> for BigUint {
    fn sub_assign(&mut self, rhs: &BigUint) {
        *self = (&*self).sub(rhs);
    }
}

impl SubAssign for BigUint {
    fn sub_assign(&mut self, rhs: Self) {
        *self = (&*self).sub(&rhs);
    }
}

impl SubAssign<Digit> for BigUint {
    fn sub_assign(&mut self, rhs: Digit) {
        *self = (&*self).sub(rhs);
    }
}

/// Returns the length of the largest possible output of an subtraction operation: a - b.
///
/// `a_len` and `b_len` are the length of the operands.
#[inline]
fn subtracting_output_max_len(a_len: usize, b_len: usize) -> usize {
    cmp::max(a_len, b_len)
}

/// Creates a `DigitVec` which can be used as output of an subtraction operation: a - b.
///
/// `a_len` and `b_len` are the length of the operands.
#[inline]
fn digitvec_subtracting_output(a_len: usize, b_len: usize) -> DigitVec {
    let max_len = subtracting_output_max_len(a_len, b_len);
    digitvec_with_len(max_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biguint::biguint_vec::digits_be;

    #[test]
    fn test_sub_digits() {
        // `data`: [(a, b, result)]
        let data = [
            // no borrow
            (digits_be!(20, 10), digits_be!(2, 1), digits_be!(18, 9)),
            // borrow without propagating
            (
                digits_be!(5, 3),
                digits_be!(2, Digit::MAX),
                digits_be!(2, 4),
            ),
            // borrow with propagating
            (
                digits_be!(1, 0, 0, 0, 3),
                digits_be!(Digit::MAX),
                digits_be!(Digit::MAX, Digit::MAX, Digit::MAX, 4),
            ),
            // zero
            (digits_be!(1, 1), digits_be!(1, 1), digits_be!(0)),
            (digits_be!(0), digits_be!(0), digits_be!(0)),
        ];

        for (a, b, result) in data {
            let mut output = digitvec_subtracting_output(a.len(), b.len());
            output.fill(1); // the kernel must reset the output state first
            let output_len = sub_digits(&a, &b, &mut output);
            assert_eq!(result.len(), output_len);
            assert_eq!(result, output[..output_len]);
            assert_eq!(vec!(0; output.len() - output_len), output[output_len..]);
        }
    }

    #[test]
    #[should_panic]
    fn test_sub_digits_with_overflow() {
        let a = digits_be!(1, 2, 3);
        let b = digits_be!(1, 2, 4);
        let mut output = digitvec_subtracting_output(a.len(), b.len());
        sub_digits(&a, &b, &mut output);
    }

    #[test]
    fn test_self_subtraction_is_zero() {
        let a = BigUint::from_digits_be(&[7, 0, Digit::MAX]);
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn test_sub_operators() {
        let a = BigUint::from_digits_be(&[4, 6]);
        let b = BigUint::from_digits_be(&[3, 4]);
        let c = BigUint::from_digits_be(&[1, 2]);
        assert_eq!(&a - &b, c);
        assert_eq!(a.clone() - &b, c);
        assert_eq!(a.clone() - b.clone(), c);

        let mut d = a.clone();
        d -= &b;
        assert_eq!(d, c);

        // subtracting a digit across a borrow
        let e = BigUint::from_digits_be(&[1, 0]);
        assert_eq!(&e - 1, BigUint::from(Digit::MAX));
    }

    #[test]
    fn test_checked_sub() {
        let a = BigUint::from_digits_be(&[1, 2]);
        let b = BigUint::from_digits_be(&[1, 3]);
        assert_eq!(b.checked_sub(&a), Ok(BigUint::from(1 as Digit)));
        assert_eq!(a.checked_sub(&b), Err(ArithmeticError::Underflow));

        assert_eq!(
            BigUint::zero().checked_sub_digit(1),
            Err(ArithmeticError::Underflow)
        );
        assert_eq!(
            BigUint::from(5 as Digit).checked_sub_digit(5),
            Ok(BigUint::zero())
        );
    }
}
