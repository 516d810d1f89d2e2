// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements addition operations.

use super::biguint_core::BigUint;
use super::biguint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::biguint_vec::{digitvec_with_len, DigitVec};
use super::digit::{Digit, DoubleDigit, DIGIT_BITS};
use super::len::len_digits;
use std::cmp;
use std::ops::{Add, AddAssign};

/// Adds `a` with `b`, and fills the output to `result`,
/// returning the length of the output digits.
///
/// - `result` must have a length no less than the return value of [`adding_output_max_len`].
/// - `result` will be filled with 0 first, and then the output digits.
#[inline]
pub(crate) fn add_digits(a: &BigUintSlice, b: &BigUintSlice, result: &mut [Digit]) -> usize {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));
    debug_assert!(result.len() >= adding_output_max_len(a.len(), b.len()));

    result.fill(0);

    let (greater, smaller) = if a.len() < b.len() { (b, a) } else { (a, b) };

    // Employs the "long addition" algorithm:
    // adding digits from the least significant position to the most significant,
    // accumulating each column in a double digit whose high part is the carry
    // into the next column.
    let mut carry: DoubleDigit = 0;
    for (i, result_digit) in result[..greater.len()].iter_mut().enumerate() {
        let mut sum = greater[i] as DoubleDigit + carry;
        if i < smaller.len() {
            sum += smaller[i] as DoubleDigit;
        }
        *result_digit = sum as Digit; // sum mod BASE
        carry = sum >> DIGIT_BITS;
    }

    if carry > 0 {
        result[greater.len()] = 1;
        return greater.len() + 1;
    }

    len_digits(&result[..greater.len()])
}

/// Adds the single `digit` to `a`, and fills the output to `result`,
/// returning the length of the output digits.
///
/// The contract on `result` is the same as for [`add_digits`].
#[inline]
pub(crate) fn add_digit(a: &BigUintSlice, digit: Digit, result: &mut [Digit]) -> usize {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(result.len() >= adding_output_max_len(a.len(), 1));

    result.fill(0);

    // The digit enters the least significant column as an initial carry.
    let mut carry = digit as DoubleDigit;
    for (&a_digit, result_digit) in a.iter().zip(result.iter_mut()) {
        let sum = a_digit as DoubleDigit + carry;
        *result_digit = sum as Digit;
        carry = sum >> DIGIT_BITS;
    }

    if carry > 0 {
        result[a.len()] = 1;
        return a.len() + 1;
    }

    len_digits(&result[..a.len()])
}

impl<'a, 'b> Add<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    fn add(self, rhs: &BigUint) -> Self::Output {
        let a = self.as_digits();
        let b = rhs.as_digits();
        let mut output = digitvec_adding_output(a.len(), b.len());
        let output_len = add_digits(a, b, &mut output);

        BigUint::new(output, output_len)
    }
}

impl<'a> Add<&'a BigUint> for BigUint {
    type Output = BigUint;

    fn add(self, rhs: &Self) -> Self::Output {
        (&self).add(rhs)
    }
}

impl Add for BigUint {
    type Output = BigUint;

    fn add(self, rhs: Self) -> Self::Output {
        (&self).add(&rhs)
    }
}

impl<'a> Add<Digit> for &'a BigUint {
    type Output = BigUint;

    fn add(self, rhs: Digit) -> Self::Output {
        let a = self.as_digits();
        let mut output = digitvec_adding_output(a.len(), 1);
        let output_len = add_digit(a, rhs, &mut output);

        BigUint::new(output, output_len)
    }
}

impl Add<Digit> for BigUint {
    type Output = BigUint;

    fn add(self, rhs: Digit) -> Self::Output {
        (&self).add(rhs)
    }
}

impl AddAssign<&BigUint> for BigUint {
    fn add_assign(&mut self, rhs: &BigUint) {
        *self = (&*self).add(rhs);
    }
}

impl AddAssign for BigUint {
    fn add_assign(&mut self, rhs: Self) {
        *self = (&*self).add(&rhs);
    }
}

impl AddAssign<Digit> for BigUint {
    fn add_assign(&mut self, rhs: Digit) {
        *self = (&*self).add(rhs);
    }
}

/// Returns the length of the largest possible output of an addition operation: a + b.
///
/// `a_len` and `b_len` are the length of the operands.
#[inline]
fn adding_output_max_len(a_len: usize, b_len: usize) -> usize {
    cmp::max(a_len, b_len) + 1
}

/// Creates a `DigitVec` which can be used as output of an addition operation: a + b.
///
/// `a_len` and `b_len` are the length of the operands.
#[inline]
fn digitvec_adding_output(a_len: usize, b_len: usize) -> DigitVec {
    let max_len = adding_output_max_len(a_len, b_len);
    digitvec_with_len(max_len)
}
