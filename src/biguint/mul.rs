// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements multiplication operations.
//!
//! Three algorithms produce identical canonical results: the schoolbook
//! kernel below, the Karatsuba recursion and the FFT transform. The `Mul`
//! operators dispatch between them by operand length.

use super::biguint_core::BigUint;
use super::biguint_slice::{is_valid_biguint_slice, BigUintSlice};
use super::biguint_vec::{digitvec_with_len, DigitVec};
use super::cmp::cmp_digits;
use super::digit::{Digit, DoubleDigit, DIGIT_BITS};
use super::len::len_digits;
use super::zero::is_zero_digits;
use std::cmp;
use std::cmp::Ordering;
use std::ops::{Mul, MulAssign};

/// Digit length both operands must reach before `Mul` routes to Karatsuba.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Digit length both operands must reach before `Mul` routes to the FFT.
///
/// Kept far below the operand sizes where the FFT's double precision stops
/// being exact (transforms up to 2^21 coefficients with 16-bit digits).
pub const FFT_THRESHOLD: usize = 512;

/// Multiplies `a` with the single `digit`, and fills the output to `result`,
/// returning the length of the output digits.
///
/// - `result` must have a length no less than `a.len() + 1`.
/// - `result` will be filled with 0 first, and then the output digits.
#[inline]
pub(crate) fn mul_digit_digits(a: &BigUintSlice, digit: Digit, result: &mut [Digit]) -> usize {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(result.len() >= multiplying_output_max_len(a.len(), 1));

    result.fill(0);

    if digit == 0 || is_zero_digits(a) {
        return 1;
    }

    // A single run of the long multiplication inner loop:
    // every product fits a double digit together with the incoming carry.
    let mut carry: DoubleDigit = 0;
    for (&a_digit, result_digit) in a.iter().zip(result.iter_mut()) {
        let t = a_digit as DoubleDigit * digit as DoubleDigit + carry;
        *result_digit = t as Digit;
        carry = t >> DIGIT_BITS;
    }

    if carry > 0 {
        result[a.len()] = carry as Digit;
        return a.len() + 1;
    }

    len_digits(&result[..a.len()])
}

/// Multiplies `a` with `b` by the schoolbook algorithm, and fills the output
/// to `result`, returning the length of the output digits.
///
/// - `result` must have a length no less than the return value of [`multiplying_output_max_len`].
/// - `result` will be filled with 0 first, and then the output digits.
#[inline]
pub(crate) fn mul_digits(a: &BigUintSlice, b: &BigUintSlice, result: &mut [Digit]) -> usize {
    debug_assert!(is_valid_biguint_slice(a));
    debug_assert!(is_valid_biguint_slice(b));
    debug_assert!(result.len() >= multiplying_output_max_len(a.len(), b.len()));

    result.fill(0);

    if is_zero_digits(a) || is_zero_digits(b) {
        return 1;
    }

    // Employs the ["long multiplication"][1] algorithm:
    // multiplying each digit of the multiplier with the multiplicand,
    // and then adding up all the properly shifted partial products.
    //
    // The addition is done concurrently with the multiplication,
    // accumulating into a properly shifted "output window".
    //
    // [1]: https://en.wikipedia.org/wiki/Multiplication_algorithm#Long_multiplication
    let (greater, smaller) = if cmp_digits(a, b) == Ordering::Less {
        (b, a)
    } else {
        (a, b)
    };

    // +1 for the possible carry at the most significant digit of `greater`.
    let output_window_len = greater.len() + 1;

    for (output_window_offset, &smaller_digit) in smaller.iter().enumerate() {
        let mut carry: DoubleDigit = 0;

        let output_window =
            &mut result[output_window_offset..(output_window_offset + output_window_len)];
        for (&greater_digit, result_digit) in greater.iter().zip(output_window.iter_mut()) {
            // t = smaller_digit * greater_digit + result_digit + carry
            //
            // `t` cannot overflow the double digit:
            // (b - 1) * (b - 1) + (b - 1) + (b - 1) = b^2 - 1.
            // `result_digit` holds the accumulated value from the previous
            // rounds; the low part of `t` is stored back into it.
            let t = smaller_digit as DoubleDigit * greater_digit as DoubleDigit
                + *result_digit as DoubleDigit
                + carry;

            *result_digit = t as Digit; // t mod BASE
            carry = t >> DIGIT_BITS;
        }

        if carry > 0 {
            output_window[greater.len()] = carry as Digit;
        }
    }

    len_digits(result)
}

impl BigUint {
    /// Multiplies this value by a single digit.
    pub fn mul_digit(&self, digit: Digit) -> BigUint {
        let a = self.as_digits();
        let mut output = digitvec_multiplying_output(a.len(), 1);
        let output_len = mul_digit_digits(a, digit, &mut output);

        BigUint::new(output, output_len)
    }

    /// Multiplies by the quadratic schoolbook algorithm.
    ///
    /// This is the baseline the other multiplication algorithms fall back to
    /// for small operands.
    pub fn mul_schoolbook(&self, rhs: &BigUint) -> BigUint {
        let a = self.as_digits();
        let b = rhs.as_digits();
        let mut output = digitvec_multiplying_output(a.len(), b.len());
        let output_len = mul_digits(a, b, &mut output);

        BigUint::new(output, output_len)
    }

    /// Multiplies, selecting the algorithm by operand length.
    fn multiply(&self, rhs: &BigUint) -> BigUint {
        let min_len = cmp::min(self.digits_len, rhs.digits_len);
        if min_len >= FFT_THRESHOLD {
            self.mul_fft(rhs)
        } else if min_len >= KARATSUBA_THRESHOLD {
            self.mul_karatsuba(rhs)
        } else {
            self.mul_schoolbook(rhs)
        }
    }
}

impl<'a, 'b> Mul<&'b BigUint> for &'a BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &BigUint) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<'a> Mul<&'a BigUint> for BigUint {
    type Output = BigUint;

    fn mul(self, rhs: &Self) -> Self::Output {
        (&self).mul(rhs)
    }
}

impl Mul for BigUint {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        (&self).mul(&rhs)
    }
}

impl<'a> Mul<Digit> for &'a BigUint {
    type Output = BigUint;

    fn mul(self, rhs: Digit) -> Self::Output {
        self.mul_digit(rhs)
    }
}

impl Mul<Digit> for BigUint {
    type Output = BigUint;

    fn mul(self, rhs: Digit) -> Self::Output {
        self.mul_digit(rhs)
    }
}

impl MulAssign<&BigUint> for BigUint {
    fn mul_assign(&mut self, rhs: &BigUint) {
        *self = (&*self).mul(rhs);
    }
}

impl MulAssign for BigUint {
    fn mul_assign(&mut self, rhs: Self) {
        *self = (&*self).mul(&rhs);
    }
}

impl MulAssign<Digit> for BigUint {
    fn mul_assign(&mut self, rhs: Digit) {
        *self = self.mul_digit(rhs);
    }
}

/// Returns the length of the largest possible output of an multiplication operation: a * b.
///
/// `a_len` and `b_len` are the length of the operands.
#[inline]
fn multiplying_output_max_len(a_len: usize, b_len: usize) -> usize {
    a_len + b_len
}

/// Creates a `DigitVec` which can be used as output of an multiplication operation: a * b.
///
/// `a_len` and `b_len` are the length of the operands.
#[inline]
pub(crate) fn digitvec_multiplying_output(a_len: usize, b_len: usize) -> DigitVec {
    let max_len = multiplying_output_max_len(a_len, b_len);
    digitvec_with_len(max_len)
}
