// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the FFT multiplication.
//!
//! Each operand's digit vector is read as the coefficients of a polynomial
//! over the complex numbers. Both polynomials are padded to the next power of
//! two no less than `len1 + len2`, transformed, multiplied pointwise and
//! transformed back; rounding the real parts and propagating carries modulo
//! `BASE` yields the product digits.

use super::biguint_core::BigUint;
use super::biguint_slice::BigUintSlice;
use super::biguint_vec::digitvec_with_len;
use super::digit::{Digit, BASE, DIGIT_BITS};
use super::len::len_digits;
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

impl BigUint {
    /// Multiplies via forward and inverse FFT over `Complex64`.
    ///
    /// Exact while `n · BASE²` stays within the f64 mantissa,
    /// i.e., for transforms up to 2^21 coefficients with 16-bit digits.
    pub fn mul_fft(&self, rhs: &BigUint) -> BigUint {
        let a = self.as_digits();
        let b = rhs.as_digits();

        let result_len = a.len() + b.len();
        let fft_size = result_len.next_power_of_two();

        let mut a_values = digits_to_complex(a, fft_size);
        let mut b_values = digits_to_complex(b, fft_size);

        let mut planner = FftPlanner::new();
        let forward = planner.plan_fft_forward(fft_size);
        forward.process(&mut a_values);
        forward.process(&mut b_values);

        for (a_value, &b_value) in a_values.iter_mut().zip(b_values.iter()) {
            *a_value *= b_value;
        }

        let inverse = planner.plan_fft_inverse(fft_size);
        inverse.process(&mut a_values);

        // The inverse transform is unnormalized: every coefficient carries a
        // factor of `fft_size`. Rounding recovers the exact convolution
        // coefficients, which stay below 2^53 at the supported sizes.
        let scale = fft_size as f64;
        let mut result = digitvec_with_len(result_len);
        let mut carry: i64 = 0;
        for (value, result_digit) in a_values[..result_len].iter().zip(result.iter_mut()) {
            let coefficient = (value.re / scale).round() as i64 + carry;
            *result_digit = (coefficient & (BASE as i64 - 1)) as Digit;
            carry = coefficient >> DIGIT_BITS;
        }
        // The product fits `result_len` digits.
        debug_assert_eq!(carry, 0);

        let result_digits_len = len_digits(&result);
        BigUint::new(result, result_digits_len)
    }
}

fn digits_to_complex(digits: &BigUintSlice, fft_size: usize) -> Vec<Complex64> {
    let mut values = vec![Complex64::new(0.0, 0.0); fft_size];
    for (value, &digit) in values.iter_mut().zip(digits.iter()) {
        *value = Complex64::new(digit as f64, 0.0);
    }
    values
}
