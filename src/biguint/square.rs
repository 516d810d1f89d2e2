// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the squaring operation.

use super::biguint_core::BigUint;
use super::biguint_vec::digitvec_with_len;
use super::digit::{Digit, DoubleDigit, DIGIT_BITS};
use super::len::len_digits;

impl BigUint {
    /// Squares this value.
    ///
    /// Exploits the symmetry of the multiplication matrix: every `d_i²`
    /// lands at position `2i` and every cross pair contributes `2·d_i·d_j`
    /// at position `i + j`, so only the upper triangle is walked.
    pub fn square(&self) -> BigUint {
        if let Some(digit) = self.as_digit() {
            let square = digit as DoubleDigit * digit as DoubleDigit;
            return BigUint::from(square);
        }

        let digits = self.as_digits();
        let n = digits.len();

        // A u64 accumulator vector absorbs the cross terms: a doubled digit
        // product no longer fits the double digit, and its carry can ripple
        // across several limbs once accumulated contents are involved.
        let mut columns = vec![0_u64; 2 * n];
        let column_mask = BASE_U64 - 1;

        // d_i^2 goes to position 2i.
        for (i, &digit) in digits.iter().enumerate() {
            let square = digit as u64 * digit as u64;
            columns[2 * i] = square & column_mask;
            columns[2 * i + 1] = square >> DIGIT_BITS;
        }

        // Cross terms: 2 * d_i * d_j for i < j.
        for i in 0..n {
            for j in (i + 1)..n {
                let cross = 2 * digits[i] as u64 * digits[j] as u64;

                // Partial sums never exceed the final square, which fits 2n
                // digits, so the ripple stays inside `columns`.
                let mut pos = i + j;
                let mut carry = cross;
                while carry != 0 {
                    let sum = columns[pos] + carry;
                    columns[pos] = sum & column_mask;
                    carry = sum >> DIGIT_BITS;
                    pos += 1;
                }
            }
        }

        let mut result = digitvec_with_len(2 * n);
        for (result_digit, &column) in result.iter_mut().zip(columns.iter()) {
            *result_digit = column as Digit;
        }
        let result_len = len_digits(&result);
        BigUint::new(result, result_len)
    }

    /// Squares this value in place.
    pub fn square_me(&mut self) {
        *self = self.square();
    }
}

const BASE_U64: u64 = 1 << DIGIT_BITS;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_tools::quickcheck::DecimalString;
    use ::quickcheck_macros::quickcheck;

    #[test]
    fn test_square_small_values() {
        assert!(BigUint::zero().square().is_zero());
        assert!(BigUint::one().square().is_one());
        assert_eq!(BigUint::two().square(), BigUint::from(4 as Digit));

        // a single digit squaring into two digits
        assert_eq!(
            BigUint::from(Digit::MAX).square(),
            BigUint::from_digits_be(&[Digit::MAX - 1, 1])
        );
    }

    #[test]
    fn test_square_known_value() {
        let a = BigUint::from_base10_str("5000000000").unwrap();
        let expected = BigUint::from_base10_str("25000000000000000000").unwrap();
        assert_eq!(a.square(), expected);
    }

    #[test]
    fn test_square_maximal_digits() {
        // every digit full stresses the cross-term carry ripple
        let a = BigUint::from_digits_be(&[Digit::MAX; 6]);
        assert_eq!(a.square(), a.mul_schoolbook(&a));
    }

    #[test]
    fn test_square_me() {
        let mut a = BigUint::from_digits_be(&[1, 4464]);
        let expected = a.mul_schoolbook(&a);
        a.square_me();
        assert_eq!(a, expected);
    }

    #[quickcheck]
    fn square_equals_self_multiplication(decimal: DecimalString) -> bool {
        let a = BigUint::from_base10_str(&decimal.0).unwrap();
        a.square() == a.mul_schoolbook(&a)
    }
}
