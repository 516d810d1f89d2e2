// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the Karatsuba multiplication.

use super::biguint_core::BigUint;
use super::len::len_digits;

impl BigUint {
    /// Multiplies by the Karatsuba divide-and-conquer recursion.
    ///
    /// Splitting both operands at `m = ⌊n/2⌋` digits, with
    /// `a = high1·BASE^m + low1` and `b = high2·BASE^m + low2`,
    /// three recursive products
    /// `z0 = low1·low2`, `z2 = high1·high2` and
    /// `z1 = (low1 + high1)·(low2 + high2)`
    /// assemble the result as `z2·BASE^2m + (z1 − z2 − z0)·BASE^m + z0`.
    pub fn mul_karatsuba(&self, rhs: &BigUint) -> BigUint {
        // Below two digits per operand the schoolbook kernel wins outright.
        if self.digits_len < 2 || rhs.digits_len < 2 {
            return self.mul_schoolbook(rhs);
        }

        let middle = self.digits_len / 2;
        let (low1, high1) = self.split(middle);
        let (low2, high2) = rhs.split(middle);

        let z0 = low1.mul_karatsuba(&low2);
        let z2 = high1.mul_karatsuba(&high2);
        let z1 = (&low1 + &high1).mul_karatsuba(&(&low2 + &high2));

        // z1 - z2 - z0 is the cross term low1·high2 + high1·low2,
        // non-negative by construction.
        let cross = &z1 - &z2 - &z0;
        &z2.shifted_left(2 * middle) + &(&cross.shifted_left(middle) + &z0)
    }

    /// Splits into `(low, high)` at digit position `pos`:
    /// `self = high·BASE^pos + low`.
    fn split(&self, pos: usize) -> (BigUint, BigUint) {
        if pos >= self.digits_len {
            return (self.clone(), BigUint::zero());
        }
        debug_assert!(pos > 0);

        let digits = self.as_digits();
        let low_digits = digits[..pos].to_vec();
        let low_len = len_digits(&low_digits);
        let high_digits = digits[pos..].to_vec();
        let high_len = len_digits(&high_digits);

        (
            BigUint::new(low_digits, low_len),
            BigUint::new(high_digits, high_len),
        )
    }
}
