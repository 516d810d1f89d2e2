// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridges `BigUint` to the num-bigint oracle used by the property tests.
//!
//! The conversions are structural: pairs of 16-bit digits combine into the
//! oracle's 32-bit limbs, independently of any string conversion under test.

use crate::biguint::{BigUint, Digit, DIGIT_BITS};
use num_bigint::BigUint as OracleUint;

pub(crate) fn to_oracle(value: &BigUint) -> OracleUint {
    let digits = value.as_digits();
    let mut limbs = Vec::with_capacity(digits.len().div_ceil(2));
    for pair in digits.chunks(2) {
        let mut limb = pair[0] as u32;
        if let Some(&high) = pair.get(1) {
            limb |= (high as u32) << DIGIT_BITS;
        }
        limbs.push(limb);
    }

    OracleUint::new(limbs)
}

pub(crate) fn from_oracle(value: &OracleUint) -> BigUint {
    let mut digits_be: Vec<Digit> = Vec::new();
    for limb in value.iter_u32_digits() {
        digits_be.push(limb as Digit);
        digits_be.push((limb >> DIGIT_BITS) as Digit);
    }
    digits_be.reverse();

    BigUint::from_digits_be(&digits_be)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_round_trips() {
        for decimal in ["0", "1", "65535", "65536", "4294967296", "123456789012345678901234567890"] {
            let a = BigUint::from_base10_str(decimal).unwrap();
            assert_eq!(from_oracle(&to_oracle(&a)), a);
        }
    }
}
