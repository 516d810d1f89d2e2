// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the greatest common divisor and the least common multiple.

use super::biguint_core::BigUint;

/// Computes the greatest common divisor of `a` and `b`.
///
/// Employs the Euclidean algorithm, replacing the larger operand by the
/// division remainder until it vanishes. `gcd(x, 0) = x` for every `x`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let t = &a % &b;
        a = b;
        b = t;
    }

    a
}

/// Computes the least common multiple of `a` and `b`;
/// zero when either operand is zero.
pub fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    if a.is_zero() || b.is_zero() {
        return BigUint::zero();
    }

    // a / gcd(a, b) divides exactly.
    let divisor = gcd(a, b);
    &(a / &divisor) * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biguint::digit::Digit;
    use crate::testing_tools::biguint::{from_oracle, to_oracle};
    use crate::testing_tools::quickcheck::DecimalString;
    use num_bigint::BigUint as OracleUint;
    use quickcheck::QuickCheck;

    #[test]
    fn test_gcd_known_values() {
        // `data`: [(a, b, gcd)]
        let data: [(Digit, Digit, Digit); 4] =
            [(17, 1, 1), (127, 45, 1), (693, 609, 21), (0, 5, 5)];
        for (a, b, expected) in data {
            let result = gcd(&BigUint::from(a), &BigUint::from(b));
            assert_eq!(result, BigUint::from(expected));
        }
    }

    #[test]
    fn test_gcd_large_operands() {
        let a = BigUint::from_base10_str("12345678901234567890").unwrap();
        let b = BigUint::from_base10_str("11223344556677889900").unwrap();
        assert_eq!(gcd(&a, &b), BigUint::from_base10_str("30").unwrap());
    }

    #[test]
    fn test_gcd_with_zero_operands() {
        let a = BigUint::from_base10_str("123456789").unwrap();
        assert_eq!(gcd(&a, &BigUint::zero()), a);
        assert_eq!(gcd(&BigUint::zero(), &a), a);
        assert!(gcd(&BigUint::zero(), &BigUint::zero()).is_zero());
    }

    #[test]
    fn test_lcm() {
        let a = BigUint::from(4 as Digit);
        let b = BigUint::from(6 as Digit);
        assert_eq!(lcm(&a, &b), BigUint::from(12 as Digit));

        assert!(lcm(&a, &BigUint::zero()).is_zero());
        assert!(lcm(&BigUint::zero(), &b).is_zero());
    }

    #[test]
    fn test_gcd_lcm_product_identity() {
        const TEST_NUMBER: u64 = 200;

        // gcd(a, b) · lcm(a, b) = a · b
        fn prop(a_decimal: DecimalString, b_decimal: DecimalString) -> bool {
            let a = BigUint::from_base10_str(&a_decimal.0).unwrap();
            let b = BigUint::from_base10_str(&b_decimal.0).unwrap();
            if a.is_zero() || b.is_zero() {
                return true;
            }

            gcd(&a, &b) * lcm(&a, &b) == &a * &b
        }

        QuickCheck::new()
            .tests(TEST_NUMBER)
            .quickcheck(prop as fn(DecimalString, DecimalString) -> bool);
    }

    #[test]
    fn test_gcd_against_the_oracle() {
        const TEST_NUMBER: u64 = 200;

        fn prop(a_decimal: DecimalString, b_decimal: DecimalString) -> bool {
            let a = BigUint::from_base10_str(&a_decimal.0).unwrap();
            let b = BigUint::from_base10_str(&b_decimal.0).unwrap();

            fn oracle_gcd(mut a: OracleUint, mut b: OracleUint) -> OracleUint {
                while b != OracleUint::from(0_u8) {
                    let t = &a % &b;
                    a = b;
                    b = t;
                }
                a
            }

            gcd(&a, &b) == from_oracle(&oracle_gcd(to_oracle(&a), to_oracle(&b)))
        }

        QuickCheck::new()
            .tests(TEST_NUMBER)
            .quickcheck(prop as fn(DecimalString, DecimalString) -> bool);
    }
}
