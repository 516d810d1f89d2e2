// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the modular combinators.
//!
//! All combinators reject a modulus of zero or one.

use super::biguint_core::BigUint;
use super::errors::ArithmeticError;

/// Calculates `(lhs + rhs) mod modulus`.
pub fn mod_add(
    lhs: &BigUint,
    rhs: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, ArithmeticError> {
    check_modulus(modulus)?;

    let lhs = lhs % modulus;
    let rhs = rhs % modulus;

    // Both residues are below the modulus, so the sum is below 2·modulus
    // and one conditional subtraction reduces it.
    let mut sum = &lhs + &rhs;
    if sum >= *modulus {
        sum -= modulus;
    }

    Ok(sum)
}

/// Calculates `(lhs - rhs) mod modulus`,
/// wrapping around the modulus when the reduced `rhs` is the larger.
pub fn mod_sub(
    lhs: &BigUint,
    rhs: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, ArithmeticError> {
    check_modulus(modulus)?;

    let lhs = lhs % modulus;
    let rhs = rhs % modulus;

    if lhs >= rhs {
        Ok(&lhs - &rhs)
    } else {
        Ok(modulus - &(&rhs - &lhs))
    }
}

/// Calculates `(lhs * rhs) mod modulus`.
pub fn mod_mul(
    lhs: &BigUint,
    rhs: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, ArithmeticError> {
    check_modulus(modulus)?;

    let lhs = lhs % modulus;
    let rhs = rhs % modulus;
    let product = &lhs * &rhs;

    Ok(&product % modulus)
}

fn check_modulus(modulus: &BigUint) -> Result<(), ArithmeticError> {
    if modulus.is_zero() || modulus.is_one() {
        return Err(ArithmeticError::BadModulus);
    }

    Ok(())
}
