// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::biguint_core::BigUint;
use super::digit::{Byte, Digit, DoubleDigit, BASE};
use crate::biguint::errors::ParseBigUintError;

impl From<Byte> for BigUint {
    fn from(n: Byte) -> Self {
        BigUint::new(vec![n as Digit], 1)
    }
}

impl From<Digit> for BigUint {
    fn from(n: Digit) -> Self {
        BigUint::new(vec![n], 1)
    }
}

impl From<DoubleDigit> for BigUint {
    fn from(n: DoubleDigit) -> Self {
        if n < BASE {
            return BigUint::new(vec![n as Digit], 1);
        }

        let low = (n % BASE) as Digit;
        let high = (n / BASE) as Digit;
        BigUint::new(vec![low, high], 2)
    }
}

impl TryFrom<&str> for BigUint {
    type Error = ParseBigUintError;

    fn try_from(decimal: &str) -> Result<Self, Self::Error> {
        BigUint::from_base10_str(decimal)
    }
}
