// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::biguint_core::BigUint;

impl BigUint {
    pub fn is_even(&self) -> bool {
        self.least_significant_digit() & 1 == 0
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    pub fn is_one(&self) -> bool {
        self.as_digits() == [1]
    }
}
