// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use quickcheck::Gen;

const DECIMAL_CHARS_BYTES: &[u8] = "0123456789".as_bytes();
const NONZERO_DECIMAL_CHARS_BYTES: &[u8] = "123456789".as_bytes();

/// Returns a random decimal string of `n` digits without a leading zero.
pub fn random_decimal(n: usize) -> String {
    use std::str::from_utf8;

    assert!(n > 0);

    let mut gen = Gen::new(0);
    let mut chars = Vec::with_capacity(n);
    chars.push(*gen.choose(NONZERO_DECIMAL_CHARS_BYTES).unwrap());
    for _ in 1..n {
        chars.push(*gen.choose(DECIMAL_CHARS_BYTES).unwrap());
    }

    String::from(from_utf8(&chars).unwrap())
}
