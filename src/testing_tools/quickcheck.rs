// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use quickcheck::{Arbitrary, Gen};
use std::str::from_utf8;

const DECIMAL_CHARS_BYTES: &[u8] = "0123456789".as_bytes();

/// A non-empty string of ASCII decimal digits;
/// leading zeros are possible and intended.
#[derive(Clone, Debug)]
pub(crate) struct DecimalString(pub(crate) String);

impl Arbitrary for DecimalString {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut v = Vec::<u8>::arbitrary(g);
        if v.is_empty() {
            v.push(0);
        }
        for c in v.iter_mut() {
            *c = *g.choose(DECIMAL_CHARS_BYTES).unwrap();
        }

        Self(String::from(from_utf8(&v).unwrap()))
    }
}
