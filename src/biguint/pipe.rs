// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Implements the pipe-form diagnostic string conversions.
//!
//! The pipe form prints the big-endian digits as decimal chunks joined by
//! `'|'`, e.g. `"1|4464"` for 70 000. It is reserved for debugging and unit
//! tests.

use super::biguint_core::BigUint;
use super::digit::{Digit, BASE};
use super::errors::ParseBigUintError;

impl BigUint {
    /// Returns the pipe-form representation of this value.
    pub fn to_pipe_string(&self) -> String {
        let chunks: Vec<String> = self
            .as_digits()
            .iter()
            .rev()
            .map(|digit| digit.to_string())
            .collect();
        chunks.join("|")
    }

    /// Parses a pipe-form string; an empty input is zero.
    ///
    /// Every chunk must be a decimal number below `BASE`.
    pub fn from_pipe_str(pipe_form: &str) -> Result<BigUint, ParseBigUintError> {
        if pipe_form.is_empty() {
            return Ok(BigUint::zero());
        }

        let mut digits_be: Vec<Digit> = Vec::new();
        for chunk in pipe_form.split('|') {
            let value: u64 = chunk
                .parse()
                .map_err(|_| ParseBigUintError::InvalidCharFound)?;
            if value >= BASE as u64 {
                return Err(ParseBigUintError::ChunkOutOfRange);
            }
            digits_be.push(value as Digit);
        }

        Ok(Self::from_digits_be(&digits_be))
    }
}
