// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The persisted factorization table.
//!
//! The table file is UTF-8 text with one entry per line:
//! `NUMBER [SP FACTOR]*`, all base-10 integers. An entry without factors
//! records that the number itself is prime.

use super::error::FactorizationError;
use crate::biguint::BigUint;
use log::warn;
use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

/// Maps every known number to its ordered prime factorization;
/// an empty factor list marks the number itself prime.
pub type FactorTable = BTreeMap<BigUint, Vec<BigUint>>;

/// The primes of a [`FactorTable`], ascending.
pub type PrimeList = Vec<BigUint>;

/// Loads a factor table from the file at `path`.
///
/// The load is best-effort: blank and unparsable lines are skipped with a
/// diagnostic. I/O failures abort.
pub fn load_factor_table(path: &Path) -> Result<FactorTable, FactorizationError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut table = FactorTable::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        match parse_line(&line, line_number) {
            Ok(Some((number, factors))) => {
                table.insert(number, factors);
            }
            Ok(None) => warn!("table line {line_number} is empty"),
            Err(error) => warn!("skipping table line {line_number}: {error}"),
        }
    }

    Ok(table)
}

/// Parses one table line into its number and factors;
/// `Ok(None)` for a blank line.
pub(crate) fn parse_line(
    line: &str,
    line_number: usize,
) -> Result<Option<(BigUint, Vec<BigUint>)>, FactorizationError> {
    let mut fields = line.split_ascii_whitespace();
    let number = match fields.next() {
        Some(field) => parse_field(field, line_number)?,
        None => return Ok(None),
    };

    let mut factors = Vec::new();
    for field in fields {
        factors.push(parse_field(field, line_number)?);
    }

    Ok(Some((number, factors)))
}

fn parse_field(field: &str, line_number: usize) -> Result<BigUint, FactorizationError> {
    BigUint::from_base10_str(field).map_err(|source| FactorizationError::Parse {
        line: line_number,
        source,
    })
}

/// Collects every prime recorded in `table`, ascending.
pub fn primes_from_table(table: &FactorTable) -> PrimeList {
    table
        .iter()
        .filter(|(_, factors)| factors.is_empty())
        .map(|(number, _)| number.clone())
        .collect()
}

/// Appends `number` and its factors as a new line at the end of the file.
///
/// The entry starts with a newline, so an unterminated final line cannot be
/// joined with it.
pub fn append_entry(
    path: &Path,
    number: &BigUint,
    factors: &[BigUint],
) -> Result<(), FactorizationError> {
    let mut file = OpenOptions::new().append(true).open(path)?;

    let mut line = format!("\n{number}");
    for factor in factors {
        line.push(' ');
        line.push_str(&factor.to_base10_string());
    }
    file.write_all(line.as_bytes())?;

    Ok(())
}

/// Counts the newline characters of the file at `path`,
/// reading it as raw bytes through a fixed buffer.
pub fn count_lines(path: &Path) -> Result<usize, FactorizationError> {
    let mut file = File::open(path)?;
    let mut buffer = [0_u8; 4096];

    let mut count = 0;
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        count += buffer[..bytes_read]
            .iter()
            .filter(|&&byte| byte == b'\n')
            .count();
    }

    Ok(count)
}
