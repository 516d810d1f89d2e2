// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use bignumtools::biguint::{BigUint, Digit};
use bignumtools::factorization::{
    count_lines, format_entry, load_factor_table, run, FactorizationError,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn number(n: Digit) -> BigUint {
    BigUint::from(n)
}

fn seeded_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "2\n3\n4 2 2\n5\n6 2 3").unwrap();
    file
}

#[test]
fn run_advances_from_the_seeded_table() {
    let file = seeded_file();

    let entries = run(file.path(), 4).unwrap();
    let reported: Vec<String> = entries
        .iter()
        .map(|(n, factors)| format_entry(n, factors))
        .collect();
    assert_eq!(
        reported,
        vec!["7 is prime", "8 = 2 * 2 * 2", "9 = 3 * 3", "10 = 2 * 5"]
    );
}

#[test]
fn run_persists_every_entry() {
    let file = seeded_file();

    run(file.path(), 4).unwrap();

    let table = load_factor_table(file.path()).unwrap();
    assert_eq!(table.len(), 9);
    assert!(table[&number(7)].is_empty());
    assert_eq!(table[&number(8)], vec![number(2), number(2), number(2)]);
    assert_eq!(table[&number(9)], vec![number(3), number(3)]);
    assert_eq!(table[&number(10)], vec![number(2), number(5)]);

    // the seeded file had 4 line breaks; every step appends one
    assert_eq!(count_lines(file.path()).unwrap(), 8);
}

#[test]
fn run_resumes_where_the_file_ends() {
    let file = seeded_file();

    run(file.path(), 4).unwrap();
    let entries = run(file.path(), 3).unwrap();

    let reported: Vec<String> = entries
        .iter()
        .map(|(n, factors)| format_entry(n, factors))
        .collect();
    assert_eq!(reported, vec!["11 is prime", "12 = 2 * 2 * 3", "13 is prime"]);
}

#[test]
fn run_reaches_three_digit_numbers() {
    let file = seeded_file();

    let entries = run(file.path(), 150).unwrap();
    let (last_number, last_factors) = entries.last().unwrap();
    assert_eq!(*last_number, BigUint::from(156 as Digit));
    assert_eq!(
        *last_factors,
        vec![number(2), number(2), number(3), number(13)]
    );

    // every composite entry multiplies back to its number
    let table = load_factor_table(file.path()).unwrap();
    for (n, factors) in &table {
        if factors.is_empty() {
            continue;
        }
        let product = factors
            .iter()
            .fold(BigUint::one(), |product, factor| product * factor);
        assert_eq!(product, *n);
    }
}

#[test]
fn run_fails_on_a_missing_file() {
    let result = run(std::path::Path::new("no-such-factor-table.txt"), 1);
    assert!(matches!(result, Err(FactorizationError::Io(_))));
}

#[test]
fn run_fails_on_an_empty_table() {
    let file = NamedTempFile::new().unwrap();
    let result = run(file.path(), 1);
    assert!(matches!(result, Err(FactorizationError::EmptyTable)));
}

#[test]
fn blank_and_malformed_lines_are_skipped_on_load() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "2\n\n3\ngarbage line\n4 2 2\n5\n6 2 3").unwrap();

    let entries = run(file.path(), 1).unwrap();
    assert_eq!(
        format_entry(&entries[0].0, &entries[0].1),
        "7 is prime"
    );
}
