// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The trial division factorizer and its driver loop.

use super::error::FactorizationError;
use super::table::{append_entry, load_factor_table, primes_from_table, FactorTable, PrimeList};
use crate::biguint::BigUint;
use log::{debug, info};
use std::path::Path;

/// Returns the successor of `prime` in the ascending `primes` list.
fn next_prime<'a>(
    primes: &'a PrimeList,
    prime: &BigUint,
) -> Result<&'a BigUint, FactorizationError> {
    let position = primes
        .binary_search(prime)
        .map_err(|_| FactorizationError::PrimeNotFound(prime.clone()))?;

    primes
        .get(position + 1)
        .ok_or_else(|| FactorizationError::PrimeNotFound(prime.clone()))
}

/// Computes the prime factors of `number`, ascending with multiplicity;
/// an empty list means `number` is prime.
///
/// Numbers already tabulated return their entry. A new number is
/// trial-divided by the tabulated primes p, starting from two, until a
/// divisor is found or `p² > number`. A found divisor p leaves a quotient
/// below `number`, whose factorization the table must already hold;
/// the factors of `number` are the factors of that quotient plus p.
pub fn factorize(
    number: &BigUint,
    table: &FactorTable,
    primes: &PrimeList,
) -> Result<Vec<BigUint>, FactorizationError> {
    if number.is_zero() || number.is_one() {
        return Err(FactorizationError::NotFactorizable(number.clone()));
    }

    if let Some(factors) = table.get(number) {
        return Ok(factors.clone());
    }

    let mut divisor = BigUint::two();
    loop {
        if &divisor.square() > number {
            // No prime divides `number` at or below its square root: prime.
            return Ok(Vec::new());
        }

        let (quotient, remainder) = number.div_rem(&divisor)?;
        if remainder.is_zero() {
            let tabulated = table
                .get(&quotient)
                .ok_or_else(|| FactorizationError::MissingEntry(quotient.clone()))?;

            let mut factors = tabulated.clone();
            if factors.is_empty() {
                // The quotient is prime and stands for itself.
                factors.push(quotient);
            }
            factors.push(divisor);
            factors.sort();
            return Ok(factors);
        }

        divisor = next_prime(primes, &divisor)?.clone();
    }
}

/// Runs `steps` factorization steps against the table file at `path`,
/// starting one past the largest tabulated number.
///
/// Every step persists its entry before the next begins.
/// Returns the processed entries in order.
pub fn run(path: &Path, steps: usize) -> Result<Vec<(BigUint, Vec<BigUint>)>, FactorizationError> {
    let mut table = load_factor_table(path)?;
    let mut primes = primes_from_table(&table);
    info!(
        "loaded {} entries ({} primes) from {}",
        table.len(),
        primes.len(),
        path.display()
    );

    let mut processed = Vec::with_capacity(steps);
    for _ in 0..steps {
        let number = match table.last_key_value() {
            Some((largest, _)) => largest.incremented(),
            None => return Err(FactorizationError::EmptyTable),
        };

        let factors = factorize(&number, &table, &primes)?;
        append_entry(path, &number, &factors)?;
        debug!("{}", format_entry(&number, &factors));

        if factors.is_empty() {
            // number > every tabulated prime, so ascending order is kept.
            primes.push(number.clone());
        }
        table.insert(number.clone(), factors.clone());
        processed.push((number, factors));
    }

    Ok(processed)
}

/// Formats an entry the way the driver reports it:
/// `"7 is prime"`, `"8 = 2 * 2 * 2"`.
pub fn format_entry(number: &BigUint, factors: &[BigUint]) -> String {
    match factors.split_first() {
        None => format!("{number} is prime"),
        Some((first, rest)) => {
            let mut line = format!("{number} = {first}");
            for factor in rest {
                line.push_str(" * ");
                line.push_str(&factor.to_base10_string());
            }
            line
        }
    }
}
