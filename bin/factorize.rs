// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grows a file-backed factorization table by trial division.
//!
//! # Examples
//!
//! cargo run --bin factorize -- --steps 100

use bignumtools::factorization::{format_entry, run};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Factorizes successive integers, extending a persistent factor table.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Arguments {
    /// Path of the factorization table file.
    #[arg(default_value = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/factorization/dev-factorization.txt"
    ))]
    table: PathBuf,

    /// Number of successive integers to factorize.
    #[arg(long, default_value_t = 1000)]
    steps: usize,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arguments = Arguments::parse();
    println!("Working with {}", arguments.table.display());

    match run(&arguments.table, arguments.steps) {
        Ok(entries) => {
            for (number, factors) in &entries {
                println!("{}", format_entry(number, factors));
            }
            println!("{} numbers have been factorized", entries.len());
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
