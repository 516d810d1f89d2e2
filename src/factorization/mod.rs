// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod error;
mod factorize;
mod table;

pub use error::FactorizationError;
pub use factorize::{factorize, format_entry, run};
pub use table::{
    append_entry, count_lines, load_factor_table, primes_from_table, FactorTable, PrimeList,
};
