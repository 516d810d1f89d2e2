// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error type of the factorization table and driver.

use crate::biguint::{ArithmeticError, BigUint, ParseBigUintError};
use thiserror::Error;

/// An error returned by the factorization table loader and driver.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FactorizationError {
    #[error("table i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse table line {line}: {source}")]
    Parse {
        line: usize,
        source: ParseBigUintError,
    },

    #[error("prime {0} has no tabulated successor")]
    PrimeNotFound(BigUint),

    #[error("no tabulated factorization for {0}")]
    MissingEntry(BigUint),

    #[error("{0} cannot be factorized")]
    NotFactorizable(BigUint),

    #[error("the factor table is empty")]
    EmptyTable,

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
