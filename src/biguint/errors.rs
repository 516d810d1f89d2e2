// Copyright 2025 Developers of the bignumtools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types of the big unsigned integer operations.

use std::fmt;
use std::fmt::Display;

/// An error returned when parsing a decimal or pipe-form string fails.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseBigUintError {
    /// The input was empty.
    Empty,
    /// A character other than an ASCII decimal digit was found.
    InvalidCharFound,
    /// A pipe-form chunk does not fit a single digit.
    ChunkOutOfRange,
}

impl Display for ParseBigUintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBigUintError::Empty => write!(f, "empty input"),
            ParseBigUintError::InvalidCharFound => write!(f, "invalid character found"),
            ParseBigUintError::ChunkOutOfRange => write!(f, "chunk does not fit a single digit"),
        }
    }
}

impl std::error::Error for ParseBigUintError {}

/// An error returned by the fallible arithmetic operations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArithmeticError {
    /// Subtraction or decrement would produce a negative value.
    Underflow,
    /// Division or modulus with a zero divisor.
    DivisionByZero,
    /// Zero raised to the power of zero.
    ZeroPowZero,
    /// The modulus of a modular combinator was zero or one.
    BadModulus,
    /// Divisibility test against the digit zero.
    ZeroDivisorDigit,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::Underflow => write!(f, "the result would be negative"),
            ArithmeticError::DivisionByZero => write!(f, "attempt to divide by zero"),
            ArithmeticError::ZeroPowZero => write!(f, "zero raised to the power of zero"),
            ArithmeticError::BadModulus => write!(f, "the modulus cannot be zero or one"),
            ArithmeticError::ZeroDivisorDigit => write!(f, "the divisor digit cannot be zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}
