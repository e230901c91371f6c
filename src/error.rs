// src/error.rs
//! Error types.
//!
//! Only malformed input is an error. Numeric degeneracies (division by a zero
//! norm, an `exp` series that has not converged, a view read from a
//! multivector lacking its group) are not: they surface as `inf`/`NaN` or as
//! zeros.

use thiserror::Error;

/// Why a multivector string could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A term other than the first was not preceded by `+` or `-`.
    #[error("Expected '+' or '-'")]
    ExpectedSign,
    /// `*`, `^` or a wedge chain was not followed by a basis vector.
    #[error("Expected basis vector")]
    ExpectedBasisVector,
    #[error("Bad character")]
    BadCharacter,
    /// An exponent marker without digits, e.g. `1e+`.
    #[error("Bad number")]
    BadNumber,
    /// A lexically valid number that does not convert, e.g. a lone `.`.
    #[error("Cannot parse number")]
    InvalidNumber,
    /// An identifier that is not a basis-vector name.
    #[error("Bad identifier")]
    BadIdentifier,
    #[error("Unexpected token")]
    UnexpectedToken,
}

/// A parse failure with its 1-based position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {source_name}, line {line}, column {column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Description of where the input came from, `"string"` by default.
    pub source_name: String,
    pub line: usize,
    pub column: usize,
}

/// Errors raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CgaError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A compressed coordinate array does not match its usage bitmap.
    #[error("usage bitmap {usage:#08b} needs {expected} coordinates, got {got}")]
    CoordinateCount { usage: u32, expected: usize, got: usize },

    /// A usage bitmap names groups beyond grade 5.
    #[error("invalid group usage bitmap {0:#x}")]
    InvalidUsage(u32),

    /// A present group has the wrong number of coordinates.
    #[error("group {group} must hold {expected} coordinates, got {got}")]
    GroupSize { group: usize, expected: usize, got: usize },

    /// A float format string is not of the form `%[width][.precision](f|e|E)`.
    #[error("invalid float format {0:?}")]
    InvalidFormat(String),

    /// An unknown key was passed to `set_string_format`.
    #[error("invalid argument to set_string_format(): {0}")]
    InvalidFormatKey(String),
}

pub type Result<T> = std::result::Result<T, CgaError>;
