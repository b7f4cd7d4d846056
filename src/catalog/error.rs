//! Rule evaluation errors.

use crate::core::ValueKind;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Misuse of a rule on a field.
///
/// These are developer errors in a declaration. They are logged and the
/// rule is skipped for that field; they never become violations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleError {
    #[error("unable to parse {rule} value '{raw}' as an integer")]
    InvalidIntegerBound {
        rule: &'static str,
        raw: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unable to parse {rule} value '{raw}' as a decimal")]
    InvalidDecimalBound {
        rule: &'static str,
        raw: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("unable to parse {rule} value '{raw}' as a length")]
    InvalidLength {
        rule: &'static str,
        raw: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("{rule} cannot be applied to a {kind} field")]
    KindMismatch { rule: &'static str, kind: ValueKind },
}
