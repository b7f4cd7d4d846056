//! Constraint declaration errors.

use thiserror::Error;

/// Errors found while parsing a constraint declaration.
///
/// These never abort parsing: the offending pair is logged and skipped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeclarationError {
    #[error("empty constraint pair")]
    EmptyPair,

    #[error("constraint pair '{pair}' doesn't contain the '=' separator")]
    MissingSeparator { pair: String },

    #[error("constraint pair '{pair}' has no rule name")]
    MissingRuleName { pair: String },
}
