//! Constraint declaration parsing.
//!
//! A declaration is attached to a field as a string of comma-separated
//! `rule=value` pairs:
//!
//! ```text
//! required=true,min=0.0,max=90.0
//! ```
//!
//! Anything after the first `:` is reserved and ignored. Malformed pairs are
//! logged and skipped without affecting the remaining pairs.
//!
//! # Example
//!
//! ```rust
//! use structassert::declaration::Constraints;
//!
//! let constraints = Constraints::parse("required=true,maxlength=3");
//! assert_eq!(constraints.get("maxlength"), Some("3"));
//! assert_eq!(constraints.rules().collect::<Vec<_>>(), vec!["required", "maxlength"]);
//! ```

pub mod error;

pub use error::DeclarationError;

use tracing::{debug, warn};

/// Parsed rule-to-parameter mapping of one field, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Constraints<'a> {
    entries: Vec<(&'a str, &'a str)>,
}

impl<'a> Constraints<'a> {
    /// Parse a declaration, logging and skipping malformed pairs.
    pub fn parse(declaration: &'a str) -> Self {
        let (active, reserved) = match declaration.split_once(':') {
            Some((head, tail)) => (head, Some(tail)),
            None => (declaration, None),
        };

        if let Some(reserved) = reserved.filter(|segment| !segment.is_empty()) {
            debug!(declaration, reserved, "ignoring reserved declaration segment");
        }

        let mut constraints = Self::default();
        if active.trim().is_empty() {
            return constraints;
        }

        for pair in active.split(',') {
            match parse_pair(pair) {
                Ok((rule, value)) => constraints.insert(rule, value),
                Err(err) => warn!(declaration, error = %err, "skipping malformed constraint"),
            }
        }

        constraints
    }

    fn insert(&mut self, rule: &'a str, value: &'a str) {
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == rule) {
            warn!(rule, previous = entry.1, value, "duplicate constraint, last value wins");
            entry.1 = value;
        } else {
            self.entries.push((rule, value));
        }
    }

    /// Parameter of `rule`, if declared.
    pub fn get(&self, rule: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == rule)
            .map(|(_, value)| *value)
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.get(rule).is_some()
    }

    /// Declared rule names in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split one `rule=value` pair at its first `=`.
///
/// Whitespace around the rule name and value is trimmed. The value may be
/// empty and may itself contain `=`.
pub fn parse_pair(pair: &str) -> Result<(&str, &str), DeclarationError> {
    let pair = pair.trim();
    if pair.is_empty() {
        return Err(DeclarationError::EmptyPair);
    }

    let (rule, value) = pair
        .split_once('=')
        .ok_or_else(|| DeclarationError::MissingSeparator {
            pair: pair.to_string(),
        })?;

    let rule = rule.trim();
    if rule.is_empty() {
        return Err(DeclarationError::MissingRuleName {
            pair: pair.to_string(),
        });
    }

    Ok((rule, value.trim()))
}
