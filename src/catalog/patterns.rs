//! Compiled `pattern` expressions.
//!
//! Each thread keeps its own memo of compiled expressions, so repeated
//! validation of the same declarations does not recompile them and no state
//! is shared between threads.

use super::error::RuleError;
use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;

/// Memo entries kept per thread before it is cleared.
const CAPACITY: usize = 256;

thread_local! {
    static COMPILED: RefCell<HashMap<String, Result<Regex, RuleError>>> =
        RefCell::new(HashMap::new());
}

/// Compile `pattern` anchored to the whole input.
///
/// The raw pattern is compiled on its own first: wrapping an unbalanced
/// pattern such as `N)|(S` could otherwise yield a different, valid
/// expression.
pub(crate) fn compile(pattern: &str) -> Result<Regex, RuleError> {
    COMPILED.with(|compiled| {
        if let Some(found) = compiled.borrow().get(pattern) {
            return found.clone();
        }

        let result = anchored(pattern);
        let mut compiled = compiled.borrow_mut();
        if compiled.len() >= CAPACITY {
            compiled.clear();
        }
        compiled.insert(pattern.to_string(), result.clone());
        result
    })
}

fn anchored(pattern: &str) -> Result<Regex, RuleError> {
    let invalid = |source: regex::Error| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    };

    Regex::new(pattern).map_err(invalid)?;
    Regex::new(&format!("^(?:{pattern})$")).map_err(invalid)
}
