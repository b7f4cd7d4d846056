//! The fixed rule catalog.
//!
//! Maps rule names to checking functions. The table is a `static` and is
//! never modified after compilation, so it can be shared freely between
//! threads.
//!
//! | Rule        | Applies to     | Violates when                               |
//! |-------------|----------------|---------------------------------------------|
//! | `required`  | any            | parameter is `true` and the value is empty  |
//! | `min`       | numbers        | present value is below the bound            |
//! | `max`       | numbers        | present value is above the bound            |
//! | `pattern`   | strings        | value does not fully match the expression   |
//! | `maxlength` | strings        | present value is longer than the bound      |
//! | `minlength` | strings        | present value is shorter than the bound     |
//!
//! # Example
//!
//! ```rust
//! use structassert::catalog;
//! use structassert::core::AsValue;
//! use structassert::declaration::Constraints;
//!
//! let constraints = Constraints::parse("maxlength=3");
//! let rule = catalog::lookup("maxlength").unwrap();
//!
//! let violations = rule(&constraints, &"USAX".as_value(), "Country", Vec::new(), "Address");
//! assert_eq!(violations[0].field, "Address.Country");
//! ```

pub mod error;
pub mod rules;

mod patterns;

pub use error::RuleError;

use crate::core::{Value, Violation};
use crate::declaration::Constraints;

pub const REQUIRED: &str = "required";
pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const PATTERN: &str = "pattern";
pub const MAX_LENGTH: &str = "maxlength";
pub const MIN_LENGTH: &str = "minlength";

/// Signature shared by every rule.
///
/// Arguments are the field's declared constraints, its current value, its
/// name, the violations accumulated so far and the path of the enclosing
/// type. Returns the accumulated violations, extended by at most one.
pub type RuleFn =
    fn(&Constraints<'_>, &Value<'_>, &str, Vec<Violation>, &str) -> Vec<Violation>;

static CATALOG: [(&str, RuleFn); 6] = [
    (REQUIRED, rules::required),
    (MIN, rules::min),
    (MAX, rules::max),
    (PATTERN, rules::pattern),
    (MAX_LENGTH, rules::max_length),
    (MIN_LENGTH, rules::min_length),
];

/// Find the checking function registered for `rule`.
pub fn lookup(rule: &str) -> Option<RuleFn> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == rule)
        .map(|(_, check)| *check)
}

/// All rule names, in catalog order.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_closed() {
        assert_eq!(
            rule_names().collect::<Vec<_>>(),
            vec!["required", "min", "max", "pattern", "maxlength", "minlength"]
        );
        assert!(lookup("email").is_none());
        assert!(lookup("Required").is_none());
    }

    #[test]
    fn every_rule_name_resolves() {
        for name in rule_names() {
            assert!(lookup(name).is_some(), "{name} missing from catalog");
        }
    }
}
