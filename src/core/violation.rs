//! Violation records produced by a validation pass.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One failed rule at one qualified field path.
///
/// Violations are plain values: they are created during a single
/// validation pass and handed back to the caller by value.
///
/// # Example
///
/// ```rust
/// use structassert::core::Violation;
///
/// let violation = Violation::new("Person.LastName", "required");
/// assert_eq!(violation.field, "Person.LastName");
/// assert_eq!(violation.to_string(), "Person.LastName: required");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path of the offending field
    pub field: String,
    /// Name of the rule that failed
    pub constraint: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.constraint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_displays_path_and_rule() {
        let violation = Violation::new("Person.Address.State", "required");
        assert_eq!(violation.to_string(), "Person.Address.State: required");
    }

    #[test]
    fn violation_serializes_with_field_names() {
        let violation = Violation::new("Latitude.Degrees", "max");
        let json = serde_json::to_string(&violation).unwrap();
        assert_eq!(json, r#"{"field":"Latitude.Degrees","constraint":"max"}"#);

        let deserialized: Violation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, violation);
    }
}
