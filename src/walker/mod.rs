//! Depth-first graph walker.
//!
//! Starting at a root subject, every field is checked against the rules in
//! its declaration, then the walker descends into nested composites,
//! sequences of composites and set optionals. Paths are built from the type
//! names of the composites traversed plus the offending field's label:
//!
//! ```text
//! Person.Address.Location.Latitude.Degrees
//! ```
//!
//! Sequence elements share their parent's path; paths carry no index.
//!
//! The subject graph must be acyclic. Owned Rust values cannot form cycles,
//! so this only matters for registrations that hand out shared references.

mod accumulate;

pub use accumulate::validate_all;

use crate::catalog;
use crate::core::{is_empty, qualify, FieldRef, Node, Subject, Value, Violation};
use crate::declaration::Constraints;
use tracing::{debug, warn};

/// Validate a registered subject and every composite reachable from it.
///
/// Returns all violations in depth-first discovery order; an empty vector
/// means the subject is valid.
///
/// # Example
///
/// ```
/// use structassert::{subject, validate};
///
/// subject! {
///     pub struct Person {
///         pub first_name: String as "FirstName" => "required=true",
///         pub last_name: String as "LastName" => "required=true",
///     }
/// }
///
/// let person = Person { first_name: "James".into(), last_name: String::new() };
/// let violations = validate(&person);
///
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].field, "Person.LastName");
/// assert_eq!(violations[0].constraint, "required");
/// ```
pub fn validate<S: Subject>(subject: &S) -> Vec<Violation> {
    validate_node(subject)
}

/// Validate a subject behind a trait object.
pub fn validate_node(subject: &dyn Node) -> Vec<Violation> {
    let violations = assert_all(subject, Vec::new(), "");
    debug!(
        root = subject.type_name(),
        violations = violations.len(),
        "validation finished"
    );
    violations
}

fn assert_all(node: &dyn Node, mut violations: Vec<Violation>, parent: &str) -> Vec<Violation> {
    let path = qualify(parent, node.type_name());

    for field in node.field_refs() {
        violations = check_field(&field, violations, &path);
        violations = descend(&field.value, violations, &path);
    }

    violations
}

/// Run the field's declared rules, in declaration order.
fn check_field(field: &FieldRef<'_>, mut violations: Vec<Violation>, path: &str) -> Vec<Violation> {
    let Some(declaration) = field.declaration else {
        return violations;
    };

    let constraints = Constraints::parse(declaration);
    for rule in constraints.rules() {
        match catalog::lookup(rule) {
            Some(check) => {
                violations = check(&constraints, &field.value, field.name, violations, path);
            }
            None => warn!(field = %qualify(path, field.name), rule, "unknown rule ignored"),
        }
    }

    violations
}

fn descend(value: &Value<'_>, violations: Vec<Violation>, path: &str) -> Vec<Violation> {
    match value {
        Value::Composite(node) => assert_all(*node, violations, path),
        Value::Sequence(items) => items
            .iter()
            .filter(|item| !is_empty(item))
            .fold(violations, |violations, item| descend(item, violations, path)),
        Value::Optional(Some(inner)) => descend(inner, violations, path),
        _ => violations,
    }
}
