//! Emptiness and zero-value predicates.
//!
//! Emptiness decides whether `required` fires and whether the numeric and
//! length rules have anything to check. Numeric scalars are never empty, so
//! `required` on a plain number never fires; make the field an `Option` to
//! express presence.

use super::value::Value;

/// Returns true when the value counts as absent.
///
/// - `false` booleans
/// - unset optionals
/// - zero-length strings
/// - composites whose every field is empty
/// - sequences whose every element is the zero value (including no elements)
///
/// Numbers are never empty.
pub fn is_empty(value: &Value<'_>) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Int(_) | Value::Uint(_) | Value::Float(_) => false,
        Value::Str(s) => s.is_empty(),
        Value::Optional(inner) => inner.is_none(),
        Value::Composite(node) => node.field_refs().iter().all(|field| is_empty(&field.value)),
        Value::Sequence(items) => items.iter().all(is_zero),
    }
}

/// Returns true when the value equals its type's default.
pub fn is_zero(value: &Value<'_>) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Int(i) => *i == 0,
        Value::Uint(u) => *u == 0,
        Value::Float(x) => *x == 0.0,
        Value::Str(s) => s.is_empty(),
        Value::Optional(inner) => inner.is_none(),
        Value::Composite(node) => node.field_refs().iter().all(|field| is_zero(&field.value)),
        Value::Sequence(items) => items.iter().all(is_zero),
    }
}
