//! Qualified path construction.

/// Append `name` to a dotted path.
///
/// An empty parent yields `name` unchanged, so the root type never carries a
/// leading dot.
///
/// ```rust
/// use structassert::core::qualify;
///
/// assert_eq!(qualify("", "Person"), "Person");
/// assert_eq!(qualify("Person.Address", "State"), "Person.Address.State");
/// ```
pub fn qualify(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_leading_dot() {
        assert_eq!(qualify("", "Latitude"), "Latitude");
    }

    #[test]
    fn nested_segments_are_joined_with_dots() {
        let path = qualify(&qualify(&qualify("", "Person"), "Address"), "Location");
        assert_eq!(path, "Person.Address.Location");
    }
}
