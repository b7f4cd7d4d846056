//! Per-type field registration.
//!
//! A validated type lists its fields once, statically: the label used in
//! qualified paths, the constraint declaration attached to the field, and an
//! accessor returning the field's current [`Value`]. The walker only ever
//! goes through this table, never through runtime type inspection.

use super::value::Value;

/// Static description of one field of a registered type.
pub struct Field<S> {
    /// Label used as the last segment of the field's qualified path
    pub name: &'static str,
    /// Constraint declaration, e.g. `"required=true,maxlength=3"`
    pub declaration: Option<&'static str>,
    /// Reads the field from an instance
    pub access: for<'a> fn(&'a S) -> Value<'a>,
}

impl<S> Field<S> {
    /// Resolve this field against a concrete instance.
    pub fn bind<'a>(&self, subject: &'a S) -> FieldRef<'a> {
        FieldRef {
            name: self.name,
            declaration: self.declaration,
            value: (self.access)(subject),
        }
    }
}

/// A field of a concrete instance, ready to be checked.
#[derive(Clone, Debug)]
pub struct FieldRef<'a> {
    pub name: &'static str,
    pub declaration: Option<&'static str>,
    pub value: Value<'a>,
}

/// A type whose fields carry constraint declarations.
///
/// Usually implemented through the [`subject!`](crate::subject) macro.
///
/// # Example
///
/// ```rust
/// use structassert::core::{AsValue, Field, Subject};
///
/// struct Country {
///     code: String,
/// }
///
/// impl Subject for Country {
///     const TYPE_NAME: &'static str = "Country";
///
///     fn fields() -> &'static [Field<Self>] {
///         static FIELDS: &[Field<Country>] = &[Field {
///             name: "Code",
///             declaration: Some("required=true,maxlength=3"),
///             access: |country| country.code.as_value(),
///         }];
///         FIELDS
///     }
/// }
///
/// let violations = structassert::validate(&Country { code: "USAX".into() });
/// assert_eq!(violations[0].field, "Country.Code");
/// ```
pub trait Subject: Sized + 'static {
    /// Name contributed to qualified paths when this type is traversed
    const TYPE_NAME: &'static str;

    /// Fields in declaration order.
    fn fields() -> &'static [Field<Self>];
}

/// Object-safe view of a registered type, used while walking a graph of
/// heterogeneous types.
pub trait Node {
    fn type_name(&self) -> &'static str;

    /// Current field values in declaration order.
    fn field_refs(&self) -> Vec<FieldRef<'_>>;
}

impl<S: Subject> Node for S {
    fn type_name(&self) -> &'static str {
        S::TYPE_NAME
    }

    fn field_refs(&self) -> Vec<FieldRef<'_>> {
        S::fields().iter().map(|field| field.bind(self)).collect()
    }
}
