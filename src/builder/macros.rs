//! Macros for declaring validated types.

/// Declare a struct together with its [`Subject`](crate::core::Subject)
/// registration.
///
/// Each field may carry a path label (`as "Label"`, defaulting to the field
/// identifier) and a constraint declaration (`=> "rule=value,..."`). The type
/// also gets an [`AsValue`](crate::core::AsValue) implementation so it can be
/// nested inside other subjects.
///
/// # Example
///
/// ```
/// use structassert::subject;
///
/// subject! {
///     #[derive(Debug, Default)]
///     pub struct Latitude {
///         pub degrees: f64 as "Degrees" => "required=true,min=0.0,max=90.0",
///         pub direction: String as "Direction" => "required=true,pattern=N|S",
///     }
/// }
///
/// let latitude = Latitude { degrees: 135.0, direction: "N".into() };
/// let violations = structassert::validate(&latitude);
///
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].field, "Latitude.Degrees");
/// assert_eq!(violations[0].constraint, "max");
/// ```
#[macro_export]
macro_rules! subject {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
                $(as $label:literal)?
                $(=> $declaration:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty
            ),*
        }

        impl $crate::core::Subject for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn fields() -> &'static [$crate::core::Field<Self>] {
                static FIELDS: &[$crate::core::Field<$name>] = &[
                    $(
                        $crate::core::Field {
                            name: $crate::__subject_label!($field $(, $label)?),
                            declaration: $crate::__subject_declaration!($($declaration)?),
                            access: |subject| $crate::core::AsValue::as_value(&subject.$field),
                        }
                    ),*
                ];
                FIELDS
            }
        }

        impl $crate::core::AsValue for $name {
            fn as_value(&self) -> $crate::core::Value<'_> {
                $crate::core::Value::Composite(self)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __subject_label {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $label:literal) => {
        $label
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __subject_declaration {
    () => {
        ::core::option::Option::None
    };
    ($declaration:literal) => {
        ::core::option::Option::Some($declaration)
    };
}
