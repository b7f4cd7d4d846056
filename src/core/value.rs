//! Runtime shape of a field value.
//!
//! Every field exposes its current value as a [`Value`], a closed set of
//! shapes the rule catalog and the walker dispatch on. The shape of a field
//! is fixed by its Rust type through [`AsValue`], so no runtime type
//! inspection is needed.

use super::subject::Node;
use std::fmt;

/// Borrowed view of one field's value.
#[derive(Clone)]
pub enum Value<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(&'a str),
    /// A registered nested type
    Composite(&'a dyn Node),
    /// Ordered collection (`Vec`, slice, array)
    Sequence(Vec<Value<'a>>),
    /// Nullable reference; `None` when unset
    Optional(Option<Box<Value<'a>>>),
}

/// Discriminant of a [`Value`], used in diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Uint,
    Float,
    Str,
    Composite,
    Sequence,
    Optional,
}

impl Value<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Uint(_) => ValueKind::Uint,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Composite(_) => ValueKind::Composite,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Optional(_) => ValueKind::Optional,
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Uint(u) => f.debug_tuple("Uint").field(u).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Composite(node) => f.debug_tuple("Composite").field(&node.type_name()).finish(),
            Value::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Value::Optional(inner) => f.debug_tuple("Optional").field(inner).finish(),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "signed integer",
            ValueKind::Uint => "unsigned integer",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            ValueKind::Composite => "composite",
            ValueKind::Sequence => "sequence",
            ValueKind::Optional => "optional",
        };
        f.write_str(name)
    }
}

/// Conversion of a field type into its [`Value`] shape.
///
/// Registered types implement this as [`Value::Composite`] through the
/// [`subject!`](crate::subject) macro.
pub trait AsValue {
    fn as_value(&self) -> Value<'_>;
}

macro_rules! signed_as_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsValue for $ty {
                fn as_value(&self) -> Value<'_> {
                    Value::Int(*self as i64)
                }
            }
        )*
    };
}

macro_rules! unsigned_as_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsValue for $ty {
                fn as_value(&self) -> Value<'_> {
                    Value::Uint(*self as u64)
                }
            }
        )*
    };
}

signed_as_value!(i8, i16, i32, i64, isize);
unsigned_as_value!(u8, u16, u32, u64, usize);

impl AsValue for bool {
    fn as_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl AsValue for f32 {
    fn as_value(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

impl AsValue for f64 {
    fn as_value(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::Str(self.as_str())
    }
}

// Boxes are never null, so they take the shape of what they point to.
impl<T: AsValue + ?Sized> AsValue for Box<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Value<'_> {
        Value::Optional(self.as_ref().map(|inner| Box::new(inner.as_value())))
    }
}

impl<T: AsValue> AsValue for [T] {
    fn as_value(&self) -> Value<'_> {
        Value::Sequence(self.iter().map(|item| item.as_value()).collect())
    }
}

impl<T: AsValue, const N: usize> AsValue for [T; N] {
    fn as_value(&self) -> Value<'_> {
        self.as_slice().as_value()
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn as_value(&self) -> Value<'_> {
        self.as_slice().as_value()
    }
}
