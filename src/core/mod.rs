//! Core data model for constraint validation.
//!
//! This module contains the pieces every validation pass works on:
//! - `Violation` records returned to callers
//! - `Value` shapes and the `AsValue` conversion for field types
//! - Static per-type field registration via `Subject` and `Node`
//! - Emptiness semantics and qualified path construction
//!
//! Nothing here mutates the subject graph; all functions are pure.

mod emptiness;
mod path;
mod subject;
mod value;
mod violation;

pub use emptiness::{is_empty, is_zero};
pub use path::qualify;
pub use subject::{Field, FieldRef, Node, Subject};
pub use value::{AsValue, Value, ValueKind};
pub use violation::Violation;
