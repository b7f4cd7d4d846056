//! Structassert: declarative constraint validation for nested object graphs
//!
//! Fields carry constraint declarations such as `required=true,max=90.0`.
//! Validating a root value walks the whole graph depth-first and returns
//! every violated rule, each tagged with the dotted path of the offending
//! field. Validation is pure: the subject is only read, and every call
//! produces its own list of violations.
//!
//! # Core Concepts
//!
//! - **Subject**: a type registered with its fields and their declarations,
//!   usually through the [`subject!`] macro
//! - **Rule catalog**: the fixed set of rules (`required`, `min`, `max`,
//!   `pattern`, `minlength`, `maxlength`)
//! - **Walker**: depth-first traversal producing qualified paths such as
//!   `Person.Address.Location.Latitude.Degrees`
//!
//! Malformed declarations and rules applied to the wrong kind of field are
//! reported through `tracing` and skipped; they never abort validation.
//!
//! # Example
//!
//! ```rust
//! use structassert::{subject, validate, Violation};
//!
//! subject! {
//!     #[derive(Debug, Default)]
//!     pub struct Address {
//!         pub state: String as "State" => "required=true",
//!         pub country: String as "Country" => "required=true,maxlength=3",
//!     }
//! }
//!
//! subject! {
//!     #[derive(Debug, Default)]
//!     pub struct Person {
//!         pub first_name: String as "FirstName" => "required=true",
//!         pub last_name: String as "LastName" => "required=true",
//!         pub address: Vec<Address> as "Address" => "required=true",
//!     }
//! }
//!
//! let person = Person {
//!     first_name: "James".into(),
//!     last_name: "Kirk".into(),
//!     address: vec![Address { state: "TN".into(), country: "USAX".into() }],
//! };
//!
//! assert_eq!(
//!     validate(&person),
//!     vec![Violation::new("Person.Address.Country", "maxlength")]
//! );
//! ```

pub mod builder;
pub mod catalog;
pub mod core;
pub mod declaration;
pub mod walker;

// Re-export commonly used types
pub use crate::core::{AsValue, Subject, Value, Violation};
pub use walker::{validate, validate_all, validate_node};
