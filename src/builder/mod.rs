//! Declaration helpers for validated types.
//!
//! The [`subject!`](crate::subject) macro declares a struct and registers its
//! fields, labels and constraint declarations in one place.

pub mod macros;
