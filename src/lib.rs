//! load-validator - strict runtime validation of untyped JSON values
//!
//! Build a schema tree with [`schema::load`], then run it against a value with
//! [`schema::Schema::parse`] to get either the validated data or one error
//! describing every problem found.

pub mod cli;
pub mod observability;
pub mod schema;

pub use schema::{load, Schema, Shape, ValidationError, ValidationResult};
