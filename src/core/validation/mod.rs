//! Structural validation of entities against schema documents
//!
//! Entities are serialized to JSON and checked with standard JSON Schema
//! rules. The hypermedia `links` section plays no part in validation.

pub mod validator;

pub use validator::{SchemaValidator, parse_schema, validation_document};
