//! Core module containing fundamental traits and types for link generation

pub mod entity;
pub mod error;
pub mod field;
pub mod link;
pub mod validation;

pub use entity::HypermediaResource;
pub use error::{ErrorResponse, HypermediaError, Result};
pub use field::FieldValue;
pub use link::{HypermediaSchema, Link};
pub use validation::SchemaValidator;
