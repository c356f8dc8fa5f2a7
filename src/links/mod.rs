//! Link template scanning, resolution and generation
//!
//! Components, leaf first: the [`scanner`] finds placeholders, the
//! [`resolver`] turns them into values through a [`cache`], the
//! [`extractor`] reads link templates out of a schema, and the
//! [`generator`] runs the whole pipeline for one entity. The [`registry`]
//! looks schemas up by resource name.

pub mod cache;
pub mod extractor;
pub mod generator;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use cache::{SharedValueCache, ValueCache, ValueStore};
pub use extractor::extract_links;
pub use generator::HypermediaGenerator;
pub use registry::SchemaRegistry;
pub use resolver::resolve;
pub use scanner::{Placeholders, find_placeholders};
