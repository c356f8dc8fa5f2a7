//! # Schema Hypermedia
//!
//! Resolves hypermedia link templates declared in JSON Schema documents
//! against concrete entities.
//!
//! ## Features
//!
//! - **Schema Validation**: Entities are checked against the schema before any link is built
//! - **Link Templates**: A `links` section of `{relation, href, method}` with `{field}` placeholders
//! - **No Reflection**: Entities expose named fields through `HypermediaResource`
//! - **Explicit Caching**: Resolved placeholder values live in a cache the caller owns
//! - **Configuration-Based**: Declare resource schemas in YAML
//! - **Axum Integration**: Linked entities and errors convert into JSON responses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hypermedia::prelude::*;
//!
//! hypermedia_entity!(Item, {
//!     id: i64,
//!     name: String,
//! });
//!
//! let schema = r#"{
//!     "type": "object",
//!     "required": ["id"],
//!     "properties": { "id": { "type": "integer" } },
//!     "links": [{ "relation": "self", "href": "/items/{Id}", "method": "GET" }]
//! }"#;
//!
//! let links = HypermediaGenerator::new().get_links(schema, &Item::new(42, "lamp".into()))?;
//! assert_eq!(links[0].href, "/items/42");
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod links;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::HypermediaResource,
        error::{ErrorResponse, HypermediaError, Result},
        field::FieldValue,
        link::{HypermediaSchema, Link},
        validation::{SchemaValidator, parse_schema},
    };

    // === Macros ===
    pub use crate::{hypermedia_entity, impl_hypermedia_resource};

    // === Links ===
    pub use crate::links::{
        HypermediaGenerator, Placeholders, SchemaRegistry, SharedValueCache, ValueCache,
        ValueStore, extract_links, find_placeholders, resolve,
    };

    // === Config ===
    pub use crate::config::{HypermediaConfig, ResourceConfig};

    // === Server ===
    pub use crate::server::{LinkedResource, LinkedResult};

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
