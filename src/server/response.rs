//! JSON responses carrying resolved links
//!
//! HTTP handlers return a [`LinkedResource`] to send an entity with a
//! `links` array next to its own fields, or a [`HypermediaError`] to send a
//! JSON error body.

use crate::core::entity::HypermediaResource;
use crate::core::error::{HypermediaError, Result};
use crate::core::link::Link;
use crate::links::cache::ValueCache;
use crate::links::generator::HypermediaGenerator;
use crate::links::registry::SchemaRegistry;
use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// An entity serialized together with its links
///
/// The entity must serialize as a map (a struct or a JSON object); its fields
/// are flattened beside `links`.
#[derive(Debug, Clone, Serialize)]
pub struct LinkedResource<T> {
    #[serde(flatten)]
    pub data: T,
    pub links: Vec<Link>,
}

impl<T> LinkedResource<T>
where
    T: HypermediaResource + Serialize,
{
    /// Resolve the links of `schema` for `data` and wrap both
    pub fn from_schema(generator: &HypermediaGenerator, schema: &str, data: T) -> Result<Self> {
        let links = generator.get_links_with_cache(schema, &data, &mut ValueCache::new())?;
        Ok(Self { data, links })
    }

    /// Resolve the links of a registered resource for `data` and wrap both
    pub fn from_registry(registry: &SchemaRegistry, name: &str, data: T) -> Result<Self> {
        let links = registry.links_for(name, &data)?;
        Ok(Self { data, links })
    }
}

impl<T: Serialize> IntoResponse for LinkedResource<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Handler-friendly alias: either the linked entity or an error response
pub type LinkedResult<T> = std::result::Result<LinkedResource<T>, HypermediaError>;
