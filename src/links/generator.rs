//! Hypermedia link generation
//!
//! The generator runs a fixed pipeline for one entity:
//!
//! 1. parse the schema text
//! 2. validate the serialized entity against it
//! 3. extract the link templates
//! 4. resolve every placeholder of every href, in order
//!
//! Any failure aborts the whole call. No partial link list is ever returned.

use crate::core::entity::HypermediaResource;
use crate::core::error::Result;
use crate::core::link::Link;
use crate::core::validation::{SchemaValidator, parse_schema, validation_document};
use crate::links::cache::{ValueCache, ValueStore};
use crate::links::extractor::links_from_value;
use crate::links::resolver::resolve;
use crate::links::scanner::find_placeholders;
use serde::Serialize;

/// Produces resolved links for entities from hypermedia schemas
///
/// The generator keeps no state between calls. Memoized placeholder values
/// live in the cache the caller passes in, or in a fresh cache per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct HypermediaGenerator;

impl HypermediaGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the links of `schema` for `entity` with a fresh cache
    pub fn get_links<E>(&self, schema: &str, entity: &E) -> Result<Vec<Link>>
    where
        E: HypermediaResource + Serialize + ?Sized,
    {
        self.get_links_with_cache(schema, entity, &mut ValueCache::new())
    }

    /// Resolve the links of `schema` for `entity`, memoizing into `cache`
    ///
    /// Values already in `cache` are substituted without reading the entity.
    /// Only pass a cache that was filled for this same entity, or seeded with
    /// values that hold for it.
    pub fn get_links_with_cache<E, C>(
        &self,
        schema: &str,
        entity: &E,
        cache: &mut C,
    ) -> Result<Vec<Link>>
    where
        E: HypermediaResource + Serialize + ?Sized,
        C: ValueStore + ?Sized,
    {
        let document = parse_schema(schema)?;
        SchemaValidator::new(&validation_document(&document)?)?.validate(entity)?;

        let mut links = links_from_value(&document)?;
        tracing::debug!(count = links.len(), "extracted link templates");

        self.resolve_links(entity, &mut links, cache)?;
        Ok(links)
    }

    /// Substitute placeholders in each link's href, in place
    ///
    /// Each token is replaced everywhere it occurs in the href with the value
    /// resolved for its first occurrence.
    pub fn resolve_links<E, C>(&self, entity: &E, links: &mut [Link], cache: &mut C) -> Result<()>
    where
        E: HypermediaResource + ?Sized,
        C: ValueStore + ?Sized,
    {
        for link in links.iter_mut() {
            let tokens: Vec<String> = find_placeholders(&link.href)
                .into_iter()
                .map(str::to_owned)
                .collect();

            for token in tokens {
                let value = resolve(&token, entity, cache)?;
                link.href = link.href.replace(&token, &value);
            }

            tracing::trace!(relation = %link.relation, href = %link.href, "link resolved");
        }
        Ok(())
    }
}
