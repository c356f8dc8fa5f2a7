//! Schema registry for named resources
//!
//! Maps resource names to their hypermedia schema text so callers can ask for
//! the links of an "order" without carrying the schema around. Schemas are
//! stored as text and parsed on every call.

use crate::config::HypermediaConfig;
use crate::core::entity::HypermediaResource;
use crate::core::error::{HypermediaError, Result};
use crate::core::link::Link;
use crate::links::cache::{ValueCache, ValueStore};
use crate::links::generator::HypermediaGenerator;
use serde::Serialize;
use std::collections::HashMap;

/// Registry resolving resource names to schemas
pub struct SchemaRegistry {
    /// Maps resource name -> schema text
    schemas: HashMap<String, String>,
    generator: HypermediaGenerator,
}

impl SchemaRegistry {
    /// Create a new registry seeded with the resources of a configuration
    pub fn new(config: &HypermediaConfig) -> Self {
        let schemas = config
            .resources
            .iter()
            .map(|r| (r.name.clone(), r.schema.to_string()))
            .collect();

        Self {
            schemas,
            generator: HypermediaGenerator::new(),
        }
    }

    /// Register or replace the schema text of a resource
    pub fn register(&mut self, name: impl Into<String>, schema: impl Into<String>) {
        self.schemas.insert(name.into(), schema.into());
    }

    /// Schema text registered for a resource
    pub fn schema(&self, name: &str) -> Option<&str> {
        self.schemas.get(name).map(String::as_str)
    }

    /// Names of all registered resources, sorted
    pub fn resource_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve the links of a named resource with a fresh cache
    pub fn links_for<E>(&self, name: &str, entity: &E) -> Result<Vec<Link>>
    where
        E: HypermediaResource + Serialize + ?Sized,
    {
        self.links_for_with_cache(name, entity, &mut ValueCache::new())
    }

    /// Resolve the links of a named resource, memoizing into `cache`
    pub fn links_for_with_cache<E, C>(&self, name: &str, entity: &E, cache: &mut C) -> Result<Vec<Link>>
    where
        E: HypermediaResource + Serialize + ?Sized,
        C: ValueStore + ?Sized,
    {
        let schema = self
            .schema(name)
            .ok_or_else(|| HypermediaError::UnknownResource {
                name: name.to_string(),
            })?;

        tracing::debug!(resource = name, "generating links");
        self.generator.get_links_with_cache(schema, entity, cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        let config = HypermediaConfig::from_yaml_str(
            r#"
resources:
  - name: order
    schema:
      type: object
      required: [id]
      links:
        - relation: self
          href: /orders/{id}
          method: GET
"#,
        )
        .unwrap();
        SchemaRegistry::new(&config)
    }

    #[test]
    fn test_links_for_registered_resource() {
        let links = registry().links_for("order", &json!({ "id": 12 })).unwrap();
        assert_eq!(links, vec![Link::new("self", "/orders/12", "GET")]);
    }

    #[test]
    fn test_unknown_resource() {
        let err = registry().links_for("invoice", &json!({})).unwrap_err();
        assert_eq!(
            err,
            HypermediaError::UnknownResource {
                name: "invoice".to_string()
            }
        );
    }

    #[test]
    fn test_register_overrides_config() {
        let mut registry = registry();
        registry.register(
            "order",
            r#"{ "links": [{ "relation": "self", "href": "/v2/orders/{id}" }] }"#,
        );
        registry.register("invoice", r#"{ "links": [] }"#);

        assert_eq!(registry.resource_names(), vec!["invoice", "order"]);
        let links = registry.links_for("order", &json!({ "id": 1 })).unwrap();
        assert_eq!(links[0].href, "/v2/orders/1");
    }

    #[test]
    fn test_register_does_not_touch_config() {
        let config = HypermediaConfig::default();
        let mut registry = SchemaRegistry::new(&config);
        registry.register("order", r#"{ "links": [] }"#);

        assert_eq!(registry.resource_names(), vec!["order"]);
        assert!(config.find_resource("order").is_none());
    }
}
