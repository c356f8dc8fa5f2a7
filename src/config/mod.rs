//! Configuration loading and management
//!
//! Hypermedia schemas can be declared per resource in YAML:
//!
//! ```yaml
//! resources:
//!   - name: order
//!     schema:
//!       type: object
//!       required: [id]
//!       links:
//!         - relation: self
//!           href: /orders/{id}
//!           method: GET
//! ```

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema declaration for one resource type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceConfig {
    /// Resource name used for lookups (e.g., "order", "invoice")
    pub name: String,

    /// Hypermedia schema document, including its `links` section
    pub schema: Value,
}

/// Complete configuration for the hypermedia layer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HypermediaConfig {
    /// Resource schema declarations
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

impl HypermediaConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file '{}': {}", path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Merge several configurations into one
    ///
    /// Resources keep the order in which their name first appears; a later
    /// declaration of the same name replaces the earlier schema.
    pub fn merge(configs: Vec<HypermediaConfig>) -> Self {
        let mut resources: Vec<ResourceConfig> = Vec::new();

        for resource in configs.into_iter().flat_map(|c| c.resources) {
            match resources.iter_mut().find(|r| r.name == resource.name) {
                Some(existing) => {
                    tracing::debug!(resource = %resource.name, "resource schema overridden by merge");
                    existing.schema = resource.schema;
                }
                None => resources.push(resource),
            }
        }

        Self { resources }
    }

    /// Find a resource declaration by name
    pub fn find_resource(&self, name: &str) -> Option<&ResourceConfig> {
        self.resources.iter().find(|r| r.name == name)
    }

    /// Schema text for a resource, as the generator consumes it
    pub fn schema_text(&self, name: &str) -> Option<String> {
        self.find_resource(name).map(|r| r.schema.to_string())
    }

    fn check(&self) -> Result<()> {
        for (i, resource) in self.resources.iter().enumerate() {
            if resource.name.trim().is_empty() {
                return Err(anyhow!("Resource #{} has an empty name", i));
            }
            if !resource.schema.is_object() {
                return Err(anyhow!(
                    "Schema of resource '{}' must be a mapping",
                    resource.name
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const YAML: &str = r#"
resources:
  - name: order
    schema:
      type: object
      required: [id]
      properties:
        id:
          type: integer
      links:
        - relation: self
          href: /orders/{id}
          method: GET
  - name: customer
    schema:
      links: []
"#;

    #[test]
    fn test_from_yaml_str() {
        let config = HypermediaConfig::from_yaml_str(YAML).unwrap();
        assert_eq!(config.resources.len(), 2);

        let order = config.find_resource("order").unwrap();
        assert_eq!(order.schema["required"], json!(["id"]));
        assert_eq!(order.schema["links"][0]["href"], json!("/orders/{id}"));
    }

    #[test]
    fn test_schema_text_is_json() {
        let config = HypermediaConfig::from_yaml_str(YAML).unwrap();
        let text = config.schema_text("customer").unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(&text).unwrap(),
            json!({ "links": [] })
        );
        assert!(config.schema_text("invoice").is_none());
    }

    #[test]
    fn test_empty_yaml_has_no_resources() {
        let config = HypermediaConfig::from_yaml_str("{}").unwrap();
        assert!(config.resources.is_empty());
    }

    #[test]
    fn test_rejects_non_mapping_schema() {
        let yaml = "resources:\n  - name: order\n    schema: [1, 2]\n";
        assert!(HypermediaConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_rejects_empty_name() {
        let yaml = "resources:\n  - name: ' '\n    schema: {links: []}\n";
        assert!(HypermediaConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_merge_later_wins() {
        let first = HypermediaConfig::from_yaml_str(YAML).unwrap();
        let second = HypermediaConfig {
            resources: vec![
                ResourceConfig {
                    name: "customer".to_string(),
                    schema: json!({ "links": [{ "relation": "self", "href": "/c/{id}" }] }),
                },
                ResourceConfig {
                    name: "invoice".to_string(),
                    schema: json!({ "links": [] }),
                },
            ],
        };

        let merged = HypermediaConfig::merge(vec![first, second]);
        let names: Vec<&str> = merged.resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["order", "customer", "invoice"]);
        assert_eq!(
            merged.find_resource("customer").unwrap().schema["links"][0]["href"],
            json!("/c/{id}")
        );
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = HypermediaConfig::from_yaml_str(YAML).unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(HypermediaConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
