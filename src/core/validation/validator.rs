//! JSON Schema validator for serialized entities

use crate::core::error::{HypermediaError, Result};
use serde::Serialize;
use serde_json::Value;

/// Parse schema text into a JSON document
pub fn parse_schema(schema: &str) -> Result<Value> {
    serde_json::from_str(schema).map_err(HypermediaError::malformed)
}

/// The part of a hypermedia document entities are validated against
///
/// The `links` section is dropped and a hyper-schema `$schema` dialect is
/// replaced by the plain schema dialect of the same draft, e.g.
/// `http://json-schema.org/draft-04/hyper-schema#` becomes
/// `http://json-schema.org/draft-04/schema#`.
pub fn validation_document(document: &Value) -> Result<Value> {
    let mut keywords = document
        .as_object()
        .cloned()
        .ok_or_else(|| HypermediaError::malformed("schema document must be a JSON object"))?;

    keywords.remove("links");
    if let Some(Value::String(dialect)) = keywords.get_mut("$schema") {
        if let Some(base) = base_dialect(dialect) {
            *dialect = base;
        }
    }
    Ok(Value::Object(keywords))
}

fn base_dialect(uri: &str) -> Option<String> {
    (uri.contains("json-schema.org/") && uri.contains("hyper-schema"))
        .then(|| uri.replace("hyper-schema", "schema"))
}

/// A compiled schema, ready to check entities
///
/// Format keywords (`email`, `uuid`, `date-time`, ...) are asserted, not just
/// annotated, whatever draft the document declares.
pub struct SchemaValidator {
    inner: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile a parsed schema document
    ///
    /// A document that is valid JSON but not a valid schema is reported as
    /// malformed.
    pub fn new(schema: &Value) -> Result<Self> {
        let inner = jsonschema::options()
            .should_validate_formats(true)
            .build(schema)
            .map_err(|e| HypermediaError::malformed(format!("invalid schema: {}", e)))?;
        Ok(Self { inner })
    }

    /// Parse and compile schema text
    pub fn from_text(schema: &str) -> Result<Self> {
        Self::new(&parse_schema(schema)?)
    }

    /// Check that the serialized form of `entity` conforms to the schema
    pub fn validate<T: Serialize + ?Sized>(&self, entity: &T) -> Result<()> {
        let instance = serde_json::to_value(entity).map_err(|e| {
            HypermediaError::SchemaValidation {
                reasons: vec![format!("entity could not be serialized: {}", e)],
            }
        })?;
        self.validate_value(&instance)
    }

    /// Check an already serialized instance
    pub fn validate_value(&self, instance: &Value) -> Result<()> {
        let reasons: Vec<String> = self
            .inner
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                let path = if path.is_empty() { "/".to_string() } else { path };
                format!("{}: {}", path, e)
            })
            .collect();

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(HypermediaError::SchemaValidation { reasons })
        }
    }
}
