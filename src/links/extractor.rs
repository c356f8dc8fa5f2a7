//! Extraction of link templates from hypermedia schema documents

use crate::core::error::{HypermediaError, Result};
use crate::core::link::{HypermediaSchema, Link};
use crate::core::validation::parse_schema;
use serde::Deserialize;
use serde_json::Value;

/// Parse schema text and return its link templates in declaration order.
///
/// Href templates are returned untouched; bad placeholders only surface when
/// links are resolved.
pub fn extract_links(schema: &str) -> Result<Vec<Link>> {
    links_from_value(&parse_schema(schema)?)
}

/// Link templates of an already parsed schema document
pub fn links_from_value(schema: &Value) -> Result<Vec<Link>> {
    Ok(parse_hypermedia_schema(schema)?.links)
}

/// Split a parsed document into its links and its generic schema keywords
pub fn parse_hypermedia_schema(schema: &Value) -> Result<HypermediaSchema> {
    if !schema.is_object() {
        return Err(HypermediaError::malformed(
            "schema document must be a JSON object",
        ));
    }
    HypermediaSchema::deserialize(schema).map_err(HypermediaError::malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"{
        "type": "object",
        "properties": { "id": { "type": "integer" } },
        "links": [
            { "relation": "self", "href": "/orders/{id}", "method": "GET" },
            { "rel": "cancel", "href": "/orders/{id}/cancel", "method": "POST" },
            { "relation": "lines", "href": "/orders/{id}/lines" }
        ]
    }"#;

    #[test]
    fn test_links_in_declaration_order() {
        let links = extract_links(SCHEMA).unwrap();
        let relations: Vec<&str> = links.iter().map(|l| l.relation.as_str()).collect();
        assert_eq!(relations, vec!["self", "cancel", "lines"]);
        assert_eq!(links[1].method, "POST");
        assert_eq!(links[2].method, "GET");
    }

    #[test]
    fn test_templates_are_not_checked() {
        let links = extract_links(
            r#"{ "links": [{ "relation": "odd", "href": "/x/{unclosed", "method": "GET" }] }"#,
        )
        .unwrap();
        assert_eq!(links[0].href, "/x/{unclosed");
    }

    #[test]
    fn test_empty_links_section() {
        assert!(extract_links(r#"{ "links": [] }"#).unwrap().is_empty());
    }

    #[test]
    fn test_missing_links_is_malformed() {
        let err = extract_links(r#"{ "type": "object" }"#).unwrap_err();
        assert!(matches!(err, HypermediaError::MalformedSchema { .. }));
    }

    #[test]
    fn test_ill_typed_links_is_malformed() {
        let err = extract_links(r#"{ "links": { "self": "/x" } }"#).unwrap_err();
        assert!(matches!(err, HypermediaError::MalformedSchema { .. }));

        let err = extract_links(r#"{ "links": [{ "href": "/x" }] }"#).unwrap_err();
        assert!(matches!(err, HypermediaError::MalformedSchema { .. }));
    }

    #[test]
    fn test_non_object_document_is_malformed() {
        let err = extract_links("[1, 2]").unwrap_err();
        assert!(matches!(err, HypermediaError::MalformedSchema { .. }));
    }

    #[test]
    fn test_unparseable_text_is_malformed() {
        let err = extract_links("links: []").unwrap_err();
        assert!(matches!(err, HypermediaError::MalformedSchema { .. }));
    }
}
