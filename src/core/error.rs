//! Typed error handling for hypermedia link generation
//!
//! Every failure of the link pipeline is reported through [`HypermediaError`].
//! Nothing is retried and nothing is logged here: the caller receives the
//! error and decides what to do with it.
//!
//! # Example
//!
//! ```rust,ignore
//! use hypermedia::prelude::*;
//!
//! match generator.get_links(schema, &order) {
//!     Ok(links) => println!("{} links", links.len()),
//!     Err(HypermediaError::SchemaValidation { reasons }) => {
//!         eprintln!("order rejected: {:?}", reasons);
//!     }
//!     Err(e) => eprintln!("link generation failed: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HypermediaError>;

/// The error type for schema validation and link resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HypermediaError {
    /// The schema text could not be parsed into the expected structure
    #[error("Malformed schema: {message}")]
    MalformedSchema { message: String },

    /// The entity does not conform to the schema
    #[error("Entity is not valid for the given schema: {}", .reasons.join("; "))]
    SchemaValidation { reasons: Vec<String> },

    /// A placeholder names a field the entity does not expose
    #[error("Unable to find field named '{field}'")]
    FieldNotFound { field: String },

    /// The field exists but holds no value to substitute
    #[error("The value of field '{field}' is null")]
    NullField { field: String },

    /// No schema is registered under this resource name
    #[error("Unknown resource: {name}")]
    UnknownResource { name: String },
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl HypermediaError {
    pub(crate) fn malformed(message: impl ToString) -> Self {
        HypermediaError::MalformedSchema {
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// Field resolution failures are server-side bugs: the schema and the
    /// entity type disagree.
    pub fn status_code(&self) -> StatusCode {
        match self {
            HypermediaError::MalformedSchema { .. } => StatusCode::BAD_REQUEST,
            HypermediaError::SchemaValidation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            HypermediaError::FieldNotFound { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            HypermediaError::NullField { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            HypermediaError::UnknownResource { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            HypermediaError::MalformedSchema { .. } => "MALFORMED_SCHEMA",
            HypermediaError::SchemaValidation { .. } => "SCHEMA_VALIDATION_FAILED",
            HypermediaError::FieldNotFound { .. } => "FIELD_NOT_FOUND",
            HypermediaError::NullField { .. } => "NULL_FIELD",
            HypermediaError::UnknownResource { .. } => "UNKNOWN_RESOURCE",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            HypermediaError::SchemaValidation { reasons } => {
                Some(serde_json::json!({ "reasons": reasons }))
            }
            HypermediaError::FieldNotFound { field } | HypermediaError::NullField { field } => {
                Some(serde_json::json!({ "field": field }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for HypermediaError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_joins_reasons() {
        let err = HypermediaError::SchemaValidation {
            reasons: vec![
                "/: \"id\" is a required property".to_string(),
                "/name: 5 is not of type \"string\"".to_string(),
            ],
        };
        let message = err.to_string();
        assert!(message.starts_with("Entity is not valid for the given schema: "));
        assert!(message.contains("; /name"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            HypermediaError::malformed("eof").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HypermediaError::SchemaValidation { reasons: vec![] }.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            HypermediaError::NullField {
                field: "id".to_string()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            HypermediaError::UnknownResource {
                name: "order".to_string()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_field_errors_carry_field_detail() {
        let response = HypermediaError::FieldNotFound {
            field: "owner".to_string(),
        }
        .to_response();
        assert_eq!(response.code, "FIELD_NOT_FOUND");
        assert_eq!(response.message, "Unable to find field named 'owner'");
        assert_eq!(
            response.details,
            Some(serde_json::json!({ "field": "owner" }))
        );
    }

    #[test]
    fn test_malformed_has_no_details() {
        let response = HypermediaError::malformed("expected value at line 1").to_response();
        assert_eq!(response.code, "MALFORMED_SCHEMA");
        assert!(response.details.is_none());
    }
}
