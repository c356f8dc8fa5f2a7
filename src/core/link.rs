//! Link descriptors and the hypermedia schema document that carries them

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A navigable action on a resource
///
/// While a link is being resolved, `href` holds the template and is rewritten
/// in place; once returned by the generator it is a concrete URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation name (e.g., "self", "cancel", "customer")
    #[serde(alias = "rel")]
    pub relation: String,

    /// URL template such as `/orders/{id}/lines`
    pub href: String,

    /// HTTP method used to follow the link
    #[serde(default = "default_method")]
    pub method: String,
}

fn default_method() -> String {
    "GET".to_string()
}

impl Link {
    /// Create a new link
    pub fn new(
        relation: impl Into<String>,
        href: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            relation: relation.into(),
            href: href.into(),
            method: method.into(),
        }
    }
}

/// A schema document extended with a `links` section
///
/// Everything other than `links` is kept as-is in `keywords`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HypermediaSchema {
    /// Link templates in declaration order
    pub links: Vec<Link>,

    /// Generic schema keywords (type, properties, required, ...)
    #[serde(flatten)]
    pub keywords: Map<String, Value>,
}
