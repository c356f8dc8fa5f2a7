//! The capability an entity needs for link resolution

use crate::core::field::FieldValue;
use serde_json::{Map, Value};

/// An entity whose fields can be read by name.
///
/// Placeholders in link templates are matched against [`field_names`]
/// case-insensitively; the matching name is then passed verbatim to
/// [`field_value`].
///
/// Structs usually get this through [`impl_hypermedia_resource!`]. JSON
/// objects implement it directly, one field per key.
///
/// [`field_names`]: HypermediaResource::field_names
/// [`field_value`]: HypermediaResource::field_value
/// [`impl_hypermedia_resource!`]: crate::impl_hypermedia_resource
pub trait HypermediaResource {
    /// Names of every readable field
    ///
    /// Structs list fields in declaration order; JSON objects list keys in
    /// the order their `serde_json::Map` iterates (sorted by default).
    fn field_names(&self) -> Vec<&str>;

    /// Value of the field with exactly this name.
    ///
    /// `None` means the entity has no such field; a field without a value
    /// returns `Some(FieldValue::Null)`.
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Find the declared name matching `name` case-insensitively.
    ///
    /// An exact-case match wins over other case variants; otherwise the first
    /// match in [`field_names`](HypermediaResource::field_names) order is used.
    fn find_field(&self, name: &str) -> Option<&str> {
        let names = self.field_names();
        if let Some(exact) = names.iter().find(|n| **n == name) {
            return Some(*exact);
        }
        let wanted = name.to_lowercase();
        names.into_iter().find(|n| n.to_lowercase() == wanted)
    }
}

impl<T: HypermediaResource + ?Sized> HypermediaResource for &T {
    fn field_names(&self) -> Vec<&str> {
        (**self).field_names()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        (**self).field_value(field)
    }
}

impl HypermediaResource for Map<String, Value> {
    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        self.get(field).map(FieldValue::from)
    }
}

/// Only objects expose fields; any other JSON value has none.
impl HypermediaResource for Value {
    fn field_names(&self) -> Vec<&str> {
        match self {
            Value::Object(map) => map.field_names(),
            _ => Vec::new(),
        }
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match self {
            Value::Object(map) => map.field_value(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Pair {
        id: i64,
        label: Option<String>,
    }

    impl HypermediaResource for Pair {
        fn field_names(&self) -> Vec<&str> {
            vec!["id", "label"]
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "id" => Some(self.id.into()),
                "label" => Some(self.label.clone().into()),
                _ => None,
            }
        }
    }

    #[test]
    fn test_find_field_ignores_case() {
        let pair = Pair { id: 1, label: None };
        assert_eq!(pair.find_field("ID"), Some("id"));
        assert_eq!(pair.find_field("Label"), Some("label"));
        assert_eq!(pair.find_field("owner"), None);
    }

    #[test]
    fn test_find_field_prefers_exact_case() {
        let entity = json!({ "id": 1, "ID": 2 });
        assert_eq!(entity.find_field("ID"), Some("ID"));
        assert_eq!(entity.find_field("id"), Some("id"));
    }

    #[test]
    fn test_case_variants_follow_field_names_order() {
        struct Variants;

        impl HypermediaResource for Variants {
            fn field_names(&self) -> Vec<&str> {
                vec!["iD", "Id"]
            }

            fn field_value(&self, _field: &str) -> Option<FieldValue> {
                None
            }
        }

        assert_eq!(Variants.find_field("id"), Some("iD"));

        let entity = json!({ "Id": 1, "ID": 2 });
        let first = entity
            .field_names()
            .into_iter()
            .find(|n| n.eq_ignore_ascii_case("id"));
        assert_eq!(entity.find_field("id"), first);
    }

    #[test]
    fn test_null_is_distinct_from_missing() {
        let pair = Pair { id: 1, label: None };
        assert_eq!(pair.field_value("label"), Some(FieldValue::Null));
        assert_eq!(pair.field_value("missing"), None);
    }

    #[test]
    fn test_json_object_fields() {
        let entity = json!({ "sku": "A-1", "qty": 3 });
        let mut names = entity.field_names();
        names.sort_unstable();
        assert_eq!(names, vec!["qty", "sku"]);
        assert_eq!(entity.field_value("qty"), Some(FieldValue::Integer(3)));
    }

    #[test]
    fn test_non_object_json_has_no_fields() {
        let entity = json!([1, 2, 3]);
        assert!(entity.field_names().is_empty());
        assert_eq!(entity.find_field("0"), None);
    }
}
