//! Macros for exposing entity fields to link resolution
//!
//! These macros generate the [`HypermediaResource`] implementation that
//! maps field names to values, so no runtime reflection is needed.
//!
//! [`HypermediaResource`]: crate::core::entity::HypermediaResource

/// Implement `HypermediaResource` for an existing struct
///
/// Every listed field must be `Clone` and convertible into `FieldValue`.
/// Use `field as "name"` when the struct serializes the field under another
/// name, so placeholders match what the schema sees.
///
/// # Example
///
/// ```rust,ignore
/// use hypermedia::prelude::*;
///
/// #[derive(Serialize)]
/// struct Order {
///     id: Uuid,
///     #[serde(rename = "customerId")]
///     customer_id: i64,
///     coupon: Option<String>,
/// }
///
/// impl_hypermedia_resource!(Order, { id, customer_id as "customerId", coupon });
/// ```
#[macro_export]
macro_rules! impl_hypermedia_resource {
    (
        $type:ty,
        { $( $field:ident $( as $name:literal )? ),* $(,)? }
    ) => {
        impl $crate::core::entity::HypermediaResource for $type {
            fn field_names(&self) -> Vec<&str> {
                vec![ $( $crate::__hypermedia_field_name!($field $(, $name)?) ),* ]
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                $(
                    if field == $crate::__hypermedia_field_name!($field $(, $name)?) {
                        return Some($crate::core::field::FieldValue::from(self.$field.clone()));
                    }
                )*
                let _ = field;
                None
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hypermedia_field_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident, $name:literal) => {
        $name
    };
}

/// Declare a serializable entity struct together with its field access
///
/// # Example
///
/// ```rust,ignore
/// use hypermedia::prelude::*;
///
/// hypermedia_entity!(Invoice, {
///     id: i64,
///     number: String,
///     paid_at: Option<DateTime<Utc>>,
/// });
///
/// let invoice = Invoice::new(7, "INV-007".to_string(), None);
/// ```
#[macro_export]
macro_rules! hypermedia_entity {
    (
        $type:ident,
        {
            $( $field:ident : $field_type:ty ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $type {
            $( pub $field : $field_type ),*
        }

        impl $type {
            /// Create a new instance of this entity
            #[allow(clippy::too_many_arguments)]
            pub fn new( $( $field: $field_type ),* ) -> Self {
                Self { $( $field ),* }
            }
        }

        $crate::impl_hypermedia_resource!($type, { $( $field ),* });
    };
}
