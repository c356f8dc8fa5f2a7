//! Placeholder value resolution

use crate::core::entity::HypermediaResource;
use crate::core::error::{HypermediaError, Result};
use crate::links::cache::ValueStore;
use crate::links::scanner::{LEFT_DELIM, RIGHT_DELIM};

/// Field name a token refers to: the token with every delimiter removed
pub fn field_name(token: &str) -> String {
    token.replace(&[LEFT_DELIM, RIGHT_DELIM][..], "")
}

/// Resolve a placeholder token (`{id}`) to its string value.
///
/// A cached value wins and the entity is not touched. Otherwise the field is
/// read from the entity and its string form is cached under `token`.
pub fn resolve<E, C>(token: &str, entity: &E, cache: &mut C) -> Result<String>
where
    E: HypermediaResource + ?Sized,
    C: ValueStore + ?Sized,
{
    if let Some(value) = cache.lookup(token) {
        tracing::trace!(token, "placeholder served from cache");
        return Ok(value);
    }

    let value = read_field(token, entity)?;
    cache.store(token, &value);
    tracing::trace!(token, value = %value, "placeholder resolved from entity");
    Ok(value)
}

/// Read the field a token names, bypassing any cache
pub fn read_field<E>(token: &str, entity: &E) -> Result<String>
where
    E: HypermediaResource + ?Sized,
{
    let name = field_name(token);
    let field = entity
        .find_field(&name)
        .ok_or_else(|| HypermediaError::FieldNotFound {
            field: name.clone(),
        })?;

    match entity.field_value(field) {
        Some(value) if value.is_null() => Err(HypermediaError::NullField {
            field: field.to_string(),
        }),
        Some(value) => Ok(value.to_string()),
        None => Err(HypermediaError::FieldNotFound { field: name }),
    }
}
