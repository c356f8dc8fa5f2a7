//! Memoized placeholder values
//!
//! Keys are the literal tokens including delimiters (`{id}`), values are the
//! strings substituted for them. A cache assumes every token it holds was
//! resolved against the same entity: reusing one across entities silently
//! returns the first entity's values.

use indexmap::IndexMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Storage for resolved placeholder values
pub trait ValueStore {
    /// Look up the value stored for a token
    fn lookup(&self, token: &str) -> Option<String>;

    /// Store the value for a token
    fn store(&mut self, token: &str, value: &str);
}

/// An owned cache, meant to live for one logical unit of work
///
/// Entries keep insertion order and are never evicted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCache {
    values: IndexMap<String, String>,
}

impl ValueCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed values up front, e.g. tokens that do not come from the entity
    ///
    /// Tokens must include their delimiters.
    pub fn with_values<K, V>(values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(token, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl ValueStore for ValueCache {
    fn lookup(&self, token: &str) -> Option<String> {
        self.values.get(token).cloned()
    }

    fn store(&mut self, token: &str, value: &str) {
        self.values.insert(token.to_string(), value.to_string());
    }
}

/// A cache shared between threads
///
/// Clones share the same entries. Reads take a shared lock and writes an
/// exclusive one. A poisoned lock still yields its data: entries are plain
/// strings, so a panicking writer cannot leave one half-written.
#[derive(Debug, Clone, Default)]
pub struct SharedValueCache {
    values: Arc<RwLock<IndexMap<String, String>>>,
}

impl SharedValueCache {
    /// Create an empty shared cache
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the current entries into an owned cache
    pub fn snapshot(&self) -> ValueCache {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        ValueCache::with_values(values.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    pub fn clear(&self) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl ValueStore for SharedValueCache {
    fn lookup(&self, token: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    fn store(&mut self, token: &str, value: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.to_string(), value.to_string());
    }
}
