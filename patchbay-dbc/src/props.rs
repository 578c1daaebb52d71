//! Connection properties passed alongside a connect request.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Well-known property key for the username.
pub const USER: &str = "user";

/// Well-known property key for the password.
pub const PASSWORD: &str = "password";

/// A mutable key/value map of connection attributes.
///
/// Callers own the map for the duration of one connect call; drivers may
/// amplify it in place (for example by backfilling default credentials) but
/// must not retain it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProps {
    entries: HashMap<String, String>,
}

impl ConnectionProps {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// Set a property value, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Check whether a property is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a property, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the `user` property.
    pub fn user(&self) -> Option<&str> {
        self.get(USER)
    }

    /// Get the `password` property.
    pub fn password(&self) -> Option<&str> {
        self.get(PASSWORD)
    }

    /// Set a property, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}
