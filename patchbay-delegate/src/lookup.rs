//! Lookup capability contracts.
//!
//! The delegating driver consumes these traits; concrete implementations
//! (environment maps, service-discovery clients, config files) live outside
//! this crate. Implementations must be safe to call concurrently; the
//! driver assumes but does not enforce this.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// A lookup provider: the origin of one resolved mapping.
///
/// Besides producing connection strings through its registry, a provider may
/// carry default credentials for the targets it resolves.
pub trait ConnectionLookup: Send + Sync {
    /// Default username for resolved targets, if the provider defines one.
    fn default_username(&self) -> Option<String> {
        None
    }

    /// Default password for resolved targets, if the provider defines one.
    fn default_password(&self) -> Option<String> {
        None
    }
}

/// The outcome of a successful resolution: the real connection string plus
/// a handle back to the provider that produced it, so default credentials
/// can be fetched. Request-scoped; never persisted.
#[derive(Clone)]
pub struct LookupResult {
    connection_string: String,
    lookup: Arc<dyn ConnectionLookup>,
}

impl LookupResult {
    /// Create a lookup result.
    pub fn new(connection_string: impl Into<String>, lookup: Arc<dyn ConnectionLookup>) -> Self {
        Self {
            connection_string: connection_string.into(),
            lookup,
        }
    }

    /// The resolved connection string.
    pub fn connection_string(&self) -> &str {
        &self.connection_string
    }

    /// The provider that produced this result.
    pub fn lookup(&self) -> &Arc<dyn ConnectionLookup> {
        &self.lookup
    }
}

impl std::fmt::Debug for LookupResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupResult")
            .field("connection_string", &self.connection_string)
            .finish_non_exhaustive()
    }
}

/// Error raised by a lookup backend during resolution.
///
/// "No mapping exists" is not an error; registries report it as `Ok(None)`.
/// These variants cover genuine backend failures, which the delegating
/// driver folds to the same external not-handled outcome but logs
/// distinctly.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The lookup backend could not be reached.
    #[error("Lookup backend unavailable: {0}")]
    Unavailable(String),

    /// The lookup backend failed while resolving.
    #[error("Lookup backend error: {0}")]
    Backend(String),
}

impl LookupError {
    /// Create an unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Create a backend error.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// The entry point aggregating one or more lookup providers.
///
/// Given an opaque query string, returns the single best result, `Ok(None)`
/// when no mapping exists, or an error when the backend itself fails.
#[async_trait]
pub trait LookupRegistry: Send + Sync {
    /// Resolve a query to a connection string and originating provider.
    async fn resolve(&self, query: &str) -> Result<Option<LookupResult>, LookupError>;
}
