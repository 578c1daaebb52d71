//! Error types for connectivity operations.

use thiserror::Error;

/// Result type for connectivity operations.
pub type DbcResult<T> = Result<T, DbcError>;

/// Error type for connectivity operations.
#[derive(Error, Debug)]
pub enum DbcError {
    /// No registered driver accepted the URL.
    #[error("No suitable driver for URL: {0}")]
    NoSuitableDriver(String),

    /// The driver instance is already registered.
    #[error("Driver already registered")]
    AlreadyRegistered,

    /// A concrete driver failed to establish a connection.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Driver registration failed.
    #[error("Driver registration failed: {0}")]
    Registration(String),
}

impl DbcError {
    /// Create a connect error.
    pub fn connect(msg: impl Into<String>) -> Self {
        Self::Connect(msg.into())
    }

    /// Create a registration error.
    pub fn registration(msg: impl Into<String>) -> Self {
        Self::Registration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DbcError::NoSuitableDriver("bogus://x".to_string());
        assert!(err.to_string().contains("No suitable driver"));
        assert!(err.to_string().contains("bogus://x"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(DbcError::connect("refused"), DbcError::Connect(_)));
        assert!(matches!(
            DbcError::registration("closed"),
            DbcError::Registration(_)
        ));
    }
}
