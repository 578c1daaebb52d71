//! The driver contract implemented by concrete backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::DbcResult;
use crate::props::ConnectionProps;

/// An established database connection.
///
/// This layer carries no wire protocol of its own; the trait is the minimal
/// handle the registry needs to pass connections back to callers.
pub trait Connection: Send + Sync {
    /// The connection string this connection was opened with.
    fn url(&self) -> &str;
}

impl std::fmt::Debug for dyn Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection").field("url", &self.url()).finish()
    }
}

/// Driver version, reported to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
}

impl DriverVersion {
    /// Create a version pair.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for DriverVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Description of a connection property a driver understands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyInfo {
    /// Property name.
    pub name: String,
    /// Current value, if any.
    pub value: Option<String>,
    /// Whether the property is required to connect.
    pub required: bool,
    /// Human-readable description.
    pub description: Option<String>,
}

impl PropertyInfo {
    /// Create a property description with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A registered database driver.
///
/// Drivers are probed by the [`DriverManager`](crate::manager::DriverManager)
/// with URLs they may not own; `connect` and `property_info` must answer
/// "not applicable" (`Ok(None)` / empty vec) for foreign URLs rather than
/// erroring, so the manager can move on to the next candidate.
///
/// Implementations must be safe to call concurrently; the manager performs
/// no serialization of its own.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Check whether this driver claims the URL. Pure predicate, no side
    /// effects.
    fn accepts_url(&self, url: &str) -> bool;

    /// Attempt to open a connection.
    ///
    /// Returns `Ok(None)` when the URL is not addressable by this driver
    /// (never an error), `Ok(Some(_))` on success, and `Err(_)` only for a
    /// genuine connect failure on a URL the driver owns. `props` may be
    /// amplified in place before the connection is opened.
    async fn connect(
        &self,
        url: &str,
        props: &mut ConnectionProps,
    ) -> DbcResult<Option<Box<dyn Connection>>>;

    /// Describe the properties this driver understands for the URL.
    ///
    /// Returns an empty vec (never an error) when the URL is not
    /// addressable by this driver.
    async fn property_info(
        &self,
        url: &str,
        props: &ConnectionProps,
    ) -> DbcResult<Vec<PropertyInfo>>;

    /// Driver version.
    fn version(&self) -> DriverVersion;

    /// Whether this driver claims full compliance with the connectivity
    /// API specification.
    fn compliant(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display() {
        assert_eq!(DriverVersion::new(1, 0).to_string(), "1.0");
        assert_eq!(DriverVersion::new(2, 13).to_string(), "2.13");
    }

    #[test]
    fn test_property_info_new() {
        let info = PropertyInfo::new("user");
        assert_eq!(info.name, "user");
        assert_eq!(info.value, None);
        assert!(!info.required);
    }
}
