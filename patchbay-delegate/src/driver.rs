//! The delegating driver.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use patchbay_dbc::{
    Connection, ConnectionProps, DbcResult, Driver, DriverManager, DriverVersion, PASSWORD,
    PropertyInfo, USER,
};

use crate::lookup::{LookupRegistry, LookupResult};

/// URL prefix this driver claims.
const PREFIX: &str = "sf";

/// Separator between the prefix and the query.
const SEPARATOR: char = ':';

const VERSION: DriverVersion = DriverVersion::new(1, 0);

/// Check whether a URL is addressable by the delegating driver.
///
/// True iff the URL is strictly longer than the prefix and starts with it,
/// byte for byte. Every public entry point gates on this so foreign URLs
/// yield "not applicable" rather than errors; the manager may probe several
/// drivers with the same URL.
fn accepts(url: &str) -> bool {
    url.len() > PREFIX.len() && url.starts_with(PREFIX)
}

/// Extract the query segment of an addressable URL: everything after the
/// prefix and its following separator. Only meaningful behind [`accepts`].
fn query_of(url: &str) -> &str {
    url.get(PREFIX.len() + SEPARATOR.len_utf8()..).unwrap_or("")
}

/// A driver that resolves logical database names at connect time.
///
/// Recognizes `sf:<query>` URLs, resolves `<query>` through the lookup
/// registry, backfills default credentials into the caller's properties,
/// and delegates the actual connect to whichever registered driver accepts
/// the resolved connection string.
///
/// Holds no mutable state; every invocation decides fresh from the input
/// URL and the current lookup registry, so concurrent use needs no locking.
pub struct DelegatingDriver {
    registry: Arc<dyn LookupRegistry>,
    manager: DriverManager,
}

impl DelegatingDriver {
    /// Create a delegating driver over the given lookup registry and
    /// driver manager.
    pub fn new(registry: Arc<dyn LookupRegistry>, manager: DriverManager) -> Self {
        Self { registry, manager }
    }

    /// The URL prefix this driver claims.
    pub fn prefix() -> &'static str {
        PREFIX
    }

    /// Create the driver and register it with the manager, wiring a
    /// deregistration hook that emits a lifecycle notification.
    pub fn register(
        registry: Arc<dyn LookupRegistry>,
        manager: DriverManager,
    ) -> DbcResult<Arc<Self>> {
        let driver = Arc::new(Self::new(registry, manager.clone()));
        let as_dyn: Arc<dyn Driver> = driver.clone();
        manager.register(
            as_dyn,
            Some(Box::new(|| info!("Delegating driver deregistered"))),
        )?;
        info!(prefix = PREFIX, "Delegating driver registered");
        Ok(driver)
    }

    /// Register at bootstrap, tolerating failure.
    ///
    /// A registration failure is logged and the driver simply remains
    /// unregistered; callers get `None` instead of an error.
    pub fn install(
        registry: Arc<dyn LookupRegistry>,
        manager: DriverManager,
    ) -> Option<Arc<Self>> {
        match Self::register(registry, manager) {
            Ok(driver) => Some(driver),
            Err(e) => {
                error!(error = %e, "Error registering delegating driver");
                None
            }
        }
    }

    /// Resolve an addressable URL to a lookup result.
    ///
    /// Resolution failures degrade to `None`: a missing mapping and a broken
    /// lookup backend both leave the URL unhandled rather than failing the
    /// connect. The two causes are logged distinctly.
    async fn resolve(&self, url: &str) -> Option<LookupResult> {
        let query = query_of(url);
        debug!(url = %url, query = %query, "Resolving delegated URL");

        match self.registry.resolve(query).await {
            Ok(Some(result)) => Some(result),
            Ok(None) => {
                warn!(url = %url, "No connection string mapped for delegated URL");
                None
            }
            Err(e) => {
                error!(url = %url, "Lookup backend failed resolving delegated URL");
                debug!(error = %e, "Lookup failure details");
                None
            }
        }
    }
}

/// Backfill `user` and `password` from the originating provider's defaults.
///
/// Caller-supplied values always win; each key is considered independently,
/// so the operation is idempotent and order-independent.
fn fill_default_credentials(result: &LookupResult, props: &mut ConnectionProps) {
    if !props.contains(USER) {
        if let Some(user) = result.lookup().default_username() {
            props.set(USER, user);
        }
    }

    if !props.contains(PASSWORD) {
        if let Some(password) = result.lookup().default_password() {
            props.set(PASSWORD, password);
        }
    }
}

#[async_trait]
impl Driver for DelegatingDriver {
    fn accepts_url(&self, url: &str) -> bool {
        accepts(url)
    }

    async fn connect(
        &self,
        url: &str,
        props: &mut ConnectionProps,
    ) -> DbcResult<Option<Box<dyn Connection>>> {
        if !accepts(url) {
            return Ok(None);
        }

        let Some(result) = self.resolve(url).await else {
            return Ok(None);
        };

        debug!(target = %result.connection_string(), "Delegating connect");
        fill_default_credentials(&result, props);

        self.manager
            .get_connection(result.connection_string(), props)
            .await
            .map(Some)
    }

    async fn property_info(
        &self,
        url: &str,
        props: &ConnectionProps,
    ) -> DbcResult<Vec<PropertyInfo>> {
        if !accepts(url) {
            return Ok(Vec::new());
        }

        let Some(result) = self.resolve(url).await else {
            return Ok(Vec::new());
        };

        match self.manager.driver_for(result.connection_string()) {
            Some(driver) => {
                driver
                    .property_info(result.connection_string(), props)
                    .await
            }
            None => Ok(Vec::new()),
        }
    }

    fn version(&self) -> DriverVersion {
        VERSION
    }

    fn compliant(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{ConnectionLookup, LookupError};

    #[test]
    fn test_accepts_requires_prefix_and_payload() {
        assert!(accepts("sf:prod-db"));
        assert!(accepts("sfx"));

        assert!(!accepts("sf"));
        assert!(!accepts("s"));
        assert!(!accepts(""));
        assert!(!accepts("postgres://host/db"));
        assert!(!accepts("SF:prod-db"));
    }

    #[test]
    fn test_query_extraction() {
        assert_eq!(query_of("sf:prod-db"), "prod-db");
        assert_eq!(query_of("sf:a"), "a");
        assert_eq!(query_of("sf:"), "");
        // Queries are opaque; nested separators pass through untouched.
        assert_eq!(query_of("sf:env:prod:replica-2"), "env:prod:replica-2");
    }

    struct Defaults {
        user: Option<&'static str>,
        password: Option<&'static str>,
    }

    impl ConnectionLookup for Defaults {
        fn default_username(&self) -> Option<String> {
            self.user.map(str::to_string)
        }

        fn default_password(&self) -> Option<String> {
            self.password.map(str::to_string)
        }
    }

    fn result_with(user: Option<&'static str>, password: Option<&'static str>) -> LookupResult {
        LookupResult::new("pg://host/db", Arc::new(Defaults { user, password }))
    }

    #[test]
    fn test_backfill_fills_absent_credentials() {
        let result = result_with(Some("svc"), Some("hunter2"));
        let mut props = ConnectionProps::new();

        fill_default_credentials(&result, &mut props);

        assert_eq!(props.user(), Some("svc"));
        assert_eq!(props.password(), Some("hunter2"));
    }

    #[test]
    fn test_backfill_never_overwrites_caller_values() {
        let result = result_with(Some("svc"), Some("hunter2"));
        let mut props = ConnectionProps::new()
            .with(USER, "alice")
            .with(PASSWORD, "s3cret");

        fill_default_credentials(&result, &mut props);

        assert_eq!(props.user(), Some("alice"));
        assert_eq!(props.password(), Some("s3cret"));
    }

    #[test]
    fn test_backfill_keys_are_independent() {
        let result = result_with(Some("svc"), Some("hunter2"));
        let mut props = ConnectionProps::new().with(USER, "alice");

        fill_default_credentials(&result, &mut props);

        assert_eq!(props.user(), Some("alice"));
        assert_eq!(props.password(), Some("hunter2"));
    }

    #[test]
    fn test_backfill_noop_without_defaults() {
        let result = result_with(None, None);
        let mut props = ConnectionProps::new();

        fill_default_credentials(&result, &mut props);

        assert!(props.is_empty());
    }

    #[test]
    fn test_backfill_is_idempotent() {
        let result = result_with(Some("svc"), None);
        let mut props = ConnectionProps::new();

        fill_default_credentials(&result, &mut props);
        let after_first = props.clone();
        fill_default_credentials(&result, &mut props);

        assert_eq!(props, after_first);
    }

    struct EmptyRegistry;

    #[async_trait]
    impl LookupRegistry for EmptyRegistry {
        async fn resolve(&self, _query: &str) -> Result<Option<LookupResult>, LookupError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_unresolved_connect_is_not_handled() {
        let driver = DelegatingDriver::new(Arc::new(EmptyRegistry), DriverManager::new());

        let mut props = ConnectionProps::new();
        let outcome = driver.connect("sf:unknown", &mut props).await.unwrap();
        assert!(outcome.is_none());
        assert!(props.is_empty());
    }

    #[tokio::test]
    async fn test_version_and_compliance() {
        let driver = DelegatingDriver::new(Arc::new(EmptyRegistry), DriverManager::new());
        assert_eq!(driver.version(), DriverVersion::new(1, 0));
        assert!(!driver.compliant());
    }
}
