//! Smoke test for the facade re-exports.

use std::sync::Arc;

use async_trait::async_trait;

use patchbay::prelude::*;

struct OneShotRegistry;

struct NoDefaults;

impl ConnectionLookup for NoDefaults {}

#[async_trait]
impl LookupRegistry for OneShotRegistry {
    async fn resolve(&self, query: &str) -> Result<Option<LookupResult>, LookupError> {
        if query == "app" {
            Ok(Some(LookupResult::new(
                "mem://app",
                Arc::new(NoDefaults),
            )))
        } else {
            Ok(None)
        }
    }
}

struct MemConnection;

impl Connection for MemConnection {
    fn url(&self) -> &str {
        "mem://app"
    }
}

struct MemDriver;

#[async_trait]
impl Driver for MemDriver {
    fn accepts_url(&self, url: &str) -> bool {
        url.starts_with("mem://")
    }

    async fn connect(
        &self,
        url: &str,
        _props: &mut ConnectionProps,
    ) -> DbcResult<Option<Box<dyn Connection>>> {
        if !self.accepts_url(url) {
            return Ok(None);
        }
        Ok(Some(Box::new(MemConnection)))
    }

    async fn property_info(
        &self,
        _url: &str,
        _props: &ConnectionProps,
    ) -> DbcResult<Vec<patchbay::dbc::PropertyInfo>> {
        Ok(Vec::new())
    }

    fn version(&self) -> patchbay::dbc::DriverVersion {
        patchbay::dbc::DriverVersion::new(1, 0)
    }
}

#[tokio::test]
async fn facade_wires_delegation_end_to_end() {
    let manager = DriverManager::new();
    manager.register(Arc::new(MemDriver), None).unwrap();
    DelegatingDriver::register(Arc::new(OneShotRegistry), manager.clone()).unwrap();

    let mut props = ConnectionProps::new();
    let conn = manager.get_connection("sf:app", &mut props).await.unwrap();
    assert_eq!(conn.url(), "mem://app");

    let err = manager
        .get_connection("sf:missing", &mut ConnectionProps::new())
        .await
        .unwrap_err();
    assert!(matches!(err, DbcError::NoSuitableDriver(_)));
}
