//! Driver registry and connection dispatch.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::driver::{Connection, Driver};
use crate::error::{DbcError, DbcResult};
use crate::props::ConnectionProps;

/// Callback fired once when a driver is removed from the registry.
pub type DeregistrationHook = Box<dyn FnOnce() + Send + Sync>;

struct Registration {
    driver: Arc<dyn Driver>,
    on_deregister: Option<DeregistrationHook>,
}

/// Registry of database drivers.
///
/// Cheaply cloneable; clones share the same registration list. Applications
/// typically hold one instance for the whole process, while tests build
/// their own with controlled fakes.
///
/// Connect requests probe every registered driver in registration order;
/// drivers signal "not my URL" by returning `Ok(None)`, and the first
/// driver that produces a connection (or a genuine error) wins.
#[derive(Clone, Default)]
pub struct DriverManager {
    registrations: Arc<RwLock<Vec<Registration>>>,
}

impl DriverManager {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a driver, with an optional hook fired when it is later
    /// deregistered.
    ///
    /// Registering the same driver instance twice is rejected.
    pub fn register(
        &self,
        driver: Arc<dyn Driver>,
        on_deregister: Option<DeregistrationHook>,
    ) -> DbcResult<()> {
        let mut registrations = self.registrations.write();
        if registrations
            .iter()
            .any(|reg| Arc::ptr_eq(&reg.driver, &driver))
        {
            return Err(DbcError::AlreadyRegistered);
        }

        debug!(version = %driver.version(), "Driver registered");
        registrations.push(Registration {
            driver,
            on_deregister,
        });
        Ok(())
    }

    /// Remove a driver from the registry, firing its deregistration hook.
    ///
    /// Returns `false` if the driver was not registered.
    pub fn deregister(&self, driver: &Arc<dyn Driver>) -> bool {
        let removed = {
            let mut registrations = self.registrations.write();
            registrations
                .iter()
                .position(|reg| Arc::ptr_eq(&reg.driver, driver))
                .map(|idx| registrations.remove(idx))
        };

        match removed {
            Some(mut reg) => {
                info!(version = %reg.driver.version(), "Driver deregistered");
                if let Some(hook) = reg.on_deregister.take() {
                    hook();
                }
                true
            }
            None => false,
        }
    }

    /// Number of registered drivers.
    pub fn len(&self) -> usize {
        self.registrations.read().len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.registrations.read().is_empty()
    }

    /// Find the first registered driver that accepts the URL.
    pub fn driver_for(&self, url: &str) -> Option<Arc<dyn Driver>> {
        self.registrations
            .read()
            .iter()
            .map(|reg| Arc::clone(&reg.driver))
            .find(|driver| driver.accepts_url(url))
    }

    /// Obtain a connection for the URL.
    ///
    /// Drivers are probed in registration order. A driver declining the URL
    /// (`Ok(None)`) moves the probe on; a driver error is propagated verbatim
    /// with no retry. If every driver declines, the result is
    /// [`DbcError::NoSuitableDriver`].
    pub async fn get_connection(
        &self,
        url: &str,
        props: &mut ConnectionProps,
    ) -> DbcResult<Box<dyn Connection>> {
        // Snapshot outside the lock; connect calls may block.
        let drivers: Vec<Arc<dyn Driver>> = self
            .registrations
            .read()
            .iter()
            .map(|reg| Arc::clone(&reg.driver))
            .collect();

        debug!(url = %url, candidates = drivers.len(), "Probing drivers for connection");

        for driver in drivers {
            if let Some(conn) = driver.connect(url, props).await? {
                return Ok(conn);
            }
        }

        warn!(url = %url, "No registered driver accepted URL");
        Err(DbcError::NoSuitableDriver(url.to_string()))
    }
}
