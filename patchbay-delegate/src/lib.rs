//! Delegating driver for Patchbay.
//!
//! This crate lets applications address databases by logical name instead of
//! physical connection string. A [`DelegatingDriver`] registered with a
//! [`DriverManager`](patchbay_dbc::DriverManager) claims URLs of the form
//! `sf:<query>`, resolves `<query>` through a pluggable [`LookupRegistry`]
//! to a real connection string (plus optional default credentials), and
//! hands the connect off to whichever concrete driver accepts the resolved
//! string.
//!
//! The driver itself is stateless routing policy: recognize, resolve,
//! backfill credentials, delegate. Query syntax is fully opaque to it and
//! owned by the lookup registry.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use patchbay_dbc::{ConnectionProps, DriverManager};
//! use patchbay_delegate::DelegatingDriver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = DriverManager::new();
//!     manager.register(Arc::new(PostgresDriver::default()), None)?;
//!
//!     let registry = Arc::new(MyLookupRegistry::from_env()?);
//!     DelegatingDriver::register(registry, manager.clone())?;
//!
//!     // "prod-db" is resolved by the lookup registry at connect time.
//!     let mut props = ConnectionProps::new();
//!     let conn = manager.get_connection("sf:prod-db", &mut props).await?;
//!     Ok(())
//! }
//! ```

pub mod driver;
pub mod lookup;

pub use driver::DelegatingDriver;
pub use lookup::{ConnectionLookup, LookupError, LookupRegistry, LookupResult};
