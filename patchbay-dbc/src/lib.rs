//! Generic database connectivity layer for Patchbay.
//!
//! This crate models the driver-registration side of a relational-database
//! connectivity API: a [`Driver`] trait that concrete backends implement, a
//! [`DriverManager`] registry that probes registered drivers for a URL, and
//! the [`ConnectionProps`] map that travels with every connect request.
//!
//! The manager is deliberately an explicit value rather than ambient global
//! state, so applications can share one process-wide instance while tests
//! construct their own with controlled fakes.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use patchbay_dbc::{ConnectionProps, DriverManager};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = DriverManager::new();
//!     manager.register(Arc::new(MyDriver::default()), None)?;
//!
//!     let mut props = ConnectionProps::new().with("user", "app");
//!     let conn = manager.get_connection("mydb://localhost/app", &mut props).await?;
//!     println!("connected to {}", conn.url());
//!     Ok(())
//! }
//! ```

pub mod driver;
pub mod error;
pub mod manager;
pub mod props;

pub use driver::{Connection, Driver, DriverVersion, PropertyInfo};
pub use error::{DbcError, DbcResult};
pub use manager::{DeregistrationHook, DriverManager};
pub use props::{ConnectionProps, PASSWORD, USER};
