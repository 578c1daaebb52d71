//! # Patchbay
//!
//! A connection-string delegation layer for addressing databases by logical
//! name.
//!
//! Patchbay sits in front of a generic database connectivity API. Connect
//! requests bearing the recognized `sf:` prefix have their query resolved
//! through a pluggable lookup registry into a real connection string (plus
//! optional default credentials), and are then handed off to whichever
//! registered driver accepts the resolved string. Callers address databases
//! by alias; the mapping is resolved fresh at connect time.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use patchbay::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = DriverManager::new();
//!     manager.register(Arc::new(PostgresDriver::default()), None)?;
//!
//!     let registry = Arc::new(MyLookupRegistry::from_env()?);
//!     DelegatingDriver::register(registry, manager.clone())?;
//!
//!     let mut props = ConnectionProps::new();
//!     let conn = manager.get_connection("sf:prod-db", &mut props).await?;
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Generic connectivity layer: driver trait and registry.
pub mod dbc {
    pub use patchbay_dbc::*;
}

/// The delegating driver and lookup contracts.
pub mod delegate {
    pub use patchbay_delegate::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dbc::{Connection, ConnectionProps, DbcError, DbcResult, Driver, DriverManager};
    pub use crate::delegate::{
        ConnectionLookup, DelegatingDriver, LookupError, LookupRegistry, LookupResult,
    };
}

// Re-export key types at the crate root
pub use dbc::{ConnectionProps, DbcError, DriverManager};
pub use delegate::{DelegatingDriver, LookupRegistry, LookupResult};
