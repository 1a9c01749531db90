//! Driver Registry System
//!
//! Auto-registration of client drivers. A driver crate adds an entry to the
//! [`CLIENT_DRIVERS`] distributed slice at link time; configuration selects
//! one by name at startup.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  1. Driver defines:   #[linkme::distributed_slice(CLIENT_DRIVERS)]
//! │                       static ENTRY: ClientDriverEntry = ...    │
//! │                             ↓                                  │
//! │  2. Registry queries: CLIENT_DRIVERS.iter()                    │
//! │                             ↓                                  │
//! │  3. Config selects:   driver.name = "memory" → MemoryRuntime   │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Driver (in memwire-providers)
//!
//! ```ignore
//! use memwire_application::ports::registry::{ClientDriverEntry, CLIENT_DRIVERS};
//!
//! #[linkme::distributed_slice(CLIENT_DRIVERS)]
//! static MEMORY_DRIVER: ClientDriverEntry = ClientDriverEntry {
//!     name: "memory",
//!     description: "In-process moka store",
//!     factory: |config| Ok(Arc::new(MemoryClientRuntime::from_config(config))),
//! };
//! ```

pub mod client;

pub use client::{
    CLIENT_DRIVERS, ClientDriverConfig, ClientDriverEntry, list_client_drivers,
    resolve_client_driver,
};
