//! # memwire Providers
//!
//! Client drivers registered into the
//! [`CLIENT_DRIVERS`](memwire_application::ports::registry::CLIENT_DRIVERS)
//! registry.
//!
//! | Driver | Feature | Description |
//! |--------|---------|-------------|
//! | `memory` | `driver-memory` | In-process moka store, persistent ids share a store |
//! | `null` | always | Accepts every call, stores nothing |

pub mod client;
pub mod constants;

#[cfg(feature = "driver-memory")]
pub use client::{MemoryCacheClient, MemoryClientRuntime};
pub use client::{NullCacheClient, NullClientRuntime};
