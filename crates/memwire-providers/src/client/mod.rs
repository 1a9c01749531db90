//! Client Driver Implementations
//!
//! | Driver | Type | Description |
//! |--------|------|-------------|
//! | [`NullClientRuntime`] | Testing | Records configuration, stores nothing |
//! | [`MemoryClientRuntime`] | Local | Moka-backed store honoring prefix keys and TTLs |

#[cfg(feature = "driver-memory")]
pub mod memory;
pub mod null;
mod settings;

#[cfg(feature = "driver-memory")]
pub use memory::{MemoryCacheClient, MemoryClientRuntime};
pub use null::{NullCacheClient, NullClientRuntime};
pub use settings::ClientSettings;
