//! Null client driver for testing
//!
//! Clients record their configuration so wiring can be inspected, but never
//! store a value.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use memwire_application::ports::registry::{CLIENT_DRIVERS, ClientDriverConfig, ClientDriverEntry};
use memwire_domain::error::Result;
use memwire_domain::ports::{CacheClient, ClientRuntime};
use memwire_domain::value_objects::{ClientOption, ConstantTable, OptionValue, ServerSpec};

use super::settings::ClientSettings;
use crate::constants::NULL_DRIVER_NAME;

/// Runtime producing [`NullCacheClient`]s
///
/// # Example
///
/// ```rust
/// use memwire_domain::ports::ClientRuntime;
/// use memwire_providers::NullClientRuntime;
///
/// let runtime = NullClientRuntime::new();
/// assert!(runtime.is_available());
/// ```
#[derive(Debug, Clone)]
pub struct NullClientRuntime {
    constants: ConstantTable,
    available: bool,
}

impl NullClientRuntime {
    /// Available runtime with the memcached constant table
    pub fn new() -> Self {
        Self::with_constants(ConstantTable::memcached())
    }

    /// Available runtime with a custom constant table
    pub fn with_constants(constants: ConstantTable) -> Self {
        Self {
            constants,
            available: true,
        }
    }

    /// Runtime reporting itself as not loaded
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }
}

impl Default for NullClientRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientRuntime for NullClientRuntime {
    fn name(&self) -> &str {
        NULL_DRIVER_NAME
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    fn create_client(&self, persistent_id: Option<&str>) -> Result<Box<dyn CacheClient>> {
        Ok(Box::new(NullCacheClient::new(
            self.constants.clone(),
            persistent_id,
        )))
    }
}

/// Client that accepts every operation without storing anything
#[derive(Debug, Clone)]
pub struct NullCacheClient {
    settings: ClientSettings,
}

impl NullCacheClient {
    pub fn new(constants: ConstantTable, persistent_id: Option<&str>) -> Self {
        Self {
            settings: ClientSettings::new(constants, persistent_id),
        }
    }
}

#[async_trait]
impl CacheClient for NullCacheClient {
    fn add_servers(&mut self, servers: &[ServerSpec]) -> Result<()> {
        self.settings.add_servers(servers)
    }

    fn set_option(&mut self, option: ClientOption, value: OptionValue) -> Result<()> {
        self.settings.set_option(option, value)
    }

    fn servers(&self) -> Vec<ServerSpec> {
        self.settings.servers().to_vec()
    }

    fn option(&self, option: ClientOption) -> Option<OptionValue> {
        self.settings.option(option).cloned()
    }

    fn persistent_id(&self) -> Option<&str> {
        self.settings.persistent_id()
    }

    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        // Always a miss
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn driver_name(&self) -> &str {
        NULL_DRIVER_NAME
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(CLIENT_DRIVERS)]
static NULL_DRIVER: ClientDriverEntry = ClientDriverEntry {
    name: NULL_DRIVER_NAME,
    description: "No-op client that records configuration and stores nothing",
    factory: null_driver_factory,
};

fn null_driver_factory(_config: &ClientDriverConfig) -> std::result::Result<Arc<dyn ClientRuntime>, String> {
    Ok(Arc::new(NullClientRuntime::new()))
}
