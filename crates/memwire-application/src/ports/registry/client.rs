//! Client Driver Registry
//!
//! Drivers register themselves via `linkme::distributed_slice` and are
//! discovered at runtime by name.

use std::collections::HashMap;
use std::sync::Arc;

use memwire_domain::ports::ClientRuntime;

/// Configuration for driver creation
///
/// Drivers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct ClientDriverConfig {
    /// Driver name (e.g., "memory", "null")
    pub driver: String,
    /// Maximum entries held by in-process stores
    pub max_capacity: Option<u64>,
    /// Additional driver-specific configuration
    pub extra: HashMap<String, String>,
}

impl ClientDriverConfig {
    /// Create a new config with the given driver name
    pub fn new(driver: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            ..Default::default()
        }
    }

    /// Set the max capacity
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for client drivers
pub struct ClientDriverEntry {
    /// Unique driver name (e.g., "memory", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function creating the driver runtime
    pub factory: fn(&ClientDriverConfig) -> Result<Arc<dyn ClientRuntime>, String>,
}

#[linkme::distributed_slice]
pub static CLIENT_DRIVERS: [ClientDriverEntry] = [..];

/// Resolve a driver runtime by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn ClientRuntime>)` - Created runtime
/// * `Err(String)` - Unknown driver (with the available names) or factory failure
pub fn resolve_client_driver(
    config: &ClientDriverConfig,
) -> Result<Arc<dyn ClientRuntime>, String> {
    if let Some(entry) = CLIENT_DRIVERS.iter().find(|e| e.name == config.driver) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = CLIENT_DRIVERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown client driver '{}'. Available drivers: {:?}",
        config.driver, available
    ))
}

/// List all registered drivers as (name, description) pairs
pub fn list_client_drivers() -> Vec<(&'static str, &'static str)> {
    CLIENT_DRIVERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
