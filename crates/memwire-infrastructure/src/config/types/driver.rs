//! Client driver selection

use crate::constants::DEFAULT_DRIVER;
use memwire_application::ports::registry::ClientDriverConfig;
use serde::{Deserialize, Serialize};

/// Which registered client driver backs the configured instances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Registered driver name ("memory", "null")
    pub name: String,

    /// Entry limit of in-process stores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DRIVER.to_string(),
            max_capacity: None,
        }
    }
}

impl DriverConfig {
    /// Registry lookup settings for this driver
    pub fn to_registry_config(&self) -> ClientDriverConfig {
        let config = ClientDriverConfig::new(&self.name);
        match self.max_capacity {
            Some(capacity) => config.with_max_capacity(capacity),
            None => config,
        }
    }
}
