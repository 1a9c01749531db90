//! Main application configuration

use super::{DriverConfig, LoggingConfig};
use memwire_domain::value_objects::CacheWiringConfig;
use serde::{Deserialize, Serialize};

/// Root configuration document
///
/// ```toml
/// [logging]
/// level = "debug"
///
/// [driver]
/// name = "memory"
///
/// [memcache.instances.default]
/// hosts = [{ dsn = "localhost", port = 11211 }]
///
/// [memcache.session_support]
/// enabled = true
/// instance_id = "default"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Client driver selection
    pub driver: DriverConfig,

    /// Cache instances and session binding
    pub memcache: CacheWiringConfig,
}
