//! Instance configuration value objects

use super::options::MemcachedOptions;
use super::server::ServerSpec;
use super::session::SessionSupportConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declarative configuration of one named cache client
///
/// # Example
///
/// ```
/// use memwire_domain::value_objects::InstanceConfig;
///
/// let config = InstanceConfig::new("default").with_server("127.0.0.1", 11211, 1);
/// assert_eq!(config.servers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceConfig {
    /// Unique instance name; filled from the map key when read from config
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Ordered server list (`hosts` accepted as alias)
    #[serde(default, alias = "hosts")]
    pub servers: Vec<ServerSpec>,

    /// Connection pool id reused across process invocations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_id: Option<String>,

    /// Client options (`memcached_options` accepted as alias)
    #[serde(
        default,
        alias = "memcached_options",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<MemcachedOptions>,
}

impl InstanceConfig {
    /// Create an instance with no server and no options
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a server
    pub fn with_server(mut self, host: impl Into<String>, port: u16, weight: u32) -> Self {
        self.servers.push(ServerSpec::new(host, port, weight));
        self
    }

    /// Set the persistent connection id
    pub fn with_persistent_id(mut self, persistent_id: impl Into<String>) -> Self {
        self.persistent_id = Some(persistent_id.into());
        self
    }

    /// Set the client options
    pub fn with_options(mut self, options: MemcachedOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// The `memcache` configuration section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheWiringConfig {
    /// Instances keyed by name
    pub instances: BTreeMap<String, InstanceConfig>,

    /// Optional session storage binding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_support: Option<SessionSupportConfig>,
}

impl CacheWiringConfig {
    /// Add an instance under its own name
    pub fn with_instance(mut self, instance: InstanceConfig) -> Self {
        self.instances.insert(instance.name.clone(), instance);
        self
    }

    /// Set the session binding
    pub fn with_session_support(mut self, session: SessionSupportConfig) -> Self {
        self.session_support = Some(session);
        self
    }

    /// Instances with `name` taken from their map key
    pub fn named_instances(&self) -> Vec<InstanceConfig> {
        self.instances
            .iter()
            .map(|(name, instance)| InstanceConfig {
                name: name.clone(),
                ..instance.clone()
            })
            .collect()
    }

    /// Session binding, only when present and enabled
    pub fn enabled_session(&self) -> Option<&SessionSupportConfig> {
        self.session_support.as_ref().filter(|s| s.enabled)
    }
}
