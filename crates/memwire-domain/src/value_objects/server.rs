//! Server entry value object

use crate::constants::{DEFAULT_SERVER_PORT, DEFAULT_SERVER_WEIGHT};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One memcached server registered on a client
///
/// Weights are forwarded unchanged; no normalization happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerSpec {
    /// Host name or address (`dsn` accepted as alias)
    #[serde(alias = "dsn")]
    pub host: String,

    /// TCP port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Relative weight used by the key distribution
    #[serde(default)]
    pub weight: u32,
}

fn default_port() -> u16 {
    DEFAULT_SERVER_PORT
}

impl ServerSpec {
    /// Create a server entry
    pub fn new(host: impl Into<String>, port: u16, weight: u32) -> Self {
        Self {
            host: host.into(),
            port,
            weight,
        }
    }

    /// Server on the default port with the default weight
    pub fn with_host(host: impl Into<String>) -> Self {
        Self::new(host, DEFAULT_SERVER_PORT, DEFAULT_SERVER_WEIGHT)
    }
}

impl fmt::Display for ServerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} (weight {})", self.host, self.port, self.weight)
    }
}
