//! Session support configuration

use crate::constants::{
    DEFAULT_SESSION_EXPIRETIME_SECS, DEFAULT_SESSION_PREFIX, DEFAULT_SESSION_SPIN_LOCK_WAIT_US,
};
use serde::{Deserialize, Serialize};

/// Request to back web sessions with one cache instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSupportConfig {
    /// Binding is only wired when enabled
    pub enabled: bool,
    /// Name of a declared instance
    pub instance_id: String,
    /// Options copied to the session handler
    pub options: SessionOptions,
}

impl SessionSupportConfig {
    /// Enabled binding to `instance_id` with default options
    pub fn enabled(instance_id: impl Into<String>) -> Self {
        Self {
            enabled: true,
            instance_id: instance_id.into(),
            options: SessionOptions::default(),
        }
    }
}

/// Session handler options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Prefix of every session key
    pub prefix: String,
    /// Session lifetime in seconds
    pub expiretime: u64,
    /// Lock sessions while a request holds them
    pub locking: bool,
    /// Wait between lock attempts, in microseconds
    pub spin_lock_wait: u64,
    /// Upper bound on lock waiting, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_max_wait: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_SESSION_PREFIX.to_string(),
            expiretime: DEFAULT_SESSION_EXPIRETIME_SECS,
            locking: true,
            spin_lock_wait: DEFAULT_SESSION_SPIN_LOCK_WAIT_US,
            lock_max_wait: None,
        }
    }
}
