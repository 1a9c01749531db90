//! Cache session handler
//!
//! Stores web session payloads in the instance the session slot is bound
//! to. Keys are `<prefix><session id>`; every write refreshes the TTL to
//! `expiretime` seconds.

use std::sync::Arc;
use std::time::Duration;

use memwire_domain::constants::SESSION_HANDLER_SERVICE;
use memwire_domain::error::{Error, Result};
use memwire_domain::ports::CacheClient;
use memwire_domain::value_objects::{Argument, ServiceDefinition, SessionOptions};
use tracing::debug;

use crate::di::InstanceRegistry;

/// Session storage through one cache client
#[derive(Debug, Clone)]
pub struct CacheSessionHandler {
    client: Arc<dyn CacheClient>,
    options: SessionOptions,
}

impl CacheSessionHandler {
    pub fn new(client: Arc<dyn CacheClient>, options: SessionOptions) -> Self {
        Self { client, options }
    }

    /// Build from the `memcache.session_handler` definition
    ///
    /// Argument 0 references the bound client, argument 1 carries the
    /// session options.
    pub fn from_definition(
        definition: &ServiceDefinition,
        instances: &InstanceRegistry,
    ) -> Result<Self> {
        let service_id = definition
            .arguments
            .first()
            .and_then(Argument::as_reference)
            .ok_or_else(|| {
                Error::configuration(format!(
                    "'{SESSION_HANDLER_SERVICE}' must reference a cache client"
                ))
            })?;
        let client = instances
            .get(service_id)
            .ok_or_else(|| Error::not_found(format!("cache client '{service_id}'")))?;

        let options = match definition.arguments.get(1).and_then(Argument::as_value) {
            Some(value) => serde_json::from_value(value.clone())?,
            None => SessionOptions::default(),
        };

        Ok(Self::new(client, options))
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Cache key of a session
    pub fn key(&self, session_id: &str) -> String {
        format!("{}{}", self.options.prefix, session_id)
    }

    /// Session payload, `None` when absent or expired
    pub async fn read(&self, session_id: &str) -> Result<Option<Vec<u8>>> {
        self.client.get(&self.key(session_id)).await
    }

    /// Store a session payload for `expiretime` seconds
    pub async fn write(&self, session_id: &str, data: &[u8]) -> Result<()> {
        let ttl = Duration::from_secs(self.options.expiretime);
        debug!(session = session_id, ttl_secs = self.options.expiretime, "Writing session");
        self.client.set(&self.key(session_id), data, Some(ttl)).await
    }

    /// Remove a session, returning whether it existed
    pub async fn destroy(&self, session_id: &str) -> Result<bool> {
        self.client.delete(&self.key(session_id)).await
    }
}
