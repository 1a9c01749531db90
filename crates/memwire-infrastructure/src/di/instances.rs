//! Live client instances
//!
//! The compiled counterpart of the client definitions in a
//! [`ServiceContainer`](super::ServiceContainer), keyed by service id.

use std::collections::BTreeMap;
use std::sync::Arc;

use memwire_domain::constants::instance_service_id;
use memwire_domain::error::{Error, Result};
use memwire_domain::ports::CacheClient;

/// Constructed cache clients owned for the application lifetime
#[derive(Debug, Clone, Default)]
pub struct InstanceRegistry {
    clients: BTreeMap<String, Arc<dyn CacheClient>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a client under its service id
    pub fn insert(&mut self, service_id: impl Into<String>, client: Arc<dyn CacheClient>) {
        self.clients.insert(service_id.into(), client);
    }

    /// Client registered under a service id (`memcache.default`)
    pub fn get(&self, service_id: &str) -> Option<Arc<dyn CacheClient>> {
        self.clients.get(service_id).cloned()
    }

    /// Client of instance `name` (`default`)
    pub fn instance(&self, name: &str) -> Result<Arc<dyn CacheClient>> {
        let service_id = instance_service_id(name);
        self.get(&service_id)
            .ok_or_else(|| Error::not_found(format!("cache instance '{name}' ({service_id})")))
    }

    /// Service ids in order
    pub fn service_ids(&self) -> Vec<String> {
        self.clients.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
