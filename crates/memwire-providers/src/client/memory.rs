//! Moka in-memory client driver
//!
//! Stands in for a memcached client inside one process. Clients built with
//! the same persistent id share one store, the way persistent connections
//! share a pool.
//!
//! ## Example
//!
//! ```ignore
//! use memwire_providers::MemoryClientRuntime;
//!
//! let runtime = MemoryClientRuntime::with_capacity(10_000);
//! let mut client = runtime.create_client(Some("sessions"))?;
//! client.add_servers(&[ServerSpec::with_host("127.0.0.1")])?;
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use memwire_application::ports::registry::{CLIENT_DRIVERS, ClientDriverConfig, ClientDriverEntry};
use memwire_domain::error::Result;
use memwire_domain::ports::{CacheClient, ClientRuntime};
use memwire_domain::value_objects::{ClientOption, ConstantTable, OptionValue, ServerSpec};
use moka::Expiry;
use moka::future::Cache;
use tracing::debug;

use super::settings::ClientSettings;
use crate::constants::{MEMORY_DEFAULT_MAX_CAPACITY, MEMORY_DRIVER_NAME};

#[derive(Debug, Clone)]
struct StoredValue {
    data: Vec<u8>,
    ttl: Option<Duration>,
}

/// Expires each entry after the TTL it was last written with
struct EntryTtl;

impl Expiry<String, StoredValue> for EntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl
    }
}

type Store = Cache<String, StoredValue>;

/// Runtime producing [`MemoryCacheClient`]s
pub struct MemoryClientRuntime {
    constants: ConstantTable,
    max_capacity: u64,
    pools: DashMap<String, Store>,
}

impl Default for MemoryClientRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryClientRuntime {
    /// Runtime with default capacity and the memcached constant table
    pub fn new() -> Self {
        Self::with_capacity(MEMORY_DEFAULT_MAX_CAPACITY)
    }

    /// Runtime whose stores hold at most `max_capacity` entries
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            constants: ConstantTable::memcached(),
            max_capacity,
            pools: DashMap::new(),
        }
    }

    /// Replace the constant table
    pub fn with_constants(mut self, constants: ConstantTable) -> Self {
        self.constants = constants;
        self
    }

    /// Runtime configured from registry settings
    pub fn from_config(config: &ClientDriverConfig) -> Self {
        Self::with_capacity(config.max_capacity.unwrap_or(MEMORY_DEFAULT_MAX_CAPACITY))
    }

    /// Number of persistent pools opened so far
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Live entries in the store of persistent pool `id`
    ///
    /// Expired entries are evicted before counting.
    pub async fn pool_entry_count(&self, id: &str) -> Option<u64> {
        let store = self.pools.get(id).map(|pool| pool.value().clone())?;
        store.run_pending_tasks().await;
        Some(store.entry_count())
    }

    fn new_store(&self) -> Store {
        Cache::builder()
            .max_capacity(self.max_capacity)
            .expire_after(EntryTtl)
            .build()
    }
}

impl ClientRuntime for MemoryClientRuntime {
    fn name(&self) -> &str {
        MEMORY_DRIVER_NAME
    }

    fn is_available(&self) -> bool {
        true
    }

    fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    fn create_client(&self, persistent_id: Option<&str>) -> Result<Box<dyn CacheClient>> {
        let store = match persistent_id {
            Some(id) => {
                debug!(persistent_id = id, "Reusing persistent store");
                self.pools
                    .entry(id.to_string())
                    .or_insert_with(|| self.new_store())
                    .value()
                    .clone()
            }
            None => self.new_store(),
        };

        Ok(Box::new(MemoryCacheClient {
            store,
            settings: ClientSettings::new(self.constants.clone(), persistent_id),
        }))
    }
}

impl std::fmt::Debug for MemoryClientRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryClientRuntime")
            .field("max_capacity", &self.max_capacity)
            .field("pools", &self.pools.len())
            .finish()
    }
}

/// Moka-backed cache client
///
/// Keys are stored with the configured `prefix_key` prepended.
#[derive(Clone)]
pub struct MemoryCacheClient {
    store: Store,
    settings: ClientSettings,
}

impl MemoryCacheClient {
    fn store_key(&self, key: &str) -> String {
        format!("{}{}", self.settings.prefix_key(), key)
    }
}

#[async_trait]
impl CacheClient for MemoryCacheClient {
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

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self
            .store
            .get(&self.store_key(key))
            .await
            .map(|value| value.data))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        // A zero TTL means "never expire", as with memcached
        let ttl = ttl.filter(|ttl| !ttl.is_zero());
        self.store
            .insert(
                self.store_key(key),
                StoredValue {
                    data: value.to_vec(),
                    ttl,
                },
            )
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.store.remove(&self.store_key(key)).await.is_some())
    }

    async fn flush(&self) -> Result<()> {
        self.store.invalidate_all();
        self.store.run_pending_tasks().await;
        Ok(())
    }

    fn driver_name(&self) -> &str {
        MEMORY_DRIVER_NAME
    }
}

impl std::fmt::Debug for MemoryCacheClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheClient")
            .field("settings", &self.settings)
            .field("entries", &self.store.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(CLIENT_DRIVERS)]
static MEMORY_DRIVER: ClientDriverEntry = ClientDriverEntry {
    name: MEMORY_DRIVER_NAME,
    description: "Moka in-process store (persistent ids share one store)",
    factory: memory_driver_factory,
};

fn memory_driver_factory(
    config: &ClientDriverConfig,
) -> std::result::Result<Arc<dyn ClientRuntime>, String> {
    Ok(Arc::new(MemoryClientRuntime::from_config(config)))
}
