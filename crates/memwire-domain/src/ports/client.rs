//! Cache Client Port
//!
//! The capability surface of one constructed client. Configuration calls
//! (`add_servers`, `set_option`) take `&mut self` and only happen while the
//! client is still exclusively owned during construction; data operations are
//! shared through `Arc<dyn CacheClient>` afterwards.

use crate::error::Result;
use crate::value_objects::{ClientOption, OptionValue, ServerSpec};
use async_trait::async_trait;
use std::time::Duration;

/// Cache client handle
///
/// # Example
///
/// ```ignore
/// use memwire_domain::ports::CacheClient;
///
/// client.set("user:1", b"payload", Some(Duration::from_secs(60))).await?;
/// let cached = client.get("user:1").await?;
/// ```
#[async_trait]
pub trait CacheClient: Send + Sync + std::fmt::Debug {
    /// Register servers in one bulk call, preserving order and weights
    fn add_servers(&mut self, servers: &[ServerSpec]) -> Result<()>;

    /// Apply one option; enum values arrive as runtime codes
    fn set_option(&mut self, option: ClientOption, value: OptionValue) -> Result<()>;

    /// Registered servers, in registration order
    fn servers(&self) -> Vec<ServerSpec>;

    /// Last value applied for an option, `None` when left at runtime default
    fn option(&self, option: ClientOption) -> Option<OptionValue>;

    /// Persistent connection id the client was created with
    fn persistent_id(&self) -> Option<&str>;

    /// Fetch a value
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store a value, `ttl` of `None` meaning no expiry
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;

    /// Remove a value, returning whether it existed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Drop every value
    async fn flush(&self) -> Result<()>;

    /// Name of the driver that built this client (e.g. "memory", "null")
    fn driver_name(&self) -> &str;
}
