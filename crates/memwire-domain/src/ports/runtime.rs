//! Client Runtime Port
//!
//! A client runtime stands for the native caching library: it reports
//! whether it is loaded, exposes its constant table and constructs clients.

use super::client::CacheClient;
use crate::error::Result;
use crate::value_objects::ConstantTable;

/// Client library capability surface
pub trait ClientRuntime: Send + Sync + std::fmt::Debug {
    /// Driver name (e.g. "memory", "null")
    fn name(&self) -> &str;

    /// Whether the runtime can construct clients at all
    fn is_available(&self) -> bool;

    /// Enum to runtime-code mapping and serializer support
    fn constants(&self) -> &ConstantTable;

    /// Construct an unconfigured client
    ///
    /// Clients created with the same `persistent_id` share their
    /// connection pool.
    fn create_client(&self, persistent_id: Option<&str>) -> Result<Box<dyn CacheClient>>;
}
