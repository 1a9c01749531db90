//! Application ports
//!
//! Domain ports are re-exported so drivers only depend on this crate's paths.

pub mod registry;

pub use memwire_domain::ports::{CacheClient, ClientRuntime, ServiceRegistry};
