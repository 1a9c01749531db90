//! Ports
//!
//! Contracts implemented outside the domain crate.
//!
//! | Port | Implemented by |
//! |------|----------------|
//! | [`CacheClient`] | client drivers in `memwire-providers` |
//! | [`ClientRuntime`] | client drivers in `memwire-providers` |
//! | [`ServiceRegistry`] | `ServiceContainer` in `memwire-infrastructure` |

pub mod client;
pub mod registry;
pub mod runtime;

pub use client::CacheClient;
pub use registry::ServiceRegistry;
pub use runtime::ClientRuntime;
