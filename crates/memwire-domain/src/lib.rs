//! # memwire Domain
//!
//! Core types for wiring memcached client instances into a service container.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Crate-wide error enum and the configuration error taxonomy |
//! | [`constants`] | Service ids, option defaults, session defaults |
//! | [`value_objects`] | Instance configs, option sets, service definitions, runtime constant table |
//! | [`ports`] | `CacheClient`, `ClientRuntime` and `ServiceRegistry` contracts |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{ConfigError, ConfigErrors, Error, Result};
pub use value_objects::*;
