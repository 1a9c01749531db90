//! # Infrastructure Layer
//!
//! Technical concerns around the wiring use cases.
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration (defaults, TOML, `MEMWIRE__` env) |
//! | [`di`] | Service container, definition compiler, dill catalog |
//! | [`constants`] | Infrastructure constants |
//!
//! ### Runtime services
//! | Module | Description |
//! |--------|-------------|
//! | [`session`] | Session storage through a bound cache instance |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod session;

pub use config::{AppConfig, ConfigLoader};
pub use di::{DefinitionCompiler, InstanceRegistry, ServiceContainer, build_catalog};
pub use error_ext::ErrorContext;
pub use session::CacheSessionHandler;
