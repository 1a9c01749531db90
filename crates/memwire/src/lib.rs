//! # memwire
//!
//! Registers named memcached client instances into a service container and
//! optionally binds one of them as web session storage.
//!
//! ## Example
//!
//! ```ignore
//! use memwire::infrastructure::{ConfigLoader, InstanceRegistry, build_catalog};
//!
//! let config = ConfigLoader::new().with_config_path("memwire.toml").load()?;
//! let catalog = build_catalog(config)?;
//! let client = catalog.get_one::<InstanceRegistry>()?.instance("default")?;
//! client.set("greeting", b"hello", None).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, ports and the error taxonomy
//! - `application` - Option translation, instance definitions, session binding
//! - `infrastructure` - Config, logging, service container, bootstrap
//! - `providers` - Client drivers (`memory`, `null`)

/// Domain layer - value objects, ports and errors
pub mod domain {
    pub use memwire_domain::*;
}

/// Application layer - wiring use cases and the driver registry
pub mod application {
    pub use memwire_application::*;
}

/// Infrastructure layer - config, DI and session storage
pub mod infrastructure {
    pub use memwire_infrastructure::*;
}

/// Client drivers
pub mod providers {
    pub use memwire_providers::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::CacheWiringService;
pub use infrastructure::{AppConfig, ConfigLoader, build_catalog};
