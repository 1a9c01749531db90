//! Configuration
//!
//! Typed application configuration and its figment-based loader.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, DriverConfig, LoggingConfig};
