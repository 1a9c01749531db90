//! dill Catalog bootstrap
//!
//! ```text
//! linkme (compile-time)     dill Catalog (runtime)
//! ─────────────────────     ─────────────────────
//! CLIENT_DRIVERS       →    resolve_runtime()
//!                                  ↓
//!                           wire_container() → DefinitionCompiler
//!                                  ↓
//!                           CatalogBuilder::add_value(...)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let catalog = build_catalog(config)?;
//! let instances = catalog.get_one::<InstanceRegistry>()?;
//! let client = instances.instance("default")?;
//! ```

use std::sync::Arc;

use dill::{Catalog, CatalogBuilder};
use memwire_application::ports::registry::resolve_client_driver;
use memwire_application::{CacheWiringService, WiringReport};
use memwire_domain::constants::SESSION_HANDLER_SERVICE;
use memwire_domain::error::{Error, Result};
use memwire_domain::ports::{ClientRuntime, ServiceRegistry};
use tracing::info;

use super::compiler::DefinitionCompiler;
use super::container::ServiceContainer;
use crate::config::{AppConfig, DriverConfig};
use crate::session::CacheSessionHandler;

/// Resolve the configured client driver from the linkme registry
pub fn resolve_runtime(driver: &DriverConfig) -> Result<Arc<dyn ClientRuntime>> {
    resolve_client_driver(&driver.to_registry_config())
        .map_err(|e| Error::configuration(format!("Client driver: {e}")))
}

/// Wire the `memcache` section into a fresh container
pub fn wire_container(
    config: &AppConfig,
    runtime: Arc<dyn ClientRuntime>,
) -> Result<(ServiceContainer, WiringReport)> {
    let mut container = ServiceContainer::new();
    let report = CacheWiringService::new(runtime).wire(&config.memcache, &mut container)?;
    Ok((container, report))
}

/// Build the dill Catalog with every wired service
///
/// | Type | Resolved From |
/// |------|---------------|
/// | `AppConfig` | loaded configuration |
/// | `ServiceContainer` | wiring of the `memcache` section |
/// | `InstanceRegistry` | definitions compiled by the configured driver |
/// | `WiringReport` | wiring summary |
/// | `CacheSessionHandler` | only when session support is bound |
pub fn build_catalog(config: AppConfig) -> Result<Catalog> {
    let runtime = resolve_runtime(&config.driver)?;
    info!(driver = runtime.name(), "Resolved client driver");

    let (container, report) = wire_container(&config, Arc::clone(&runtime))?;
    let instances = DefinitionCompiler::new(runtime).compile(&container)?;

    let session_handler = container
        .get_definition(SESSION_HANDLER_SERVICE)
        .map(|definition| CacheSessionHandler::from_definition(definition, &instances))
        .transpose()?;

    let mut builder = CatalogBuilder::new();
    builder
        .add_value(config)
        .add_value(container)
        .add_value(instances)
        .add_value(report);
    if let Some(handler) = session_handler {
        builder.add_value(handler);
    }
    let catalog = builder.build();

    info!("Built dill Catalog");
    Ok(catalog)
}
