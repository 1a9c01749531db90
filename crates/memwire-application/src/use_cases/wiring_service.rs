//! Cache wiring service
//!
//! Orchestrates the whole `memcache` configuration section: runtime check,
//! instance definitions, then the optional session binding.

use std::sync::Arc;

use memwire_domain::constants::instance_service_id;
use memwire_domain::error::{ConfigError, ConfigErrors, Error, Result};
use memwire_domain::ports::{ClientRuntime, ServiceRegistry};
use memwire_domain::value_objects::CacheWiringConfig;
use tracing::{info, warn};

use super::instance_builder::InstanceDefinitionBuilder;
use super::session_binding::bind_session;

/// Outcome of a successful wiring run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WiringReport {
    /// Service ids of the defined client instances, in definition order
    pub services: Vec<String>,
    /// Instance bound to the session handler, if any
    pub session_instance: Option<String>,
}

/// Wires configured instances into a [`ServiceRegistry`]
#[derive(Debug, Clone)]
pub struct CacheWiringService {
    runtime: Arc<dyn ClientRuntime>,
}

impl CacheWiringService {
    /// Service validating against `runtime`
    pub fn new(runtime: Arc<dyn ClientRuntime>) -> Self {
        Self { runtime }
    }

    /// Runtime the definitions are validated against
    pub fn runtime(&self) -> &Arc<dyn ClientRuntime> {
        &self.runtime
    }

    /// Define every instance and bind session support
    ///
    /// Nothing is written to `registry` unless every instance validated.
    /// Errors of all instances, plus a session binding to an undeclared
    /// instance, are reported together as [`Error::WiringErrors`].
    pub fn wire(
        &self,
        config: &CacheWiringConfig,
        registry: &mut dyn ServiceRegistry,
    ) -> Result<WiringReport> {
        if !config.instances.is_empty() && !self.runtime.is_available() {
            return Err(ConfigError::ExtensionUnavailable {
                driver: self.runtime.name().to_string(),
            }
            .into());
        }

        let builder = InstanceDefinitionBuilder::for_runtime(self.runtime.as_ref());
        let built = builder.build_all(&config.named_instances());
        let missing_session = undeclared_session_instance(config);
        let definitions = match (built, missing_session) {
            (Ok(definitions), None) => definitions,
            (built, missing_session) => {
                let mut errors = built.err().unwrap_or_default();
                errors.extend(missing_session);
                warn!(errors = errors.len(), "Cache instance wiring failed");
                return Err(Error::WiringErrors(errors));
            }
        };

        let mut report = WiringReport::default();
        for (name, definition) in definitions {
            let service_id = instance_service_id(&name);
            registry.define(&service_id, definition);
            info!(instance = %name, service = %service_id, "Defined cache instance");
            report.services.push(service_id);
        }

        if let Some(session) = config.enabled_session() {
            bind_session(&session.instance_id, &session.options, registry)?;
            report.session_instance = Some(session.instance_id.clone());
        }

        Ok(report)
    }

    /// Validate without touching any registry
    pub fn validate(&self, config: &CacheWiringConfig) -> std::result::Result<(), ConfigErrors> {
        let mut errors = ConfigErrors::new();
        if !config.instances.is_empty() && !self.runtime.is_available() {
            errors.push(ConfigError::ExtensionUnavailable {
                driver: self.runtime.name().to_string(),
            });
            return Err(errors);
        }

        let builder = InstanceDefinitionBuilder::for_runtime(self.runtime.as_ref());
        if let Err(instance_errors) = builder.build_all(&config.named_instances()) {
            errors = instance_errors;
        }
        if let Some(missing) = undeclared_session_instance(config) {
            errors.push(missing);
        }
        errors.into_result(())
    }
}

fn undeclared_session_instance(config: &CacheWiringConfig) -> Option<ConfigError> {
    config
        .enabled_session()
        .filter(|session| !config.instances.contains_key(&session.instance_id))
        .map(|session| ConfigError::MissingInstance {
            instance_id: session.instance_id.clone(),
        })
}
