//! Instance definition builder
//!
//! Turns one [`InstanceConfig`] into the client [`ServiceDefinition`] the
//! container registers under `memcache.<name>`:
//!
//! ```text
//! class:     memwire::CacheClient       tags: [memcache.client]
//! arguments: [persistent_id]            (only when set)
//! calls:     addServers([[host, port, weight], ...])
//!            setOption(code, value)     (one per applied option)
//! ```

use std::collections::HashSet;

use memwire_domain::constants::{
    CLIENT_SERVICE_CLASS, CLIENT_TAG, METHOD_ADD_SERVERS, METHOD_SET_OPTION,
    is_reserved_instance_name,
};
use memwire_domain::error::{ConfigError, ConfigErrors};
use memwire_domain::ports::ClientRuntime;
use memwire_domain::value_objects::{Argument, ConstantTable, InstanceConfig, ServiceDefinition};
use serde_json::json;
use tracing::debug;

use super::option_translation::{encode_settings, resolve_options};

/// Builds client service definitions against one runtime constant table
#[derive(Debug, Clone)]
pub struct InstanceDefinitionBuilder {
    constants: ConstantTable,
}

impl InstanceDefinitionBuilder {
    /// Builder validating against `constants`
    pub fn new(constants: ConstantTable) -> Self {
        Self { constants }
    }

    /// Builder validating against the table of `runtime`
    pub fn for_runtime(runtime: &dyn ClientRuntime) -> Self {
        Self::new(runtime.constants().clone())
    }

    /// Constant table used for validation
    pub fn constants(&self) -> &ConstantTable {
        &self.constants
    }

    /// Build the definition of one instance
    ///
    /// Every option is validated before the definition is returned, so an
    /// error never leaves a half-built definition behind.
    pub fn build_instance(&self, config: &InstanceConfig) -> Result<ServiceDefinition, ConfigError> {
        let name = config.name.as_str();

        if is_reserved_instance_name(name) {
            return Err(ConfigError::ReservedInstanceName {
                instance: name.to_string(),
            });
        }
        if config.servers.is_empty() {
            return Err(ConfigError::EmptyServers {
                instance: name.to_string(),
            });
        }
        if let Some(server) = config
            .servers
            .iter()
            .find(|s| s.host.trim().is_empty() || s.port == 0)
        {
            return Err(ConfigError::InvalidServer {
                instance: name.to_string(),
                host: server.host.clone(),
                port: server.port,
            });
        }

        let settings = match &config.options {
            Some(raw) => {
                let options = resolve_options(name, raw, &self.constants)?;
                encode_settings(name, &options, &self.constants)?
            }
            None => Vec::new(),
        };

        let mut definition = ServiceDefinition::new(CLIENT_SERVICE_CLASS);
        definition.add_tag(CLIENT_TAG);

        if let Some(persistent_id) = &config.persistent_id {
            definition.add_argument(Argument::value(persistent_id.as_str()));
        }

        let servers: Vec<serde_json::Value> = config
            .servers
            .iter()
            .map(|s| json!([s.host, s.port, s.weight]))
            .collect();
        definition.add_method_call(METHOD_ADD_SERVERS, vec![Argument::value(servers)]);

        for (option, code, value) in settings {
            debug!(instance = name, option = %option, code, "Recording client option");
            definition.add_method_call(
                METHOD_SET_OPTION,
                vec![Argument::value(code), Argument::Value(value.to_json())],
            );
        }

        Ok(definition)
    }

    /// Build every instance, collecting all errors instead of stopping early
    ///
    /// Returns `(name, definition)` pairs in input order.
    pub fn build_all(
        &self,
        instances: &[InstanceConfig],
    ) -> Result<Vec<(String, ServiceDefinition)>, ConfigErrors> {
        let mut seen = HashSet::new();
        let mut errors = ConfigErrors::new();
        let mut definitions = Vec::with_capacity(instances.len());

        for instance in instances {
            if !seen.insert(instance.name.as_str()) {
                errors.push(ConfigError::DuplicateInstance {
                    instance: instance.name.clone(),
                });
                continue;
            }
            match self.build_instance(instance) {
                Ok(definition) => definitions.push((instance.name.clone(), definition)),
                Err(e) => errors.push(e),
            }
        }

        errors.into_result(definitions)
    }
}
