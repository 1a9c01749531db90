//! Definition compiler
//!
//! Turns client service definitions into live clients by replaying their
//! recorded calls against the selected [`ClientRuntime`]:
//!
//! | Definition part | Client call |
//! |-----------------|-------------|
//! | argument 0 (string) | `create_client(Some(persistent_id))` |
//! | `addServers([[host, port, weight], ...])` | `add_servers(&[ServerSpec])` |
//! | `setOption(code, value)` | `set_option(ClientOption, OptionValue)` |
//!
//! Option codes are decoded through the runtime's constant table.

use std::sync::Arc;

use memwire_domain::constants::{CLIENT_TAG, METHOD_ADD_SERVERS, METHOD_SET_OPTION};
use memwire_domain::error::{Error, Result};
use memwire_domain::ports::{CacheClient, ClientRuntime};
use memwire_domain::value_objects::{Argument, MethodCall, OptionValue, ServerSpec, ServiceDefinition};
use tracing::{debug, info};

use super::container::ServiceContainer;
use super::instances::InstanceRegistry;

/// Compiles client definitions against one runtime
#[derive(Debug, Clone)]
pub struct DefinitionCompiler {
    runtime: Arc<dyn ClientRuntime>,
}

impl DefinitionCompiler {
    pub fn new(runtime: Arc<dyn ClientRuntime>) -> Self {
        Self { runtime }
    }

    /// Compile every definition tagged as a cache client
    ///
    /// Stops at the first definition that fails; nothing is returned for a
    /// partially compiled container.
    pub fn compile(&self, container: &ServiceContainer) -> Result<InstanceRegistry> {
        let mut registry = InstanceRegistry::new();
        for (service_id, definition) in container.tagged(CLIENT_TAG) {
            let client = self.compile_definition(service_id, definition)?;
            registry.insert(service_id, client);
        }
        info!(
            driver = self.runtime.name(),
            clients = registry.len(),
            "Compiled cache clients"
        );
        Ok(registry)
    }

    /// Construct and configure one client
    ///
    /// The client is only shared once every recorded call succeeded.
    pub fn compile_definition(
        &self,
        service_id: &str,
        definition: &ServiceDefinition,
    ) -> Result<Arc<dyn CacheClient>> {
        let persistent_id = definition
            .arguments
            .first()
            .and_then(Argument::as_value)
            .and_then(serde_json::Value::as_str);

        let mut client = self.runtime.create_client(persistent_id)?;
        for call in &definition.calls {
            self.replay(service_id, call, client.as_mut())?;
        }

        debug!(service = service_id, "Client configured");
        Ok(Arc::from(client))
    }

    fn replay(&self, service_id: &str, call: &MethodCall, client: &mut dyn CacheClient) -> Result<()> {
        match call.method.as_str() {
            METHOD_ADD_SERVERS => {
                let servers = decode_servers(service_id, value_argument(service_id, call, 0)?)?;
                client.add_servers(&servers)
            }
            METHOD_SET_OPTION => {
                let code = value_argument(service_id, call, 0)?
                    .as_i64()
                    .ok_or_else(|| malformed(service_id, call, "option code is not an integer"))?;
                let option = self
                    .runtime
                    .constants()
                    .option_for_code(code)
                    .ok_or_else(|| malformed(service_id, call, &format!("unknown option code {code}")))?;
                let value = OptionValue::from_json(value_argument(service_id, call, 1)?)
                    .ok_or_else(|| malformed(service_id, call, "option value must be bool, integer or string"))?;
                client.set_option(option, value)
            }
            other => Err(Error::configuration(format!(
                "Service '{service_id}' records unsupported call '{other}'"
            ))),
        }
    }
}

fn value_argument<'a>(
    service_id: &str,
    call: &'a MethodCall,
    index: usize,
) -> Result<&'a serde_json::Value> {
    call.arguments
        .get(index)
        .and_then(Argument::as_value)
        .ok_or_else(|| malformed(service_id, call, &format!("missing value argument {index}")))
}

fn decode_servers(service_id: &str, value: &serde_json::Value) -> Result<Vec<ServerSpec>> {
    let invalid = || {
        Error::configuration(format!(
            "Service '{service_id}' has a malformed server list: {value}"
        ))
    };

    let entries = value.as_array().ok_or_else(invalid)?;
    entries
        .iter()
        .map(|entry| {
            let host = entry.get(0).and_then(serde_json::Value::as_str).ok_or_else(invalid)?;
            let port = entry
                .get(1)
                .and_then(serde_json::Value::as_u64)
                .and_then(|port| u16::try_from(port).ok())
                .ok_or_else(invalid)?;
            let weight = entry
                .get(2)
                .and_then(serde_json::Value::as_u64)
                .and_then(|weight| u32::try_from(weight).ok())
                .ok_or_else(invalid)?;
            Ok(ServerSpec::new(host, port, weight))
        })
        .collect()
}

fn malformed(service_id: &str, call: &MethodCall, reason: &str) -> Error {
    Error::configuration(format!(
        "Service '{service_id}' has a malformed '{}' call: {reason}",
        call.method
    ))
}
