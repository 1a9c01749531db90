//! Session binding
//!
//! Points the single session handler slot at one declared client instance.

use memwire_domain::constants::{CLIENT_TAG, SESSION_HANDLER_CLASS, SESSION_HANDLER_SERVICE, instance_service_id};
use memwire_domain::error::ConfigError;
use memwire_domain::ports::ServiceRegistry;
use memwire_domain::value_objects::{Argument, ServiceDefinition, SessionOptions};
use serde_json::json;
use tracing::info;

/// Bind the session handler to instance `instance_id`
///
/// The instance must already be defined in `registry`; otherwise
/// [`ConfigError::MissingInstance`] is returned and the registry is left
/// untouched. Binding again replaces the previous binding.
pub fn bind_session(
    instance_id: &str,
    options: &SessionOptions,
    registry: &mut dyn ServiceRegistry,
) -> Result<(), ConfigError> {
    let service_id = instance_service_id(instance_id);

    let declared = registry
        .get_definition(&service_id)
        .is_some_and(|definition| definition.has_tag(CLIENT_TAG));
    if !declared {
        return Err(ConfigError::MissingInstance {
            instance_id: instance_id.to_string(),
        });
    }

    let mut handler = ServiceDefinition::new(SESSION_HANDLER_CLASS);
    handler
        .add_argument(registry.reference(&service_id))
        .add_argument(Argument::Value(session_options_json(options)));
    registry.define(SESSION_HANDLER_SERVICE, handler);

    info!(instance = instance_id, "Session support bound to cache instance");
    Ok(())
}

fn session_options_json(options: &SessionOptions) -> serde_json::Value {
    json!({
        "prefix": options.prefix,
        "expiretime": options.expiretime,
        "locking": options.locking,
        "spin_lock_wait": options.spin_lock_wait,
        "lock_max_wait": options.lock_max_wait,
    })
}
