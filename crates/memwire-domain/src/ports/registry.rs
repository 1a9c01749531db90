//! Service Registry Port
//!
//! The container surface the wiring use cases write definitions into.

use crate::value_objects::{Argument, ServiceDefinition};

/// Generic service registry
pub trait ServiceRegistry: Send + Sync {
    /// Register (or replace) a definition under `id`
    fn define(&mut self, id: &str, definition: ServiceDefinition);

    /// Definition registered under `id`
    fn get_definition(&self, id: &str) -> Option<&ServiceDefinition>;

    /// Whether a definition exists under `id`
    fn has_definition(&self, id: &str) -> bool {
        self.get_definition(id).is_some()
    }

    /// Reference argument pointing at `id`
    fn reference(&self, id: &str) -> Argument {
        Argument::Reference(id.to_string())
    }

    /// Registered service ids, sorted
    fn service_ids(&self) -> Vec<String>;
}
