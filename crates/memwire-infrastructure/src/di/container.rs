//! Service container
//!
//! Holds the declarative service definitions written by the wiring use
//! cases. Definitions are kept sorted by id so dumps are stable.

use std::collections::BTreeMap;

use memwire_domain::error::Result;
use memwire_domain::ports::ServiceRegistry;
use memwire_domain::value_objects::ServiceDefinition;
use serde::{Deserialize, Serialize};

/// In-memory [`ServiceRegistry`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceContainer {
    definitions: BTreeMap<String, ServiceDefinition>,
}

impl ServiceContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// `(id, definition)` pairs in id order
    pub fn definitions(&self) -> impl Iterator<Item = (&str, &ServiceDefinition)> {
        self.definitions.iter().map(|(id, def)| (id.as_str(), def))
    }

    /// Definitions carrying `tag`, in id order
    pub fn tagged<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a ServiceDefinition)> + 'a {
        self.definitions().filter(move |(_, def)| def.has_tag(tag))
    }

    /// Pretty JSON of every definition
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl ServiceRegistry for ServiceContainer {
    fn define(&mut self, id: &str, definition: ServiceDefinition) {
        self.definitions.insert(id.to_string(), definition);
    }

    fn get_definition(&self, id: &str) -> Option<&ServiceDefinition> {
        self.definitions.get(id)
    }

    fn service_ids(&self) -> Vec<String> {
        self.definitions.keys().cloned().collect()
    }
}
