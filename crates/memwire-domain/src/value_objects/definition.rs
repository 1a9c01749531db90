//! Declarative service definitions
//!
//! A definition describes how the container builds a service: its class,
//! constructor arguments and the method calls replayed after construction.
//! Nothing here talks to a runtime.

use serde::{Deserialize, Serialize};

/// Constructor or method argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Argument {
    /// Literal value
    Value(serde_json::Value),
    /// Another service, by id
    Reference(String),
    /// Container parameter, by name
    Parameter(String),
}

impl Argument {
    /// Literal value argument
    pub fn value(value: impl Into<serde_json::Value>) -> Self {
        Self::Value(value.into())
    }

    /// Service reference argument
    pub fn reference(id: impl Into<String>) -> Self {
        Self::Reference(id.into())
    }

    /// Literal payload, if any
    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Referenced service id, if any
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference(id) => Some(id),
            _ => None,
        }
    }
}

/// One method call recorded on a definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// Container service definition
///
/// # Example
///
/// ```
/// use memwire_domain::value_objects::{Argument, ServiceDefinition};
///
/// let mut definition = ServiceDefinition::new("Client");
/// definition.add_argument(Argument::value("pool"));
/// definition.add_method_call("connect", vec![]);
/// assert!(definition.has_method_call("connect"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub class: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
    #[serde(default)]
    pub calls: Vec<MethodCall>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ServiceDefinition {
    /// Definition with no argument, call or tag
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            arguments: Vec::new(),
            calls: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Append a constructor argument
    pub fn add_argument(&mut self, argument: Argument) -> &mut Self {
        self.arguments.push(argument);
        self
    }

    /// Append a method call
    pub fn add_method_call(&mut self, method: impl Into<String>, arguments: Vec<Argument>) -> &mut Self {
        self.calls.push(MethodCall::new(method, arguments));
        self
    }

    /// Attach a tag
    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tags.push(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn has_method_call(&self, method: &str) -> bool {
        self.calls.iter().any(|c| c.method == method)
    }

    /// Calls to `method`, in recording order
    pub fn calls_named<'a>(&'a self, method: &'a str) -> impl Iterator<Item = &'a MethodCall> + 'a {
        self.calls.iter().filter(move |c| c.method == method)
    }
}
