//! Value Objects
//!
//! Immutable configuration and definition types shared by every layer.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ServerSpec`] | One `{host, port, weight}` server entry |
//! | [`InstanceConfig`] | Declarative config of one named client instance |
//! | [`MemcachedOptions`] | Raw, unvalidated client options |
//! | [`OptionSet`] | Validated, typed client options |
//! | [`SessionSupportConfig`] | Session storage binding request |
//! | [`ServiceDefinition`] | Declarative container service (class, arguments, calls) |
//! | [`ConstantTable`] | Enum to runtime-code mapping of a client runtime |

pub mod definition;
pub mod instance;
pub mod options;
pub mod runtime_constants;
pub mod server;
pub mod session;

pub use definition::{Argument, MethodCall, ServiceDefinition};
pub use instance::{CacheWiringConfig, InstanceConfig};
pub use options::{
    ClientOption, Distribution, HashAlgorithm, MemcachedOptions, OptionSet, OptionSetting,
    OptionValue, Serializer,
};
pub use runtime_constants::ConstantTable;
pub use server::ServerSpec;
pub use session::{SessionOptions, SessionSupportConfig};
