//! Use cases

pub mod instance_builder;
pub mod option_translation;
pub mod session_binding;
pub mod wiring_service;

pub use instance_builder::InstanceDefinitionBuilder;
pub use option_translation::{encode_settings, resolve_options};
pub use session_binding::bind_session;
pub use wiring_service::{CacheWiringService, WiringReport};
