//! # memwire Application
//!
//! Use cases that turn declarative instance configuration into container
//! service definitions, plus the client driver registry.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`ports::registry`] | linkme registry of client drivers |
//! | [`use_cases::option_translation`] | Raw options to validated [`OptionSet`](memwire_domain::OptionSet) |
//! | [`use_cases::instance_builder`] | Instance config to client service definition |
//! | [`use_cases::session_binding`] | Session handler slot wiring |
//! | [`use_cases::wiring_service`] | Whole `memcache` section into a registry |

pub mod ports;
pub mod use_cases;

pub use use_cases::{
    CacheWiringService, InstanceDefinitionBuilder, WiringReport, bind_session, resolve_options,
};
