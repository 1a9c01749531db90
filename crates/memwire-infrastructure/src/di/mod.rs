//! Dependency Injection
//!
//! ```text
//! AppConfig ──▶ CacheWiringService ──▶ ServiceContainer (definitions)
//!                                            │
//!                                   DefinitionCompiler
//!                                            ▼
//!                                   InstanceRegistry (live clients)
//!                                            │
//!                               dill Catalog (build_catalog)
//! ```

pub mod bootstrap;
pub mod compiler;
pub mod container;
pub mod instances;

pub use bootstrap::{build_catalog, resolve_runtime, wire_container};
pub use compiler::DefinitionCompiler;
pub use container::ServiceContainer;
pub use instances::InstanceRegistry;
