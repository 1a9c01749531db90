//! Configuration types

pub mod app;
pub mod driver;
pub mod logging;

pub use app::AppConfig;
pub use driver::DriverConfig;
pub use logging::LoggingConfig;
