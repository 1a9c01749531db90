//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `memwire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "memwire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "memwire";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "MEMWIRE";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "MEMWIRE_LOG";

/// File stem used for rotated log files when the path has none
pub const LOG_FILE_STEM: &str = "memwire";

// ============================================================================
// DRIVER CONSTANTS
// ============================================================================

/// Client driver selected when configuration names none
pub const DEFAULT_DRIVER: &str = "memory";
