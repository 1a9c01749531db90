//! Domain constants
//!
//! Service naming and the defaults applied to omitted configuration fields.

// ============================================================================
// SERVICE NAMING
// ============================================================================

/// Prefix of every client service id (`memcache.<instance>`)
pub const SERVICE_PREFIX: &str = "memcache";

/// Service id of the single session handler slot
pub const SESSION_HANDLER_SERVICE: &str = "memcache.session_handler";

/// Class recorded on client service definitions
pub const CLIENT_SERVICE_CLASS: &str = "memwire::CacheClient";

/// Class recorded on the session handler definition
pub const SESSION_HANDLER_CLASS: &str = "memwire::CacheSessionHandler";

/// Tag carried by every client service definition
pub const CLIENT_TAG: &str = "memcache.client";

/// Method call registering the server list
pub const METHOD_ADD_SERVERS: &str = "addServers";

/// Method call applying one client option
pub const METHOD_SET_OPTION: &str = "setOption";

// ============================================================================
// SERVER DEFAULTS
// ============================================================================

/// Default memcached port
pub const DEFAULT_SERVER_PORT: u16 = 11211;

/// Default server weight
pub const DEFAULT_SERVER_WEIGHT: u32 = 0;

// ============================================================================
// CLIENT OPTION DEFAULTS
// ============================================================================

/// Serializer that never requires a runtime support check
pub const DEFAULT_SERIALIZER: &str = "php";

/// Default key hash algorithm
pub const DEFAULT_HASH: &str = "default";

/// Default key distribution mode
pub const DEFAULT_DISTRIBUTION: &str = "modula";

/// Default connect timeout in milliseconds
pub const DEFAULT_CONNECT_TIMEOUT_MS: i64 = 1000;

/// Default poll timeout in milliseconds
pub const DEFAULT_POLL_TIMEOUT_MS: i64 = 1000;

// ============================================================================
// SESSION DEFAULTS
// ============================================================================

/// Default session key prefix
pub const DEFAULT_SESSION_PREFIX: &str = "lmbs";

/// Default session lifetime in seconds
pub const DEFAULT_SESSION_EXPIRETIME_SECS: u64 = 3600;

/// Default spin lock wait in microseconds
pub const DEFAULT_SESSION_SPIN_LOCK_WAIT_US: u64 = 150_000;

/// Build the service id of a client instance
pub fn instance_service_id(instance: &str) -> String {
    format!("{SERVICE_PREFIX}.{instance}")
}

/// Whether `instance` would map onto the session handler slot
pub fn is_reserved_instance_name(instance: &str) -> bool {
    instance_service_id(instance) == SESSION_HANDLER_SERVICE
}
