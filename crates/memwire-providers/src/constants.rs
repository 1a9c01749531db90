//! Provider constants

/// Default entry capacity of an in-process store
pub const MEMORY_DEFAULT_MAX_CAPACITY: u64 = 100_000;

/// Name of the in-process driver
pub const MEMORY_DRIVER_NAME: &str = "memory";

/// Name of the no-op driver
pub const NULL_DRIVER_NAME: &str = "null";
