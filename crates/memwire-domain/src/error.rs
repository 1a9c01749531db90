//! Error handling types

use std::fmt;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for memwire
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A single instance or session wiring error
    #[error("Cache wiring error: {0}")]
    Wiring(#[from] ConfigError),

    /// Every wiring error collected while building all instances
    #[error("Cache wiring failed: {0}")]
    WiringErrors(#[from] ConfigErrors),

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Fatal configuration errors raised while wiring cache instances
///
/// None of these are retried. Wiring stops before any partially configured
/// client is published.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Session support references an instance that was never declared
    #[error("The instance \"{instance_id}\" does not exist! Cannot enable the session support!")]
    MissingInstance {
        /// Instance id requested by the session configuration
        instance_id: String,
    },

    /// The client runtime backing the instances is not present
    #[error("Client runtime \"{driver}\" is not available! It MUST be loaded to configure instances")]
    ExtensionUnavailable {
        /// Driver name that reported itself unavailable
        driver: String,
    },

    /// A non-default serializer the runtime does not support
    #[error("Invalid serializer specified for instance \"{instance}\": {serializer}")]
    UnsupportedSerializer {
        /// Instance being configured
        instance: String,
        /// Requested serializer name
        serializer: String,
    },

    /// An enum-valued option the runtime does not recognize
    #[error("Invalid value \"{value}\" for option \"{field}\" of instance \"{instance}\"")]
    InvalidEnumValue {
        /// Instance being configured
        instance: String,
        /// Option field name
        field: String,
        /// Rejected value
        value: String,
    },

    /// An instance declared without any server
    #[error("Instance \"{instance}\" has no servers configured")]
    EmptyServers {
        /// Instance being configured
        instance: String,
    },

    /// An instance name processed twice in the same run
    #[error("Instance \"{instance}\" is declared more than once")]
    DuplicateInstance {
        /// Repeated instance name
        instance: String,
    },

    /// An instance name whose service id is taken by the session handler slot
    #[error("Instance name \"{instance}\" is reserved")]
    ReservedInstanceName {
        /// Rejected instance name
        instance: String,
    },

    /// A server entry that cannot be registered
    #[error("Invalid server {host}:{port} for instance \"{instance}\"")]
    InvalidServer {
        /// Instance being configured
        instance: String,
        /// Server host
        host: String,
        /// Server port
        port: u16,
    },
}

impl ConfigError {
    /// Name of the instance this error belongs to, if any
    pub fn instance(&self) -> Option<&str> {
        match self {
            Self::MissingInstance { instance_id } => Some(instance_id.as_str()),
            Self::ExtensionUnavailable { .. } => None,
            Self::UnsupportedSerializer { instance, .. }
            | Self::InvalidEnumValue { instance, .. }
            | Self::EmptyServers { instance }
            | Self::DuplicateInstance { instance }
            | Self::ReservedInstanceName { instance }
            | Self::InvalidServer { instance, .. } => Some(instance.as_str()),
        }
    }
}

/// Aggregate of every [`ConfigError`] found in one wiring run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigErrors(Vec<ConfigError>);

impl ConfigErrors {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more error
    pub fn push(&mut self, error: ConfigError) {
        self.0.push(error);
    }

    /// Whether no error was recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the recorded errors in discovery order
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigError> {
        self.0.iter()
    }

    /// Consume the aggregate into its errors
    pub fn into_inner(self) -> Vec<ConfigError> {
        self.0
    }

    /// `Ok(value)` when empty, `Err(self)` otherwise
    pub fn into_result<T>(self, value: T) -> std::result::Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<ConfigError> for ConfigErrors {
    fn from(error: ConfigError) -> Self {
        Self(vec![error])
    }
}

impl Extend<ConfigError> for ConfigErrors {
    fn extend<I: IntoIterator<Item = ConfigError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<ConfigError> for ConfigErrors {
    fn from_iter<I: IntoIterator<Item = ConfigError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error(s)", self.0.len())?;
        for error in &self.0 {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
