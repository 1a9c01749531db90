//! Client option types
//!
//! [`MemcachedOptions`] is the raw shape read from configuration: enum-valued
//! fields are plain strings. [`OptionSet`] is the validated form, produced by
//! the application layer once every string resolved against the runtime.

use crate::constants::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_DISTRIBUTION, DEFAULT_HASH, DEFAULT_POLL_TIMEOUT_MS,
    DEFAULT_SERIALIZER,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Raw options
// ============================================================================

/// Client options as written in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemcachedOptions {
    /// Compress stored values
    pub compression: bool,
    /// Serializer name (`php`, `igbinary`, `json`, `json_array`, `msgpack`)
    pub serializer: String,
    /// Prefix prepended to every key
    pub prefix_key: String,
    /// Key hash algorithm name
    pub hash: String,
    /// Key distribution mode (`modula` or `consistent`)
    pub distribution: String,
    /// libketama compatible hashing
    pub libketama_compatible: bool,
    /// Buffer write commands
    pub buffer_writes: bool,
    /// Use the binary protocol
    pub binary_protocol: bool,
    /// Asynchronous I/O
    pub no_block: bool,
    /// Disable Nagle on sockets
    pub tcp_nodelay: bool,
    /// Socket send buffer size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_send_size: Option<i64>,
    /// Socket receive buffer size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_recv_size: Option<i64>,
    /// Connect timeout in milliseconds
    pub connect_timeout: i64,
    /// Seconds before retrying a failed server, applied only when > 0
    pub retry_timeout: i64,
    /// Send timeout in microseconds
    pub send_timeout: i64,
    /// Receive timeout in microseconds
    pub recv_timeout: i64,
    /// Poll timeout in milliseconds
    pub poll_timeout: i64,
    /// Cache DNS lookups, applied only when true
    pub cache_lookups: bool,
    /// Failures before a server is ejected, applied only when > 0
    pub server_failure_limit: i64,
}

impl Default for MemcachedOptions {
    fn default() -> Self {
        Self {
            compression: true,
            serializer: DEFAULT_SERIALIZER.to_string(),
            prefix_key: String::new(),
            hash: DEFAULT_HASH.to_string(),
            distribution: DEFAULT_DISTRIBUTION.to_string(),
            libketama_compatible: true,
            buffer_writes: false,
            binary_protocol: false,
            no_block: false,
            tcp_nodelay: false,
            socket_send_size: None,
            socket_recv_size: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT_MS,
            retry_timeout: 0,
            send_timeout: 0,
            recv_timeout: 0,
            poll_timeout: DEFAULT_POLL_TIMEOUT_MS,
            cache_lookups: false,
            server_failure_limit: 0,
        }
    }
}

// ============================================================================
// Enum-valued options
// ============================================================================

/// Value serializer of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Serializer {
    /// Native serializer, always available
    Php,
    /// igbinary
    Igbinary,
    /// JSON objects
    Json,
    /// JSON arrays
    JsonArray,
    /// MessagePack
    Msgpack,
}

impl Serializer {
    /// Every serializer, in runtime-code order
    pub const ALL: [Serializer; 5] = [
        Self::Php,
        Self::Igbinary,
        Self::Json,
        Self::JsonArray,
        Self::Msgpack,
    ];

    /// Parse a configuration name (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "php" => Some(Self::Php),
            "igbinary" => Some(Self::Igbinary),
            "json" => Some(Self::Json),
            "json_array" => Some(Self::JsonArray),
            "msgpack" => Some(Self::Msgpack),
            _ => None,
        }
    }

    /// Configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Php => "php",
            Self::Igbinary => "igbinary",
            Self::Json => "json",
            Self::JsonArray => "json_array",
            Self::Msgpack => "msgpack",
        }
    }
}

/// Key hash algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashAlgorithm {
    /// One-at-a-time (runtime default)
    Default,
    /// MD5
    Md5,
    /// CRC
    Crc,
    /// FNV-1 64 bit
    Fnv164,
    /// FNV-1a 64 bit
    Fnv1a64,
    /// FNV-1 32 bit
    Fnv132,
    /// FNV-1a 32 bit
    Fnv1a32,
    /// Hsieh
    Hsieh,
    /// Murmur
    Murmur,
}

impl HashAlgorithm {
    /// Every hash algorithm, in runtime-code order
    pub const ALL: [HashAlgorithm; 9] = [
        Self::Default,
        Self::Md5,
        Self::Crc,
        Self::Fnv164,
        Self::Fnv1a64,
        Self::Fnv132,
        Self::Fnv1a32,
        Self::Hsieh,
        Self::Murmur,
    ];

    /// Parse a configuration name (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "default" => Some(Self::Default),
            "md5" => Some(Self::Md5),
            "crc" => Some(Self::Crc),
            "fnv1_64" => Some(Self::Fnv164),
            "fnv1a_64" => Some(Self::Fnv1a64),
            "fnv1_32" => Some(Self::Fnv132),
            "fnv1a_32" => Some(Self::Fnv1a32),
            "hsieh" => Some(Self::Hsieh),
            "murmur" => Some(Self::Murmur),
            _ => None,
        }
    }

    /// Configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Md5 => "md5",
            Self::Crc => "crc",
            Self::Fnv164 => "fnv1_64",
            Self::Fnv1a64 => "fnv1a_64",
            Self::Fnv132 => "fnv1_32",
            Self::Fnv1a32 => "fnv1a_32",
            Self::Hsieh => "hsieh",
            Self::Murmur => "murmur",
        }
    }
}

/// Key-to-server distribution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distribution {
    /// Hash modulo server count
    Modula,
    /// Consistent hashing
    Consistent,
}

impl Distribution {
    /// Every distribution mode
    pub const ALL: [Distribution; 2] = [Self::Modula, Self::Consistent];

    /// Parse a configuration name; `modulo` is accepted for `modula`
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "modula" | "modulo" => Some(Self::Modula),
            "consistent" => Some(Self::Consistent),
            _ => None,
        }
    }

    /// Configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modula => "modula",
            Self::Consistent => "consistent",
        }
    }
}

// ============================================================================
// Option keys and values
// ============================================================================

/// Client option key, one per `setOption` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClientOption {
    Compression,
    Serializer,
    PrefixKey,
    Hash,
    Distribution,
    LibketamaCompatible,
    BufferWrites,
    BinaryProtocol,
    NoBlock,
    TcpNodelay,
    SocketSendSize,
    SocketRecvSize,
    ConnectTimeout,
    RetryTimeout,
    SendTimeout,
    RecvTimeout,
    PollTimeout,
    CacheLookups,
    ServerFailureLimit,
}

impl ClientOption {
    /// Every option, in application order
    pub const ALL: [ClientOption; 19] = [
        Self::Compression,
        Self::Serializer,
        Self::PrefixKey,
        Self::Hash,
        Self::Distribution,
        Self::LibketamaCompatible,
        Self::BufferWrites,
        Self::BinaryProtocol,
        Self::NoBlock,
        Self::TcpNodelay,
        Self::SocketSendSize,
        Self::SocketRecvSize,
        Self::ConnectTimeout,
        Self::RetryTimeout,
        Self::SendTimeout,
        Self::RecvTimeout,
        Self::PollTimeout,
        Self::CacheLookups,
        Self::ServerFailureLimit,
    ];

    /// Configuration field name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Compression => "compression",
            Self::Serializer => "serializer",
            Self::PrefixKey => "prefix_key",
            Self::Hash => "hash",
            Self::Distribution => "distribution",
            Self::LibketamaCompatible => "libketama_compatible",
            Self::BufferWrites => "buffer_writes",
            Self::BinaryProtocol => "binary_protocol",
            Self::NoBlock => "no_block",
            Self::TcpNodelay => "tcp_nodelay",
            Self::SocketSendSize => "socket_send_size",
            Self::SocketRecvSize => "socket_recv_size",
            Self::ConnectTimeout => "connect_timeout",
            Self::RetryTimeout => "retry_timeout",
            Self::SendTimeout => "send_timeout",
            Self::RecvTimeout => "recv_timeout",
            Self::PollTimeout => "poll_timeout",
            Self::CacheLookups => "cache_lookups",
            Self::ServerFailureLimit => "server_failure_limit",
        }
    }
}

impl fmt::Display for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime-level option value, as passed to `setOption`
///
/// Enum-valued options travel as their runtime integer code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl OptionValue {
    /// JSON form used inside service definitions
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Int(i) => serde_json::Value::from(*i),
            Self::Str(s) => serde_json::Value::String(s.clone()),
        }
    }

    /// Parse the JSON form back; floats, arrays, objects and null are rejected
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Number(n) => n.as_i64().map(Self::Int),
            serde_json::Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer payload, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// String payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// Validated option set
// ============================================================================

/// One typed setting, before runtime encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionSetting {
    Flag(bool),
    Int(i64),
    Text(String),
    Serializer(Serializer),
    Hash(HashAlgorithm),
    Distribution(Distribution),
}

/// Validated client options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    pub compression: bool,
    pub serializer: Serializer,
    pub prefix_key: String,
    pub hash: HashAlgorithm,
    pub distribution: Distribution,
    /// Always true when `distribution` is consistent
    pub libketama_compatible: bool,
    pub buffer_writes: bool,
    pub binary_protocol: bool,
    pub no_block: bool,
    pub tcp_nodelay: bool,
    pub socket_send_size: Option<i64>,
    pub socket_recv_size: Option<i64>,
    pub connect_timeout: i64,
    pub retry_timeout: i64,
    pub send_timeout: i64,
    pub recv_timeout: i64,
    pub poll_timeout: i64,
    pub cache_lookups: bool,
    pub server_failure_limit: i64,
}

impl OptionSet {
    /// Settings to apply, in application order
    ///
    /// `retry_timeout` and `server_failure_limit` are skipped unless > 0,
    /// `cache_lookups` unless true, and socket sizes unless set. A skipped
    /// option keeps the runtime default.
    pub fn ordered_settings(&self) -> Vec<(ClientOption, OptionSetting)> {
        use OptionSetting::{Flag, Int};

        let mut settings = vec![
            (ClientOption::Compression, Flag(self.compression)),
            (
                ClientOption::Serializer,
                OptionSetting::Serializer(self.serializer),
            ),
            (
                ClientOption::PrefixKey,
                OptionSetting::Text(self.prefix_key.clone()),
            ),
            (ClientOption::Hash, OptionSetting::Hash(self.hash)),
            (
                ClientOption::Distribution,
                OptionSetting::Distribution(self.distribution),
            ),
            (
                ClientOption::LibketamaCompatible,
                Flag(self.libketama_compatible),
            ),
            (ClientOption::BufferWrites, Flag(self.buffer_writes)),
            (ClientOption::BinaryProtocol, Flag(self.binary_protocol)),
            (ClientOption::NoBlock, Flag(self.no_block)),
            (ClientOption::TcpNodelay, Flag(self.tcp_nodelay)),
        ];

        if let Some(size) = self.socket_send_size {
            settings.push((ClientOption::SocketSendSize, Int(size)));
        }
        if let Some(size) = self.socket_recv_size {
            settings.push((ClientOption::SocketRecvSize, Int(size)));
        }

        settings.push((ClientOption::ConnectTimeout, Int(self.connect_timeout)));
        if self.retry_timeout > 0 {
            settings.push((ClientOption::RetryTimeout, Int(self.retry_timeout)));
        }
        settings.push((ClientOption::SendTimeout, Int(self.send_timeout)));
        settings.push((ClientOption::RecvTimeout, Int(self.recv_timeout)));
        settings.push((ClientOption::PollTimeout, Int(self.poll_timeout)));

        if self.cache_lookups {
            settings.push((ClientOption::CacheLookups, Flag(true)));
        }
        if self.server_failure_limit > 0 {
            settings.push((
                ClientOption::ServerFailureLimit,
                Int(self.server_failure_limit),
            ));
        }

        settings
    }
}
