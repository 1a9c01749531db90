//! Runtime constant table
//!
//! Maps option keys and enum-valued options to the integer codes a client
//! runtime understands, and records which serializers the runtime supports.
//! Tables are plain values so a runtime can be simulated in tests.

use super::options::{ClientOption, Distribution, HashAlgorithm, Serializer};
use std::collections::{HashMap, HashSet};

/// Enum to runtime-code mapping of one client runtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstantTable {
    options: HashMap<ClientOption, i64>,
    serializers: HashMap<Serializer, i64>,
    hashes: HashMap<HashAlgorithm, i64>,
    distributions: HashMap<Distribution, i64>,
    supported_serializers: HashSet<Serializer>,
}

impl ConstantTable {
    /// Table with no mapping at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Codes of the php-memcached extension built against libmemcached
    ///
    /// `php`, `json` and `json_array` are reported as supported; `igbinary`
    /// and `msgpack` need [`with_serializer_support`](Self::with_serializer_support).
    pub fn memcached() -> Self {
        let options = [
            (ClientOption::Compression, -1001),
            (ClientOption::PrefixKey, -1002),
            (ClientOption::Serializer, -1003),
            (ClientOption::NoBlock, 0),
            (ClientOption::TcpNodelay, 1),
            (ClientOption::Hash, 2),
            (ClientOption::SocketSendSize, 4),
            (ClientOption::SocketRecvSize, 5),
            (ClientOption::CacheLookups, 6),
            (ClientOption::PollTimeout, 8),
            (ClientOption::Distribution, 9),
            (ClientOption::BufferWrites, 10),
            (ClientOption::ConnectTimeout, 14),
            (ClientOption::RetryTimeout, 15),
            (ClientOption::LibketamaCompatible, 16),
            (ClientOption::BinaryProtocol, 18),
            (ClientOption::SendTimeout, 19),
            (ClientOption::RecvTimeout, 20),
            (ClientOption::ServerFailureLimit, 21),
        ];

        let mut table = Self::empty();
        for (option, code) in options {
            table = table.with_option(option, code);
        }
        for (code, serializer) in (1..).zip(Serializer::ALL) {
            let supported = matches!(
                serializer,
                Serializer::Php | Serializer::Json | Serializer::JsonArray
            );
            table = table.with_serializer(serializer, code, supported);
        }
        for (code, hash) in (0..).zip(HashAlgorithm::ALL) {
            table = table.with_hash(hash, code);
        }
        for (code, distribution) in (0..).zip(Distribution::ALL) {
            table = table.with_distribution(distribution, code);
        }
        table
    }

    /// Map an option key to its code
    pub fn with_option(mut self, option: ClientOption, code: i64) -> Self {
        self.options.insert(option, code);
        self
    }

    /// Map a serializer to its code and record whether it is supported
    pub fn with_serializer(mut self, serializer: Serializer, code: i64, supported: bool) -> Self {
        self.serializers.insert(serializer, code);
        self.with_serializer_support(serializer, supported)
    }

    /// Change the support flag of a serializer
    pub fn with_serializer_support(mut self, serializer: Serializer, supported: bool) -> Self {
        if supported {
            self.supported_serializers.insert(serializer);
        } else {
            self.supported_serializers.remove(&serializer);
        }
        self
    }

    /// Map a hash algorithm to its code
    pub fn with_hash(mut self, hash: HashAlgorithm, code: i64) -> Self {
        self.hashes.insert(hash, code);
        self
    }

    /// Drop a hash algorithm the runtime was built without
    pub fn without_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hashes.remove(&hash);
        self
    }

    /// Map a distribution mode to its code
    pub fn with_distribution(mut self, distribution: Distribution, code: i64) -> Self {
        self.distributions.insert(distribution, code);
        self
    }

    /// Drop a distribution mode the runtime was built without
    pub fn without_distribution(mut self, distribution: Distribution) -> Self {
        self.distributions.remove(&distribution);
        self
    }

    /// Whether the runtime reports support for a serializer
    pub fn has_serializer(&self, serializer: Serializer) -> bool {
        self.supported_serializers.contains(&serializer)
    }

    pub fn option_code(&self, option: ClientOption) -> Option<i64> {
        self.options.get(&option).copied()
    }

    pub fn serializer_code(&self, serializer: Serializer) -> Option<i64> {
        self.serializers.get(&serializer).copied()
    }

    pub fn hash_code(&self, hash: HashAlgorithm) -> Option<i64> {
        self.hashes.get(&hash).copied()
    }

    pub fn distribution_code(&self, distribution: Distribution) -> Option<i64> {
        self.distributions.get(&distribution).copied()
    }

    /// Reverse lookup of an option code
    pub fn option_for_code(&self, code: i64) -> Option<ClientOption> {
        reverse(&self.options, code)
    }

    /// Reverse lookup of a serializer code
    pub fn serializer_for_code(&self, code: i64) -> Option<Serializer> {
        reverse(&self.serializers, code)
    }

    /// Reverse lookup of a hash code
    pub fn hash_for_code(&self, code: i64) -> Option<HashAlgorithm> {
        reverse(&self.hashes, code)
    }

    /// Reverse lookup of a distribution code
    pub fn distribution_for_code(&self, code: i64) -> Option<Distribution> {
        reverse(&self.distributions, code)
    }
}

fn reverse<K: Copy>(map: &HashMap<K, i64>, code: i64) -> Option<K> {
    map.iter()
        .find_map(|(key, value)| (*value == code).then_some(*key))
}
