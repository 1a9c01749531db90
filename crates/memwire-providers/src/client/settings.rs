//! Configuration state shared by every client driver

use std::collections::BTreeMap;

use memwire_domain::error::{Error, Result};
use memwire_domain::value_objects::{ClientOption, ConstantTable, OptionValue, ServerSpec};

/// Servers and options applied to one client
#[derive(Debug, Clone)]
pub struct ClientSettings {
    constants: ConstantTable,
    persistent_id: Option<String>,
    servers: Vec<ServerSpec>,
    options: BTreeMap<ClientOption, OptionValue>,
}

impl ClientSettings {
    pub fn new(constants: ConstantTable, persistent_id: Option<&str>) -> Self {
        Self {
            constants,
            persistent_id: persistent_id.map(str::to_string),
            servers: Vec::new(),
            options: BTreeMap::new(),
        }
    }

    pub fn persistent_id(&self) -> Option<&str> {
        self.persistent_id.as_deref()
    }

    pub fn servers(&self) -> &[ServerSpec] {
        &self.servers
    }

    pub fn option(&self, option: ClientOption) -> Option<&OptionValue> {
        self.options.get(&option)
    }

    /// Key prefix, empty when never set
    pub fn prefix_key(&self) -> &str {
        self.option(ClientOption::PrefixKey)
            .and_then(OptionValue::as_str)
            .unwrap_or_default()
    }

    pub fn add_servers(&mut self, servers: &[ServerSpec]) -> Result<()> {
        if let Some(server) = servers.iter().find(|s| s.port == 0) {
            return Err(Error::invalid_argument(format!(
                "Cannot register server {server}: port 0"
            )));
        }
        self.servers.extend_from_slice(servers);
        Ok(())
    }

    /// Type-check `value` for `option` and store it
    ///
    /// Enum-valued options must carry a code the constant table knows.
    pub fn set_option(&mut self, option: ClientOption, value: OptionValue) -> Result<()> {
        let accepted = match option {
            ClientOption::PrefixKey => value.as_str().is_some(),
            ClientOption::Serializer => value
                .as_int()
                .and_then(|code| self.constants.serializer_for_code(code))
                .is_some(),
            ClientOption::Hash => value
                .as_int()
                .and_then(|code| self.constants.hash_for_code(code))
                .is_some(),
            ClientOption::Distribution => value
                .as_int()
                .and_then(|code| self.constants.distribution_for_code(code))
                .is_some(),
            ClientOption::Compression
            | ClientOption::LibketamaCompatible
            | ClientOption::BufferWrites
            | ClientOption::BinaryProtocol
            | ClientOption::NoBlock
            | ClientOption::TcpNodelay
            | ClientOption::CacheLookups => value.as_bool().is_some(),
            ClientOption::SocketSendSize
            | ClientOption::SocketRecvSize
            | ClientOption::ConnectTimeout
            | ClientOption::RetryTimeout
            | ClientOption::SendTimeout
            | ClientOption::RecvTimeout
            | ClientOption::PollTimeout
            | ClientOption::ServerFailureLimit => value.as_int().is_some(),
        };

        if !accepted {
            return Err(Error::invalid_argument(format!(
                "Invalid value {value:?} for client option {option}"
            )));
        }
        self.options.insert(option, value);
        Ok(())
    }
}
