//! Option translation
//!
//! Validates raw [`MemcachedOptions`] against a runtime [`ConstantTable`] and
//! encodes the resulting [`OptionSet`] into `(code, value)` pairs ready for
//! `setOption` calls.

use memwire_domain::error::ConfigError;
use memwire_domain::value_objects::{
    ClientOption, ConstantTable, Distribution, HashAlgorithm, MemcachedOptions, OptionSet,
    OptionSetting, OptionValue, Serializer,
};

/// Validate raw options of `instance`
///
/// Enum-valued fields must name a value the runtime maps. A serializer other
/// than `php` must also be reported as supported. Consistent distribution
/// forces `libketama_compatible` on whatever the input says.
pub fn resolve_options(
    instance: &str,
    raw: &MemcachedOptions,
    constants: &ConstantTable,
) -> Result<OptionSet, ConfigError> {
    let serializer = resolve_serializer(instance, &raw.serializer, constants)?;

    let hash = HashAlgorithm::parse(&raw.hash)
        .filter(|h| constants.hash_code(*h).is_some())
        .ok_or_else(|| invalid_enum(instance, ClientOption::Hash, &raw.hash))?;

    let distribution = Distribution::parse(&raw.distribution)
        .filter(|d| constants.distribution_code(*d).is_some())
        .ok_or_else(|| invalid_enum(instance, ClientOption::Distribution, &raw.distribution))?;

    let libketama_compatible =
        distribution == Distribution::Consistent || raw.libketama_compatible;

    Ok(OptionSet {
        compression: raw.compression,
        serializer,
        prefix_key: raw.prefix_key.clone(),
        hash,
        distribution,
        libketama_compatible,
        buffer_writes: raw.buffer_writes,
        binary_protocol: raw.binary_protocol,
        no_block: raw.no_block,
        tcp_nodelay: raw.tcp_nodelay,
        socket_send_size: raw.socket_send_size,
        socket_recv_size: raw.socket_recv_size,
        connect_timeout: raw.connect_timeout,
        retry_timeout: raw.retry_timeout,
        send_timeout: raw.send_timeout,
        recv_timeout: raw.recv_timeout,
        poll_timeout: raw.poll_timeout,
        cache_lookups: raw.cache_lookups,
        server_failure_limit: raw.server_failure_limit,
    })
}

/// Encode an option set into ordered `(option, code, value)` triples
///
/// Enum values become runtime codes. An option key or enum value missing from
/// the table is an [`ConfigError::InvalidEnumValue`].
pub fn encode_settings(
    instance: &str,
    options: &OptionSet,
    constants: &ConstantTable,
) -> Result<Vec<(ClientOption, i64, OptionValue)>, ConfigError> {
    options
        .ordered_settings()
        .into_iter()
        .map(|(option, setting)| {
            let code = constants
                .option_code(option)
                .ok_or_else(|| invalid_enum(instance, option, "<unmapped option>"))?;
            let value = encode_setting(instance, option, setting, constants)?;
            Ok((option, code, value))
        })
        .collect()
}

fn encode_setting(
    instance: &str,
    option: ClientOption,
    setting: OptionSetting,
    constants: &ConstantTable,
) -> Result<OptionValue, ConfigError> {
    let value = match setting {
        OptionSetting::Flag(flag) => OptionValue::Bool(flag),
        OptionSetting::Int(int) => OptionValue::Int(int),
        OptionSetting::Text(text) => OptionValue::Str(text),
        OptionSetting::Serializer(s) => OptionValue::Int(
            constants
                .serializer_code(s)
                .ok_or_else(|| unsupported_serializer(instance, s.as_str()))?,
        ),
        OptionSetting::Hash(h) => OptionValue::Int(
            constants
                .hash_code(h)
                .ok_or_else(|| invalid_enum(instance, option, h.as_str()))?,
        ),
        OptionSetting::Distribution(d) => OptionValue::Int(
            constants
                .distribution_code(d)
                .ok_or_else(|| invalid_enum(instance, option, d.as_str()))?,
        ),
    };
    Ok(value)
}

fn resolve_serializer(
    instance: &str,
    name: &str,
    constants: &ConstantTable,
) -> Result<Serializer, ConfigError> {
    let serializer =
        Serializer::parse(name).ok_or_else(|| unsupported_serializer(instance, name))?;

    if serializer != Serializer::Php && !constants.has_serializer(serializer) {
        return Err(unsupported_serializer(instance, name));
    }
    if constants.serializer_code(serializer).is_none() {
        return Err(unsupported_serializer(instance, name));
    }
    Ok(serializer)
}

fn unsupported_serializer(instance: &str, serializer: &str) -> ConfigError {
    ConfigError::UnsupportedSerializer {
        instance: instance.to_string(),
        serializer: serializer.to_string(),
    }
}

fn invalid_enum(instance: &str, option: ClientOption, value: &str) -> ConfigError {
    ConfigError::InvalidEnumValue {
        instance: instance.to_string(),
        field: option.name().to_string(),
        value: value.to_string(),
    }
}
