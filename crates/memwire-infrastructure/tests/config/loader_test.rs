//! Tests for the figment configuration loader

use std::io::Write;

use memwire_domain::value_objects::{InstanceConfig, SessionSupportConfig};
use memwire_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader};
use tempfile::{NamedTempFile, TempDir};

const CLUSTER_TOML: &str = r#"
[driver]
name = "null"

[memcache.instances.default]
hosts = [{ dsn = "localhost", port = 11211 }]

[memcache.instances.cluster]
persistent_id = "cluster"
hosts = [
    { dsn = "10.0.0.1", weight = 2 },
    { dsn = "10.0.0.2", port = 11212, weight = 1 },
]

[memcache.instances.cluster.memcached_options]
distribution = "consistent"
libketama_compatible = false
serializer = "json"

[memcache.session_support]
enabled = true
instance_id = "default"

[memcache.session_support.options]
prefix = "sess_"
expiretime = 600
"#;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_instances_from_file() {
    let file = write_config(CLUSTER_TOML);

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();

    assert_eq!(config.driver.name, "null");
    assert_eq!(config.memcache.instances.len(), 2);

    let cluster = &config.memcache.instances["cluster"];
    assert_eq!(cluster.persistent_id.as_deref(), Some("cluster"));
    assert_eq!(cluster.servers[0].host, "10.0.0.1");
    assert_eq!(cluster.servers[0].port, 11211);
    assert_eq!(cluster.servers[0].weight, 2);
    assert_eq!(cluster.servers[1].port, 11212);

    let options = cluster.options.as_ref().unwrap();
    assert_eq!(options.distribution, "consistent");
    assert!(!options.libketama_compatible);
    // Untouched fields keep their defaults
    assert!(options.compression);
    assert_eq!(options.connect_timeout, 1000);

    assert!(config.memcache.instances["default"].options.is_none());

    let session = config.memcache.enabled_session().unwrap();
    assert_eq!(session.instance_id, "default");
    assert_eq!(session.options.prefix, "sess_");
    assert_eq!(session.options.expiretime, 600);
    assert!(session.options.locking);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load();

    assert!(result.is_err());
}

#[test]
fn test_invalid_log_level_is_rejected() {
    let file = write_config("[logging]\nlevel = \"chatty\"\n");

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();

    assert!(err.to_string().contains("chatty"));
}

#[test]
fn test_zero_capacity_is_rejected() {
    let file = write_config("[driver]\nname = \"memory\"\nmax_capacity = 0\n");

    let result = ConfigLoader::new().with_config_path(file.path()).load();

    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_is_rejected() {
    let file = write_config("[memcache.instances.default\nhosts = ");

    let result = ConfigLoader::new().with_config_path(file.path()).load();

    assert!(result.is_err());
}

#[test]
fn test_save_then_load_preserves_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("memwire.toml");
    let config = ConfigBuilder::new()
        .with_driver("null")
        .with_instance(InstanceConfig::new("default").with_server("localhost", 11211, 0))
        .with_session_support(SessionSupportConfig::enabled("default"))
        .build();

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded.driver.name, "null");
    assert_eq!(
        loaded.memcache.instances["default"].servers,
        config.memcache.instances["default"].servers
    );
    assert!(loaded.memcache.enabled_session().is_some());
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.driver.name, "memory");
    assert!(config.memcache.instances.is_empty());
    assert!(config.memcache.session_support.is_none());
}
