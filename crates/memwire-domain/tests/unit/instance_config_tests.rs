//! Unit tests for instance configuration parsing

use memwire_domain::constants::{DEFAULT_SERVER_PORT, DEFAULT_SESSION_PREFIX};
use memwire_domain::value_objects::{CacheWiringConfig, MemcachedOptions, ServerSpec};
use serde_json::json;

#[test]
fn test_instance_accepts_hosts_and_dsn_aliases() {
    let config: CacheWiringConfig = serde_json::from_value(json!({
        "instances": {
            "default": {
                "hosts": [
                    { "dsn": "127.0.0.1", "port": 11211, "weight": 1 },
                    { "host": "10.0.0.2" }
                ],
                "persistent_id": "pool"
            }
        }
    }))
    .unwrap();

    let instances = config.named_instances();
    assert_eq!(instances.len(), 1);
    let instance = &instances[0];
    assert_eq!(instance.name, "default");
    assert_eq!(instance.persistent_id.as_deref(), Some("pool"));
    assert_eq!(
        instance.servers,
        vec![
            ServerSpec::new("127.0.0.1", 11211, 1),
            ServerSpec::new("10.0.0.2", DEFAULT_SERVER_PORT, 0),
        ]
    );
    assert!(instance.options.is_none());
}

#[test]
fn test_partial_options_fill_defaults() {
    let config: CacheWiringConfig = serde_json::from_value(json!({
        "instances": {
            "cluster": {
                "servers": [{ "host": "a" }],
                "memcached_options": { "distribution": "consistent", "retry_timeout": 5 }
            }
        }
    }))
    .unwrap();

    let options = config.instances["cluster"].options.clone().unwrap();
    assert_eq!(options.distribution, "consistent");
    assert_eq!(options.retry_timeout, 5);
    assert_eq!(options.serializer, MemcachedOptions::default().serializer);
    assert!(options.compression);
}

#[test]
fn test_session_support_defaults() {
    let config: CacheWiringConfig = serde_json::from_value(json!({
        "session_support": { "enabled": true, "instance_id": "default" }
    }))
    .unwrap();

    let session = config.enabled_session().unwrap();
    assert_eq!(session.instance_id, "default");
    assert_eq!(session.options.prefix, DEFAULT_SESSION_PREFIX);
    assert!(session.options.locking);
}

#[test]
fn test_disabled_session_is_ignored() {
    let config: CacheWiringConfig = serde_json::from_value(json!({
        "session_support": { "enabled": false, "instance_id": "default" }
    }))
    .unwrap();

    assert!(config.session_support.is_some());
    assert!(config.enabled_session().is_none());
}
