//! Tests for the cache wiring service

use std::sync::Arc;

use memwire_application::CacheWiringService;
use memwire_domain::error::{ConfigError, Error};
use memwire_domain::ports::ServiceRegistry;
use memwire_domain::value_objects::{
    CacheWiringConfig, InstanceConfig, MemcachedOptions, ServiceDefinition, SessionSupportConfig,
};
use memwire_providers::NullClientRuntime;

use crate::test_registry::TestRegistry;

fn service() -> CacheWiringService {
    CacheWiringService::new(Arc::new(NullClientRuntime::new()))
}

/// `(code, value)` pairs of every recorded `setOption` call
fn set_option_calls(definition: &ServiceDefinition) -> Vec<(i64, serde_json::Value)> {
    definition
        .calls_named("setOption")
        .map(|call| {
            let code = call.arguments[0]
                .as_value()
                .and_then(serde_json::Value::as_i64)
                .unwrap();
            let value = call.arguments[1].as_value().cloned().unwrap();
            (code, value)
        })
        .collect()
}

#[test]
fn test_default_instance_records_only_servers() {
    let config = CacheWiringConfig::default()
        .with_instance(InstanceConfig::new("default").with_server("localhost", 11211, 0));
    let mut registry = TestRegistry::default();

    let report = service().wire(&config, &mut registry).unwrap();

    assert_eq!(report.services, vec!["memcache.default"]);
    assert_eq!(report.session_instance, None);

    let definition = registry.get_definition("memcache.default").unwrap();
    assert_eq!(definition.class, "memwire::CacheClient");
    assert!(definition.has_tag("memcache.client"));
    assert!(definition.arguments.is_empty());
    assert_eq!(definition.calls.len(), 1);

    let servers = definition.calls[0].arguments[0].as_value().unwrap();
    assert_eq!(servers, &serde_json::json!([["localhost", 11211, 0]]));
}

#[test]
fn test_consistent_cluster_forces_libketama() {
    let options = MemcachedOptions {
        distribution: "consistent".to_string(),
        libketama_compatible: false,
        ..Default::default()
    };
    let config = CacheWiringConfig::default().with_instance(
        InstanceConfig::new("cluster")
            .with_server("10.0.0.1", 11211, 1)
            .with_server("10.0.0.2", 11211, 2)
            .with_persistent_id("cluster-pool")
            .with_options(options),
    );
    let mut registry = TestRegistry::default();

    service().wire(&config, &mut registry).unwrap();

    let definition = registry.get_definition("memcache.cluster").unwrap();
    assert_eq!(
        definition.arguments[0].as_value(),
        Some(&serde_json::json!("cluster-pool"))
    );

    let calls = set_option_calls(definition);
    // Distribution::Consistent -> 1, LibketamaCompatible -> 16
    assert!(calls.contains(&(9, serde_json::json!(1))));
    assert!(calls.contains(&(16, serde_json::json!(true))));
}

#[test]
fn test_zero_retry_timeout_is_not_applied() {
    let config = CacheWiringConfig::default().with_instance(
        InstanceConfig::new("main")
            .with_server("localhost", 11211, 0)
            .with_options(MemcachedOptions::default()),
    );
    let mut registry = TestRegistry::default();

    service().wire(&config, &mut registry).unwrap();

    let calls = set_option_calls(registry.get_definition("memcache.main").unwrap());
    assert!(!calls.is_empty());
    assert!(calls.iter().all(|(code, _)| *code != 15));
    assert!(calls.iter().all(|(code, _)| *code != 21));
}

#[test]
fn test_unsupported_serializer_defines_nothing() {
    let options = MemcachedOptions {
        serializer: "igbinary".to_string(),
        ..Default::default()
    };
    let config = CacheWiringConfig::default()
        .with_instance(
            InstanceConfig::new("broken")
                .with_server("localhost", 11211, 0)
                .with_options(options),
        )
        .with_instance(InstanceConfig::new("fine").with_server("localhost", 11211, 0));
    let mut registry = TestRegistry::default();

    let err = service().wire(&config, &mut registry).unwrap_err();

    match err {
        Error::WiringErrors(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.iter().any(|e| matches!(
                e,
                ConfigError::UnsupportedSerializer { serializer, .. } if serializer == "igbinary"
            )));
        }
        other => panic!("Expected WiringErrors, got {other:?}"),
    }
    assert!(registry.service_ids().is_empty());
}

#[test]
fn test_every_instance_error_is_reported() {
    let bad_hash = MemcachedOptions {
        hash: "sha1".to_string(),
        ..Default::default()
    };
    let config = CacheWiringConfig::default()
        .with_instance(InstanceConfig::new("empty"))
        .with_instance(
            InstanceConfig::new("hashy")
                .with_server("localhost", 11211, 0)
                .with_options(bad_hash),
        )
        .with_session_support(SessionSupportConfig::enabled("ghost"));

    let errors = service().validate(&config).unwrap_err();

    assert_eq!(errors.len(), 3);
    let instances: Vec<_> = errors.iter().filter_map(ConfigError::instance).collect();
    assert!(instances.contains(&"empty"));
    assert!(instances.contains(&"hashy"));
    assert!(instances.contains(&"ghost"));
}

#[test]
fn test_unavailable_runtime_is_rejected() {
    let service = CacheWiringService::new(Arc::new(NullClientRuntime::unavailable()));
    let config = CacheWiringConfig::default()
        .with_instance(InstanceConfig::new("default").with_server("localhost", 11211, 0));
    let mut registry = TestRegistry::default();

    let err = service.wire(&config, &mut registry).unwrap_err();

    assert!(matches!(
        err,
        Error::Wiring(ConfigError::ExtensionUnavailable { .. })
    ));
    assert!(registry.service_ids().is_empty());
}

#[test]
fn test_unavailable_runtime_without_instances_is_fine() {
    let service = CacheWiringService::new(Arc::new(NullClientRuntime::unavailable()));
    let mut registry = TestRegistry::default();

    let report = service
        .wire(&CacheWiringConfig::default(), &mut registry)
        .unwrap();

    assert!(report.services.is_empty());
}

#[test]
fn test_session_support_is_bound() {
    let config = CacheWiringConfig::default()
        .with_instance(InstanceConfig::new("sessions").with_server("localhost", 11211, 0))
        .with_session_support(SessionSupportConfig::enabled("sessions"));
    let mut registry = TestRegistry::default();

    let report = service().wire(&config, &mut registry).unwrap();

    assert_eq!(report.session_instance.as_deref(), Some("sessions"));
    let handler = registry
        .get_definition("memcache.session_handler")
        .unwrap();
    assert_eq!(
        handler.arguments[0].as_reference(),
        Some("memcache.sessions")
    );
}

#[test]
fn test_disabled_session_support_is_ignored() {
    let mut session = SessionSupportConfig::enabled("ghost");
    session.enabled = false;
    let config = CacheWiringConfig::default()
        .with_instance(InstanceConfig::new("default").with_server("localhost", 11211, 0))
        .with_session_support(session);
    let mut registry = TestRegistry::default();

    service().wire(&config, &mut registry).unwrap();

    assert!(!registry.has_definition("memcache.session_handler"));
}

#[test]
fn test_undeclared_session_instance_defines_nothing() {
    let config = CacheWiringConfig::default()
        .with_instance(InstanceConfig::new("default").with_server("localhost", 11211, 0))
        .with_session_support(SessionSupportConfig::enabled("ghost"));
    let mut registry = TestRegistry::default();

    let err = service().wire(&config, &mut registry).unwrap_err();

    match err {
        Error::WiringErrors(errors) => {
            assert_eq!(
                errors.into_inner(),
                vec![ConfigError::MissingInstance {
                    instance_id: "ghost".to_string()
                }]
            );
        }
        other => panic!("Expected WiringErrors, got {other:?}"),
    }
    assert!(registry.service_ids().is_empty());
}

#[test]
fn test_session_handler_instance_name_is_rejected() {
    let config = CacheWiringConfig::default()
        .with_instance(InstanceConfig::new("session_handler").with_server("localhost", 11211, 0))
        .with_instance(InstanceConfig::new("web").with_server("localhost", 11211, 0))
        .with_session_support(SessionSupportConfig::enabled("web"));
    let mut registry = TestRegistry::default();

    let err = service().wire(&config, &mut registry).unwrap_err();

    match err {
        Error::WiringErrors(errors) => {
            assert!(errors.iter().any(|e| matches!(
                e,
                ConfigError::ReservedInstanceName { instance } if instance == "session_handler"
            )));
        }
        other => panic!("Expected WiringErrors, got {other:?}"),
    }
    assert!(registry.service_ids().is_empty());
}
