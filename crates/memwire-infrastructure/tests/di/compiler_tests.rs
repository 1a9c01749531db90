//! Tests for compiling definitions into live clients

use std::sync::Arc;

use memwire_domain::ports::{CacheClient, ServiceRegistry};
use memwire_domain::value_objects::{
    Argument, ClientOption, InstanceConfig, MemcachedOptions, OptionValue, ServiceDefinition,
};
use memwire_infrastructure::config::ConfigBuilder;
use memwire_infrastructure::di::{DefinitionCompiler, ServiceContainer, wire_container};
use memwire_providers::{MemoryClientRuntime, NullClientRuntime};

#[test]
fn test_compiled_client_matches_definition() {
    let options = MemcachedOptions {
        distribution: "consistent".to_string(),
        libketama_compatible: false,
        prefix_key: "app:".to_string(),
        retry_timeout: 5,
        ..Default::default()
    };
    let config = ConfigBuilder::new()
        .with_instance(
            InstanceConfig::new("cluster")
                .with_server("10.0.0.1", 11211, 2)
                .with_server("10.0.0.2", 11212, 1)
                .with_persistent_id("pool")
                .with_options(options),
        )
        .build();
    let runtime = Arc::new(NullClientRuntime::new());

    let (container, _) = wire_container(&config, runtime.clone()).unwrap();
    let instances = DefinitionCompiler::new(runtime).compile(&container).unwrap();
    let client = instances.instance("cluster").unwrap();

    let servers = client.servers();
    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].host, "10.0.0.1");
    assert_eq!(servers[0].weight, 2);
    assert_eq!(servers[1].port, 11212);
    assert_eq!(client.persistent_id(), Some("pool"));
    assert_eq!(
        client.option(ClientOption::LibketamaCompatible),
        Some(OptionValue::Bool(true))
    );
    assert_eq!(
        client.option(ClientOption::Distribution),
        Some(OptionValue::Int(1))
    );
    assert_eq!(
        client.option(ClientOption::RetryTimeout),
        Some(OptionValue::Int(5))
    );
    assert_eq!(client.option(ClientOption::ServerFailureLimit), None);
    assert_eq!(client.option(ClientOption::CacheLookups), None);
}

#[test]
fn test_instance_without_options_applies_none() {
    let config = ConfigBuilder::new()
        .with_instance(InstanceConfig::new("default").with_server("localhost", 11211, 0))
        .build();
    let runtime = Arc::new(NullClientRuntime::new());

    let (container, _) = wire_container(&config, runtime.clone()).unwrap();
    let instances = DefinitionCompiler::new(runtime).compile(&container).unwrap();
    let client = instances.instance("default").unwrap();

    assert_eq!(client.servers().len(), 1);
    assert!(ClientOption::ALL.iter().all(|o| client.option(*o).is_none()));
}

#[tokio::test]
async fn test_compiled_memory_client_stores_with_prefix() {
    let options = MemcachedOptions {
        prefix_key: "app:".to_string(),
        ..Default::default()
    };
    let config = ConfigBuilder::new()
        .with_instance(
            InstanceConfig::new("default")
                .with_server("localhost", 11211, 0)
                .with_options(options),
        )
        .build();
    let runtime = Arc::new(MemoryClientRuntime::new());

    let (container, _) = wire_container(&config, runtime.clone()).unwrap();
    let instances = DefinitionCompiler::new(runtime).compile(&container).unwrap();
    let client = instances.instance("default").unwrap();

    client.set("user", b"alice", None).await.unwrap();
    assert_eq!(client.get("user").await.unwrap(), Some(b"alice".to_vec()));
}

#[test]
fn test_unknown_option_code_is_rejected() {
    let mut definition = ServiceDefinition::new("memwire::CacheClient");
    definition.add_tag("memcache.client");
    definition.add_method_call(
        "addServers",
        vec![Argument::value(serde_json::json!([["localhost", 11211, 0]]))],
    );
    definition.add_method_call("setOption", vec![Argument::value(4242), Argument::value(true)]);
    let mut container = ServiceContainer::new();
    container.define("memcache.default", definition);

    let result = DefinitionCompiler::new(Arc::new(NullClientRuntime::new())).compile(&container);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("4242"));
}

#[test]
fn test_malformed_server_list_is_rejected() {
    let mut definition = ServiceDefinition::new("memwire::CacheClient");
    definition.add_method_call(
        "addServers",
        vec![Argument::value(serde_json::json!([["localhost", "port", 0]]))],
    );

    let result = DefinitionCompiler::new(Arc::new(NullClientRuntime::new()))
        .compile_definition("memcache.default", &definition);

    assert!(result.is_err());
}

#[test]
fn test_unsupported_call_is_rejected() {
    let mut definition = ServiceDefinition::new("memwire::CacheClient");
    definition.add_method_call("connect", vec![]);

    let result = DefinitionCompiler::new(Arc::new(NullClientRuntime::new()))
        .compile_definition("memcache.default", &definition);

    assert!(result.unwrap_err().to_string().contains("connect"));
}
