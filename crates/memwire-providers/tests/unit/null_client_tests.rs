//! Tests for the no-op client driver

use memwire_domain::ports::{CacheClient, ClientRuntime};
use memwire_domain::value_objects::{ClientOption, ConstantTable, OptionValue, ServerSpec};
use memwire_providers::NullClientRuntime;

#[tokio::test]
async fn test_never_stores_values() {
    let runtime = NullClientRuntime::new();
    let client = runtime.create_client(None).unwrap();

    client.set("key", b"value", None).await.unwrap();

    assert_eq!(client.get("key").await.unwrap(), None);
    assert!(!client.delete("key").await.unwrap());
    client.flush().await.unwrap();
}

#[test]
fn test_records_configuration() {
    let runtime = NullClientRuntime::new();
    let mut client = runtime.create_client(Some("persist")).unwrap();

    client
        .add_servers(&[ServerSpec::with_host("localhost")])
        .unwrap();
    client
        .set_option(ClientOption::Distribution, OptionValue::Int(1))
        .unwrap();

    assert_eq!(client.servers().len(), 1);
    assert_eq!(client.servers()[0].port, 11211);
    assert_eq!(
        client.option(ClientOption::Distribution),
        Some(OptionValue::Int(1))
    );
    assert_eq!(client.persistent_id(), Some("persist"));
}

#[test]
fn test_unavailable_runtime() {
    let runtime = NullClientRuntime::unavailable();
    assert!(!runtime.is_available());
    assert_eq!(runtime.name(), "null");
}

#[test]
fn test_custom_constants_drive_option_checks() {
    let constants = ConstantTable::memcached().with_distribution(
        memwire_domain::value_objects::Distribution::Consistent,
        42,
    );
    let runtime = NullClientRuntime::with_constants(constants);
    let mut client = runtime.create_client(None).unwrap();

    assert!(client
        .set_option(ClientOption::Distribution, OptionValue::Int(42))
        .is_ok());
    assert!(client
        .set_option(ClientOption::Distribution, OptionValue::Int(77))
        .is_err());
}
