//! Tests for the moka-backed client driver

use std::time::Duration;

use memwire_domain::ports::{CacheClient, ClientRuntime};
use memwire_domain::value_objects::{ClientOption, OptionValue, ServerSpec};
use memwire_providers::MemoryClientRuntime;

#[tokio::test]
async fn test_set_get_delete() {
    let runtime = MemoryClientRuntime::new();
    let client = runtime.create_client(None).unwrap();

    client.set("greeting", b"hello", None).await.unwrap();
    assert_eq!(client.get("greeting").await.unwrap(), Some(b"hello".to_vec()));

    assert!(client.delete("greeting").await.unwrap());
    assert!(!client.delete("greeting").await.unwrap());
    assert_eq!(client.get("greeting").await.unwrap(), None);
}

#[tokio::test]
async fn test_ttl_expires_entries() {
    let runtime = MemoryClientRuntime::new();
    let client = runtime.create_client(None).unwrap();

    client
        .set("short", b"lived", Some(Duration::from_millis(20)))
        .await
        .unwrap();
    client
        .set("forever", b"value", Some(Duration::ZERO))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(60)).await;

    assert_eq!(client.get("short").await.unwrap(), None);
    assert_eq!(client.get("forever").await.unwrap(), Some(b"value".to_vec()));
}

#[tokio::test]
async fn test_persistent_id_shares_store() {
    let runtime = MemoryClientRuntime::new();
    let first = runtime.create_client(Some("pool")).unwrap();
    let second = runtime.create_client(Some("pool")).unwrap();
    let isolated = runtime.create_client(None).unwrap();

    first.set("shared", b"1", None).await.unwrap();

    assert_eq!(second.get("shared").await.unwrap(), Some(b"1".to_vec()));
    assert_eq!(isolated.get("shared").await.unwrap(), None);
    assert_eq!(runtime.pool_count(), 1);
    assert_eq!(second.persistent_id(), Some("pool"));
}

#[tokio::test]
async fn test_prefix_key_namespaces_entries() {
    let runtime = MemoryClientRuntime::new();
    let mut app = runtime.create_client(Some("pool")).unwrap();
    app.set_option(ClientOption::PrefixKey, OptionValue::Str("app:".to_string()))
        .unwrap();
    let plain = runtime.create_client(Some("pool")).unwrap();

    app.set("user", b"alice", None).await.unwrap();

    assert_eq!(app.get("user").await.unwrap(), Some(b"alice".to_vec()));
    assert_eq!(plain.get("user").await.unwrap(), None);
    assert_eq!(plain.get("app:user").await.unwrap(), Some(b"alice".to_vec()));
}

#[tokio::test]
async fn test_flush_clears_everything() {
    let runtime = MemoryClientRuntime::with_capacity(16);
    let client = runtime.create_client(None).unwrap();
    client.set("a", b"1", None).await.unwrap();
    client.set("b", b"2", None).await.unwrap();

    client.flush().await.unwrap();

    assert_eq!(client.get("a").await.unwrap(), None);
    assert_eq!(client.get("b").await.unwrap(), None);
}

#[test]
fn test_configuration_is_recorded() {
    let runtime = MemoryClientRuntime::new();
    let mut client = runtime.create_client(None).unwrap();

    client
        .add_servers(&[
            ServerSpec::new("10.0.0.1", 11211, 2),
            ServerSpec::new("10.0.0.2", 11212, 1),
        ])
        .unwrap();
    client
        .set_option(ClientOption::Compression, OptionValue::Bool(true))
        .unwrap();

    let hosts: Vec<_> = client.servers().into_iter().map(|s| s.host).collect();
    assert_eq!(hosts, vec!["10.0.0.1", "10.0.0.2"]);
    assert_eq!(
        client.option(ClientOption::Compression),
        Some(OptionValue::Bool(true))
    );
    assert_eq!(client.driver_name(), "memory");
}

#[test]
fn test_rejects_port_zero() {
    let runtime = MemoryClientRuntime::new();
    let mut client = runtime.create_client(None).unwrap();

    assert!(client.add_servers(&[ServerSpec::new("h", 0, 0)]).is_err());
    assert!(client.servers().is_empty());
}

#[tokio::test]
async fn test_expired_entries_are_evicted_without_reads() {
    let runtime = MemoryClientRuntime::new();
    let client = runtime.create_client(Some("sessions")).unwrap();

    client
        .set("a", b"1", Some(Duration::from_millis(20)))
        .await
        .unwrap();
    client
        .set("b", b"2", Some(Duration::from_millis(20)))
        .await
        .unwrap();
    client.set("kept", b"3", None).await.unwrap();

    tokio::time::sleep(Duration::from_millis(60)).await;

    assert_eq!(runtime.pool_entry_count("sessions").await, Some(1));
    assert!(!client.delete("a").await.unwrap());
    assert_eq!(runtime.pool_entry_count("unknown").await, None);
}

#[tokio::test]
async fn test_rewrite_replaces_ttl() {
    let runtime = MemoryClientRuntime::new();
    let client = runtime.create_client(None).unwrap();

    client
        .set("key", b"old", Some(Duration::from_millis(20)))
        .await
        .unwrap();
    client.set("key", b"new", None).await.unwrap();

    tokio::time::sleep(Duration::from_millis(60)).await;

    assert_eq!(client.get("key").await.unwrap(), Some(b"new".to_vec()));
}
