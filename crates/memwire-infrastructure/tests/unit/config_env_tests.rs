//! Tests for `MEMWIRE__` environment overrides
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p memwire-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Rust 2024 requires `unsafe` for `env::set_var`/`env::remove_var`.
//! Tests MUST run with `--test-threads=1` to prevent data races.

use memwire_infrastructure::config::ConfigLoader;
use std::env;
use std::io::Write;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_driver() {
    set_env("MEMWIRE__DRIVER__NAME", "null");
    set_env("MEMWIRE__LOGGING__LEVEL", "debug");

    let result = ConfigLoader::new().load();

    remove_env("MEMWIRE__DRIVER__NAME");
    remove_env("MEMWIRE__LOGGING__LEVEL");

    let config = result.expect("Should load config");
    assert_eq!(config.driver.name, "null");
    assert_eq!(config.logging.level, "debug");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[driver]\nname = \"memory\"").unwrap();
    set_env("MEMWIRE__DRIVER__NAME", "null");

    let result = ConfigLoader::new().with_config_path(file.path()).load();

    remove_env("MEMWIRE__DRIVER__NAME");

    assert_eq!(result.expect("Should load config").driver.name, "null");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_is_ignored() {
    set_env("MEMWIRE_DRIVER_NAME", "null");

    let result = ConfigLoader::new().load();

    remove_env("MEMWIRE_DRIVER_NAME");

    assert_eq!(result.expect("Should load config").driver.name, "memory");
}
