//! Config loading tests

use spn_config::{ClientConfig, ConfigError, LoggerConfig, NetworkType, SPN_ADDRESS_PREFIX};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let file = write_config(
        r#"
        rpc_address = "http://10.0.0.7:26657"
        request_timeout_ms = 5000

        [logger]
        level = "debug"
        "#,
    );

    let config = ClientConfig::load(file.path()).unwrap();
    assert_eq!(config.rpc_address, "http://10.0.0.7:26657");
    assert_eq!(config.request_timeout_ms, 5000);
    assert_eq!(config.address_prefix, SPN_ADDRESS_PREFIX);
    assert_eq!(config.logger.level, "debug");
    assert_eq!(config.logger.format, LoggerConfig::default().format);
}

#[test]
fn test_network_selection() {
    let file = write_config(r#"network = "mainnet""#);
    let config = ClientConfig::load(file.path()).unwrap();
    assert_eq!(config.network, NetworkType::MainNet);

    let local = ClientConfig::for_network(NetworkType::Local);
    assert_eq!(local.rpc_address, "http://127.0.0.1:26657");
}

#[test]
fn test_invalid_files_are_rejected() {
    let malformed = write_config("rpc_address = [");
    assert!(matches!(
        ClientConfig::load(malformed.path()),
        Err(ConfigError::Parse(_))
    ));

    let empty_chain = write_config(r#"chain_id = """#);
    assert!(matches!(
        ClientConfig::load(empty_chain.path()),
        Err(ConfigError::Invalid(_))
    ));

    assert!(matches!(
        ClientConfig::load("/definitely/not/here.toml"),
        Err(ConfigError::Read { .. })
    ));
}

#[test]
fn test_inactive_logger_does_not_install() {
    let config = LoggerConfig {
        active: false,
        ..LoggerConfig::default()
    };
    assert!(!spn_config::init_tracing(&config));
}
