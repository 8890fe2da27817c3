//! Config directory loading and registry merging tests.

use std::fs;

use chainclient::models::{Chain, ConfigError, NetworkKind};
use chainclient::registry::NetworkRegistry;

use tempfile::TempDir;

const BITCOIN_TESTNET_OVERRIDE: &str = r#"{
	"name": "Bitcoin Testnet (private esplora)",
	"network_id": "testnet",
	"coin_type": "1",
	"is_testnet": true,
	"rpc_urls": ["https://esplora.internal.example.net/testnet/api"],
	"scraper_urls": ["https://esplora.internal.example.net/testnet/api"],
	"explorer_views": [{
		"tx": "https://esplora.internal.example.net/testnet/tx/{hash}",
		"address": "https://esplora.internal.example.net/testnet/address/{address}"
	}]
}"#;

#[test]
fn test_config_dir_overrides_builtin() {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("bitcoin_testnet.json"), BITCOIN_TESTNET_OVERRIDE).unwrap();

	let registry = NetworkRegistry::with_config_dir(dir.path()).unwrap();

	// Override replaced the built-in entry
	let testnet = registry.get(Chain::Bitcoin, NetworkKind::Testnet).unwrap();
	assert_eq!(testnet.name, "Bitcoin Testnet (private esplora)");
	assert_eq!(
		testnet.rpc_urls,
		vec!["https://esplora.internal.example.net/testnet/api"]
	);

	// Everything else is still the built-in set
	let mainnet = registry.get(Chain::Bitcoin, NetworkKind::Mainnet).unwrap();
	assert_eq!(mainnet.name, "Bitcoin");
	assert_eq!(registry.len(), NetworkRegistry::builtin().len());
}

#[test]
fn test_unknown_chain_stem_is_a_key_error() {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("dogecoin_mainnet.json"), BITCOIN_TESTNET_OVERRIDE).unwrap();

	let result = NetworkRegistry::with_config_dir(dir.path());
	assert!(matches!(result, Err(ConfigError::KeyError(_))));
}

#[test]
fn test_malformed_descriptor_is_a_parse_error() {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("bitcoin_testnet.json"), "{ not json").unwrap();

	let result = NetworkRegistry::with_config_dir(dir.path());
	assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_invalid_descriptor_is_a_validation_error() {
	let dir = TempDir::new().unwrap();
	// Valid JSON, but the tx template is missing its placeholder
	let broken = BITCOIN_TESTNET_OVERRIDE.replace("tx/{hash}", "tx/");
	fs::write(dir.path().join("bitcoin_testnet.json"), broken).unwrap();

	let result = NetworkRegistry::with_config_dir(dir.path());
	assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_missing_directory_is_a_file_error() {
	let dir = TempDir::new().unwrap();
	let missing = dir.path().join("does-not-exist");

	let result = NetworkRegistry::with_config_dir(&missing);
	assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_non_json_files_ignored() {
	let dir = TempDir::new().unwrap();
	fs::write(dir.path().join("README.md"), "# networks").unwrap();

	let registry = NetworkRegistry::with_config_dir(dir.path()).unwrap();
	assert_eq!(registry.len(), NetworkRegistry::builtin().len());
}
