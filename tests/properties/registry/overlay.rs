use crate::properties::strategies::{descriptor_strategy, overlay_strategy};

use chainclient::registry::derive_testnet;

use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// Merge Semantics Tests
	#[test]
	fn test_overlay_merge_semantics(
		mainnet in descriptor_strategy(),
		overlay in overlay_strategy()
	) {
		let derived = derive_testnet(&mainnet, overlay.clone());

		// is_testnet is always forced, regardless of inputs
		prop_assert!(derived.is_testnet);

		// Required overlay fields replace the mainnet values wholly
		prop_assert_eq!(&derived.name, &overlay.name);
		prop_assert_eq!(&derived.network_id, &overlay.network_id);
		prop_assert_eq!(&derived.rpc_urls, &overlay.rpc_urls);
		prop_assert_eq!(&derived.explorer_views, &overlay.explorer_views);

		// Optional overlay fields replace when present, copy otherwise
		match &overlay.coin_type {
			Some(value) => prop_assert_eq!(&derived.coin_type, value),
			None => prop_assert_eq!(&derived.coin_type, &mainnet.coin_type),
		}
		match overlay.chain_id {
			Some(value) => prop_assert_eq!(derived.chain_id, Some(value)),
			None => prop_assert_eq!(derived.chain_id, mainnet.chain_id),
		}
		match &overlay.scraper_urls {
			Some(value) => prop_assert_eq!(&derived.scraper_urls, value),
			None => prop_assert_eq!(&derived.scraper_urls, &mainnet.scraper_urls),
		}
		match &overlay.wallet_url {
			Some(value) => prop_assert_eq!(derived.wallet_url.as_ref(), Some(value)),
			None => prop_assert_eq!(&derived.wallet_url, &mainnet.wallet_url),
		}
		match &overlay.fee_api_url {
			Some(value) => prop_assert_eq!(derived.fee_api_url.as_ref(), Some(value)),
			None => prop_assert_eq!(&derived.fee_api_url, &mainnet.fee_api_url),
		}
	}

	// Determinism Tests
	#[test]
	fn test_overlay_is_deterministic(
		mainnet in descriptor_strategy(),
		overlay in overlay_strategy()
	) {
		let first = derive_testnet(&mainnet, overlay.clone());
		let second = derive_testnet(&mainnet, overlay);
		prop_assert_eq!(first, second);
	}

	// Input Immutability Tests
	#[test]
	fn test_mainnet_descriptor_untouched(
		mainnet in descriptor_strategy(),
		overlay in overlay_strategy()
	) {
		let before = mainnet.clone();
		let _ = derive_testnet(&mainnet, overlay);
		prop_assert_eq!(before, mainnet);
	}
}
