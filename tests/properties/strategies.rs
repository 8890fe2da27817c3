use chainclient::models::{ExplorerView, NetworkDescriptor};
use chainclient::registry::TestnetOverlay;

use proptest::prelude::*;

pub fn url_strategy() -> impl Strategy<Value = String> {
	"[a-z]{3,10}".prop_map(|host| format!("https://{}.example.net", host))
}

pub fn explorer_view_strategy() -> impl Strategy<Value = ExplorerView> {
	"[a-z]{3,10}".prop_map(|host| ExplorerView {
		tx: format!("https://{}.example.net/tx/{{hash}}", host),
		address: format!("https://{}.example.net/address/{{address}}", host),
	})
}

pub fn descriptor_strategy() -> impl Strategy<Value = NetworkDescriptor> {
	(
		"[A-Z][a-z]{2,8}",
		"[a-z0-9-]{3,10}",
		"[0-9]{1,3}",
		proptest::option::of(0u64..100_000),
		proptest::collection::vec(url_strategy(), 1..3),
		proptest::collection::vec(url_strategy(), 0..2),
		proptest::collection::vec(explorer_view_strategy(), 0..2),
		proptest::option::of(url_strategy()),
		proptest::option::of(url_strategy()),
	)
		.prop_map(
			|(
				name,
				network_id,
				coin_type,
				chain_id,
				rpc_urls,
				scraper_urls,
				explorer_views,
				wallet_url,
				fee_api_url,
			)| NetworkDescriptor {
				name,
				network_id,
				coin_type,
				is_testnet: false,
				chain_id,
				rpc_urls,
				scraper_urls,
				explorer_views,
				wallet_url,
				fee_api_url,
			},
		)
}

pub fn overlay_strategy() -> impl Strategy<Value = TestnetOverlay> {
	(
		"[A-Z][a-z]{2,8} Testnet",
		"[a-z0-9-]{3,10}",
		proptest::collection::vec(url_strategy(), 1..3),
		proptest::collection::vec(explorer_view_strategy(), 1..2),
		proptest::option::of("[0-9]{1,3}"),
		proptest::option::of(0u64..100_000),
		proptest::option::of(proptest::collection::vec(url_strategy(), 0..2)),
		proptest::option::of(url_strategy()),
		proptest::option::of(url_strategy()),
	)
		.prop_map(
			|(
				name,
				network_id,
				rpc_urls,
				explorer_views,
				coin_type,
				chain_id,
				scraper_urls,
				wallet_url,
				fee_api_url,
			)| TestnetOverlay {
				name,
				network_id,
				rpc_urls,
				explorer_views,
				coin_type,
				chain_id,
				scraper_urls,
				wallet_url,
				fee_api_url,
			},
		)
}
