//! Chain provider endpoint fallback tests.

use chainclient::models::{ExplorerView, NetworkDescriptor};
use chainclient::services::client::{ChainProvider, ClientError};

fn descriptor_with_rpc_urls(rpc_urls: Vec<String>) -> NetworkDescriptor {
	NetworkDescriptor {
		name: "Test".to_string(),
		network_id: "testnet".to_string(),
		coin_type: "60".to_string(),
		is_testnet: true,
		chain_id: Some(1337),
		rpc_urls,
		scraper_urls: vec![],
		explorer_views: vec![ExplorerView {
			tx: "https://example.net/tx/{hash}".to_string(),
			address: "https://example.net/address/{address}".to_string(),
		}],
		wallet_url: None,
		fee_api_url: None,
	}
}

#[tokio::test]
async fn test_falls_back_to_next_endpoint() {
	let mut server = mockito::Server::new_async().await;
	let failing = server
		.mock("POST", "/unhealthy")
		.with_status(503)
		.create_async()
		.await;
	let healthy = server
		.mock("POST", "/healthy")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"jsonrpc": "2.0", "id": 1, "result": "0x10"}"#)
		.create_async()
		.await;

	let provider = ChainProvider::new(descriptor_with_rpc_urls(vec![
		format!("{}/unhealthy", server.url()),
		format!("{}/healthy", server.url()),
	]));

	let response = provider
		.send_raw_request("eth_blockNumber", None)
		.await
		.unwrap();
	assert_eq!(response.get("result").unwrap().as_str(), Some("0x10"));

	failing.assert_async().await;
	healthy.assert_async().await;
}

#[tokio::test]
async fn test_first_endpoint_wins_when_healthy() {
	let mut server = mockito::Server::new_async().await;
	let first = server
		.mock("POST", "/first")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"jsonrpc": "2.0", "id": 1, "result": "0x1"}"#)
		.create_async()
		.await;
	let second = server
		.mock("POST", "/second")
		.expect(0)
		.create_async()
		.await;

	let provider = ChainProvider::new(descriptor_with_rpc_urls(vec![
		format!("{}/first", server.url()),
		format!("{}/second", server.url()),
	]));

	provider.send_raw_request("eth_blockNumber", None).await.unwrap();

	first.assert_async().await;
	second.assert_async().await;
}

#[tokio::test]
async fn test_exhausted_endpoints_surface_last_error() {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("POST", "/rpc")
		.with_status(500)
		.expect(1)
		.create_async()
		.await;

	let provider =
		ChainProvider::new(descriptor_with_rpc_urls(vec![format!("{}/rpc", server.url())]));

	let result = provider.send_raw_request("eth_blockNumber", None).await;
	assert!(matches!(result, Err(ClientError::ProviderError(_))));
}
