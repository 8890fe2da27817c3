//! Fee API provider tests against a local mock server.

use chainclient::services::client::{ClientError, FeeApiProvider, FeeProvider};

#[tokio::test]
async fn test_recommended_fees_parsed() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/api/v1/fees/recommended")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"fastestFee": 42.0, "halfHourFee": 21.0, "hourFee": 11.0, "economyFee": 6.0}"#)
		.create_async()
		.await;

	let provider = FeeApiProvider::new(format!("{}/api/v1/fees/recommended", server.url()));
	let fees = provider.recommended_fees().await.unwrap();

	assert_eq!(fees.fast, 42.0);
	assert_eq!(fees.average, 21.0);
	assert_eq!(fees.slow, 11.0);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_http_error_surfaces_as_provider_error() {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("GET", "/api/v1/fees/recommended")
		.with_status(502)
		.create_async()
		.await;

	let provider = FeeApiProvider::new(format!("{}/api/v1/fees/recommended", server.url()));
	let result = provider.recommended_fees().await;

	assert!(matches!(result, Err(ClientError::ProviderError(_))));
}

#[tokio::test]
async fn test_malformed_body_surfaces_as_provider_error() {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("GET", "/api/v1/fees/recommended")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"unexpected": true}"#)
		.create_async()
		.await;

	let provider = FeeApiProvider::new(format!("{}/api/v1/fees/recommended", server.url()));
	let result = provider.recommended_fees().await;

	assert!(matches!(result, Err(ClientError::ProviderError(_))));
}
