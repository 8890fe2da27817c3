//! Chain communication provider.
//!
//! Wraps the network descriptor's RPC endpoints behind a raw JSON-RPC
//! request surface with ordered fallback: endpoints are tried front to back
//! and the first one that answers wins. Construction does no I/O.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::warn;

use crate::models::NetworkDescriptor;
use crate::services::client::{error::ClientError, providers::fee::FeeProvider};

/// Provider for raw chain access, bound to one network descriptor
pub struct ChainProvider {
	descriptor: NetworkDescriptor,
	http: reqwest::Client,
	fee_provider: Option<Arc<dyn FeeProvider>>,
}

impl ChainProvider {
	/// Creates a new chain provider for the given network
	pub fn new(descriptor: NetworkDescriptor) -> Self {
		Self {
			descriptor,
			http: reqwest::Client::new(),
			fee_provider: None,
		}
	}

	/// Network descriptor this provider is bound to
	pub fn descriptor(&self) -> &NetworkDescriptor {
		&self.descriptor
	}

	/// Overrides default fee estimation with an external fee provider
	///
	/// Only attached on production networks; fee-market data is not
	/// available for test networks.
	pub fn set_fee_provider(&mut self, fee_provider: Arc<dyn FeeProvider>) {
		self.fee_provider = Some(fee_provider);
	}

	/// The attached fee provider, if any
	pub fn fee_provider(&self) -> Option<&Arc<dyn FeeProvider>> {
		self.fee_provider.as_ref()
	}

	/// Sends a raw JSON-RPC request, falling back through the endpoint list
	///
	/// # Arguments
	/// * `method` - JSON-RPC method name
	/// * `params` - Optional JSON-RPC params value
	///
	/// # Returns
	/// * `Result<Value, ClientError>` - Full JSON-RPC response envelope of
	///   the first endpoint that answers, or the last endpoint's error
	pub async fn send_raw_request(
		&self,
		method: &str,
		params: Option<Value>,
	) -> Result<Value, ClientError> {
		let body = json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": method,
			"params": params.unwrap_or(Value::Array(vec![])),
		});

		let mut last_error = None;
		for url in &self.descriptor.rpc_urls {
			match self.try_endpoint(url, &body).await {
				Ok(response) => return Ok(response),
				Err(e) => {
					warn!(
						url = %url,
						method = %method,
						error = %e,
						"RPC endpoint failed, trying next"
					);
					last_error = Some(e);
				}
			}
		}

		Err(last_error.unwrap_or_else(|| {
			ClientError::provider(format!(
				"no RPC endpoints configured for {}",
				self.descriptor.name
			))
		}))
	}

	async fn try_endpoint(&self, url: &str, body: &Value) -> Result<Value, ClientError> {
		let response = self.http.post(url).json(body).send().await?;
		let response = response.error_for_status()?;
		Ok(response.json::<Value>().await?)
	}
}
