//! Fee estimation providers.
//!
//! A fee provider overrides the chain's default fee estimation with data
//! from an external recommended-fee API. The factory attaches one only on
//! production networks.

use async_trait::async_trait;
use serde::Deserialize;

use crate::services::client::error::ClientError;

/// Recommended fees at three urgency levels, in the chain's native fee unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeEstimates {
	pub slow: f64,
	pub average: f64,
	pub fast: f64,
}

/// Capability contract for fee estimation
#[async_trait]
pub trait FeeProvider: Send + Sync {
	/// Fetches the current recommended fees
	async fn recommended_fees(&self) -> Result<FeeEstimates, ClientError>;

	/// Endpoint this provider reads from
	fn url(&self) -> &str;
}

/// Mempool-style recommended-fee response
#[derive(Debug, Deserialize)]
struct RecommendedFeesResponse {
	#[serde(rename = "fastestFee")]
	fastest_fee: f64,
	#[serde(rename = "halfHourFee")]
	half_hour_fee: f64,
	#[serde(rename = "hourFee")]
	hour_fee: f64,
}

/// Fee provider backed by a recommended-fee HTTP API
pub struct FeeApiProvider {
	url: String,
	http: reqwest::Client,
}

impl FeeApiProvider {
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			http: reqwest::Client::new(),
		}
	}
}

#[async_trait]
impl FeeProvider for FeeApiProvider {
	async fn recommended_fees(&self) -> Result<FeeEstimates, ClientError> {
		let response = self.http.get(&self.url).send().await?;
		let response = response.error_for_status()?;
		let fees: RecommendedFeesResponse = response.json().await?;

		Ok(FeeEstimates {
			slow: fees.hour_fee,
			average: fees.half_hour_fee,
			fast: fees.fastest_fee,
		})
	}

	fn url(&self) -> &str {
		&self.url
	}
}
