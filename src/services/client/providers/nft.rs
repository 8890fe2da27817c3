//! NFT capability provider and vendor selection.
//!
//! Vendor choice is a declarative mapping from numeric chain id to vendor
//! kind; a chain id with no entry simply gets no NFT capability. Vendor
//! endpoints and API keys are injected configuration, never computed here.

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;

use super::wallet::WalletProvider;

/// NFT API vendor backing the capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NftProviderKind {
	OpenSea,
	Moralis,
}

lazy_static! {
	/// Chain id to vendor mapping
	///
	/// Extending NFT support to a new chain means adding an entry here,
	/// not editing factory logic.
	static ref CHAIN_NFT_PROVIDERS: HashMap<u64, NftProviderKind> = HashMap::from([
		(1, NftProviderKind::OpenSea),
		(137, NftProviderKind::Moralis),
		(80001, NftProviderKind::Moralis),
	]);
}

impl NftProviderKind {
	/// Vendor for the given chain id, if one is mapped
	pub fn for_chain_id(chain_id: u64) -> Option<Self> {
		CHAIN_NFT_PROVIDERS.get(&chain_id).copied()
	}
}

/// Injected endpoint/key settings for the supported NFT vendors
#[derive(Debug, Clone)]
pub struct NftVendorSettings {
	pub opensea_url: String,
	pub opensea_api_key: String,
	pub moralis_url: String,
	pub moralis_api_key: String,
	pub moralis_app_id: String,
}

impl Default for NftVendorSettings {
	fn default() -> Self {
		Self {
			opensea_url: "https://api.opensea.io/api/v1/".to_string(),
			opensea_api_key: String::new(),
			moralis_url: "https://deep-index.moralis.io/api/v2".to_string(),
			moralis_api_key: String::new(),
			moralis_app_id: String::new(),
		}
	}
}

/// NFT access provider attached to an EVM client
pub struct NftProvider {
	kind: NftProviderKind,
	url: String,
	api_key: String,
	app_id: Option<String>,
	wallet: Arc<WalletProvider>,
}

impl NftProvider {
	/// Builds the provider for the selected vendor from injected settings
	pub fn new(
		kind: NftProviderKind,
		settings: &NftVendorSettings,
		wallet: Arc<WalletProvider>,
	) -> Self {
		let (url, api_key, app_id) = match kind {
			NftProviderKind::OpenSea => (
				settings.opensea_url.clone(),
				settings.opensea_api_key.clone(),
				None,
			),
			NftProviderKind::Moralis => (
				settings.moralis_url.clone(),
				settings.moralis_api_key.clone(),
				Some(settings.moralis_app_id.clone()),
			),
		};

		Self {
			kind,
			url,
			api_key,
			app_id,
			wallet,
		}
	}

	pub fn kind(&self) -> NftProviderKind {
		self.kind
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	pub fn api_key(&self) -> &str {
		&self.api_key
	}

	pub fn app_id(&self) -> Option<&str> {
		self.app_id.as_deref()
	}

	pub fn wallet(&self) -> &Arc<WalletProvider> {
		&self.wallet
	}
}
