use serde::{Deserialize, Serialize};

/// Explorer URL templates for a network
///
/// The `tx` template carries a `{hash}` placeholder, the `address` template
/// an `{address}` placeholder.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExplorerView {
    pub tx: String,
    pub address: String,
}

impl ExplorerView {
    /// Resolves the transaction template for the given hash
    pub fn tx_url(&self, hash: &str) -> String {
        self.tx.replace("{hash}", hash)
    }

    /// Resolves the address template for the given address
    pub fn address_url(&self, address: &str) -> String {
        self.address.replace("{address}", address)
    }
}

/// Static per-network configuration record
///
/// Descriptors are constructed once (either built in or loaded from config
/// files) and are read-only afterwards. Endpoint lists are ordered: the
/// chain provider falls back through `rpc_urls` front to back.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct NetworkDescriptor {
    pub name: String,
    pub network_id: String,
    /// SLIP-44 coin type, kept as a string to match derivation path segments
    pub coin_type: String,
    pub is_testnet: bool,
    /// Numeric chain id, present for EVM chains only
    #[serde(default)]
    pub chain_id: Option<u64>,
    pub rpc_urls: Vec<String>,
    #[serde(default)]
    pub scraper_urls: Vec<String>,
    #[serde(default)]
    pub explorer_views: Vec<ExplorerView>,
    #[serde(default)]
    pub wallet_url: Option<String>,
    /// Recommended-fee API endpoint, present for chains with fee overrides
    #[serde(default)]
    pub fee_api_url: Option<String>,
}

impl NetworkDescriptor {
    /// Primary explorer view, if the descriptor carries one
    pub fn explorer(&self) -> Option<&ExplorerView> {
        self.explorer_views.first()
    }

    /// Primary scraper endpoint, if the descriptor carries one
    pub fn scraper_url(&self) -> Option<&str> {
        self.scraper_urls.first().map(String::as_str)
    }
}
