//! Testnet derivation from mainnet descriptors.
//!
//! Testnet descriptors are not written out in full: each one is derived from
//! its mainnet counterpart by overlaying the fields that differ. The overlay
//! is a typed struct, so a field that does not exist on the descriptor
//! cannot be expressed, and the merge is checked at compile time.

use crate::models::{ExplorerView, NetworkDescriptor};

/// Typed field overlay applied to a mainnet descriptor
///
/// Required fields are the ones every testnet definition replaces; the
/// optional ones replace the mainnet value only when set. Overridden fields
/// are wholly replaced, never merged element-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct TestnetOverlay {
    pub name: String,
    pub network_id: String,
    pub rpc_urls: Vec<String>,
    pub explorer_views: Vec<ExplorerView>,
    pub coin_type: Option<String>,
    pub chain_id: Option<u64>,
    pub scraper_urls: Option<Vec<String>>,
    pub wallet_url: Option<String>,
    pub fee_api_url: Option<String>,
}

/// Derives a testnet descriptor from a mainnet descriptor and an overlay
///
/// Every field not present in the overlay is copied from the mainnet value
/// unchanged; `is_testnet` is always forced true. Pure data transform with
/// no error conditions.
pub fn derive_testnet(mainnet: &NetworkDescriptor, overlay: TestnetOverlay) -> NetworkDescriptor {
    NetworkDescriptor {
        name: overlay.name,
        network_id: overlay.network_id,
        coin_type: overlay.coin_type.unwrap_or_else(|| mainnet.coin_type.clone()),
        is_testnet: true,
        chain_id: overlay.chain_id.or(mainnet.chain_id),
        rpc_urls: overlay.rpc_urls,
        scraper_urls: overlay
            .scraper_urls
            .unwrap_or_else(|| mainnet.scraper_urls.clone()),
        explorer_views: overlay.explorer_views,
        wallet_url: overlay.wallet_url.or_else(|| mainnet.wallet_url.clone()),
        fee_api_url: overlay.fee_api_url.or_else(|| mainnet.fee_api_url.clone()),
    }
}
