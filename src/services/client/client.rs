//! Composed client handle.
//!
//! The client exposes only the capabilities the factory attached: the swap
//! provider (with its wallet already bound), the wallet provider directly
//! for families without swap support, and optionally an NFT provider.
//! Chain and fee providers stay internal dependencies of the attached
//! capabilities. Clients are per-session values holding no persisted state.

use std::sync::Arc;

use super::providers::{NftProvider, SwapProvider, WalletProvider};

/// Composed capability handle returned by the factory
#[derive(Default)]
pub struct Client {
	swap: Option<Arc<SwapProvider>>,
	wallet: Option<Arc<WalletProvider>>,
	nft: Option<Arc<NftProvider>>,
}

impl Client {
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches the swap capability
	pub fn connect_swap(mut self, swap: Arc<SwapProvider>) -> Self {
		self.swap = Some(swap);
		self
	}

	/// Attaches the wallet capability directly
	///
	/// Used by families without a swap provider, where the wallet is the
	/// terminal capability.
	pub fn connect_wallet(mut self, wallet: Arc<WalletProvider>) -> Self {
		self.wallet = Some(wallet);
		self
	}

	/// Attaches the NFT capability
	pub fn connect_nft(mut self, nft: Arc<NftProvider>) -> Self {
		self.nft = Some(nft);
		self
	}

	/// The swap capability, if attached
	pub fn swap(&self) -> Option<&Arc<SwapProvider>> {
		self.swap.as_ref()
	}

	/// The directly attached wallet capability, if any
	pub fn wallet(&self) -> Option<&Arc<WalletProvider>> {
		self.wallet.as_ref()
	}

	/// The NFT capability, if attached
	pub fn nft(&self) -> Option<&Arc<NftProvider>> {
		self.nft.as_ref()
	}

	pub fn has_nft(&self) -> bool {
		self.nft.is_some()
	}
}
