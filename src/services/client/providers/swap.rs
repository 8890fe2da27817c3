//! Swap provider.
//!
//! Network-scoped at construction; the wallet provider is attached
//! afterwards through a single explicit binding call. A swap provider with
//! no wallet bound is a valid intermediate state during factory wiring, but
//! every operation resolves the wallet first and fails while unbound.

use std::sync::Arc;

use crate::models::NetworkDescriptor;
use crate::services::client::error::ClientError;

use super::wallet::WalletProvider;

/// Swap configuration supplied by the caller for EVM chains
#[derive(Debug, Clone, Default)]
pub struct SwapOptions {
	/// Swap contract address; `None` falls back to the chain default
	pub contract_address: Option<String>,
}

/// Provider for swap execution on one network
pub struct SwapProvider {
	descriptor: NetworkDescriptor,
	scraper_url: Option<String>,
	contract_address: Option<String>,
	wallet: Option<Arc<WalletProvider>>,
}

impl SwapProvider {
	/// Creates a new swap provider scoped to the given network
	pub fn new(descriptor: &NetworkDescriptor) -> Self {
		Self {
			scraper_url: descriptor.scraper_url().map(str::to_string),
			descriptor: descriptor.clone(),
			contract_address: None,
			wallet: None,
		}
	}

	/// Applies caller-supplied swap options
	pub fn with_options(mut self, options: SwapOptions) -> Self {
		self.contract_address = options.contract_address;
		self
	}

	/// Attaches the wallet provider
	///
	/// Single explicit binding call; the factory performs it exactly once
	/// before the provider is exposed on a client.
	pub fn set_wallet(&mut self, wallet: Arc<WalletProvider>) {
		self.wallet = Some(wallet);
	}

	/// Resolves the bound wallet
	///
	/// Every swap operation goes through this accessor, so an unbound
	/// provider fails uniformly with `WalletNotBound`.
	pub fn wallet(&self) -> Result<&Arc<WalletProvider>, ClientError> {
		self.wallet.as_ref().ok_or_else(ClientError::wallet_not_bound)
	}

	/// True once a wallet has been bound
	pub fn is_functional(&self) -> bool {
		self.wallet.is_some()
	}

	pub fn descriptor(&self) -> &NetworkDescriptor {
		&self.descriptor
	}

	pub fn scraper_url(&self) -> Option<&str> {
		self.scraper_url.as_deref()
	}

	pub fn contract_address(&self) -> Option<&str> {
		self.contract_address.as_deref()
	}

	/// Derivation path the bound wallet signs swap transactions under
	pub fn signer_derivation_path(&self) -> Result<&str, ClientError> {
		Ok(self.wallet()?.derivation_path())
	}
}
