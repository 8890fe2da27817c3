//! Client factory implementation.
//!
//! One entry point per chain family, each following the same shape:
//! resolve the network descriptor from the registry, construct the chain
//! provider, attach a fee override on the production network, select the
//! wallet provider variant from the account-type discriminator, bind the
//! wallet to the swap provider, and compose the client. Construction is
//! all-or-nothing: no partially wired client is ever returned.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::models::{
	ledger_bitcoin_option, AccountCredential, AccountType, Chain, ChainFamily, Mnemonic,
	NetworkDescriptor, NetworkKind,
};
use crate::registry::NetworkRegistry;

use super::client::Client;
use super::error::ClientError;
use super::providers::{
	ChainProvider, FeeApiProvider, HdWalletProvider, LedgerWalletProvider, NftProvider,
	NftProviderKind, NftVendorSettings, SwapOptions, SwapProvider, TransportCreator,
	WalletProvider,
};

/// Builds composed clients from registry descriptors and account material
///
/// The hardware transport creator is an explicit dependency: callers
/// without hardware support inject [`super::providers::NoHardwareTransport`].
pub struct ClientFactory {
	registry: NetworkRegistry,
	transport_creator: Arc<dyn TransportCreator>,
	nft_settings: NftVendorSettings,
}

impl ClientFactory {
	pub fn new(registry: NetworkRegistry, transport_creator: Arc<dyn TransportCreator>) -> Self {
		Self {
			registry,
			transport_creator,
			nft_settings: NftVendorSettings::default(),
		}
	}

	/// Replaces the default NFT vendor settings
	pub fn with_nft_settings(mut self, settings: NftVendorSettings) -> Self {
		self.nft_settings = settings;
		self
	}

	pub fn registry(&self) -> &NetworkRegistry {
		&self.registry
	}

	/// Resolves the descriptor for a chain and network kind
	///
	/// Fails before any provider construction when the pair is absent.
	fn resolve(&self, chain: Chain, kind: NetworkKind) -> Result<NetworkDescriptor, ClientError> {
		self.registry
			.get(chain, kind)
			.cloned()
			.ok_or_else(|| ClientError::unknown_network(chain, kind))
	}

	/// Fee override is a production-network capability only
	fn attach_fee_provider(chain_provider: &mut ChainProvider, kind: NetworkKind) {
		if kind != NetworkKind::Mainnet {
			return;
		}
		if let Some(fee_api_url) = chain_provider.descriptor().fee_api_url.clone() {
			chain_provider.set_fee_provider(Arc::new(FeeApiProvider::new(fee_api_url)));
		}
	}

	fn software_mnemonic(credential: &AccountCredential) -> Result<Mnemonic, ClientError> {
		credential
			.mnemonic()
			.cloned()
			.ok_or_else(|| ClientError::provider("software account requires a mnemonic"))
	}

	/// Creates a Bitcoin-family client
	///
	/// # Arguments
	/// * `kind` - Target network
	/// * `credential` - Mnemonic or hardware account reference
	/// * `account_type` - Wallet variant discriminator
	/// * `base_derivation_path` - Account-level derivation path
	#[instrument(skip(self, credential))]
	pub async fn create_bitcoin_client(
		&self,
		kind: NetworkKind,
		credential: &AccountCredential,
		account_type: AccountType,
		base_derivation_path: &str,
	) -> Result<Client, ClientError> {
		let descriptor = self.resolve(Chain::Bitcoin, kind)?;

		let mut chain_provider = ChainProvider::new(descriptor.clone());
		Self::attach_fee_provider(&mut chain_provider, kind);
		let chain_provider = Arc::new(chain_provider);

		let mut swap_provider = SwapProvider::new(&descriptor);

		let wallet_provider = if account_type.is_bitcoin_ledger() {
			// Option lookup happens before the transport session is opened
			let option = ledger_bitcoin_option(account_type)
				.ok_or_else(|| ClientError::unsupported_account_type(account_type.to_string()))?;
			let session = self.transport_creator.open().await?;
			WalletProvider::Ledger(LedgerWalletProvider::new(
				base_derivation_path,
				Some(option.address_type),
				credential.hardware().cloned(),
				session,
				chain_provider,
			))
		} else if account_type == AccountType::Default {
			let mnemonic = Self::software_mnemonic(credential)?;
			WalletProvider::Hd(HdWalletProvider::new(
				mnemonic,
				base_derivation_path,
				chain_provider,
			)?)
		} else {
			return Err(ClientError::unsupported_account_type(
				account_type.to_string(),
			));
		};

		swap_provider.set_wallet(Arc::new(wallet_provider));
		debug!(network = %descriptor.name, "bitcoin client composed");

		Ok(Client::new().connect_swap(Arc::new(swap_provider)))
	}

	/// Creates an EVM-family client
	///
	/// Attaches the NFT capability iff the descriptor's chain id maps to a
	/// vendor; an unmapped chain id is an absent optional feature, not an
	/// error.
	#[instrument(skip(self, credential, swap_options))]
	pub async fn create_evm_client(
		&self,
		chain: Chain,
		kind: NetworkKind,
		credential: &AccountCredential,
		account_type: AccountType,
		derivation_path: &str,
		swap_options: SwapOptions,
	) -> Result<Client, ClientError> {
		if chain.family() != ChainFamily::Evm {
			return Err(ClientError::unknown_network(chain, kind));
		}
		let descriptor = self.resolve(chain, kind)?;

		let mut chain_provider = ChainProvider::new(descriptor.clone());
		Self::attach_fee_provider(&mut chain_provider, kind);
		let chain_provider = Arc::new(chain_provider);

		let mut swap_provider = SwapProvider::new(&descriptor).with_options(swap_options);

		let wallet_provider = if account_type.is_evm_ledger() {
			let session = self.transport_creator.open().await?;
			WalletProvider::Ledger(LedgerWalletProvider::new(
				derivation_path,
				None,
				credential.hardware().cloned(),
				session,
				chain_provider,
			))
		} else if account_type == AccountType::Default {
			let mnemonic = Self::software_mnemonic(credential)?;
			WalletProvider::Hd(HdWalletProvider::new(
				mnemonic,
				derivation_path,
				chain_provider,
			)?)
		} else {
			return Err(ClientError::unsupported_account_type(
				account_type.to_string(),
			));
		};

		let wallet_provider = Arc::new(wallet_provider);
		swap_provider.set_wallet(wallet_provider.clone());

		let nft_provider = descriptor
			.chain_id
			.and_then(NftProviderKind::for_chain_id)
			.map(|vendor| NftProvider::new(vendor, &self.nft_settings, wallet_provider));

		debug!(
			network = %descriptor.name,
			nft = nft_provider.is_some(),
			"evm client composed"
		);

		let client = Client::new().connect_swap(Arc::new(swap_provider));
		Ok(match nft_provider {
			Some(nft) => client.connect_nft(Arc::new(nft)),
			None => client,
		})
	}

	/// Creates a Near client (software wallet only)
	#[instrument(skip(self, credential))]
	pub async fn create_near_client(
		&self,
		kind: NetworkKind,
		credential: &AccountCredential,
		account_type: AccountType,
		derivation_path: &str,
	) -> Result<Client, ClientError> {
		self.create_mnemonic_swap_client(Chain::Near, kind, credential, account_type, derivation_path)
			.await
	}

	/// Creates a Terra client (software wallet only)
	#[instrument(skip(self, credential))]
	pub async fn create_terra_client(
		&self,
		kind: NetworkKind,
		credential: &AccountCredential,
		account_type: AccountType,
		derivation_path: &str,
	) -> Result<Client, ClientError> {
		self.create_mnemonic_swap_client(
			Chain::Terra,
			kind,
			credential,
			account_type,
			derivation_path,
		)
		.await
	}

	/// Creates a Solana client (software wallet only, no swap provider)
	///
	/// The wallet provider is the terminal capability for Solana.
	#[instrument(skip(self, credential))]
	pub async fn create_solana_client(
		&self,
		kind: NetworkKind,
		credential: &AccountCredential,
		account_type: AccountType,
		derivation_path: &str,
	) -> Result<Client, ClientError> {
		let descriptor = self.resolve(Chain::Solana, kind)?;
		if account_type != AccountType::Default {
			return Err(ClientError::unsupported_account_type(
				account_type.to_string(),
			));
		}

		let chain_provider = Arc::new(ChainProvider::new(descriptor.clone()));
		let mnemonic = Self::software_mnemonic(credential)?;
		let wallet_provider = WalletProvider::Hd(HdWalletProvider::new(
			mnemonic,
			derivation_path,
			chain_provider,
		)?);

		debug!(network = %descriptor.name, "solana client composed");
		Ok(Client::new().connect_wallet(Arc::new(wallet_provider)))
	}

	/// Shared shape for the mnemonic-only swap families (Near, Terra)
	///
	/// Hardware account types for these families are not in the supported
	/// set; requesting one fails fast, before any provider construction.
	async fn create_mnemonic_swap_client(
		&self,
		chain: Chain,
		kind: NetworkKind,
		credential: &AccountCredential,
		account_type: AccountType,
		derivation_path: &str,
	) -> Result<Client, ClientError> {
		let descriptor = self.resolve(chain, kind)?;
		if account_type != AccountType::Default {
			return Err(ClientError::unsupported_account_type(
				account_type.to_string(),
			));
		}

		let chain_provider = Arc::new(ChainProvider::new(descriptor.clone()));
		let mut swap_provider = SwapProvider::new(&descriptor);

		let mnemonic = Self::software_mnemonic(credential)?;
		let wallet_provider = WalletProvider::Hd(HdWalletProvider::new(
			mnemonic,
			derivation_path,
			chain_provider,
		)?);

		swap_provider.set_wallet(Arc::new(wallet_provider));
		debug!(network = %descriptor.name, "swap client composed");

		Ok(Client::new().connect_swap(Arc::new(swap_provider)))
	}
}
