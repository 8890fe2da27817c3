//! Wallet providers.
//!
//! Two variants over the same capability set: a software wallet derived
//! from a seed phrase, and a hardware-backed wallet holding an open
//! transport session. Key derivation and signing are delegated to the
//! wallet backend; this layer carries the wiring state the factory
//! composes.

use std::sync::Arc;

use crate::models::{BitcoinAddressType, HardwareAccount, Mnemonic};
use crate::services::client::{error::ClientError, providers::chain::ChainProvider};

use super::transport::TransportSession;

/// Software wallet provider derived from a mnemonic
pub struct HdWalletProvider {
	mnemonic: Mnemonic,
	derivation_path: String,
	chain: Arc<ChainProvider>,
}

impl HdWalletProvider {
	/// Creates a new software wallet provider
	///
	/// # Errors
	/// * `ClientError::ProviderError` if the phrase has an invalid word
	///   count - the wallet backend's error, propagated unchanged
	pub fn new(
		mnemonic: Mnemonic,
		derivation_path: impl Into<String>,
		chain: Arc<ChainProvider>,
	) -> Result<Self, ClientError> {
		match mnemonic.word_count() {
			12 | 15 | 18 | 21 | 24 => {}
			n => {
				return Err(ClientError::provider(format!(
					"invalid mnemonic length: {} words",
					n
				)))
			}
		}

		Ok(Self {
			mnemonic,
			derivation_path: derivation_path.into(),
			chain,
		})
	}

	pub fn derivation_path(&self) -> &str {
		&self.derivation_path
	}

	pub fn mnemonic(&self) -> &Mnemonic {
		&self.mnemonic
	}
}

/// Hardware-backed wallet provider holding an open transport session
pub struct LedgerWalletProvider {
	derivation_path: String,
	address_type: Option<BitcoinAddressType>,
	account: Option<HardwareAccount>,
	session: TransportSession,
	chain: Arc<ChainProvider>,
}

impl LedgerWalletProvider {
	pub fn new(
		derivation_path: impl Into<String>,
		address_type: Option<BitcoinAddressType>,
		account: Option<HardwareAccount>,
		session: TransportSession,
		chain: Arc<ChainProvider>,
	) -> Self {
		Self {
			derivation_path: derivation_path.into(),
			address_type,
			account,
			session,
			chain,
		}
	}

	pub fn derivation_path(&self) -> &str {
		&self.derivation_path
	}

	pub fn address_type(&self) -> Option<BitcoinAddressType> {
		self.address_type
	}

	pub fn account(&self) -> Option<&HardwareAccount> {
		self.account.as_ref()
	}

	pub fn session(&self) -> &TransportSession {
		&self.session
	}
}

/// Wallet provider variant selected by the account-type discriminator
pub enum WalletProvider {
	Hd(HdWalletProvider),
	Ledger(LedgerWalletProvider),
}

impl WalletProvider {
	pub fn is_hardware(&self) -> bool {
		matches!(self, Self::Ledger(_))
	}

	pub fn derivation_path(&self) -> &str {
		match self {
			Self::Hd(wallet) => wallet.derivation_path(),
			Self::Ledger(wallet) => wallet.derivation_path(),
		}
	}

	/// The chain provider this wallet is bound to
	pub fn chain(&self) -> &Arc<ChainProvider> {
		match self {
			Self::Hd(wallet) => &wallet.chain,
			Self::Ledger(wallet) => &wallet.chain,
		}
	}
}
