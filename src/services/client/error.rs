//! Client construction error types and handling.
//!
//! This module provides the error handling system for client construction,
//! covering registry lookups, account-type selection, swap-provider binding
//! state and failures delegated from underlying providers.

use log::error;

use crate::models::{Chain, NetworkKind};

/// Represents possible errors that can occur during client construction
#[derive(Debug)]
pub enum ClientError {
	/// The requested chain and network pair is absent from the registry
	///
	/// Raised before any provider is constructed.
	UnknownNetwork(Chain, NetworkKind),

	/// The hardware account-type tag is not in the supported-options table
	///
	/// Raised before any transport session is opened.
	UnsupportedAccountType(String),

	/// A swap operation was attempted before a wallet provider was bound
	WalletNotBound,

	/// A failure raised by an underlying provider
	///
	/// The message is carried verbatim so caller diagnostics stay accurate.
	ProviderError(String),
}

impl ClientError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::UnknownNetwork(chain, kind) => {
				format!("Unknown network: {}/{}", chain, kind)
			}
			Self::UnsupportedAccountType(tag) => {
				format!("Account type {} not an option", tag)
			}
			Self::WalletNotBound => "No wallet bound to swap provider".to_string(),
			Self::ProviderError(msg) => format!("Provider error: {}", msg),
		}
	}

	/// Creates a new unknown network error with logging
	pub fn unknown_network(chain: Chain, kind: NetworkKind) -> Self {
		let error = Self::UnknownNetwork(chain, kind);
		error!("{}", error.format_message());
		error
	}

	/// Creates a new unsupported account type error with logging
	pub fn unsupported_account_type(tag: impl Into<String>) -> Self {
		let error = Self::UnsupportedAccountType(tag.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new wallet-not-bound error with logging
	pub fn wallet_not_bound() -> Self {
		let error = Self::WalletNotBound;
		error!("{}", error.format_message());
		error
	}

	/// Creates a new provider error with logging
	pub fn provider(msg: impl Into<String>) -> Self {
		let error = Self::ProviderError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

// Standard error trait implementations
impl std::fmt::Display for ClientError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for ClientError {}

/// Conversion from reqwest errors to ClientError
///
/// Transport failures surface from delegated providers; the original
/// message is kept verbatim.
impl From<reqwest::Error> for ClientError {
	fn from(err: reqwest::Error) -> Self {
		Self::provider(err.to_string())
	}
}

/// Conversion from serde_json errors to ClientError
impl From<serde_json::Error> for ClientError {
	fn from(err: serde_json::Error) -> Self {
		Self::provider(err.to_string())
	}
}
