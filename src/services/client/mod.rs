//! Client construction interfaces and implementations.
//!
//! Provides the composition layer between the network registry and the
//! capability providers. Includes:
//!
//! - Per-chain-family factory entry points
//! - Capability providers (chain, fee, wallet, swap, NFT, transport)
//! - The composed client handle
//! - Error handling for client construction

mod client;
mod error;
mod factory;
mod providers;

pub use client::Client;
pub use error::ClientError;
pub use factory::ClientFactory;
pub use providers::{
	ChainProvider, FeeApiProvider, FeeEstimates, FeeProvider, HdWalletProvider,
	LedgerWalletProvider, NftProvider, NftProviderKind, NftVendorSettings, NoHardwareTransport,
	SwapOptions, SwapProvider, TransportCreator, TransportSession, WalletProvider,
};
