//! Blockchain identification models.
//!
//! This module contains the type definitions used to identify a chain and
//! the network flavor (mainnet/testnet) a client should be built for. Each
//! chain belongs to a chain family, which decides the provider wiring shape
//! used by the client factory.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported chain families
///
/// A family groups chains that share a provider interface shape: all EVM
/// chains are wired the same way, regardless of the concrete chain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
	/// Bitcoin-like chains (esplora-backed)
	Bitcoin,
	/// Ethereum Virtual Machine based chains
	Evm,
	/// Near protocol
	Near,
	/// Terra (Cosmos SDK based)
	Terra,
	/// Solana
	Solana,
}

/// Supported chains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
	Bitcoin,
	Ethereum,
	Polygon,
	Rootstock,
	Near,
	Terra,
	Solana,
}

impl Chain {
	/// Returns the chain family this chain belongs to
	pub fn family(&self) -> ChainFamily {
		match self {
			Self::Bitcoin => ChainFamily::Bitcoin,
			Self::Ethereum | Self::Polygon | Self::Rootstock => ChainFamily::Evm,
			Self::Near => ChainFamily::Near,
			Self::Terra => ChainFamily::Terra,
			Self::Solana => ChainFamily::Solana,
		}
	}

	/// All chains known to the registry, in declaration order
	pub fn all() -> &'static [Chain] {
		&[
			Self::Bitcoin,
			Self::Ethereum,
			Self::Polygon,
			Self::Rootstock,
			Self::Near,
			Self::Terra,
			Self::Solana,
		]
	}
}

impl fmt::Display for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Bitcoin => "bitcoin",
			Self::Ethereum => "ethereum",
			Self::Polygon => "polygon",
			Self::Rootstock => "rootstock",
			Self::Near => "near",
			Self::Terra => "terra",
			Self::Solana => "solana",
		};
		write!(f, "{}", name)
	}
}

impl FromStr for Chain {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"bitcoin" => Ok(Self::Bitcoin),
			"ethereum" => Ok(Self::Ethereum),
			"polygon" => Ok(Self::Polygon),
			"rootstock" => Ok(Self::Rootstock),
			"near" => Ok(Self::Near),
			"terra" => Ok(Self::Terra),
			"solana" => Ok(Self::Solana),
			other => Err(format!("unknown chain: {}", other)),
		}
	}
}

/// Network flavor a client is built against
///
/// The registry keys descriptors by `(Chain, NetworkKind)`; the factory
/// additionally uses the kind to decide whether production-only capabilities
/// (fee-API overrides) are attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
	Mainnet,
	Testnet,
}

impl fmt::Display for NetworkKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Mainnet => write!(f, "mainnet"),
			Self::Testnet => write!(f, "testnet"),
		}
	}
}

impl FromStr for NetworkKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"mainnet" => Ok(Self::Mainnet),
			"testnet" => Ok(Self::Testnet),
			other => Err(format!("unknown network kind: {}", other)),
		}
	}
}
