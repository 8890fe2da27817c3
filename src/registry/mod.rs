//! Network registry.
//!
//! The registry is the static, declarative description of every supported
//! `(chain, network kind)` pair. It is constructed once, is read-only
//! afterwards, and is safe for concurrent reads from multiple client
//! constructions. Built-in descriptors can be extended or overridden by
//! JSON files in a config directory.

use std::{collections::HashMap, path::Path};

use crate::models::{Chain, ConfigError, ConfigLoader, NetworkDescriptor, NetworkKind};

mod mainnet;
mod overlay;
mod testnet;

pub use overlay::{derive_testnet, TestnetOverlay};

/// Registry key: one descriptor per chain and network kind
pub type NetworkKey = (Chain, NetworkKind);

/// Read-only map of network descriptors
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: HashMap<NetworkKey, NetworkDescriptor>,
}

impl NetworkRegistry {
    /// Creates an empty registry
    ///
    /// Embedding applications that manage their own descriptor set start
    /// here and [`insert`](Self::insert) descriptors explicitly.
    pub fn empty() -> Self {
        NetworkRegistry {
            networks: HashMap::new(),
        }
    }

    /// Registers (or replaces) a descriptor under the given key
    pub fn insert(&mut self, chain: Chain, kind: NetworkKind, descriptor: NetworkDescriptor) {
        self.networks.insert((chain, kind), descriptor);
    }

    /// Builds the registry from the built-in descriptor set
    ///
    /// Every chain known to [`Chain::all`] gets a mainnet and a testnet
    /// descriptor; testnets are derived from the mainnet definitions via
    /// the overlay transform.
    pub fn builtin() -> Self {
        let mut networks = HashMap::new();
        for chain in Chain::all() {
            networks.insert((*chain, NetworkKind::Mainnet), builtin_mainnet(*chain));
            networks.insert((*chain, NetworkKind::Testnet), builtin_testnet(*chain));
        }
        NetworkRegistry { networks }
    }

    /// Builds the registry from the built-ins plus a config directory
    ///
    /// Each `<chain>_<kind>.json` file in the directory replaces (or adds)
    /// the descriptor under that key. A file whose stem does not name a
    /// known chain and network kind is a configuration error.
    pub fn with_config_dir(path: &Path) -> Result<Self, ConfigError> {
        let mut registry = Self::builtin();
        let loaded: HashMap<String, NetworkDescriptor> = NetworkDescriptor::load_all(Some(path))?;

        for (stem, descriptor) in loaded {
            let key = parse_network_key(&stem)?;
            registry.networks.insert(key, descriptor);
        }

        Ok(registry)
    }

    /// Looks up the descriptor for a chain and network kind
    pub fn get(&self, chain: Chain, kind: NetworkKind) -> Option<&NetworkDescriptor> {
        self.networks.get(&(chain, kind))
    }

    /// Iterates over all registered descriptors
    pub fn all(&self) -> impl Iterator<Item = (&NetworkKey, &NetworkDescriptor)> {
        self.networks.iter()
    }

    /// Number of registered descriptors
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

fn builtin_mainnet(chain: Chain) -> NetworkDescriptor {
    match chain {
        Chain::Bitcoin => mainnet::bitcoin(),
        Chain::Ethereum => mainnet::ethereum(),
        Chain::Polygon => mainnet::polygon(),
        Chain::Rootstock => mainnet::rootstock(),
        Chain::Near => mainnet::near(),
        Chain::Terra => mainnet::terra(),
        Chain::Solana => mainnet::solana(),
    }
}

fn builtin_testnet(chain: Chain) -> NetworkDescriptor {
    match chain {
        Chain::Bitcoin => testnet::bitcoin(),
        Chain::Ethereum => testnet::ethereum(),
        Chain::Polygon => testnet::polygon(),
        Chain::Rootstock => testnet::rootstock(),
        Chain::Near => testnet::near(),
        Chain::Terra => testnet::terra(),
        Chain::Solana => testnet::solana(),
    }
}

/// Parses a descriptor file stem (`bitcoin_testnet`) into a registry key
fn parse_network_key(stem: &str) -> Result<NetworkKey, ConfigError> {
    let (chain, kind) = stem.rsplit_once('_').ok_or_else(|| {
        ConfigError::key_error(format!(
            "{}: expected <chain>_<kind>, e.g. bitcoin_testnet",
            stem
        ))
    })?;

    let chain: Chain = chain
        .parse()
        .map_err(|e: String| ConfigError::key_error(format!("{}: {}", stem, e)))?;
    let kind: NetworkKind = kind
        .parse()
        .map_err(|e: String| ConfigError::key_error(format!("{}: {}", stem, e)))?;

    Ok((chain, kind))
}
