//! Domain models and data structures for client construction.
//!
//! This module contains all the core data structures used throughout the crate:
//!
//! - `blockchain`: chain, chain family and network kind identification
//! - `config`: descriptor file loading and validation
//! - `core`: core domain models (NetworkDescriptor, account material)

mod blockchain;
mod config;
mod core;

// Re-export blockchain types
pub use blockchain::{Chain, ChainFamily, NetworkKind};

// Re-export core types
pub use core::{
    ledger_bitcoin_option, AccountCredential, AccountType, BitcoinAddressType, ExplorerView,
    HardwareAccount, LedgerBitcoinOption, Mnemonic, NetworkDescriptor, LEDGER_BITCOIN_OPTIONS,
};

// Re-export config types
pub use config::{ConfigError, ConfigLoader};
