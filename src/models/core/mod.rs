//! Core domain models for the client configuration layer.
//!
//! This module contains the fundamental data structures that represent:
//! - Networks: static per-network descriptors (endpoints, ids, templates)
//! - Accounts: account-type discriminators and account material

mod account;
mod network;

pub use account::{
    ledger_bitcoin_option, AccountCredential, AccountType, BitcoinAddressType, HardwareAccount,
    LedgerBitcoinOption, Mnemonic, LEDGER_BITCOIN_OPTIONS,
};
pub use network::{ExplorerView, NetworkDescriptor};
