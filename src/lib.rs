//! Multi-chain client configuration and factory layer.
//!
//! This crate composes wallet/swap clients for several chain families from
//! two cooperating pieces:
//!
//! - A **network registry**: static per-chain × per-network descriptors
//!   (RPC endpoints, explorer templates, coin types), with testnets derived
//!   from mainnet definitions through a typed overlay transform.
//! - A **client factory**: given a chain, a network kind and account
//!   material (mnemonic or hardware-wallet reference), wires a chain
//!   provider, an optional fee provider, a wallet provider and a swap
//!   provider into a single client handle, attaching an NFT provider for
//!   mapped EVM chains.
//!
//! Chain communication, signing and swap execution are delegated to the
//! capability providers; this layer owns configuration, selection and
//! composition.

pub mod models;
pub mod registry;
pub mod services;
pub mod utils;
