//! Capability providers composed by the client factory.
//!
//! Each provider is scoped to one capability: chain access, fee
//! estimation, wallet signing, swap execution, NFT access, hardware
//! transport. The factory wires them together in a fixed dependency order;
//! nothing here holds shared mutable state across constructions.

mod chain;
mod fee;
mod nft;
mod swap;
mod transport;
mod wallet;

pub use chain::ChainProvider;
pub use fee::{FeeApiProvider, FeeEstimates, FeeProvider};
pub use nft::{NftProvider, NftProviderKind, NftVendorSettings};
pub use swap::{SwapOptions, SwapProvider};
pub use transport::{NoHardwareTransport, TransportCreator, TransportSession};
pub use wallet::{HdWalletProvider, LedgerWalletProvider, WalletProvider};
