use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Account type discriminator
///
/// Selects the wallet provider variant during client construction: `Default`
/// builds a software wallet from the mnemonic, the ledger variants build a
/// hardware-backed wallet. Serialized as the snake_case tag strings consumed
/// at the API boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Default,
    BitcoinLedgerNativeSegwit,
    BitcoinLedgerNestedSegwit,
    BitcoinLedgerLegacy,
    EthereumLedger,
    RskLedger,
}

impl AccountType {
    /// True for any hardware-wallet account type
    pub fn is_hardware(&self) -> bool {
        !matches!(self, Self::Default)
    }

    /// True for the Bitcoin ledger variants
    pub fn is_bitcoin_ledger(&self) -> bool {
        matches!(
            self,
            Self::BitcoinLedgerNativeSegwit
                | Self::BitcoinLedgerNestedSegwit
                | Self::BitcoinLedgerLegacy
        )
    }

    /// True for the EVM ledger variants
    pub fn is_evm_ledger(&self) -> bool {
        matches!(self, Self::EthereumLedger | Self::RskLedger)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Default => "default",
            Self::BitcoinLedgerNativeSegwit => "bitcoin_ledger_native_segwit",
            Self::BitcoinLedgerNestedSegwit => "bitcoin_ledger_nested_segwit",
            Self::BitcoinLedgerLegacy => "bitcoin_ledger_legacy",
            Self::EthereumLedger => "ethereum_ledger",
            Self::RskLedger => "rsk_ledger",
        };
        write!(f, "{}", tag)
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "bitcoin_ledger_native_segwit" => Ok(Self::BitcoinLedgerNativeSegwit),
            "bitcoin_ledger_nested_segwit" => Ok(Self::BitcoinLedgerNestedSegwit),
            "bitcoin_ledger_legacy" => Ok(Self::BitcoinLedgerLegacy),
            "ethereum_ledger" => Ok(Self::EthereumLedger),
            "rsk_ledger" => Ok(Self::RskLedger),
            other => Err(format!("unknown account type: {}", other)),
        }
    }
}

/// Bitcoin address encoding selected by a ledger account type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BitcoinAddressType {
    Bech32,
    P2shSegwit,
    Legacy,
}

/// Supported hardware address-type option for a Bitcoin ledger account type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerBitcoinOption {
    pub account_type: AccountType,
    pub address_type: BitcoinAddressType,
}

lazy_static! {
    /// Fixed table of supported Bitcoin ledger options, keyed by account type
    pub static ref LEDGER_BITCOIN_OPTIONS: Vec<LedgerBitcoinOption> = vec![
        LedgerBitcoinOption {
            account_type: AccountType::BitcoinLedgerNativeSegwit,
            address_type: BitcoinAddressType::Bech32,
        },
        LedgerBitcoinOption {
            account_type: AccountType::BitcoinLedgerNestedSegwit,
            address_type: BitcoinAddressType::P2shSegwit,
        },
        LedgerBitcoinOption {
            account_type: AccountType::BitcoinLedgerLegacy,
            address_type: BitcoinAddressType::Legacy,
        },
    ];
}

/// Looks up the address-type option for a Bitcoin ledger account type
///
/// Returns `None` when the account type is not present in the supported
/// options table; the factory treats that as a fatal configuration error.
pub fn ledger_bitcoin_option(account_type: AccountType) -> Option<LedgerBitcoinOption> {
    LEDGER_BITCOIN_OPTIONS
        .iter()
        .find(|option| option.account_type == account_type)
        .copied()
}

/// Seed phrase for software wallets
///
/// The phrase is wiped from memory on drop. `Debug` is redacted so the
/// phrase never reaches logs.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Mnemonic(String);

impl Mnemonic {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self(phrase.into())
    }

    pub fn phrase(&self) -> &str {
        &self.0
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic(<redacted>)")
    }
}

/// Hardware-wallet account reference
///
/// Carries the extended public material used for hardware derivation; the
/// private key never leaves the device.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HardwareAccount {
    pub public_key: String,
    pub chain_code: String,
}

/// Account material supplied by the caller for client construction
///
/// Exactly one side is consulted per construction: the mnemonic for software
/// wallets, the hardware account reference for ledger wallets.
#[derive(Debug, Clone)]
pub enum AccountCredential {
    Mnemonic(Mnemonic),
    Hardware(HardwareAccount),
}

impl AccountCredential {
    pub fn from_phrase(phrase: impl Into<String>) -> Self {
        Self::Mnemonic(Mnemonic::new(phrase))
    }

    pub fn mnemonic(&self) -> Option<&Mnemonic> {
        match self {
            Self::Mnemonic(mnemonic) => Some(mnemonic),
            Self::Hardware(_) => None,
        }
    }

    pub fn hardware(&self) -> Option<&HardwareAccount> {
        match self {
            Self::Mnemonic(_) => None,
            Self::Hardware(account) => Some(account),
        }
    }
}
