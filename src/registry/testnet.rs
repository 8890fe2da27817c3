//! Built-in testnet descriptors, derived from the mainnet definitions.

use crate::models::{ExplorerView, NetworkDescriptor};

use super::mainnet;
use super::overlay::{derive_testnet, TestnetOverlay};

pub(crate) fn bitcoin() -> NetworkDescriptor {
    derive_testnet(
        &mainnet::bitcoin(),
        TestnetOverlay {
            name: "Bitcoin Testnet".to_string(),
            network_id: "testnet".to_string(),
            rpc_urls: vec!["https://blockstream.info/testnet/api".to_string()],
            explorer_views: vec![ExplorerView {
                tx: "https://blockstream.info/testnet/tx/{hash}".to_string(),
                address: "https://blockstream.info/testnet/address/{address}".to_string(),
            }],
            // Testnet coins derive under SLIP-44 coin type 1
            coin_type: Some("1".to_string()),
            chain_id: None,
            scraper_urls: Some(vec!["https://blockstream.info/testnet/api".to_string()]),
            wallet_url: None,
            fee_api_url: None,
        },
    )
}

pub(crate) fn ethereum() -> NetworkDescriptor {
    derive_testnet(
        &mainnet::ethereum(),
        TestnetOverlay {
            name: "Rinkeby".to_string(),
            network_id: "rinkeby".to_string(),
            rpc_urls: vec!["https://rpc.ankr.com/eth_rinkeby".to_string()],
            explorer_views: vec![ExplorerView {
                tx: "https://rinkeby.etherscan.io/tx/{hash}".to_string(),
                address: "https://rinkeby.etherscan.io/address/{address}".to_string(),
            }],
            coin_type: None,
            chain_id: Some(4),
            scraper_urls: None,
            wallet_url: None,
            fee_api_url: None,
        },
    )
}

pub(crate) fn polygon() -> NetworkDescriptor {
    derive_testnet(
        &mainnet::polygon(),
        TestnetOverlay {
            name: "Mumbai".to_string(),
            network_id: "mumbai".to_string(),
            rpc_urls: vec!["https://rpc-mumbai.maticvigil.com".to_string()],
            explorer_views: vec![ExplorerView {
                tx: "https://mumbai.polygonscan.com/tx/{hash}".to_string(),
                address: "https://mumbai.polygonscan.com/address/{address}".to_string(),
            }],
            coin_type: None,
            chain_id: Some(80001),
            scraper_urls: None,
            wallet_url: None,
            fee_api_url: None,
        },
    )
}

pub(crate) fn rootstock() -> NetworkDescriptor {
    derive_testnet(
        &mainnet::rootstock(),
        TestnetOverlay {
            name: "Rootstock Testnet".to_string(),
            network_id: "testnet".to_string(),
            rpc_urls: vec!["https://public-node.testnet.rsk.co".to_string()],
            explorer_views: vec![ExplorerView {
                tx: "https://explorer.testnet.rsk.co/tx/{hash}".to_string(),
                address: "https://explorer.testnet.rsk.co/address/{address}".to_string(),
            }],
            coin_type: None,
            chain_id: Some(31),
            scraper_urls: None,
            wallet_url: None,
            fee_api_url: None,
        },
    )
}

pub(crate) fn near() -> NetworkDescriptor {
    derive_testnet(
        &mainnet::near(),
        TestnetOverlay {
            name: "Near Testnet".to_string(),
            network_id: "testnet".to_string(),
            rpc_urls: vec!["https://rpc.testnet.near.org".to_string()],
            explorer_views: vec![ExplorerView {
                tx: "https://explorer.testnet.near.org/transactions/{hash}".to_string(),
                address: "https://explorer.testnet.near.org/accounts/{address}".to_string(),
            }],
            coin_type: None,
            chain_id: None,
            scraper_urls: Some(vec!["https://helper.testnet.near.org".to_string()]),
            wallet_url: Some("https://wallet.testnet.near.org/".to_string()),
            fee_api_url: None,
        },
    )
}

pub(crate) fn terra() -> NetworkDescriptor {
    derive_testnet(
        &mainnet::terra(),
        TestnetOverlay {
            name: "Terra Testnet".to_string(),
            network_id: "bombay-12".to_string(),
            rpc_urls: vec!["https://bombay-lcd.terra.dev".to_string()],
            explorer_views: vec![ExplorerView {
                tx: "https://finder.terra.money/testnet/tx/{hash}".to_string(),
                address: "https://finder.terra.money/testnet/address/{address}".to_string(),
            }],
            coin_type: None,
            chain_id: None,
            scraper_urls: Some(vec!["https://bombay-fcd.terra.dev".to_string()]),
            wallet_url: None,
            fee_api_url: None,
        },
    )
}

pub(crate) fn solana() -> NetworkDescriptor {
    derive_testnet(
        &mainnet::solana(),
        TestnetOverlay {
            name: "Solana Devnet".to_string(),
            network_id: "devnet".to_string(),
            rpc_urls: vec!["https://api.devnet.solana.com".to_string()],
            explorer_views: vec![ExplorerView {
                tx: "https://explorer.solana.com/tx/{hash}?cluster=devnet".to_string(),
                address: "https://explorer.solana.com/address/{address}?cluster=devnet".to_string(),
            }],
            coin_type: None,
            chain_id: None,
            scraper_urls: None,
            wallet_url: None,
            fee_api_url: None,
        },
    )
}
