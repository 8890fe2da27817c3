//! Built-in mainnet descriptors.
//!
//! Endpoint URLs here are the public defaults; deployments with dedicated
//! endpoints or API keys override them through the config directory.

use crate::models::{ExplorerView, NetworkDescriptor};

pub(crate) fn bitcoin() -> NetworkDescriptor {
    NetworkDescriptor {
        name: "Bitcoin".to_string(),
        network_id: "mainnet".to_string(),
        coin_type: "0".to_string(),
        is_testnet: false,
        chain_id: None,
        rpc_urls: vec!["https://blockstream.info/api".to_string()],
        scraper_urls: vec!["https://blockstream.info/api".to_string()],
        explorer_views: vec![ExplorerView {
            tx: "https://blockstream.info/tx/{hash}".to_string(),
            address: "https://blockstream.info/address/{address}".to_string(),
        }],
        wallet_url: None,
        fee_api_url: Some("https://mempool.space/api/v1/fees/recommended".to_string()),
    }
}

pub(crate) fn ethereum() -> NetworkDescriptor {
    NetworkDescriptor {
        name: "Ethereum".to_string(),
        network_id: "mainnet".to_string(),
        coin_type: "60".to_string(),
        is_testnet: false,
        chain_id: Some(1),
        rpc_urls: vec![
            "https://cloudflare-eth.com".to_string(),
            "https://ethereum-rpc.publicnode.com".to_string(),
        ],
        scraper_urls: vec![],
        explorer_views: vec![ExplorerView {
            tx: "https://etherscan.io/tx/{hash}".to_string(),
            address: "https://etherscan.io/address/{address}".to_string(),
        }],
        wallet_url: None,
        fee_api_url: Some("https://ethgasstation.info/api/ethgasAPI.json".to_string()),
    }
}

pub(crate) fn polygon() -> NetworkDescriptor {
    NetworkDescriptor {
        name: "Polygon".to_string(),
        network_id: "mainnet".to_string(),
        coin_type: "60".to_string(),
        is_testnet: false,
        chain_id: Some(137),
        rpc_urls: vec!["https://polygon-rpc.com".to_string()],
        scraper_urls: vec![],
        explorer_views: vec![ExplorerView {
            tx: "https://polygonscan.com/tx/{hash}".to_string(),
            address: "https://polygonscan.com/address/{address}".to_string(),
        }],
        wallet_url: None,
        fee_api_url: Some("https://gasstation-mainnet.matic.network/v2".to_string()),
    }
}

pub(crate) fn rootstock() -> NetworkDescriptor {
    NetworkDescriptor {
        name: "Rootstock".to_string(),
        network_id: "mainnet".to_string(),
        coin_type: "137".to_string(),
        is_testnet: false,
        chain_id: Some(30),
        rpc_urls: vec!["https://public-node.rsk.co".to_string()],
        scraper_urls: vec![],
        explorer_views: vec![ExplorerView {
            tx: "https://explorer.rsk.co/tx/{hash}".to_string(),
            address: "https://explorer.rsk.co/address/{address}".to_string(),
        }],
        wallet_url: None,
        fee_api_url: None,
    }
}

pub(crate) fn near() -> NetworkDescriptor {
    NetworkDescriptor {
        name: "Near".to_string(),
        network_id: "mainnet".to_string(),
        coin_type: "397".to_string(),
        is_testnet: false,
        chain_id: None,
        rpc_urls: vec!["https://rpc.mainnet.near.org".to_string()],
        scraper_urls: vec!["https://helper.mainnet.near.org".to_string()],
        explorer_views: vec![ExplorerView {
            tx: "https://explorer.near.org/transactions/{hash}".to_string(),
            address: "https://explorer.near.org/accounts/{address}".to_string(),
        }],
        wallet_url: Some("https://wallet.near.org/".to_string()),
        fee_api_url: None,
    }
}

pub(crate) fn terra() -> NetworkDescriptor {
    NetworkDescriptor {
        name: "Terra".to_string(),
        network_id: "columbus-5".to_string(),
        coin_type: "330".to_string(),
        is_testnet: false,
        chain_id: None,
        rpc_urls: vec!["https://lcd.terra.dev".to_string()],
        scraper_urls: vec!["https://fcd.terra.dev".to_string()],
        explorer_views: vec![ExplorerView {
            tx: "https://finder.terra.money/mainnet/tx/{hash}".to_string(),
            address: "https://finder.terra.money/mainnet/address/{address}".to_string(),
        }],
        wallet_url: None,
        fee_api_url: None,
    }
}

pub(crate) fn solana() -> NetworkDescriptor {
    NetworkDescriptor {
        name: "Solana".to_string(),
        network_id: "mainnet".to_string(),
        coin_type: "501".to_string(),
        is_testnet: false,
        chain_id: None,
        rpc_urls: vec!["https://api.mainnet-beta.solana.com".to_string()],
        scraper_urls: vec![],
        explorer_views: vec![ExplorerView {
            tx: "https://explorer.solana.com/tx/{hash}".to_string(),
            address: "https://explorer.solana.com/address/{address}".to_string(),
        }],
        wallet_url: None,
        fee_api_url: None,
    }
}
