//! Network registry inspection entry point.
//!
//! Small operational binary around the library: lists the registered
//! networks and validates descriptor config directories before they are
//! shipped to an embedding application.

use std::env::{set_var, var};
use std::path::Path;

use chainclient::models::{ConfigLoader, NetworkDescriptor};
use chainclient::registry::NetworkRegistry;
use chainclient::utils::logging::setup_logging;

use clap::{Arg, Command};
use dotenvy::dotenv;
use tracing::{error, info};

fn list_networks(registry: &NetworkRegistry) {
	let mut entries: Vec<_> = registry.all().collect();
	entries.sort_by_key(|((chain, kind), _)| (chain.to_string(), kind.to_string()));

	for ((chain, kind), descriptor) in entries {
		info!(
			"{}/{} -> {} (network_id={}, rpc={})",
			chain,
			kind,
			descriptor.name,
			descriptor.network_id,
			descriptor.rpc_urls.first().map(String::as_str).unwrap_or("-"),
		);
	}
}

fn validate_config_dir(path: &str) -> Result<(), Box<dyn std::error::Error>> {
	let loaded: std::collections::HashMap<String, NetworkDescriptor> =
		NetworkDescriptor::load_all(Some(Path::new(path)))?;
	info!("{}: {} descriptor file(s) valid", path, loaded.len());

	let registry = NetworkRegistry::with_config_dir(Path::new(path))?;
	info!("registry merged, {} networks total", registry.len());
	Ok(())
}

fn main() {
	let matches = Command::new("chainclient")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Network registry and client factory for multi-chain wallet clients")
		.arg(
			Arg::new("networks")
				.long("networks")
				.help("List the built-in network descriptors")
				.action(clap::ArgAction::SetTrue),
		)
		.arg(
			Arg::new("validate")
				.long("validate")
				.help("Validate a network descriptor config directory")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("RUST_LOG").is_err() {
			set_var("RUST_LOG", level);
		}
	}

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	if let Some(path) = matches.get_one::<String>("validate") {
		if let Err(e) = validate_config_dir(path) {
			error!("config validation failed: {}", e);
			std::process::exit(1);
		}
		return;
	}

	// --networks, and the default action with no flags: list the registry
	let registry = NetworkRegistry::builtin();
	list_networks(&registry);
}
