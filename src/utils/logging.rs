//! Logging setup for the crate.
//!
//! Uses `tracing_subscriber` with an environment-driven filter. The level
//! defaults to `info` and is overridden through `RUST_LOG`; the binary maps
//! its `--log-level` flag onto that variable before calling in here.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Initializes the global subscriber, writing to stdout
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stdout)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.compact(),
				),
		)
		.try_init()?;
	Ok(())
}
