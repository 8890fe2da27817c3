//! Hardware transport session handling.
//!
//! The transport creator is an explicitly injected dependency of the client
//! factory rather than process-wide shared state, so unrelated client
//! constructions stay decoupled and tests can substitute their own creator.

use async_trait::async_trait;
use tracing::debug;

use crate::services::client::error::ClientError;

/// Opens hardware transport sessions
///
/// Implementations wrap a concrete device transport (HID, bridge, …). The
/// factory opens a session only for hardware account types, and only after
/// the account type has been validated against the supported-options table.
#[async_trait]
pub trait TransportCreator: Send + Sync {
	/// Opens a session to the hardware device
	///
	/// # Returns
	/// * `Result<TransportSession, ClientError>` - Open session or the
	///   device error, propagated verbatim
	async fn open(&self) -> Result<TransportSession, ClientError>;
}

/// An open hardware transport session
///
/// Released on drop, so a construction failure after acquisition cannot
/// leak the device handle.
#[derive(Debug)]
pub struct TransportSession {
	device: String,
}

impl TransportSession {
	pub fn new(device: impl Into<String>) -> Self {
		let session = Self {
			device: device.into(),
		};
		debug!(device = %session.device, "hardware transport session opened");
		session
	}

	/// Identifier of the device this session is attached to
	pub fn device(&self) -> &str {
		&self.device
	}
}

impl Drop for TransportSession {
	fn drop(&mut self) {
		debug!(device = %self.device, "hardware transport session released");
	}
}

/// Transport creator for software-only deployments
///
/// Always fails: embedding applications without hardware support inject
/// this, and any ledger account type surfaces a provider error instead of
/// hanging on a device that cannot exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHardwareTransport;

#[async_trait]
impl TransportCreator for NoHardwareTransport {
	async fn open(&self) -> Result<TransportSession, ClientError> {
		Err(ClientError::provider("no hardware transport configured"))
	}
}
