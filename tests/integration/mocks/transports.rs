use chainclient::services::client::{ClientError, TransportCreator, TransportSession};

use async_trait::async_trait;
use mockall::mock;

mock! {
	pub TransportCreator {}

	#[async_trait]
	impl TransportCreator for TransportCreator {
		async fn open(&self) -> Result<TransportSession, ClientError>;
	}
}
