mod transports;

pub use transports::MockTransportCreator;
