//! Service layer of the crate.
//!
//! - `client`: client factory, capability providers and composition

pub mod client;
