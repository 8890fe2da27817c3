//! Utility modules for common functionality.
//!
//! - logging: tracing subscriber setup

pub mod logging;
