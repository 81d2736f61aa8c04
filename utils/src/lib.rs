//! Shared utilities for Meridian binaries.

pub mod logging;

pub use logging::{init_logging, LogFormat};
