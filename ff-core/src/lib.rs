//! Facade Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other facade crates:
//! - Application configuration (app credentials, Graph endpoints, timeouts)
//! - A single error type covering every failure the facade can surface
//! - Structured logging with tracing
//! - Platform directory lookup and common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, GraphConfig};
pub use error::{FbError, FbResult};
pub use logging::init_logging;
pub use platform::Platform;
