//! Configuration and logging

/// Crate configuration
pub mod config;

/// Cross-platform logging macros
pub mod logging;

// Re-export commonly used items
pub use config::{load_config_or_default, Config, LoggingConfig};
