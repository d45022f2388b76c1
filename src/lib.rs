//! # formalgraph
//!
//! The edge primitive of the formalgraph graph library. An [`Edge`] joins two
//! hashable node keys and is undirected, directed, or directed with a weight.
//! Graph containers rely on its equality and hashing to deduplicate edges.
#![warn(missing_docs)]

/// System constants
pub mod constants;

/// Configuration and logging
pub mod core;

/// Graph primitives
pub mod graph;

/// Type definitions and errors
pub mod types;

// Re-export commonly used items
pub use crate::core::{load_config_or_default, Config};
pub use graph::{Edge, Node, OrderedItem};
pub use types::{EdgeError, EdgeResult, ElementCount, Error, Result, ShorthandShape, Weight};

/// Re-exports used by the logging macros
#[doc(hidden)]
pub mod __private {
    pub use tracing;

    #[cfg(target_arch = "wasm32")]
    pub use web_sys;
}

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Install a tracing subscriber configured by `config`.
///
/// `RUST_LOG` takes precedence over the configured level. Fails if a global
/// subscriber is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(config: &Config) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .map_err(|e| Error::logging(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.logging.format.as_str() {
        "pretty" => builder.pretty().try_init(),
        "compact" => builder.compact().try_init(),
        _ => builder.try_init(),
    };
    installed.map_err(|e| Error::logging(e.to_string()))?;

    crate::log_info!("Initializing {} v{}", NAME, VERSION);
    Ok(())
}
