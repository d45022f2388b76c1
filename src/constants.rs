//! Constants used throughout formalgraph

/// Default configuration file looked up by `Config::load`
pub const CONFIG_FILE_NAME: &str = "formalgraph.toml";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "FORMALGRAPH_LOG_LEVEL";

/// Environment variable overriding the log format
pub const ENV_LOG_FORMAT: &str = "FORMALGRAPH_LOG_FORMAT";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log format
pub const DEFAULT_LOG_FORMAT: &str = "pretty";

/// Accepted log levels
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Accepted log formats
pub const LOG_FORMATS: [&str; 3] = ["pretty", "compact", "full"];
