/// Type definitions shared across formalgraph
///
/// Error types and the numeric weight carried by directed edges.

/// Error types
pub mod error;

/// Numeric weight carried by a weighted (directed) edge
pub type Weight = f64;

// Re-export commonly used types for convenience
pub use error::{EdgeError, EdgeResult, ElementCount, Error, Result, ShorthandShape};
