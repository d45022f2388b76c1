//! Error types and handling for formalgraph
//!
//! Edge contract violations are reported through [`EdgeError`]. The crate-level
//! [`Error`] wraps them together with configuration and logging setup failures.

use std::fmt;
use thiserror::Error;

use super::Weight;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Result type for edge construction and accessors
pub type EdgeResult<T> = std::result::Result<T, EdgeError>;

/// Main error type for formalgraph
#[derive(Error, Debug)]
pub enum Error {
    /// Edge construction or access errors
    #[error("Edge error: {0}")]
    Edge(#[from] EdgeError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Which shorthand representation was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShorthandShape {
    /// Ordered sequence `(a, b)` or `(a, b, w)`
    OrderedPair,
    /// Unordered set `{a}` or `{a, b}`
    UnorderedPair,
}

impl fmt::Display for ShorthandShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShorthandShape::OrderedPair => write!(f, "edge tuple"),
            ShorthandShape::UnorderedPair => write!(f, "edge set"),
        }
    }
}

/// Number of elements found in a rejected shorthand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementCount {
    /// The input held exactly this many elements
    Exactly(usize),
    /// The input held more than this many elements; the rest was not read
    MoreThan(usize),
}

impl fmt::Display for ElementCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementCount::Exactly(n) => write!(f, "{} elements", n),
            ElementCount::MoreThan(n) => write!(f, "more than {} elements", n),
        }
    }
}

/// Edge contract violations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EdgeError {
    /// An undirected edge was given a weight
    #[error("Undirected edges cannot be weighted (got weight {weight})")]
    InvalidConfiguration {
        /// The rejected weight
        weight: Weight,
    },

    /// `source`/`target` accessed on an undirected edge
    #[error("This edge is not directed")]
    NotDirected,

    /// `weight` accessed on an unweighted edge
    #[error("This edge is not weighted")]
    NotWeighted,

    /// Shorthand input of an unsupported size or shape
    #[error("Invalid {shape} with {len}")]
    InvalidShorthand {
        /// Shorthand kind that was rejected
        shape: ShorthandShape,
        /// Number of elements supplied
        len: ElementCount,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    /// Check if this error is an edge contract violation
    pub fn is_edge_error(&self) -> bool {
        matches!(self, Error::Edge(_))
    }
}

impl EdgeError {
    /// Short, stable name of the failure kind, used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            EdgeError::InvalidConfiguration { .. } => "invalid_configuration",
            EdgeError::NotDirected => "not_directed",
            EdgeError::NotWeighted => "not_weighted",
            EdgeError::InvalidShorthand { .. } => "invalid_shorthand",
        }
    }

    /// Check if this error came from misusing an accessor on the wrong variant
    pub fn is_accessor_misuse(&self) -> bool {
        matches!(self, EdgeError::NotDirected | EdgeError::NotWeighted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_violation() {
        let err = EdgeError::InvalidConfiguration { weight: 2.5 };
        assert_eq!(err.to_string(), "Undirected edges cannot be weighted (got weight 2.5)");
        assert_eq!(EdgeError::NotDirected.to_string(), "This edge is not directed");
        assert_eq!(EdgeError::NotWeighted.to_string(), "This edge is not weighted");

        let err = EdgeError::InvalidShorthand {
            shape: ShorthandShape::UnorderedPair,
            len: ElementCount::Exactly(3),
        };
        assert_eq!(err.to_string(), "Invalid edge set with 3 elements");

        let err = EdgeError::InvalidShorthand {
            shape: ShorthandShape::OrderedPair,
            len: ElementCount::MoreThan(3),
        };
        assert_eq!(err.to_string(), "Invalid edge tuple with more than 3 elements");
    }

    #[test]
    fn edge_errors_convert_into_crate_error() {
        let err: Error = EdgeError::NotWeighted.into();
        assert!(err.is_edge_error());
        assert_eq!(err.to_string(), "Edge error: This edge is not weighted");
        assert!(!Error::config("bad level").is_edge_error());
    }

    #[test]
    fn accessor_misuse_classification() {
        assert!(EdgeError::NotDirected.is_accessor_misuse());
        assert!(EdgeError::NotWeighted.is_accessor_misuse());
        assert!(!EdgeError::InvalidConfiguration { weight: 1.0 }.is_accessor_misuse());
        assert_eq!(EdgeError::NotDirected.kind(), "not_directed");
    }
}
