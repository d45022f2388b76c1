//! Graph edge implementation
//!
//! An [`Edge`] joins two node keys and is either undirected, directed, or
//! directed with a weight. Edges are immutable once built.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::node::Node;
use crate::log_debug;
use crate::types::{EdgeError, EdgeResult, Weight};

/// Direction and weight of an edge. There is no undirected weighted variant.
#[derive(Debug, Clone, Copy, PartialEq)]
enum EdgeKind {
    Undirected,
    Directed,
    Weighted(Weight),
}

impl EdgeKind {
    fn weight(self) -> Option<Weight> {
        match self {
            EdgeKind::Weighted(weight) => Some(weight),
            _ => None,
        }
    }
}

/// Graph edge between two nodes
///
/// Equality is order-sensitive and only ever holds between directed edges:
/// two undirected edges never compare equal, not even to themselves. Hashing
/// covers `(endpoint_a, endpoint_b, directed, weight)` in that order.
///
/// `Eq` is implemented so edges can key a `HashMap` or `HashSet`, but it is
/// not reflexive for undirected edges or NaN weights. Such keys can be
/// inserted, yet every insert adds a new entry and `get`/`contains` never
/// finds them again. Only directed edges with comparable weights deduplicate.
#[derive(Debug, Clone, Copy)]
pub struct Edge<N> {
    endpoint_a: N,
    endpoint_b: N,
    kind: EdgeKind,
}

impl<N: Node> Edge<N> {
    /// Create an edge from its raw parts.
    ///
    /// Fails with [`EdgeError::InvalidConfiguration`] when `directed` is false
    /// and a weight is given. Endpoints are stored as supplied.
    pub fn new(a: N, b: N, directed: bool, weight: Option<Weight>) -> EdgeResult<Self> {
        let kind = match (directed, weight) {
            (false, None) => EdgeKind::Undirected,
            (false, Some(weight)) => {
                let err = EdgeError::InvalidConfiguration { weight };
                log_debug!("Rejected edge construction: {}", err.kind());
                return Err(err);
            }
            (true, None) => EdgeKind::Directed,
            (true, Some(weight)) => EdgeKind::Weighted(weight),
        };

        Ok(Self {
            endpoint_a: a,
            endpoint_b: b,
            kind,
        })
    }

    /// Create an undirected, unweighted edge
    pub fn undirected(a: N, b: N) -> Self {
        Self {
            endpoint_a: a,
            endpoint_b: b,
            kind: EdgeKind::Undirected,
        }
    }

    /// Create a directed, unweighted edge `source -> target`
    pub fn directed(source: N, target: N) -> Self {
        Self {
            endpoint_a: source,
            endpoint_b: target,
            kind: EdgeKind::Directed,
        }
    }

    /// Create a directed edge `source -> target` carrying `weight`
    pub fn weighted(source: N, target: N, weight: Weight) -> Self {
        Self {
            endpoint_a: source,
            endpoint_b: target,
            kind: EdgeKind::Weighted(weight),
        }
    }

    /// Whether the edge is directed
    pub fn is_directed(&self) -> bool {
        !matches!(self.kind, EdgeKind::Undirected)
    }

    /// Whether the edge carries a weight
    pub fn is_weighted(&self) -> bool {
        matches!(self.kind, EdgeKind::Weighted(_))
    }

    /// Whether both endpoints are the same node
    pub fn is_self_loop(&self) -> bool {
        self.endpoint_a == self.endpoint_b
    }

    /// Source node of a directed edge
    pub fn source(&self) -> EdgeResult<&N> {
        self.require_directed()?;
        Ok(&self.endpoint_a)
    }

    /// Target node of a directed edge
    pub fn target(&self) -> EdgeResult<&N> {
        self.require_directed()?;
        Ok(&self.endpoint_b)
    }

    /// `(source, target)` of a directed edge
    pub fn endpoints(&self) -> EdgeResult<(&N, &N)> {
        self.require_directed()?;
        Ok((&self.endpoint_a, &self.endpoint_b))
    }

    /// Weight of a weighted edge
    pub fn weight(&self) -> EdgeResult<Weight> {
        self.kind.weight().ok_or_else(|| {
            let err = EdgeError::NotWeighted;
            log_debug!("Edge accessor misuse: {}", err.kind());
            err
        })
    }

    /// Whether `node` is one of the endpoints
    pub fn contains(&self, node: &N) -> bool {
        self.endpoint_a == *node || self.endpoint_b == *node
    }

    /// The endpoint across from `node`, or `None` if `node` is not on this edge.
    ///
    /// A self-loop returns the node itself. Works for undirected edges without
    /// revealing which endpoint was stored first.
    pub fn opposite(&self, node: &N) -> Option<&N> {
        if self.endpoint_a == *node {
            Some(&self.endpoint_b)
        } else if self.endpoint_b == *node {
            Some(&self.endpoint_a)
        } else {
            None
        }
    }

    fn require_directed(&self) -> EdgeResult<()> {
        if self.is_directed() {
            return Ok(());
        }
        let err = EdgeError::NotDirected;
        log_debug!("Edge accessor misuse: {}", err.kind());
        Err(err)
    }
}

impl<N: Node> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        let same_kind = match (self.kind, other.kind) {
            (EdgeKind::Directed, EdgeKind::Directed) => true,
            (EdgeKind::Weighted(w1), EdgeKind::Weighted(w2)) => w1 == w2,
            // Undirected edges never compare equal
            _ => false,
        };

        same_kind && self.endpoint_a == other.endpoint_a && self.endpoint_b == other.endpoint_b
    }
}

impl<N: Node> Eq for Edge<N> {}

impl<N: Node> Hash for Edge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoint_a.hash(state);
        self.endpoint_b.hash(state);
        self.is_directed().hash(state);
        self.kind.weight().map(weight_bits).hash(state);
    }
}

/// Bit pattern of a weight with `-0.0` folded into `0.0`, so equal weights hash alike
fn weight_bits(weight: Weight) -> u64 {
    if weight == 0.0 {
        0.0_f64.to_bits()
    } else {
        weight.to_bits()
    }
}

impl<N: Node + fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let connector = match self.kind {
            EdgeKind::Undirected => "--",
            _ if self.is_self_loop() => "<->",
            _ => "->",
        };
        write!(f, "{} {} {}", self.endpoint_a, connector, self.endpoint_b)?;

        if let EdgeKind::Weighted(weight) = self.kind {
            write!(f, " ({:?})", weight)?;
        }
        Ok(())
    }
}
