//! Shorthand edge constructors
//!
//! Directed edges can be built from an ordered sequence `(a, b)` or
//! `(a, b, w)`. Undirected edges can be built from a set holding one node (a
//! self-loop) or two nodes.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use super::edge::Edge;
use super::node::Node;
use crate::log_debug;
use crate::types::{EdgeError, EdgeResult, ElementCount, ShorthandShape, Weight};

/// One element of an ordered edge shorthand
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderedItem<N> {
    /// An endpoint
    Node(N),
    /// The trailing weight
    Weight(Weight),
}

impl<N: Node> Edge<N> {
    /// Build a directed edge from an ordered sequence.
    ///
    /// `[Node(a), Node(b)]` gives `a -> b`, `[Node(a), Node(b), Weight(w)]`
    /// gives `a -> b` with weight `w`. Anything else fails with
    /// [`EdgeError::InvalidShorthand`]. At most four items are read, so an
    /// unbounded iterator is rejected rather than drained.
    pub fn from_ordered_pair<I>(items: I) -> EdgeResult<Self>
    where
        I: IntoIterator<Item = OrderedItem<N>>,
    {
        let mut items = items.into_iter().fuse();
        let first = items.next();
        let second = items.next();
        let third = items.next();
        let overflow = items.next().is_some();

        match (first, second, third, overflow) {
            (Some(OrderedItem::Node(a)), Some(OrderedItem::Node(b)), None, false) => {
                Ok(Self::directed(a, b))
            }
            (
                Some(OrderedItem::Node(a)),
                Some(OrderedItem::Node(b)),
                Some(OrderedItem::Weight(weight)),
                false,
            ) => Ok(Self::weighted(a, b, weight)),
            (_, _, _, true) => Err(invalid_shorthand(
                ShorthandShape::OrderedPair,
                ElementCount::MoreThan(3),
            )),
            (first, second, third, false) => {
                let len = [first.is_some(), second.is_some(), third.is_some()]
                    .into_iter()
                    .filter(|present| *present)
                    .count();
                Err(invalid_shorthand(ShorthandShape::OrderedPair, ElementCount::Exactly(len)))
            }
        }
    }

    /// Build an undirected edge from a set of one or two nodes.
    ///
    /// A single node yields a self-loop. Two nodes are stored in the set's
    /// iteration order. Other sizes fail with [`EdgeError::InvalidShorthand`].
    pub fn from_unordered_pair<S>(set: HashSet<N, S>) -> EdgeResult<Self>
    where
        N: Clone,
        S: BuildHasher,
    {
        let len = set.len();
        Self::from_unique_members(set, len)
    }

    /// Same as [`Edge::from_unordered_pair`] for an ordered set
    pub fn from_unordered_btree(set: BTreeSet<N>) -> EdgeResult<Self>
    where
        N: Clone + Ord,
    {
        let len = set.len();
        Self::from_unique_members(set, len)
    }

    fn from_unique_members(members: impl IntoIterator<Item = N>, len: usize) -> EdgeResult<Self>
    where
        N: Clone,
    {
        let mut members = members.into_iter();
        match (members.next(), members.next(), members.next()) {
            (Some(node), None, None) => Ok(Self::undirected(node.clone(), node)),
            (Some(a), Some(b), None) => Ok(Self::undirected(a, b)),
            _ => Err(invalid_shorthand(ShorthandShape::UnorderedPair, ElementCount::Exactly(len))),
        }
    }
}

fn invalid_shorthand(shape: ShorthandShape, len: ElementCount) -> EdgeError {
    let err = EdgeError::InvalidShorthand { shape, len };
    log_debug!("Rejected edge shorthand: {}", err);
    err
}

impl<N: Node> From<(N, N)> for Edge<N> {
    fn from((source, target): (N, N)) -> Self {
        Self::directed(source, target)
    }
}

impl<N: Node> From<(N, N, Weight)> for Edge<N> {
    fn from((source, target, weight): (N, N, Weight)) -> Self {
        Self::weighted(source, target, weight)
    }
}

impl<N: Node> TryFrom<Vec<OrderedItem<N>>> for Edge<N> {
    type Error = EdgeError;

    fn try_from(items: Vec<OrderedItem<N>>) -> EdgeResult<Self> {
        Self::from_ordered_pair(items)
    }
}

impl<N: Node + Clone, S: BuildHasher> TryFrom<HashSet<N, S>> for Edge<N> {
    type Error = EdgeError;

    fn try_from(set: HashSet<N, S>) -> EdgeResult<Self> {
        Self::from_unordered_pair(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::OrderedItem::{Node as N, Weight as W};

    fn ordered_len_error(len: usize) -> EdgeError {
        EdgeError::InvalidShorthand {
            shape: ShorthandShape::OrderedPair,
            len: ElementCount::Exactly(len),
        }
    }

    fn ordered_overflow_error() -> EdgeError {
        EdgeError::InvalidShorthand {
            shape: ShorthandShape::OrderedPair,
            len: ElementCount::MoreThan(3),
        }
    }

    fn unordered_len_error(len: usize) -> EdgeError {
        EdgeError::InvalidShorthand {
            shape: ShorthandShape::UnorderedPair,
            len: ElementCount::Exactly(len),
        }
    }

    #[test]
    fn ordered_pair_builds_directed_edge() {
        let e = Edge::from_ordered_pair([N(1), N(2)]).unwrap();
        assert!(e.is_directed());
        assert!(!e.is_weighted());
        assert_eq!(e, Edge::directed(1, 2));
    }

    #[test]
    fn ordered_triple_builds_weighted_edge() {
        let e = Edge::from_ordered_pair(vec![N("a"), N("b"), W(4.25)]).unwrap();
        assert_eq!(e.source(), Ok(&"a"));
        assert_eq!(e.target(), Ok(&"b"));
        assert_eq!(e.weight(), Ok(4.25));
    }

    #[test]
    fn ordered_shorthand_rejects_bad_lengths() {
        let empty: Vec<OrderedItem<u8>> = Vec::new();
        assert_eq!(Edge::from_ordered_pair(empty).unwrap_err(), ordered_len_error(0));
        assert_eq!(Edge::from_ordered_pair([N(1)]).unwrap_err(), ordered_len_error(1));
        assert_eq!(
            Edge::from_ordered_pair([N(1), N(2), N(3), N(4)]).unwrap_err(),
            ordered_overflow_error()
        );
        assert_eq!(
            Edge::from_ordered_pair([N(1), N(2), W(1.0), W(2.0), W(3.0)]).unwrap_err(),
            ordered_overflow_error()
        );
    }

    #[test]
    fn ordered_shorthand_stops_reading_after_fourth_item() {
        let endless = std::iter::repeat(N(7u32));
        assert_eq!(Edge::from_ordered_pair(endless).unwrap_err(), ordered_overflow_error());

        let mut pulled = 0;
        let counted = std::iter::from_fn(|| {
            pulled += 1;
            Some(N(pulled))
        });
        assert!(Edge::from_ordered_pair(counted).is_err());
        assert_eq!(pulled, 4);
    }

    #[test]
    fn ordered_shorthand_rejects_misplaced_weight() {
        assert_eq!(Edge::from_ordered_pair([N(1), W(2.0)]).unwrap_err(), ordered_len_error(2));
        assert_eq!(
            Edge::from_ordered_pair([N(1), N(2), N(3)]).unwrap_err(),
            ordered_len_error(3)
        );
    }

    #[test]
    fn single_member_set_is_self_loop() {
        let e = Edge::from_unordered_pair(HashSet::from([9])).unwrap();
        assert!(!e.is_directed());
        assert!(e.is_self_loop());
        assert_eq!(e.opposite(&9), Some(&9));
        assert_eq!(e.to_string(), "9 -- 9");
    }

    #[test]
    fn two_member_set_is_undirected_edge() {
        let e = Edge::from_unordered_pair(HashSet::from([1, 2])).unwrap();
        assert!(!e.is_directed());
        assert!(!e.is_weighted());
        assert!(e.contains(&1) && e.contains(&2));
        assert_eq!(e.source(), Err(EdgeError::NotDirected));
    }

    #[test]
    fn unordered_shorthand_rejects_bad_sizes() {
        let empty: HashSet<u32> = HashSet::new();
        assert_eq!(Edge::from_unordered_pair(empty).unwrap_err(), unordered_len_error(0));
        assert_eq!(
            Edge::from_unordered_pair(HashSet::from([1, 2, 3])).unwrap_err(),
            unordered_len_error(3)
        );
    }

    #[test]
    fn btree_set_follows_sorted_order() {
        let e = Edge::from_unordered_btree(BTreeSet::from(["b", "a"])).unwrap();
        assert_eq!(e.to_string(), "a -- b");
        assert!(Edge::from_unordered_btree(BTreeSet::<u8>::new()).is_err());
    }

    #[test]
    fn conversions() {
        let e: Edge<u32> = (1, 2).into();
        assert_eq!(e, Edge::directed(1, 2));

        let e: Edge<u32> = (1, 2, 0.5).into();
        assert_eq!(e.weight(), Ok(0.5));

        let e = Edge::<i32>::try_from(vec![N(3), N(4)]).unwrap();
        assert_eq!(e.to_string(), "3 -> 4");

        let err = Edge::<i32>::try_from(HashSet::from([1, 2, 3, 4])).unwrap_err();
        assert_eq!(err, unordered_len_error(4));
    }
}
