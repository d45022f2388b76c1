//! Node keys

use std::hash::Hash;

/// Capability required of an edge endpoint.
///
/// Endpoints are plain keys: anything that can be compared for equality and
/// hashed. Integers, strings and small id types all qualify.
pub trait Node: Hash + Eq {}

impl<T: Hash + Eq + ?Sized> Node for T {}
