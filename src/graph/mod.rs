//! Graph primitives
//!
//! The edge value type, the node capability it is generic over, and the
//! shorthand constructors used by graph containers.

pub mod node;
pub mod edge;
pub mod shorthand;

// Re-export main graph types
pub use node::Node;
pub use edge::Edge;
pub use shorthand::OrderedItem;
