//! A Module with some utilities for working with Node identifiers

use std::fmt::Debug;
use std::hash::Hash;

/// The requirements on a type used to identify an Intersection.
///
/// This may be a Number, a char, a Tuple, ... as long as it can be compared, ordered, hashed,
/// copied and debug-printed. Note that it is advised to choose a short representation, since it
/// will be copied several times. The order is only used to normalize [`NodePair`]s; it has no
/// influence on the Paths that are found.
///
/// This Trait is implemented for every type meeting these requirements.
pub trait NodeId: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> NodeId for T {}

/// An unordered pair of Node identifiers.
///
/// `NodePair::new(a, b)` and `NodePair::new(b, a)` are equal and hash the same.
/// ```
/// # use road_astar::node_id::NodePair;
/// assert_eq!(NodePair::new(3, 7), NodePair::new(7, 3));
/// assert_eq!(NodePair::new(3, 7).nodes(), (3, 7));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodePair<Id>(Id, Id);

impl<Id: NodeId> NodePair<Id> {
	/// creates a new NodePair from two Nodes in any order
	pub fn new(a: Id, b: Id) -> NodePair<Id> {
		if a <= b {
			NodePair(a, b)
		} else {
			NodePair(b, a)
		}
	}

	/// returns both Nodes, the smaller one first
	pub fn nodes(&self) -> (Id, Id) {
		(self.0, self.1)
	}
}
