use crate::{node_id::NodeId, route::Route};
use slab::Slab;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry for a Route stored in the Slab: `(key, priority, sequence)`.
///
/// Ordered so that the `BinaryHeap` pops the lowest priority first and, among equal
/// priorities, the Route that was pushed first.
#[derive(Debug)]
struct HeuristicElement(usize, f64, u64);

impl PartialEq for HeuristicElement {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for HeuristicElement {
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.1.total_cmp(&self.1).then_with(|| rhs.2.cmp(&self.2))
	}
}

/// The Routes that are waiting to be expanded, lowest priority first.
#[derive(Debug)]
pub struct Frontier<Id> {
	routes: Slab<Route<Id>>,
	next: BinaryHeap<HeuristicElement>,
	sequence: u64,
}

impl<Id: NodeId> Frontier<Id> {
	pub fn new() -> Frontier<Id> {
		Frontier {
			routes: Slab::new(),
			next: BinaryHeap::new(),
			sequence: 0,
		}
	}

	pub fn push(&mut self, route: Route<Id>) {
		let priority = route.priority();
		let key = self.routes.insert(route);
		self.next.push(HeuristicElement(key, priority, self.sequence));
		self.sequence += 1;
	}

	pub fn pop(&mut self) -> Option<Route<Id>> {
		let HeuristicElement(key, _, _) = self.next.pop()?;
		self.routes.try_remove(key)
	}

	pub fn len(&self) -> usize {
		self.routes.len()
	}
}
