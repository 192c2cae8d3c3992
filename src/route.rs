//! The state of a single candidate Path during a search

use crate::{node_id::NodeId, path::Path};

/// One candidate Path from the start of a search towards its goal.
///
/// A Route remembers every Intersection it walked over, the total distance walked so far and
/// its priority in the search, which is the distance walked plus the estimated distance to the
/// goal (`f = g + h`).
///
/// Routes branch: at every Intersection, the search creates one new Route for each Road that
/// leads somewhere this Route has not been yet. Each of those Routes owns its own copy of the
/// history, so siblings never see each other's steps.
///
/// ## Examples
/// ```
/// # use road_astar::route::Route;
/// let start = Route::new('a', 'c', 2.0);
/// let next = start.extend('b', 1.0, 1.0);
/// let last = next.extend('c', 1.0, 0.0);
///
/// assert_eq!(start.visited(), &['a']);
/// assert_eq!(last.visited(), &['a', 'b', 'c']);
/// assert!(last.is_goal());
/// assert_eq!(last.path_cost(), 2.0);
/// assert_eq!(last.priority(), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Route<Id> {
	head: Id,
	goal: Id,
	path_cost: f64,
	visited: Vec<Id>,
	priority: f64,
}

impl<Id: NodeId> Route<Id> {
	/// Creates a Route standing at `start`, with nothing walked yet.
	///
	/// `priority` should be the estimated distance from `start` to `goal`.
	pub fn new(start: Id, goal: Id, priority: f64) -> Route<Id> {
		Route {
			head: start,
			goal,
			path_cost: 0.0,
			visited: vec![start],
			priority,
		}
	}

	/// Checks if the Route has arrived at its goal
	pub fn is_goal(&self) -> bool {
		self.head == self.goal
	}

	/// Checks if the Route has already walked over `node`
	pub fn has_visited(&self, node: Id) -> bool {
		self.visited.contains(&node)
	}

	/// Creates an independent copy of this Route.
	pub fn fork(&self) -> Route<Id> {
		self.clone()
	}

	/// Walks to `node` over a Road of length `edge_distance` and returns the new total distance.
	///
	/// The priority is left as it is. Only ever call this on a fresh [`fork`](Route::fork).
	pub fn advance(&mut self, node: Id, edge_distance: f64) -> f64 {
		self.head = node;
		self.visited.push(node);
		self.path_cost += edge_distance;
		self.path_cost
	}

	/// Creates the Route that continues this one with a step to `node`.
	///
	/// - `edge_distance` - the length of the Road from [`head`](Route::head) to `node`
	/// - `remaining` - the estimated distance from `node` to the goal
	///
	/// The new Route's priority is its total distance plus `remaining`.
	pub fn extend(&self, node: Id, edge_distance: f64, remaining: f64) -> Route<Id> {
		let mut visited = Vec::with_capacity(self.visited.len() + 1);
		visited.extend_from_slice(&self.visited);
		visited.push(node);

		let path_cost = self.path_cost + edge_distance;
		Route {
			head: node,
			goal: self.goal,
			path_cost,
			visited,
			priority: path_cost + remaining,
		}
	}

	/// The Intersection the Route currently stands on
	pub fn head(&self) -> Id {
		self.head
	}

	/// The Intersection the Route is heading for
	pub fn goal(&self) -> Id {
		self.goal
	}

	/// The total distance walked so far
	pub fn path_cost(&self) -> f64 {
		self.path_cost
	}

	/// The priority of this Route in the search. Lower is explored first.
	pub fn priority(&self) -> f64 {
		self.priority
	}

	/// All Intersections walked over, from the start up to and including the head
	pub fn visited(&self) -> &[Id] {
		&self.visited
	}

	/// Turns the Route into a [`Path`] of the visited Intersections and the distance walked
	pub fn into_path(self) -> Path<Id> {
		Path::new(self.visited, self.path_cost)
	}
}
