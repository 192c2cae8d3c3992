//! The result of a search

/// A Path across the map.
///
/// Stores the sequence of Intersections in `path` and the total distance of walking along them in `cost`.
/// Note that the individual lengths of the Roads within the Path cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<Id> {
	/// the Path
	pub path: Vec<Id>,
	/// the total distance of the Path
	pub cost: f64,
}

impl<Id> Path<Id> {
	/// creates a new Path with the given sequence of Intersections and total distance
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use road_astar::path::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
	///
	/// assert_eq!(path.path, vec!['a', 'b', 'c']);
	/// assert_eq!(path.cost, 4.5);
	/// ```
	pub fn new(path: Vec<Id>, cost: f64) -> Path<Id> {
		Path { path, cost }
	}

	/// The first Intersection of the Path
	pub fn start(&self) -> Option<&Id> {
		self.path.first()
	}

	/// The last Intersection of the Path
	pub fn goal(&self) -> Option<&Id> {
		self.path.last()
	}

	/// Returns a reversed copy of the Path.
	///
	/// Since Roads are walkable in both directions, the cost stays the same.
	/// ```
	/// # use road_astar::path::Path;
	/// let path = Path::new(vec![1, 2, 3], 2.0);
	///
	/// assert_eq!(path.reversed(), Path::new(vec![3, 2, 1], 2.0));
	/// ```
	pub fn reversed(&self) -> Path<Id>
	where
		Id: Clone,
	{
		let mut path = self.path.clone();
		path.reverse();
		Path::new(path, self.cost)
	}
}

use std::ops::{Deref, Index};

impl<Id> Index<usize> for Path<Id> {
	type Output = Id;
	fn index(&self, index: usize) -> &Id {
		&self.path[index]
	}
}

impl<Id> Deref for Path<Id> {
	type Target = [Id];
	fn deref(&self) -> &[Id] {
		&self.path
	}
}

impl<Id> From<Path<Id>> for Vec<Id> {
	fn from(path: Path<Id>) -> Vec<Id> {
		path.path
	}
}

use std::fmt;
impl<Id: fmt::Display> fmt::Display for Path<Id> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}
