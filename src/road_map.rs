//! The map that is searched: Intersections with a Position, connected by Roads

use crate::{
	metric::Point,
	node_id::{NodeId, NodePair},
	SearchError,
};
use hashbrown::{HashMap, HashSet};

/// A map of Intersections and the Roads between them.
///
/// Stores the Position of every Intersection and, for every Intersection, the ordered list of
/// Intersections reachable by a single Road. Roads are meant to be walkable in both directions.
/// [`add_road`](RoadMap::add_road) keeps that symmetry, [`from_parts`](RoadMap::from_parts)
/// takes the lists as they are (see [`check_symmetry`](RoadMap::check_symmetry)).
///
/// The order of the neighbor lists is the order in which the search explores them.
#[derive(Clone, Debug)]
pub struct RoadMap<Id: NodeId> {
	intersections: HashMap<Id, Point>,
	roads: HashMap<Id, Vec<Id>>,
}

impl<Id: NodeId> Default for RoadMap<Id> {
	fn default() -> Self {
		RoadMap::new()
	}
}

impl<Id: NodeId> RoadMap<Id> {
	/// Creates an empty RoadMap
	pub fn new() -> RoadMap<Id> {
		RoadMap {
			intersections: HashMap::new(),
			roads: HashMap::new(),
		}
	}

	/// Creates a RoadMap from a list of Intersections and a list of Roads per Intersection.
	///
	/// The neighbor lists are kept exactly as given, including their order.
	///
	/// ## Errors
	/// [`SearchError::MissingNode`] if a Road starts or ends at an Intersection that is not part
	/// of `intersections`.
	///
	/// ## Examples
	/// ```
	/// # use road_astar::{road_map::RoadMap, SearchError};
	/// let map = RoadMap::from_parts(
	///     vec![(0, (0.0, 0.0)), (1, (1.0, 0.0))],
	///     vec![(0, vec![1]), (1, vec![0])],
	/// );
	/// assert!(map.is_ok());
	///
	/// let broken = RoadMap::from_parts(vec![(0, (0.0, 0.0))], vec![(0, vec![1])]);
	/// assert_eq!(broken.unwrap_err(), SearchError::MissingNode(1));
	/// ```
	pub fn from_parts(
		intersections: impl IntoIterator<Item = (Id, Point)>,
		roads: impl IntoIterator<Item = (Id, Vec<Id>)>,
	) -> Result<RoadMap<Id>, SearchError<Id>> {
		let intersections: HashMap<Id, Point> = intersections.into_iter().collect();
		let roads: HashMap<Id, Vec<Id>> = roads.into_iter().collect();

		for (from, neighbors) in roads.iter() {
			if !intersections.contains_key(from) {
				return Err(SearchError::MissingNode(*from));
			}
			if let Some(to) = neighbors.iter().find(|to| !intersections.contains_key(*to)) {
				return Err(SearchError::MissingNode(*to));
			}
		}

		Ok(RoadMap {
			intersections,
			roads,
		})
	}

	/// Places an Intersection at `position`, moving it if it already exists.
	pub fn add_intersection(&mut self, id: Id, position: Point) {
		self.intersections.insert(id, position);
	}

	/// Adds a Road between `a` and `b`, walkable in both directions.
	///
	/// Adding the same Road twice has no effect. The Intersections themselves are not added;
	/// a search that reaches an Intersection without a Position fails with
	/// [`SearchError::MissingNode`].
	/// ```
	/// # use road_astar::road_map::RoadMap;
	/// let mut map = RoadMap::new();
	/// map.add_intersection(1, (0.0, 0.0));
	/// map.add_intersection(2, (0.0, 1.0));
	/// map.add_road(1, 2);
	/// map.add_road(2, 1);
	///
	/// assert_eq!(map.neighbors(1), &[2]);
	/// assert_eq!(map.neighbors(2), &[1]);
	/// assert_eq!(map.road_count(), 1);
	/// ```
	pub fn add_road(&mut self, a: Id, b: Id) {
		self.add_one_way(a, b);
		if a != b {
			self.add_one_way(b, a);
		}
	}

	fn add_one_way(&mut self, from: Id, to: Id) {
		let neighbors = self.roads.entry(from).or_insert_with(Vec::new);
		if !neighbors.contains(&to) {
			neighbors.push(to);
		}
	}

	/// The Position of an Intersection, if it is on the map
	pub fn position(&self, id: Id) -> Option<Point> {
		self.intersections.get(&id).copied()
	}

	/// All Intersections reachable from `id` by a single Road, in exploration order.
	///
	/// Empty for Intersections without Roads and for unknown Intersections.
	pub fn neighbors(&self, id: Id) -> &[Id] {
		self.roads.get(&id).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Checks if an Intersection has a Position on the map
	pub fn contains(&self, id: Id) -> bool {
		self.intersections.contains_key(&id)
	}

	/// The number of Intersections
	pub fn len(&self) -> usize {
		self.intersections.len()
	}

	/// Checks if there are no Intersections
	pub fn is_empty(&self) -> bool {
		self.intersections.is_empty()
	}

	/// The number of Roads, counting a two-way Road once and a one-way Road once.
	pub fn road_count(&self) -> usize {
		self.roads
			.iter()
			.flat_map(|(&from, neighbors)| {
				neighbors.iter().map(move |&to| NodePair::new(from, to))
			})
			.collect::<HashSet<_>>()
			.len()
	}

	/// An Iterator over all Intersections and their Positions, in no particular order
	pub fn intersections(&self) -> impl Iterator<Item = (Id, Point)> + '_ {
		self.intersections.iter().map(|(id, pos)| (*id, *pos))
	}

	/// Checks that every Road can be walked back.
	///
	/// The search treats Roads as two-way. A map where `b` is a neighbor of `a` but not the
	/// other way around may still be searched, but the Paths found are then only valid in the
	/// direction they were searched in.
	///
	/// ## Errors
	/// [`SearchError::Asymmetric`] for the first one-way Road found.
	/// ```
	/// # use road_astar::{road_map::RoadMap, SearchError};
	/// let map = RoadMap::from_parts(
	///     vec![(0, (0.0, 0.0)), (1, (1.0, 0.0))],
	///     vec![(0, vec![1])],
	/// )
	/// .unwrap();
	///
	/// assert_eq!(
	///     map.check_symmetry(),
	///     Err(SearchError::Asymmetric { from: 0, to: 1 })
	/// );
	/// ```
	pub fn check_symmetry(&self) -> Result<(), SearchError<Id>> {
		for (&from, neighbors) in self.roads.iter() {
			for &to in neighbors {
				if !self.neighbors(to).contains(&from) {
					return Err(SearchError::Asymmetric { from, to });
				}
			}
		}
		Ok(())
	}
}
