//! Measuring and remembering distances between Intersections

use crate::{
	metric::Metric,
	node_id::{NodeId, NodePair},
	road_map::RoadMap,
	SearchError,
};
use hashbrown::HashMap;

/// Measures the distance between Intersections of a [`RoadMap`] and caches the results.
///
/// The same pair of Intersections is usually measured many times during a search, once for
/// every Route walking the Road between them and once for every Heuristic estimate. The cache
/// is keyed on the unordered pair, so `measure(a, b)` and `measure(b, a)` share an entry.
///
/// Caching has no influence on the results, only on how often the [`Metric`] is evaluated.
///
/// ## Examples
/// ```
/// # use road_astar::{distance::DistanceOracle, prelude::*};
/// let mut map = RoadMap::new();
/// map.add_intersection('a', (0.0, 0.0));
/// map.add_intersection('b', (3.0, 4.0));
///
/// let mut oracle = DistanceOracle::new(&map, Euclidean);
/// assert_eq!(oracle.measure('a', 'b'), Ok(5.0));
/// assert_eq!(oracle.measure('b', 'a'), Ok(5.0));
/// assert_eq!(oracle.cached_pairs(), 1);
///
/// assert_eq!(oracle.measure('a', 'z'), Err(SearchError::MissingNode('z')));
/// ```
#[derive(Debug)]
pub struct DistanceOracle<'a, Id: NodeId, M: Metric> {
	map: &'a RoadMap<Id>,
	metric: M,
	cache: Option<HashMap<NodePair<Id>, f64>>,
}

impl<'a, Id: NodeId, M: Metric> DistanceOracle<'a, Id, M> {
	/// Creates a new caching DistanceOracle on `map`
	pub fn new(map: &'a RoadMap<Id>, metric: M) -> DistanceOracle<'a, Id, M> {
		DistanceOracle {
			map,
			metric,
			cache: Some(HashMap::new()),
		}
	}

	/// Creates a new DistanceOracle that evaluates the Metric on every call
	pub fn uncached(map: &'a RoadMap<Id>, metric: M) -> DistanceOracle<'a, Id, M> {
		DistanceOracle {
			map,
			metric,
			cache: None,
		}
	}

	/// The distance between the Intersections `a` and `b`.
	///
	/// ## Errors
	/// [`SearchError::MissingNode`] if either Intersection has no Position on the map.
	pub fn measure(&mut self, a: Id, b: Id) -> Result<f64, SearchError<Id>> {
		let key = NodePair::new(a, b);
		if let Some(&distance) = self.cache.as_ref().and_then(|cache| cache.get(&key)) {
			return Ok(distance);
		}

		let pos_a = self.map.position(a).ok_or(SearchError::MissingNode(a))?;
		let pos_b = self.map.position(b).ok_or(SearchError::MissingNode(b))?;
		let distance = self.metric.distance(pos_a, pos_b);

		if let Some(cache) = self.cache.as_mut() {
			cache.insert(key, distance);
		}
		Ok(distance)
	}

	/// The number of pairs currently cached
	pub fn cached_pairs(&self) -> usize {
		self.cache.as_ref().map_or(0, HashMap::len)
	}
}
