//! The A* search over a [`RoadMap`]

use crate::{
	distance::DistanceOracle,
	frontier::Frontier,
	metric::{Euclidean, Metric},
	node_id::NodeId,
	path::Path,
	road_map::RoadMap,
	route::Route,
	SearchError,
};
use std::time::Instant;

mod search_config;
pub use self::search_config::SearchConfig;

/// Finds the shortest Path from `start` to `goal`, measuring Roads by their straight-line length.
///
/// Shorthand for [`shortest_path_with`] using the [`Euclidean`] Metric and the default
/// [`SearchConfig`].
///
/// ## Examples
/// ```
/// # use road_astar::prelude::*;
/// // 0 - 1
/// //  \  |
/// //    2 - 3
/// let map = RoadMap::from_parts(
///     vec![(0, (0.0, 0.0)), (1, (1.0, 0.0)), (2, (1.0, 1.0)), (3, (2.0, 1.0))],
///     vec![(0, vec![1, 2]), (1, vec![0, 2]), (2, vec![0, 1, 3]), (3, vec![2])],
/// )
/// .unwrap();
///
/// let path = shortest_path(&map, 0, 3).unwrap().unwrap();
/// assert_eq!(path.path, vec![0, 2, 3]);
///
/// assert_eq!(shortest_path(&map, 3, 3).unwrap().unwrap().path, vec![3]);
/// ```
pub fn shortest_path<Id: NodeId>(
	map: &RoadMap<Id>,
	start: Id,
	goal: Id,
) -> Result<Option<Path<Id>>, SearchError<Id>> {
	shortest_path_with(map, start, goal, Euclidean, SearchConfig::default())
}

/// Searches a [`RoadMap`] using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The search starts with a single [`Route`] standing at `start` and repeatedly expands the
/// Route with the lowest priority (distance walked plus distance to `goal`) into one new Route
/// per Road that leads to an Intersection the Route has not visited yet. The first Route to
/// arrive at `goal` is returned. Since the `metric` both prices the Roads and estimates the
/// remaining distance, the estimate never exceeds the real remaining cost, and that first Route
/// is a shortest one.
///
/// Every Route tracks its own visited Intersections; there is no shared closed set. An
/// Intersection may therefore be expanded once for every distinct Route reaching it.
///
/// ## Arguments
/// - `map` - the Intersections and Roads to search
/// - `start` - the starting Intersection
/// - `goal` - the Intersection to search a Path to
/// - `metric` - the distance between Intersections. See [`Metric`]
/// - `config` - options for the search. See [`SearchConfig`]
///
/// ## Returns
/// - `Ok(Some(path))` with the first Intersection being `start` and the last being `goal`.
///   If `start == goal`, the Path only contains `start`.
/// - `Ok(None)` if `start` or `goal` are not on the map, or if `goal` cannot be reached.
///
/// ## Errors
/// - [`SearchError::MissingNode`] if a Road leads to an Intersection without a Position
/// - [`SearchError::Asymmetric`] if `config.check_symmetry` is set and the map has a one-way Road
/// - [`SearchError::ExpansionLimit`] if `config.expansion_limit` was reached
///
/// ## Examples
/// ```
/// # use road_astar::prelude::*;
/// let mut map = RoadMap::new();
/// map.add_intersection("home", (0.0, 0.0));
/// map.add_intersection("shop", (2.0, 2.0));
/// map.add_intersection("park", (0.0, 2.0));
/// map.add_road("home", "park");
/// map.add_road("park", "shop");
///
/// let path = shortest_path_with(&map, "home", "shop", Manhattan, SearchConfig::UNCACHED)
///     .unwrap()
///     .unwrap();
/// assert_eq!(path.path, vec!["home", "park", "shop"]);
/// assert_eq!(path.cost, 4.0);
///
/// map.add_road("home", "mall");
/// assert_eq!(
///     shortest_path_with(&map, "home", "shop", Manhattan, SearchConfig::UNCACHED),
///     Err(SearchError::MissingNode("mall"))
/// );
/// ```
pub fn shortest_path_with<Id: NodeId, M: Metric>(
	map: &RoadMap<Id>,
	start: Id,
	goal: Id,
	metric: M,
	config: SearchConfig,
) -> Result<Option<Path<Id>>, SearchError<Id>> {
	if config.check_symmetry {
		map.check_symmetry()?;
	}
	if !map.contains(start) || !map.contains(goal) {
		search_log!(debug, "no search from {:?} to {:?}: endpoint not on the map", start, goal);
		return Ok(None);
	}

	let timer = Instant::now();

	let mut oracle = if config.cache_distances {
		DistanceOracle::new(map, metric)
	} else {
		DistanceOracle::uncached(map, metric)
	};

	let mut next = Frontier::new();
	next.push(Route::new(start, goal, oracle.measure(start, goal)?));

	let mut expanded = 0;

	while let Some(route) = next.pop() {
		if route.is_goal() {
			search_log!(
				debug,
				"found path from {:?} to {:?} with cost {} after {} expansions in {:?}",
				start,
				goal,
				route.path_cost(),
				expanded,
				timer.elapsed()
			);
			return Ok(Some(route.into_path()));
		}
		if let Some(limit) = config.expansion_limit {
			if expanded >= limit {
				search_log!(debug, "giving up on {:?} to {:?} after {} expansions", start, goal, limit);
				return Err(SearchError::ExpansionLimit(limit));
			}
		}
		expanded += 1;

		let head = route.head();
		search_log!(
			trace,
			"expanding {:?}: cost = {}, priority = {}, frontier = {}",
			head,
			route.path_cost(),
			route.priority(),
			next.len()
		);

		for &neighbor in map.neighbors(head) {
			if route.has_visited(neighbor) {
				continue;
			}
			let edge_distance = oracle.measure(head, neighbor)?;
			let remaining = oracle.measure(neighbor, goal)?;
			next.push(route.extend(neighbor, edge_distance, remaining));
		}
	}

	search_log!(
		debug,
		"no path from {:?} to {:?} after {} expansions in {:?}",
		start,
		goal,
		expanded,
		timer.elapsed()
	);
	Ok(None)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::metric::Manhattan;

	// 0 --- 1 --- 2
	// |         /
	// 3 ------ 4         5
	fn small_map() -> RoadMap<u32> {
		let mut map = RoadMap::new();
		map.add_intersection(0, (0.0, 0.0));
		map.add_intersection(1, (1.0, 0.0));
		map.add_intersection(2, (2.0, 0.0));
		map.add_intersection(3, (0.0, 1.0));
		map.add_intersection(4, (1.5, 1.0));
		map.add_intersection(5, (4.0, 1.0));
		map.add_road(0, 1);
		map.add_road(1, 2);
		map.add_road(0, 3);
		map.add_road(3, 4);
		map.add_road(2, 4);
		map
	}

	#[test]
	fn basic() {
		let map = small_map();
		let path = shortest_path(&map, 0, 4).unwrap().unwrap();

		assert_eq!(path.path, vec![0, 3, 4]);
		assert!((path.cost - 2.5).abs() < 1e-9);
	}

	#[test]
	fn start_is_goal() {
		let map = small_map();
		let path = shortest_path(&map, 5, 5).unwrap().unwrap();

		assert_eq!(path.path, vec![5]);
		assert_eq!(path.cost, 0.0);
	}

	#[test]
	fn unreachable_goal() {
		let map = small_map();
		assert_eq!(shortest_path(&map, 0, 5), Ok(None));
	}

	#[test]
	fn unknown_endpoints() {
		let map = small_map();
		assert_eq!(shortest_path(&map, 9, 0), Ok(None));
		assert_eq!(shortest_path(&map, 0, 9), Ok(None));
		assert_eq!(shortest_path(&map, 9, 9), Ok(None));
	}

	#[test]
	fn road_to_missing_intersection() {
		let mut map = small_map();
		map.add_road(4, 7);

		assert_eq!(shortest_path(&map, 0, 5), Err(SearchError::MissingNode(7)));
	}

	#[test]
	fn symmetry_check() {
		let map = RoadMap::from_parts(
			vec![(0, (0.0, 0.0)), (1, (1.0, 0.0))],
			vec![(0, vec![1])],
		)
		.unwrap();

		let unchecked = shortest_path(&map, 0, 1).unwrap().unwrap();
		assert_eq!(unchecked.path, vec![0, 1]);

		assert_eq!(
			shortest_path_with(&map, 0, 1, Euclidean, SearchConfig::STRICT),
			Err(SearchError::Asymmetric { from: 0, to: 1 })
		);
	}

	#[test]
	fn expansion_limit() {
		let map = small_map();

		let config = SearchConfig::with_expansion_limit(1);
		assert_eq!(
			shortest_path_with(&map, 0, 5, Euclidean, config),
			Err(SearchError::ExpansionLimit(1))
		);
		assert!(shortest_path_with(&map, 0, 1, Euclidean, config)
			.unwrap()
			.is_some());

		let config = SearchConfig::with_expansion_limit(0);
		assert!(shortest_path_with(&map, 3, 3, Euclidean, config)
			.unwrap()
			.is_some());
	}

	#[test]
	fn routes_keep_their_own_history() {
		// 0 and its two neighbors form a triangle, 3 is out of reach.
		// Both 1 and 2 are expanded twice, once per Route reaching them.
		let mut map = RoadMap::new();
		map.add_intersection(0, (0.0, 0.0));
		map.add_intersection(1, (1.0, 0.0));
		map.add_intersection(2, (0.5, 1.0));
		map.add_intersection(3, (5.0, 5.0));
		map.add_road(0, 1);
		map.add_road(1, 2);
		map.add_road(2, 0);

		for limit in 0..5 {
			assert_eq!(
				shortest_path_with(&map, 0, 3, Euclidean, SearchConfig::with_expansion_limit(limit)),
				Err(SearchError::ExpansionLimit(limit))
			);
		}
		for limit in 5..7 {
			assert_eq!(
				shortest_path_with(&map, 0, 3, Euclidean, SearchConfig::with_expansion_limit(limit)),
				Ok(None)
			);
		}
	}

	#[test]
	fn uncached_is_identical() {
		let map = small_map();
		for start in 0..6 {
			for goal in 0..6 {
				assert_eq!(
					shortest_path_with(&map, start, goal, Manhattan, SearchConfig::default()),
					shortest_path_with(&map, start, goal, Manhattan, SearchConfig::UNCACHED),
				);
			}
		}
	}
}
