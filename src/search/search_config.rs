/// Options for configuring a search with [`shortest_path_with`](crate::shortest_path_with)
///
/// Default options:
/// ```
/// # use road_astar::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		cache_distances: true,
/// 		check_symmetry: false,
/// 		expansion_limit: None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// `true` (default): remember the distance between every pair of Intersections measured
	/// during the search.
	///
	/// `false`: evaluate the Metric every time.
	///
	/// The results are identical either way. Caching trades memory for fewer Metric evaluations,
	/// which only pays off for expensive Metrics or searches that revisit the same Roads a lot.
	pub cache_distances: bool,
	/// `true`: the whole map is checked with [`RoadMap::check_symmetry`](crate::road_map::RoadMap::check_symmetry)
	/// before searching, and a one-way Road fails the search with
	/// [`SearchError::Asymmetric`](crate::SearchError::Asymmetric).
	///
	/// `false` (default): Roads are assumed to be two-way without checking.
	///
	/// The check visits every Road of the map, so it is usually better to check once after
	/// building the map than on every search.
	pub check_symmetry: bool,
	/// `Some(limit)`: stop the search with [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit)
	/// if the goal was not reached after expanding `limit` Routes.
	///
	/// `None` (default): search until the goal is found or every Route is exhausted.
	///
	/// Every Route keeps its own history, so the number of Routes can grow exponentially on
	/// large maps with an unreachable goal. The limit bounds the time a single search may take.
	pub expansion_limit: Option<usize>,
}

impl SearchConfig {
	/// a SearchConfig that validates the map before every search
	///
	/// Values:
	/// ```
	/// # use road_astar::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		cache_distances: true,
	/// 		check_symmetry: true,
	/// 		expansion_limit: None,
	/// 	},
	/// 	SearchConfig::STRICT
	/// );
	/// ```
	pub const STRICT: SearchConfig = SearchConfig {
		cache_distances: true,
		check_symmetry: true,
		expansion_limit: None,
	};
	/// a SearchConfig that keeps no distance cache
	///
	/// Values:
	/// ```
	/// # use road_astar::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		cache_distances: false,
	/// 		check_symmetry: false,
	/// 		expansion_limit: None,
	/// 	},
	/// 	SearchConfig::UNCACHED
	/// );
	/// ```
	pub const UNCACHED: SearchConfig = SearchConfig {
		cache_distances: false,
		check_symmetry: false,
		expansion_limit: None,
	};

	/// a default SearchConfig that gives up after `limit` expanded Routes
	/// ```
	/// # use road_astar::SearchConfig;
	/// assert_eq!(SearchConfig::with_expansion_limit(50).expansion_limit, Some(50));
	/// ```
	pub fn with_expansion_limit(limit: usize) -> SearchConfig {
		SearchConfig {
			expansion_limit: Some(limit),
			..Default::default()
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			cache_distances: true,
			check_symmetry: false,
			expansion_limit: None,
		}
	}
}
