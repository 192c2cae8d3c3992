#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find shortest Paths on maps of Intersections and Roads.
//!
//! ## Introduction
//! A map in this crate is a set of Intersections, each placed at a 2D Point, and a set of
//! Roads connecting them. Roads have no cost of their own: walking a Road costs exactly the
//! distance between the Points of its two Intersections. This makes the straight-line distance
//! to the goal a Heuristic that never overestimates the remaining cost, which is all the
//! [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm) needs to guarantee that
//! the first Path it completes is a shortest one.
//!
//! The search keeps a separate history for every candidate Path (called a [`Route`](route::Route)).
//! A Route only refuses to step onto Intersections it has already walked itself, so the same
//! Intersection can be reached by several competing Routes. There is no global closed set.
//! This keeps the algorithm small, but its worst case is exponential in the size of the map,
//! so it is best suited for small to medium road maps.
//!
//! ## Examples
//! Creating a map and searching it:
//! ```
//! use road_astar::prelude::*;
//!
//! // A --- B
//! // |     |
//! // C --- D --- E
//! let mut map = RoadMap::new();
//! map.add_intersection('A', (0.0, 0.0));
//! map.add_intersection('B', (1.0, 0.0));
//! map.add_intersection('C', (0.0, 1.0));
//! map.add_intersection('D', (1.0, 1.0));
//! map.add_intersection('E', (3.0, 1.0));
//!
//! map.add_road('A', 'B');
//! map.add_road('A', 'C');
//! map.add_road('B', 'D');
//! map.add_road('C', 'D');
//! map.add_road('D', 'E');
//!
//! let path = shortest_path(&map, 'A', 'E').unwrap();
//!
//! // shortest_path returns Ok(Some(Path)) on success
//! let path = path.unwrap();
//! assert_eq!(path.len(), 4);
//! assert_eq!(path.start(), Some(&'A'));
//! assert_eq!(path.goal(), Some(&'E'));
//! assert!((path.cost - 4.0).abs() < 1e-9);
//! ```
//!
//! Unknown endpoints and unreachable goals are not errors, they simply yield no Path:
//! ```
//! # use road_astar::prelude::*;
//! let mut map = RoadMap::new();
//! map.add_intersection(0, (0.0, 0.0));
//! map.add_intersection(1, (1.0, 0.0));
//!
//! assert_eq!(shortest_path(&map, 0, 1), Ok(None)); // no Road between them
//! assert_eq!(shortest_path(&map, 0, 7), Ok(None)); // 7 is not on the map
//! ```
//!
//! ### Metrics
//! The distance used for both the Road costs and the Heuristic is a [`Metric`](metric::Metric).
//! The default is [`Euclidean`](metric::Euclidean). [`Manhattan`](metric::Manhattan) and
//! [`Octile`](metric::Octile) are provided for maps where movement is restricted to 4 or 8
//! directions.
//! ```
//! # use road_astar::prelude::*;
//! # let mut map = RoadMap::new();
//! # map.add_intersection(0, (0.0, 0.0));
//! # map.add_intersection(1, (3.0, 4.0));
//! # map.add_road(0, 1);
//! let path = shortest_path_with(&map, 0, 1, Manhattan, SearchConfig::default())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.cost, 7.0);
//! ```
//!
//! ### Configuration
//! The last parameter of [`shortest_path_with`](search::shortest_path_with) is a
//! [`SearchConfig`](search::SearchConfig) with options to validate the map or to bound the
//! amount of work a single search may do:
//! ```
//! # use road_astar::prelude::*;
//! # let mut map = RoadMap::new();
//! # map.add_intersection(0, (0.0, 0.0));
//! # map.add_intersection(1, (1.0, 0.0));
//! # map.add_road(0, 1);
//! let config = SearchConfig {
//!     expansion_limit: Some(1000),
//!     ..SearchConfig::STRICT
//! };
//! assert!(shortest_path_with(&map, 0, 1, Euclidean, config).is_ok());
//! ```

#[cfg(feature = "log")]
macro_rules! search_log {
	($level: ident, $($arg: tt)+) => {
		log::$level!($($arg)+)
	};
}
#[cfg(not(feature = "log"))]
macro_rules! search_log {
	($level: ident, $($arg: tt)+) => {
		if false {
			let _ = format_args!($($arg)+);
		}
	};
}

mod error;
pub use self::error::SearchError;

pub mod node_id;

pub mod metric;

pub mod road_map;

pub mod distance;

pub mod route;

mod frontier;

pub mod path;

pub mod search;
pub use self::search::{shortest_path, shortest_path_with, SearchConfig};

/// The most commonly used items of this crate
pub mod prelude {
	pub use crate::{
		metric::{Euclidean, Manhattan, Metric, Octile, Point},
		path::Path,
		road_map::RoadMap,
		search::{shortest_path, shortest_path_with, SearchConfig},
		SearchError,
	};
}
