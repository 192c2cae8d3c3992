//! A Module with the most common Metrics

use std::fmt::Debug;

/// A shorthand for the Position of an Intersection on the map
pub type Point = (f64, f64);

/// Defines how far apart two Points on the map are.
///
/// The Metric is used twice during a search: to get the cost of walking a Road between two
/// Intersections, and as the Heuristic for how far an Intersection is from the goal. Since both
/// use the same Metric, the Heuristic never overestimates the remaining cost, and the search
/// always returns a shortest Path.
///
/// For that guarantee to hold, an implementation must be non-negative, symmetric
/// (`distance(a, b) == distance(b, a)`) and satisfy the triangle inequality.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`Euclidean`] for straight Roads that can point in any direction
/// - [`Manhattan`] for Roads along the 2 axes
/// - [`Octile`] for Roads along the 2 axes and the 2 diagonals
pub trait Metric: Clone + Debug {
	/// The distance between `a` and `b`
	fn distance(&self, a: Point, b: Point) -> f64;
}

/// The straight-line distance between two Points.
///
/// ```
/// # use road_astar::metric::{Euclidean, Metric};
/// assert_eq!(Euclidean.distance((0.0, 0.0), (3.0, 4.0)), 5.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Metric for Euclidean {
	fn distance(&self, a: Point, b: Point) -> f64 {
		let (dx, dy) = deltas(a, b);
		(dx * dx + dy * dy).sqrt()
	}
}

/// The distance when moving along the 4 cardinal directions.
///
/// Also known as [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
/// ```
/// # use road_astar::metric::{Manhattan, Metric};
/// assert_eq!(Manhattan.distance((0.0, 0.0), (3.0, 4.0)), 7.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Metric for Manhattan {
	fn distance(&self, a: Point, b: Point) -> f64 {
		let (dx, dy) = deltas(a, b);
		dx + dy
	}
}

/// The distance when moving along the 4 cardinal directions as well as the 4 diagonals.
///
/// A step along an axis costs `straight`, a diagonal step costs `diagonal`.
/// `diagonal` has to be between `straight` and `2 * straight` for this to be a proper Metric.
///
/// ```
/// # use road_astar::metric::{Octile, Metric};
/// let octile = Octile::default();
/// assert_eq!(octile.distance((0.0, 0.0), (3.0, 0.0)), 3.0);
/// assert!((octile.distance((0.0, 0.0), (3.0, 4.0)) - 5.2).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Octile {
	/// The cost of one step along an axis (defaults to `1.0`)
	pub straight: f64,
	/// The cost of one diagonal step (defaults to `1.4`)
	pub diagonal: f64,
}

impl Default for Octile {
	fn default() -> Octile {
		Octile {
			straight: 1.0,
			diagonal: 1.4,
		}
	}
}

impl Metric for Octile {
	fn distance(&self, a: Point, b: Point) -> f64 {
		let (dx, dy) = deltas(a, b);
		self.straight * (dx + dy) + (self.diagonal - 2.0 * self.straight) * dx.min(dy)
	}
}

fn deltas(a: Point, b: Point) -> (f64, f64) {
	((a.0 - b.0).abs(), (a.1 - b.1).abs())
}
