use std::fmt::Debug;
use thiserror::Error;

/// The ways a search can fail, apart from simply not finding a Path.
///
/// An unknown `start` or `goal` and an unreachable `goal` are **not** errors; they are reported
/// as `Ok(None)` by [`shortest_path`](crate::shortest_path). A `SearchError` always means that
/// the map itself is broken, or that the search was stopped by its [`SearchConfig`](crate::SearchConfig).
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError<Id: Debug> {
	/// A Road leads to an Intersection that has no coordinates.
	#[error("node {0:?} is referenced by a road but has no coordinates")]
	MissingNode(Id),

	/// A Road exists from `from` to `to`, but not back from `to` to `from`.
	#[error("road from {from:?} to {to:?} has no road leading back")]
	Asymmetric {
		/// the Intersection the one-way Road starts at
		from: Id,
		/// the Intersection the one-way Road ends at
		to: Id,
	},

	/// The search expanded more Routes than allowed by `SearchConfig::expansion_limit`.
	#[error("search gave up after expanding {0} routes")]
	ExpansionLimit(usize),
}
