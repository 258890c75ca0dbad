//! Error types of this crate.
//!
//! Not finding a Path is not an Error: goal-directed searches report that as `Ok(None)`.

use crate::{NodeId, Point};
use thiserror::Error;

/// Returned by [`PriorityQueue::dequeue`](crate::PriorityQueue::dequeue) and
/// [`PriorityQueue::peek`](crate::PriorityQueue::peek) when the queue holds no elements.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the priority queue is empty")]
pub struct EmptyQueueError;

/// Returned when parsing an unknown [`Algorithm`](crate::search::Algorithm) name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search algorithm {0:?}")]
pub struct ParseAlgorithmError(pub String);

/// Violated preconditions when building or searching a Graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// A NodeId does not belong to the Graph.
	#[error("node {id} is out of range for a graph with {count} nodes")]
	NodeOutOfRange {
		/// the offending id
		id: NodeId,
		/// the number of Nodes in the Graph
		count: usize,
	},

	/// A Point lies outside of a [`TileMap`](crate::TileMap).
	#[error("point {point:?} is outside of the {width}x{height} map")]
	PointOutOfBounds {
		/// the offending Point
		point: Point,
		/// width of the map
		width: usize,
		/// height of the map
		height: usize,
	},

	/// A row of a Grid has a different length than the first row.
	#[error("grid row {row} has {found} cells, expected {expected}")]
	RaggedGrid {
		/// index of the row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of this row
		found: usize,
	},

	/// The Cost of a Path does not fit into a [`Cost`](crate::Cost).
	#[error("the cost of reaching node {node} overflows")]
	CostOverflow {
		/// the Node whose weight made the sum overflow
		node: NodeId,
	},

	/// A recursive search went deeper than its limit.
	#[error("recursion went deeper than {limit} nodes")]
	RecursionLimit {
		/// the maximum depth
		limit: usize,
	},

	/// A 2-D layout was requested with zero columns.
	#[error("a grid layout needs at least one column")]
	ZeroWidth,
}

/// Result type with [`GraphError`] as the default Error.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages() {
		assert_eq!(
			GraphError::NodeOutOfRange { id: 7, count: 5 }.to_string(),
			"node 7 is out of range for a graph with 5 nodes"
		);
		assert_eq!(EmptyQueueError.to_string(), "the priority queue is empty");
		assert_eq!(
			GraphError::CostOverflow { node: 3 }.to_string(),
			"the cost of reaching node 3 overflows"
		);
		assert_eq!(
			GraphError::RecursionLimit { limit: 2048 }.to_string(),
			"recursion went deeper than 2048 nodes"
		);
	}
}
