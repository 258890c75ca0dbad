//! The Graphs that can be searched.
//!
//! All searches are written once against the [`Graph`] trait. Two implementations are provided:
//! [`NodeGraph`] for free-form Graphs and [`TileMap`] for 2-D Grids of Tiles.

use crate::{Cost, NodeId};

mod node_graph;
pub use self::node_graph::{GraphNode, NodeGraph};

mod tile_map;
pub use self::tile_map::{Tile, TileMap};

/// The capabilities a Graph needs to be searched.
///
/// Nodes are identified by dense, zero-based [`NodeId`]s, so that an id can index per-node arrays.
///
/// Every Node carries a `previous` link. The goal-directed searches clear all of them with
/// [`reset_previous`](Graph::reset_previous) and then link every Node they reach to the Node they
/// reached it from. The links stay in place after the search returns, so the route can be traced
/// from the Graph itself.
pub trait Graph {
	/// The number of Nodes. Valid ids are `0..node_count()`.
	fn node_count(&self) -> usize;

	/// The Cost of entering the Node
	fn weight(&self, id: NodeId) -> Cost;

	/// The outgoing neighbors of a Node, in insertion order.
	///
	/// May include Nodes that cannot be visited. Those are skipped by the searches.
	fn neighbors(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

	/// Whether a search may enter the Node
	fn can_visit(&self, id: NodeId) -> bool;

	/// The Node this Node was reached from during the last goal-directed search
	fn previous(&self, id: NodeId) -> Option<NodeId>;

	/// Sets the `previous` link of a Node
	fn set_previous(&mut self, id: NodeId, previous: Option<NodeId>);

	/// Clears the `previous` link of every Node.
	fn reset_previous(&mut self) {
		for id in 0..self.node_count() {
			self.set_previous(id, None);
		}
	}

	/// `true` if `id` belongs to this Graph
	fn contains(&self, id: NodeId) -> bool {
		id < self.node_count()
	}

	/// An estimate of the Cost from `from` to `goal` that must never be too high.
	///
	/// Used by A*. The default of 0 is always correct and makes A* behave like Dijkstra.
	fn heuristic(&self, from: NodeId, goal: NodeId) -> Cost {
		let _ = (from, goal);
		0
	}
}
