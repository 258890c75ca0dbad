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

//! Traversals and shortest Paths on weighted Graphs.
//!
//! ## Introduction
//! This crate provides a small set of classic search algorithms that all work on the same
//! [`Graph`] abstraction:
//! - depth-first and breadth-first traversals, which return the order in which Nodes are visited
//! - a breadth-first Path search, which returns the Path with the fewest Nodes
//! - Dijkstra and A*, which return the cheapest Path
//!
//! Every Node has a weight: the Cost of entering it. The Cost of a Path is the sum of the weights
//! of all its Nodes, the start included.
//!
//! Two Graphs are provided. [`NodeGraph`] is a free-form directed Graph, where a Node can be
//! visited as long as it has at least one neighbor. [`TileMap`] is a 2-D Grid, where a Tile can be
//! visited if its terrain is passable and adjacency is decided by a
//! [`Neighborhood`](neighbors::Neighborhood).
//!
//! ## Examples
//! Building a Graph from a Grid of weights, where `-1` is a wall:
//! ```
//! use graph_search::{prelude::*, search};
//!
//! let grid: [[isize; 5]; 5] = [
//!     [1, -1, 1, 1, 1],
//!     [1, -1, 1, 1, 1],
//!     [1, -1, 8, 1, 1],
//!     [1, -1, 8, 9, 2],
//!     [1, 1, 1, 1, 1],
//! ];
//! let mut graph = NodeGraph::from_grid(&grid).unwrap();
//!
//! // every open cell is reachable from the top left corner
//! let order = search::bfs(&graph, 0).unwrap();
//! assert_eq!(order.len(), 21);
//!
//! // the cheapest way to the top right corner
//! let path = search::dijkstra(&mut graph, 0, 4).unwrap().unwrap();
//! assert_eq!(path.first(), Some(&0));
//! assert_eq!(path.last(), Some(&4));
//! assert_eq!(path.cost, 14);
//! ```
//!
//! ### Tracing the Path on the Graph
//! The goal-directed searches leave a `previous` link on every Node they reached. Those links
//! can be read back after the search returns:
//! ```
//! # use graph_search::{prelude::*, search};
//! let mut map = TileMap::from_costs((4, 1), |_| 1, ManhattanNeighborhood::new(4, 1));
//!
//! let path = search::a_star(&mut map, 0, 3).unwrap().unwrap();
//! assert_eq!(map.points(&path), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
//! assert_eq!(map.previous(3), Some(2));
//! ```
//! The links are cleared at the start of the next goal-directed search. Searches need exclusive
//! access to the Graph for that reason.
//!
//! ### No Path
//! An unreachable goal is a normal outcome and is reported as `Ok(None)`:
//! ```
//! # use graph_search::{prelude::*, search};
//! let mut map = TileMap::from_costs(
//!     (3, 1),
//!     |(x, _)| if x == 1 { -1 } else { 1 },
//!     ManhattanNeighborhood::new(3, 1),
//! );
//! assert_eq!(search::a_star(&mut map, 0, 2).unwrap(), None);
//! ```
//! Ids that are not part of the Graph are an Error:
//! ```
//! # use graph_search::{prelude::*, search, GraphError};
//! # let mut map = TileMap::from_costs((3, 1), |_| 1, ManhattanNeighborhood::new(3, 1));
//! assert_eq!(
//!     search::dijkstra(&mut map, 0, 7),
//!     Err(GraphError::NodeOutOfRange { id: 7, count: 3 })
//! );
//! ```

/// The Type used to identify a Node. Ids are dense and start at zero.
pub type NodeId = usize;

/// The Type used for weights and the Cost of Paths
pub type Cost = usize;

/// A shorthand for Points on a Grid, `(x, y)`
pub type Point = (usize, usize);

mod error;
pub use self::error::{EmptyQueueError, GraphError, ParseAlgorithmError, Result};

mod priority_queue;
pub use self::priority_queue::PriorityQueue;

mod path;
pub use self::path::Path;

mod graph;
pub use self::graph::{Graph, GraphNode, NodeGraph, Tile, TileMap};

pub mod neighbors;

pub mod search;

/// The most commonly used Types
pub mod prelude {
	pub use crate::neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood};
	pub use crate::{Graph, NodeGraph, Path, TileMap};
}
