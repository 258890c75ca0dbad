//! Traversals and shortest-Path searches over any [`Graph`].
//!
//! Every function takes the Graph explicitly and borrows it for the duration of one call.
//!
//! | Function | Result | Writes `previous` |
//! |---|---|---|
//! | [`dfs`], [`dfs_with`], [`dfs_recursive`], [`dfs_recursive_with`] | depth-first visit order | no |
//! | [`bfs`] | breadth-first visit order | no |
//! | [`bfs_path`] | Path with the fewest Nodes | yes |
//! | [`dijkstra`] | cheapest Path | yes |
//! | [`a_star`] | cheapest Path, guided by [`Graph::heuristic`] | yes |
//!
//! The start Node is always explored, even if it could not be visited itself. Neighbors that
//! fail [`Graph::can_visit`] are never entered.
//!
//! The goal-directed searches report an unreachable goal as `Ok(None)`. An `Err` means that
//! `start` or `goal` is not part of the Graph, that the Cost of a Path does not fit into a
//! [`Cost`](crate::Cost), or that [`dfs_recursive`] went too deep.

use crate::error::{GraphError, ParseAlgorithmError, Result};
use crate::{Cost, Graph, NodeId, Path};
use std::fmt;
use std::str::FromStr;

mod traversal;
pub use self::traversal::{bfs, dfs, dfs_recursive, dfs_recursive_with, dfs_with};

mod bfs_path;
pub use self::bfs_path::bfs_path;

mod dijkstra;
pub use self::dijkstra::dijkstra;

mod a_star;
pub use self::a_star::a_star;

/// How deep [`dfs_recursive`] may descend before giving up
pub const DEFAULT_RECURSION_LIMIT: usize = 2048;

/// When the iterative [`dfs_with`] marks a Node as visited
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VisitMarking {
	/// when it is pushed onto the stack. Each Node is pushed at most once.
	#[default]
	OnPush,
	/// when it is first popped from the stack. Gives the textbook preorder.
	OnPop,
}

/// Options for [`search`]
///
/// Default options:
/// ```
/// # use graph_search::search::{SearchConfig, VisitMarking};
/// assert_eq!(
/// 	SearchConfig {
/// 		dfs_marking: VisitMarking::OnPush,
/// 		recursion_limit: 2048,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// How [`Algorithm::Dfs`] marks visited Nodes. (See [`VisitMarking`])
	pub dfs_marking: VisitMarking,
	/// The maximum depth of [`Algorithm::DfsRecursive`], see [`dfs_recursive_with`].
	/// Only raise this when searching on a thread with a large enough stack.
	pub recursion_limit: usize,
}

impl SearchConfig {
	/// The default options
	pub const DEFAULT: SearchConfig = SearchConfig {
		dfs_marking: VisitMarking::OnPush,
		recursion_limit: DEFAULT_RECURSION_LIMIT,
	};
	/// Options for a depth-first search in textbook preorder
	pub const PREORDER_DFS: SearchConfig = SearchConfig {
		dfs_marking: VisitMarking::OnPop,
		recursion_limit: DEFAULT_RECURSION_LIMIT,
	};
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig::DEFAULT
	}
}

/// The algorithms that [`search`] can run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// [`dfs_with`]
	Dfs,
	/// [`dfs_recursive_with`]
	DfsRecursive,
	/// [`bfs`]
	Bfs,
	/// [`bfs_path`]
	BfsPath,
	/// [`dijkstra`]
	Dijkstra,
	/// [`a_star`]
	AStar,
}

impl Algorithm {
	/// All algorithms, traversals first
	pub const ALL: [Algorithm; 6] = [
		Algorithm::Dfs,
		Algorithm::DfsRecursive,
		Algorithm::Bfs,
		Algorithm::BfsPath,
		Algorithm::Dijkstra,
		Algorithm::AStar,
	];

	/// `true` for the algorithms that search for a goal and return a Path
	pub fn is_goal_directed(self) -> bool {
		matches!(
			self,
			Algorithm::BfsPath | Algorithm::Dijkstra | Algorithm::AStar
		)
	}

	fn name(self) -> &'static str {
		match self {
			Algorithm::Dfs => "dfs",
			Algorithm::DfsRecursive => "dfs-recursive",
			Algorithm::Bfs => "bfs",
			Algorithm::BfsPath => "bfs-path",
			Algorithm::Dijkstra => "dijkstra",
			Algorithm::AStar => "a-star",
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Algorithm {
	type Err = ParseAlgorithmError;

	/// Parses the names printed by `Display`, ignoring case. `astar` is accepted as well.
	fn from_str(s: &str) -> Result<Algorithm, ParseAlgorithmError> {
		let lower = s.to_ascii_lowercase();
		if lower == "astar" {
			return Ok(Algorithm::AStar);
		}
		Algorithm::ALL
			.into_iter()
			.find(|algorithm| algorithm.name() == lower)
			.ok_or_else(|| ParseAlgorithmError(s.to_owned()))
	}
}

/// What [`search`] produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
	/// the visit order of a traversal
	Visited(Vec<NodeId>),
	/// the Path found by a goal-directed search
	Found(Path<NodeId>),
	/// the goal is unreachable
	NotFound,
}

impl SearchOutcome {
	/// The visited or found Nodes. Empty for [`SearchOutcome::NotFound`]
	pub fn nodes(&self) -> &[NodeId] {
		match self {
			SearchOutcome::Visited(order) => order.as_slice(),
			SearchOutcome::Found(path) => &path.nodes,
			SearchOutcome::NotFound => &[],
		}
	}

	/// `false` only for [`SearchOutcome::NotFound`]
	pub fn is_success(&self) -> bool {
		!matches!(self, SearchOutcome::NotFound)
	}
}

/// Runs `algorithm` on `graph`.
///
/// `goal` is ignored by the traversals.
///
/// ## Examples
/// ```
/// # use graph_search::{prelude::*, search::{search, Algorithm, SearchOutcome}};
/// let grid: [[isize; 3]; 3] = [
///     [1, 1, 1],
///     [1, -1, 1],
///     [1, 1, 1],
/// ];
/// let mut graph = NodeGraph::from_grid(&grid).unwrap();
///
/// for algorithm in Algorithm::ALL {
///     let outcome = search(&mut graph, algorithm, 0, 8, &Default::default()).unwrap();
///     assert!(outcome.is_success());
///     if algorithm.is_goal_directed() {
///         assert_eq!(outcome.nodes().len(), 5);
///     } else {
///         assert_eq!(outcome.nodes().len(), 8);
///     }
/// }
/// ```
pub fn search<G: Graph + ?Sized>(
	graph: &mut G,
	algorithm: Algorithm,
	start: NodeId,
	goal: NodeId,
	config: &SearchConfig,
) -> Result<SearchOutcome> {
	let found = |path: Option<Path<NodeId>>| {
		path.map_or(SearchOutcome::NotFound, SearchOutcome::Found)
	};
	Ok(match algorithm {
		Algorithm::Dfs => SearchOutcome::Visited(dfs_with(graph, start, config.dfs_marking)?),
		Algorithm::DfsRecursive => {
			SearchOutcome::Visited(dfs_recursive_with(graph, start, config.recursion_limit)?)
		}
		Algorithm::Bfs => SearchOutcome::Visited(bfs(graph, start)?),
		Algorithm::BfsPath => found(bfs_path(graph, start, goal)?),
		Algorithm::Dijkstra => found(dijkstra(graph, start, goal)?),
		Algorithm::AStar => found(a_star(graph, start, goal)?),
	})
}

/// Walks the `previous` links back from `goal` to `start`.
///
/// Returns the Nodes from `start` to `goal`, or `None` if the links do not lead to `start`.
/// Only meaningful right after a successful goal-directed search on the same Graph.
pub fn reconstruct_path<G: Graph + ?Sized>(
	graph: &G,
	start: NodeId,
	goal: NodeId,
) -> Option<Vec<NodeId>> {
	let mut nodes = vec![goal];
	let mut current = goal;
	// a chain longer than the Graph would mean a cycle
	while current != start && nodes.len() <= graph.node_count() {
		current = graph.previous(current)?;
		nodes.push(current);
	}
	if current != start {
		return None;
	}
	nodes.reverse();
	Some(nodes)
}

fn check_node<G: Graph + ?Sized>(graph: &G, id: NodeId) -> Result<()> {
	if graph.contains(id) {
		Ok(())
	} else {
		Err(GraphError::NodeOutOfRange {
			id,
			count: graph.node_count(),
		})
	}
}

/// Turns the `previous` links into a Path after the goal was reached.
fn finish_path<G: Graph + ?Sized>(
	graph: &G,
	start: NodeId,
	goal: NodeId,
	name: &str,
) -> Result<Option<Path<NodeId>>> {
	let nodes = reconstruct_path(graph, start, goal);
	debug_assert!(nodes.is_some(), "{}: broken previous links to {}", name, goal);
	let Some(nodes) = nodes else {
		return Ok(None);
	};
	let cost = nodes.iter().try_fold(0, |cost: Cost, &id| {
		cost.checked_add(graph.weight(id))
			.ok_or(GraphError::CostOverflow { node: id })
	})?;
	let path = Path::new(nodes, cost);
	log::debug!(
		"{} from {} to {}: {} nodes, cost {}",
		name,
		start,
		goal,
		path.len(),
		path.cost
	);
	Ok(Some(path))
}
