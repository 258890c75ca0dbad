use super::{check_node, finish_path};
use crate::error::Result;
use crate::{Graph, NodeId, Path};
use hashbrown::HashSet;
use std::collections::VecDeque;

/// Searches the Path with the fewest Nodes from `start` to `goal`, ignoring weights.
///
/// Clears every `previous` link first. Each Node is linked to the Node that first enqueued it,
/// and the goal counts as reached only once it is dequeued.
///
/// ## Examples
/// ```
/// # use graph_search::{search::bfs_path, NodeGraph};
/// // 0 - 1 - 2
/// //  \     /
/// //   - 3 -
/// let mut graph = NodeGraph::new();
/// for weight in [1, 1, 1, 9] {
///     graph.add_node(weight);
/// }
/// graph.connect(0, 1).unwrap();
/// graph.connect(1, 2).unwrap();
/// graph.connect(0, 3).unwrap();
/// graph.connect(3, 2).unwrap();
///
/// let path = bfs_path(&mut graph, 0, 2).unwrap().unwrap();
/// assert_eq!(path.nodes, vec![0, 1, 2]);
/// assert_eq!(path.cost, 3);
/// ```
///
/// ## Returns
/// the Path, or `None` if `goal` is unreachable.
/// The Cost of the Path is the sum of the weights of its Nodes.
pub fn bfs_path<G: Graph + ?Sized>(
	graph: &mut G,
	start: NodeId,
	goal: NodeId,
) -> Result<Option<Path<NodeId>>> {
	check_node(graph, start)?;
	check_node(graph, goal)?;
	log::trace!("bfs path from {} to {}", start, goal);
	graph.reset_previous();

	let mut visited = HashSet::new();
	let mut queue = VecDeque::new();
	let mut neighbors = Vec::new();
	visited.insert(start);
	queue.push_back(start);

	let mut success = false;
	while let Some(current) = queue.pop_front() {
		if current == goal {
			success = true;
			break;
		}

		neighbors.clear();
		neighbors.extend(graph.neighbors(current));
		for &next in neighbors.iter() {
			if !graph.can_visit(next) || !visited.insert(next) {
				continue;
			}
			graph.set_previous(next, Some(current));
			queue.push_back(next);
		}
	}

	if !success {
		log::debug!("bfs path from {} to {}: no path", start, goal);
		return Ok(None);
	}
	finish_path(graph, start, goal, "bfs path")
}
