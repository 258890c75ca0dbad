use super::{check_node, finish_path};
use crate::error::{GraphError, Result};
use crate::{Cost, Graph, NodeId, Path, PriorityQueue};
use hashbrown::HashSet;

/// Searches the cheapest Path from `start` to `goal` using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// Entering a Node costs its weight, the start included, so the Cost of a Path is the sum of
/// the weights of all its Nodes.
///
/// Clears every `previous` link first and links each Node to the Node it was last improved from.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::{search::dijkstra, NodeGraph};
/// // A     B---E
/// // |\
/// // | \
/// // C--D
/// let mut graph = NodeGraph::new();
/// let [a, b, c, d, e] = [1, 1, 1, 9, 2].map(|weight| graph.add_node(weight));
/// graph.connect(a, c).unwrap();
/// graph.connect(a, d).unwrap();
/// graph.connect(c, d).unwrap();
/// graph.connect(b, e).unwrap();
///
/// let path = dijkstra(&mut graph, c, d).unwrap().unwrap();
/// assert_eq!(path.nodes, vec![c, d]);
/// assert_eq!(path.cost, 10);
///
/// // If the Goal cannot be reached, None is returned
/// assert_eq!(dijkstra(&mut graph, a, e).unwrap(), None);
/// ```
///
/// ## Returns
/// the Path, or `None` if `goal` is unreachable.
/// The first Node in the Path is always `start` and the last is `goal`.
pub fn dijkstra<G: Graph + ?Sized>(
	graph: &mut G,
	start: NodeId,
	goal: NodeId,
) -> Result<Option<Path<NodeId>>> {
	best_first(graph, start, goal, |_, _, _| 0, "dijkstra")
}

/// The shared loop of [`dijkstra`] and [`a_star`](super::a_star).
///
/// Entries are pushed with `distance + estimate`. There is no decrease-key: an improved Node is
/// pushed again and the outdated entries are skipped once the Node is finalized.
pub(super) fn best_first<G: Graph + ?Sized>(
	graph: &mut G,
	start: NodeId,
	goal: NodeId,
	estimate: impl Fn(&G, NodeId, NodeId) -> Cost,
	name: &str,
) -> Result<Option<Path<NodeId>>> {
	check_node(graph, start)?;
	check_node(graph, goal)?;
	log::trace!("{} from {} to {}", name, start, goal);
	graph.reset_previous();

	let node_count = graph.node_count();
	let mut distance: Vec<Option<Cost>> = vec![None; node_count];
	let mut finalized = HashSet::with_capacity(node_count);
	let mut frontier = PriorityQueue::with_capacity(node_count);
	let mut neighbors = Vec::new();

	let start_weight = graph.weight(start);
	distance[start] = Some(start_weight);
	let score = add_cost(start_weight, estimate(&*graph, start, goal), start)?;
	frontier.enqueue(start, score);

	let mut success = false;
	while let Some((current, _)) = frontier.pop() {
		if finalized.contains(&current) {
			continue;
		}
		if current == goal {
			success = true;
			break;
		}
		finalized.insert(current);
		let Some(current_distance) = distance[current] else {
			continue;
		};

		neighbors.clear();
		neighbors.extend(graph.neighbors(current));
		for &next in neighbors.iter() {
			if !graph.can_visit(next) || finalized.contains(&next) {
				continue;
			}
			let candidate = add_cost(current_distance, graph.weight(next), next)?;
			if distance[next].map_or(true, |known| candidate < known) {
				distance[next] = Some(candidate);
				graph.set_previous(next, Some(current));
				let score = add_cost(candidate, estimate(&*graph, next, goal), next)?;
				frontier.enqueue(next, score);
			}
		}
	}

	if !success {
		log::debug!(
			"{} from {} to {}: no path after finalizing {} nodes",
			name,
			start,
			goal,
			finalized.len()
		);
		return Ok(None);
	}
	log::trace!("{} finalized {} nodes", name, finalized.len());
	let path = finish_path(graph, start, goal, name)?;
	if let Some(path) = &path {
		debug_assert_eq!(Some(path.cost), distance[goal]);
	}
	Ok(path)
}

fn add_cost(a: Cost, b: Cost, node: NodeId) -> Result<Cost> {
	a.checked_add(b).ok_or(GraphError::CostOverflow { node })
}
