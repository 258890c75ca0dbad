use super::{check_node, VisitMarking, DEFAULT_RECURSION_LIMIT};
use crate::error::{GraphError, Result};
use crate::{Graph, NodeId};
use hashbrown::HashSet;
use std::collections::VecDeque;

/// Visits every Node reachable from `start` depth-first, using an explicit stack.
///
/// Nodes are marked as visited when they are pushed, so every Node enters the stack at most
/// once. See [`dfs_with`] for the classic variant that marks Nodes when they are popped.
///
/// ## Examples
/// ```
/// # use graph_search::{search::dfs, NodeGraph};
/// //   1 - 3
/// //  /
/// // 0 - 2
/// let mut graph = NodeGraph::new();
/// for _ in 0..4 {
///     graph.add_node(1);
/// }
/// graph.connect(0, 1).unwrap();
/// graph.connect(0, 2).unwrap();
/// graph.connect(1, 3).unwrap();
///
/// assert_eq!(dfs(&graph, 0).unwrap(), vec![0, 2, 1, 3]);
/// ```
///
/// ## Returns
/// the Nodes in the order they were visited, `start` first. Every reachable Node appears once.
pub fn dfs<G: Graph + ?Sized>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
	dfs_with(graph, start, VisitMarking::OnPush)
}

/// [`dfs`] with a choice of when Nodes are marked as visited.
///
/// With [`VisitMarking::OnPop`] a Node may be pushed several times before it is first popped.
/// Only that first pop records it, so the result is still free of duplicates and follows the
/// textbook preorder.
pub fn dfs_with<G: Graph + ?Sized>(
	graph: &G,
	start: NodeId,
	marking: VisitMarking,
) -> Result<Vec<NodeId>> {
	check_node(graph, start)?;
	log::trace!("dfs from {} ({:?})", start, marking);

	let mut order = Vec::new();
	let mut visited = HashSet::new();
	let mut stack = vec![start];
	if marking == VisitMarking::OnPush {
		visited.insert(start);
	}

	while let Some(current) = stack.pop() {
		if marking == VisitMarking::OnPop && !visited.insert(current) {
			continue;
		}
		order.push(current);

		for next in graph.neighbors(current) {
			if !graph.can_visit(next) || visited.contains(&next) {
				continue;
			}
			if marking == VisitMarking::OnPush {
				visited.insert(next);
			}
			stack.push(next);
		}
	}

	log::debug!("dfs from {} visited {} nodes", start, order.len());
	Ok(order)
}

/// Visits every Node reachable from `start` depth-first, by recursive descent.
///
/// Neighbors are descended into in insertion order. The recursion is as deep as the longest
/// chain of first visits and stops with [`GraphError::RecursionLimit`] beyond
/// [`DEFAULT_RECURSION_LIMIT`] Nodes. Use [`dfs`] for large Graphs, or
/// [`dfs_recursive_with`] on a thread with a bigger stack.
pub fn dfs_recursive<G: Graph + ?Sized>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
	dfs_recursive_with(graph, start, DEFAULT_RECURSION_LIMIT)
}

/// [`dfs_recursive`] with a custom maximum depth.
///
/// ## Examples
/// ```
/// # use graph_search::{search::dfs_recursive_with, GraphError, NodeGraph};
/// let mut graph = NodeGraph::new();
/// for id in 0..10 {
///     graph.add_node(1);
///     if id > 0 {
///         graph.connect(id - 1, id).unwrap();
///     }
/// }
/// assert_eq!(dfs_recursive_with(&graph, 0, 10).unwrap().len(), 10);
/// assert_eq!(
///     dfs_recursive_with(&graph, 0, 9),
///     Err(GraphError::RecursionLimit { limit: 9 })
/// );
/// ```
pub fn dfs_recursive_with<G: Graph + ?Sized>(
	graph: &G,
	start: NodeId,
	limit: usize,
) -> Result<Vec<NodeId>> {
	check_node(graph, start)?;
	log::trace!("recursive dfs from {} (limit {})", start, limit);

	let mut order = Vec::new();
	let mut visited = HashSet::new();
	descend(graph, start, 1, limit, &mut visited, &mut order)?;

	log::debug!("recursive dfs from {} visited {} nodes", start, order.len());
	Ok(order)
}

fn descend<G: Graph + ?Sized>(
	graph: &G,
	node: NodeId,
	depth: usize,
	limit: usize,
	visited: &mut HashSet<NodeId>,
	order: &mut Vec<NodeId>,
) -> Result<()> {
	if depth > limit {
		log::debug!("recursive dfs hit its limit of {} at node {}", limit, node);
		return Err(GraphError::RecursionLimit { limit });
	}
	visited.insert(node);
	order.push(node);
	for next in graph.neighbors(node) {
		if graph.can_visit(next) && !visited.contains(&next) {
			descend(graph, next, depth + 1, limit, visited, order)?;
		}
	}
	Ok(())
}

/// Visits every Node reachable from `start` breadth-first.
///
/// Produces the visit order, not a Path. Use [`bfs_path`](super::bfs_path) for that.
///
/// ## Examples
/// ```
/// # use graph_search::{search::bfs, NodeGraph};
/// //   1 - 3
/// //  /
/// // 0 - 2
/// let mut graph = NodeGraph::new();
/// for _ in 0..4 {
///     graph.add_node(1);
/// }
/// graph.connect(0, 1).unwrap();
/// graph.connect(0, 2).unwrap();
/// graph.connect(1, 3).unwrap();
///
/// assert_eq!(bfs(&graph, 0).unwrap(), vec![0, 1, 2, 3]);
/// ```
pub fn bfs<G: Graph + ?Sized>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
	check_node(graph, start)?;
	log::trace!("bfs from {}", start);

	let mut order = Vec::new();
	let mut visited = HashSet::new();
	let mut queue = VecDeque::new();
	visited.insert(start);
	queue.push_back(start);

	while let Some(current) = queue.pop_front() {
		order.push(current);
		for next in graph.neighbors(current) {
			if graph.can_visit(next) && visited.insert(next) {
				queue.push_back(next);
			}
		}
	}

	log::debug!("bfs from {} visited {} nodes", start, order.len());
	Ok(order)
}
