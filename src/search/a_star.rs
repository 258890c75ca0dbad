use super::dijkstra::best_first;
use crate::error::Result;
use crate::{Graph, NodeId, Path};

/// Searches the cheapest Path from `start` to `goal` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Works like [`dijkstra`](super::dijkstra), but orders the frontier by
/// `distance + graph.heuristic(node, goal)`. The distances themselves stay exact, so the result
/// is optimal as long as the heuristic never overestimates. Both provided Graphs guarantee that
/// when their layout is a Grid with orthogonal edges.
///
/// The provided heuristics are not the plain grid distance. Every step enters a Node that costs
/// at least the smallest visitable weight, so they return the number of steps
/// (`|ax - bx| + |ay - by|` for a [`ManhattanNeighborhood`](crate::neighbors::ManhattanNeighborhood))
/// times that weight. With a smallest weight of 0 the estimate is 0 everywhere.
/// A [`NodeGraph`](crate::NodeGraph) has no positions unless it was built by
/// [`from_grid`](crate::NodeGraph::from_grid) or given a layout by
/// [`with_columns`](crate::NodeGraph::with_columns). Without one its heuristic is 0 and A*
/// explores exactly like [`dijkstra`](super::dijkstra).
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::{prelude::*, search::a_star, Point};
/// // create and initialize Grid
/// // 0 = empty, 1 = swamp, 2 = wall
/// let grid: [[usize; 5]; 5] = [
///     [0, 2, 0, 0, 0],
///     [0, 2, 2, 2, 2],
///     [0, 1, 0, 0, 0],
///     [0, 1, 0, 2, 0],
///     [0, 0, 0, 2, 0],
/// ];
///
/// const COST_MAP: [isize; 3] = [1, 10, -1];
///
/// fn cost_fn<'a>(grid: &'a [[usize; 5]; 5]) -> impl 'a + Fn(Point) -> isize {
///     move |(x, y)| COST_MAP[grid[y][x]]
/// }
///
/// let mut map = TileMap::from_costs((5, 5), cost_fn(&grid), ManhattanNeighborhood::new(5, 5));
///
/// let start = map.id_of((0, 0)).unwrap();
/// let goal = map.id_of((4, 4)).unwrap();
///
/// let path = a_star(&mut map, start, goal).unwrap();
/// assert!(path.is_some());
/// let path = path.unwrap();
/// assert_eq!(path.cost, 13);
/// assert_eq!(map.points(&path).first(), Some(&(0, 0)));
///
/// // walled off
/// let goal = map.id_of((2, 0)).unwrap();
/// assert!(a_star(&mut map, start, goal).unwrap().is_none());
/// ```
///
/// ## Returns
/// the Path, or `None` if `goal` is unreachable.
/// The first Node in the Path is always `start` and the last is `goal`.
pub fn a_star<G: Graph + ?Sized>(
	graph: &mut G,
	start: NodeId,
	goal: NodeId,
) -> Result<Option<Path<NodeId>>> {
	best_first(
		graph,
		start,
		goal,
		|graph, node, goal| graph.heuristic(node, goal),
		"a*",
	)
}
