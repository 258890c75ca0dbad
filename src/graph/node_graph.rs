use super::Graph;
use crate::error::{GraphError, Result};
use crate::neighbors::manhattan_ids;
use crate::{Cost, NodeId};
use std::cell::Cell;

/// A Node of a [`NodeGraph`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	/// the id of this Node, equal to its index in the Graph
	pub id: NodeId,
	/// the Cost of entering this Node
	pub weight: Cost,
	/// the outgoing edges, in insertion order
	pub neighbors: Vec<NodeId>,
	/// the Node this one was reached from in the last goal-directed search
	pub previous: Option<NodeId>,
}

impl GraphNode {
	fn new(id: NodeId, weight: Cost) -> GraphNode {
		GraphNode {
			id,
			weight,
			neighbors: Vec::new(),
			previous: None,
		}
	}

	/// A Node can be visited if it has at least one neighbor
	pub fn can_visit(&self) -> bool {
		!self.neighbors.is_empty()
	}
}

/// A free-form directed Graph of weighted Nodes.
///
/// ## Examples
/// ```
/// # use graph_search::{Graph, NodeGraph};
/// let mut graph = NodeGraph::new();
/// let a = graph.add_node(1);
/// let b = graph.add_node(5);
/// graph.connect(a, b).unwrap();
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.neighbors(a).collect::<Vec<_>>(), vec![b]);
/// assert!(graph.can_visit(b));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NodeGraph {
	nodes: Vec<GraphNode>,
	columns: Option<usize>,
	min_weight: Cell<Option<Cost>>,
}

impl NodeGraph {
	/// Creates an empty Graph
	pub fn new() -> NodeGraph {
		NodeGraph::default()
	}

	/// Builds a Graph from a Grid of weights, one Node per cell in row-major order.
	///
	/// A negative cell is a wall: it gets weight 0 and no neighbors, so it can never be visited.
	/// Every other cell is linked to its orthogonal non-wall neighbors (up, right, down, left).
	/// The Graph uses the Grid's width as its layout for the A* heuristic.
	///
	/// ## Examples
	/// ```
	/// # use graph_search::{Graph, NodeGraph};
	/// let grid: [[isize; 3]; 2] = [
	///     [1, -1, 1],
	///     [1, 1, 1],
	/// ];
	/// let graph = NodeGraph::from_grid(&grid).unwrap();
	///
	/// assert_eq!(graph.node_count(), 6);
	/// assert!(!graph.can_visit(1));
	/// assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![3]);
	/// assert_eq!(graph.neighbors(4).collect::<Vec<_>>(), vec![5, 3]);
	/// ```
	pub fn from_grid<R: AsRef<[isize]>>(rows: &[R]) -> Result<NodeGraph> {
		let width = rows.first().map_or(0, |row| row.as_ref().len());
		if width == 0 {
			return Err(GraphError::ZeroWidth);
		}
		for (row, cells) in rows.iter().enumerate() {
			let found = cells.as_ref().len();
			if found != width {
				return Err(GraphError::RaggedGrid {
					row,
					expected: width,
					found,
				});
			}
		}
		let height = rows.len();
		let cell = |x: usize, y: usize| rows[y].as_ref()[x];

		let mut graph = NodeGraph::new();
		for y in 0..height {
			for x in 0..width {
				graph.add_node(Cost::try_from(cell(x, y)).unwrap_or(0));
			}
		}

		let offsets: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
		for y in 0..height {
			for x in 0..width {
				if cell(x, y) < 0 {
					continue;
				}
				let id = y * width + x;
				for (dx, dy) in offsets {
					let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
					else {
						continue;
					};
					if nx < width && ny < height && cell(nx, ny) >= 0 {
						graph.nodes[id].neighbors.push(ny * width + nx);
					}
				}
			}
		}
		graph.columns = Some(width);
		log::trace!("built a {}x{} node graph", width, height);
		Ok(graph)
	}

	/// Declares that the Nodes are laid out in row-major order on a Grid `columns` wide.
	///
	/// Enables the Manhattan heuristic for A*. Only use this if edges run between orthogonally
	/// adjacent cells, otherwise the heuristic can overestimate.
	pub fn with_columns(mut self, columns: usize) -> Result<NodeGraph> {
		if columns == 0 {
			return Err(GraphError::ZeroWidth);
		}
		self.columns = Some(columns);
		Ok(self)
	}

	/// The width of the declared layout, if any
	pub fn columns(&self) -> Option<usize> {
		self.columns
	}

	/// Adds a Node without any edges and returns its id
	pub fn add_node(&mut self, weight: Cost) -> NodeId {
		let id = self.nodes.len();
		self.nodes.push(GraphNode::new(id, weight));
		self.min_weight.set(None);
		id
	}

	/// Adds a directed edge from `from` to `to`
	pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
		self.check(from)?;
		self.check(to)?;
		self.nodes[from].neighbors.push(to);
		self.min_weight.set(None);
		Ok(())
	}

	/// Adds edges in both directions between `a` and `b`
	pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<()> {
		self.add_edge(a, b)?;
		self.add_edge(b, a)
	}

	/// Changes the weight of a Node
	pub fn set_weight(&mut self, id: NodeId, weight: Cost) -> Result<()> {
		self.check(id)?;
		self.nodes[id].weight = weight;
		self.min_weight.set(None);
		Ok(())
	}

	/// The Node with the given id, if it exists
	pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
		self.nodes.get(id)
	}

	/// All Nodes in id order
	pub fn iter(&self) -> std::slice::Iter<'_, GraphNode> {
		self.nodes.iter()
	}

	fn check(&self, id: NodeId) -> Result<()> {
		if id < self.nodes.len() {
			Ok(())
		} else {
			Err(GraphError::NodeOutOfRange {
				id,
				count: self.nodes.len(),
			})
		}
	}

	fn min_visitable_weight(&self) -> Cost {
		if let Some(weight) = self.min_weight.get() {
			return weight;
		}
		let weight = self
			.nodes
			.iter()
			.filter(|node| node.can_visit())
			.map(|node| node.weight)
			.min()
			.unwrap_or(0);
		self.min_weight.set(Some(weight));
		weight
	}
}

impl Graph for NodeGraph {
	fn node_count(&self) -> usize {
		self.nodes.len()
	}
	fn weight(&self, id: NodeId) -> Cost {
		self.nodes[id].weight
	}
	fn neighbors(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
		Box::new(self.nodes[id].neighbors.iter().copied())
	}
	fn can_visit(&self, id: NodeId) -> bool {
		self.nodes[id].can_visit()
	}
	fn previous(&self, id: NodeId) -> Option<NodeId> {
		self.nodes[id].previous
	}
	fn set_previous(&mut self, id: NodeId, previous: Option<NodeId>) {
		self.nodes[id].previous = previous;
	}
	fn reset_previous(&mut self) {
		for node in self.nodes.iter_mut() {
			node.previous = None;
		}
	}
	fn heuristic(&self, from: NodeId, goal: NodeId) -> Cost {
		match self.columns {
			// every step onto a visitable Node costs at least the smallest such weight
			Some(columns) => {
				manhattan_ids(from, goal, columns).saturating_mul(self.min_visitable_weight())
			}
			None => 0,
		}
	}
}

use std::ops::Index;
impl Index<NodeId> for NodeGraph {
	type Output = GraphNode;
	#[track_caller]
	fn index(&self, index: NodeId) -> &GraphNode {
		&self.nodes[index]
	}
}
