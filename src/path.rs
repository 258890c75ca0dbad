use crate::Cost;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Index};

/// A shortest Path found by one of the goal-directed searches.
///
/// Stores the Nodes from start to goal (both inclusive) in `nodes` and the total Cost in `cost`.
/// The Cost is the sum of the weights of every Node on the Path, the start included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
	/// the Nodes, from start to goal
	pub nodes: Vec<P>,
	/// the total Cost of the Path
	pub cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Nodes and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use graph_search::Path;
	/// let path = Path::new(vec![0, 1, 4], 3);
	///
	/// assert_eq!(path.len(), 3);
	/// assert_eq!(path.cost, 3);
	/// assert_eq!(path.first(), Some(&0));
	/// assert_eq!(path.last(), Some(&4));
	/// ```
	pub fn new(nodes: Vec<P>, cost: Cost) -> Path<P> {
		Path { nodes, cost }
	}

	/// The number of moves, which is one less than the number of Nodes
	pub fn steps(&self) -> usize {
		self.nodes.len().saturating_sub(1)
	}

	/// Consumes the Path, returning the Nodes
	pub fn into_nodes(self) -> Vec<P> {
		self.nodes
	}

	/// Maps every Node of the Path, keeping the Cost
	pub fn map<Q>(self, f: impl FnMut(P) -> Q) -> Path<Q> {
		Path::new(self.nodes.into_iter().map(f).collect(), self.cost)
	}
}

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.nodes[index]
	}
}

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.nodes
	}
}

impl<P: Eq> Ord for Path<P> {
	fn cmp(&self, other: &Path<P>) -> Ordering {
		self.cost.cmp(&other.cost)
	}
}

impl<P: Eq> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<P: fmt::Display> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		let mut nodes = self.nodes.iter();
		match nodes.next() {
			None => write!(fmt, "<empty>"),
			Some(first) => {
				write!(fmt, "{}", first)?;
				nodes.try_for_each(|node| write!(fmt, " -> {}", node))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Path;

	#[test]
	fn index_and_steps() {
		let path = Path::new(vec![4, 2, 0], 42);

		assert_eq!(path[0], 4);
		assert_eq!(path[2], 0);
		assert_eq!(path.steps(), 2);
		assert_eq!(Path::<u8>::new(vec![], 0).steps(), 0);
	}

	#[test]
	fn display() {
		let path = Path::new(vec![4, 2, 0], 42);
		assert_eq!(path.to_string(), "Path[Cost = 42]: 4 -> 2 -> 0");

		let empty = Path::new(Vec::<i32>::new(), 0);
		assert_eq!(empty.to_string(), "Path[Cost = 0]: <empty>");
	}

	#[test]
	fn ordered_by_cost() {
		let short = Path::new(vec![1, 2, 3, 4], 4);
		let long = Path::new(vec![1, 4], 9);
		assert!(short < long);
		assert_eq!(short.clone().map(|n| n * 10).nodes, vec![10, 20, 30, 40]);
	}
}
