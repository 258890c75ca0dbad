//! Neighborhoods for moving across a [`TileMap`](crate::TileMap)

use crate::{NodeId, Point};
use std::fmt::Debug;

/// Defines which Tiles are adjacent to a Tile.
///
/// Provides all in-bounds neighbors of a Point and the distance between two Points in the
/// matching Metric. The distance is the number of steps, weights are applied by the map.
///
/// Provided implementations:
/// - [`ManhattanNeighborhood`] for moving up, down, left or right
/// - [`MooreNeighborhood`] for additionally moving along the 4 diagonals
pub trait Neighborhood: Clone + Debug {
	/// All neighbors of `point` that lie within the bounds of the Grid, in a fixed order.
	///
	/// Passability is checked by the caller.
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>>;
	/// The minimum number of steps needed to go from `point` to `goal`.
	fn heuristic(&self, point: Point, goal: Point) -> usize;
}

/// The taxicab distance between two Points
pub fn manhattan(a: Point, b: Point) -> usize {
	a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// The taxicab distance between two row-major ids of a Grid that is `columns` wide.
///
/// `x = id % columns`, `y = id / columns`.
///
/// ```
/// # use graph_search::neighbors::manhattan_ids;
/// // 0 1 2
/// // 3 4 5
/// // 6 7 8
/// assert_eq!(manhattan_ids(0, 8, 3), 4);
/// assert_eq!(manhattan_ids(5, 3, 3), 2);
/// ```
pub fn manhattan_ids(a: NodeId, b: NodeId, columns: usize) -> usize {
	manhattan((a % columns, a / columns), (b % columns, b / columns))
}

fn offset_points(
	point: Point,
	(width, height): (usize, usize),
	offsets: &'static [(isize, isize)],
) -> Box<dyn Iterator<Item = Point>> {
	Box::new(offsets.iter().filter_map(move |&(dx, dy)| {
		let x = point.0.checked_add_signed(dx)?;
		let y = point.1.checked_add_signed(dy)?;
		(x < width && y < height).then_some((x, y))
	}))
}

/// Movement along the 4 cardinal directions.
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
	width: usize,
	height: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood for a Grid of `width` x `height`.
	pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { width, height }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
		// up, right, down, left
		const OFFSETS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
		offset_points(point, (self.width, self.height), &OFFSETS)
	}
	fn heuristic(&self, point: Point, goal: Point) -> usize {
		manhattan(point, goal)
	}
}

/// Movement along the 4 cardinal directions and the 4 diagonals.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighborhood {
	width: usize,
	height: usize,
}

impl MooreNeighborhood {
	/// Creates a new MooreNeighborhood for a Grid of `width` x `height`.
	pub fn new(width: usize, height: usize) -> MooreNeighborhood {
		MooreNeighborhood { width, height }
	}
}

impl Neighborhood for MooreNeighborhood {
	fn get_all_neighbors(&self, point: Point) -> Box<dyn Iterator<Item = Point>> {
		// clockwise, starting at up
		const OFFSETS: [(isize, isize); 8] = [
			(0, -1),
			(1, -1),
			(1, 0),
			(1, 1),
			(0, 1),
			(-1, 1),
			(-1, 0),
			(-1, -1),
		];
		offset_points(point, (self.width, self.height), &OFFSETS)
	}
	fn heuristic(&self, point: Point, goal: Point) -> usize {
		point.0.abs_diff(goal.0).max(point.1.abs_diff(goal.1))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn manhattan_neighbors_in_bounds() {
		let neighborhood = ManhattanNeighborhood::new(5, 5);
		assert_eq!(
			neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
			vec![(0, 1), (1, 2), (0, 3)],
		);
		assert_eq!(
			neighborhood.get_all_neighbors((4, 4)).collect::<Vec<_>>(),
			vec![(4, 3), (3, 4)],
		);
	}

	#[test]
	fn moore_neighbors_in_bounds() {
		let neighborhood = MooreNeighborhood::new(5, 5);
		assert_eq!(
			neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
			vec![(0, 1), (1, 1), (1, 2), (1, 3), (0, 3)],
		);
	}

	#[test]
	fn heuristics() {
		assert_eq!(ManhattanNeighborhood::new(5, 5).heuristic((3, 1), (0, 0)), 4);
		assert_eq!(MooreNeighborhood::new(5, 5).heuristic((3, 1), (0, 0)), 3);
		assert_eq!(manhattan_ids(7, 7, 4), 0);
		assert_eq!(manhattan_ids(0, 7, 4), 3 + 1);
	}
}
