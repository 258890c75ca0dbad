use super::Graph;
use crate::error::{GraphError, Result};
use crate::neighbors::{ManhattanNeighborhood, Neighborhood};
use crate::{Cost, NodeId, Path, Point};

/// A single Tile of a [`TileMap`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
	/// row-major index of the Tile, `y * width + x`
	pub id: NodeId,
	/// the position of the Tile
	pub pos: Point,
	/// the Cost of walking onto the Tile. 0 for impassable Tiles
	pub weight: Cost,
	/// whether the terrain can be walked on
	pub passable: bool,
	/// the Tile this one was reached from in the last goal-directed search
	pub previous: Option<NodeId>,
}

impl Tile {
	fn new(id: NodeId, pos: Point, cost: isize) -> Tile {
		let mut tile = Tile {
			id,
			pos,
			weight: 0,
			passable: false,
			previous: None,
		};
		tile.set_cost(cost);
		tile
	}

	fn set_cost(&mut self, cost: isize) {
		self.passable = cost >= 0;
		self.weight = Cost::try_from(cost).unwrap_or(0);
	}
}

/// A 2-D Grid of Tiles, searched as a Graph.
///
/// Tiles are identified by their row-major index. Which Tiles are adjacent is decided by the
/// [`Neighborhood`], [`ManhattanNeighborhood`] by default.
///
/// ## Examples
/// ```
/// # use graph_search::{prelude::*, Point};
/// // 0 = empty, 1 = swamp, 2 = wall
/// let grid: [[usize; 3]; 3] = [
///     [0, 2, 0],
///     [0, 1, 0],
///     [0, 0, 0],
/// ];
/// const COST_MAP: [isize; 3] = [1, 5, -1];
///
/// let map = TileMap::from_costs(
///     (3, 3),
///     |(x, y): Point| COST_MAP[grid[y][x]],
///     ManhattanNeighborhood::new(3, 3),
/// );
///
/// let start = map.id_of((0, 0)).unwrap();
/// assert!(map.can_visit(start));
/// assert!(!map.can_visit(map.id_of((1, 0)).unwrap()));
/// assert_eq!(map.weight(map.id_of((1, 1)).unwrap()), 5);
/// ```
#[derive(Clone, Debug)]
pub struct TileMap<N: Neighborhood = ManhattanNeighborhood> {
	width: usize,
	height: usize,
	tiles: Vec<Tile>,
	neighborhood: N,
	min_weight: Cost,
}

impl<N: Neighborhood> TileMap<N> {
	/// Creates a new TileMap
	///
	/// ## Arguments
	/// - `(width, height)` - the size of the Grid
	/// - `get_cost` - the cost of walking onto a Tile. (Cost < 0 => impassable Tile)
	/// - `neighborhood` - which Tiles are adjacent. (See [`Neighborhood`])
	pub fn from_costs(
		(width, height): (usize, usize),
		get_cost: impl Fn(Point) -> isize,
		neighborhood: N,
	) -> TileMap<N> {
		let mut tiles = Vec::with_capacity(width * height);
		for y in 0..height {
			for x in 0..width {
				tiles.push(Tile::new(y * width + x, (x, y), get_cost((x, y))));
			}
		}
		let mut map = TileMap {
			width,
			height,
			tiles,
			neighborhood,
			min_weight: 0,
		};
		map.update_min_weight();
		log::trace!("created a {}x{} tile map", width, height);
		map
	}

	/// The width of the Grid
	pub fn width(&self) -> usize {
		self.width
	}

	/// The height of the Grid
	pub fn height(&self) -> usize {
		self.height
	}

	/// The Neighborhood used for adjacency
	pub fn neighborhood(&self) -> &N {
		&self.neighborhood
	}

	/// The id of the Tile at `point`, if it is on the Grid
	pub fn id_of(&self, (x, y): Point) -> Option<NodeId> {
		(x < self.width && y < self.height).then_some(y * self.width + x)
	}

	/// The position of a Tile
	#[track_caller]
	pub fn point_of(&self, id: NodeId) -> Point {
		self.tiles[id].pos
	}

	/// The Tile with the given id, if it exists
	pub fn tile(&self, id: NodeId) -> Option<&Tile> {
		self.tiles.get(id)
	}

	/// The Tile at `point`, if it is on the Grid
	pub fn tile_at(&self, point: Point) -> Option<&Tile> {
		self.id_of(point).map(|id| &self.tiles[id])
	}

	/// All Tiles in row-major order
	pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
		self.tiles.iter()
	}

	/// Changes the terrain of a Tile. (Cost < 0 => impassable Tile)
	pub fn set_cost(&mut self, point: Point, cost: isize) -> Result<()> {
		let id = self.id_of(point).ok_or(GraphError::PointOutOfBounds {
			point,
			width: self.width,
			height: self.height,
		})?;
		self.tiles[id].set_cost(cost);
		self.update_min_weight();
		Ok(())
	}

	/// Translates a Path of Tile ids into Grid positions
	pub fn points(&self, path: &Path<NodeId>) -> Vec<Point> {
		path.iter().map(|&id| self.point_of(id)).collect()
	}

	fn update_min_weight(&mut self) {
		self.min_weight = self
			.tiles
			.iter()
			.filter(|tile| tile.passable)
			.map(|tile| tile.weight)
			.min()
			.unwrap_or(0);
	}
}

impl<N: Neighborhood> Graph for TileMap<N> {
	fn node_count(&self) -> usize {
		self.tiles.len()
	}
	fn weight(&self, id: NodeId) -> Cost {
		self.tiles[id].weight
	}
	fn neighbors(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
		let (width, height) = (self.width, self.height);
		Box::new(
			self.neighborhood
				.get_all_neighbors(self.tiles[id].pos)
				.filter(move |&(x, y)| x < width && y < height)
				.map(move |(x, y)| y * width + x),
		)
	}
	fn can_visit(&self, id: NodeId) -> bool {
		self.tiles[id].passable
	}
	fn previous(&self, id: NodeId) -> Option<NodeId> {
		self.tiles[id].previous
	}
	fn set_previous(&mut self, id: NodeId, previous: Option<NodeId>) {
		self.tiles[id].previous = previous;
	}
	fn reset_previous(&mut self) {
		for tile in self.tiles.iter_mut() {
			tile.previous = None;
		}
	}
	fn heuristic(&self, from: NodeId, goal: NodeId) -> Cost {
		let steps = self
			.neighborhood
			.heuristic(self.tiles[from].pos, self.tiles[goal].pos);
		steps.saturating_mul(self.min_weight)
	}
}
