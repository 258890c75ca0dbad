use graph_search::prelude::*;
use graph_search::search::{self, Algorithm, SearchConfig, SearchOutcome, VisitMarking};
use graph_search::{Cost, GraphError, NodeId};
use nanorand::{Rng, WyRand};
use std::collections::HashSet;

fn init() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn random_map<N: Neighborhood>(
	rng: &mut WyRand,
	(width, height): (usize, usize),
	neighborhood: N,
	min_cost: isize,
) -> TileMap<N> {
	let costs: Vec<isize> = (0..width * height)
		.map(|_| rng.generate_range(0_u32..10) as isize - 1)
		.map(|cost| if cost >= 0 { cost.max(min_cost) } else { cost })
		.collect();
	TileMap::from_costs((width, height), |(x, y)| costs[y * width + x], neighborhood)
}

fn random_graph(rng: &mut WyRand, node_count: usize) -> NodeGraph {
	let mut graph = NodeGraph::new();
	for _ in 0..node_count {
		graph.add_node(rng.generate_range(0_usize..6));
	}
	for from in 0..node_count {
		for to in 0..node_count {
			if from != to && rng.generate_range(0_u32..3) == 0 {
				graph.add_edge(from, to).unwrap();
			}
		}
	}
	graph
}

/// the cheapest Cost over all simple Paths
fn brute_force<G: Graph>(graph: &G, start: NodeId, goal: NodeId) -> Option<Cost> {
	fn walk<G: Graph>(
		graph: &G,
		current: NodeId,
		goal: NodeId,
		cost: Cost,
		on_path: &mut Vec<bool>,
		best: &mut Option<Cost>,
	) {
		if current == goal {
			*best = Some(best.map_or(cost, |b| b.min(cost)));
			return;
		}
		for next in graph.neighbors(current).collect::<Vec<_>>() {
			if on_path[next] || !graph.can_visit(next) {
				continue;
			}
			on_path[next] = true;
			walk(graph, next, goal, cost + graph.weight(next), on_path, best);
			on_path[next] = false;
		}
	}
	let mut on_path = vec![false; graph.node_count()];
	on_path[start] = true;
	let mut best = None;
	walk(graph, start, goal, graph.weight(start), &mut on_path, &mut best);
	best
}

fn reachable<G: Graph>(graph: &G, start: NodeId) -> HashSet<NodeId> {
	let mut seen = HashSet::from([start]);
	let mut todo = vec![start];
	while let Some(current) = todo.pop() {
		for next in graph.neighbors(current) {
			if graph.can_visit(next) && seen.insert(next) {
				todo.push(next);
			}
		}
	}
	seen
}

fn assert_valid_path<G: Graph>(graph: &G, path: &Path<NodeId>, start: NodeId, goal: NodeId) {
	assert_eq!(path.first(), Some(&start));
	assert_eq!(path.last(), Some(&goal));
	for step in path.windows(2) {
		assert!(graph.neighbors(step[0]).any(|n| n == step[1]), "{:?}", step);
		assert!(graph.can_visit(step[1]));
	}
	let cost: Cost = path.iter().map(|&id| graph.weight(id)).sum();
	assert_eq!(cost, path.cost);
}

#[test]
fn line_graph() {
	init();
	let mut graph = NodeGraph::new();
	for weight in [1, 2, 3, 4, 5] {
		graph.add_node(weight);
	}
	for id in 1..5 {
		graph.connect(id - 1, id).unwrap();
	}

	for path in [
		search::dijkstra(&mut graph, 0, 4).unwrap(),
		search::a_star(&mut graph, 0, 4).unwrap(),
		search::bfs_path(&mut graph, 0, 4).unwrap(),
	] {
		let path = path.unwrap();
		assert_eq!(path.nodes, vec![0, 1, 2, 3, 4]);
		assert_eq!(path.cost, 15);
	}
}

#[test]
fn blocked_center() {
	init();
	let mut map = TileMap::from_costs(
		(3, 3),
		|pos| if pos == (1, 1) { -1 } else { 1 },
		ManhattanNeighborhood::new(3, 3),
	);
	let start = map.id_of((0, 0)).unwrap();
	let goal = map.id_of((2, 2)).unwrap();

	let path = search::a_star(&mut map, start, goal).unwrap().unwrap();
	assert_eq!(path.len(), 5);
	assert_eq!(path.steps(), 4);
	assert_eq!(path.cost, 5);
	assert!(!map.points(&path).contains(&(1, 1)));
	assert_valid_path(&map, &path, start, goal);

	let grid: [[isize; 3]; 3] = [[1, 1, 1], [1, -1, 1], [1, 1, 1]];
	let mut graph = NodeGraph::from_grid(&grid).unwrap();
	let path = search::a_star(&mut graph, 0, 8).unwrap().unwrap();
	assert_eq!(path.len(), 5);
	assert_eq!(path.cost, 5);
}

#[test]
fn a_star_matches_dijkstra() {
	init();
	let mut rng = WyRand::new_seed(7);
	let (width, height) = (12, 9);
	for round in 0..20 {
		let min_cost = if round % 2 == 0 { 0 } else { 1 };
		let mut manhattan = random_map(
			&mut rng,
			(width, height),
			ManhattanNeighborhood::new(width, height),
			min_cost,
		);
		let mut moore = random_map(
			&mut rng,
			(width, height),
			MooreNeighborhood::new(width, height),
			min_cost,
		);
		for _ in 0..10 {
			let start = rng.generate_range(0..width * height);
			let goal = rng.generate_range(0..width * height);

			let expected = search::dijkstra(&mut manhattan, start, goal).unwrap();
			let found = search::a_star(&mut manhattan, start, goal).unwrap();
			assert_eq!(
				found.as_ref().map(|p| p.cost),
				expected.as_ref().map(|p| p.cost)
			);
			if let Some(path) = &found {
				assert_valid_path(&manhattan, path, start, goal);
			}

			let expected = search::dijkstra(&mut moore, start, goal).unwrap();
			let found = search::a_star(&mut moore, start, goal).unwrap();
			assert_eq!(
				found.as_ref().map(|p| p.cost),
				expected.as_ref().map(|p| p.cost)
			);
		}
	}
}

#[test]
fn shortest_paths_match_brute_force() {
	init();
	let mut rng = WyRand::new_seed(1234);
	for _ in 0..50 {
		let mut graph = random_graph(&mut rng, 7);
		for start in 0..7 {
			for goal in 0..7 {
				let expected = brute_force(&graph, start, goal);
				let path = search::dijkstra(&mut graph, start, goal).unwrap();
				assert_eq!(path.as_ref().map(|p| p.cost), expected);
				if let Some(path) = &path {
					assert_valid_path(&graph, path, start, goal);
				}
				// no layout, so A* has to agree exactly
				let path = search::a_star(&mut graph, start, goal).unwrap();
				assert_eq!(path.map(|p| p.cost), expected);

				let path = search::bfs_path(&mut graph, start, goal).unwrap();
				assert_eq!(path.is_some(), expected.is_some());
			}
		}
	}
}

#[test]
fn bfs_path_has_fewest_nodes() {
	init();
	let mut rng = WyRand::new_seed(99);
	let (width, height) = (10, 10);
	let mut map = random_map(&mut rng, (width, height), ManhattanNeighborhood::new(width, height), 1);
	let mut uniform = TileMap::from_costs(
		(width, height),
		|pos| if map.tile_at(pos).map_or(false, |t| t.passable) { 1 } else { -1 },
		ManhattanNeighborhood::new(width, height),
	);
	for start in (0..width * height).step_by(7) {
		for goal in (0..width * height).step_by(11) {
			let path = search::bfs_path(&mut map, start, goal).unwrap();
			let expected = search::dijkstra(&mut uniform, start, goal).unwrap();
			assert_eq!(
				path.as_ref().map(|p| p.len()),
				expected.as_ref().map(|p| p.len())
			);
			if let Some(path) = &path {
				assert_valid_path(&map, path, start, goal);
			}
		}
	}
}

#[test]
fn traversals_visit_reachable_nodes_once() {
	init();
	let mut rng = WyRand::new_seed(5);
	for _ in 0..30 {
		let graph = random_graph(&mut rng, 12);
		for start in 0..12 {
			let expected = reachable(&graph, start);
			let orders = [
				search::dfs(&graph, start).unwrap(),
				search::dfs_with(&graph, start, VisitMarking::OnPop).unwrap(),
				search::dfs_recursive(&graph, start).unwrap(),
				search::bfs(&graph, start).unwrap(),
			];
			for order in orders {
				assert_eq!(order[0], start);
				assert_eq!(order.len(), expected.len());
				assert_eq!(order.iter().copied().collect::<HashSet<_>>(), expected);
			}
		}
	}
}

#[test]
fn no_path() {
	init();
	let grid: [[isize; 4]; 3] = [[1, 1, -1, 1], [1, 1, -1, 1], [1, 1, -1, 1]];
	let mut graph = NodeGraph::from_grid(&grid).unwrap();
	for algorithm in [Algorithm::BfsPath, Algorithm::Dijkstra, Algorithm::AStar] {
		let outcome = search::search(&mut graph, algorithm, 0, 3, &SearchConfig::DEFAULT).unwrap();
		assert_eq!(outcome, SearchOutcome::NotFound);
		assert!(outcome.nodes().is_empty());
	}
	// the goal's side was never reached
	assert_eq!(graph.previous(3), None);
	assert_eq!(graph.previous(7), None);
}

#[test]
fn repeated_search_is_identical() {
	init();
	let grid: [[isize; 5]; 5] = [
		[1, -1, 1, 1, 1],
		[1, -1, 1, 1, 1],
		[1, -1, 8, 1, 1],
		[1, -1, 8, 9, 2],
		[1, 1, 1, 1, 1],
	];
	let mut graph = NodeGraph::from_grid(&grid).unwrap();
	for algorithm in [Algorithm::BfsPath, Algorithm::Dijkstra, Algorithm::AStar] {
		let first = search::search(&mut graph, algorithm, 0, 2, &SearchConfig::DEFAULT).unwrap();
		graph.reset_previous();
		let second = search::search(&mut graph, algorithm, 0, 2, &SearchConfig::DEFAULT).unwrap();
		assert_eq!(first, second, "{}", algorithm);
		assert!(first.is_success());
	}
}

#[test]
fn previous_links_trace_the_route() {
	init();
	let mut map = TileMap::from_costs((5, 5), |_| 1, ManhattanNeighborhood::new(5, 5));
	let path = search::dijkstra(&mut map, 0, 24).unwrap().unwrap();
	let mut traced = vec![24];
	let mut current = 24;
	while let Some(previous) = map.previous(current) {
		traced.push(previous);
		current = previous;
	}
	traced.reverse();
	assert_eq!(traced, path.nodes);
	assert_eq!(search::reconstruct_path(&map, 0, 24), Some(path.nodes));
}

#[test]
fn search_dispatch() {
	init();
	let mut graph = NodeGraph::new();
	for _ in 0..4 {
		graph.add_node(1);
	}
	graph.connect(0, 1).unwrap();
	graph.connect(0, 2).unwrap();
	graph.connect(1, 3).unwrap();

	let outcome = search::search(&mut graph, Algorithm::Dfs, 0, 0, &SearchConfig::DEFAULT).unwrap();
	assert_eq!(outcome, SearchOutcome::Visited(vec![0, 2, 1, 3]));
	let outcome =
		search::search(&mut graph, Algorithm::Dfs, 0, 0, &SearchConfig::PREORDER_DFS).unwrap();
	assert_eq!(outcome, SearchOutcome::Visited(vec![0, 2, 1, 3]));
	let outcome =
		search::search(&mut graph, Algorithm::DfsRecursive, 0, 0, &Default::default()).unwrap();
	assert_eq!(outcome, SearchOutcome::Visited(vec![0, 1, 3, 2]));
	let outcome = search::search(&mut graph, Algorithm::Bfs, 0, 0, &Default::default()).unwrap();
	assert_eq!(outcome, SearchOutcome::Visited(vec![0, 1, 2, 3]));
	let outcome =
		search::search(&mut graph, "a-star".parse().unwrap(), 2, 3, &Default::default()).unwrap();
	assert_eq!(outcome.nodes(), &[2, 0, 1, 3]);

	assert_eq!(
		search::search(&mut graph, Algorithm::Bfs, 4, 0, &Default::default()),
		Err(GraphError::NodeOutOfRange { id: 4, count: 4 })
	);

	let shallow = SearchConfig {
		recursion_limit: 2,
		..SearchConfig::DEFAULT
	};
	assert_eq!(
		search::search(&mut graph, Algorithm::DfsRecursive, 0, 0, &shallow),
		Err(GraphError::RecursionLimit { limit: 2 })
	);
}

#[test]
fn overflowing_cost_is_an_error() {
	init();
	let half = Cost::MAX / 2 + 1;
	let mut graph = NodeGraph::new();
	let a = graph.add_node(half);
	let b = graph.add_node(half);
	graph.connect(a, b).unwrap();
	for algorithm in [Algorithm::BfsPath, Algorithm::Dijkstra, Algorithm::AStar] {
		assert_eq!(
			search::search(&mut graph, algorithm, a, b, &SearchConfig::DEFAULT),
			Err(GraphError::CostOverflow { node: b }),
			"{}",
			algorithm
		);
	}

	// two tiles still fit, the third does not
	let mut map = TileMap::from_costs((3, 1), |_| isize::MAX, ManhattanNeighborhood::new(3, 1));
	assert_eq!(
		search::dijkstra(&mut map, 0, 1).unwrap().map(|path| path.cost),
		Some(Cost::MAX - 1)
	);
	assert_eq!(
		search::dijkstra(&mut map, 0, 2),
		Err(GraphError::CostOverflow { node: 2 })
	);
}
