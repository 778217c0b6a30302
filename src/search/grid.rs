use crate::{geometry, neighbors::MooreNeighborhood, CostMap, Point};

use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
	/// not discovered yet
	Open,
	/// on the frontier
	InSearch,
	/// expanded, parent and bounds are final
	Closed,
	Wall,
}

/// The per-search scratch record of a single Tile
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
	pub pos: Point,
	pub state: NodeState,
	pub g: f64,
	pub h: f64,
	pub parent: Option<usize>,
	pub lower: f64,
	pub upper: f64,
}

impl SearchNode {
	pub fn f(&self) -> f64 {
		self.g + self.h
	}
}

/// One [`SearchNode`] for every Tile of a [`CostMap`], addressed by the Tile's index.
///
/// Parents are stored as indices into the same Grid, so the parent links form a forest
/// rooted at the start without any references between nodes.
#[derive(Clone, Debug)]
pub(crate) struct Grid<'a> {
	map: &'a CostMap,
	nodes: Vec<SearchNode>,
	neighborhood: MooreNeighborhood,
	start: usize,
	goal: usize,
}

impl<'a> Grid<'a> {
	/// `start` and `goal` must be valid Points on `map`
	pub fn new(map: &'a CostMap, start: Point, goal: Point) -> Grid<'a> {
		let (width, height) = map.size();
		let neighborhood = MooreNeighborhood::new(width, height);
		let nodes = (0..width * height)
			.map(|index| {
				let pos = map.point_of(index);
				let state = if map.cost_at(index) < 0 {
					NodeState::Wall
				} else {
					NodeState::Open
				};
				SearchNode {
					pos,
					state,
					g: geometry::distance(pos, start),
					h: neighborhood.heuristic(pos, goal),
					parent: None,
					lower: f64::NEG_INFINITY,
					upper: f64::INFINITY,
				}
			})
			.collect();

		let mut grid = Grid {
			map,
			nodes,
			neighborhood,
			start: 0,
			goal: 0,
		};
		grid.start = grid.index_of(start);
		grid.goal = grid.index_of(goal);
		let start = grid.start;
		grid[start].g = 0.0;
		grid
	}

	pub fn start(&self) -> usize {
		self.start
	}

	pub fn goal(&self) -> usize {
		self.goal
	}

	pub fn neighborhood(&self) -> MooreNeighborhood {
		self.neighborhood
	}

	/// `point` must be on the Grid
	pub fn index_of(&self, point: Point) -> usize {
		point.0 + point.1 * self.map.width()
	}

	pub fn is_wall(&self, index: usize) -> bool {
		self.nodes[index].state == NodeState::Wall
	}

	/// The traversal cost of the Tile, always positive for anything but walls
	pub fn cost(&self, index: usize) -> isize {
		self.map.cost_at(index)
	}

	/// The highest cost of the Tiles on the line from `from` to `to`, not counting `from`
	pub fn segment_weight(&self, from: usize, to: usize) -> f64 {
		geometry::Line::new(self.nodes[from].pos, self.nodes[to].pos)
			.map(|point| self.cost(self.index_of(point)))
			.max()
			.map_or(1.0, |cost| cost as f64)
	}

	pub fn distance(&self, a: usize, b: usize) -> f64 {
		geometry::distance(self.nodes[a].pos, self.nodes[b].pos)
	}

	/// The signed angle at `parent` from the line towards `current` to the line towards `other`
	pub fn angle(&self, parent: usize, current: usize, other: usize) -> f64 {
		geometry::signed_angle(
			self.nodes[parent].pos,
			self.nodes[current].pos,
			self.nodes[other].pos,
		)
	}

	/// Returns `true` if `other` is a Closed node with the same parent as `current`
	pub fn is_closed_sibling(&self, current: usize, other: usize) -> bool {
		let node = &self.nodes[other];
		node.state == NodeState::Closed && node.parent == self.nodes[current].parent
	}

	/// Returns `true` if the diagonal step from `from` to `to` would squeeze between two walls
	pub fn squeezes_between_walls(&self, from: usize, to: usize) -> bool {
		let (a, b) = (self.nodes[from].pos, self.nodes[to].pos);
		if MooreNeighborhood::is_orthogonal(a, b) {
			return false;
		}
		self.is_wall(self.index_of((b.0, a.1))) && self.is_wall(self.index_of((a.0, b.1)))
	}

	/// The parent links from `goal` back to the start, goal first. The start is not included.
	pub fn parent_chain(&self, goal: usize) -> impl Iterator<Item = usize> + '_ {
		let start = self.start;
		std::iter::successors(Some(goal), move |&index| self.nodes[index].parent)
			.take_while(move |&index| index != start)
	}
}

impl Index<usize> for Grid<'_> {
	type Output = SearchNode;
	#[track_caller]
	fn index(&self, index: usize) -> &SearchNode {
		&self.nodes[index]
	}
}
impl IndexMut<usize> for Grid<'_> {
	#[track_caller]
	fn index_mut(&mut self, index: usize) -> &mut SearchNode {
		&mut self.nodes[index]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn build() {
		let mut map = CostMap::new((4, 3), 1).unwrap();
		map.set_cost((2, 1), CostMap::IMPASSABLE).unwrap();
		let grid = Grid::new(&map, (0, 0), (3, 2));

		assert_eq!(grid.nodes.len(), 12);
		assert_eq!(grid.start(), 0);
		assert_eq!(grid.goal(), 11);
		assert_eq!(grid[grid.index_of((2, 1))].state, NodeState::Wall);
		assert_eq!(grid[grid.index_of((1, 1))].state, NodeState::Open);

		let node = &grid[grid.index_of((3, 0))];
		assert_eq!(node.pos, (3, 0));
		assert_eq!(node.g, 3.0);
		assert_eq!(node.h, 2.0);
		assert_eq!(node.f(), 5.0);
		assert_eq!(node.parent, None);
		assert_eq!(node.lower, f64::NEG_INFINITY);
		assert_eq!(node.upper, f64::INFINITY);

		assert_eq!(grid[grid.start()].g, 0.0);
	}

	#[test]
	fn squeeze() {
		let walls = [(1, 0), (0, 1)];
		let map = CostMap::from_fn((3, 3), |point| if walls.contains(&point) { -1 } else { 1 })
			.unwrap();
		let grid = Grid::new(&map, (0, 0), (2, 2));
		let (a, b) = (grid.index_of((0, 0)), grid.index_of((1, 1)));
		let c = grid.index_of((2, 1));

		assert!(grid.squeezes_between_walls(a, b));
		assert!(grid.squeezes_between_walls(b, a));
		assert!(!grid.squeezes_between_walls(b, c));
		assert!(!grid.squeezes_between_walls(c, grid.index_of((1, 2))));
	}

	#[test]
	fn segment_weight() {
		// . . . .
		// . 5 . .
		// . . 2 .
		let map = CostMap::from_fn((4, 3), |point| match point {
			(1, 1) => 5,
			(2, 2) => 2,
			_ => 1,
		})
		.unwrap();
		let grid = Grid::new(&map, (0, 0), (3, 2));
		let index = |point| grid.index_of(point);

		assert_eq!(grid.segment_weight(index((0, 0)), index((2, 2))), 5.0);
		assert_eq!(grid.segment_weight(index((1, 1)), index((3, 1))), 1.0);
		assert_eq!(grid.segment_weight(index((3, 0)), index((1, 2))), 1.0);
		assert_eq!(grid.segment_weight(index((3, 2)), index((1, 2))), 2.0);
		assert_eq!(grid.segment_weight(index((0, 0)), index((0, 0))), 1.0);
	}

	#[test]
	fn parent_chain() {
		let map = CostMap::new((3, 3), 1).unwrap();
		let mut grid = Grid::new(&map, (0, 0), (2, 2));
		let (start, middle, goal) = (grid.start(), grid.index_of((1, 1)), grid.goal());
		grid[middle].parent = Some(start);
		grid[goal].parent = Some(middle);

		assert_eq!(grid.parent_chain(goal).collect::<Vec<_>>(), vec![goal, middle]);
		assert_eq!(grid.parent_chain(start).count(), 0);
	}
}
