//! The Neighborhood of a Tile during an any-angle search

use crate::{geometry, Point};

const DIRECTIONS: [(isize, isize); 8] = [
	(0, -1),
	(1, -1),
	(1, 0),
	(1, 1),
	(0, 1),
	(-1, 1),
	(-1, 0),
	(-1, -1),
];

/// The 4 diagonal directions, used for the corner test of the angle bounds
pub const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
/// Unlike a regular grid search, the any-angle search measures all distances with the
/// [Euclidean Metric](https://en.wikipedia.org/wiki/Euclidean_distance).
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
	/// Creates a new MooreNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> MooreNeighborhood {
		MooreNeighborhood { width, height }
	}

	/// Provides a list of Neighbors of a Point
	///
	/// The Neighbors are returned clockwise, starting with the one above `point`. Points outside
	/// of the Grid are skipped. Note that walls are not filtered.
	pub fn get_all_neighbors(&self, point: Point) -> impl Iterator<Item = Point> {
		let neighborhood = *self;
		DIRECTIONS
			.iter()
			.filter_map(move |&dir| neighborhood.step(point, dir))
	}

	/// The Euclidean distance from `point` to `goal`
	pub fn heuristic(&self, point: Point, goal: Point) -> f64 {
		geometry::distance(point, goal)
	}

	/// The Point one step from `point` in `(dx, dy)`, if that is on the Grid
	pub fn step(&self, point: Point, (dx, dy): (isize, isize)) -> Option<Point> {
		let x = point.0.checked_add_signed(dx)?;
		let y = point.1.checked_add_signed(dy)?;
		if x < self.width && y < self.height {
			Some((x, y))
		} else {
			None
		}
	}

	/// The three Tiles around the corner of `point` in the diagonal direction `(dx, dy)`:
	/// `point + (dx, 0)`, `point + (0, dy)` and `point + (dx, dy)`, skipping those outside of the
	/// Grid.
	pub fn diagonal_triple(
		&self,
		point: Point,
		(dx, dy): (isize, isize),
	) -> impl Iterator<Item = Point> {
		let neighborhood = *self;
		[(dx, 0), (0, dy), (dx, dy)]
			.into_iter()
			.filter_map(move |dir| neighborhood.step(point, dir))
	}

	/// Returns `true` if `a` and `b` share a row or a column
	pub fn is_orthogonal(a: Point, b: Point) -> bool {
		a.0 == b.0 || a.1 == b.1
	}
}

#[test]
fn test_moore_get_all_neighbors() {
	let neighborhood = MooreNeighborhood::new(5, 5);
	assert_eq!(
		neighborhood.get_all_neighbors((0, 2)).collect::<Vec<_>>(),
		vec![(0, 1), (1, 1), (1, 2), (1, 3), (0, 3)],
	);
	assert_eq!(neighborhood.get_all_neighbors((2, 2)).count(), 8);
	assert_eq!(
		neighborhood.get_all_neighbors((4, 4)).collect::<Vec<_>>(),
		vec![(4, 3), (3, 4), (3, 3)],
	);
}

#[test]
fn test_moore_heuristic() {
	let neighborhood = MooreNeighborhood::new(5, 5);
	assert_eq!(neighborhood.heuristic((3, 0), (0, 4)), 5.0);
}

#[test]
fn test_diagonal_triple() {
	let neighborhood = MooreNeighborhood::new(3, 3);
	assert_eq!(
		neighborhood.diagonal_triple((1, 1), (1, -1)).collect::<Vec<_>>(),
		vec![(2, 1), (1, 0), (2, 0)],
	);
	assert_eq!(
		neighborhood.diagonal_triple((0, 2), (-1, 1)).collect::<Vec<_>>(),
		vec![],
	);
	assert_eq!(
		neighborhood.diagonal_triple((0, 1), (-1, 1)).collect::<Vec<_>>(),
		vec![(0, 2)],
	);
}

#[test]
fn test_is_orthogonal() {
	assert!(MooreNeighborhood::is_orthogonal((1, 1), (1, 2)));
	assert!(MooreNeighborhood::is_orthogonal((1, 1), (0, 1)));
	assert!(!MooreNeighborhood::is_orthogonal((1, 1), (2, 2)));
}
