use crate::{CostMap, InputError, Path, Point, PointMap};

mod bounds;

mod config;
pub use self::config::SearchConfig;

mod frontier;
use self::frontier::OpenFrontier;

mod grid;
use self::grid::{Grid, NodeState};

mod relax;

use std::time::Instant;

/// Searches for any-angle Paths with a fixed [`SearchConfig`].
///
/// Every search builds its own Grid and frontier from the [`CostMap`], so a Pathfinder can be
/// shared freely and searches never influence each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pathfinder {
	config: SearchConfig,
}

impl Pathfinder {
	/// Creates a new Pathfinder
	pub fn new(config: SearchConfig) -> Pathfinder {
		Pathfinder { config }
	}

	/// Returns the config used by this Pathfinder
	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	/// Calculates the Path from `start` to `goal` on the Grid.
	///
	/// Returns `Ok(None)` if the goal cannot be reached, or if
	/// [`max_expansions`](SearchConfig::max_expansions) was exceeded.
	///
	/// ## Errors
	/// `start` and `goal` have to be walkable Tiles on the Grid, otherwise
	/// [`InputError::OutOfBounds`] or [`InputError::Impassable`] is returned.
	///
	/// ## Examples
	/// ```
	/// # use any_angle_pathfinding::prelude::*;
	/// // . . . . .
	/// // . . . . .
	/// // . . # . .
	/// // . . . . .
	/// // . . . . .
	/// let mut map = CostMap::new((5, 5), 1).unwrap();
	/// map.set_cost((2, 2), CostMap::IMPASSABLE).unwrap();
	///
	/// let path = Pathfinder::default().find_path((0, 0), (4, 4), &map).unwrap().unwrap();
	///
	/// assert_eq!(path.waypoints(), &[(3, 1), (4, 4)]);
	/// assert!(path.length() > 32f64.sqrt());
	/// ```
	pub fn find_path(
		&self,
		start: Point,
		goal: Point,
		map: &CostMap,
	) -> Result<Option<Path>, InputError> {
		map.validate_endpoints(start, goal)?;
		Ok(SearchContext::new(map, start, goal, self.config).run())
	}

	/// Calculates the Paths from `start` to every one of `goals`.
	///
	/// Every goal is searched independently. With the `parallel` feature (enabled by default)
	/// the searches run on the rayon thread pool.
	///
	/// ## Returns
	/// A map from goal to Path for every goal that can be reached.
	///
	/// ## Examples
	/// ```
	/// # use any_angle_pathfinding::prelude::*;
	/// let map = CostMap::from_rows(&[
	///     [1, 1, 1, 1],
	///     [1, 1, 1, 1],
	///     [-1, -1, 1, -1],
	///     [1, -1, 1, 1],
	/// ]).unwrap();
	///
	/// let paths = Pathfinder::default().find_paths((0, 0), [(3, 3), (0, 3)], &map).unwrap();
	///
	/// assert!(paths.contains_key(&(3, 3)));
	/// assert!(!paths.contains_key(&(0, 3)));
	/// ```
	pub fn find_paths(
		&self,
		start: Point,
		goals: impl IntoIterator<Item = Point>,
		map: &CostMap,
	) -> Result<PointMap<Path>, InputError> {
		map.validate_endpoints(start, start)?;
		let goals = goals.into_iter().collect::<Vec<_>>();
		for &goal in goals.iter() {
			map.validate_endpoints(start, goal)?;
		}

		let search = |&goal: &Point| {
			SearchContext::new(map, start, goal, self.config)
				.run()
				.map(|path| (goal, path))
		};

		#[cfg(feature = "parallel")]
		{
			use rayon::prelude::*;
			Ok(goals.par_iter().filter_map(search).collect())
		}
		#[cfg(not(feature = "parallel"))]
		{
			Ok(goals.iter().filter_map(search).collect())
		}
	}
}

/// Calculates the Path from `start` to `goal` with the default [`SearchConfig`].
///
/// See [`Pathfinder::find_path`].
pub fn find_path(start: Point, goal: Point, map: &CostMap) -> Result<Option<Path>, InputError> {
	Pathfinder::default().find_path(start, goal, map)
}

/// All state of a single search
struct SearchContext<'a> {
	grid: Grid<'a>,
	frontier: OpenFrontier,
	config: SearchConfig,
}

impl<'a> SearchContext<'a> {
	fn new(map: &'a CostMap, start: Point, goal: Point, config: SearchConfig) -> SearchContext<'a> {
		let grid = Grid::new(map, start, goal);
		let frontier = OpenFrontier::new(map.width() * map.height());
		SearchContext {
			grid,
			frontier,
			config,
		}
	}

	fn run(mut self) -> Option<Path> {
		self.search().map(|expansions| self.extract_path(expansions))
	}

	/// Expands Tiles until the goal is closed. Returns the number of expansions, or `None` if
	/// the goal cannot be reached within the budget.
	fn search(&mut self) -> Option<usize> {
		let timer = Instant::now();
		let (start, goal) = (self.grid.start(), self.grid.goal());
		debug!(
			"searching from {:?} to {:?}",
			self.grid[start].pos, self.grid[goal].pos
		);

		let node = &mut self.grid[start];
		node.state = NodeState::InSearch;
		let (f, h) = (node.f(), node.h);
		self.frontier.insert(start, f, h);

		let mut expansions = 0;
		while let Some(current) = self.frontier.extract_best() {
			if let Some(max_expansions) = self.config.max_expansions {
				if expansions >= max_expansions {
					debug!(
						"gave up after {} expansions, {} Tiles left on the frontier",
						expansions,
						self.frontier.len() + 1
					);
					return None;
				}
			}
			expansions += 1;
			self.grid[current].state = NodeState::Closed;

			if current == goal {
				debug!(
					"found a path of cost {:.3} after {} expansions in {:?}",
					self.grid[goal].g,
					expansions,
					timer.elapsed()
				);
				return Some(expansions);
			}

			bounds::narrow_bounds(&mut self.grid, current);
			relax::relax_neighbors(
				&mut self.grid,
				&mut self.frontier,
				current,
				self.config.weighted,
			);
		}
		debug_assert!(self.frontier.is_empty());

		debug!(
			"no path after {} expansions in {:?}",
			expansions,
			timer.elapsed()
		);
		None
	}

	/// Follows the parents from the goal back to the start
	fn extract_path(&self, expansions: usize) -> Path {
		let (start, goal) = (self.grid.start(), self.grid.goal());
		let mut waypoints = self
			.grid
			.parent_chain(goal)
			.map(|index| self.grid[index].pos)
			.collect::<Vec<_>>();
		if self.config.include_start {
			waypoints.push(self.grid[start].pos);
		}
		waypoints.reverse();
		Path::new(
			self.grid[start].pos,
			waypoints,
			self.grid[goal].g,
			expansions,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn search(map: &CostMap, start: Point, goal: Point, config: SearchConfig) -> Option<Path> {
		Pathfinder::new(config).find_path(start, goal, map).unwrap()
	}

	#[test]
	fn straight_diagonal() {
		let map = CostMap::new((5, 5), 1).unwrap();
		let path = search(&map, (0, 0), (4, 4), Default::default()).unwrap();

		assert_eq!(path.waypoints(), &[(4, 4)]);
		assert_eq!(path.cells(), vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
		assert!((path.cost() - 32f64.sqrt()).abs() < 1e-9);
		assert!((path.length() - 32f64.sqrt()).abs() < 1e-9);
	}

	#[test]
	fn same_start_and_goal() {
		let map = CostMap::new((5, 5), 1).unwrap();
		let path = search(&map, (2, 2), (2, 2), Default::default()).unwrap();

		assert!(path.is_empty());
		assert_eq!(path.cost(), 0.0);
		assert_eq!(path.expansions(), 1);
		assert_eq!(path.goal(), (2, 2));

		let config = SearchConfig {
			include_start: true,
			..Default::default()
		};
		let path = search(&map, (2, 2), (2, 2), config).unwrap();
		assert_eq!(path.waypoints(), &[(2, 2)]);
	}

	#[test]
	fn single_tile() {
		let map = CostMap::new((1, 1), 3).unwrap();
		let path = search(&map, (0, 0), (0, 0), Default::default()).unwrap();
		assert!(path.is_empty());
	}

	#[test]
	fn include_start() {
		let mut map = CostMap::new((5, 5), 1).unwrap();
		map.set_cost((2, 2), CostMap::IMPASSABLE).unwrap();
		let config = SearchConfig {
			include_start: true,
			..Default::default()
		};
		let path = search(&map, (0, 0), (4, 4), config).unwrap();

		assert_eq!(path.waypoints(), &[(0, 0), (3, 1), (4, 4)]);
		assert!((path.length() - (10f64.sqrt() + 10f64.sqrt())).abs() < 1e-9);
	}

	#[test]
	fn expansion_budget() {
		let mut map = CostMap::new((5, 5), 1).unwrap();
		map.set_cost((2, 2), CostMap::IMPASSABLE).unwrap();

		let path = search(&map, (0, 0), (4, 4), Default::default()).unwrap();
		let needed = path.expansions();

		let config = SearchConfig::with_max_expansions(needed);
		assert_eq!(search(&map, (0, 0), (4, 4), config), Some(path));

		let config = SearchConfig::with_max_expansions(needed - 1);
		assert_eq!(search(&map, (0, 0), (4, 4), config), None);

		let config = SearchConfig::with_max_expansions(0);
		assert_eq!(search(&map, (0, 0), (0, 0), config), None);
	}

	#[test]
	fn invalid_endpoints() {
		let mut map = CostMap::new((3, 3), 1).unwrap();
		map.set_cost((1, 1), CostMap::IMPASSABLE).unwrap();

		assert_eq!(
			find_path((0, 0), (1, 1), &map),
			Err(InputError::Impassable { point: (1, 1) })
		);
		assert_eq!(
			find_path((3, 0), (0, 0), &map),
			Err(InputError::OutOfBounds {
				point: (3, 0),
				width: 3,
				height: 3
			})
		);
		assert!(Pathfinder::default()
			.find_paths((0, 0), [(2, 2), (1, 1)], &map)
			.is_err());
		assert!(Pathfinder::default()
			.find_paths((1, 1), [], &map)
			.is_err());
	}

	#[test]
	fn closed_nodes_keep_their_parents() {
		// . . . . # . . G
		// . . . . # . . .
		// . . . . # . . .
		// . . . . # . . .
		// . . . . # . . .
		// . . . . . . . .
		let mut map = CostMap::new((8, 6), 1).unwrap();
		for y in 0..5 {
			map.set_cost((4, y), CostMap::IMPASSABLE).unwrap();
		}
		let mut context = SearchContext::new(&map, (0, 0), (7, 0), Default::default());
		let expansions = context.search().unwrap();
		let (start, goal) = (context.grid.start(), context.grid.goal());

		let mut closed = 0;
		for index in 0..map.width() * map.height() {
			let node = &context.grid[index];
			if node.state != NodeState::Closed {
				continue;
			}
			closed += 1;
			assert!(!context.frontier.contains(index));
			assert!(node.lower <= 0.0 && 0.0 <= node.upper);
			match node.parent {
				None => assert_eq!(index, start),
				Some(parent) => {
					let parent_node = &context.grid[parent];
					assert_eq!(parent_node.state, NodeState::Closed);
					let expected = parent_node.g + context.grid.distance(parent, index);
					assert!((node.g - expected).abs() < 1e-9);
				}
			}
		}
		assert_eq!(closed, expansions);
		assert_eq!(context.grid[goal].state, NodeState::Closed);

		let last = context.grid.parent_chain(goal).last().unwrap();
		assert_eq!(context.grid[last].parent, Some(start));
	}
}
