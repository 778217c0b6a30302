use crate::{InputError, Point};

/// The cost of every Tile on a rectangular Grid.
///
/// Positive costs are the cost of walking across a Tile, negative costs mark walls. A cost of
/// `0` is rejected.
///
/// A search only borrows the CostMap, so the Grid cannot change while a search is running.
/// Edits between searches go through [`set_cost`](CostMap::set_cost).
///
/// ## Examples
/// ```
/// # use any_angle_pathfinding::CostMap;
/// let rows: [[isize; 3]; 2] = [
///     [1, 1, -1],
///     [1, 5, -1],
/// ];
/// let map = CostMap::from_rows(&rows).unwrap();
///
/// assert_eq!(map.size(), (3, 2));
/// assert_eq!(map.cost((1, 1)), Some(5));
/// assert!(!map.is_passable((2, 0)));
/// assert_eq!(map.cost((3, 0)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMap {
	width: usize,
	height: usize,
	costs: Vec<isize>,
}

impl CostMap {
	/// The cost used for walls. Any negative cost is treated the same.
	pub const IMPASSABLE: isize = -1;

	/// Creates a CostMap where every Tile has the cost `fill`
	pub fn new((width, height): (usize, usize), fill: isize) -> Result<CostMap, InputError> {
		CostMap::from_fn((width, height), |_| fill)
	}

	/// Creates a CostMap by asking `get_cost` for the cost of every Tile
	///
	/// ## Examples
	/// ```
	/// # use any_angle_pathfinding::CostMap;
	/// let map = CostMap::from_fn((4, 4), |(x, y)| if x == y { -1 } else { 1 }).unwrap();
	///
	/// assert!(!map.is_passable((2, 2)));
	/// assert!(map.is_passable((2, 1)));
	/// ```
	pub fn from_fn(
		(width, height): (usize, usize),
		mut get_cost: impl FnMut(Point) -> isize,
	) -> Result<CostMap, InputError> {
		let mut costs = Vec::with_capacity(width * height);
		for y in 0..height {
			for x in 0..width {
				let cost = get_cost((x, y));
				if cost == 0 {
					return Err(InputError::ZeroCost { point: (x, y) });
				}
				costs.push(cost);
			}
		}
		Ok(CostMap {
			width,
			height,
			costs,
		})
	}

	/// Creates a CostMap from a list of rows, where `rows[y][x]` is the cost of `(x, y)`
	pub fn from_rows<R: AsRef<[isize]>>(rows: &[R]) -> Result<CostMap, InputError> {
		let width = rows.first().map_or(0, |row| row.as_ref().len());
		if let Some((row, found)) = rows
			.iter()
			.map(|row| row.as_ref().len())
			.enumerate()
			.find(|&(_, len)| len != width)
		{
			return Err(InputError::NotRectangular {
				row,
				expected: width,
				found,
			});
		}
		CostMap::from_fn((width, rows.len()), |(x, y)| rows[y].as_ref()[x])
	}

	/// The width of the Grid
	pub fn width(&self) -> usize {
		self.width
	}

	/// The height of the Grid
	pub fn height(&self) -> usize {
		self.height
	}

	/// `(width, height)` of the Grid
	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	/// Returns `true` if `point` lies on the Grid
	pub fn contains(&self, point: Point) -> bool {
		point.0 < self.width && point.1 < self.height
	}

	/// The index of `point` in row-major order, if it lies on the Grid
	pub fn index_of(&self, point: Point) -> Option<usize> {
		if self.contains(point) {
			Some(point.0 + point.1 * self.width)
		} else {
			None
		}
	}

	/// The inverse of [`index_of`](CostMap::index_of)
	pub fn point_of(&self, index: usize) -> Point {
		(index % self.width, index / self.width)
	}

	/// The cost of the Tile at `point`, or `None` if it is not on the Grid
	pub fn cost(&self, point: Point) -> Option<isize> {
		self.index_of(point).map(|index| self.costs[index])
	}

	pub(crate) fn cost_at(&self, index: usize) -> isize {
		self.costs[index]
	}

	/// Returns `true` if `point` lies on the Grid and is not a wall
	pub fn is_passable(&self, point: Point) -> bool {
		self.cost(point).map_or(false, |cost| cost > 0)
	}

	/// Changes the cost of a single Tile
	///
	/// ## Examples
	/// ```
	/// # use any_angle_pathfinding::CostMap;
	/// let mut map = CostMap::new((3, 3), 1).unwrap();
	/// map.set_cost((1, 1), CostMap::IMPASSABLE).unwrap();
	///
	/// assert!(!map.is_passable((1, 1)));
	/// assert!(map.set_cost((1, 1), 0).is_err());
	/// ```
	pub fn set_cost(&mut self, point: Point, cost: isize) -> Result<(), InputError> {
		let index = self.index_of(point).ok_or(InputError::OutOfBounds {
			point,
			width: self.width,
			height: self.height,
		})?;
		if cost == 0 {
			return Err(InputError::ZeroCost { point });
		}
		self.costs[index] = cost;
		Ok(())
	}

	/// Checks that `start` and `goal` are passable Tiles on the Grid
	pub fn validate_endpoints(&self, start: Point, goal: Point) -> Result<(), InputError> {
		for point in [start, goal] {
			if !self.contains(point) {
				return Err(InputError::OutOfBounds {
					point,
					width: self.width,
					height: self.height,
				});
			}
			if !self.is_passable(point) {
				return Err(InputError::Impassable { point });
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_rows_layout() {
		let map = CostMap::from_rows(&[vec![1isize, 2, 3], vec![4, 5, -1]]).unwrap();
		assert_eq!(map.size(), (3, 2));
		assert_eq!(map.cost((2, 0)), Some(3));
		assert_eq!(map.cost((0, 1)), Some(4));
		assert_eq!(map.index_of((2, 1)), Some(5));
		assert_eq!(map.point_of(5), (2, 1));
		assert!(!map.is_passable((2, 1)));
	}

	#[test]
	fn not_rectangular() {
		let result = CostMap::from_rows(&[vec![1isize, 1, 1], vec![1, 1], vec![1, 1, 1]]);
		assert_eq!(
			result,
			Err(InputError::NotRectangular {
				row: 1,
				expected: 3,
				found: 2
			})
		);
	}

	#[test]
	fn zero_cost() {
		let result = CostMap::from_fn((3, 3), |(x, y)| if (x, y) == (2, 1) { 0 } else { 1 });
		assert_eq!(result, Err(InputError::ZeroCost { point: (2, 1) }));
	}

	#[test]
	fn empty_map() {
		let map = CostMap::from_rows::<Vec<isize>>(&[]).unwrap();
		assert_eq!(map.size(), (0, 0));
		assert_eq!(
			map.validate_endpoints((0, 0), (0, 0)),
			Err(InputError::OutOfBounds {
				point: (0, 0),
				width: 0,
				height: 0
			})
		);

		let map = CostMap::new((0, 4), 1).unwrap();
		assert!(!map.contains((0, 0)));
	}

	#[test]
	fn validate_endpoints() {
		let mut map = CostMap::new((4, 3), 1).unwrap();
		map.set_cost((3, 2), CostMap::IMPASSABLE).unwrap();

		assert_eq!(map.validate_endpoints((0, 0), (2, 2)), Ok(()));
		assert_eq!(
			map.validate_endpoints((0, 0), (3, 2)),
			Err(InputError::Impassable { point: (3, 2) })
		);
		assert_eq!(
			map.validate_endpoints((4, 0), (0, 0)),
			Err(InputError::OutOfBounds {
				point: (4, 0),
				width: 4,
				height: 3
			})
		);
		assert!(map.set_cost((0, 3), 1).is_err());
	}
}
