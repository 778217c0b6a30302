use crate::{geometry, Point};

/// An any-angle Path on the Grid
///
/// Stores the waypoints of the Path: the corners of a polyline that starts at [`start`](Path::start)
/// and ends at [`goal`](Path::goal). Consecutive waypoints are usually not adjacent on the Grid,
/// use [`cells`](Path::cells) to get every Tile the Path crosses.
///
/// The start itself is not part of the waypoints, unless
/// [`SearchConfig::include_start`](crate::SearchConfig::include_start) was set.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
	start: Point,
	waypoints: Vec<Point>,
	cost: f64,
	expansions: usize,
}

impl Path {
	pub(crate) fn new(start: Point, waypoints: Vec<Point>, cost: f64, expansions: usize) -> Path {
		Path {
			start,
			waypoints,
			cost,
			expansions,
		}
	}

	/// The total Cost of the Path
	///
	/// On a Grid where every Tile costs `1` this is the same as [`length`](Path::length).
	pub fn cost(&self) -> f64 {
		self.cost
	}

	/// The number of waypoints
	pub fn len(&self) -> usize {
		self.waypoints.len()
	}

	/// Returns `true` if there are no waypoints, which happens when start and goal are the same
	pub fn is_empty(&self) -> bool {
		self.waypoints.is_empty()
	}

	/// The Point where the search started
	pub fn start(&self) -> Point {
		self.start
	}

	/// The last Point of the Path
	pub fn goal(&self) -> Point {
		self.waypoints.last().copied().unwrap_or(self.start)
	}

	/// The waypoints of the Path
	pub fn waypoints(&self) -> &[Point] {
		&self.waypoints
	}

	/// Returns an Iterator over the waypoints
	pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Point>> {
		self.waypoints.iter().copied()
	}

	/// How many Tiles the search expanded to find this Path
	pub fn expansions(&self) -> usize {
		self.expansions
	}

	/// The Euclidean length of the polyline from the start through all waypoints
	///
	/// ## Examples
	/// ```
	/// # use any_angle_pathfinding::prelude::*;
	/// let map = CostMap::new((5, 5), 1).unwrap();
	/// let path = find_path((0, 0), (3, 4), &map).unwrap().unwrap();
	///
	/// assert_eq!(path.waypoints(), &[(3, 4)]);
	/// assert_eq!(path.length(), 5.0);
	/// ```
	pub fn length(&self) -> f64 {
		self.segments()
			.map(|(from, to)| geometry::distance(from, to))
			.sum()
	}

	/// Every Tile the Path walks across, in order, excluding the start
	///
	/// Each segment between two waypoints is rasterized with
	/// [Bresenham's line algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm).
	///
	/// ## Examples
	/// ```
	/// # use any_angle_pathfinding::prelude::*;
	/// let map = CostMap::new((5, 5), 1).unwrap();
	/// let path = find_path((0, 0), (4, 4), &map).unwrap().unwrap();
	///
	/// assert_eq!(path.waypoints(), &[(4, 4)]);
	/// assert_eq!(path.cells(), vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
	/// ```
	pub fn cells(&self) -> Vec<Point> {
		self.segments()
			.flat_map(|(from, to)| geometry::Line::new(from, to))
			.collect()
	}

	fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
		let mut previous = self.start;
		self.waypoints.iter().filter_map(move |&point| {
			let from = previous;
			previous = point;
			// a leading start waypoint is a segment of length 0
			(from != point).then_some((from, point))
		})
	}
}

use std::ops::{Deref, Index};

impl Index<usize> for Path {
	type Output = Point;
	fn index(&self, index: usize) -> &Point {
		&self.waypoints[index]
	}
}

impl Deref for Path {
	type Target = [Point];
	fn deref(&self) -> &[Point] {
		&self.waypoints
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = Point;
	type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

use std::fmt;
impl fmt::Display for Path {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {:.2}]: ", self.cost)?;
		if self.waypoints.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{:?}", self.waypoints[0])?;
			for p in self.waypoints.iter().skip(1) {
				write!(fmt, " -> {:?}", p)?;
			}
			Ok(())
		}
	}
}
