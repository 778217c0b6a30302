use crate::Point;
use thiserror::Error;

/// Malformed input to a search.
///
/// Not finding a Path is not an error: [`find_path`](crate::find_path) returns `Ok(None)` in
/// that case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
	/// A Point lies outside of the Grid
	#[error("point {point:?} is outside of the {width}x{height} grid")]
	OutOfBounds {
		/// the offending Point
		point: Point,
		/// width of the Grid
		width: usize,
		/// height of the Grid
		height: usize,
	},
	/// The start or goal of a search is a wall
	#[error("point {point:?} is impassable")]
	Impassable {
		/// the offending Point
		point: Point,
	},
	/// The rows of a cost map have different lengths
	#[error("row {row} has {found} cells, expected {expected}")]
	NotRectangular {
		/// index of the first row with a wrong length
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		found: usize,
	},
	/// A Tile was given a cost of 0
	#[error("point {point:?} has a cost of 0, costs must be positive or negative for walls")]
	ZeroCost {
		/// the offending Point
		point: Point,
	},
}
