#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find any-angle Paths on a Grid.
//!
//! ## Introduction
//! Regular A* on a Grid produces Paths that are restricted to the 8 directions of the Grid,
//! leading to the typical zig-zag Paths that are noticeably longer than the true shortest Path.
//! Any-angle Algorithms like Theta* fix that by allowing a Node to be connected directly to the
//! Parent of the Node it was discovered from, as long as the straight line between the two is
//! not obstructed.
//!
//! Checking every one of those straight lines with a raycast is expensive. This crate instead
//! implements the angle-propagation variant of Theta*: every expanded Tile keeps an angular
//! window, relative to the line towards its Parent, in which a neighbor can be connected
//! straight back to that Parent. The window is narrowed by the walls around the Tile and
//! inherited from already expanded siblings, so no raycast is ever performed.
//!
//! The resulting Paths are a list of waypoints: the corners of a polyline from the start to the
//! goal. A Path across an empty Grid is a single straight segment, no matter the direction.
//!
//! ## Examples
//! Finding a Path:
//! ```
//! use any_angle_pathfinding::prelude::*;
//!
//! // create and initialize Grid
//! // 0 = empty, 1 = swamp, 2 = wall
//! let grid = [
//!     [0, 2, 0, 0, 0],
//!     [0, 2, 2, 2, 2],
//!     [0, 1, 0, 0, 0],
//!     [0, 1, 0, 2, 0],
//!     [0, 0, 0, 2, 0],
//! ];
//! let (width, height) = (grid[0].len(), grid.len());
//!
//! const COST_MAP: [isize; 3] = [1, 10, -1];
//!
//! let map = CostMap::from_fn((width, height), |(x, y)| COST_MAP[grid[y][x]]).unwrap();
//!
//! let start = (0, 0);
//! let goal = (4, 4);
//!
//! // find_path returns Ok(Some(Path)) on success
//! let path = find_path(start, goal, &map).unwrap();
//!
//! assert!(path.is_some());
//! let path = path.unwrap();
//! assert_eq!(path.goal(), goal);
//! ```
//! The cost of a Tile is an `isize`. Positive values are walkable, negative values
//! ([`CostMap::IMPASSABLE`]) mark a wall. By default only the length of a Path counts;
//! [`SearchConfig::WEIGHTED`] also charges for the cost of the Tiles it crosses.
//!
//! Not finding a Path is not an error:
//! ```
//! # use any_angle_pathfinding::prelude::*;
//! # let grid = [
//! #     [0, 2, 0, 0, 0],
//! #     [0, 2, 2, 2, 2],
//! #     [0, 1, 0, 0, 0],
//! #     [0, 1, 0, 2, 0],
//! #     [0, 0, 0, 2, 0],
//! # ];
//! # let (width, height) = (grid[0].len(), grid.len());
//! # const COST_MAP: [isize; 3] = [1, 10, -1];
//! # let map = CostMap::from_fn((width, height), |(x, y)| COST_MAP[grid[y][x]]).unwrap();
//! let path = find_path((0, 0), (2, 0), &map).unwrap();
//! assert!(path.is_none());
//!
//! // but asking for a Point outside of the Grid is
//! let error = find_path((0, 0), (7, 0), &map).unwrap_err();
//! assert!(matches!(error, InputError::OutOfBounds { .. }));
//! ```
//!
//! ### Configuration
//! A [`Pathfinder`] stores a [`SearchConfig`] and can search for several Goals at once:
//! ```
//! use any_angle_pathfinding::prelude::*;
//!
//! let map = CostMap::new((8, 8), 1).unwrap();
//! let pathfinder = Pathfinder::new(SearchConfig {
//!     include_start: true,
//!     ..SearchConfig::BOUNDED
//! });
//!
//! let paths = pathfinder.find_paths((0, 0), [(7, 7), (7, 0)], &map).unwrap();
//!
//! assert_eq!(paths[&(7, 7)].waypoints(), &[(0, 0), (7, 7)]);
//! assert_eq!(paths[&(7, 0)].waypoints(), &[(0, 0), (7, 0)]);
//! ```

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// A [`HashMap`](hashbrown::HashMap) with Points as keys
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

#[cfg(feature = "log")]
macro_rules! debug {
	($($arg:tt)*) => { log::debug!($($arg)*) };
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
	($($arg:tt)*) => {
		if false {
			let _ = format!($($arg)*);
		}
	};
}

#[cfg(feature = "log")]
macro_rules! trace {
	($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "log"))]
macro_rules! trace {
	($($arg:tt)*) => {
		if false {
			let _ = format!($($arg)*);
		}
	};
}

mod cost_map;
pub use self::cost_map::CostMap;

mod error;
pub use self::error::InputError;

mod geometry;

pub mod neighbors;

mod path;
pub use self::path::Path;

mod search;
pub use self::search::{find_path, Pathfinder, SearchConfig};

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		find_path, neighbors::MooreNeighborhood, CostMap, InputError, Path, Pathfinder, Point,
		PointMap, SearchConfig,
	};
}
