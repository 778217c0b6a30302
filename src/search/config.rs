/// Options for configuring a search. See [`Pathfinder`](crate::Pathfinder).
///
/// Default options:
/// ```
/// # use any_angle_pathfinding::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		weighted: false,
/// 		include_start: false,
/// 		max_expansions: None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// `false` (default): the cost of a Path is its length. The costs of the Grid only
	/// distinguish walls from walkable Tiles.
	///
	/// `true`: every straight segment costs its length times the highest cost among the Tiles
	/// it crosses. The search still prefers straight lines, so the Paths are cheap but not
	/// always the cheapest possible.
	///
	/// On a Grid where every walkable Tile costs `1`, both options produce the same Paths.
	pub weighted: bool,
	/// `true`: the start is the first waypoint of every Path.
	///
	/// `false` (default): the waypoints begin with the first Point after the start.
	pub include_start: bool,
	/// `Some(n)`: give up after expanding `n` Tiles, as if no Path existed.
	///
	/// `None` (default): search until the goal is found or every reachable Tile was expanded.
	pub max_expansions: Option<usize>,
}

impl SearchConfig {
	/// a SearchConfig that charges for the cost of walkable Tiles
	///
	/// Values:
	/// ```
	/// # use any_angle_pathfinding::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		weighted: true,
	/// 		include_start: false,
	/// 		max_expansions: None,
	/// 	},
	/// 	SearchConfig::WEIGHTED
	/// );
	/// ```
	pub const WEIGHTED: SearchConfig = SearchConfig {
		weighted: true,
		include_start: false,
		max_expansions: None,
	};
	/// a SearchConfig that gives up on searches that take too long
	///
	/// Values:
	/// ```
	/// # use any_angle_pathfinding::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		weighted: false,
	/// 		include_start: false,
	/// 		max_expansions: Some(100_000),
	/// 	},
	/// 	SearchConfig::BOUNDED
	/// );
	/// ```
	pub const BOUNDED: SearchConfig = SearchConfig {
		weighted: false,
		include_start: false,
		max_expansions: Some(100_000),
	};

	/// Creates a default SearchConfig that expands at most `max_expansions` Tiles
	///
	/// ```
	/// # use any_angle_pathfinding::SearchConfig;
	/// let config = SearchConfig::with_max_expansions(50);
	/// assert_eq!(config.max_expansions, Some(50));
	/// assert!(!config.weighted);
	/// ```
	pub fn with_max_expansions(max_expansions: usize) -> SearchConfig {
		SearchConfig {
			max_expansions: Some(max_expansions),
			..Default::default()
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			weighted: false,
			include_start: false,
			max_expansions: None,
		}
	}
}
