use super::{
	frontier::OpenFrontier,
	grid::{Grid, NodeState},
};
use crate::{geometry, neighbors::MooreNeighborhood};

/// Costs that differ by less than this are treated as equal when choosing between a shortcut
/// and a single step.
const COST_EPSILON: f64 = 1e-9;

/// Relaxes all neighbors of `current`, which was just closed and had its bounds narrowed.
///
/// A neighbor within the angle bounds of `current` is connected straight to the parent of
/// `current`. Otherwise only the orthogonal neighbors are connected to `current` itself.
/// Neighbors that are discovered for the first time are added to the frontier.
///
/// With `weighted`, a straight connection costs its length times the highest cost of the
/// Tiles it crosses. An orthogonal neighbor then takes the single step from `current` if that
/// is cheaper than the shortcut.
pub(crate) fn relax_neighbors(
	grid: &mut Grid,
	frontier: &mut OpenFrontier,
	current: usize,
	weighted: bool,
) {
	let pos = grid[current].pos;
	let parent = grid[current].parent;
	let (lower, upper) = (grid[current].lower, grid[current].upper);

	for point in grid.neighborhood().get_all_neighbors(pos) {
		let other = grid.index_of(point);
		let in_search = match grid[other].state {
			NodeState::Wall | NodeState::Closed => continue,
			NodeState::InSearch => true,
			NodeState::Open => false,
		};
		if grid.squeezes_between_walls(current, other) {
			continue;
		}
		if !in_search {
			grid[other].g = f64::INFINITY;
		}

		let candidate = {
			let grid: &Grid = grid;
			let connect = |from: usize| {
				let weight = if weighted {
					grid.segment_weight(from, other)
				} else {
					1.0
				};
				(from, grid[from].g + grid.distance(from, other) * weight)
			};

			let shortcut = parent
				.filter(|&parent| {
					geometry::angle_within(grid.angle(parent, current, other), lower, upper)
				})
				.map(connect);
			let step = MooreNeighborhood::is_orthogonal(pos, point).then(|| connect(current));
			match (shortcut, step) {
				(Some(shortcut), Some(step)) if weighted && step.1 + COST_EPSILON < shortcut.1 => {
					Some(step)
				}
				(Some(shortcut), _) => Some(shortcut),
				(None, step) => step,
			}
		};

		let Some((new_parent, cost)) = candidate else {
			continue;
		};
		if cost >= grid[other].g {
			continue;
		}

		let node = &mut grid[other];
		node.g = cost;
		node.parent = Some(new_parent);
		let (f, h) = (node.f(), node.h);
		if in_search {
			frontier.update(other, f, h);
		} else {
			node.state = NodeState::InSearch;
			frontier.insert(other, f, h);
		}
	}
}
