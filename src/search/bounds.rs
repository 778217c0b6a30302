use super::grid::{Grid, NodeState};
use crate::{geometry::ANGLE_EPSILON, neighbors::DIAGONALS};

/// Narrows the angle bounds of `current`, which was just closed.
///
/// The bounds are relative to the line from the parent of `current` to `current`. A neighbor
/// whose angle lies within the bounds can be connected straight to that parent.
///
/// Does nothing for the start, whose bounds stay unconstrained.
pub(crate) fn narrow_bounds(grid: &mut Grid, current: usize) {
	let Some(parent) = grid[current].parent else {
		return;
	};
	let pos = grid[current].pos;
	let neighborhood = grid.neighborhood();
	let parent_distance = grid.distance(parent, current);

	let mut lower = grid[current].lower;
	let mut upper = grid[current].upper;

	// walls at the corners
	for dir in DIAGONALS {
		let mut triple = [0; 3];
		let mut len = 0;
		for point in neighborhood.diagonal_triple(pos, dir) {
			triple[len] = grid.index_of(point);
			len += 1;
		}
		let triple = &triple[..len];
		if !triple.iter().any(|&index| grid.is_wall(index)) {
			continue;
		}

		// every Tile of the corner lies on one side of the line, or on the line before `current`
		let on_side = |side: f64| {
			triple.iter().all(|&other| {
				if other == parent {
					return true;
				}
				let angle = grid.angle(parent, current, other);
				angle * side > 0.0
					|| (angle == 0.0 && grid.distance(parent, other) <= parent_distance)
			})
		};
		if on_side(-1.0) {
			trace!("corner {:?} of {:?} blocks negative angles", dir, pos);
			lower = 0.0;
		}
		if on_side(1.0) {
			trace!("corner {:?} of {:?} blocks positive angles", dir, pos);
			upper = 0.0;
		}
	}

	// closed siblings and Tiles closer to the parent
	for point in neighborhood.get_all_neighbors(pos) {
		let other = grid.index_of(point);
		let sibling = grid.is_closed_sibling(current, other);

		if sibling && other != grid.start() {
			let angle = grid.angle(parent, current, other);
			let (other_lower, other_upper) = (grid[other].lower + angle, grid[other].upper + angle);
			if other_lower <= ANGLE_EPSILON {
				lower = lower.max(other_lower.min(0.0));
			}
			if other_upper >= -ANGLE_EPSILON {
				upper = upper.min(other_upper.max(0.0));
			}
		}

		if other != parent && !sibling && grid.distance(parent, other) < parent_distance {
			let angle = grid.angle(parent, current, other);
			if angle < 0.0 {
				lower = lower.max(angle);
			} else if angle > 0.0 {
				upper = upper.min(angle);
			}
		}
	}

	let node = &mut grid[current];
	debug_assert_eq!(node.state, NodeState::Closed);
	debug_assert!(
		node.lower <= lower && lower <= 0.0 && 0.0 <= upper && upper <= node.upper,
		"bounds of {:?} widened or lost the line to the parent: [{}, {}] -> [{}, {}]",
		node.pos,
		node.lower,
		node.upper,
		lower,
		upper
	);
	node.lower = lower;
	node.upper = upper;
}
