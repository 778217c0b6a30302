use crate::Point;

/// Tolerance for comparing angles that are mathematically equal but were computed differently.
///
/// Distinct directions between cells of any practical Grid are many orders of magnitude further
/// apart than this.
pub(crate) const ANGLE_EPSILON: f64 = 1e-9;

/// Euclidean distance between two Points.
///
/// The squared distance is an exact integer, so the result is the correctly rounded square root.
pub(crate) fn distance(a: Point, b: Point) -> f64 {
	let dx = a.0.abs_diff(b.0) as f64;
	let dy = a.1.abs_diff(b.1) as f64;
	(dx * dx + dy * dy).sqrt()
}

/// The signed angle in `(-pi, pi]` from `a - origin` to `b - origin`.
///
/// Positive values turn from the x-axis towards the y-axis. Returns `0` if either vector is zero.
pub(crate) fn signed_angle(origin: Point, a: Point, b: Point) -> f64 {
	let (ux, uy) = offset(origin, a);
	let (vx, vy) = offset(origin, b);
	let cross = ux * vy - uy * vx;
	let dot = ux * vx + uy * vy;
	(cross as f64).atan2(dot as f64)
}

/// `lower <= angle <= upper`, inclusive up to [`ANGLE_EPSILON`]
pub(crate) fn angle_within(angle: f64, lower: f64, upper: f64) -> bool {
	lower - ANGLE_EPSILON <= angle && angle <= upper + ANGLE_EPSILON
}

/// The Tiles on the line from one Point to another, excluding the first one.
///
/// Walks the line with
/// [Bresenham's line algorithm](https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm).
#[derive(Clone, Debug)]
pub(crate) struct Line {
	x: isize,
	y: isize,
	end: (isize, isize),
	dx: isize,
	dy: isize,
	sx: isize,
	sy: isize,
	error: isize,
}

impl Line {
	pub fn new(from: Point, to: Point) -> Line {
		let (x, y) = (from.0 as isize, from.1 as isize);
		let end = (to.0 as isize, to.1 as isize);
		let dx = (end.0 - x).abs();
		let dy = -(end.1 - y).abs();
		Line {
			x,
			y,
			end,
			dx,
			dy,
			sx: if x < end.0 { 1 } else { -1 },
			sy: if y < end.1 { 1 } else { -1 },
			error: dx + dy,
		}
	}
}

impl Iterator for Line {
	type Item = Point;
	fn next(&mut self) -> Option<Point> {
		if (self.x, self.y) == self.end {
			return None;
		}
		let doubled = 2 * self.error;
		if doubled >= self.dy {
			self.error += self.dy;
			self.x += self.sx;
		}
		if doubled <= self.dx {
			self.error += self.dx;
			self.y += self.sy;
		}
		Some((self.x as usize, self.y as usize))
	}
}

fn offset(from: Point, to: Point) -> (i64, i64) {
	(to.0 as i64 - from.0 as i64, to.1 as i64 - from.1 as i64)
}
