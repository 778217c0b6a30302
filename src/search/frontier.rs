use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry in the heap. Entries are never removed from the heap directly; instead the
/// frontier remembers the version of the current entry of every node, and stale entries are
/// skipped when they reach the top.
#[derive(Debug)]
struct HeuristicElement {
	f: f64,
	h: f64,
	/// when the node was first inserted, kept across updates
	order: u64,
	version: u64,
	index: usize,
}

impl PartialEq for HeuristicElement {
	fn eq(&self, rhs: &Self) -> bool {
		self.cmp(rhs) == Ordering::Equal
	}
}
impl Eq for HeuristicElement {}
impl PartialOrd for HeuristicElement {
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}
impl Ord for HeuristicElement {
	/// lowest f first, then lowest h, then the node that was inserted last
	fn cmp(&self, rhs: &Self) -> Ordering {
		rhs.f
			.total_cmp(&self.f)
			.then_with(|| rhs.h.total_cmp(&self.h))
			.then_with(|| self.order.cmp(&rhs.order))
			.then_with(|| self.version.cmp(&rhs.version))
	}
}

/// The live heap entry of a node on the frontier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct LiveEntry {
	order: u64,
	version: u64,
}

/// The set of nodes that were discovered but not expanded yet.
#[derive(Debug)]
pub(crate) struct OpenFrontier {
	heap: BinaryHeap<HeuristicElement>,
	live: Vec<Option<LiveEntry>>,
	len: usize,
	next_order: u64,
	next_version: u64,
}

impl OpenFrontier {
	/// Creates an empty frontier for a Grid with `node_count` nodes
	pub fn new(node_count: usize) -> OpenFrontier {
		OpenFrontier {
			heap: BinaryHeap::with_capacity(node_count / 2),
			live: vec![None; node_count],
			len: 0,
			next_order: 0,
			next_version: 0,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn contains(&self, index: usize) -> bool {
		self.live[index].is_some()
	}

	/// Adds a node that is not on the frontier yet
	#[track_caller]
	pub fn insert(&mut self, index: usize, f: f64, h: f64) {
		debug_assert!(!self.contains(index), "node {} inserted twice", index);
		let order = self.next_order;
		self.next_order += 1;
		self.len += 1;
		self.push(index, order, f, h);
	}

	/// Changes the priority of a node that is already on the frontier. The node keeps its
	/// place among nodes with the same priority.
	#[track_caller]
	pub fn update(&mut self, index: usize, f: f64, h: f64) {
		let Some(LiveEntry { order, .. }) = self.live[index] else {
			panic!("node {} is not on the frontier", index);
		};
		self.push(index, order, f, h);
	}

	/// Removes a node from the frontier. Returns `false` if it was not on the frontier.
	#[cfg(test)]
	pub fn remove(&mut self, index: usize) -> bool {
		let removed = self.live[index].take().is_some();
		if removed {
			self.len -= 1;
		}
		removed
	}

	/// Removes and returns the node with the lowest f-value, breaking ties by the lowest h-value
	/// and then by the most recent insert.
	pub fn extract_best(&mut self) -> Option<usize> {
		while let Some(HeuristicElement {
			order,
			version,
			index,
			..
		}) = self.heap.pop()
		{
			if self.live[index] == Some(LiveEntry { order, version }) {
				self.live[index] = None;
				self.len -= 1;
				return Some(index);
			}
		}
		None
	}

	fn push(&mut self, index: usize, order: u64, f: f64, h: f64) {
		let version = self.next_version;
		self.next_version += 1;
		self.live[index] = Some(LiveEntry { order, version });
		self.heap.push(HeuristicElement {
			f,
			h,
			order,
			version,
			index,
		});
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn order() {
		let mut frontier = OpenFrontier::new(5);
		frontier.insert(0, 3.0, 1.0);
		frontier.insert(1, 2.0, 2.0);
		frontier.insert(2, 2.0, 1.0);
		frontier.insert(3, 4.0, 0.0);

		assert_eq!(frontier.len(), 4);
		assert_eq!(frontier.extract_best(), Some(2));
		assert_eq!(frontier.extract_best(), Some(1));
		assert_eq!(frontier.extract_best(), Some(0));
		assert_eq!(frontier.extract_best(), Some(3));
		assert_eq!(frontier.extract_best(), None);
		assert!(frontier.is_empty());
	}

	#[test]
	fn full_tie_prefers_latest_insert() {
		let mut frontier = OpenFrontier::new(3);
		frontier.insert(0, 2.0, 1.0);
		frontier.insert(1, 2.0, 1.0);
		frontier.insert(2, 2.0, 1.0);
		assert_eq!(frontier.extract_best(), Some(2));

		// an update does not move 0 past 1, which was inserted later
		frontier.update(0, 2.0, 1.0);
		assert_eq!(frontier.extract_best(), Some(1));
		assert_eq!(frontier.extract_best(), Some(0));
		assert_eq!(frontier.extract_best(), None);
	}

	#[test]
	fn update_into_a_tie() {
		let mut frontier = OpenFrontier::new(3);
		frontier.insert(0, 5.0, 1.0);
		frontier.insert(1, 2.0, 1.0);
		frontier.insert(2, 4.0, 1.0);

		frontier.update(0, 2.0, 1.0);
		frontier.update(2, 2.0, 1.0);
		assert_eq!(frontier.len(), 3);
		assert_eq!(frontier.extract_best(), Some(2));
		assert_eq!(frontier.extract_best(), Some(1));
		assert_eq!(frontier.extract_best(), Some(0));
		assert!(frontier.is_empty());
	}

	#[test]
	fn update_and_remove() {
		let mut frontier = OpenFrontier::new(4);
		frontier.insert(0, 5.0, 1.0);
		frontier.insert(1, 4.0, 1.0);
		frontier.insert(2, 6.0, 1.0);

		frontier.update(2, 3.0, 1.0);
		assert!(frontier.remove(1));
		assert!(!frontier.remove(1));
		assert!(!frontier.contains(1));
		assert_eq!(frontier.len(), 2);

		assert_eq!(frontier.extract_best(), Some(2));
		assert_eq!(frontier.extract_best(), Some(0));
		// the stale entry of 2 and the removed 1 are skipped
		assert_eq!(frontier.extract_best(), None);

		frontier.insert(1, 1.0, 0.0);
		assert_eq!(frontier.extract_best(), Some(1));
	}
}
