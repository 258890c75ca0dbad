use crate::error::EmptyQueueError;

/// An array-backed binary min-heap.
///
/// Elements are ordered by their `priority` alone, the element itself needs no ordering.
/// The same element may be enqueued several times with different priorities. There is no
/// decrease-key: searches push a fresh entry and skip the stale ones when they come up.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use graph_search::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// queue.enqueue('c', 3);
/// queue.enqueue('a', 1);
/// queue.enqueue('b', 2);
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.peek(), Ok(&'a'));
/// assert_eq!(queue.dequeue(), Ok('a'));
/// assert_eq!(queue.dequeue(), Ok('b'));
/// assert_eq!(queue.dequeue(), Ok('c'));
/// assert!(queue.dequeue().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct PriorityQueue<E, P> {
	heap: Vec<(E, P)>,
}

impl<E, P: Ord> PriorityQueue<E, P> {
	/// Creates an empty queue
	pub fn new() -> Self {
		PriorityQueue { heap: Vec::new() }
	}

	/// Creates an empty queue with room for `capacity` entries
	pub fn with_capacity(capacity: usize) -> Self {
		PriorityQueue {
			heap: Vec::with_capacity(capacity),
		}
	}

	/// The number of entries, stale ones included
	pub fn len(&self) -> usize {
		self.heap.len()
	}

	/// `true` if there are no entries
	pub fn is_empty(&self) -> bool {
		self.heap.is_empty()
	}

	/// Inserts `element` with `priority` in O(log n)
	pub fn enqueue(&mut self, element: E, priority: P) {
		self.heap.push((element, priority));
		self.sift_up(self.heap.len() - 1);
	}

	/// Removes and returns the entry with the smallest priority
	pub fn pop(&mut self) -> Option<(E, P)> {
		if self.heap.is_empty() {
			return None;
		}
		let root = self.heap.swap_remove(0);
		self.sift_down(0);
		Some(root)
	}

	/// Removes and returns the element with the smallest priority in O(log n)
	pub fn dequeue(&mut self) -> Result<E, EmptyQueueError> {
		self.pop()
			.map(|(element, _)| element)
			.ok_or(EmptyQueueError)
	}

	/// The element with the smallest priority, without removing it
	pub fn peek(&self) -> Result<&E, EmptyQueueError> {
		self.heap
			.first()
			.map(|(element, _)| element)
			.ok_or(EmptyQueueError)
	}

	/// The smallest priority currently in the queue
	pub fn peek_priority(&self) -> Result<&P, EmptyQueueError> {
		self.heap
			.first()
			.map(|(_, priority)| priority)
			.ok_or(EmptyQueueError)
	}

	/// Removes all entries, keeping the allocation
	pub fn clear(&mut self) {
		self.heap.clear();
	}

	fn sift_up(&mut self, mut index: usize) {
		while index > 0 {
			let parent = (index - 1) / 2;
			if self.heap[parent].1 <= self.heap[index].1 {
				return;
			}
			self.heap.swap(parent, index);
			index = parent;
		}
	}

	fn sift_down(&mut self, mut index: usize) {
		let len = self.heap.len();
		loop {
			let left = 2 * index + 1;
			let right = left + 1;
			let mut smallest = index;

			// left is checked first, so it wins ties between the children
			if left < len && self.heap[left].1 < self.heap[smallest].1 {
				smallest = left;
			}
			if right < len && self.heap[right].1 < self.heap[smallest].1 {
				smallest = right;
			}
			if smallest == index {
				return;
			}
			self.heap.swap(index, smallest);
			index = smallest;
		}
	}
}

impl<E, P: Ord> Default for PriorityQueue<E, P> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E, P: Ord> Extend<(E, P)> for PriorityQueue<E, P> {
	fn extend<I: IntoIterator<Item = (E, P)>>(&mut self, iter: I) {
		for (element, priority) in iter {
			self.enqueue(element, priority);
		}
	}
}

impl<E, P: Ord> FromIterator<(E, P)> for PriorityQueue<E, P> {
	fn from_iter<I: IntoIterator<Item = (E, P)>>(iter: I) -> Self {
		let mut queue = PriorityQueue::new();
		queue.extend(iter);
		queue
	}
}
