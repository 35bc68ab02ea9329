use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A maintenance task with its urgency (lower surfaces first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub urgency: u32,
}

// Heap entry: urgency first, then an insertion counter so equal urgencies
// come back out in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    urgency: u32,
    seq: u64,
    description: String,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.urgency, self.seq).cmp(&(other.urgency, other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The maintenance board: a min-heap of tasks keyed on urgency. Purely
/// additive; nothing is ever removed.
#[derive(Debug, Default)]
pub struct TaskBoard {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl TaskBoard {
    pub fn new() -> Self {
        TaskBoard::default()
    }

    pub fn add(&mut self, description: impl Into<String>, urgency: u32) {
        self.heap.push(Reverse(Entry {
            urgency,
            seq: self.next_seq,
            description: description.into(),
        }));
        self.next_seq += 1;
    }

    /// All tasks ascending by urgency, ties in insertion order. Drains a
    /// clone of the heap so the board keeps its tasks.
    pub fn by_urgency(&self) -> Vec<Task> {
        let mut heap = self.heap.clone();
        let mut tasks = Vec::with_capacity(heap.len());
        while let Some(Reverse(entry)) = heap.pop() {
            tasks.push(Task {
                description: entry.description,
                urgency: entry.urgency,
            });
        }
        tasks
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
