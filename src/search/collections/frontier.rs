use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

use crate::graphs::Weight;

/// The set of discovered but not yet explored search states. The exploration
/// order is what distinguishes breadth first, depth first and uniform cost
/// search.
pub trait Frontier<T> {
    /// Adds a state. `priority` is the cumulative weight of the state and is
    /// ignored by frontiers that do not order by weight.
    fn push(&mut self, state: T, priority: Weight);

    fn pop(&mut self) -> Option<T>;

    fn is_empty(&self) -> bool;
}

/// First in, first out.
pub struct QueueFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> QueueFrontier<T> {
    pub fn new() -> Self {
        QueueFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn push(&mut self, state: T, _priority: Weight) {
        self.queue.push_back(state);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Last in, first out.
pub struct StackFrontier<T> {
    stack: Vec<T>,
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        StackFrontier { stack: Vec::new() }
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn push(&mut self, state: T, _priority: Weight) {
        self.stack.push(state);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

struct PriorityEntry<T> {
    priority: Weight,
    sequence: u64,
    state: T,
}

impl<T> PartialEq for PriorityEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<T> Eq for PriorityEntry<T> {}

impl<T> Ord for PriorityEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> PartialOrd for PriorityEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Smallest priority first, ties first in, first out.
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<PriorityEntry<T>>,
    insertions: u64,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            insertions: 0,
        }
    }
}

impl<T> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, state: T, priority: Weight) {
        self.heap.push(PriorityEntry {
            priority,
            sequence: self.insertions,
            state,
        });
        self.insertions += 1;
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.state)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
