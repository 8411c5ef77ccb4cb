use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{Vertex, Weight};

/// A trait for a priority queue that manages vertices and their distances.
/// This trait is useful for graph algorithms that need to repeatedly retrieve
/// the vertex with the smallest distance (such as Dijkstra's algorithm).
///
/// The implementing structs do not use a decrease key operation, a vertex may
/// be inserted several times.
pub trait VertexDistanceQueue<V> {
    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: V, distance: Weight);

    /// Removes and returns the vertex with the smallest distance from the
    /// priority queue or none if the queue is empty.
    fn pop(&mut self) -> Option<(V, Weight)>;

    fn is_empty(&self) -> bool;
}

/// Entries are ordered by distance and, among equal distances, by insertion
/// order. The sequence number is unique per queue so no two entries compare
/// equal, which keeps `Ord` and `PartialEq` consistent without requiring
/// the vertex to be ordered.
struct QueueElement<V> {
    distance: Weight,
    sequence: u64,
    vertex: V,
}

impl<V> PartialEq for QueueElement<V> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.sequence == other.sequence
    }
}

impl<V> Eq for QueueElement<V> {}

// `BinaryHeap` is a max-heap, flip the ordering to pop the smallest entry.
impl<V> Ord for QueueElement<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<V> PartialOrd for QueueElement<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue implementation using a Binary Heap. Ties are broken
/// first in, first out.
pub struct VertexDistanceQueueBinaryHeap<V> {
    heap: BinaryHeap<QueueElement<V>>,
    insertions: u64,
}

impl<V: Vertex> Default for VertexDistanceQueueBinaryHeap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> VertexDistanceQueueBinaryHeap<V> {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
            insertions: 0,
        }
    }
}

impl<V: Vertex> VertexDistanceQueue<V> for VertexDistanceQueueBinaryHeap<V> {
    fn insert(&mut self, vertex: V, distance: Weight) {
        self.heap.push(QueueElement {
            distance,
            sequence: self.insertions,
            vertex,
        });
        self.insertions += 1;
    }

    fn pop(&mut self) -> Option<(V, Weight)> {
        let QueueElement {
            distance, vertex, ..
        } = self.heap.pop()?;

        Some((vertex, distance))
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
