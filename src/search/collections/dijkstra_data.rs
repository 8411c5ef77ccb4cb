use ahash::{HashMap, HashMapExt};
use log::trace;

use super::{
    vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
    vertex_expanded_data::{VertexExpandedData, VertexExpandedDataHashSet},
};
use crate::graphs::{path::Path, Vertex, Weight};

/// Search state of one Dijkstra run: tentative distances, predecessors, the
/// set of expanded vertices and the queue.
pub struct DijkstraData<V: Vertex> {
    distances: HashMap<V, Weight>,
    predecessors: HashMap<V, V>,
    expanded: VertexExpandedDataHashSet<V>,
    queue: VertexDistanceQueueBinaryHeap<V>,
    stale_pops: u32,
}

impl<V: Vertex> DijkstraData<V> {
    pub fn new(source: V) -> Self {
        let mut data = DijkstraData {
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            expanded: VertexExpandedDataHashSet::new(),
            queue: VertexDistanceQueueBinaryHeap::new(),
            stale_pops: 0,
        };

        data.distances.insert(source.clone(), 0);
        data.queue.insert(source, 0);
        data
    }

    /// Pops the closest vertex that is not expanded yet and expands it.
    ///
    /// A vertex can be in the queue several times with different distances.
    /// Only its first pop carries the minimal distance, every later pop is
    /// stale and gets discarded here.
    pub fn pop(&mut self) -> Option<(V, Weight)> {
        while let Some((vertex, distance)) = self.queue.pop() {
            if self.expanded.expand(&vertex) {
                trace!("discarding stale queue entry {:?} ({})", vertex, distance);
                self.stale_pops += 1;
                continue;
            }

            return Some((vertex, distance));
        }

        None
    }

    /// Relaxes the edge `tail -> head`. The head is only queued again if the
    /// edge strictly improves its tentative distance, so among equally short
    /// routes the first one found wins. Routes whose weight does not fit into
    /// a `Weight` are ignored.
    pub fn update(&mut self, tail: &V, head: &V, edge_weight: Weight) {
        if self.expanded.is_expanded(head) {
            return;
        }

        let Some(distance_tail) = self.get_distance(tail) else {
            return;
        };
        let Some(alternative_distance_head) = distance_tail.checked_add(edge_weight) else {
            return;
        };

        if self
            .get_distance(head)
            .map_or(true, |distance_head| alternative_distance_head < distance_head)
        {
            self.distances
                .insert(head.clone(), alternative_distance_head);
            self.predecessors.insert(head.clone(), tail.clone());
            self.queue.insert(head.clone(), alternative_distance_head);
        }
    }

    pub fn get_distance(&self, vertex: &V) -> Option<Weight> {
        self.distances.get(vertex).copied()
    }

    pub fn get_predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)
    }

    /// Constructs the path to an expanded target vertex.
    ///
    /// Traces back from the target using the predecessors. Returns `None` if
    /// the target was not expanded, i.e. its distance is not final.
    pub fn get_path(&self, target: &V) -> Option<Path<V>> {
        if !self.expanded.is_expanded(target) {
            return None;
        }
        let weight = self.get_distance(target)?;

        let mut vertices = vec![target.clone()];
        let mut current = target;
        while let Some(predecessor) = self.get_predecessor(current) {
            vertices.push(predecessor.clone());
            current = predecessor;
        }
        vertices.reverse();

        Some(Path { vertices, weight })
    }

    /// Number of expanded vertices.
    pub fn search_space_size(&self) -> usize {
        self.expanded.number_of_expanded()
    }

    /// Number of queue entries that were discarded because their vertex was
    /// already expanded.
    pub fn stale_pops(&self) -> u32 {
        self.stale_pops
    }
}

#[cfg(test)]
mod tests {
    use super::DijkstraData;
    use crate::graphs::Weight;

    #[test]
    fn stale_entries_are_skipped() {
        let mut data = DijkstraData::new("s");

        assert_eq!(data.pop(), Some(("s", 0)));
        data.update(&"s", &"a", 10);
        data.update(&"s", &"b", 1);

        assert_eq!(data.pop(), Some(("b", 1)));
        data.update(&"b", &"a", 1);

        // "a" is queued twice now, with 10 and with 2
        assert_eq!(data.pop(), Some(("a", 2)));
        assert_eq!(data.stale_pops(), 0);

        assert_eq!(data.pop(), None);
        assert_eq!(data.stale_pops(), 1);
        assert_eq!(data.search_space_size(), 3);
    }

    #[test]
    fn overflowing_routes_are_ignored() {
        let mut data = DijkstraData::new(0);
        data.pop();
        data.update(&0, &1, 3_000_000_000);
        data.pop();

        data.update(&1, &2, 3_000_000_000);
        assert_eq!(data.get_distance(&2), None);
        assert_eq!(data.pop(), None);

        data.update(&1, &3, Weight::MAX - 3_000_000_000);
        assert_eq!(data.get_distance(&3), Some(Weight::MAX));
    }

    #[test]
    fn expanded_vertices_are_not_relaxed() {
        let mut data = DijkstraData::new(0);
        data.pop();
        data.update(&0, &1, 4);
        data.pop();

        data.update(&1, &0, 1);
        assert_eq!(data.get_distance(&0), Some(0));
        assert_eq!(data.get_predecessor(&0), None);
    }

    #[test]
    fn path_of_expanded_target_only() {
        let mut data = DijkstraData::new('a');
        data.pop();
        data.update(&'a', &'b', 3);

        assert_eq!(data.get_path(&'b'), None);

        data.pop();
        let path = data.get_path(&'b').unwrap();
        assert_eq!(path.vertices, vec!['a', 'b']);
        assert_eq!(path.weight, 3);
    }
}
