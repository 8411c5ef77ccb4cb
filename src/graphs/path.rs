use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{edge::DirectedEdge, Vertex, Weight};

/// Represents a request for finding a shortest path in a graph.
///
/// This struct is used to encapsulate the information required to find a path
/// from a source vertex to a target vertex in a graph. Source and target may
/// be equal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortestPathRequest<V> {
    pub source: V,
    pub target: V,
}

impl<V: Vertex> ShortestPathRequest<V> {
    pub fn new(source: V, target: V) -> ShortestPathRequest<V> {
        ShortestPathRequest { source, target }
    }
}

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path in the graph and the
/// total weight associated with traversing this path. The first vertex is the
/// source and the last one the target.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    pub weight: Weight,
}

impl<V: Vertex> Path<V> {
    pub fn source(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn target(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Number of edges along the path.
    pub fn steps(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// The consecutive vertex pairs of the path as directed edges.
    pub fn edges(&self) -> impl Iterator<Item = DirectedEdge<V>> + '_ {
        self.vertices
            .iter()
            .tuple_windows()
            .filter_map(|(tail, head)| DirectedEdge::new(tail.clone(), head.clone()))
    }

    pub fn is_loopless(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.vertices.len());
        self.vertices.iter().all(|vertex| seen.insert(vertex))
    }
}
