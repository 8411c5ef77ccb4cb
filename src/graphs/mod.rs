use std::{fmt::Debug, hash::Hash};

use self::edge::{DirectedEdge, DirectedWeightedEdge};

pub mod adjacency_graph;
pub mod blocked_edges_graph;
pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod path;

pub type Weight = u32;

/// Anything usable as a vertex key: cities as strings, integer handles, ...
pub trait Vertex: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync> Vertex for T {}

/// Read access to a directed, weighted graph.
///
/// A vertex without outgoing edges, or a vertex the graph has never seen,
/// simply has no out edges. Neither case is an error.
pub trait Graph<V: Vertex>: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .map(|vertex| self.out_edges(vertex).count())
            .fold(0u32, |edges, count| {
                edges.saturating_add(u32::try_from(count).unwrap_or(u32::MAX))
            })
    }

    /// All vertices in insertion order.
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    fn contains_vertex(&self, vertex: &V) -> bool;

    /// Out edges of `tail` in adjacency order.
    fn out_edges(&self, tail: &V) -> Box<dyn Iterator<Item = DirectedWeightedEdge<V>> + Send + '_>;

    fn get_edge_weight(&self, edge: &DirectedEdge<V>) -> Option<Weight>;
}
