use ahash::{HashSet, HashSetExt};

use super::{
    edge::{DirectedEdge, DirectedWeightedEdge},
    path::Path,
    Graph, Vertex, Weight,
};

/// A view of another graph with a set of directed edges hidden.
///
/// The underlying graph is only borrowed, so blocking an edge never changes
/// what other users of that graph see.
pub struct BlockedEdgesGraph<'a, V: Vertex> {
    graph: &'a dyn Graph<V>,
    blocked: HashSet<DirectedEdge<V>>,
}

impl<'a, V: Vertex> BlockedEdgesGraph<'a, V> {
    pub fn new(graph: &'a dyn Graph<V>) -> Self {
        BlockedEdgesGraph {
            graph,
            blocked: HashSet::new(),
        }
    }

    /// Blocks every edge along `path` in both directions.
    pub fn along_path(graph: &'a dyn Graph<V>, path: &Path<V>) -> Self {
        let mut blocked_graph = BlockedEdgesGraph::new(graph);
        blocked_graph.block_path(path);
        blocked_graph
    }

    pub fn block_edge(&mut self, edge: DirectedEdge<V>) {
        self.blocked.insert(edge);
    }

    pub fn block_path(&mut self, path: &Path<V>) {
        for edge in path.edges() {
            self.block_edge(edge.reversed());
            self.block_edge(edge);
        }
    }

    pub fn is_blocked(&self, edge: &DirectedEdge<V>) -> bool {
        self.blocked.contains(edge)
    }

    pub fn number_of_blocked_edges(&self) -> usize {
        self.blocked.len()
    }
}

impl<'a, V: Vertex> Graph<V> for BlockedEdgesGraph<'a, V> {
    fn number_of_vertices(&self) -> u32 {
        self.graph.number_of_vertices()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        self.graph.vertices()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.graph.contains_vertex(vertex)
    }

    fn out_edges(&self, tail: &V) -> Box<dyn Iterator<Item = DirectedWeightedEdge<V>> + Send + '_> {
        let blocked = &self.blocked;
        Box::new(
            self.graph
                .out_edges(tail)
                .filter(move |edge| !blocked.contains(&edge.unweighted())),
        )
    }

    fn get_edge_weight(&self, edge: &DirectedEdge<V>) -> Option<Weight> {
        if self.is_blocked(edge) {
            return None;
        }

        self.graph.get_edge_weight(edge)
    }
}
