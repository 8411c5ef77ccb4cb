use ahash::{HashMap, HashMapExt};
use log::warn;
use serde::{Deserialize, Serialize};

use super::{
    edge::{DirectedEdge, DirectedTaillessWeightedEdge, DirectedWeightedEdge},
    Graph, Vertex, Weight,
};

/// One vertex together with its outgoing edges, the unit a graph file is
/// made of.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdjacencyEntry<V> {
    pub vertex: V,
    pub edges: Vec<DirectedTaillessWeightedEdge<V>>,
}

/// Owned adjacency list graph. Vertices keep their insertion order and every
/// vertex keeps the order in which its out edges were inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyGraph<V: Vertex> {
    vertices: Vec<V>,
    indices: HashMap<V, usize>,
    out_edges: Vec<Vec<DirectedTaillessWeightedEdge<V>>>,
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> for AdjacencyGraph<V> {
    // Counts saturate at u32::MAX instead of wrapping.
    fn number_of_vertices(&self) -> u32 {
        u32::try_from(self.vertices.len()).unwrap_or(u32::MAX)
    }

    fn number_of_edges(&self) -> u32 {
        u32::try_from(self.out_edges.iter().map(Vec::len).sum::<usize>()).unwrap_or(u32::MAX)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    fn out_edges(&self, tail: &V) -> Box<dyn Iterator<Item = DirectedWeightedEdge<V>> + Send + '_> {
        // Needed as the tail would otherwise not live long enough.
        struct OutEdgeIterator<'a, V> {
            tail: V,
            tailless_edge_iterator: std::slice::Iter<'a, DirectedTaillessWeightedEdge<V>>,
        }

        impl<'a, V: Vertex> Iterator for OutEdgeIterator<'a, V> {
            type Item = DirectedWeightedEdge<V>;

            fn next(&mut self) -> Option<Self::Item> {
                let tail = &self.tail;
                self.tailless_edge_iterator
                    .by_ref()
                    .find_map(|tailless_edge| tailless_edge.set_tail(tail.clone()))
            }
        }

        let tailless_edges = match self.index(tail) {
            Some(index) => self.out_edges[index].as_slice(),
            None => &[],
        };

        Box::new(OutEdgeIterator {
            tail: tail.clone(),
            tailless_edge_iterator: tailless_edges.iter(),
        })
    }

    fn get_edge_weight(&self, edge: &DirectedEdge<V>) -> Option<Weight> {
        let edges_sharing_tail = &self.out_edges[self.index(edge.tail())?];

        edges_sharing_tail
            .iter()
            .find(|tailless_edge| tailless_edge.head() == edge.head())
            .map(DirectedTaillessWeightedEdge::weight)
    }
}

impl<V: Vertex> AdjacencyGraph<V> {
    pub fn new() -> Self {
        AdjacencyGraph {
            vertices: Vec::new(),
            indices: HashMap::new(),
            out_edges: Vec::new(),
        }
    }

    pub fn from_edges(edges: &[DirectedWeightedEdge<V>]) -> AdjacencyGraph<V> {
        let mut graph = AdjacencyGraph::new();
        edges.iter().for_each(|edge| graph.set_edge(edge));
        graph
    }

    /// Builds a graph from adjacency entries, keeping the entry order for
    /// vertices and the listed order for edges. Self loops are dropped.
    pub fn from_entries(entries: Vec<AdjacencyEntry<V>>) -> AdjacencyGraph<V> {
        let mut graph = AdjacencyGraph::new();

        for AdjacencyEntry { vertex, edges } in entries {
            graph.add_vertex(vertex.clone());
            for tailless_edge in edges {
                match tailless_edge.set_tail(vertex.clone()) {
                    Some(edge) => graph.set_edge(&edge),
                    None => warn!("dropping self loop at {:?}", vertex),
                }
            }
        }

        graph
    }

    /// Inverse of [`AdjacencyGraph::from_entries`].
    pub fn entries(&self) -> Vec<AdjacencyEntry<V>> {
        self.vertices
            .iter()
            .zip(self.out_edges.iter())
            .map(|(vertex, edges)| AdjacencyEntry {
                vertex: vertex.clone(),
                edges: edges.clone(),
            })
            .collect()
    }

    /// Registers `vertex` without edges. Returns false if it was already known.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.indices.contains_key(&vertex) {
            return false;
        }

        self.indices.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.out_edges.push(Vec::new());
        true
    }

    /// Inserts the edge, or overwrites the weight of an existing edge with the
    /// same endpoints while keeping its adjacency position.
    pub fn set_edge(&mut self, edge: &DirectedWeightedEdge<V>) {
        self.add_vertex(edge.tail().clone());
        self.add_vertex(edge.head().clone());

        let Some(tail_index) = self.index(edge.tail()) else {
            return;
        };
        let edges_sharing_tail = &mut self.out_edges[tail_index];

        match edges_sharing_tail
            .iter_mut()
            .find(|tailless_edge| tailless_edge.head() == edge.head())
        {
            Some(existing) => *existing = edge.tailless(),
            None => edges_sharing_tail.push(edge.tailless()),
        }
    }

    /// Removes the edge and returns its weight, if it existed. Both endpoints
    /// stay in the graph.
    pub fn remove_edge(&mut self, edge: &DirectedEdge<V>) -> Option<Weight> {
        let tail_index = self.index(edge.tail())?;
        let edges_sharing_tail = &mut self.out_edges[tail_index];

        let position = edges_sharing_tail
            .iter()
            .position(|tailless_edge| tailless_edge.head() == edge.head())?;

        Some(edges_sharing_tail.remove(position).weight())
    }

    fn index(&self, vertex: &V) -> Option<usize> {
        self.indices.get(vertex).copied()
    }
}
