use ahash::{HashSet, HashSetExt};

use crate::graphs::Vertex;

pub trait VertexExpandedData<V> {
    /// Marks `vertex` as expanded and returns whether it already was.
    fn expand(&mut self, vertex: &V) -> bool;

    fn is_expanded(&self, vertex: &V) -> bool;

    fn number_of_expanded(&self) -> usize;
}

pub struct VertexExpandedDataHashSet<V> {
    expanded: HashSet<V>,
}

impl<V: Vertex> Default for VertexExpandedDataHashSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> VertexExpandedDataHashSet<V> {
    pub fn new() -> Self {
        VertexExpandedDataHashSet {
            expanded: HashSet::new(),
        }
    }
}

impl<V: Vertex> VertexExpandedData<V> for VertexExpandedDataHashSet<V> {
    fn expand(&mut self, vertex: &V) -> bool {
        if self.expanded.contains(vertex) {
            return true;
        }

        self.expanded.insert(vertex.clone());
        false
    }

    fn is_expanded(&self, vertex: &V) -> bool {
        self.expanded.contains(vertex)
    }

    fn number_of_expanded(&self) -> usize {
        self.expanded.len()
    }
}
