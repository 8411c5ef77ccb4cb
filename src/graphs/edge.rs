use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct DirectedWeightedEdge<V> {
    tail: V,
    head: V,
    weight: Weight,
}

impl<V: Vertex> DirectedWeightedEdge<V> {
    pub fn new(tail: V, head: V, weight: Weight) -> Option<DirectedWeightedEdge<V>> {
        if tail == head {
            return None;
        }

        Some(DirectedWeightedEdge { tail, head, weight })
    }

    pub fn tail(&self) -> &V {
        &self.tail
    }

    pub fn head(&self) -> &V {
        &self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn reversed(&self) -> DirectedWeightedEdge<V> {
        DirectedWeightedEdge {
            head: self.tail.clone(),
            tail: self.head.clone(),
            weight: self.weight,
        }
    }

    pub fn unweighted(&self) -> DirectedEdge<V> {
        DirectedEdge {
            tail: self.tail.clone(),
            head: self.head.clone(),
        }
    }

    pub fn tailless(&self) -> DirectedTaillessWeightedEdge<V> {
        DirectedTaillessWeightedEdge {
            head: self.head.clone(),
            weight: self.weight,
        }
    }
}

/// Adjacency list entry: the tail is implied by the list it lives in.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectedTaillessWeightedEdge<V> {
    head: V,
    weight: Weight,
}

impl<V: Vertex> DirectedTaillessWeightedEdge<V> {
    pub fn new(head: V, weight: Weight) -> DirectedTaillessWeightedEdge<V> {
        DirectedTaillessWeightedEdge { head, weight }
    }

    pub fn head(&self) -> &V {
        &self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_tail(&self, tail: V) -> Option<DirectedWeightedEdge<V>> {
        DirectedWeightedEdge::new(tail, self.head.clone(), self.weight)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct DirectedEdge<V> {
    tail: V,
    head: V,
}

impl<V: Vertex> DirectedEdge<V> {
    pub fn new(tail: V, head: V) -> Option<DirectedEdge<V>> {
        if tail == head {
            return None;
        }

        Some(DirectedEdge { tail, head })
    }

    pub fn tail(&self) -> &V {
        &self.tail
    }

    pub fn head(&self) -> &V {
        &self.head
    }

    pub fn reversed(&self) -> DirectedEdge<V> {
        DirectedEdge {
            tail: self.head.clone(),
            head: self.tail.clone(),
        }
    }
}
