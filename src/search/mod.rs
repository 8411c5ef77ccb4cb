use crate::graphs::{path::Path, Vertex, Weight};

pub mod collections;
pub mod dijkstra;
pub mod k_shortest_paths;
pub mod uninformed;

pub trait PathFinding<V: Vertex>: Send + Sync {
    fn shortest_path(&self, source: &V, target: &V) -> Option<Path<V>>;

    fn shortest_path_weight(&self, source: &V, target: &V) -> Option<Weight>;
}
