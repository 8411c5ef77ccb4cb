use log::debug;

use super::{collections::dijkstra_data::DijkstraData, PathFinding};
use crate::graphs::{path::Path, Graph, Vertex, Weight};

pub struct Dijkstra<'a, V: Vertex> {
    pub graph: &'a dyn Graph<V>,
}

impl<'a, V: Vertex> PathFinding<V> for Dijkstra<'a, V> {
    fn shortest_path(&self, source: &V, target: &V) -> Option<Path<V>> {
        shortest_path(self.graph, source, target)
    }

    fn shortest_path_weight(&self, source: &V, target: &V) -> Option<Weight> {
        shortest_path_weight(self.graph, source, target)
    }
}

/// Lowest weight path from `source` to `target`, or `None` if there is none.
///
/// An endpoint that is not part of the graph has no path to or from it.
/// Equally short paths are resolved in favour of the one discovered first.
pub fn shortest_path<V: Vertex>(graph: &dyn Graph<V>, source: &V, target: &V) -> Option<Path<V>> {
    if !graph.contains_vertex(source) || !graph.contains_vertex(target) {
        debug!("no path from {:?} to {:?}: unknown vertex", source, target);
        return None;
    }

    let data = get_data(graph, source, target);
    data.get_path(target)
}

pub fn shortest_path_weight<V: Vertex>(
    graph: &dyn Graph<V>,
    source: &V,
    target: &V,
) -> Option<Weight> {
    shortest_path(graph, source, target).map(|path| path.weight)
}

/// Runs Dijkstra until `target` is expanded or the queue is exhausted.
pub fn get_data<V: Vertex>(graph: &dyn Graph<V>, source: &V, target: &V) -> DijkstraData<V> {
    let mut data = DijkstraData::new(source.clone());

    while let Some((vertex, _)) = data.pop() {
        if &vertex == target {
            return data;
        }
        graph
            .out_edges(&vertex)
            .for_each(|edge| data.update(&vertex, edge.head(), edge.weight()));
    }

    data
}

#[cfg(test)]
mod tests {
    use super::{get_data, shortest_path, Dijkstra};
    use crate::{
        graphs::{adjacency_graph::AdjacencyGraph, edge::DirectedWeightedEdge},
        search::PathFinding,
    };

    fn diamond() -> AdjacencyGraph<&'static str> {
        AdjacencyGraph::from_edges(&[
            DirectedWeightedEdge::new("s", "a", 10).unwrap(),
            DirectedWeightedEdge::new("s", "b", 1).unwrap(),
            DirectedWeightedEdge::new("b", "a", 1).unwrap(),
            DirectedWeightedEdge::new("a", "t", 20).unwrap(),
        ])
    }

    #[test]
    fn lazy_deletion_branch_is_taken() {
        let graph = diamond();
        let data = get_data(&graph, &"s", &"t");

        // "a" was queued with 10 and with 2, the 10 entry is popped before "t"
        assert_eq!(data.stale_pops(), 1);
        let path = data.get_path(&"t").unwrap();
        assert_eq!(path.vertices, vec!["s", "b", "a", "t"]);
        assert_eq!(path.weight, 22);
    }

    #[test]
    fn equal_weights_keep_first_discovered() {
        // both s-a-t and s-b-t weigh 2, "a" is listed first
        let graph = AdjacencyGraph::from_edges(&[
            DirectedWeightedEdge::new("s", "a", 1).unwrap(),
            DirectedWeightedEdge::new("s", "b", 1).unwrap(),
            DirectedWeightedEdge::new("a", "t", 1).unwrap(),
            DirectedWeightedEdge::new("b", "t", 1).unwrap(),
        ]);

        let path = shortest_path(&graph, &"s", &"t").unwrap();
        assert_eq!(path.vertices, vec!["s", "a", "t"]);
    }

    #[test]
    fn stops_at_target() {
        let graph = diamond();
        let data = get_data(&graph, &"s", &"b");

        assert_eq!(data.search_space_size(), 2);
    }

    #[test]
    fn path_finding_trait() {
        let graph = diamond();
        let dijkstra = Dijkstra { graph: &graph };

        assert_eq!(dijkstra.shortest_path_weight(&"s", &"a"), Some(2));
        assert_eq!(dijkstra.shortest_path_weight(&"t", &"s"), None);
        assert_eq!(dijkstra.shortest_path(&"x", &"x"), None);
    }
}
