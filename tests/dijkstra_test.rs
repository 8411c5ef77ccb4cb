use std::ops::Range;

use rand::{rngs::StdRng, Rng, SeedableRng};
use route_paths::{
    graphs::{
        adjacency_graph::AdjacencyGraph,
        edge::DirectedWeightedEdge,
        graph_functions::{add_edge_bidirectional, validate_path},
        path::ShortestPathRequest,
        Graph, Weight,
    },
    search::dijkstra::shortest_path,
};

fn get_small_graph() -> AdjacencyGraph<&'static str> {
    let mut graph = AdjacencyGraph::new();
    add_edge_bidirectional(&mut graph, &DirectedWeightedEdge::new("A", "B", 510).unwrap());
    add_edge_bidirectional(&mut graph, &DirectedWeightedEdge::new("A", "H", 275).unwrap());
    add_edge_bidirectional(&mut graph, &DirectedWeightedEdge::new("B", "G", 180).unwrap());
    add_edge_bidirectional(&mut graph, &DirectedWeightedEdge::new("G", "M", 300).unwrap());
    graph
}

fn random_graph(
    rng: &mut StdRng,
    number_of_vertices: u32,
    number_of_edges: u32,
    weights: Range<Weight>,
) -> AdjacencyGraph<u32> {
    let mut graph = AdjacencyGraph::new();
    (0..number_of_vertices).for_each(|vertex| {
        graph.add_vertex(vertex);
    });

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        if let Some(edge) = DirectedWeightedEdge::new(tail, head, rng.gen_range(weights.clone())) {
            graph.set_edge(&edge);
        }
    }

    graph
}

/// Weights of all loopless paths from `source` to `target` whose weight fits
/// into a `Weight`.
fn all_loopless_path_weights(graph: &dyn Graph<u32>, source: u32, target: u32) -> Vec<Weight> {
    fn extend(
        graph: &dyn Graph<u32>,
        path: &mut Vec<u32>,
        weight: Weight,
        target: u32,
        weights: &mut Vec<Weight>,
    ) {
        let Some(&tail) = path.last() else {
            return;
        };
        if tail == target {
            weights.push(weight);
            return;
        }

        for edge in graph.out_edges(&tail) {
            let Some(next_weight) = weight.checked_add(edge.weight()) else {
                continue;
            };
            if !path.contains(edge.head()) {
                path.push(*edge.head());
                extend(graph, path, next_weight, target, weights);
                path.pop();
            }
        }
    }

    let mut weights = Vec::new();
    extend(graph, &mut vec![source], 0, target, &mut weights);
    weights
}

#[test]
fn small_graph() {
    let graph = get_small_graph();

    let path = shortest_path(&graph, &"A", &"G").unwrap();
    assert_eq!(path.vertices, vec!["A", "B", "G"]);
    assert_eq!(path.weight, 690);

    let path = shortest_path(&graph, &"H", &"M").unwrap();
    assert_eq!(path.vertices, vec!["H", "A", "B", "G", "M"]);
    assert_eq!(path.weight, 1265);
}

#[test]
fn trivial_path() {
    let graph = get_small_graph();

    for vertex in graph.vertices() {
        let path = shortest_path(&graph, vertex, vertex).unwrap();
        assert_eq!(path.vertices, vec![*vertex]);
        assert_eq!(path.weight, 0);
    }
}

#[test]
fn absent_endpoints_have_no_path() {
    let graph = get_small_graph();

    assert_eq!(shortest_path(&graph, &"A", &"Z"), None);
    assert_eq!(shortest_path(&graph, &"Z", &"A"), None);
    assert_eq!(shortest_path(&graph, &"Z", &"Z"), None);
}

#[test]
fn directed_edges_are_one_way() {
    let graph = AdjacencyGraph::from_edges(&[
        DirectedWeightedEdge::new(0, 1, 1).unwrap(),
        DirectedWeightedEdge::new(1, 2, 1).unwrap(),
        DirectedWeightedEdge::new(2, 0, 50).unwrap(),
    ]);

    assert_eq!(shortest_path(&graph, &0, &2).map(|path| path.weight), Some(2));
    assert_eq!(shortest_path(&graph, &2, &1).map(|path| path.weight), Some(51));
    assert_eq!(
        shortest_path(&graph, &2, &1).map(|path| path.vertices),
        Some(vec![2, 0, 1])
    );
}

#[test]
fn optimal_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let graph = random_graph(&mut rng, 7, 16, 0..20);
        for source in 0..7 {
            for target in 0..7 {
                let weights = all_loopless_path_weights(&graph, source, target);
                let path = shortest_path(&graph, &source, &target);

                assert_eq!(path.as_ref().map(|path| path.weight), weights.iter().min().copied());
                if let Some(path) = path {
                    let request = ShortestPathRequest::new(source, target);
                    assert_eq!(validate_path(&graph, &request, &path), Ok(()));
                }
            }
        }
    }
}

#[test]
fn overflowing_route_is_not_a_path() {
    let graph = AdjacencyGraph::from_edges(&[
        DirectedWeightedEdge::new(0, 1, 3_000_000_000).unwrap(),
        DirectedWeightedEdge::new(1, 2, 3_000_000_000).unwrap(),
    ]);

    assert_eq!(shortest_path(&graph, &0, &2), None);
    assert_eq!(shortest_path(&graph, &0, &1).map(|path| path.weight), Some(3_000_000_000));
}

#[test]
fn path_of_maximal_weight() {
    let graph = AdjacencyGraph::from_edges(&[
        DirectedWeightedEdge::new(0, 1, Weight::MAX).unwrap(),
        DirectedWeightedEdge::new(1, 2, 0).unwrap(),
        DirectedWeightedEdge::new(0, 3, 3_000_000_000).unwrap(),
        DirectedWeightedEdge::new(3, 4, Weight::MAX - 3_000_000_000).unwrap(),
    ]);

    let path = shortest_path(&graph, &0, &2).unwrap();
    assert_eq!(path.vertices, vec![0, 1, 2]);
    assert_eq!(path.weight, Weight::MAX);

    let path = shortest_path(&graph, &0, &4).unwrap();
    assert_eq!(path.vertices, vec![0, 3, 4]);
    assert_eq!(path.weight, Weight::MAX);
}

#[test]
fn overflow_does_not_shadow_a_longer_route() {
    // 0 -> 1 -> 3 would wrap around to a tiny weight
    let graph = AdjacencyGraph::from_edges(&[
        DirectedWeightedEdge::new(0, 1, 3_000_000_000).unwrap(),
        DirectedWeightedEdge::new(1, 3, 3_000_000_000).unwrap(),
        DirectedWeightedEdge::new(0, 2, 4_000_000_000).unwrap(),
        DirectedWeightedEdge::new(2, 3, 200_000_000).unwrap(),
    ]);

    let path = shortest_path(&graph, &0, &3).unwrap();
    assert_eq!(path.vertices, vec![0, 2, 3]);
    assert_eq!(path.weight, 4_200_000_000);
    assert_eq!(
        validate_path(&graph, &ShortestPathRequest::new(0, 3), &path),
        Ok(())
    );
}

#[test]
fn optimal_on_random_graphs_with_heavy_weights() {
    let mut rng = StdRng::seed_from_u64(4242);

    for _ in 0..50 {
        let graph = random_graph(&mut rng, 7, 16, Weight::MAX / 4..Weight::MAX / 2);
        for source in 0..7 {
            for target in 0..7 {
                let weights = all_loopless_path_weights(&graph, source, target);
                let path = shortest_path(&graph, &source, &target);

                assert_eq!(path.as_ref().map(|path| path.weight), weights.iter().min().copied());
            }
        }
    }
}
