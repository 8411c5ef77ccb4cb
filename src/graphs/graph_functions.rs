use itertools::Itertools;
use rand::{seq::IteratorRandom, Rng};

use super::{
    adjacency_graph::AdjacencyGraph,
    edge::{DirectedEdge, DirectedWeightedEdge},
    path::{Path, ShortestPathRequest},
    Graph, Vertex, Weight,
};
use crate::error::PathValidationError;

pub fn add_edge_bidirectional<V: Vertex>(
    graph: &mut AdjacencyGraph<V>,
    edge: &DirectedWeightedEdge<V>,
) {
    graph.set_edge(edge);
    graph.set_edge(&edge.reversed());
}

pub fn is_bidirectional<V: Vertex>(graph: &dyn Graph<V>) -> bool {
    graph.vertices().all(|vertex| {
        graph.out_edges(vertex).all(|out_edge| {
            graph.get_edge_weight(&out_edge.reversed().unweighted()) == Some(out_edge.weight())
        })
    })
}

/// Sums the weights along `vertices`, or `None` if two consecutive vertices
/// are not connected or the sum does not fit into a `Weight`.
pub fn path_weight<V: Vertex>(graph: &dyn Graph<V>, vertices: &[V]) -> Option<Weight> {
    vertices
        .iter()
        .tuple_windows()
        .try_fold(0 as Weight, |weight, (tail, head)| {
            let edge = DirectedEdge::new(tail.clone(), head.clone())?;
            weight.checked_add(graph.get_edge_weight(&edge)?)
        })
}

/// Check if a path is a valid loopless path for the request and that its
/// weight is the sum of the weights of its edges in `graph`.
pub fn validate_path<V: Vertex>(
    graph: &dyn Graph<V>,
    request: &ShortestPathRequest<V>,
    path: &Path<V>,
) -> Result<(), PathValidationError> {
    // Ensure fist and last vertex of path are source and target of request.
    match path.source() {
        None => return Err(PathValidationError::Empty),
        Some(source) if source != &request.source => {
            return Err(PathValidationError::WrongSource)
        }
        _ => {}
    }
    if path.target() != Some(&request.target) {
        return Err(PathValidationError::WrongTarget);
    }

    if !path.is_loopless() {
        return Err(PathValidationError::Loop);
    }

    let mut weight: Weight = 0;
    for edge in path.edges() {
        let edge_weight = graph
            .get_edge_weight(&edge)
            .ok_or_else(|| PathValidationError::MissingEdge(format!("{:?}", edge)))?;
        weight = weight
            .checked_add(edge_weight)
            .ok_or(PathValidationError::WeightOverflow)?;
    }
    if weight != path.weight {
        return Err(PathValidationError::WrongWeight {
            expected: weight,
            actual: path.weight,
        });
    }

    Ok(())
}

/// Draws a request with distinct source and target, or `None` if the graph
/// has less than two vertices.
pub fn random_request<V: Vertex, R: Rng + ?Sized>(
    graph: &dyn Graph<V>,
    rng: &mut R,
) -> Option<ShortestPathRequest<V>> {
    if graph.number_of_vertices() <= 1 {
        // not enough vertices to get a request with source != target
        return None;
    }

    let mut endpoints = graph.vertices().choose_multiple(rng, 2);
    let target = endpoints.pop()?.clone();
    let source = endpoints.pop()?.clone();

    Some(ShortestPathRequest::new(source, target))
}
