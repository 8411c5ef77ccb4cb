//! Loopless k shortest paths in the manner of Yen.
//!
//! This is the simplified variant: instead of branching at every deviation
//! vertex of the last accepted path, each round blocks all edges of that path
//! (in both directions) and runs one Dijkstra on what is left. The first path
//! is a true shortest path. The following ones are loopless and distinct from
//! every earlier result, but are not guaranteed to be the 2nd, 3rd, ...
//! shortest paths of the graph.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::dijkstra::shortest_path;
use crate::{
    error::SearchError,
    graphs::{
        blocked_edges_graph::BlockedEdgesGraph,
        path::{Path, ShortestPathRequest},
        Graph, Vertex,
    },
};

/// Paths in the order they were found. The first one is a shortest path.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KShortestPaths<V> {
    pub paths: Vec<Path<V>>,
}

impl<V> KShortestPaths<V> {
    /// Number of paths found, at most the requested k.
    pub fn found(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn shortest(&self) -> Option<&Path<V>> {
        self.paths.first()
    }
}

/// Finds up to `k` distinct loopless paths from `source` to `target`.
///
/// Fewer than `k` paths is not an error, the search stops as soon as a round
/// finds no path or only rediscovers an earlier one. `graph` is only read;
/// edges are blocked on a per round view.
pub fn k_shortest_paths<V: Vertex>(
    graph: &dyn Graph<V>,
    source: &V,
    target: &V,
    k: usize,
) -> Result<KShortestPaths<V>, SearchError> {
    if k == 0 {
        return Err(SearchError::InvalidK(k));
    }

    let mut paths: Vec<Path<V>> = Vec::with_capacity(k);

    let Some(first_path) = shortest_path(graph, source, target) else {
        debug!("no path from {:?} to {:?}", source, target);
        return Ok(KShortestPaths { paths });
    };
    paths.push(first_path);

    while paths.len() < k {
        let Some(previous_path) = paths.last() else {
            break;
        };

        // Only the edges of the latest path are blocked, a fresh view per
        // round so nothing accumulates across rounds.
        let blocked_graph = BlockedEdgesGraph::along_path(graph, previous_path);
        debug!(
            "round {}: blocked {} edges of {:?}",
            paths.len(),
            blocked_graph.number_of_blocked_edges(),
            previous_path.vertices
        );

        let Some(path) = shortest_path(&blocked_graph, source, target) else {
            debug!("round {}: no further path", paths.len());
            break;
        };

        if paths.contains(&path) {
            debug!("round {}: rediscovered {:?}", paths.len(), path.vertices);
            break;
        }

        paths.push(path);
    }

    Ok(KShortestPaths { paths })
}

/// Solves independent requests in parallel. Results keep the request order.
pub fn k_shortest_paths_batch<V: Vertex>(
    graph: &dyn Graph<V>,
    requests: &[ShortestPathRequest<V>],
    k: usize,
) -> Result<Vec<KShortestPaths<V>>, SearchError> {
    if k == 0 {
        return Err(SearchError::InvalidK(k));
    }

    requests
        .par_iter()
        .map(|request| k_shortest_paths(graph, &request.source, &request.target, k))
        .collect()
}
