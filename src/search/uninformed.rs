use std::{fmt, str::FromStr};

use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::collections::frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
use crate::{
    error::SearchError,
    graphs::{Graph, Vertex, Weight},
};

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Breadth first, fewest edges.
    Bfs,
    /// Depth first, last listed neighbor first.
    Dfs,
    /// Uniform cost, lowest weight.
    Ucs,
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "ucs" => Ok(Strategy::Ucs),
            _ => Err(SearchError::InvalidStrategy(name.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Ucs => "ucs",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of an uninformed search.
///
/// `score` is the number of edges for breadth and depth first searches to a
/// target, and the cumulative weight for uniform cost search and for
/// traversals of all vertices.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult<V> {
    pub vertices: Vec<V>,
    pub score: Weight,
}

/// Searches from `source` to `target`, or, without a target, for a search
/// path that covers every vertex of the graph.
pub fn search<V: Vertex>(
    graph: &dyn Graph<V>,
    source: &V,
    target: Option<&V>,
    strategy: Strategy,
) -> Option<SearchResult<V>> {
    match (target, strategy) {
        (Some(target), Strategy::Bfs) => {
            unweighted_search(graph, source, target, QueueFrontier::new())
        }
        (Some(target), Strategy::Dfs) => {
            unweighted_search(graph, source, target, StackFrontier::new())
        }
        (Some(target), Strategy::Ucs) => uniform_cost_search(graph, source, target),
        (None, strategy) => visit_all(graph, source, strategy),
    }
}

/// Like [`search`], with the strategy given by name.
pub fn search_by_name<V: Vertex>(
    graph: &dyn Graph<V>,
    source: &V,
    target: Option<&V>,
    strategy: &str,
) -> Result<Option<SearchResult<V>>, SearchError> {
    let strategy: Strategy = strategy.parse()?;
    Ok(search(graph, source, target, strategy))
}

/// Explores every vertex reachable from `source` in the order of `strategy`
/// and returns the first search path that contains all vertices of the
/// graph, together with its weight. `None` if the frontier runs dry before.
pub fn visit_all<V: Vertex>(
    graph: &dyn Graph<V>,
    source: &V,
    strategy: Strategy,
) -> Option<SearchResult<V>> {
    match strategy {
        Strategy::Bfs => visit_all_with(graph, source, QueueFrontier::new()),
        Strategy::Dfs => visit_all_with(graph, source, StackFrontier::new()),
        Strategy::Ucs => visit_all_with(graph, source, PriorityFrontier::new()),
    }
}

fn unweighted_search<V: Vertex, F: Frontier<V>>(
    graph: &dyn Graph<V>,
    source: &V,
    target: &V,
    mut frontier: F,
) -> Option<SearchResult<V>> {
    if !graph.contains_vertex(source) {
        return None;
    }

    // a vertex is visited once it has an entry
    let mut parents: HashMap<V, Option<V>> = HashMap::new();
    parents.insert(source.clone(), None);
    frontier.push(source.clone(), 0);

    while let Some(vertex) = frontier.pop() {
        if &vertex == target {
            let vertices = trace_back(&parents, target);
            let score = (vertices.len() - 1) as Weight;
            return Some(SearchResult { vertices, score });
        }

        for edge in graph.out_edges(&vertex) {
            if !parents.contains_key(edge.head()) {
                parents.insert(edge.head().clone(), Some(vertex.clone()));
                frontier.push(edge.head().clone(), 0);
            }
        }
    }

    None
}

fn uniform_cost_search<V: Vertex>(
    graph: &dyn Graph<V>,
    source: &V,
    target: &V,
) -> Option<SearchResult<V>> {
    if !graph.contains_vertex(source) {
        return None;
    }

    let mut parents: HashMap<V, Option<V>> = HashMap::new();
    let mut costs: HashMap<V, Weight> = HashMap::new();
    let mut frontier = PriorityFrontier::new();

    parents.insert(source.clone(), None);
    costs.insert(source.clone(), 0);
    frontier.push((source.clone(), 0), 0);

    while let Some((vertex, cost)) = frontier.pop() {
        // a cheaper route to this vertex was queued after this entry
        if costs.get(&vertex).is_some_and(|&best| cost > best) {
            continue;
        }

        if &vertex == target {
            let vertices = trace_back(&parents, target);
            return Some(SearchResult {
                vertices,
                score: cost,
            });
        }

        for edge in graph.out_edges(&vertex) {
            let Some(new_cost) = cost.checked_add(edge.weight()) else {
                continue;
            };
            if costs.get(edge.head()).map_or(true, |&best| new_cost < best) {
                costs.insert(edge.head().clone(), new_cost);
                parents.insert(edge.head().clone(), Some(vertex.clone()));
                frontier.push((edge.head().clone(), new_cost), new_cost);
            }
        }
    }

    None
}

fn visit_all_with<V: Vertex, F: Frontier<(V, Vec<V>, Weight)>>(
    graph: &dyn Graph<V>,
    source: &V,
    mut frontier: F,
) -> Option<SearchResult<V>> {
    if !graph.contains_vertex(source) {
        return None;
    }

    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut visited = HashSet::new();
    visited.insert(source.clone());
    frontier.push((source.clone(), vec![source.clone()], 0), 0);

    while let Some((vertex, path, cost)) = frontier.pop() {
        if path.len() == number_of_vertices {
            return Some(SearchResult {
                vertices: path,
                score: cost,
            });
        }

        for edge in graph.out_edges(&vertex) {
            let Some(next_cost) = cost.checked_add(edge.weight()) else {
                continue;
            };
            if visited.insert(edge.head().clone()) {
                let mut next_path = path.clone();
                next_path.push(edge.head().clone());
                frontier.push((edge.head().clone(), next_path, next_cost), next_cost);
            }
        }
    }

    None
}

fn trace_back<V: Vertex>(parents: &HashMap<V, Option<V>>, target: &V) -> Vec<V> {
    let mut vertices = vec![target.clone()];

    let mut current = target;
    while let Some(Some(parent)) = parents.get(current) {
        vertices.push(parent.clone());
        current = parent;
    }
    vertices.reverse();

    vertices
}
