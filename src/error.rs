use thiserror::Error;

/// Malformed calls into the search API. Unreachable targets and unknown
/// vertices are not errors, they come back as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("unknown search strategy '{0}', expected one of bfs, dfs, ucs")]
    InvalidStrategy(String),
    #[error("number of requested paths must be positive, got {0}")]
    InvalidK(usize),
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("unable to read graph file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse graph file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathValidationError {
    #[error("path is empty")]
    Empty,
    #[error("first vertex of path is not the source of the request")]
    WrongSource,
    #[error("last vertex of path is not the target of the request")]
    WrongTarget,
    #[error("path visits a vertex twice")]
    Loop,
    #[error("path uses the edge {0} which is not part of the graph")]
    MissingEdge(String),
    #[error("path weight does not fit into a u32")]
    WeightOverflow,
    #[error("wrong path weight: expected {expected}, got {actual}")]
    WrongWeight { expected: u32, actual: u32 },
}
