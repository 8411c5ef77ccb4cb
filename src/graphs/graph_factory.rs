use std::{fs::File, io::BufReader, path::Path};

use log::info;

use super::{
    adjacency_graph::{AdjacencyEntry, AdjacencyGraph},
    Graph,
};
use crate::error::GraphError;

/// Reads graphs whose vertices are named by strings.
///
/// The JSON format is an array of adjacency entries:
/// `[{"vertex": "A", "edges": [{"head": "B", "weight": 510}]}]`.
#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_json_file(path: &Path) -> Result<AdjacencyGraph<String>, GraphError> {
        let reader = BufReader::new(File::open(path)?);
        let entries: Vec<AdjacencyEntry<String>> = serde_json::from_reader(reader)?;
        let graph = AdjacencyGraph::from_entries(entries);

        info!(
            "read graph with {} vertices and {} edges from {}",
            graph.number_of_vertices(),
            graph.number_of_edges(),
            path.display()
        );
        Ok(graph)
    }

    pub fn from_json_str(json: &str) -> Result<AdjacencyGraph<String>, GraphError> {
        let entries: Vec<AdjacencyEntry<String>> = serde_json::from_str(json)?;
        Ok(AdjacencyGraph::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::GraphFactory;
    use crate::{error::GraphError, graphs::Graph};

    #[test]
    fn parse_adjacency_entries() {
        let json = r#"[
            {"vertex": "A", "edges": [{"head": "B", "weight": 510}, {"head": "H", "weight": 275}]},
            {"vertex": "B", "edges": [{"head": "A", "weight": 510}]},
            {"vertex": "H", "edges": []}
        ]"#;

        let graph = GraphFactory::from_json_str(json).unwrap();
        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn negative_weights_do_not_parse() {
        let json = r#"[{"vertex": "A", "edges": [{"head": "B", "weight": -1}]}]"#;

        assert!(matches!(
            GraphFactory::from_json_str(json),
            Err(GraphError::Json(_))
        ));
    }
}
