use std::{error::Error, path::PathBuf};

use clap::{Parser, Subcommand};
use flexi_logger::Logger;
use indicatif::ProgressIterator;
use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use route_paths::{
    graphs::{
        graph_factory::GraphFactory,
        graph_functions::{random_request, validate_path},
    },
    search::{
        dijkstra::Dijkstra,
        k_shortest_paths::{k_shortest_paths, k_shortest_paths_batch},
        uninformed::{search, Strategy},
        PathFinding,
    },
    utility::get_progressbar,
};
use serde::Serialize;

/// Shortest, k shortest and uninformed paths on a JSON adjacency graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file, an array of {"vertex", "edges": [{"head", "weight"}]} entries
    #[arg(short, long)]
    graph: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Single shortest path (Dijkstra)
    Shortest {
        #[arg(short, long)]
        source: String,
        #[arg(short, long)]
        target: String,
    },
    /// Up to k distinct loopless paths
    KShortest {
        #[arg(short, long)]
        source: String,
        #[arg(short, long)]
        target: String,
        #[arg(short, default_value = "3")]
        k: usize,
    },
    /// Breadth first, depth first or uniform cost search. Without a target,
    /// searches for a path visiting every vertex.
    Search {
        #[arg(short, long)]
        source: String,
        #[arg(short, long)]
        target: Option<String>,
        #[arg(long, value_enum, default_value = "bfs")]
        strategy: Strategy,
    },
    /// Solves random requests in parallel and validates every path found
    Batch {
        #[arg(short, default_value = "3")]
        k: usize,
        #[arg(short, long, default_value = "1000")]
        requests: u32,
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

#[derive(Serialize)]
struct BatchSummary {
    requests: usize,
    k: usize,
    without_path: usize,
    paths_found: usize,
    invalid_paths: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;
    let args = Args::parse();

    let graph = GraphFactory::from_json_file(&args.graph)?;

    match args.command {
        Command::Shortest { source, target } => {
            let dijkstra = Dijkstra { graph: &graph };
            let path = dijkstra.shortest_path(&source, &target);
            println!("{}", serde_json::to_string_pretty(&path)?);
        }
        Command::KShortest { source, target, k } => {
            let paths = k_shortest_paths(&graph, &source, &target, k)?;
            info!("found {} of {} requested paths", paths.found(), k);
            println!("{}", serde_json::to_string_pretty(&paths)?);
        }
        Command::Search {
            source,
            target,
            strategy,
        } => {
            let result = search(&graph, &source, target.as_ref(), strategy);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Batch { k, requests, seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let requests: Vec<_> = (0..requests)
                .filter_map(|_| random_request(&graph, &mut rng))
                .collect();

            info!("solving {} requests with k = {}", requests.len(), k);
            let results = k_shortest_paths_batch(&graph, &requests, k)?;

            let dijkstra = Dijkstra { graph: &graph };
            let mut summary = BatchSummary {
                requests: requests.len(),
                k,
                without_path: 0,
                paths_found: 0,
                invalid_paths: 0,
            };

            let bar = get_progressbar("Validating", requests.len() as u64);
            for (request, result) in requests.iter().zip(results.iter()).progress_with(bar) {
                summary.paths_found += result.found();
                if result.is_empty() {
                    summary.without_path += 1;
                }

                let expected_weight = dijkstra.shortest_path_weight(&request.source, &request.target);
                if result.shortest().map(|path| path.weight) != expected_weight {
                    warn!("first path of {:?} is not a shortest path", request);
                    summary.invalid_paths += 1;
                }

                for path in result.paths.iter() {
                    if let Err(err) = validate_path(&graph, request, path) {
                        warn!("invalid path {:?}: {}", path.vertices, err);
                        summary.invalid_paths += 1;
                    }
                }
            }

            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
