//! CLI entry point for the `trav` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use traversal_replay::cli::commands;
use traversal_replay::engine::Algorithm;
use traversal_replay::types::DEFAULT_SAMPLE;
use traversal_replay::TraversalError;

#[derive(Parser)]
#[command(
    name = "trav",
    about = "Replayable depth-first and breadth-first graph search"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in sample graphs
    Samples,
    /// Run a traversal and print every step
    Run {
        /// Algorithm: dfs or bfs
        #[arg(long, short, default_value = "dfs")]
        algorithm: String,
        /// Sample graph: sample, tree, maze, empty
        #[arg(long, short, default_value = DEFAULT_SAMPLE)]
        graph: String,
        /// Start node (defaults to the sample's usual start)
        #[arg(long, short)]
        start: Option<String>,
        /// Stop when this node is visited
        #[arg(long, short)]
        target: Option<String>,
        /// Also write the step log as JSON to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show a single step of a traversal
    Step {
        /// Algorithm: dfs or bfs
        #[arg(long, short, default_value = "dfs")]
        algorithm: String,
        /// Sample graph
        #[arg(long, short, default_value = DEFAULT_SAMPLE)]
        graph: String,
        /// Start node
        #[arg(long, short)]
        start: Option<String>,
        /// Target node
        #[arg(long, short)]
        target: Option<String>,
        /// Step index (0-based)
        index: usize,
    },
    /// Statistics of a traversal
    Stats {
        /// Algorithm: dfs or bfs
        #[arg(long, short, default_value = "dfs")]
        algorithm: String,
        /// Sample graph
        #[arg(long, short, default_value = DEFAULT_SAMPLE)]
        graph: String,
        /// Start node
        #[arg(long, short)]
        start: Option<String>,
        /// Target node
        #[arg(long, short)]
        target: Option<String>,
    },
    /// Path from the start to a node (shortest for bfs, visit trace for dfs)
    Path {
        /// Algorithm: dfs or bfs
        #[arg(long, short, default_value = "bfs")]
        algorithm: String,
        /// Sample graph
        #[arg(long, short, default_value = DEFAULT_SAMPLE)]
        graph: String,
        /// Start node
        #[arg(long, short)]
        start: Option<String>,
        /// Destination node
        node: String,
    },
    /// Check whether two nodes are connected
    Connect {
        /// Sample graph
        #[arg(long, short, default_value = DEFAULT_SAMPLE)]
        graph: String,
        /// First node
        start: String,
        /// Second node
        target: String,
    },
    /// Animate a traversal in the terminal
    Play {
        /// Algorithm: dfs or bfs
        #[arg(long, short, default_value = "dfs")]
        algorithm: String,
        /// Sample graph
        #[arg(long, short, default_value = DEFAULT_SAMPLE)]
        graph: String,
        /// Start node
        #[arg(long, short)]
        start: Option<String>,
        /// Target node
        #[arg(long, short)]
        target: Option<String>,
        /// Delay between steps in milliseconds (100-3000)
        #[arg(long, default_value = "1000")]
        interval: u64,
    },
}

fn parse_algorithm(name: &str) -> Algorithm {
    match Algorithm::from_name(name) {
        Some(algorithm) => algorithm,
        None => {
            eprintln!("Invalid algorithm: {}", name);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Samples => commands::cmd_samples(json),
        Commands::Run {
            algorithm,
            graph,
            start,
            target,
            output,
        } => commands::cmd_run(
            &graph,
            parse_algorithm(&algorithm),
            start.as_deref(),
            target.as_deref(),
            output.as_deref(),
            json,
        ),
        Commands::Step {
            algorithm,
            graph,
            start,
            target,
            index,
        } => commands::cmd_step(
            &graph,
            parse_algorithm(&algorithm),
            start.as_deref(),
            target.as_deref(),
            index,
            json,
        ),
        Commands::Stats {
            algorithm,
            graph,
            start,
            target,
        } => commands::cmd_stats(
            &graph,
            parse_algorithm(&algorithm),
            start.as_deref(),
            target.as_deref(),
            json,
        ),
        Commands::Path {
            algorithm,
            graph,
            start,
            node,
        } => commands::cmd_path(
            &graph,
            parse_algorithm(&algorithm),
            start.as_deref(),
            &node,
            json,
        ),
        Commands::Connect {
            graph,
            start,
            target,
        } => commands::cmd_connect(&graph, &start, &target, json),
        Commands::Play {
            algorithm,
            graph,
            start,
            target,
            interval,
        } => commands::cmd_play(
            &graph,
            parse_algorithm(&algorithm),
            start.as_deref(),
            target.as_deref(),
            interval,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            TraversalError::Io(_) => 1,
            TraversalError::UnknownAlgorithm(_)
            | TraversalError::UnknownSample(_)
            | TraversalError::StepOutOfRange { .. } => 3,
            TraversalError::StartNodeNotFound(_) | TraversalError::NodeNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
