//! CLI command implementations.

use std::path::Path;
use std::time::Duration;

use crate::engine::{check_connectivity, Algorithm, StepLog, Traversal, TraversalEngine};
use crate::format::JsonExporter;
use crate::graph::{AdjacencyGraph, GraphModel, SampleGraph};
use crate::types::{Step, StepKind, TraversalResult};

/// Load a sample graph by name.
pub fn load_graph(sample: &str) -> TraversalResult<AdjacencyGraph> {
    SampleGraph::parse(sample)?.build()
}

/// Resolve the start node: explicit, else the sample's default, else the
/// first node of the graph.
fn resolve_start(sample: &str, graph: &AdjacencyGraph, start: Option<&str>) -> String {
    if let Some(start) = start {
        return start.to_string();
    }
    SampleGraph::from_name(sample)
        .and_then(|s| s.default_endpoints())
        .map(|(s, _)| s.to_string())
        .or_else(|| graph.node_ids().into_iter().next())
        .unwrap_or_default()
}

fn run_traversal(
    sample: &str,
    algorithm: Algorithm,
    start: Option<&str>,
    target: Option<&str>,
) -> TraversalResult<(AdjacencyGraph, StepLog)> {
    let graph = load_graph(sample)?;
    let start = resolve_start(sample, &graph, start);
    let log = Traversal::new(algorithm, &graph).run(&start, target);
    Ok((graph, log))
}

fn step_json(step: &Step) -> serde_json::Value {
    serde_json::to_value(step).unwrap_or_default()
}

fn print_step(step: &Step, algorithm: Algorithm) {
    let current = step.current_node.as_deref().unwrap_or("-");
    println!(
        "[{:>3}] {:<15} current={:<4} {}=[{}] visited={}",
        step.index,
        step.kind.name(),
        current,
        algorithm.frontier_name(),
        step.frontier.join(", "),
        step.visited.len()
    );
    println!("      {}", step.message);
    if step.found_target {
        println!("      Target found!");
    }
}

/// List the built-in sample graphs.
pub fn cmd_samples(json: bool) -> TraversalResult<()> {
    let mut rows = Vec::new();
    for sample in SampleGraph::ALL {
        let graph = sample.build()?;
        let adjacency: Vec<(String, Vec<String>)> = graph
            .iter()
            .map(|(id, neighbors)| (id.to_string(), neighbors.iter().cloned().collect()))
            .collect();
        rows.push((sample, graph.summary(), adjacency));
    }

    if json {
        let info: Vec<serde_json::Value> = rows
            .iter()
            .map(|(sample, summary, adjacency)| {
                let nodes: Vec<&String> = adjacency.iter().map(|(id, _)| id).collect();
                let neighbors: serde_json::Map<String, serde_json::Value> = adjacency
                    .iter()
                    .map(|(id, list)| (id.clone(), serde_json::json!(list)))
                    .collect();
                serde_json::json!({
                    "name": sample.name(),
                    "nodes": nodes,
                    "adjacency": neighbors,
                    "summary": summary,
                    "default_endpoints": sample.default_endpoints(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        for (sample, summary, adjacency) in &rows {
            println!(
                "{:<8} {} nodes, {} edges, {} components, max degree {}",
                sample.name(),
                summary.nodes,
                summary.edges,
                summary.components,
                summary.max_degree
            );
            for (id, neighbors) in adjacency {
                println!("         {}: {}", id, neighbors.join(", "));
            }
        }
    }
    Ok(())
}

/// Run a traversal and print every step.
pub fn cmd_run(
    sample: &str,
    algorithm: Algorithm,
    start: Option<&str>,
    target: Option<&str>,
    output: Option<&Path>,
    json: bool,
) -> TraversalResult<()> {
    let (_, log) = run_traversal(sample, algorithm, start, target)?;

    if let Some(path) = output {
        JsonExporter::new(true).write_to_file(&log, path)?;
    }

    if json {
        println!("{}", JsonExporter::new(true).to_string(&log)?);
    } else {
        println!(
            "{} from '{}'{} on '{}': {} steps",
            algorithm.label(),
            log.start(),
            log.target()
                .map(|t| format!(" to '{}'", t))
                .unwrap_or_default(),
            sample,
            log.len()
        );
        for step in &log {
            print_step(step, algorithm);
        }
        if let Some(path) = output {
            println!("Step log written to {}", path.display());
        }
    }

    log.into_result().map(|_| ())
}

/// Show a single step of a traversal.
pub fn cmd_step(
    sample: &str,
    algorithm: Algorithm,
    start: Option<&str>,
    target: Option<&str>,
    index: usize,
    json: bool,
) -> TraversalResult<()> {
    let (_, log) = run_traversal(sample, algorithm, start, target)?;
    let step = log.step(index)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&step_json(step)).unwrap_or_default()
        );
    } else {
        print_step(step, algorithm);
        println!("      visit order: {}", step.visit_order.join(" -> "));
        if let Some(tree) = &step.tree {
            let depths: Vec<String> = tree
                .depth
                .iter()
                .map(|(node, depth)| format!("{}:{}", node, depth))
                .collect();
            println!("      depths: {}", depths.join(", "));
        }
    }
    Ok(())
}

/// Print statistics of a traversal.
pub fn cmd_stats(
    sample: &str,
    algorithm: Algorithm,
    start: Option<&str>,
    target: Option<&str>,
    json: bool,
) -> TraversalResult<()> {
    let (_, log) = run_traversal(sample, algorithm, start, target)?;
    let log = log.into_result()?;
    let stats = log.statistics();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("Traversal Statistics:");
        println!("  Algorithm: {}", stats.algorithm.label());
        println!("  Total nodes: {}", stats.total_nodes);
        println!("  Visited nodes: {}", stats.visited_nodes);
        println!("  Unvisited nodes: {}", stats.unvisited_nodes);
        println!("  Completion rate: {:.1}%", stats.completion_rate);
        println!("  Total steps: {}", stats.total_steps);
        println!("  Visit order: {}", stats.visit_order.join(" -> "));
        if let Some(max_depth) = stats.max_depth {
            println!("  Max depth: {}", max_depth);
        }
        if let Some(counts) = &stats.depth_counts {
            println!("  Nodes per depth:");
            for (depth, count) in counts {
                println!("    {}: {}", depth, count);
            }
        }
    }
    Ok(())
}

/// Print the path from the start to `node`.
pub fn cmd_path(
    sample: &str,
    algorithm: Algorithm,
    start: Option<&str>,
    node: &str,
    json: bool,
) -> TraversalResult<()> {
    let (_, log) = run_traversal(sample, algorithm, start, None)?;
    let log = log.into_result()?;
    let path = log.path_to(node);
    let distance = log.distance_to(node);

    if json {
        let info = serde_json::json!({
            "algorithm": algorithm.name(),
            "start": log.start(),
            "node": node,
            "path": path,
            "distance": distance,
            "visit_time": log.visit_time_of(node),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        match path {
            Some(path) => {
                let kind = match algorithm {
                    Algorithm::BreadthFirst => "Shortest path",
                    Algorithm::DepthFirst => "Visit trace",
                };
                println!("{}: {}", kind, path.join(" -> "));
                if let Some(distance) = distance {
                    println!("Distance: {}", distance);
                }
            }
            None => println!("Node '{}' is not reachable from '{}'", node, log.start()),
        }
    }
    Ok(())
}

/// Report reachability between two nodes.
pub fn cmd_connect(sample: &str, start: &str, target: &str, json: bool) -> TraversalResult<()> {
    let graph = load_graph(sample)?;
    let report = check_connectivity(&graph, start, target)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("Graph connected: {}", report.connected);
        println!("Components: {}", report.component_count);
        println!("Largest component: {} nodes", report.largest_component);
        match (&report.shortest_path, report.distance) {
            (Some(path), Some(distance)) => {
                println!("Shortest path: {}", path.join(" -> "));
                println!("Distance: {}", distance);
            }
            _ => println!("No path from '{}' to '{}'", start, target),
        }
    }
    Ok(())
}

/// Play a traversal back step by step with a delay between frames.
pub fn cmd_play(
    sample: &str,
    algorithm: Algorithm,
    start: Option<&str>,
    target: Option<&str>,
    interval_ms: u64,
) -> TraversalResult<()> {
    let (_, log) = run_traversal(sample, algorithm, start, target)?;
    let log = log.into_result()?;

    let mut playback = log.playback();
    playback.set_interval(Duration::from_millis(interval_ms));
    playback.play();
    while let Some(step) = playback.tick() {
        print_step(step, algorithm);
        if step.kind != StepKind::Complete && !step.found_target {
            std::thread::sleep(playback.interval());
        }
    }
    Ok(())
}
