//! Phase 2 tests: depth-first and breadth-first engines.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use traversal_replay::engine::{
    Algorithm, BreadthFirstEngine, DepthFirstEngine, Outcome, StepLog, Traversal, TraversalEngine,
};
use traversal_replay::graph::{AdjacencyGraph, GraphBuilder, GraphModel, SampleGraph};
use traversal_replay::types::{NodeId, StepKind, TraversalError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample() -> AdjacencyGraph {
    SampleGraph::Sample.build().unwrap()
}

fn single_node() -> AdjacencyGraph {
    let mut builder = GraphBuilder::new();
    builder.add_node("X");
    builder.build().unwrap()
}

/// Two components: a-b-c and x-y.
fn two_components() -> AdjacencyGraph {
    let mut builder = GraphBuilder::new();
    builder.add_nodes(&["a", "b", "c", "x", "y"]);
    builder.link("a", "b").link("b", "c").link("x", "y");
    builder.build().unwrap()
}

fn kinds(log: &StepLog) -> Vec<StepKind> {
    log.iter().map(|s| s.kind).collect()
}

// ==================== Depth-First Tests ====================

#[test]
fn test_dfs_sample_visit_order_to_target() {
    init_logging();
    let graph = sample();
    let log = DepthFirstEngine::new(&graph).run("A", Some("F"));

    assert_eq!(log.visit_order(), ["A", "B", "D", "E", "C", "F"]);
    assert_eq!(log.outcome(), Outcome::TargetFound);

    let last = log.terminal().unwrap();
    assert_eq!(last.kind, StepKind::Visit);
    assert_eq!(last.current_node.as_deref(), Some("F"));
    assert!(last.found_target);
    assert_eq!(log.len(), 11);
    assert_eq!(last.frontier, vec!["C", "E", "F"]);
}

#[test]
fn test_dfs_sample_full_step_sequence() {
    let graph = sample();
    let log = DepthFirstEngine::new(&graph).run("A", None);

    use StepKind::*;
    assert_eq!(
        kinds(&log),
        vec![
            Visit,
            FrontierUpdate,
            Visit,
            FrontierUpdate,
            Visit,
            FrontierUpdate,
            Visit,
            FrontierUpdate,
            Visit,
            FrontierUpdate,
            Visit,
            Complete,
        ]
    );

    // A pushes C then B, so B is on top.
    let first_push = log.get(1).unwrap();
    assert_eq!(first_push.added, vec!["C", "B"]);
    assert_eq!(first_push.frontier, vec!["C", "B"]);

    // B pushes E then D; A is already visited.
    assert_eq!(log.get(3).unwrap().frontier, vec!["C", "E", "D"]);

    // E leaves a stale E and C below the fresh pushes.
    assert_eq!(log.get(7).unwrap().frontier, vec!["C", "E", "F", "C"]);
}

#[test]
fn test_dfs_no_frontier_update_when_nothing_pushed() {
    let graph = sample();
    let log = DepthFirstEngine::new(&graph).run("A", None);

    // F is visited last with every neighbor already visited.
    let visit_f = log
        .iter()
        .find(|s| s.current_node.as_deref() == Some("F"))
        .unwrap();
    let next = log.get(visit_f.index + 1).unwrap();
    assert_eq!(next.kind, StepKind::Complete);
}

#[test]
fn test_dfs_stale_entries_are_skipped_silently() {
    let graph = sample();
    let log = DepthFirstEngine::new(&graph).run("A", None);

    let visits = log.iter().filter(|s| s.kind == StepKind::Visit).count();
    assert_eq!(visits, 6);
    let complete = log.terminal().unwrap();
    assert_eq!(complete.kind, StepKind::Complete);
    assert!(complete.frontier.is_empty());
    assert!(!complete.found_target);
}

#[test]
fn test_dfs_binary_tree_preorder() {
    let graph = SampleGraph::BinaryTree.build().unwrap();
    let log = DepthFirstEngine::new(&graph).run("1", None);
    assert_eq!(log.visit_order(), ["1", "2", "4", "5", "3", "6", "7"]);
}

#[test]
fn test_dfs_path_is_visit_trace() {
    let graph = sample();
    let log = DepthFirstEngine::new(&graph).run("A", None);

    assert_eq!(log.path_to("C").unwrap(), vec!["A", "B", "D", "E", "C"]);
    assert_eq!(log.path_to("A").unwrap(), vec!["A"]);
    assert_eq!(log.path_to("nope"), None);
    assert_eq!(log.shortest_path_to("C"), None);
    assert_eq!(log.distance_to("C"), None);
    assert!(log.tree_edges().is_empty());
}

#[test]
fn test_dfs_steps_carry_no_tree() {
    let graph = sample();
    let log = DepthFirstEngine::new(&graph).run("A", None);
    assert!(log.iter().all(|s| s.tree.is_none()));
}

// ==================== Breadth-First Tests ====================

#[test]
fn test_bfs_sample_visit_order_to_target() {
    init_logging();
    let graph = sample();
    let log = BreadthFirstEngine::new(&graph).run("A", Some("F"));

    assert_eq!(log.visit_order(), ["A", "B", "C", "D", "E", "F"]);
    assert_eq!(log.distance_to("F"), Some(2));
    assert_eq!(log.outcome(), Outcome::TargetFound);
    assert_eq!(log.len(), 9);

    let last = log.terminal().unwrap();
    assert_eq!(last.kind, StepKind::Visit);
    assert!(last.found_target);
    assert!(last.frontier.is_empty());
    assert!(last.message.contains("depth 2"));
}

#[test]
fn test_bfs_sample_full_step_sequence() {
    let graph = sample();
    let log = BreadthFirstEngine::new(&graph).run("A", None);

    use StepKind::*;
    assert_eq!(
        kinds(&log),
        vec![
            Visit,
            FrontierUpdate,
            Visit,
            FrontierUpdate,
            Visit,
            FrontierUpdate,
            Visit,
            Visit,
            Visit,
            Complete,
        ]
    );
    assert_eq!(log.get(1).unwrap().added, vec!["B", "C"]);
    assert_eq!(log.get(3).unwrap().frontier, vec!["C", "D", "E"]);
    assert_eq!(log.get(5).unwrap().added, vec!["F"]);
    assert_eq!(log.get(5).unwrap().frontier, vec!["D", "E", "F"]);
}

#[test]
fn test_bfs_search_tree_queries() {
    let graph = sample();
    let log = BreadthFirstEngine::new(&graph).run("A", None);

    assert_eq!(log.shortest_path_to("F").unwrap(), vec!["A", "C", "F"]);
    assert_eq!(log.shortest_path_to("E").unwrap(), vec!["A", "B", "E"]);
    assert_eq!(log.path_to("A").unwrap(), vec!["A"]);
    assert_eq!(log.distance_to("A"), Some(0));
    assert_eq!(log.distance_to("D"), Some(2));
    assert_eq!(log.distance_to("missing"), None);
    assert_eq!(log.nodes_at_depth(1), vec!["B", "C"]);
    assert_eq!(log.nodes_at_depth(2), vec!["D", "E", "F"]);
    assert!(log.nodes_at_depth(3).is_empty());
    assert_eq!(log.parent_of("F"), Some("C"));
    assert_eq!(log.parent_of("A"), None);

    let edges: BTreeSet<(NodeId, NodeId)> = log.tree_edges().into_iter().collect();
    let expected: BTreeSet<(NodeId, NodeId)> = [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("B", "E"),
        ("C", "F"),
    ]
    .iter()
    .map(|(p, c)| (p.to_string(), c.to_string()))
    .collect();
    assert_eq!(edges, expected);
}

#[test]
fn test_bfs_depth_invariants_on_every_step() {
    let graph = SampleGraph::Maze.build().unwrap();
    let log = BreadthFirstEngine::new(&graph).run("0_0", None);

    for step in &log {
        let tree = step.tree.as_ref().unwrap();
        assert_eq!(tree.depth_of("0_0"), Some(0));
        for (child, parent) in &tree.parent {
            if let Some(parent) = parent {
                assert_eq!(
                    tree.depth_of(child).unwrap(),
                    tree.depth_of(parent).unwrap() + 1
                );
                assert!(graph.contains_edge(parent, child));
            }
        }
    }
}

#[test]
fn test_bfs_maze_distance() {
    let graph = SampleGraph::Maze.build().unwrap();
    let log = BreadthFirstEngine::new(&graph).run("0_0", Some("3_3"));

    assert!(log.found_target());
    assert_eq!(log.distance_to("3_3"), Some(6));
    let path = log.shortest_path_to("3_3").unwrap();
    assert_eq!(path.len(), 7);
    assert_eq!(path.first().map(String::as_str), Some("0_0"));
    assert_eq!(path.last().map(String::as_str), Some("3_3"));
    for pair in path.windows(2) {
        assert!(graph.contains_edge(&pair[0], &pair[1]));
    }
}

#[test]
fn test_bfs_binary_tree_levels() {
    let graph = SampleGraph::BinaryTree.build().unwrap();
    let log = BreadthFirstEngine::new(&graph).run("1", None);
    assert_eq!(log.visit_order(), ["1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(log.nodes_at_depth(2), vec!["4", "5", "6", "7"]);
}

// ==================== Boundary Tests ====================

#[test]
fn test_missing_start_yields_single_error_step() {
    let graph = sample();
    for algorithm in [Algorithm::DepthFirst, Algorithm::BreadthFirst] {
        let log = Traversal::new(algorithm, &graph).run("Z", Some("A"));
        assert_eq!(log.len(), 1);

        let step = log.get(0).unwrap();
        assert_eq!(step.kind, StepKind::Error);
        assert!(step.visited.is_empty());
        assert!(step.message.contains("'Z'"));
        assert_eq!(log.outcome(), Outcome::StartNodeNotFound);

        match log.error() {
            Some(TraversalError::StartNodeNotFound(id)) => assert_eq!(id, "Z"),
            other => panic!("Expected StartNodeNotFound, got {:?}", other),
        }
        assert!(log.clone().into_result().is_err());
    }
}

#[test]
fn test_single_node_graph_yields_visit_and_complete() {
    let graph = single_node();
    for algorithm in [Algorithm::DepthFirst, Algorithm::BreadthFirst] {
        let log = Traversal::new(algorithm, &graph).run("X", None);
        assert_eq!(kinds(&log), vec![StepKind::Visit, StepKind::Complete]);
        assert_eq!(log.terminal().unwrap().visited.len(), 1);
        assert!(log.error().is_none());
    }
}

#[test]
fn test_empty_graph_yields_single_complete_step() {
    let graph = AdjacencyGraph::new();
    for algorithm in [Algorithm::DepthFirst, Algorithm::BreadthFirst] {
        let log = Traversal::new(algorithm, &graph).run("A", None);
        assert_eq!(kinds(&log), vec![StepKind::Complete]);
        assert!(log.visit_order().is_empty());
        assert_eq!(log.outcome(), Outcome::Exhausted);
    }
}

#[test]
fn test_target_equal_to_start() {
    let graph = sample();
    for algorithm in [Algorithm::DepthFirst, Algorithm::BreadthFirst] {
        let log = Traversal::new(algorithm, &graph).run("C", Some("C"));
        assert_eq!(log.len(), 1);
        assert!(log.get(0).unwrap().found_target);
        assert_eq!(log.visit_order(), ["C"]);
    }
}

#[test]
fn test_unreachable_target_completes_without_finding() {
    let graph = two_components();
    for algorithm in [Algorithm::DepthFirst, Algorithm::BreadthFirst] {
        let log = Traversal::new(algorithm, &graph).run("a", Some("y"));
        let last = log.terminal().unwrap();
        assert_eq!(last.kind, StepKind::Complete);
        assert!(!last.found_target);
        assert!(!log.found_target());
        assert_eq!(log.outcome(), Outcome::Exhausted);
        assert_eq!(log.visit_order(), ["a", "b", "c"]);
        assert!(log.iter().all(|s| !s.found_target));
    }
}

#[test]
fn test_target_not_in_graph_visits_everything() {
    let graph = sample();
    let log = BreadthFirstEngine::new(&graph).run("A", Some("nowhere"));
    assert_eq!(log.visit_order().len(), 6);
    assert_eq!(log.terminal().unwrap().kind, StepKind::Complete);
    assert!(!log.found_target());
}

// ==================== Engine Lifecycle Tests ====================

#[test]
fn test_runs_do_not_leak_state() {
    let graph = sample();
    let engine = DepthFirstEngine::new(&graph);

    let first = engine.run("A", None);
    let second = engine.run("F", Some("B"));
    let fresh = DepthFirstEngine::new(&graph).run("F", Some("B"));
    assert_eq!(second, fresh);

    let again = engine.run("A", None);
    assert_eq!(first, again);
}

#[test]
fn test_traversal_dispatch_matches_engines() {
    let graph = sample();
    let dfs = Traversal::new(Algorithm::DepthFirst, &graph);
    let bfs = Traversal::new(Algorithm::BreadthFirst, &graph);

    assert_eq!(dfs.algorithm(), Algorithm::DepthFirst);
    assert_eq!(bfs.algorithm(), Algorithm::BreadthFirst);
    assert_eq!(
        dfs.run("A", None),
        DepthFirstEngine::new(&graph).run("A", None)
    );
    assert_eq!(
        bfs.run("A", None),
        BreadthFirstEngine::new(&graph).run("A", None)
    );
}

#[test]
fn test_engines_as_trait_objects() {
    let graph = sample();
    let dfs = DepthFirstEngine::new(&graph);
    let bfs = BreadthFirstEngine::new(&graph);
    let engines: Vec<&dyn TraversalEngine> = vec![&dfs, &bfs];

    for engine in engines {
        let log = engine.run("A", None);
        assert_eq!(log.algorithm(), engine.algorithm());
        assert_eq!(log.visit_order().len(), 6);
    }
}

#[test]
fn test_algorithm_names() {
    assert_eq!(Algorithm::from_name("dfs"), Some(Algorithm::DepthFirst));
    assert_eq!(Algorithm::from_name("BFS"), Some(Algorithm::BreadthFirst));
    assert_eq!(
        Algorithm::from_name("breadth_first"),
        Some(Algorithm::BreadthFirst)
    );
    assert_eq!(Algorithm::from_name("dijkstra"), None);
    assert!(matches!(
        Algorithm::parse("dijkstra"),
        Err(TraversalError::UnknownAlgorithm(_))
    ));
    assert_eq!(Algorithm::DepthFirst.frontier_name(), "stack");
    assert_eq!(Algorithm::BreadthFirst.frontier_name(), "queue");
}

// ==================== Randomized Property Tests ====================

fn random_graph(rng: &mut StdRng, nodes: usize, edge_probability: f64) -> AdjacencyGraph {
    let ids: Vec<String> = (0..nodes).map(|i| format!("n{:02}", i)).collect();
    let mut graph = AdjacencyGraph::new();
    for id in &ids {
        graph.add_node(id);
    }
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            if rng.gen_bool(edge_probability) {
                graph.add_edge(&ids[i], &ids[j]).unwrap();
            }
        }
    }
    graph
}

fn reference_distances(graph: &AdjacencyGraph, start: &str) -> HashMap<String, u32> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert(start.to_string(), 0);
    queue.push_back(start.to_string());
    while let Some(node) = queue.pop_front() {
        let d = distances[&node];
        for neighbor in graph.neighbors(&node) {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor.clone(), d + 1);
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

fn reference_preorder(
    graph: &AdjacencyGraph,
    node: &str,
    seen: &mut HashSet<String>,
    out: &mut Vec<String>,
) {
    seen.insert(node.to_string());
    out.push(node.to_string());
    for neighbor in graph.neighbors(node) {
        if !seen.contains(&neighbor) {
            reference_preorder(graph, &neighbor, seen, out);
        }
    }
}

fn component_of(graph: &AdjacencyGraph, node: &str) -> BTreeSet<String> {
    graph
        .connected_components()
        .into_iter()
        .find(|c| c.iter().any(|n| n == node))
        .map(|c| c.into_iter().collect())
        .unwrap_or_default()
}

fn assert_log_invariants(log: &StepLog) {
    let mut previous_visited = 0;
    for (i, step) in log.iter().enumerate() {
        assert_eq!(step.index, i);
        assert!(step.visited.len() >= previous_visited);
        previous_visited = step.visited.len();

        let order_set: BTreeSet<String> = step.visit_order.iter().cloned().collect();
        assert_eq!(order_set.len(), step.visit_order.len(), "duplicate visit");
        assert_eq!(order_set, step.visited);

        assert_eq!(step.current_node.is_some(), step.kind == StepKind::Visit);
        assert_eq!(step.is_terminal(), i == log.len() - 1);
    }
}

#[test]
fn test_random_graphs_full_runs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..40 {
        let nodes = rng.gen_range(1..25);
        let graph = random_graph(&mut rng, nodes, 0.15);
        let start = format!("n{:02}", rng.gen_range(0..nodes));
        let component = component_of(&graph, &start);

        let dfs = DepthFirstEngine::new(&graph).run(&start, None);
        let bfs = BreadthFirstEngine::new(&graph).run(&start, None);
        assert_log_invariants(&dfs);
        assert_log_invariants(&bfs);

        // Both searches cover exactly the start's component.
        assert_eq!(dfs.terminal().unwrap().visited, component, "round {}", round);
        assert_eq!(bfs.terminal().unwrap().visited, component, "round {}", round);

        // DFS matches a recursive preorder with ascending neighbors.
        let mut seen = HashSet::new();
        let mut expected = Vec::new();
        reference_preorder(&graph, &start, &mut seen, &mut expected);
        assert_eq!(dfs.visit_order(), expected.as_slice(), "round {}", round);

        // BFS depth is graph distance, and visits never go back up a level.
        let distances = reference_distances(&graph, &start);
        for node in bfs.visit_order() {
            assert_eq!(bfs.distance_to(node), distances.get(node).copied());
            let path = bfs.shortest_path_to(node).unwrap();
            assert_eq!(path.len() as u32, distances[node] + 1);
        }
        let depths: Vec<u32> = bfs
            .visit_order()
            .iter()
            .filter_map(|n| bfs.distance_to(n))
            .collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_random_graphs_targeted_runs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..40 {
        let nodes = rng.gen_range(2..20);
        let graph = random_graph(&mut rng, nodes, 0.2);
        let start = format!("n{:02}", rng.gen_range(0..nodes));
        let target = format!("n{:02}", rng.gen_range(0..nodes));
        let reachable = component_of(&graph, &start).contains(&target);

        for algorithm in [Algorithm::DepthFirst, Algorithm::BreadthFirst] {
            let log = Traversal::new(algorithm, &graph).run(&start, Some(&target));
            assert_log_invariants(&log);

            let found: Vec<usize> = log
                .iter()
                .filter(|s| s.found_target)
                .map(|s| s.index)
                .collect();
            let last = log.terminal().unwrap();
            if reachable {
                assert_eq!(found, vec![log.len() - 1]);
                assert_eq!(last.kind, StepKind::Visit);
                assert_eq!(last.current_node.as_deref(), Some(target.as_str()));
            } else {
                assert!(found.is_empty());
                assert_eq!(last.kind, StepKind::Complete);
            }
        }
    }
}
