//! Built-in sample graphs.

use crate::types::{TraversalError, TraversalResult};

use super::{AdjacencyGraph, GraphBuilder};

/// The sample graphs shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleGraph {
    /// Six nodes A-F, eight edges, one cycle-rich component.
    Sample,
    /// Complete binary tree with nodes 1-7.
    BinaryTree,
    /// 4x4 grid maze with nodes `row_col`, fully connected.
    Maze,
    /// No nodes at all.
    Empty,
}

impl SampleGraph {
    /// Every sample, in listing order.
    pub const ALL: [SampleGraph; 4] = [
        SampleGraph::Sample,
        SampleGraph::BinaryTree,
        SampleGraph::Maze,
        SampleGraph::Empty,
    ];

    /// Return the name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::BinaryTree => "tree",
            Self::Maze => "maze",
            Self::Empty => "empty",
        }
    }

    /// Parse a sample from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "sample" | "graph" => Some(Self::Sample),
            "tree" | "binary_tree" => Some(Self::BinaryTree),
            "maze" => Some(Self::Maze),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    /// Parse a sample name, failing with `UnknownSample`.
    pub fn parse(name: &str) -> TraversalResult<Self> {
        Self::from_name(name).ok_or_else(|| TraversalError::UnknownSample(name.to_string()))
    }

    /// Suggested (start, target) pair for demos.
    pub fn default_endpoints(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Sample => Some(("A", "F")),
            Self::BinaryTree => Some(("1", "7")),
            Self::Maze => Some(("0_0", "3_3")),
            Self::Empty => None,
        }
    }

    /// Build the graph.
    pub fn build(&self) -> TraversalResult<AdjacencyGraph> {
        let mut builder = GraphBuilder::new();
        match self {
            Self::Sample => {
                builder.add_nodes(&["A", "B", "C", "D", "E", "F"]);
                for (a, b) in [
                    ("A", "B"),
                    ("A", "C"),
                    ("B", "D"),
                    ("B", "E"),
                    ("C", "E"),
                    ("C", "F"),
                    ("D", "E"),
                    ("E", "F"),
                ] {
                    builder.link(a, b);
                }
            }
            Self::BinaryTree => {
                builder.add_nodes(&["1", "2", "3", "4", "5", "6", "7"]);
                for (a, b) in [
                    ("1", "2"),
                    ("1", "3"),
                    ("2", "4"),
                    ("2", "5"),
                    ("3", "6"),
                    ("3", "7"),
                ] {
                    builder.link(a, b);
                }
            }
            Self::Maze => {
                for row in 0..4 {
                    for col in 0..4 {
                        builder.add_node(&format!("{row}_{col}"));
                    }
                }
                for (a, b) in [
                    ("0_0", "0_1"),
                    ("0_1", "0_2"),
                    ("0_2", "0_3"),
                    ("0_0", "1_0"),
                    ("0_3", "1_3"),
                    ("1_0", "1_1"),
                    ("1_2", "1_3"),
                    ("1_1", "2_1"),
                    ("1_2", "2_2"),
                    ("2_0", "2_1"),
                    ("2_1", "2_2"),
                    ("2_2", "2_3"),
                    ("1_0", "2_0"),
                    ("2_3", "3_3"),
                    ("3_0", "3_1"),
                    ("3_1", "3_2"),
                    ("3_2", "3_3"),
                    ("2_0", "3_0"),
                    ("0_2", "1_2"),
                    ("1_1", "1_2"),
                ] {
                    builder.link(a, b);
                }
            }
            Self::Empty => {}
        }
        builder.build()
    }
}
