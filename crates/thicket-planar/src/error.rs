use std::fmt;

/// Errors a planarity oracle reports for malformed input graphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanarityError {
    /// An edge endpoint is not below the graph's node count.
    EndpointOutOfRange {
        edge: usize,
        node: usize,
        node_count: usize,
    },
    /// An edge joins a node to itself.
    SelfLoop { edge: usize, node: usize },
}

impl fmt::Display for PlanarityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointOutOfRange {
                edge,
                node,
                node_count,
            } => write!(
                f,
                "edge #{edge} references node {node} in a graph of {node_count} nodes"
            ),
            Self::SelfLoop { edge, node } => {
                write!(f, "edge #{edge} is a self-loop on node {node}")
            }
        }
    }
}

impl std::error::Error for PlanarityError {}
