//! **thicket-core**: graph thickness toolkit, core types.
//!
//! This crate provides the foundational types used across the *thicket*
//! workspace: undirected edges over opaque node labels, an interned
//! [`Graph`], the index-based [`IndexGraph`] handed to planarity oracles,
//! per-layer [`ConnectivityMap`]s, and parsers for the accepted input
//! formats.

pub mod connectivity;
pub mod edge;
pub mod error;
pub mod graph;
pub mod input;

pub use connectivity::ConnectivityMap;
pub use edge::Edge;
pub use error::GraphError;
pub use graph::{Graph, IndexGraph};
pub use input::{edges_from_adjacency_matrix, parse_adjacency_matrix, parse_edge_list};
