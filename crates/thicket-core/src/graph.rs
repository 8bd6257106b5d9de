//! The [`Graph`] type, an edge sequence over interned node labels, and
//! the index-based [`IndexGraph`] view handed to planarity oracles.
//!
//! Nodes are interned to dense indices in order of first appearance. An
//! edge is identified by its position in the input sequence, so duplicate
//! edges stay distinct elements of the edge set.

use std::collections::{BTreeMap, HashSet};

use crate::connectivity::ConnectivityMap;
use crate::edge::Edge;
use crate::error::GraphError;

// ---------------------------------------------------------------------------
// IndexGraph
// ---------------------------------------------------------------------------

/// A graph over the nodes `0..node_count`, given as endpoint pairs.
///
/// This is the form in which (sub)graphs are passed to a planarity oracle.
/// It is not validated on construction: endpoints may be out of range and
/// edges may repeat, and oracles are expected to report malformed input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexGraph {
    node_count: usize,
    edges: Vec<[usize; 2]>,
}

impl IndexGraph {
    /// Create a graph with an explicit node count.
    pub fn new(node_count: usize, edges: Vec<[usize; 2]>) -> Self {
        Self { node_count, edges }
    }

    /// Create a graph whose node count is one past the largest endpoint.
    pub fn from_edges(edges: Vec<[usize; 2]>) -> Self {
        let node_count = edges
            .iter()
            .map(|&[u, v]| u.max(v) + 1)
            .max()
            .unwrap_or(0);
        Self { node_count, edges }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    /// Whether the graph has no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of edges once parallel edges are collapsed.
    pub fn distinct_edge_count(&self) -> usize {
        let mut seen = HashSet::with_capacity(self.edges.len());
        self.edges
            .iter()
            .filter(|&&[u, v]| seen.insert((u.min(v), u.max(v))))
            .count()
    }

    /// The subgraph made of the edges at the given positions.
    ///
    /// Node indices are compacted, in order of first use, to the nodes the
    /// selected edges touch, so the returned graph has no isolated nodes.
    ///
    /// # Panics
    ///
    /// Panics if a position is out of range, or an endpoint of a selected
    /// edge is not below `node_count()`.
    pub fn subgraph(&self, edge_ids: &[usize]) -> IndexGraph {
        let mut local: Vec<Option<usize>> = vec![None; self.node_count];
        let mut count = 0;
        let mut edges = Vec::with_capacity(edge_ids.len());
        for &ei in edge_ids {
            let [u, v] = self.edges[ei];
            let mut map = |n: usize| match local[n] {
                Some(l) => l,
                None => {
                    local[n] = Some(count);
                    count += 1;
                    count - 1
                }
            };
            let lu = map(u);
            let lv = map(v);
            edges.push([lu, lv]);
        }
        IndexGraph::new(count, edges)
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An undirected graph built from a sequence of labelled edges.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: BTreeMap<N, usize>,
    topology: IndexGraph,
}

impl<N: Ord + Clone> Graph<N> {
    /// Build a graph from an edge sequence.
    ///
    /// Self-loops are rejected with [`GraphError::SelfLoop`]; duplicate
    /// edges are kept.
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator,
        I::Item: Into<Edge<N>>,
    {
        let mut graph = Self {
            nodes: Vec::new(),
            index: BTreeMap::new(),
            topology: IndexGraph::default(),
        };
        for (i, e) in edges.into_iter().enumerate() {
            let e: Edge<N> = e.into();
            if e.is_loop() {
                return Err(GraphError::SelfLoop { index: i });
            }
            let u = graph.intern(e.a);
            let v = graph.intern(e.b);
            graph.topology.edges.push([u, v]);
        }
        graph.topology.node_count = graph.nodes.len();
        Ok(graph)
    }

    fn intern(&mut self, n: N) -> usize {
        if let Some(&i) = self.index.get(&n) {
            return i;
        }
        let i = self.nodes.len();
        self.index.insert(n.clone(), i);
        self.nodes.push(n);
        i
    }

    /// Number of distinct nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, duplicates included.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    /// Whether the graph has no edges (and therefore no nodes).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.topology.is_empty()
    }

    /// Node labels in order of first appearance.
    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Dense index of a node label.
    pub fn node_index(&self, n: &N) -> Option<usize> {
        self.index.get(n).copied()
    }

    /// Endpoints of the edge at input position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= edge_count()`.
    pub fn edge(&self, i: usize) -> Edge<&N> {
        let [u, v] = self.topology.edges[i];
        Edge::new(&self.nodes[u], &self.nodes[v])
    }

    /// Iterate over all edges in input order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<&N>> + '_ {
        (0..self.edge_count()).map(move |i| self.edge(i))
    }

    /// Edges as pairs of node indices, in input order.
    #[inline]
    pub fn index_edges(&self) -> &[[usize; 2]] {
        self.topology.edges()
    }

    /// The whole graph over node indices.
    #[inline]
    pub fn topology(&self) -> &IndexGraph {
        &self.topology
    }

    /// The subgraph made of the edges at the given input positions; see
    /// [`IndexGraph::subgraph`].
    pub fn subgraph(&self, edge_ids: &[usize]) -> IndexGraph {
        self.topology.subgraph(edge_ids)
    }

    /// Adjacency of the edges at the given input positions.
    pub fn connectivity_map(&self, edge_ids: &[usize]) -> ConnectivityMap<N> {
        let mut map = ConnectivityMap::new();
        for &ei in edge_ids {
            let e = self.edge(ei);
            map.insert_edge(e.a.clone(), e.b.clone());
        }
        map
    }

    /// Adjacency of the whole graph.
    pub fn full_connectivity_map(&self) -> ConnectivityMap<N> {
        let all: Vec<usize> = (0..self.edge_count()).collect();
        self.connectivity_map(&all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str> {
        Graph::from_edges([("A", "B"), ("B", "C"), ("A", "C")]).unwrap()
    }

    #[test]
    fn interns_in_first_appearance_order() {
        let g = triangle();
        assert_eq!(g.nodes(), &["A", "B", "C"]);
        assert_eq!(g.index_edges(), &[[0, 1], [1, 2], [0, 2]]);
        assert_eq!(g.node_index(&"C"), Some(2));
        assert_eq!(g.node_index(&"Z"), None);
    }

    #[test]
    fn self_loop_is_rejected() {
        let err = Graph::from_edges([(1, 2), (2, 2)]).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop { index: 1 });
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let g = Graph::from_edges([(1, 2), (2, 1), (1, 2)]).unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge(1), Edge::new(&2, &1));
    }

    #[test]
    fn subgraph_compacts_nodes() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let sub = g.subgraph(&[3, 1]);
        assert_eq!(sub.node_count(), 4);
        assert_eq!(sub.edges(), &[[0, 1], [2, 3]]);

        let empty = g.subgraph(&[]);
        assert_eq!(empty.node_count(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn connectivity_of_selected_edges() {
        let g = triangle();
        let map = g.connectivity_map(&[0, 2]);
        assert_eq!(map.neighbors(&"A"), Some(&["B", "C"][..]));
        assert_eq!(map.neighbors(&"B"), Some(&["A"][..]));
        assert_eq!(map.neighbors(&"C"), Some(&["A"][..]));
    }

    #[test]
    fn distinct_edges_ignore_orientation() {
        let g = Graph::from_edges([(1, 2), (2, 1), (2, 3)]).unwrap();
        assert_eq!(g.topology().distinct_edge_count(), 2);
        assert_eq!(g.topology().node_count(), 3);
    }

    #[test]
    fn index_graph_node_count_from_edges() {
        let g = IndexGraph::from_edges(vec![[0, 4], [2, 1]]);
        assert_eq!(g.node_count(), 5);
        assert_eq!(IndexGraph::from_edges(Vec::new()).node_count(), 0);
    }
}
