//! Per-layer adjacency: the [`ConnectivityMap`] type.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Mapping from each node to its sorted neighbor list.
///
/// Nodes iterate in label order. Each undirected edge contributes one entry
/// to both endpoints' lists, so a duplicate edge shows up as a repeated
/// neighbor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent),
    serde(bound(
        serialize = "N: serde::Serialize",
        deserialize = "N: serde::Deserialize<'de> + Ord"
    ))
)]
pub struct ConnectivityMap<N> {
    adj: BTreeMap<N, Vec<N>>,
}

impl<N> Default for ConnectivityMap<N> {
    fn default() -> Self {
        Self {
            adj: BTreeMap::new(),
        }
    }
}

impl<N: Ord + Clone> ConnectivityMap<N> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from undirected edges.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut map = Self::new();
        for (a, b) in edges {
            map.insert_edge(a, b);
        }
        map
    }

    /// Record the undirected edge `a -- b`.
    pub fn insert_edge(&mut self, a: N, b: N) {
        Self::insert_sorted(self.adj.entry(a.clone()).or_default(), b.clone());
        Self::insert_sorted(self.adj.entry(b).or_default(), a);
    }

    fn insert_sorted(list: &mut Vec<N>, n: N) {
        let at = list.partition_point(|x| *x <= n);
        list.insert(at, n);
    }

    /// Neighbors of `n`, or `None` if `n` has no edge in this map.
    pub fn neighbors(&self, n: &N) -> Option<&[N]> {
        self.adj.get(n).map(Vec::as_slice)
    }

    /// Number of edge ends at `n`.
    pub fn degree(&self, n: &N) -> usize {
        self.adj.get(n).map_or(0, Vec::len)
    }

    /// Whether `n` appears in the map.
    pub fn contains(&self, n: &N) -> bool {
        self.adj.contains_key(n)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Number of undirected edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Node labels in order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adj.keys()
    }

    /// Iterate over `(node, neighbors)` entries in node order.
    pub fn iter(&self) -> btree_map::Iter<'_, N, Vec<N>> {
        self.adj.iter()
    }

    /// Recover the edge multiset, each edge with its smaller endpoint first,
    /// sorted.
    pub fn edges(&self) -> Vec<(N, N)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for (u, nbrs) in &self.adj {
            for v in nbrs {
                if u < v {
                    out.push((u.clone(), v.clone()));
                }
            }
        }
        out
    }
}

impl<'a, N> IntoIterator for &'a ConnectivityMap<N> {
    type Item = (&'a N, &'a Vec<N>);
    type IntoIter = btree_map::Iter<'a, N, Vec<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.adj.iter()
    }
}

impl<N: Ord + Clone> FromIterator<(N, N)> for ConnectivityMap<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<N: fmt::Display> fmt::Display for ConnectivityMap<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (n, nbrs)) in self.adj.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{n}: [")?;
            for (j, m) in nbrs.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{m}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_neighbors_are_sorted() {
        let map: ConnectivityMap<&str> = [("A", "B"), ("B", "C"), ("A", "C")]
            .into_iter()
            .collect();
        assert_eq!(map.neighbors(&"A"), Some(&["B", "C"][..]));
        assert_eq!(map.neighbors(&"B"), Some(&["A", "C"][..]));
        assert_eq!(map.neighbors(&"C"), Some(&["A", "B"][..]));
        assert_eq!(map.to_string(), "{A: [B, C], B: [A, C], C: [A, B]}");
    }

    #[test]
    fn empty_map() {
        let map = ConnectivityMap::<u32>::new();
        assert!(map.is_empty());
        assert_eq!(map.edge_count(), 0);
        assert_eq!(map.to_string(), "{}");
        assert_eq!(map.neighbors(&7), None);
        assert_eq!(map.degree(&7), 0);
    }

    #[test]
    fn duplicate_edge_repeats_neighbor() {
        let map = ConnectivityMap::from_edges([(1, 2), (2, 1)]);
        assert_eq!(map.neighbors(&1), Some(&[2, 2][..]));
        assert_eq!(map.edge_count(), 2);
        assert_eq!(map.edges(), vec![(1, 2), (1, 2)]);
    }

    #[test]
    fn edges_are_normalized() {
        let map = ConnectivityMap::from_edges([("R1", "C1"), ("C1", "GND"), ("VCC", "R1")]);
        assert_eq!(
            map.edges(),
            vec![("C1", "GND"), ("C1", "R1"), ("R1", "VCC")]
        );
        assert_eq!(map.len(), 4);
        assert!(map.contains(&"GND"));
    }
}
