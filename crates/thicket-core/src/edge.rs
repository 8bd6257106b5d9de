//! Undirected edges between opaque node labels.

use std::fmt;

/// An unordered pair of node labels.
///
/// Endpoint order is kept as given so that callers get their edges back
/// unchanged, but two edges compare equal only when their endpoints match
/// in the same order. Use [`normalized`](Edge::normalized) to compare edges
/// as unordered pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<N> {
    pub a: N,
    pub b: N,
}

impl<N> Edge<N> {
    /// Create a new edge from two endpoints.
    pub const fn new(a: N, b: N) -> Self {
        Self { a, b }
    }

    /// Both endpoints as a tuple of references.
    #[inline]
    pub fn endpoints(&self) -> (&N, &N) {
        (&self.a, &self.b)
    }
}

impl<N: PartialEq> Edge<N> {
    /// Whether both endpoints are the same node.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// The endpoint opposite to `n`, or `None` if `n` is not an endpoint.
    pub fn other(&self, n: &N) -> Option<&N> {
        if self.a == *n {
            Some(&self.b)
        } else if self.b == *n {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl<N: Ord> Edge<N> {
    /// The same edge with the smaller endpoint first.
    pub fn normalized(self) -> Self {
        if self.b < self.a {
            Self {
                a: self.b,
                b: self.a,
            }
        } else {
            self
        }
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from((a, b): (N, N)) -> Self {
        Self { a, b }
    }
}

impl<N> From<Edge<N>> for (N, N) {
    fn from(e: Edge<N>) -> Self {
        (e.a, e.b)
    }
}

impl<N: fmt::Display> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_endpoint() {
        let e = Edge::new("A", "B");
        assert_eq!(e.other(&"A"), Some(&"B"));
        assert_eq!(e.other(&"B"), Some(&"A"));
        assert_eq!(e.other(&"C"), None);
    }

    #[test]
    fn normalized_orders_endpoints() {
        assert_eq!(Edge::new(3, 1).normalized(), Edge::new(1, 3));
        assert_eq!(Edge::new(1, 3).normalized(), Edge::new(1, 3));
    }

    #[test]
    fn loop_detection() {
        assert!(Edge::new('x', 'x').is_loop());
        assert!(!Edge::new('x', 'y').is_loop());
    }

    #[test]
    fn from_tuple() {
        let e: Edge<&str> = ("R1", "C1").into();
        assert_eq!(e.to_string(), "R1 -- C1");
    }
}
