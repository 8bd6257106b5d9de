use thicket_core::ConnectivityMap;

/// Outcome of a thickness computation.
///
/// `layers[i]` is the adjacency of the edges in `partition[i]`, where each
/// group lists positions in the input edge sequence. A planar graph has a
/// single layer holding every edge (the empty graph: one empty layer).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound(
        serialize = "N: serde::Serialize",
        deserialize = "N: serde::Deserialize<'de> + Ord"
    ))
)]
pub struct ThicknessResult<N> {
    planar: bool,
    thickness: usize,
    layers: Vec<ConnectivityMap<N>>,
    partition: Vec<Vec<usize>>,
}

impl<N> ThicknessResult<N> {
    pub(crate) fn new(
        planar: bool,
        layers: Vec<ConnectivityMap<N>>,
        partition: Vec<Vec<usize>>,
    ) -> Self {
        Self {
            planar,
            thickness: layers.len(),
            layers,
            partition,
        }
    }

    /// Whether the whole graph is planar.
    #[inline]
    pub fn is_planar(&self) -> bool {
        self.planar
    }

    /// Number of planar layers.
    #[inline]
    pub fn thickness(&self) -> usize {
        self.thickness
    }

    /// One adjacency map per layer.
    #[inline]
    pub fn layers(&self) -> &[ConnectivityMap<N>] {
        &self.layers
    }

    /// Input edge positions per layer.
    #[inline]
    pub fn partition(&self) -> &[Vec<usize>] {
        &self.partition
    }

    /// Layer holding the edge at input position `edge`.
    pub fn layer_of(&self, edge: usize) -> Option<usize> {
        self.partition.iter().position(|g| g.contains(&edge))
    }

    /// Consume the result, keeping only the layers.
    pub fn into_layers(self) -> Vec<ConnectivityMap<N>> {
        self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ThicknessResult<&'static str> {
        ThicknessResult::new(
            false,
            vec![
                ConnectivityMap::from_edges([("A", "B"), ("B", "C")]),
                ConnectivityMap::from_edges([("A", "C")]),
            ],
            vec![vec![0, 1], vec![2]],
        )
    }

    #[test]
    fn accessors() {
        let r = sample();
        assert!(!r.is_planar());
        assert_eq!(r.thickness(), 2);
        assert_eq!(r.layer_of(1), Some(0));
        assert_eq!(r.layer_of(2), Some(1));
        assert_eq!(r.layer_of(3), None);
        assert_eq!(r.into_layers()[1].edges(), vec![("A", "C")]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let owned = ThicknessResult::new(
            false,
            vec![
                ConnectivityMap::from_edges([("A".to_string(), "B".to_string())]),
                ConnectivityMap::from_edges([("B".to_string(), "C".to_string())]),
            ],
            vec![vec![0], vec![1]],
        );
        let json = serde_json::to_string(&owned).unwrap();
        assert!(json.contains("\"thickness\":2"));
        let back: ThicknessResult<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(owned, back);
    }
}
