use thicket_core::IndexGraph;

use crate::error::PlanarityError;

/// Planarity oracle: decides whether a graph admits a planar embedding.
///
/// Implementations must be deterministic, free of side effects, and total
/// over finite graphs: the empty graph and single-node graphs are planar.
/// Malformed input (endpoints outside `0..node_count`, self-loops) is
/// reported as an error rather than answered.
pub trait PlanaritySource {
    fn is_planar(&self, graph: &IndexGraph) -> Result<bool, PlanarityError>;
}

impl<F> PlanaritySource for F
where
    F: Fn(&IndexGraph) -> Result<bool, PlanarityError>,
{
    #[inline]
    fn is_planar(&self, graph: &IndexGraph) -> Result<bool, PlanarityError> {
        self(graph)
    }
}
