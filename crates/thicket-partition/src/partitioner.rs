//! The thickness search.

use thicket_core::{Edge, Graph, IndexGraph};
use thicket_planar::{PlanaritySource, thickness_lower_bound};

use crate::cancel::CancelToken;
use crate::config::PartitionerConfig;
use crate::error::ThicknessError;
use crate::parallel;
use crate::partitions::{Partitions, stirling2};
use crate::result::ThicknessResult;

/// Finds the thickness of a graph and a witnessing layer decomposition.
///
/// The search is exhaustive: for `k = 2, 3, ...` it enumerates every
/// partition of the edge set into `k` groups (in [`Partitions`] order) and
/// asks the oracle about each group. The first candidate whose groups are
/// all planar wins, so `k` is minimal and the layering is the first one in
/// generation order, not a canonical one. Cost grows like the Stirling
/// numbers `S(m, k)`; pass a [`CancelToken`] to bound it.
#[derive(Debug, Clone)]
pub struct ThicknessPartitioner<P> {
    oracle: P,
    config: PartitionerConfig,
}

impl<P: PlanaritySource + Sync> ThicknessPartitioner<P> {
    /// Create a partitioner with the default configuration.
    pub fn new(oracle: P) -> Self {
        Self::with_config(oracle, PartitionerConfig::default())
    }

    pub fn with_config(oracle: P, config: PartitionerConfig) -> Self {
        Self { oracle, config }
    }

    #[inline]
    pub fn config(&self) -> &PartitionerConfig {
        &self.config
    }

    #[inline]
    pub fn oracle(&self) -> &P {
        &self.oracle
    }

    /// Compute the thickness of the graph formed by `edges`.
    pub fn compute<N, I>(&self, edges: I) -> Result<ThicknessResult<N>, ThicknessError>
    where
        N: Ord + Clone,
        I: IntoIterator,
        I::Item: Into<Edge<N>>,
    {
        self.compute_with_cancel(edges, &CancelToken::new())
    }

    /// Like [`compute`](Self::compute), giving up with
    /// [`ThicknessError::Cancelled`] once `cancel` is triggered.
    pub fn compute_with_cancel<N, I>(
        &self,
        edges: I,
        cancel: &CancelToken,
    ) -> Result<ThicknessResult<N>, ThicknessError>
    where
        N: Ord + Clone,
        I: IntoIterator,
        I::Item: Into<Edge<N>>,
    {
        let graph = Graph::from_edges(edges)?;
        self.compute_graph(&graph, cancel)
    }

    /// Compute the thickness of an already built graph.
    pub fn compute_graph<N: Ord + Clone>(
        &self,
        graph: &Graph<N>,
        cancel: &CancelToken,
    ) -> Result<ThicknessResult<N>, ThicknessError> {
        cancel.check()?;

        let topology = graph.topology();
        let m = graph.edge_count();
        let ids: Vec<usize> = (0..m).collect();

        if self.oracle.is_planar(topology)? {
            log::debug!("graph with {} edges is planar", m);
            return Ok(ThicknessResult::new(
                true,
                vec![graph.full_connectivity_map()],
                vec![ids],
            ));
        }

        let first = if self.config.euler_lower_bound {
            thickness_lower_bound(graph.node_count(), topology.distinct_edge_count()).max(2)
        } else {
            2
        };

        for k in first..=m {
            log::debug!(
                "trying {} layers over {} edges ({} candidates)",
                k,
                m,
                stirling2(m, k).map_or_else(|| "too many".to_string(), |c| c.to_string())
            );
            let found = if self.config.is_parallel() {
                parallel::search_round(&self.oracle, topology, &ids, k, self.config.threads, cancel)?
            } else {
                self.search_round(topology, &ids, k, cancel)?
            };
            if let Some(groups) = found {
                log::info!("thickness {} found for {} edges", k, m);
                let layers = groups.iter().map(|g| graph.connectivity_map(g)).collect();
                return Ok(ThicknessResult::new(false, layers, groups));
            }
        }

        Err(ThicknessError::InvariantViolation(format!(
            "no all-planar partition of {m} edges into at most {m} layers"
        )))
    }

    /// Test every partition into `k` groups in order; return the first one
    /// whose groups are all planar.
    fn search_round(
        &self,
        topology: &IndexGraph,
        ids: &[usize],
        k: usize,
        cancel: &CancelToken,
    ) -> Result<Option<Vec<Vec<usize>>>, ThicknessError> {
        for (seq, candidate) in Partitions::new(ids, k).enumerate() {
            match all_planar(&self.oracle, topology, &candidate, || cancel.is_cancelled())? {
                Some(true) => return Ok(Some(candidate)),
                Some(false) => log::trace!("k={} candidate #{} rejected", k, seq),
                None => cancel.check()?,
            }
        }
        Ok(None)
    }
}

/// Test the groups of one candidate in order, stopping at the first
/// non-planar one.
///
/// Returns `None` when `abandon` asks to stop before the candidate is
/// decided.
pub(crate) fn all_planar<P, F>(
    oracle: &P,
    topology: &IndexGraph,
    candidate: &[Vec<usize>],
    abandon: F,
) -> Result<Option<bool>, ThicknessError>
where
    P: PlanaritySource + ?Sized,
    F: Fn() -> bool,
{
    for group in candidate {
        if abandon() {
            return Ok(None);
        }
        if !oracle.is_planar(&topology.subgraph(group))? {
            return Ok(Some(false));
        }
    }
    Ok(Some(true))
}
