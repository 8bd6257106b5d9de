use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use rand::{RngExt, SeedableRng};
use thicket_core::{Graph, IndexGraph};
use thicket_partition::{
    CancelToken, PartitionerConfig, Partitions, ThicknessError, ThicknessPartitioner,
};
use thicket_planar::{LrPlanarity, PlanarityError, PlanaritySource};

fn complete(n: u32) -> Vec<(u32, u32)> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in i + 1..n {
            edges.push((i, j));
        }
    }
    edges
}

fn complete_bipartite(a: u32, b: u32) -> Vec<(u32, u32)> {
    let mut edges = Vec::new();
    for i in 0..a {
        for j in 0..b {
            edges.push((i, a + j));
        }
    }
    edges
}

/// Toy oracle: a graph is "planar" iff it has at most `cap` edges. The
/// thickness under it is `ceil(m / cap)`, which makes minimality checkable
/// for any `k`.
fn at_most(cap: usize) -> impl Fn(&IndexGraph) -> Result<bool, PlanarityError> + Sync {
    move |g: &IndexGraph| Ok(g.edge_count() <= cap)
}

/// Check the structural guarantees every result must satisfy.
fn assert_witness<P: PlanaritySource>(edges: &[(u32, u32)], oracle: &P, k: usize, groups: &[Vec<usize>]) {
    assert_eq!(groups.len(), k);
    let mut seen = BTreeSet::new();
    for g in groups {
        for &e in g {
            assert!(seen.insert(e), "edge #{e} appears in two layers");
        }
    }
    assert_eq!(seen, (0..edges.len()).collect::<BTreeSet<_>>());

    let graph = Graph::from_edges(edges.iter().copied()).unwrap();
    for g in groups {
        assert!(oracle.is_planar(&graph.subgraph(g)).unwrap());
    }
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn triangle_is_planar() {
    let p = ThicknessPartitioner::new(LrPlanarity);
    let r = p.compute([("A", "B"), ("B", "C"), ("A", "C")]).unwrap();
    assert!(r.is_planar());
    assert_eq!(r.thickness(), 1);
    assert_eq!(r.layers().len(), 1);
    assert_eq!(r.layers()[0].to_string(), "{A: [B, C], B: [A, C], C: [A, B]}");
    assert_eq!(r.partition(), [vec![0usize, 1, 2]].as_slice());
}

#[test]
fn empty_graph_has_one_empty_layer() {
    let p = ThicknessPartitioner::new(LrPlanarity);
    let r = p.compute(Vec::<(u32, u32)>::new()).unwrap();
    assert!(r.is_planar());
    assert_eq!(r.thickness(), 1);
    assert_eq!(r.layers().len(), 1);
    assert!(r.layers()[0].is_empty());
}

#[test]
fn single_edge() {
    let p = ThicknessPartitioner::new(LrPlanarity);
    let r = p.compute([("A", "B")]).unwrap();
    assert!(r.is_planar());
    assert_eq!(r.thickness(), 1);
    assert_eq!(r.layers()[0].neighbors(&"A"), Some(&["B"][..]));
    assert_eq!(r.layers()[0].neighbors(&"B"), Some(&["A"][..]));
}

#[test]
fn planar_layer_keeps_every_edge() {
    let edges = complete(4);
    let r = ThicknessPartitioner::new(LrPlanarity).compute(edges.clone()).unwrap();
    assert!(r.is_planar());
    let mut expected: Vec<_> = edges.clone();
    expected.sort_unstable();
    assert_eq!(r.layers()[0].edges(), expected);
}

#[test]
fn k5_has_thickness_two() {
    let edges = complete(5);
    let r = ThicknessPartitioner::new(LrPlanarity).compute(edges.clone()).unwrap();
    assert!(!r.is_planar());
    assert_eq!(r.thickness(), 2);
    assert_witness(&edges, &LrPlanarity, 2, r.partition());
    let total: usize = r.layers().iter().map(|l| l.edge_count()).sum();
    assert_eq!(total, 10);
}

#[test]
fn k33_has_thickness_two() {
    let edges = complete_bipartite(3, 3);
    let r = ThicknessPartitioner::new(LrPlanarity).compute(edges.clone()).unwrap();
    assert!(!r.is_planar());
    assert_eq!(r.thickness(), 2);
    assert_witness(&edges, &LrPlanarity, 2, r.partition());
}

#[test]
fn k6_has_thickness_two() {
    let edges = complete(6);
    let r = ThicknessPartitioner::new(LrPlanarity).compute(edges.clone()).unwrap();
    assert_eq!(r.thickness(), 2);
    assert_witness(&edges, &LrPlanarity, 2, r.partition());
}

#[test]
fn duplicate_edges_stay_separate_elements() {
    let mut edges = complete(5);
    edges.extend([(0, 1), (3, 2)]);
    let r = ThicknessPartitioner::new(LrPlanarity).compute(edges.clone()).unwrap();
    assert!(!r.is_planar());
    assert_eq!(r.thickness(), 2);
    assert_witness(&edges, &LrPlanarity, 2, r.partition());
    let total: usize = r.layers().iter().map(|l| l.edge_count()).sum();
    assert_eq!(total, 12);
}

#[test]
fn repeated_pair_is_one_planar_layer() {
    let r = ThicknessPartitioner::new(LrPlanarity)
        .compute([(1, 2), (2, 1), (1, 2)])
        .unwrap();
    assert!(r.is_planar());
    assert_eq!(r.thickness(), 1);
    assert_eq!(r.layers()[0].neighbors(&1), Some(&[2, 2, 2][..]));
    assert_eq!(r.layers()[0].neighbors(&2), Some(&[1, 1, 1][..]));
    assert_eq!(r.layers()[0].to_string(), "{1: [2, 2, 2], 2: [1, 1, 1]}");
}

// ---------------------------------------------------------------------------
// Search order and minimality
// ---------------------------------------------------------------------------

#[test]
fn first_found_partition_is_returned() {
    let edges = complete(5);
    let graph = Graph::from_edges(edges.iter().copied()).unwrap();
    let ids: Vec<usize> = (0..edges.len()).collect();
    let expected = Partitions::new(&ids, 2)
        .find(|p| {
            p.iter()
                .all(|g| LrPlanarity.is_planar(&graph.subgraph(g)).unwrap())
        })
        .unwrap();

    let r = ThicknessPartitioner::new(LrPlanarity).compute(edges).unwrap();
    assert_eq!(r.partition(), expected.as_slice());
}

#[test]
fn toy_oracle_thickness_is_minimal() {
    // Six edges, at most two per layer: exactly three layers are needed.
    let edges = complete(4);
    let oracle = at_most(2);
    let r = ThicknessPartitioner::new(&oracle).compute(edges.clone()).unwrap();
    assert_eq!(r.thickness(), 3);
    assert_witness(&edges, &oracle, 3, r.partition());

    // Exhaustively confirm no two-layer split exists.
    let ids: Vec<usize> = (0..edges.len()).collect();
    assert!(Partitions::new(&ids, 2).all(|p| p.iter().any(|g| g.len() > 2)));
}

#[test]
fn thickness_is_between_one_and_edge_count() {
    for cap in 1..=4 {
        for n in 2..=4 {
            let edges = complete(n);
            let r = ThicknessPartitioner::new(at_most(cap))
                .compute(edges.clone())
                .unwrap();
            assert!(r.thickness() >= 1);
            assert!(r.thickness() <= edges.len());
            assert_eq!(r.thickness(), edges.len().div_ceil(cap).max(1));
        }
    }
}

#[test]
fn euler_bound_does_not_change_the_answer() {
    for edges in [complete(5), complete_bipartite(3, 3), complete(6)] {
        let with = ThicknessPartitioner::new(LrPlanarity).compute(edges.clone()).unwrap();
        let without = ThicknessPartitioner::with_config(
            LrPlanarity,
            PartitionerConfig::default().with_euler_lower_bound(false),
        )
        .compute(edges)
        .unwrap();
        assert_eq!(with, without);
    }
}

#[test]
fn parallel_search_matches_sequential() {
    for edges in [complete(5), complete_bipartite(3, 3), complete(6)] {
        let sequential = ThicknessPartitioner::new(LrPlanarity).compute(edges.clone()).unwrap();
        let parallel = ThicknessPartitioner::with_config(
            LrPlanarity,
            PartitionerConfig::default().with_threads(4),
        )
        .compute(edges)
        .unwrap();
        assert_eq!(sequential, parallel);
    }

    let edges = complete(5);
    let sequential = ThicknessPartitioner::new(at_most(3)).compute(edges.clone()).unwrap();
    let parallel = ThicknessPartitioner::with_config(
        at_most(3),
        PartitionerConfig::default().with_threads(3),
    )
    .compute(edges)
    .unwrap();
    assert_eq!(sequential.thickness(), 4);
    assert_eq!(sequential, parallel);
}

#[test]
fn random_small_graphs_yield_valid_witnesses() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let all = complete(6);
    for _ in 0..20 {
        let mut pool = all.clone();
        let take = rng.random_range(9..=12);
        let mut edges = Vec::with_capacity(take);
        for _ in 0..take {
            let i = rng.random_range(0..pool.len());
            edges.push(pool.swap_remove(i));
        }

        let graph = Graph::from_edges(edges.iter().copied()).unwrap();
        let planar = LrPlanarity.is_planar(graph.topology()).unwrap();
        let r = ThicknessPartitioner::new(LrPlanarity).compute(edges.clone()).unwrap();

        assert_eq!(r.is_planar(), planar);
        assert_eq!(r.thickness() == 1, planar);
        // Every graph on six nodes fits in two planar layers.
        assert!(r.thickness() <= 2);
        assert_witness(&edges, &LrPlanarity, r.thickness(), r.partition());
    }
}

// ---------------------------------------------------------------------------
// Errors and cancellation
// ---------------------------------------------------------------------------

#[test]
fn self_loop_is_invalid() {
    let err = ThicknessPartitioner::new(LrPlanarity)
        .compute([(1, 2), (3, 3)])
        .unwrap_err();
    assert!(matches!(err, ThicknessError::InvalidGraph(_)));
}

#[test]
fn oracle_failure_aborts() {
    let failing = |_: &IndexGraph| -> Result<bool, PlanarityError> {
        Err(PlanarityError::SelfLoop { edge: 0, node: 0 })
    };
    let err = ThicknessPartitioner::new(failing).compute(complete(3)).unwrap_err();
    assert_eq!(
        err,
        ThicknessError::PlanarityTestFailed(PlanarityError::SelfLoop { edge: 0, node: 0 })
    );
}

#[test]
fn oracle_failure_aborts_parallel_search() {
    let calls = AtomicUsize::new(0);
    let flaky = |g: &IndexGraph| -> Result<bool, PlanarityError> {
        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Ok(false);
        }
        Err(PlanarityError::EndpointOutOfRange {
            edge: 0,
            node: g.node_count(),
            node_count: g.node_count(),
        })
    };
    let err = ThicknessPartitioner::with_config(&flaky, PartitionerConfig::default().with_threads(2))
        .compute(complete(4))
        .unwrap_err();
    assert!(matches!(err, ThicknessError::PlanarityTestFailed(_)));
}

#[test]
fn parallel_search_ignores_errors_after_the_winner() {
    // The first candidate of K4 into two layers is [[0, 1, 2, 3, 4], [5]];
    // its slow test must still win over later candidates whose two-edge
    // groups make the oracle fail.
    let slow = |g: &IndexGraph| -> Result<bool, PlanarityError> {
        match g.edge_count() {
            2 => Err(PlanarityError::SelfLoop { edge: 0, node: 0 }),
            5 => {
                thread::sleep(Duration::from_millis(100));
                Ok(true)
            }
            m => Ok(m <= 5),
        }
    };
    let sequential = ThicknessPartitioner::new(slow).compute(complete(4)).unwrap();
    assert_eq!(sequential.partition(), [vec![0usize, 1, 2, 3, 4], vec![5]].as_slice());

    let parallel = ThicknessPartitioner::with_config(slow, PartitionerConfig::default().with_threads(4))
        .compute(complete(4))
        .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn parallel_search_reports_error_before_any_winner() {
    // The very first candidate fails on its single-edge group; acceptable
    // candidates later in the order must not mask that.
    let oracle = |g: &IndexGraph| -> Result<bool, PlanarityError> {
        match g.edge_count() {
            1 => Err(PlanarityError::SelfLoop { edge: 0, node: 0 }),
            m => Ok(m <= 5),
        }
    };
    let sequential = ThicknessPartitioner::new(oracle).compute(complete(4)).unwrap_err();
    let parallel = ThicknessPartitioner::with_config(oracle, PartitionerConfig::default().with_threads(4))
        .compute(complete(4))
        .unwrap_err();
    assert_eq!(
        sequential,
        ThicknessError::PlanarityTestFailed(PlanarityError::SelfLoop { edge: 0, node: 0 })
    );
    assert_eq!(sequential, parallel);
}

#[test]
fn rejecting_oracle_is_an_invariant_violation() {
    let never = |_: &IndexGraph| -> Result<bool, PlanarityError> { Ok(false) };
    let err = ThicknessPartitioner::new(never).compute(complete(3)).unwrap_err();
    assert!(matches!(err, ThicknessError::InvariantViolation(_)));
}

#[test]
fn cancelled_before_start() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let err = ThicknessPartitioner::new(LrPlanarity)
        .compute_with_cancel(complete(3), &cancel)
        .unwrap_err();
    assert_eq!(err, ThicknessError::Cancelled);
}

#[test]
fn cancelled_mid_search() {
    let cancel = CancelToken::new();
    let calls = AtomicUsize::new(0);
    // Planarity by edge count, cancelling on the tenth question.
    let oracle = |g: &IndexGraph| -> Result<bool, PlanarityError> {
        if calls.fetch_add(1, Ordering::SeqCst) + 1 == 10 {
            cancel.cancel();
        }
        Ok(g.edge_count() <= 1)
    };
    let err = ThicknessPartitioner::new(&oracle)
        .compute_with_cancel(complete(5), &cancel)
        .unwrap_err();
    assert_eq!(err, ThicknessError::Cancelled);
    assert_eq!(calls.load(Ordering::SeqCst), 10);
}

#[test]
fn cancelled_parallel_search() {
    let cancel = CancelToken::new();
    let oracle = |g: &IndexGraph| -> Result<bool, PlanarityError> {
        cancel.cancel();
        Ok(g.edge_count() <= 1)
    };
    let err = ThicknessPartitioner::with_config(&oracle, PartitionerConfig::default().with_threads(4))
        .compute_with_cancel(complete(5), &cancel)
        .unwrap_err();
    assert_eq!(err, ThicknessError::Cancelled);
}
