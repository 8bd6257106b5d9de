//! Left-right planarity test.
//!
//! Two depth-first passes over the graph:
//!
//! 1. **Orientation**: a DFS orients every edge (tree edges away from the
//!    root, back edges towards it) and computes `lowpt`, `lowpt2` and the
//!    nesting depth of each oriented edge.
//! 2. **Testing**: a second DFS visits out-edges in nesting-depth order and
//!    maintains a stack of conflict pairs of return-edge intervals. The graph
//!    is planar iff every pair can be kept on consistent sides.
//!
//! Both passes use explicit stacks so that long paths cannot overflow the
//! call stack. Only the test is performed; no embedding is built.

use std::collections::HashSet;

use thicket_core::IndexGraph;

use crate::bound::max_planar_edges;
use crate::error::PlanarityError;
use crate::traits::PlanaritySource;

/// Sentinel height for nodes not yet reached by the orientation DFS.
const UNSEEN: usize = usize::MAX;

/// The left-right planarity test as a [`PlanaritySource`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LrPlanarity;

impl LrPlanarity {
    /// Create a new tester.
    pub const fn new() -> Self {
        Self
    }

    /// Run the test on `graph`.
    ///
    /// Parallel edges are collapsed first. Graphs with more than `3n - 6`
    /// distinct edges are rejected without running the DFS passes.
    pub fn test(&self, graph: &IndexGraph) -> Result<bool, PlanarityError> {
        let n = graph.node_count();
        let edges = simple_edges(graph)?;
        if n > 2 && edges.len() > max_planar_edges(n) {
            log::trace!(
                "lr: {} distinct edges on {} nodes exceed the Euler bound",
                edges.len(),
                n
            );
            return Ok(false);
        }
        Ok(LrState::new(n, &edges).run())
    }
}

impl PlanaritySource for LrPlanarity {
    #[inline]
    fn is_planar(&self, graph: &IndexGraph) -> Result<bool, PlanarityError> {
        self.test(graph)
    }
}

/// Validate endpoints and drop parallel edges, keeping first occurrences.
fn simple_edges(graph: &IndexGraph) -> Result<Vec<[usize; 2]>, PlanarityError> {
    let n = graph.node_count();
    let mut seen = HashSet::with_capacity(graph.edge_count());
    let mut out = Vec::with_capacity(graph.edge_count());
    for (i, &[u, v]) in graph.edges().iter().enumerate() {
        for node in [u, v] {
            if node >= n {
                return Err(PlanarityError::EndpointOutOfRange {
                    edge: i,
                    node,
                    node_count: n,
                });
            }
        }
        if u == v {
            return Err(PlanarityError::SelfLoop { edge: i, node: u });
        }
        if seen.insert((u.min(v), u.max(v))) {
            out.push([u, v]);
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Conflict pairs
// ---------------------------------------------------------------------------

/// Interval of return edges, identified by edge ids. Empty when both ends
/// are `None`.
#[derive(Clone, Copy, Default)]
struct Interval {
    low: Option<usize>,
    high: Option<usize>,
}

impl Interval {
    fn single(e: usize) -> Self {
        Self {
            low: Some(e),
            high: Some(e),
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    /// Whether this interval conflicts with edge `b`.
    #[inline]
    fn conflicting(&self, b: usize, lowpt: &[usize]) -> bool {
        match self.high {
            Some(h) => lowpt[h] > lowpt[b],
            None => false,
        }
    }
}

#[derive(Clone, Copy, Default)]
struct ConflictPair {
    left: Interval,
    right: Interval,
}

impl ConflictPair {
    fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Lowest lowpoint among the pair's return edges.
    fn lowest(&self, lowpt: &[usize]) -> Option<usize> {
        let l = self.left.low.map(|e| lowpt[e]);
        let r = self.right.low.map(|e| lowpt[e]);
        match (l, r) {
            (Some(l), Some(r)) => Some(l.min(r)),
            (l, r) => l.or(r),
        }
    }
}

// ---------------------------------------------------------------------------
// Test state
// ---------------------------------------------------------------------------

struct LrState {
    /// `(neighbor, edge id)` per node, in input order.
    adj: Vec<Vec<(usize, usize)>>,
    height: Vec<usize>,
    parent_edge: Vec<Option<usize>>,
    roots: Vec<usize>,
    // Orientation, per edge id.
    oriented: Vec<bool>,
    tail: Vec<usize>,
    head: Vec<usize>,
    lowpt: Vec<usize>,
    lowpt2: Vec<usize>,
    nesting_depth: Vec<usize>,
    /// Oriented out-edges per node; sorted by nesting depth before testing.
    out: Vec<Vec<usize>>,
    // Testing.
    stack: Vec<ConflictPair>,
    stack_bottom: Vec<usize>,
    lowpt_edge: Vec<Option<usize>>,
    refs: Vec<Option<usize>>,
    entered: Vec<bool>,
}

impl LrState {
    fn new(n: usize, edges: &[[usize; 2]]) -> Self {
        let m = edges.len();
        let mut adj = vec![Vec::new(); n];
        for (id, &[u, v]) in edges.iter().enumerate() {
            adj[u].push((v, id));
            adj[v].push((u, id));
        }
        Self {
            adj,
            height: vec![UNSEEN; n],
            parent_edge: vec![None; n],
            roots: Vec::new(),
            oriented: vec![false; m],
            tail: vec![0; m],
            head: vec![0; m],
            lowpt: vec![0; m],
            lowpt2: vec![0; m],
            nesting_depth: vec![0; m],
            out: vec![Vec::new(); n],
            stack: Vec::new(),
            stack_bottom: vec![0; m],
            lowpt_edge: vec![None; m],
            refs: vec![None; m],
            entered: vec![false; m],
        }
    }

    fn run(mut self) -> bool {
        let mut next = vec![0usize; self.adj.len()];
        for v in 0..self.adj.len() {
            if self.height[v] == UNSEEN {
                self.height[v] = 0;
                self.roots.push(v);
                self.orient(v, &mut next);
            }
        }

        let mut out = std::mem::take(&mut self.out);
        for list in out.iter_mut() {
            list.sort_by_key(|&e| self.nesting_depth[e]);
        }
        self.out = out;

        next.fill(0);
        let roots = std::mem::take(&mut self.roots);
        roots.into_iter().all(|r| self.test_from(r, &mut next))
    }

    /// Orientation DFS from `root`. `next` holds each node's position in
    /// its adjacency list.
    fn orient(&mut self, root: usize, next: &mut [usize]) {
        let mut dfs = vec![root];

        'visit: while let Some(v) = dfs.pop() {
            let hv = self.height[v];
            let e = self.parent_edge[v];

            while next[v] < self.adj[v].len() {
                let (w, vw) = self.adj[v][next[v]];
                // An edge already oriented out of `v` is the tree edge whose
                // subtree has just been finished.
                let resuming = self.oriented[vw] && self.tail[vw] == v;

                if !resuming {
                    if self.oriented[vw] {
                        next[v] += 1;
                        continue;
                    }
                    self.oriented[vw] = true;
                    self.tail[vw] = v;
                    self.head[vw] = w;
                    self.out[v].push(vw);
                    self.lowpt[vw] = hv;
                    self.lowpt2[vw] = hv;

                    if self.height[w] == UNSEEN {
                        // Tree edge: finish `w` first, then come back.
                        self.parent_edge[w] = Some(vw);
                        self.height[w] = hv + 1;
                        dfs.push(v);
                        dfs.push(w);
                        continue 'visit;
                    }
                    // Back edge.
                    self.lowpt[vw] = self.height[w];
                }

                self.nesting_depth[vw] = 2 * self.lowpt[vw];
                if self.lowpt2[vw] < hv {
                    // chordal
                    self.nesting_depth[vw] += 1;
                }

                if let Some(e) = e {
                    if self.lowpt[vw] < self.lowpt[e] {
                        self.lowpt2[e] = self.lowpt[e].min(self.lowpt2[vw]);
                        self.lowpt[e] = self.lowpt[vw];
                    } else if self.lowpt[vw] > self.lowpt[e] {
                        self.lowpt2[e] = self.lowpt2[e].min(self.lowpt[vw]);
                    } else {
                        self.lowpt2[e] = self.lowpt2[e].min(self.lowpt2[vw]);
                    }
                }

                next[v] += 1;
            }
        }
    }

    /// Testing DFS from `root`. Returns `false` as soon as a conflict
    /// cannot be resolved.
    fn test_from(&mut self, root: usize, next: &mut [usize]) -> bool {
        let mut dfs = vec![root];

        'visit: while let Some(v) = dfs.pop() {
            let e = self.parent_edge[v];

            while next[v] < self.out[v].len() {
                let ei = self.out[v][next[v]];
                let w = self.head[ei];

                if !self.entered[ei] {
                    self.entered[ei] = true;
                    self.stack_bottom[ei] = self.stack.len();
                    if self.parent_edge[w] == Some(ei) {
                        dfs.push(v);
                        dfs.push(w);
                        continue 'visit;
                    }
                    self.lowpt_edge[ei] = Some(ei);
                    self.stack.push(ConflictPair {
                        left: Interval::default(),
                        right: Interval::single(ei),
                    });
                }

                // Integrate the return edges of `ei`.
                if self.lowpt[ei] < self.height[v] {
                    if let Some(e) = e {
                        if next[v] == 0 {
                            self.lowpt_edge[e] = self.lowpt_edge[ei];
                        } else if !self.add_constraints(ei, e) {
                            return false;
                        }
                    }
                }

                next[v] += 1;
            }

            if let Some(e) = e {
                self.remove_back_edges(e);
            }
        }
        true
    }

    fn add_constraints(&mut self, ei: usize, e: usize) -> bool {
        let mut p = ConflictPair::default();

        // Merge the return edges of `ei` into `p.right`.
        loop {
            let Some(mut q) = self.stack.pop() else {
                break;
            };
            if !q.left.is_empty() {
                q.swap();
            }
            if !q.left.is_empty() {
                return false;
            }
            if let Some(qlow) = q.right.low {
                if self.lowpt[qlow] > self.lowpt[e] {
                    if p.right.is_empty() {
                        p.right = q.right;
                    } else if let Some(plow) = p.right.low {
                        self.refs[plow] = q.right.high;
                    }
                    p.right.low = q.right.low;
                } else {
                    // align
                    self.refs[qlow] = self.lowpt_edge[e];
                }
            }
            if self.stack.len() == self.stack_bottom[ei] {
                break;
            }
        }

        // Merge conflicting return edges of the earlier siblings into `p.left`.
        while let Some(top) = self.stack.last() {
            if !(top.left.conflicting(ei, &self.lowpt) || top.right.conflicting(ei, &self.lowpt)) {
                break;
            }
            let Some(mut q) = self.stack.pop() else {
                break;
            };
            if q.right.conflicting(ei, &self.lowpt) {
                q.swap();
            }
            if q.right.conflicting(ei, &self.lowpt) {
                return false;
            }
            if let Some(plow) = p.right.low {
                self.refs[plow] = q.right.high;
            }
            if q.right.low.is_some() {
                p.right.low = q.right.low;
            }
            if p.left.is_empty() {
                p.left = q.left;
            } else if let Some(plow) = p.left.low {
                self.refs[plow] = q.left.high;
            }
            p.left.low = q.left.low;
        }

        if !(p.left.is_empty() && p.right.is_empty()) {
            self.stack.push(p);
        }
        true
    }

    /// Drop return edges ending at the tail of `e` once its subtree is done.
    fn remove_back_edges(&mut self, e: usize) {
        let u = self.tail[e];
        let hu = self.height[u];

        while let Some(top) = self.stack.last() {
            if top.lowest(&self.lowpt) != Some(hu) {
                break;
            }
            self.stack.pop();
        }

        if let Some(mut p) = self.stack.pop() {
            while let Some(h) = p.left.high {
                if self.head[h] != u {
                    break;
                }
                p.left.high = self.refs[h];
            }
            if p.left.high.is_none() {
                if let Some(low) = p.left.low.take() {
                    self.refs[low] = p.right.low;
                }
            }

            while let Some(h) = p.right.high {
                if self.head[h] != u {
                    break;
                }
                p.right.high = self.refs[h];
            }
            if p.right.high.is_none() {
                if let Some(low) = p.right.low.take() {
                    self.refs[low] = p.left.low;
                }
            }

            self.stack.push(p);
        }

        // The side of `e` follows its highest return edge.
        if self.lowpt[e] < hu {
            if let Some(top) = self.stack.last() {
                let hl = top.left.high;
                let hr = top.right.high;
                self.refs[e] = match (hl, hr) {
                    (Some(l), Some(r)) if self.lowpt[l] > self.lowpt[r] => Some(l),
                    (Some(l), None) => Some(l),
                    _ => hr,
                };
            }
        }
    }
}
