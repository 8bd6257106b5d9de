//! Maximum flow over a layer's connectivity.

use std::collections::VecDeque;

use thicket_core::ConnectivityMap;

/// Residual arc; `rev` is the index of the paired arc at `to`.
struct Residual {
    to: usize,
    cap: u32,
    rev: usize,
}

/// Maximum flow from `source` to `sink` when every adjacency entry is an
/// undirected edge of capacity 1 (parallel entries add up).
///
/// Equivalently, the number of edge-disjoint `source`-`sink` paths.
/// Computed with Edmonds–Karp (shortest augmenting paths). Returns `None`
/// when either node is absent from the map, and `Some(0)` when they are the
/// same node.
pub fn max_flow<N: Ord + Clone>(map: &ConnectivityMap<N>, source: &N, sink: &N) -> Option<u32> {
    let nodes: Vec<&N> = map.nodes().collect();
    let s = nodes.binary_search(&source).ok()?;
    let t = nodes.binary_search(&sink).ok()?;
    if s == t {
        return Some(0);
    }

    let mut arcs: Vec<Vec<Residual>> = (0..nodes.len()).map(|_| Vec::new()).collect();
    for (u, (a, neighbors)) in map.iter().enumerate() {
        for b in neighbors {
            let Ok(v) = nodes.binary_search(&b) else {
                continue;
            };
            // Each undirected edge is listed at both ends; take it once.
            if u >= v {
                continue;
            }
            debug_assert!(a < b);
            let (ru, rv) = (arcs[v].len(), arcs[u].len());
            arcs[u].push(Residual { to: v, cap: 1, rev: ru });
            arcs[v].push(Residual { to: u, cap: 1, rev: rv });
        }
    }

    let mut flow = 0;
    let mut via: Vec<Option<(usize, usize)>> = vec![None; nodes.len()];
    let mut queue = VecDeque::new();
    loop {
        via.iter_mut().for_each(|v| *v = None);
        queue.clear();
        queue.push_back(s);
        while let Some(u) = queue.pop_front() {
            if u == t {
                break;
            }
            for (i, arc) in arcs[u].iter().enumerate() {
                if arc.cap > 0 && arc.to != s && via[arc.to].is_none() {
                    via[arc.to] = Some((u, i));
                    queue.push_back(arc.to);
                }
            }
        }
        if via[t].is_none() {
            break;
        }

        // Unit capacities: every augmenting path carries exactly one unit.
        let mut v = t;
        while let Some((u, i)) = via[v] {
            let rev = arcs[u][i].rev;
            arcs[u][i].cap -= 1;
            arcs[v][rev].cap += 1;
            v = u;
        }
        flow += 1;
    }

    log::debug!("max flow over {} nodes: {}", nodes.len(), flow);
    Some(flow)
}
