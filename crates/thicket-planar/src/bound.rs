/// Largest number of distinct edges a simple planar graph on `n` nodes can
/// have (Euler's bound `3n - 6` for `n >= 3`).
#[inline]
pub fn max_planar_edges(n: usize) -> usize {
    match n {
        0 | 1 => 0,
        2 => 1,
        _ => 3 * n - 6,
    }
}

/// Lower bound on the thickness of a simple graph with `n` nodes and `m`
/// distinct edges.
///
/// Every planar layer holds at most [`max_planar_edges(n)`](max_planar_edges)
/// edges, so at least `ceil(m / (3n - 6))` layers are needed. Never returns
/// less than 1.
pub fn thickness_lower_bound(n: usize, m: usize) -> usize {
    let per_layer = max_planar_edges(n);
    if per_layer == 0 {
        return 1;
    }
    m.div_ceil(per_layer).max(1)
}
