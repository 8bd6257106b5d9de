//! Readers for the accepted input formats: textual edge lists and 0/1
//! adjacency matrices.

use crate::edge::Edge;
use crate::error::GraphError;

/// Parse an edge list with one `a b` pair per line.
///
/// Blank lines and anything after a `#` are ignored. Tokens are separated by
/// whitespace or a comma.
pub fn parse_edge_list(text: &str) -> Result<Vec<Edge<String>>, GraphError> {
    let mut edges = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }
        let mut tokens = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(a), Some(b), None) => edges.push(Edge::new(a.to_string(), b.to_string())),
            _ => {
                return Err(GraphError::Parse {
                    line: i + 1,
                    content: raw.to_string(),
                });
            }
        }
    }
    Ok(edges)
}

/// Parse a whitespace-separated integer matrix, one row per line.
///
/// Any non-zero entry reads as `1`. Blank lines and `#` comments are
/// ignored. Squareness is checked by [`edges_from_adjacency_matrix`].
pub fn parse_adjacency_matrix(text: &str) -> Result<Vec<Vec<u8>>, GraphError> {
    let mut rows = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|t| t.parse::<i64>().map(|v| u8::from(v != 0)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| GraphError::Parse {
                line: i + 1,
                content: raw.to_string(),
            })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Read the edges of a square adjacency matrix.
///
/// Only entries strictly above the diagonal are consulted: every non-zero
/// `matrix[i][j]` with `i < j` becomes the edge `(i, j)`, in row-major
/// order. The diagonal and lower triangle are ignored.
pub fn edges_from_adjacency_matrix<R: AsRef<[u8]>>(
    matrix: &[R],
) -> Result<Vec<Edge<usize>>, GraphError> {
    let n = matrix.len();
    let mut edges = Vec::new();
    for (i, row) in matrix.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != n {
            return Err(GraphError::NotSquare {
                row: i,
                len: row.len(),
                expected: n,
            });
        }
        for (j, &v) in row.iter().enumerate().skip(i + 1) {
            if v != 0 {
                edges.push(Edge::new(i, j));
            }
        }
    }
    Ok(edges)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(at) => line[..at].trim(),
        None => line.trim(),
    }
}
