/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::weighted_graph::{GraphError, WeightedGraph};

/// Returns the transpose of the provided graph.
///
/// The transpose has the same number of nodes and the same maximum degree;
/// for each arc `(u, v)` of weight `w` in `graph` it contains an arc `(v, u)`
/// of weight `w`. Successors are sorted by decreasing weight as in any
/// [`WeightedGraph`], so the order of the arcs of a node is not the mirror
/// image of the original order.
///
/// Since the maximum degree bounds outdegrees but not indegrees, the
/// transpose might not fit: in that case, a
/// [`CapacityExceeded`](GraphError::CapacityExceeded) error is returned
/// for the first node whose indegree exceeds the maximum degree.
///
/// # Examples
///
/// ```
/// use weighted_sccs::graphs::weighted_graph::WeightedGraph;
/// use weighted_sccs::transform::transpose;
///
/// let graph = WeightedGraph::from_arcs(3, 2, [(0, 1, 5), (2, 1, 7)])?;
/// let transpose = transpose(&graph)?;
/// let arcs: Vec<_> = transpose.arcs().collect();
/// assert_eq!(arcs, vec![(1, 2, 7), (1, 0, 5)]);
/// # Ok::<(), weighted_sccs::graphs::weighted_graph::GraphError>(())
/// ```
pub fn transpose(graph: &WeightedGraph) -> Result<WeightedGraph, GraphError> {
    let mut transpose = WeightedGraph::new(graph.num_nodes(), graph.max_degree());
    for (src, dst, weight) in graph.arcs() {
        transpose.add_arc(dst, src, weight)?;
    }
    Ok(transpose)
}
