/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::weighted_graph::WeightedGraph;
use crate::visits::{check_state, Color, Colors, DepthFirst, VisitError};

/// Recursive depth-first visit.
///
/// The depth of the recursion is the length of the longest visit path, so
/// on large graphs you might need to increase the stack size (e.g., using
/// the `RUST_MIN_STACK` environment variable for spawned threads). See
/// [`SeqIter`](super::SeqIter) for an implementation that does not need a
/// large stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeqRec;

impl DepthFirst for SeqRec {
    fn visit(
        &mut self,
        graph: &WeightedGraph,
        root: usize,
        colors: &mut Colors,
        postorder: &mut Vec<usize>,
    ) -> Result<(), VisitError> {
        check_state(graph, colors)?;
        graph.outdegree(root)?;
        if colors.get(root) != Color::Unvisited {
            return Ok(());
        }
        visit_rec(graph, root, colors, postorder)
    }
}

fn visit_rec(
    graph: &WeightedGraph,
    node: usize,
    colors: &mut Colors,
    postorder: &mut Vec<usize>,
) -> Result<(), VisitError> {
    colors.set(node, Color::InProgress);
    for arc in graph.successors(node)? {
        if colors.get(arc.target) == Color::Unvisited {
            visit_rec(graph, arc.target, colors, postorder)?;
        }
    }
    colors.set(node, Color::Finished);
    postorder.push(node);
    Ok(())
}
