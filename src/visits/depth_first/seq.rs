/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::weighted_graph::WeightedGraph;
use crate::visits::{check_state, Color, Colors, DepthFirst, VisitError};
use std::cmp::Ordering;

/// Iterative depth-first visit.
///
/// This is an iterative implementation that does not need a large stack
/// size. It simulates the recursive visit of [`SeqRec`](super::SeqRec):
/// the stack contains the nodes on the visit path, and for each node a
/// cursor records how many of its successors have already been examined.
///
/// At each step the node on top of the stack is examined:
/// * if its cursor reached its outdegree, the node is popped, marked as
///   [finished](Color::Finished) and appended to the postorder;
/// * otherwise, successors are scanned starting from the cursor; the first
///   unvisited successor is marked as [in progress](Color::InProgress) and
///   pushed, and the cursor is moved just past it, so that the scan will
///   resume from there when the successor is finished. If no unvisited
///   successor is found, the cursor is moved to the end.
///
/// A visit can be reused on graphs of any size: the cursors are sized on the
/// graph being visited, and the cursor of a node is reset when the node is
/// pushed.
#[derive(Debug, Clone, Default)]
pub struct SeqIter {
    /// The nodes on the visit path.
    stack: Vec<usize>,
    /// For each node on the visit path, the number of successors examined so
    /// far; meaningless for other nodes.
    cursors: Vec<usize>,
}

impl SeqIter {
    /// Creates a new iterative visit.
    pub fn new() -> Self {
        Self {
            stack: Vec::with_capacity(16),
            cursors: Vec::new(),
        }
    }

    /// Releases the memory used by the visit.
    pub fn reset(&mut self) {
        self.stack = Vec::with_capacity(16);
        self.cursors = Vec::new();
    }

    #[inline(always)]
    fn push(&mut self, node: usize, colors: &mut Colors) {
        colors.set(node, Color::InProgress);
        self.cursors[node] = 0;
        self.stack.push(node);
    }
}

impl DepthFirst for SeqIter {
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

        self.cursors.resize(graph.num_nodes(), 0);
        // Left over by an interrupted visit
        self.stack.clear();
        self.push(root, colors);

        while let Some(&node) = self.stack.last() {
            let succ = graph.successors(node)?;
            let cursor = self.cursors[node];

            match cursor.cmp(&succ.len()) {
                Ordering::Greater => {
                    return Err(VisitError::InconsistentState {
                        node,
                        cursor,
                        degree: succ.len(),
                    });
                }
                Ordering::Equal => {
                    self.stack.pop();
                    colors.set(node, Color::Finished);
                    postorder.push(node);
                }
                Ordering::Less => {
                    match succ.as_slice()[cursor..]
                        .iter()
                        .position(|arc| colors.get(arc.target) == Color::Unvisited)
                    {
                        Some(offset) => {
                            self.cursors[node] = cursor + offset + 1;
                            self.push(succ[cursor + offset].target, colors);
                        }
                        None => self.cursors[node] = succ.len(),
                    }
                }
            }
        }

        Ok(())
    }
}
