/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on weighted graphs.
//!
//! A [depth-first visit](DepthFirst) explores, starting from a root, all
//! nodes reachable from the root that are still [unvisited](Color::Unvisited)
//! in a given color state, enumerating the successors of each node in the
//! order of the [graph](crate::graphs::weighted_graph::WeightedGraph), that
//! is, by decreasing arc weight. Each node becomes
//! [in progress](Color::InProgress) when it is first reached and
//! [finished](Color::Finished) when all its successors have been examined; at
//! that moment it is appended to an output sequence, which thus records the
//! postorder (the finish order) of the visit.
//!
//! The color state is owned by the caller, so that several visits, possibly
//! from different roots, can share it: this is how a full sweep over all nodes
//! ([`visit_all`](DepthFirst::visit_all)) is implemented.
//!
//! There are two implementations in the [`depth_first`] module, a
//! [recursive](depth_first::SeqRec) one and an
//! [iterative](depth_first::SeqIter) one; given the same graph, roots and
//! color state, they produce exactly the same output.

pub mod depth_first;

use crate::graphs::weighted_graph::{GraphError, WeightedGraph};
use sux::bits::BitVec;
use thiserror::Error;

/// Errors raised by visits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisitError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("Inconsistent visit state at node {node}: cursor {cursor} exceeds outdegree {degree}")]
    /// The resumption cursor of a node moved past its last successor.
    InconsistentState {
        node: usize,
        cursor: usize,
        degree: usize,
    },
    #[error("The color state has {found} nodes, but the graph has {expected} nodes")]
    /// The color state was built for a graph of a different size.
    StateSizeMismatch { expected: usize, found: usize },
}

/// The state of a node during a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The node has not been reached yet.
    Unvisited,
    /// The node is on the visit path.
    InProgress,
    /// All successors of the node have been examined.
    Finished,
}

/// The color of each node of a graph, using two bits per node.
#[derive(Debug)]
pub struct Colors {
    num_nodes: usize,
    /// Bit `2x` is set if node `x` has been reached, and bit `2x + 1` if it
    /// is finished.
    bits: BitVec,
}

impl Colors {
    /// Creates a new color state in which all nodes are
    /// [unvisited](Color::Unvisited).
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            bits: BitVec::new(2 * num_nodes),
        }
    }

    pub fn len(&self) -> usize {
        self.num_nodes
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    #[inline(always)]
    pub fn get(&self, node: usize) -> Color {
        match (self.bits.get(2 * node), self.bits.get(2 * node + 1)) {
            (false, _) => Color::Unvisited,
            (true, false) => Color::InProgress,
            (true, true) => Color::Finished,
        }
    }

    #[inline(always)]
    pub fn set(&mut self, node: usize, color: Color) {
        let (known, finished) = match color {
            Color::Unvisited => (false, false),
            Color::InProgress => (true, false),
            Color::Finished => (true, true),
        };
        self.bits.set(2 * node, known);
        self.bits.set(2 * node + 1, finished);
    }

    /// Marks all nodes as [unvisited](Color::Unvisited).
    pub fn reset(&mut self) {
        self.bits.reset();
    }
}

/// A sequential depth-first visit.
pub trait DepthFirst {
    /// Visits the graph from `root`, appending nodes to `postorder` as they
    /// become [finished](Color::Finished).
    ///
    /// If `root` is not [unvisited](Color::Unvisited) in `colors`, nothing
    /// happens.
    ///
    /// # Arguments
    ///
    /// * `graph`: the graph to visit.
    ///
    /// * `root`: the node to start the visit from.
    ///
    /// * `colors`: the color state, which must contain as many nodes as
    ///   `graph`.
    ///
    /// * `postorder`: the sequence to which finished nodes are appended.
    fn visit(
        &mut self,
        graph: &WeightedGraph,
        root: usize,
        colors: &mut Colors,
        postorder: &mut Vec<usize>,
    ) -> Result<(), VisitError>;

    /// Visits the graph from all its unvisited nodes, in increasing order.
    fn visit_all(
        &mut self,
        graph: &WeightedGraph,
        colors: &mut Colors,
        postorder: &mut Vec<usize>,
    ) -> Result<(), VisitError> {
        check_state(graph, colors)?;
        for node in 0..graph.num_nodes() {
            if colors.get(node) == Color::Unvisited {
                self.visit(graph, node, colors, postorder)?;
            }
        }
        Ok(())
    }

    /// Returns the finish order of a full visit of the graph, starting from
    /// all nodes in increasing order.
    fn finish_order(&mut self, graph: &WeightedGraph) -> Result<Box<[usize]>, VisitError> {
        let mut colors = Colors::new(graph.num_nodes());
        let mut postorder = Vec::with_capacity(graph.num_nodes());
        self.visit_all(graph, &mut colors, &mut postorder)?;
        Ok(postorder.into_boxed_slice())
    }
}

/// Checks that a color state and a graph have the same number of nodes.
pub(crate) fn check_state(graph: &WeightedGraph, colors: &Colors) -> Result<(), VisitError> {
    if colors.len() != graph.num_nodes() {
        return Err(VisitError::StateSizeMismatch {
            expected: graph.num_nodes(),
            found: colors.len(),
        });
    }
    Ok(())
}
