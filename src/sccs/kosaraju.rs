/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Sccs;
use crate::graphs::weighted_graph::WeightedGraph;
use crate::transform::transpose;
use crate::visits::{
    depth_first::{SeqIter, SeqRec},
    Color, Colors, DepthFirst, VisitError,
};
use dsi_progress_logger::ProgressLog;

/// The phases of a [`Kosaraju`] computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KosarajuState {
    /// Nothing has been computed yet.
    NotStarted,
    /// The finish order of a full visit of the graph is available.
    ForwardPassDone,
    /// The transpose of the graph has been built, and all nodes are
    /// unvisited again.
    ReversedBuilt,
    /// At least one component has been emitted.
    BackwardPassRunning,
    /// All components have been emitted.
    Done,
}

/// A step-by-step computation of the strongly connected components of a
/// graph using Kosaraju's algorithm.
///
/// Each call to [`step`](Kosaraju::step) advances the computation by one
/// phase (see [`KosarajuState`]); during the backward pass each step emits
/// exactly one component. [`run`](Kosaraju::run) performs all steps and
/// returns the components.
///
/// The same [depth-first visit](DepthFirst) is used for both passes.
///
/// # Examples
///
/// ```
/// use weighted_sccs::graphs::weighted_graph::WeightedGraph;
/// use weighted_sccs::sccs::{Kosaraju, KosarajuState};
/// use weighted_sccs::visits::depth_first::SeqIter;
///
/// let graph = WeightedGraph::from_arcs(3, 1, [(0, 1, 0), (1, 0, 0)])?;
/// let mut kosaraju = Kosaraju::new(&graph, SeqIter::new());
/// assert_eq!(kosaraju.step()?, KosarajuState::ForwardPassDone);
/// assert_eq!(kosaraju.finish_order(), &[1, 0, 2]);
/// assert_eq!(kosaraju.step()?, KosarajuState::ReversedBuilt);
/// assert_eq!(kosaraju.step()?, KosarajuState::BackwardPassRunning);
/// assert_eq!(kosaraju.components().last().unwrap().as_ref(), &[2]);
/// assert_eq!(kosaraju.step()?, KosarajuState::BackwardPassRunning);
/// assert_eq!(kosaraju.components().last().unwrap().as_ref(), &[1, 0]);
/// assert_eq!(kosaraju.step()?, KosarajuState::Done);
/// # Ok::<(), weighted_sccs::visits::VisitError>(())
/// ```
pub struct Kosaraju<'a, V> {
    graph: &'a WeightedGraph,
    visit: V,
    state: KosarajuState,
    colors: Colors,
    finish_order: Vec<usize>,
    /// Empty until the state is [`KosarajuState::ReversedBuilt`].
    transpose: WeightedGraph,
    /// The number of nodes of the finish order still to be scanned by the
    /// backward pass, which proceeds from the end.
    to_scan: usize,
    components: Vec<Box<[usize]>>,
}

impl<'a, V: DepthFirst> Kosaraju<'a, V> {
    pub fn new(graph: &'a WeightedGraph, visit: V) -> Self {
        Self {
            graph,
            visit,
            state: KosarajuState::NotStarted,
            colors: Colors::new(graph.num_nodes()),
            finish_order: Vec::new(),
            transpose: WeightedGraph::default(),
            to_scan: 0,
            components: Vec::new(),
        }
    }

    pub fn state(&self) -> KosarajuState {
        self.state
    }

    /// Returns the finish order of the forward pass (empty before the pass
    /// is completed).
    pub fn finish_order(&self) -> &[usize] {
        &self.finish_order
    }

    /// Returns the components emitted so far.
    pub fn components(&self) -> &[Box<[usize]>] {
        &self.components
    }

    /// Advances the computation by one phase and returns the new state.
    ///
    /// Once the state is [`KosarajuState::Done`], further calls do nothing.
    /// After an error, the computation should be discarded.
    pub fn step(&mut self) -> Result<KosarajuState, VisitError> {
        match self.state {
            KosarajuState::NotStarted => {
                let num_nodes = self.graph.num_nodes();
                self.finish_order.reserve_exact(num_nodes);
                for node in 0..num_nodes {
                    if self.colors.get(node) == Color::Unvisited {
                        self.visit
                            .visit(self.graph, node, &mut self.colors, &mut self.finish_order)?;
                    }
                }
                self.state = KosarajuState::ForwardPassDone;
            }
            KosarajuState::ForwardPassDone => {
                self.colors.reset();
                self.transpose = transpose(self.graph)?;
                self.to_scan = self.finish_order.len();
                self.state = KosarajuState::ReversedBuilt;
            }
            KosarajuState::ReversedBuilt | KosarajuState::BackwardPassRunning => {
                self.state = KosarajuState::Done;
                while self.to_scan > 0 {
                    self.to_scan -= 1;
                    let root = self.finish_order[self.to_scan];
                    if self.colors.get(root) == Color::Unvisited {
                        let mut component = Vec::new();
                        self.visit
                            .visit(&self.transpose, root, &mut self.colors, &mut component)?;
                        self.components.push(component.into_boxed_slice());
                        self.state = KosarajuState::BackwardPassRunning;
                        break;
                    }
                }
            }
            KosarajuState::Done => {}
        }
        log::trace!("Kosaraju state: {:?}", self.state);
        Ok(self.state)
    }

    /// Completes the computation and returns the strongly connected
    /// components.
    pub fn run(mut self, pl: &mut impl ProgressLog) -> Result<Sccs, VisitError> {
        let num_nodes = self.graph.num_nodes();
        pl.item_name("node");
        // Each node is visited once per pass
        pl.expected_updates(Some(2 * num_nodes));
        pl.start("Computing strongly connected components...");

        loop {
            let visited = self.finish_order.len();
            match self.step()? {
                KosarajuState::ForwardPassDone => {
                    pl.update_with_count(self.finish_order.len() - visited);
                    log::debug!("Forward pass completed on {} nodes", num_nodes);
                }
                KosarajuState::ReversedBuilt => {
                    log::debug!("Transpose built with {} arcs", self.transpose.num_arcs());
                }
                KosarajuState::BackwardPassRunning => {
                    if let Some(component) = self.components.last() {
                        pl.update_with_count(component.len());
                    }
                }
                KosarajuState::Done => break,
                KosarajuState::NotStarted => unreachable!(),
            }
        }

        pl.done();
        log::info!(
            "{} strongly connected components on {} nodes",
            self.components.len(),
            num_nodes
        );
        Ok(Sccs::new(self.components))
    }
}

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm and the given depth-first visit.
///
/// The forward pass visits the graph from all nodes in increasing order; the
/// backward pass visits the transpose from each unvisited node, scanning the
/// finish order of the forward pass backwards, and each such visit yields a
/// component.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `visit`: the depth-first visit to use for both passes.
///
/// * `pl`: a progress logger.
///
/// # Errors
///
/// A [`CapacityExceeded`](crate::graphs::weighted_graph::GraphError::CapacityExceeded)
/// error is returned if the transpose of the graph does not fit in the maximum
/// degree of the graph.
pub fn kosaraju(
    graph: &WeightedGraph,
    visit: impl DepthFirst,
    pl: &mut impl ProgressLog,
) -> Result<Sccs, VisitError> {
    Kosaraju::new(graph, visit).run(pl)
}

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm and an [iterative depth-first visit](SeqIter).
pub fn kosaraju_iter(graph: &WeightedGraph, pl: &mut impl ProgressLog) -> Result<Sccs, VisitError> {
    kosaraju(graph, SeqIter::new(), pl)
}

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm and a [recursive depth-first visit](SeqRec).
pub fn kosaraju_rec(graph: &WeightedGraph, pl: &mut impl ProgressLog) -> Result<Sccs, VisitError> {
    kosaraju(graph, SeqRec, pl)
}
