/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute and work with strongly connected components.
//!
//! Components are computed by [Kosaraju's algorithm](kosaraju()), which can be
//! run with either [depth-first visit](crate::visits::depth_first); the
//! convenience functions [`kosaraju_iter`] and [`kosaraju_rec`] select the
//! iterative and the recursive one, respectively. Since both visits follow
//! arcs by decreasing weight and produce the same postorders, the two
//! functions return identical results.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use weighted_sccs::graphs::weighted_graph::WeightedGraph;
//! use weighted_sccs::sccs::*;
//!
//! let graph = WeightedGraph::from_arcs(4, 2, [(0, 1, 1), (1, 2, 1), (2, 0, 1), (1, 3, 1)])?;
//!
//! let mut sccs = kosaraju_iter(&graph, no_logging![])?;
//! assert_eq!(sccs, kosaraju_rec(&graph, no_logging![])?);
//!
//! // Let's sort the SCCs by size
//! let sizes = sccs.sort_by_size();
//! assert_eq!(sizes, vec![3, 1].into_boxed_slice());
//! assert_eq!(sccs.labels(), vec![0, 0, 0, 1].into_boxed_slice());
//! # Ok::<(), weighted_sccs::visits::VisitError>(())
//! ```

mod kosaraju;
pub use kosaraju::*;

/// Strongly connected components.
///
/// An instance of this structure stores the list of components, each
/// given by the sequence of its nodes. When computed by
/// [Kosaraju's algorithm](kosaraju()), components appear in the order in which
/// their first node was met while scanning the finish order of the first
/// pass backwards, and the nodes of a component appear in the finish order of
/// the second pass.
///
/// The [`labels`](Sccs::labels) method returns instead, for each node, the
/// index of its component.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sccs {
    components: Vec<Box<[usize]>>,
}

impl Sccs {
    /// Creates a new instance from a list of components.
    ///
    /// The components should form a partition of the nodes of a graph, that
    /// is, every node from zero to the overall number of nodes minus one should
    /// appear in exactly one component.
    pub fn new(components: Vec<Box<[usize]>>) -> Self {
        Sccs { components }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Returns the overall number of nodes in the components.
    pub fn num_nodes(&self) -> usize {
        self.components.iter().map(|c| c.len()).sum()
    }

    /// Returns the components.
    #[inline(always)]
    pub fn components(&self) -> &[Box<[usize]>] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Box<[usize]>> {
        self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.components.iter().map(|c| c.as_ref())
    }

    /// Returns a boxed slice containing, for each node, the index of the
    /// component it belongs to.
    ///
    /// # Panics
    ///
    /// This method will panic if the components contain a node greater than
    /// or equal to [`num_nodes`](Sccs::num_nodes).
    pub fn labels(&self) -> Box<[usize]> {
        let mut labels = vec![0; self.num_nodes()];
        for (index, component) in self.components.iter().enumerate() {
            for &node in component.iter() {
                labels[node] = index;
            }
        }
        labels.into_boxed_slice()
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        self.components.iter().map(|c| c.len()).collect()
    }

    /// Reorders the components by decreasing size.
    ///
    /// The sort is stable, so components of the same size keep their
    /// relative order. The method returns the sizes of the components after
    /// the reordering.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        self.components.sort_by(|x, y| y.len().cmp(&x.len()));
        self.compute_sizes()
    }

    /// Returns whether the two instances represent the same partition of the
    /// nodes, independently of the order of components and of the order of
    /// nodes in each component.
    pub fn same_partition(&self, other: &Sccs) -> bool {
        if self.num_components() != other.num_components() || self.num_nodes() != other.num_nodes() {
            return false;
        }
        let num_nodes = self.num_nodes();
        if self.iter().chain(other.iter()).flatten().any(|&node| node >= num_nodes) {
            return false;
        }
        let labels = self.labels();
        let other_labels = other.labels();
        // Component i of self must map to a single component of other, and
        // vice versa.
        let mut map = vec![usize::MAX; self.num_components()];
        let mut inv_map = vec![usize::MAX; self.num_components()];
        for (&x, &y) in labels.iter().zip(other_labels.iter()) {
            if map[x] == usize::MAX && inv_map[y] == usize::MAX {
                map[x] = y;
                inv_map[y] = x;
            } else if map[x] != y || inv_map[y] != x {
                return false;
            }
        }
        true
    }
}
