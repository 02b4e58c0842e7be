/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::ops::Index;
use thiserror::Error;

/// Errors raised when accessing or modifying a [`WeightedGraph`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {node} already has {max_degree} arcs, the maximum degree of the graph")]
    /// Adding an arc would exceed the maximum degree of a node.
    CapacityExceeded { node: usize, max_degree: usize },
    #[error("Node {node} does not exist (the graph has {num_nodes} nodes)")]
    /// A node index is greater than or equal to the number of nodes.
    NodeOutOfRange { node: usize, num_nodes: usize },
    #[error("Arc {index} of node {node} does not exist (the node has {degree} arcs)")]
    /// An arc index is greater than or equal to the outdegree of its node.
    ArcOutOfRange {
        node: usize,
        index: usize,
        degree: usize,
    },
}

/// An arc with a weight, stored as a pair (target, weight).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WeightedArc {
    /// The target of the arc.
    pub target: usize,
    /// The weight of the arc.
    pub weight: i32,
}

impl WeightedArc {
    pub fn new(target: usize, weight: i32) -> Self {
        Self { target, weight }
    }
}

impl From<(usize, i32)> for WeightedArc {
    fn from((target, weight): (usize, i32)) -> Self {
        Self { target, weight }
    }
}

impl From<WeightedArc> for (usize, i32) {
    fn from(arc: WeightedArc) -> (usize, i32) {
        (arc.target, arc.weight)
    }
}

/// A directed graph with weighted arcs and a fixed maximum outdegree.
///
/// Arcs are stored in a single flat array containing, for each node,
/// [`max_degree`](WeightedGraph::max_degree) slots; a separate array records
/// how many slots of each node are live. The live arcs of each node are kept
/// sorted by decreasing weight, so that visits enumerating the
/// [successors](WeightedGraph::successors) of a node follow the heaviest arcs
/// first.
///
/// The number of nodes and the maximum degree are fixed at construction;
/// adding more than [`max_degree`](WeightedGraph::max_degree) arcs to a node
/// is a [`GraphError::CapacityExceeded`] error.
///
/// # Examples
///
/// ```
/// use weighted_sccs::graphs::weighted_graph::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(3, 2);
/// graph.add_arc(0, 1, 3)?;
/// graph.add_arc(0, 2, 7)?;
/// assert!(graph.add_arc(0, 0, 1).is_err());
///
/// let targets: Vec<_> = graph.successors(0)?.iter().map(|arc| arc.target).collect();
/// assert_eq!(targets, vec![2, 1]);
/// # Ok::<(), weighted_sccs::graphs::weighted_graph::GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    max_degree: usize,
    /// `max_degree` slots for each node; only the first `degrees[node]`
    /// slots of a node are meaningful.
    slots: Vec<WeightedArc>,
    /// The number of live slots of each node.
    degrees: Vec<usize>,
}

impl WeightedGraph {
    /// Creates a new graph with `num_nodes` nodes, no arcs, and room for
    /// `max_degree` arcs per node.
    ///
    /// # Panics
    ///
    /// This method will panic if `num_nodes * max_degree` overflows.
    pub fn new(num_nodes: usize, max_degree: usize) -> Self {
        let num_slots = num_nodes.checked_mul(max_degree).unwrap_or_else(|| {
            panic!("Cannot allocate {num_nodes} nodes with maximum degree {max_degree}")
        });
        Self {
            max_degree,
            slots: vec![WeightedArc::default(); num_slots],
            degrees: vec![0; num_nodes],
        }
    }

    /// Creates a new graph from triples `(source, target, weight)`.
    pub fn from_arcs(
        num_nodes: usize,
        max_degree: usize,
        arcs: impl IntoIterator<Item = (usize, usize, i32)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(num_nodes, max_degree);
        for (source, target, weight) in arcs {
            graph.add_arc(source, target, weight)?;
        }
        Ok(graph)
    }

    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.degrees.len()
    }

    #[inline(always)]
    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Returns the number of arcs in the graph.
    pub fn num_arcs(&self) -> u64 {
        self.degrees.iter().map(|&d| d as u64).sum()
    }

    pub fn outdegree(&self, node: usize) -> Result<usize, GraphError> {
        self.check_node(node)?;
        Ok(self.degrees[node])
    }

    /// Returns the indegree of each node.
    pub fn indegrees(&self) -> Box<[usize]> {
        let mut indegrees = vec![0; self.num_nodes()];
        for (_, row) in self.iter() {
            for arc in row {
                indegrees[arc.target] += 1;
            }
        }
        indegrees.into_boxed_slice()
    }

    /// Returns a read-only view on the live arcs of `node`, in decreasing
    /// weight order.
    pub fn successors(&self, node: usize) -> Result<AdjRow<'_>, GraphError> {
        self.check_node(node)?;
        let start = node * self.max_degree;
        Ok(AdjRow {
            node,
            arcs: &self.slots[start..start + self.degrees[node]],
        })
    }

    /// Returns a mutable view on the slots of `node`.
    ///
    /// Changes made through the view are reflected in the graph.
    pub fn row_mut(&mut self, node: usize) -> Result<AdjRowMut<'_>, GraphError> {
        self.check_node(node)?;
        let start = node * self.max_degree;
        Ok(AdjRowMut {
            node,
            num_nodes: self.degrees.len(),
            slots: &mut self.slots[start..start + self.max_degree],
            len: &mut self.degrees[node],
        })
    }

    /// Adds an arc to the graph, returning its position among the successors
    /// of `source`.
    ///
    /// See [`AdjRowMut::insert`].
    pub fn add_arc(&mut self, source: usize, target: usize, weight: i32) -> Result<usize, GraphError> {
        self.row_mut(source)?.insert(WeightedArc::new(target, weight))
    }

    /// Returns an iterator over pairs given by a node and its successors.
    pub fn iter(&self) -> impl Iterator<Item = (usize, AdjRow<'_>)> + '_ {
        self.degrees.iter().enumerate().map(move |(node, &len)| {
            let start = node * self.max_degree;
            (
                node,
                AdjRow {
                    node,
                    arcs: &self.slots[start..start + len],
                },
            )
        })
    }

    /// Returns an iterator over all arcs as triples `(source, target,
    /// weight)`.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        self.iter()
            .flat_map(|(node, row)| row.into_iter().map(move |arc| (node, arc.target, arc.weight)))
    }

    /// Releases the storage of the graph, leaving it with no nodes and
    /// maximum degree zero.
    pub fn clear(&mut self) {
        self.max_degree = 0;
        self.slots = Vec::new();
        self.degrees = Vec::new();
    }

    #[inline(always)]
    fn check_node(&self, node: usize) -> Result<(), GraphError> {
        if node >= self.degrees.len() {
            return Err(GraphError::NodeOutOfRange {
                node,
                num_nodes: self.degrees.len(),
            });
        }
        Ok(())
    }
}

impl PartialEq for WeightedGraph {
    /// Two graphs are equal if they have the same maximum degree and the same
    /// live arcs in the same order; the content of unused slots is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.max_degree == other.max_degree
            && self.num_nodes() == other.num_nodes()
            && self
                .iter()
                .zip(other.iter())
                .all(|((_, a), (_, b))| a.as_slice() == b.as_slice())
    }
}

impl Eq for WeightedGraph {}

impl Index<usize> for WeightedGraph {
    type Output = [WeightedArc];

    /// Retrieves the live arcs of a node.
    ///
    /// # Panics
    ///
    /// Panics if the node does not exist; use
    /// [`successors`](WeightedGraph::successors) for a fallible version.
    fn index(&self, node: usize) -> &Self::Output {
        match self.successors(node) {
            Ok(row) => row.arcs,
            Err(err) => panic!("{err}"),
        }
    }
}

/// A read-only view on the live arcs of a node of a [`WeightedGraph`].
#[derive(Debug, Clone, Copy)]
pub struct AdjRow<'a> {
    node: usize,
    arcs: &'a [WeightedArc],
}

impl<'a> AdjRow<'a> {
    /// Returns the node whose arcs are viewed.
    pub fn node(&self) -> usize {
        self.node
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Returns the arc at the given position.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Result<WeightedArc, GraphError> {
        self.arcs
            .get(index)
            .copied()
            .ok_or(GraphError::ArcOutOfRange {
                node: self.node,
                index,
                degree: self.arcs.len(),
            })
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &'a [WeightedArc] {
        self.arcs
    }

    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'a, WeightedArc>> {
        self.arcs.iter().copied()
    }
}

impl<'a> IntoIterator for AdjRow<'a> {
    type Item = WeightedArc;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, WeightedArc>>;

    fn into_iter(self) -> Self::IntoIter {
        self.arcs.iter().copied()
    }
}

impl Index<usize> for AdjRow<'_> {
    type Output = WeightedArc;

    fn index(&self, index: usize) -> &Self::Output {
        &self.arcs[index]
    }
}

/// A mutable view on the slots of a node of a [`WeightedGraph`].
///
/// The view borrows the slots of the node and the cell containing its
/// outdegree, so it cannot outlive the graph nor write outside the node's
/// slots.
#[derive(Debug)]
pub struct AdjRowMut<'a> {
    node: usize,
    num_nodes: usize,
    slots: &'a mut [WeightedArc],
    len: &'a mut usize,
}

impl AdjRowMut<'_> {
    /// Inserts an arc, keeping the live arcs sorted by decreasing weight, and
    /// returns the position of the new arc.
    ///
    /// The new arc is placed at the first position whose weight is not
    /// greater than its own, so it precedes existing arcs of the same weight.
    /// Insertion requires a logarithmic number of comparisons and a linear
    /// number of moves.
    pub fn insert(&mut self, arc: WeightedArc) -> Result<usize, GraphError> {
        if arc.target >= self.num_nodes {
            return Err(GraphError::NodeOutOfRange {
                node: arc.target,
                num_nodes: self.num_nodes,
            });
        }
        let len = *self.len;
        if len == self.slots.len() {
            return Err(GraphError::CapacityExceeded {
                node: self.node,
                max_degree: self.slots.len(),
            });
        }
        let pos = self.slots[..len].partition_point(|live| live.weight > arc.weight);
        self.slots.copy_within(pos..len, pos + 1);
        self.slots[pos] = arc;
        *self.len += 1;
        Ok(pos)
    }

    /// Removes all arcs, keeping the slots.
    pub fn clear(&mut self) {
        *self.len = 0;
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        *self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        *self.len == 0
    }

    /// Returns the maximum number of arcs the node can hold.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Result<WeightedArc, GraphError> {
        self.as_row().get(index)
    }

    pub fn as_slice(&self) -> &[WeightedArc] {
        &self.slots[..*self.len]
    }

    /// Returns a read-only view on the live arcs.
    pub fn as_row(&self) -> AdjRow<'_> {
        AdjRow {
            node: self.node,
            arcs: self.as_slice(),
        }
    }
}
