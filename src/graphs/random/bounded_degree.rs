/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::weighted_graph::{GraphError, WeightedGraph};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Random weighted graphs whose outdegrees and indegrees are bounded by a
/// given maximum degree.
///
/// The outdegree of each node is chosen uniformly in `0..=max_degree`, and
/// each target uniformly among all nodes; a target whose indegree already
/// reached the maximum degree is skipped, so the resulting outdegree might be
/// smaller. Thus, both the graph and its
/// [transpose](crate::transform::transpose()) fit in a [`WeightedGraph`]
/// with the same maximum degree. Loops and parallel arcs are possible.
///
/// Weights are uniform in `0..=max_weight`, where `max_weight` defaults to
/// [`i32::MAX`]; smaller values make ties more likely.
///
/// The same parameters and seed always generate the same graph.
#[derive(Debug, Clone)]
pub struct BoundedDegree {
    num_nodes: usize,
    max_degree: usize,
    max_weight: i32,
    seed: u64,
}

impl BoundedDegree {
    /// Creates a new generator given the number of nodes, the maximum degree
    /// and a seed for the [pseudorandom number generator](SmallRng).
    pub fn new(num_nodes: usize, max_degree: usize, seed: u64) -> Self {
        Self {
            num_nodes,
            max_degree,
            max_weight: i32::MAX,
            seed,
        }
    }

    /// Sets the maximum weight of an arc.
    ///
    /// # Panics
    ///
    /// This method will panic if `max_weight` is negative.
    pub fn max_weight(mut self, max_weight: i32) -> Self {
        assert!(max_weight >= 0, "The maximum weight must be non-negative");
        self.max_weight = max_weight;
        self
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree
    }

    /// Returns the arcs of the graph as triples `(source, target, weight)`,
    /// in increasing source order.
    pub fn arcs(&self) -> Vec<(usize, usize, i32)> {
        let mut arcs = Vec::new();
        if self.num_nodes == 0 {
            return arcs;
        }
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut indegrees = vec![0; self.num_nodes];
        for source in 0..self.num_nodes {
            let outdegree = rng.random_range(0..=self.max_degree);
            for _ in 0..outdegree {
                let target = rng.random_range(0..self.num_nodes);
                let weight = rng.random_range(0..=self.max_weight);
                if indegrees[target] == self.max_degree {
                    continue;
                }
                indegrees[target] += 1;
                arcs.push((source, target, weight));
            }
        }
        arcs
    }

    /// Builds the graph.
    pub fn graph(&self) -> Result<WeightedGraph, GraphError> {
        WeightedGraph::from_arcs(self.num_nodes, self.max_degree, self.arcs())
    }
}

/// Returns a random graph with bounded degrees and weights in
/// `0..=i32::MAX`.
///
/// See [`BoundedDegree`].
pub fn random_graph(
    num_nodes: usize,
    max_degree: usize,
    seed: u64,
) -> Result<WeightedGraph, GraphError> {
    BoundedDegree::new(num_nodes, max_degree, seed).graph()
}
