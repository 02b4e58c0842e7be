/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![allow(dead_code)]

use anyhow::Result;
use weighted_sccs::prelude::*;

/// Eight-node example graph (maximum degree 4, 14 arcs).
///
/// - Successors of 1 by decreasing weight: 3, 5, 4, 7
/// - Nodes 0 and 6 are singleton components (0 is a sink, 6 is isolated)
/// - All other nodes form a single component: 1 → 4 → 2 → 1 and
///   1 → 7 → 2 → 1 are cycles
pub fn example_graph() -> Result<WeightedGraph> {
    Ok(WeightedGraph::from_arcs(
        8,
        4,
        [
            (1, 3, 5),
            (1, 4, 3),
            (1, 5, 4),
            (1, 7, 1),
            (2, 1, 1),
            (2, 3, 1),
            (3, 0, 1),
            (3, 1, 1),
            (3, 2, 1),
            (3, 5, 1),
            (4, 2, 1),
            (5, 1, 1),
            (7, 2, 1),
            (7, 4, 1),
        ],
    )?)
}

/// Builds a graph from unweighted arcs, giving all arcs weight zero and using
/// the largest indegree or outdegree as maximum degree.
pub fn from_arcs(num_nodes: usize, arcs: &[(usize, usize)]) -> Result<WeightedGraph> {
    let mut outdegrees = vec![0; num_nodes];
    let mut indegrees = vec![0; num_nodes];
    for &(src, dst) in arcs {
        outdegrees[src] += 1;
        indegrees[dst] += 1;
    }
    let max_degree = outdegrees.into_iter().chain(indegrees).max().unwrap_or(0);
    Ok(WeightedGraph::from_arcs(
        num_nodes,
        max_degree,
        arcs.iter().map(|&(src, dst)| (src, dst, 0)),
    )?)
}

/// Reference recursive implementation of Tarjan's algorithm.
pub fn tarjan(graph: &WeightedGraph) -> Sccs {
    struct State {
        index: Vec<usize>,
        low_link: Vec<usize>,
        on_stack: Vec<bool>,
        stack: Vec<usize>,
        next_index: usize,
        components: Vec<Box<[usize]>>,
    }

    fn strong_connect(graph: &WeightedGraph, node: usize, state: &mut State) {
        state.next_index += 1;
        state.index[node] = state.next_index;
        state.low_link[node] = state.next_index;
        state.stack.push(node);
        state.on_stack[node] = true;

        for arc in graph.successors(node).unwrap() {
            let succ = arc.target;
            if state.index[succ] == 0 {
                strong_connect(graph, succ, state);
                state.low_link[node] = state.low_link[node].min(state.low_link[succ]);
            } else if state.on_stack[succ] {
                state.low_link[node] = state.low_link[node].min(state.index[succ]);
            }
        }

        if state.low_link[node] == state.index[node] {
            let mut component = vec![];
            loop {
                let member = state.stack.pop().unwrap();
                state.on_stack[member] = false;
                component.push(member);
                if member == node {
                    break;
                }
            }
            state.components.push(component.into_boxed_slice());
        }
    }

    let num_nodes = graph.num_nodes();
    let mut state = State {
        index: vec![0; num_nodes],
        low_link: vec![0; num_nodes],
        on_stack: vec![false; num_nodes],
        stack: vec![],
        next_index: 0,
        components: vec![],
    };
    for node in 0..num_nodes {
        if state.index[node] == 0 {
            strong_connect(graph, node, &mut state);
        }
    }
    Sccs::new(state.components)
}

/// Returns whether every node from zero to `num_nodes` minus one appears in
/// exactly one component.
pub fn is_partition(sccs: &Sccs, num_nodes: usize) -> bool {
    let mut seen = vec![false; num_nodes];
    for &node in sccs.iter().flatten() {
        if node >= num_nodes || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    seen.into_iter().all(|x| x)
}
