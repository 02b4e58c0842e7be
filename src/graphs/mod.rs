/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implementations of graphs.

pub mod random;
pub mod weighted_graph;

pub mod prelude {
    pub use super::random::random_graph;
    pub use super::weighted_graph::{AdjRow, AdjRowMut, GraphError, WeightedArc, WeightedGraph};
}
