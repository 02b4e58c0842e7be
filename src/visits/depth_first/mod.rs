/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Both visits implement [`DepthFirst`](super::DepthFirst):
//!
//! * [`SeqRec`] is a recursive implementation, using one stack frame for
//!   each node on the visit path; it is simple, but might overflow the stack
//!   on graphs with long paths.
//! * [`SeqIter`] is an iterative implementation that simulates recursion
//!   with an explicit stack of nodes and a resumption cursor for each node;
//!   it uses auxiliary memory linear in the number of nodes, independently
//!   of the length of the visit path.
//!
//! Since [`SeqIter`] resumes the enumeration of the successors of a node
//! exactly where it was suspended, the two visits produce identical
//! postorders.
//!
//! # Examples
//!
//! ```
//! use weighted_sccs::graphs::weighted_graph::WeightedGraph;
//! use weighted_sccs::visits::{depth_first::*, DepthFirst};
//!
//! let graph = WeightedGraph::from_arcs(4, 2, [(0, 1, 1), (0, 2, 5), (2, 3, 0)])?;
//! let rec = SeqRec.finish_order(&graph)?;
//! let iter = SeqIter::new().finish_order(&graph)?;
//! // The heavier arc (0, 2) is followed first
//! assert_eq!(rec, vec![3, 2, 1, 0].into_boxed_slice());
//! assert_eq!(rec, iter);
//! # Ok::<(), weighted_sccs::visits::VisitError>(())
//! ```

mod rec;
pub use rec::*;

mod seq;
pub use seq::*;
