/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Transformations on graphs.
//!
//! - [`transpose`]: returns the transpose of a weighted graph, with the same
//!   maximum degree and weights.

mod transpose;
pub use transpose::*;
