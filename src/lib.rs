/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod graphs;
pub mod sccs;
pub mod transform;
pub mod visits;

pub mod prelude {
    pub use crate::graphs::prelude::*;
    pub use crate::sccs::*;
    pub use crate::transform::*;
    pub use crate::visits::depth_first;
    pub use crate::visits::*;
}
