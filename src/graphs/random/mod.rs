/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random weighted graphs.

mod bounded_degree;
pub use bounded_degree::*;
