/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::random::BoundedDegree;
use crate::graphs::weighted_graph::{GraphError, WeightedGraph};
use crate::sccs::{kosaraju_iter, kosaraju_rec};
use anyhow::{ensure, Context, Result};
use clap::{ArgMatches, Args, Command, FromArgMatches};
use dsi_progress_logger::prelude::*;

pub const COMMAND_NAME: &str = "check";

#[derive(Args, Debug)]
#[command(
    about = "Checks that the iterative and the recursive visits yield the same components on a fixed example and on random graphs.",
    long_about = None
)]
struct CliArgs {
    #[arg(short = 'n', long, default_value_t = 10_000)]
    /// The number of nodes of each random graph.
    num_nodes: usize,

    #[arg(short = 'd', long)]
    /// The maximum degree of each random graph. Defaults to a tenth of the
    /// number of nodes.
    max_degree: Option<usize>,

    #[arg(long)]
    /// The maximum weight of an arc. Defaults to the largest 32-bit integer.
    max_weight: Option<i32>,

    #[arg(short, long, default_value_t = 0)]
    /// The seed of the first random graph; the following graphs use
    /// consecutive seeds.
    seed: u64,

    #[arg(short, long, default_value_t = 1)]
    /// The number of random graphs to check.
    graphs: usize,
}

/// The arcs of the eight-node example graph, as triples `(source, target,
/// weight)`.
pub const EXAMPLE_ARCS: [(usize, usize, i32); 14] = [
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
];

/// Returns the eight-node example graph, with maximum degree four.
pub fn example_graph() -> Result<WeightedGraph, GraphError> {
    WeightedGraph::from_arcs(8, 4, EXAMPLE_ARCS)
}

pub fn cli(command: Command) -> Command {
    command.subcommand(CliArgs::augment_args(Command::new(COMMAND_NAME)).display_order(0))
}

pub fn main(submatches: &ArgMatches) -> Result<()> {
    let args = CliArgs::from_arg_matches(submatches)?;
    let mut pl = super::progress_logger(submatches);

    check(&example_graph()?, "example graph", &mut pl)?;

    let max_degree = args.max_degree.unwrap_or(args.num_nodes / 10);
    for i in 0..args.graphs {
        let seed = args.seed.wrapping_add(i as u64);
        let mut generator = BoundedDegree::new(args.num_nodes, max_degree, seed);
        if let Some(max_weight) = args.max_weight {
            ensure!(max_weight >= 0, "The maximum weight must be non-negative");
            generator = generator.max_weight(max_weight);
        }
        let graph = generator
            .graph()
            .with_context(|| format!("Could not generate random graph with seed {seed}"))?;
        log::info!(
            "Random graph with seed {}: {} nodes, {} arcs",
            seed,
            graph.num_nodes(),
            graph.num_arcs()
        );
        check(&graph, &format!("random graph with seed {seed}"), &mut pl)?;
    }

    Ok(())
}

/// Computes the components of `graph` with both visits and fails if the
/// results differ.
fn check(graph: &WeightedGraph, name: &str, pl: &mut impl ProgressLog) -> Result<()> {
    let iter = kosaraju_iter(graph, pl)?;
    let rec = kosaraju_rec(graph, pl)?;
    ensure!(
        iter == rec,
        "The iterative and the recursive visits yield different components on the {name}"
    );
    log::info!(
        "The {} has {} strongly connected components; the visits agree",
        name,
        iter.num_components()
    );
    Ok(())
}
