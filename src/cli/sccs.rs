/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{ArcsArgs, Strategy};
use crate::graphs::weighted_graph::WeightedGraph;
use crate::sccs::{kosaraju_iter, kosaraju_rec};
use anyhow::{ensure, Context, Result};
use clap::{ArgMatches, Args, Command, FromArgMatches};
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;

pub const COMMAND_NAME: &str = "sccs";

#[derive(Args, Debug)]
#[command(
    about = "Reads a list of weighted arcs and prints the strongly connected components, one per line. Each arc is specified by a source node, a target node and a weight separated by a TAB (but the format is customizable).",
    long_about = None
)]
struct CliArgs {
    /// The file containing the arcs; if not specified, arcs are read from
    /// standard input.
    arcs: Option<PathBuf>,

    #[arg(long)]
    /// The number of nodes in the graph.
    num_nodes: usize,

    #[arg(long)]
    /// The maximum degree of the graph. Defaults to the largest indegree or
    /// outdegree in the input.
    max_degree: Option<usize>,

    #[arg(value_enum, long, default_value = "iter")]
    /// The depth-first visit to use.
    strategy: Strategy,

    #[arg(long)]
    /// Print components by decreasing size.
    sort: bool,

    #[clap(flatten)]
    arcs_args: ArcsArgs,
}

pub fn cli(command: Command) -> Command {
    command.subcommand(CliArgs::augment_args(Command::new(COMMAND_NAME)).display_order(0))
}

pub fn main(submatches: &ArgMatches) -> Result<()> {
    let args = CliArgs::from_arg_matches(submatches)?;
    let mut pl = super::progress_logger(submatches);

    let arcs = match &args.arcs {
        Some(path) => {
            log::info!("Reading arcs from {}...", path.display());
            let file = std::fs::File::open(path)
                .with_context(|| format!("Could not open {}", path.display()))?;
            read_arcs(&args.arcs_args, std::io::BufReader::new(file))?
        }
        None => {
            log::info!("Reading arcs from stdin...");
            read_arcs(&args.arcs_args, std::io::stdin().lock())?
        }
    };
    log::info!("Arcs read: {}", arcs.len());

    let max_degree = match args.max_degree {
        Some(max_degree) => max_degree,
        None => max_degree(args.num_nodes, &arcs)?,
    };
    let graph = WeightedGraph::from_arcs(args.num_nodes, max_degree, arcs)?;

    let mut sccs = match args.strategy {
        Strategy::Iter => kosaraju_iter(&graph, &mut pl)?,
        Strategy::Rec => kosaraju_rec(&graph, &mut pl)?,
    };
    if args.sort {
        sccs.sort_by_size();
    }

    let mut out = BufWriter::new(std::io::stdout().lock());
    for component in sccs.iter() {
        let mut nodes = component.iter();
        if let Some(first) = nodes.next() {
            write!(out, "{first}")?;
        }
        for node in nodes {
            write!(out, " {node}")?;
        }
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}

/// Parses weighted arcs, one per line, as triples `(source, target, weight)`.
///
/// Lines starting with the comment symbol are ignored, and lines without
/// enough columns are skipped with a warning; unparsable values are an error.
pub fn read_arcs(args: &ArcsArgs, input: impl BufRead) -> Result<Vec<(usize, usize, i32)>> {
    let biggest_idx = args
        .source_column
        .max(args.target_column)
        .max(args.weight_column);
    let mut arcs = Vec::new();

    for (line_num, line) in input.lines().enumerate().skip(args.lines_to_skip) {
        if let Some(max_arcs) = args.max_arcs {
            if arcs.len() >= max_arcs {
                break;
            }
        }
        let line = line.with_context(|| format!("Could not read line {line_num}"))?;
        // skip comment
        if line.trim().starts_with(args.line_comment_symbol) || line.trim().is_empty() {
            continue;
        }

        let vals = line.split(args.separator).collect::<Vec<_>>();
        if vals.get(biggest_idx).is_none() {
            log::warn!(
                "Line {}: {:?} does not have enough columns: got {} columns but expected at least {} columns separated by {:?} (you can change the separator using the --separator option)",
                line_num, line, vals.len(), biggest_idx + 1, args.separator,
            );
            continue;
        }

        let src = vals[args.source_column].trim();
        let dst = vals[args.target_column].trim();
        let weight = vals[args.weight_column].trim();
        arcs.push((
            src.parse::<usize>().with_context(|| {
                format!("Error parsing as integer source column value {src:?} at line {line_num}")
            })?,
            dst.parse::<usize>().with_context(|| {
                format!("Error parsing as integer target column value {dst:?} at line {line_num}")
            })?,
            weight.parse::<i32>().with_context(|| {
                format!("Error parsing as integer weight column value {weight:?} at line {line_num}")
            })?,
        ));
    }

    Ok(arcs)
}

/// Returns the largest indegree or outdegree of the given arcs.
fn max_degree(num_nodes: usize, arcs: &[(usize, usize, i32)]) -> Result<usize> {
    let mut outdegrees = vec![0; num_nodes];
    let mut indegrees = vec![0; num_nodes];
    for &(src, dst, _) in arcs {
        ensure!(
            src < num_nodes && dst < num_nodes,
            "Arc ({src}, {dst}) has an endpoint outside the graph ({num_nodes} nodes)"
        );
        outdegrees[src] += 1;
        indegrees[dst] += 1;
    }
    Ok(outdegrees
        .into_iter()
        .chain(indegrees)
        .max()
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_arcs() -> Result<()> {
        let input = "# a comment\n0\t1\t5\n1\t0\t-2\n\n2\t2\n1\t2\t7\n";
        let arcs = read_arcs(&ArcsArgs::default(), input.as_bytes())?;
        assert_eq!(arcs, vec![(0, 1, 5), (1, 0, -2), (1, 2, 7)]);
        Ok(())
    }

    #[test]
    fn test_read_arcs_custom_columns() -> Result<()> {
        let args = ArcsArgs {
            separator: ',',
            weight_column: 0,
            source_column: 1,
            target_column: 2,
            lines_to_skip: 1,
            max_arcs: Some(1),
            ..ArcsArgs::default()
        };
        let input = "weight,src,dst\n3,0,1\n4,1,0\n";
        assert_eq!(read_arcs(&args, input.as_bytes())?, vec![(0, 1, 3)]);
        Ok(())
    }

    #[test]
    fn test_read_arcs_invalid() {
        let input = "0\tx\t1\n";
        assert!(read_arcs(&ArcsArgs::default(), input.as_bytes()).is_err());
    }

    #[test]
    fn test_max_degree() -> Result<()> {
        let arcs = [(0, 2, 0), (1, 2, 0), (0, 1, 0)];
        assert_eq!(max_degree(3, &arcs)?, 2);
        assert_eq!(max_degree(3, &[])?, 0);
        assert!(max_degree(2, &arcs).is_err());
        Ok(())
    }
}
