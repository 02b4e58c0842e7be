/*
 * SPDX-FileCopyrightText: 2026 The weighted-sccs developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface structs, functions, and methods.
//!
//! Each command is implemented as a submodule.

use anyhow::{anyhow, bail, Result};
use clap::{Arg, ArgMatches, Args, Command, ValueEnum};
use dsi_progress_logger::prelude::*;
use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};
use jiff::SpanRound;
use std::io::Write;
use std::time::{Duration, SystemTime};

pub mod check;
pub mod sccs;

#[derive(Args, Debug)]
/// Shared CLI arguments for reading files containing weighted arcs.
pub struct ArcsArgs {
    #[arg(long, default_value_t = '#')]
    /// Ignore lines that start with this symbol.
    pub line_comment_symbol: char,

    #[arg(long, default_value_t = 0)]
    /// How many lines to skip, ignoring comment lines.
    pub lines_to_skip: usize,

    #[arg(long)]
    /// How many arcs to parse, after skipping the first lines_to_skip and
    /// ignoring comment lines.
    pub max_arcs: Option<usize>,

    #[arg(long, default_value_t = '\t')]
    /// The column separator.
    pub separator: char,

    #[arg(long, default_value_t = 0)]
    /// The index of the column containing the source node of an arc.
    pub source_column: usize,

    #[arg(long, default_value_t = 1)]
    /// The index of the column containing the target node of an arc.
    pub target_column: usize,

    #[arg(long, default_value_t = 2)]
    /// The index of the column containing the weight of an arc.
    pub weight_column: usize,
}

impl Default for ArcsArgs {
    fn default() -> Self {
        Self {
            line_comment_symbol: '#',
            lines_to_skip: 0,
            max_arcs: None,
            separator: '\t',
            source_column: 0,
            target_column: 1,
            weight_column: 2,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
/// The depth-first visit used to compute components.
pub enum Strategy {
    /// Iterative visit with an explicit stack.
    Iter,
    /// Recursive visit.
    Rec,
}

/// Returns a progress logger honoring the global `--log-interval` option.
pub fn progress_logger(submatches: &ArgMatches) -> ProgressLogger {
    let mut pl = ProgressLogger::default();
    if let Some(duration) = submatches.get_one::<Duration>("log-interval") {
        pl.log_interval(*duration);
    }
    pl
}

/// Parse a duration from a string.
/// If no suffix is given, it is assumed to be in milliseconds.
/// You can use suffixes, the available ones are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` this is parsed as: 1 day, 2 hours, 3 minutes, 4 seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            match c {
                's' => duration += Duration::from_secs(dur),
                'm' => duration += Duration::from_secs(dur * 60),
                'h' => duration += Duration::from_secs(dur * 60 * 60),
                'd' => duration += Duration::from_secs(dur * 60 * 60 * 24),
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            }
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration += Duration::from_millis(dur);
    }
    Ok(duration)
}

/// Installs an [`env_logger`] logger with default level `info` printing a
/// timestamp and the elapsed time.
pub fn init_envlogger() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let span_round = SpanRound::new()
        .largest(jiff::Unit::Day)
        .smallest(jiff::Unit::Millisecond)
        .days_are_24_hours();

    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let elapsed = start.elapsed();
        let span = jiff::Span::new()
            .seconds(elapsed.as_secs() as i64)
            .milliseconds(elapsed.subsec_millis() as i64);
        let span = span.round(span_round).map_err(std::io::Error::other)?;
        writeln!(
            buf,
            "{} {} {style}{}{style:#} [{:?}] {} - {}",
            ts.strftime("%F %T%.3f"),
            printer.span_to_string(&span),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}

/// The entry point of the command-line interface.
pub fn main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();

    let command = Command::new("wsccs")
        .about("Strongly connected components of weighted graphs, visiting heavier arcs first.")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-interval")
                .short('l')
                .long("log-interval")
                .value_parser(parse_duration)
                .help(
                    "How often to log progress. Default is 10s. You can use the suffixes `s` for seconds, `m` for minutes, `h` for hours, and `d` for days. If no suffix is provided it is assumed to be in milliseconds. Example: `1d2h3m4s567` is parsed as 1 day + 2 hours + 3 minutes + 4 seconds + 567 milliseconds = 93784567 milliseconds.",)
                .global(true),
        )
        .after_help(
            "Environment (noteworthy environment variables used):
RUST_MIN_STACK: minimum thread stack size (in bytes); the recursive strategy
  might need a large stack on graphs with long paths.
RUST_LOG: configuration for env_logger, pass `info` to see the progress of the
  computation, `debug` to see the phases of the algorithm, and `trace` to see all
  the details.
",
        );

    let command = check::cli(command);
    let command = sccs::cli(command);
    let command = command.display_order(0); // sort args alphabetically
    let mut completion_command = command.clone();
    let matches = command.get_matches_from(args);

    match matches.subcommand() {
        Some((check::COMMAND_NAME, sub_m)) => check::main(sub_m)?,
        Some((sccs::COMMAND_NAME, sub_m)) => sccs::main(sub_m)?,
        Some((command_name, _)) => {
            // this shouldn't happen as clap should catch this
            eprintln!("Unknown command: {:?}", command_name);
            completion_command.print_help()?;
            std::process::exit(1);
        }
        None => {
            completion_command.print_help()?;
            return Ok(());
        }
    }

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty prints seconds in a humanly readable format.
fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let days = elapsed_seconds / (60 * 60 * 24);
    elapsed_seconds %= 60 * 60 * 24;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    match days {
        0 => {}
        1 => result.push_str("1 day "),
        _ => result.push_str(&format!("{} days ", days)),
    }
    match hours {
        0 => {}
        1 => result.push_str("1 hour "),
        _ => result.push_str(&format!("{} hours ", hours)),
    }
    match minutes {
        0 => {}
        1 => result.push_str("1 minute "),
        _ => result.push_str(&format!("{} minutes ", minutes)),
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() -> Result<()> {
        assert_eq!(parse_duration("1d2h3m4s567")?, Duration::from_millis(93784567));
        assert_eq!(parse_duration("10s")?, Duration::from_secs(10));
        assert_eq!(parse_duration("250")?, Duration::from_millis(250));
        assert!(parse_duration("").is_err());
        assert!(parse_duration("3w").is_err());
        Ok(())
    }

    #[test]
    fn test_pretty_print_elapsed() {
        assert_eq!(pretty_print_elapsed(61.5), "1 minute 1.500 seconds (61.5s)");
        assert_eq!(pretty_print_elapsed(2.0), "2.000 seconds (2s)");
    }
}
