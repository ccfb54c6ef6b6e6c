//! Command-line interface orchestration for arbor.
//!
//! Reads a graph in the textual edge-list format from a file or standard
//! input, computes its minimum spanning tree with the selected algorithm and
//! reports the total weight together with the elapsed time.

mod commands;

pub use commands::{Cli, CliError, ExecutionSummary, InputSource, render_summary, run_cli};

#[cfg(test)]
mod test_helpers;
