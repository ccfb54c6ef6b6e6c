//! Command implementations and argument parsing for the arbor CLI.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use arbor_core::{
    AdjacencyGraph, Algorithm, ArborBuilder, MstError, MstErrorCode, SpanningResult, WeightedGraph,
};
use arbor_providers_text::{TextGraphError, read_graph, write_edges};
use clap::Parser;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compute the minimum spanning tree of a weighted graph."
)]
pub struct Cli {
    /// Graph file in edge-list format; `-` or omitted reads standard input.
    #[arg(value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Algorithm selector given positionally: `0`/`boruvka` or `1`/`prim`.
    #[arg(value_name = "ALGORITHM", value_parser = parse_algorithm)]
    pub choice: Option<Algorithm>,

    /// Algorithm to run: `boruvka`, `prim`, `0` or `1` (default: prim).
    #[arg(
        long,
        short = 'a',
        value_parser = parse_algorithm,
        conflicts_with = "choice",
    )]
    pub algorithm: Option<Algorithm>,

    /// 1-based source vertex for Prim's algorithm.
    #[arg(long, short = 's', default_value_t = 1, value_parser = parse_source)]
    pub source: usize,

    /// Accept disconnected graphs and report their minimum spanning forest.
    #[arg(long)]
    pub allow_forest: bool,

    /// Also print the selected edges as 1-based `u v w` lines.
    #[arg(long)]
    pub edges: bool,
}

impl Cli {
    /// Returns the algorithm chosen by flag or position, defaulting to Prim.
    #[must_use]
    pub fn selected_algorithm(&self) -> Algorithm {
        self.algorithm.or(self.choice).unwrap_or_default()
    }

    /// Returns where the graph is read from.
    #[must_use]
    pub fn input_source(&self) -> InputSource {
        match self.input.as_deref() {
            None => InputSource::Stdin,
            Some(path) if path == Path::new("-") => InputSource::Stdin,
            Some(path) => InputSource::File(path.to_path_buf()),
        }
    }
}

fn parse_algorithm(raw: &str) -> Result<Algorithm, MstError> {
    raw.parse()
}

fn parse_source(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("vertex numbers start at 1".to_owned()),
        Ok(vertex) => Ok(vertex),
        Err(err) => Err(err.to_string()),
    }
}

/// Location the graph is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input could not be parsed as a graph.
    #[error("failed to read graph from {input}: {source}")]
    Text {
        /// Input that failed to parse.
        input: InputSource,
        /// Underlying parse failure.
        #[source]
        source: TextGraphError,
    },
    /// The `--source` vertex does not exist in the graph.
    #[error("source vertex {source_vertex} is outside 1..={vertex_count}")]
    SourceOutOfRange {
        /// 1-based vertex requested on the command line.
        source_vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The graph is disconnected and `--allow-forest` was not given.
    #[error("graph is disconnected ({components} components); pass --allow-forest to accept a forest")]
    Disconnected {
        /// Number of components in the spanning forest.
        components: usize,
    },
    /// Core computation failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Returns the core error code when the failure originated in the core.
    #[must_use]
    pub fn core_code(&self) -> Option<&'static str> {
        match self {
            Self::Core(err) => Some(err.code().as_str()),
            Self::Disconnected { .. } => Some(MstErrorCode::Disconnected.as_str()),
            _ => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Where the graph was read from.
    pub input: InputSource,
    /// Spanning tree or forest computed by the core.
    pub result: SpanningResult,
    /// Wall-clock time spent in the algorithm.
    pub elapsed: Duration,
    /// Whether the selected edges should be rendered.
    pub show_edges: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read, the source vertex is
/// out of range, or the graph is disconnected without `--allow-forest`.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, run_cli};
/// # use clap::Parser;
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n1 2 1\n2 3 2\n1 3 3\n")?;
/// let path = file.path().display().to_string();
/// let cli = Cli::try_parse_from(["arbor", path.as_str(), "0"])?;
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.result.total_weight(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(input = field::Empty, algorithm = field::Empty, source = cli.source),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let algorithm = cli.selected_algorithm();
    let input = cli.input_source();
    let span = Span::current();
    span.record("input", field::display(&input));
    span.record("algorithm", field::display(algorithm));

    let graph = read_input(&input)?;
    if graph.vertex_count() > 0 && cli.source > graph.vertex_count() {
        return Err(CliError::SourceOutOfRange {
            source_vertex: cli.source,
            vertex_count: graph.vertex_count(),
        });
    }

    let arbor = ArborBuilder::new()
        .with_algorithm(algorithm)
        .with_source(cli.source - 1)
        .require_spanning_tree(!cli.allow_forest)
        .build();

    let started = Instant::now();
    let result = arbor.run(&graph).map_err(|err| match err {
        MstError::Disconnected { components } => CliError::Disconnected { components },
        other => CliError::Core(other),
    })?;
    let elapsed = started.elapsed();

    info!(
        total_weight = result.total_weight(),
        components = result.component_count(),
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "command completed"
    );
    Ok(ExecutionSummary {
        input,
        result,
        elapsed,
        show_edges: cli.edges,
    })
}

#[instrument(name = "cli.read_input", err, skip(input), fields(input = %input))]
pub(super) fn read_input(input: &InputSource) -> Result<AdjacencyGraph, CliError> {
    let parsed = match input {
        InputSource::Stdin => read_graph(io::stdin().lock()),
        InputSource::File(path) => read_graph(open_graph_reader(path)?),
    };
    parsed.map_err(|source| CliError::Text {
        input: input.clone(),
        source,
    })
}

pub(super) fn open_graph_reader(path: &Path) -> Result<impl BufRead, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Renders `summary` to `writer`: the algorithm label, the total weight, the
/// selected edges when requested and the elapsed time.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{}", summary.result.algorithm().label())?;
    writeln!(writer, "{}", summary.result.total_weight())?;
    if summary.show_edges {
        write_edges(&mut writer, summary.result.edges()).map_err(|err| match err {
            TextGraphError::Io(io) => io,
            other => io::Error::other(other),
        })?;
    }
    writeln!(writer, "Time: {} msec.", summary.elapsed.as_millis())?;
    Ok(())
}
