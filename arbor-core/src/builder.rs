//! Builder utilities for configuring Arbor runs.
//!
//! Exposes the algorithm selection surface and the options consumed by
//! [`Arbor`] before a graph is processed.

use std::{fmt, str::FromStr};

use crate::{arbor::Arbor, error::MstError};

/// Spanning-tree algorithm executed by [`Arbor::run`].
///
/// Parses from its name or from the numeric codes `0` (Borůvka) and `1`
/// (Prim).
///
/// # Examples
/// ```
/// use arbor_core::Algorithm;
///
/// assert_eq!("boruvka".parse::<Algorithm>()?, Algorithm::Boruvka);
/// assert_eq!("1".parse::<Algorithm>()?, Algorithm::Prim);
/// assert!("kruskal".parse::<Algorithm>().is_err());
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Borůvka's component-contraction algorithm.
    Boruvka,
    /// Prim's algorithm over an indexed heap.
    #[default]
    Prim,
}

impl Algorithm {
    /// Returns the stable lower-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boruvka => "boruvka",
            Self::Prim => "prim",
        }
    }

    /// Returns the label printed above the total weight by the CLI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boruvka => "Boruvka",
            Self::Prim => "indexed heaps",
        }
    }

    /// Returns the numeric selector code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Boruvka => 0,
            Self::Prim => 1,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = MstError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "0" | "boruvka" => Ok(Self::Boruvka),
            "1" | "prim" => Ok(Self::Prim),
            other => Err(MstError::UnknownAlgorithm {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Configures and constructs [`Arbor`] instances.
///
/// # Examples
/// ```
/// use arbor_core::{Algorithm, ArborBuilder};
///
/// let arbor = ArborBuilder::new()
///     .with_algorithm(Algorithm::Boruvka)
///     .require_spanning_tree(true)
///     .build();
/// assert_eq!(arbor.algorithm(), Algorithm::Boruvka);
/// assert!(arbor.requires_spanning_tree());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArborBuilder {
    algorithm: Algorithm,
    source: usize,
    require_spanning_tree: bool,
}

impl ArborBuilder {
    /// Creates a builder populated with default parameters: Prim from vertex
    /// `0`, accepting spanning forests.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Algorithm, ArborBuilder};
    ///
    /// let builder = ArborBuilder::new();
    /// assert_eq!(builder.algorithm(), Algorithm::Prim);
    /// assert_eq!(builder.source(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the algorithm to run.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sets the source vertex used by Prim's algorithm.
    ///
    /// The source is validated against the graph when [`Arbor::run`] is
    /// invoked.
    #[must_use]
    pub fn with_source(mut self, source: usize) -> Self {
        self.source = source;
        self
    }

    /// Returns the configured source vertex.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Makes [`Arbor::run`] fail with [`MstError::Disconnected`] instead of
    /// returning a spanning forest.
    #[must_use]
    pub fn require_spanning_tree(mut self, required: bool) -> Self {
        self.require_spanning_tree = required;
        self
    }

    /// Constructs the configured [`Arbor`].
    #[must_use]
    pub fn build(self) -> Arbor {
        Arbor::new(self.algorithm, self.source, self.require_spanning_tree)
    }
}
