//! Error types for the Arbor core library.
//!
//! Defines the error enum shared by the spanning-tree drivers, the stable
//! machine-readable codes derived from it and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::EdgeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned while computing a minimum spanning tree/forest.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The caller requested a spanning tree for a graph without vertices.
    #[error("cannot compute a spanning tree for an empty graph")]
    EmptyGraph,
    /// `extract_min` was called on an empty indexed heap.
    #[error("cannot extract the minimum from an empty queue")]
    EmptyQueue,
    /// The indexed heap already holds as many elements as its universe allows.
    #[error("indexed heap is full (capacity {capacity})")]
    HeapFull {
        /// Size of the element universe the heap was created for.
        capacity: usize,
    },
    /// A vertex was looked up that the graph or annotation store does not know.
    #[error("vertex {vertex} is unknown (vertex_count is {vertex_count})")]
    UnknownVertex {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices registered with the graph or store.
        vertex_count: usize,
    },
    /// A recorded edge identifier did not resolve to an edge of the graph.
    #[error("edge {edge} is unknown to the graph")]
    UnknownEdge {
        /// The offending edge identifier.
        edge: EdgeId,
    },
    /// Per-vertex storage for the requested vertex count could not be
    /// allocated.
    #[error("cannot allocate storage for {vertex_count} vertices")]
    CapacityExceeded {
        /// Vertex count that was requested.
        vertex_count: usize,
    },
    /// Summing edge weights overflowed the weight type.
    #[error("total weight overflowed while accumulating spanning-tree edges")]
    WeightOverflow,
    /// A spanning tree was required but the graph has several components.
    #[error("graph is disconnected: the spanning forest has {components} components")]
    Disconnected {
        /// Number of components in the computed forest.
        components: usize,
    },
    /// An algorithm name or numeric code could not be parsed.
    #[error("unknown algorithm `{provided}`; expected `boruvka`, `prim`, `0` or `1`")]
    UnknownAlgorithm {
        /// Raw value supplied by the caller.
        provided: String,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("MST invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The caller requested a spanning tree for an empty graph.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// `extract_min` was called on an empty queue.
        EmptyQueue => EmptyQueue => "MST_EMPTY_QUEUE",
        /// The indexed heap universe is exhausted.
        HeapFull => HeapFull { .. } => "MST_HEAP_FULL",
        /// A vertex lookup failed.
        UnknownVertex => UnknownVertex { .. } => "MST_UNKNOWN_VERTEX",
        /// An edge lookup failed.
        UnknownEdge => UnknownEdge { .. } => "MST_UNKNOWN_EDGE",
        /// Vertex storage could not be allocated.
        CapacityExceeded => CapacityExceeded { .. } => "MST_CAPACITY_EXCEEDED",
        /// The total weight overflowed.
        WeightOverflow => WeightOverflow => "MST_WEIGHT_OVERFLOW",
        /// A spanning tree was required but the graph is disconnected.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// An algorithm selector could not be parsed.
        UnknownAlgorithm => UnknownAlgorithm { .. } => "MST_UNKNOWN_ALGORITHM",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

impl MstError {
    /// Returns `true` for faults that indicate a bug in a driver rather than
    /// a problem with the caller's input.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::MstError;
    ///
    /// assert!(MstError::EmptyQueue.is_internal());
    /// assert!(!MstError::Disconnected { components: 2 }.is_internal());
    /// ```
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::EmptyQueue | Self::HeapFull { .. } | Self::InvariantViolation { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
