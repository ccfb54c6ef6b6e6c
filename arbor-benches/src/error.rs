//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` instead of using `.expect()`.

use arbor_core::MstError;

/// Errors that may occur while generating benchmark graphs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested maximum weight was not positive.
    #[error("maximum weight must be positive, got {max_weight}")]
    NonPositiveWeight {
        /// Value that was supplied.
        max_weight: i64,
    },
    /// Building the graph or running a driver failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
}
