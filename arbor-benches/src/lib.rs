//! Benchmark support crate for arbor.
//!
//! Provides seeded random graph generators and parameter types used by the
//! Criterion benchmarks that compare the Borůvka and Prim drivers.

pub mod error;
pub mod params;
pub mod source;
