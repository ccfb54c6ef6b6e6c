//! Property-based tests for the Borůvka and Prim drivers.
//!
//! Verifies both drivers against a sequential Kruskal oracle, validates the
//! structural invariants of their forests, checks run-to-run determinism,
//! and replays random operation scripts against the indexed heap.

mod determinism;
mod equivalence;
mod heap;
mod helpers;
mod oracle;
mod structural;
mod types;
