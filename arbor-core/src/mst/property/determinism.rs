//! Property 3: Determinism across repeated runs and Prim sources.
//!
//! Both drivers allocate fresh per-vertex state, so repeated runs on the
//! same graph must return identical results. Prim's total weight must not
//! depend on the source vertex.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{boruvka, prim};

use super::types::{DeterminismConfig, MstFixture};

/// Runs the determinism property for the given fixture.
pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let config = DeterminismConfig::load();
    let graph = fixture.graph();
    let context = fixture.context();
    let fail = |driver: &str, err: crate::MstError| {
        TestCaseError::fail(format!("{driver} failed: {err} ({context})"))
    };

    let baseline_forest = boruvka(&graph).map_err(|err| fail("boruvka", err))?;
    let baseline_tree = prim(&graph, 0).map_err(|err| fail("prim", err))?;

    for repetition in 1..config.repetitions {
        let forest = boruvka(&graph).map_err(|err| fail("boruvka", err))?;
        if forest != baseline_forest {
            return Err(TestCaseError::fail(format!(
                "boruvka repetition {repetition} diverged ({context})",
            )));
        }
        let tree = prim(&graph, 0).map_err(|err| fail("prim", err))?;
        if tree != baseline_tree {
            return Err(TestCaseError::fail(format!(
                "prim repetition {repetition} diverged ({context})",
            )));
        }
    }

    for source in [fixture.vertex_count / 2, fixture.vertex_count - 1] {
        let tree = prim(&graph, source).map_err(|err| fail("prim", err))?;
        if tree.total_weight() != baseline_tree.total_weight() {
            return Err(TestCaseError::fail(format!(
                "prim from {source} weighs {}, from 0 weighs {} ({context})",
                tree.total_weight(),
                baseline_tree.total_weight(),
            )));
        }
    }

    Ok(())
}
