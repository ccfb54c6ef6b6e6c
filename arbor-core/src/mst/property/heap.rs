//! Property 4: Indexed heap agreement with an ordered reference model.
//!
//! Random sequences of insertions, key decreases and extractions are applied
//! both to an [`IndexedHeap`] and to a `BTreeSet` ordered by
//! `(key, insertion sequence)`. Every extraction must agree, and the heap's
//! structural invariants must hold after every operation.

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{IndexedHeap, Key, MstVertex, VertexStore};

/// One operation against the heap. Element indices are reduced modulo the
/// store size when applied.
#[derive(Clone, Copy, Debug)]
pub(super) enum HeapOp {
    Insert { element: usize, key: i64 },
    Decrease { element: usize, by: i64 },
    Extract,
}

/// Fixture for the heap property.
#[derive(Clone, Debug)]
pub(super) struct HeapScript {
    pub element_count: usize,
    pub ops: Vec<HeapOp>,
}

/// Generates heap operation scripts over 1-32 elements.
pub(super) fn heap_script_strategy() -> impl Strategy<Value = HeapScript> {
    let op = prop_oneof![
        3 => (any::<usize>(), -100_i64..100).prop_map(|(element, key)| HeapOp::Insert { element, key }),
        2 => (any::<usize>(), 1_i64..50).prop_map(|(element, by)| HeapOp::Decrease { element, by }),
        2 => Just(HeapOp::Extract),
    ];
    (1_usize..=32, prop::collection::vec(op, 0..128))
        .prop_map(|(element_count, ops)| HeapScript { element_count, ops })
}

/// Replays `script` against the heap and the reference model.
pub(super) fn run_heap_model_property(script: &HeapScript) -> TestCaseResult {
    let count = script.element_count;
    let mut store = VertexStore::<MstVertex>::new(count);
    let mut heap = IndexedHeap::with_capacity(count);
    let mut model = BTreeSet::<(Key, u64, usize)>::new();
    let mut sequences = vec![None::<u64>; count];
    let mut next_sequence = 0_u64;

    for (step, op) in script.ops.iter().enumerate() {
        let fail = |msg: String| TestCaseError::fail(format!("step {step} ({op:?}): {msg}"));
        match *op {
            HeapOp::Insert { element, key } => {
                let element = element % count;
                if sequences[element].is_some() {
                    continue;
                }
                store.get_mut(element).map_err(|e| fail(e.to_string()))?.key = Key::Finite(key);
                heap.insert(&mut store, element).map_err(|e| fail(e.to_string()))?;
                model.insert((Key::Finite(key), next_sequence, element));
                sequences[element] = Some(next_sequence);
                next_sequence += 1;
            }
            HeapOp::Decrease { element, by } => {
                let element = element % count;
                let Some(sequence) = sequences[element] else {
                    continue;
                };
                let state = store.get_mut(element).map_err(|e| fail(e.to_string()))?;
                let old = state.key;
                let Some(current) = old.finite() else {
                    continue;
                };
                state.key = Key::Finite(current - by);
                heap.decrease_key(&mut store, element).map_err(|e| fail(e.to_string()))?;
                model.remove(&(old, sequence, element));
                model.insert((Key::Finite(current - by), sequence, element));
            }
            HeapOp::Extract => {
                let expected = model.pop_first();
                let actual = heap.extract_min(&mut store);
                match (expected, actual) {
                    (None, Err(crate::MstError::EmptyQueue)) => {}
                    (Some((_, _, element)), Ok(extracted)) if element == extracted => {
                        sequences[element] = None;
                    }
                    (expected, actual) => {
                        return Err(fail(format!("model={expected:?}, heap={actual:?}")));
                    }
                }
            }
        }

        heap.check_invariants(&store).map_err(|e| fail(e.to_string()))?;
        if heap.len() != model.len() {
            return Err(fail(format!("heap len {} != model len {}", heap.len(), model.len())));
        }
    }
    Ok(())
}
