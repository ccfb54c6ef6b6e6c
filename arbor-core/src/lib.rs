//! Arbor core library.
//!
//! Minimum spanning trees over undirected weighted graphs, computed with
//! Borůvka's algorithm or with Prim's algorithm over an indexed heap.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod arbor;
mod builder;
mod error;
mod graph;
mod mst;

#[cfg(test)]
mod test_utils;

pub use crate::{
    arbor::{Arbor, SpanningResult},
    builder::{Algorithm, ArborBuilder},
    error::{MstError, MstErrorCode, Result},
    graph::{AdjacencyGraph, Edge, EdgeId, Weight, WeightedGraph},
    mst::{
        BoruvkaForest, BoruvkaRound, HeapEntry, IndexedHeap, Key, MstVertex, PrimTree,
        VertexStore, add_safe_edges, boruvka, count_and_label, prim,
    },
};
