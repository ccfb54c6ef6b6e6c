//! Minimum spanning tree (MST) construction.
//!
//! Two sequential drivers share one set of building blocks:
//!
//! - [`boruvka`] alternates [`count_and_label`] over a growing forest with
//!   [`add_safe_edges`] until one component remains.
//! - [`prim`] grows a tree from a source vertex, ordering the frontier with an
//!   [`IndexedHeap`] that supports decrease-key.
//!
//! Both drivers keep their per-vertex state in a [`VertexStore`] built at the
//! start of the run, so repeated runs on the same graph never observe each
//! other's annotations.

mod boruvka;
mod components;
mod heap;
mod prim;
mod safe_edges;
mod store;
mod vertex;

pub use self::{
    boruvka::{BoruvkaForest, BoruvkaRound, boruvka},
    components::count_and_label,
    heap::{HeapEntry, IndexedHeap},
    prim::{PrimTree, prim},
    safe_edges::add_safe_edges,
    store::VertexStore,
    vertex::{Key, MstVertex},
};

#[cfg(test)]
mod property;
