//! Minspan core library.
//!
//! Computes minimum spanning trees and forests of undirected weighted graphs
//! using Kruskal's algorithm over a disjoint set union structure.

mod edge;
mod mst;
mod union_find;

pub use crate::{
    edge::Edge,
    mst::{MinimumSpanningForest, MstError, MstErrorCode, kruskal},
    union_find::{DisjointSet, UnionFindError, UnionFindErrorCode},
};
