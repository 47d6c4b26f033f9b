//! Type definitions for MST property-based tests.

use crate::Edge;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the Kruskal implementation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a unique integral weight.
    Unique,
    /// Every edge shares one weight, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph with roughly `1.5n` edges, duplicate edges and
    /// self-loops permitted.
    Sparse,
    /// Multiple connected blocks with no cross-block edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, generated edges, and the weight distribution
/// used during generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated weighted edges.
    pub edges: Vec<Edge>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
