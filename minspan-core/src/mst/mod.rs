//! Sequential Kruskal minimum spanning tree construction.
//!
//! Sorts candidate edges by weight and grows a forest by accepting every
//! edge whose endpoints are not yet connected, using a [`DisjointSet`] for
//! the cycle check. The dominant cost is the initial sort; the union-find
//! passes are near-linear.

use tracing::{debug, instrument};

use crate::{
    edge::Edge,
    union_find::{DisjointSet, UnionFindError},
};

/// Errors returned while computing a minimum spanning tree/forest.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MstError {
    /// An edge referenced a vertex id that is not present in the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertexId {
        /// The invalid vertex id referenced by an edge.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a non-finite weight.
    #[error("edge ({src}, {target}) has non-finite weight")]
    NonFiniteWeight {
        /// The source endpoint id (as provided).
        src: usize,
        /// The target endpoint id (as provided).
        target: usize,
    },
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::InvalidVertexId { .. } => MstErrorCode::InvalidVertexId,
            Self::NonFiniteWeight { .. } => MstErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// An edge referenced a vertex id that is not present in the graph.
    InvalidVertexId,
    /// An edge carried a non-finite weight.
    NonFiniteWeight,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidVertexId => "INVALID_VERTEX_ID",
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
        }
    }
}

impl From<UnionFindError> for MstError {
    fn from(error: UnionFindError) -> Self {
        match error {
            UnionFindError::VertexOutOfBounds { vertex, len } => Self::InvalidVertexId {
                vertex,
                vertex_count: len,
            },
        }
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
/// A disconnected input is not an error: it yields one tree per connected
/// component, observable through [`Self::component_count`].
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest {
    edges: Vec<Edge>,
    total_weight: f64,
    component_count: usize,
}

impl MinimumSpanningForest {
    /// Returns the accepted edges in acceptance order (non-decreasing weight).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the accepted edges' weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans every vertex as a single tree.
    ///
    /// Graphs with at most one vertex are trivially spanning.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.component_count <= 1
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// Edges are interpreted as undirected; the orientation given by the caller
/// is preserved in the result. Self-loops and duplicate edges are rejected
/// by the cycle check rather than filtered up front, so the second copy of a
/// repeated edge never contributes to the total weight. Equal-weight edges
/// are considered in input order.
///
/// # Errors
///
/// Returns an error when:
/// - an edge references a vertex id `>= vertex_count`
/// - an edge weight is non-finite
///
/// # Examples
/// ```
/// use minspan_core::{Edge, kruskal};
///
/// let edges = [
///     Edge::new(0, 1, 10.0),
///     Edge::new(0, 2, 6.0),
///     Edge::new(0, 3, 5.0),
///     Edge::new(1, 3, 15.0),
///     Edge::new(2, 3, 4.0),
/// ];
/// let forest = kruskal(4, &edges)?;
/// assert!(forest.is_spanning_tree());
/// assert_eq!(forest.total_weight(), 19.0);
/// # Ok::<(), minspan_core::MstError>(())
/// ```
#[instrument(name = "mst.kruskal", err, skip(edges), fields(edge_count = edges.len()))]
pub fn kruskal(vertex_count: usize, edges: &[Edge]) -> Result<MinimumSpanningForest, MstError> {
    for edge in edges {
        validate_edge(edge, vertex_count)?;
    }

    let mut ordered = edges.to_vec();
    // Stable sort: ties keep input order, so equal-weight selection is
    // deterministic for a fixed input ordering.
    ordered.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

    let spanning_len = vertex_count.saturating_sub(1);
    let mut sets = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(spanning_len);
    let mut total_weight = 0.0;

    for edge in ordered {
        if accepted.len() == spanning_len {
            break;
        }
        if sets.union(edge.source(), edge.target())? {
            total_weight += edge.weight();
            accepted.push(edge);
        }
    }

    debug!(
        accepted = accepted.len(),
        components = sets.components(),
        total_weight,
        "minimum spanning forest computed"
    );

    Ok(MinimumSpanningForest {
        edges: accepted,
        total_weight,
        component_count: sets.components(),
    })
}

fn validate_edge(edge: &Edge, vertex_count: usize) -> Result<(), MstError> {
    let source = edge.source();
    let target = edge.target();

    if source >= vertex_count {
        return Err(MstError::InvalidVertexId {
            vertex: source,
            vertex_count,
        });
    }
    if target >= vertex_count {
        return Err(MstError::InvalidVertexId {
            vertex: target,
            vertex_count,
        });
    }

    if !edge.weight().is_finite() {
        return Err(MstError::NonFiniteWeight { src: source, target });
    }

    Ok(())
}

#[cfg(test)]
mod property;
