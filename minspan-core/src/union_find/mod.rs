//! Union-find (disjoint set union) over a fixed range of vertex identifiers.
//!
//! Tracks a partition of `{0, …, len-1}` into disjoint sets. `find` performs
//! iterative two-pass path compression and `union` merges by rank, so a
//! sequence of operations costs amortised near-constant time per call
//! (inverse-Ackermann bound).

use thiserror::Error;

/// Errors returned by [`DisjointSet`] operations.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum UnionFindError {
    /// A vertex identifier fell outside the partitioned range.
    #[error("vertex {vertex} is out of bounds for a partition of {len} elements")]
    VertexOutOfBounds {
        /// The offending vertex identifier.
        vertex: usize,
        /// The number of elements in the partition.
        len: usize,
    },
}

impl UnionFindError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> UnionFindErrorCode {
        match self {
            Self::VertexOutOfBounds { .. } => UnionFindErrorCode::VertexOutOfBounds,
        }
    }
}

/// Machine-readable error codes for [`UnionFindError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UnionFindErrorCode {
    /// A vertex identifier fell outside the partitioned range.
    VertexOutOfBounds,
}

impl UnionFindErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexOutOfBounds => "VERTEX_OUT_OF_BOUNDS",
        }
    }
}

/// Partition of `{0, …, len-1}` into disjoint sets.
///
/// Each element points at a parent, forming a forest whose roots represent
/// sets; ranks bound tree height for the merge heuristic. The backing
/// storage is a flat index-based array: the structure holds no references,
/// and the constructor's self-rooted singletons guarantee every parent chain
/// terminates at a root.
///
/// # Examples
/// ```
/// use minspan_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(3);
/// assert!(sets.union(0, 1)?);
/// assert_eq!(sets.find(0)?, sets.find(1)?);
/// assert_eq!(sets.components(), 2);
/// # Ok::<(), minspan_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets, each element its own root with rank 0.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements in the partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns whether the partition contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets currently tracked.
    ///
    /// Starts at `len` and decreases by one for every effective merge.
    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the root representative of the set containing `vertex`.
    ///
    /// Every element walked on the way to the root is re-pointed directly at
    /// it, so later lookups shorten. Compression never changes which set an
    /// element belongs to.
    ///
    /// # Errors
    /// Returns [`UnionFindError::VertexOutOfBounds`] when `vertex >= len`.
    pub fn find(&mut self, vertex: usize) -> Result<usize, UnionFindError> {
        self.check_bounds(vertex)?;
        Ok(self.find_root(vertex))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `Ok(true)` when a merge occurred and `Ok(false)` when both
    /// vertices were already in the same set, meaning an edge between them
    /// would close a cycle. The shallower tree is attached under the deeper
    /// one; on equal ranks `right`'s root is attached under `left`'s root
    /// and the survivor's rank grows by one.
    ///
    /// # Errors
    /// Returns [`UnionFindError::VertexOutOfBounds`] when either vertex is
    /// `>= len`.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError> {
        self.check_bounds(left)?;
        self.check_bounds(right)?;

        let mut left_root = self.find_root(left);
        let mut right_root = self.find_root(right);
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank < right_rank {
            std::mem::swap(&mut left_root, &mut right_root);
        }
        self.parent[right_root] = left_root;
        if left_rank == right_rank {
            self.rank[left_root] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        Ok(true)
    }

    fn check_bounds(&self, vertex: usize) -> Result<(), UnionFindError> {
        if vertex >= self.parent.len() {
            return Err(UnionFindError::VertexOutOfBounds {
                vertex,
                len: self.parent.len(),
            });
        }
        Ok(())
    }

    // Iterative two-pass compression: locate the root, then re-link the
    // walked path. Bounds must have been checked by the caller.
    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }
}
