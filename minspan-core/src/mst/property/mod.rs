//! Property-based tests for the sequential Kruskal implementation.
//!
//! Verifies the builder against an independent Prim's-algorithm oracle,
//! validates structural invariants (acyclicity, edge count, weight
//! provenance), and checks permutation invariance across graph topologies
//! with varied weight distributions.

mod oracle;
mod strategies;
mod types;
