//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. All weights are integral-valued `f64`, so
//! total-weight comparisons against the oracle are exact regardless of
//! summation order.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for generated graphs.
const MAX_VERTICES: usize = 48;

/// Generates MST fixtures covering all weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

fn distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        Just(WeightDistribution::Unique),
        Just(WeightDistribution::ManyIdentical),
        Just(WeightDistribution::Sparse),
        Just(WeightDistribution::Disconnected),
    ]
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Probabilistically connects every unique vertex pair, drawing weights from
/// a caller-supplied generator.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    distribution: WeightDistribution,
    mut weight_generator: impl FnMut(&mut SmallRng, usize) -> f64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let edge_probability: f64 = rng.gen_range(0.3..=0.7);
    let mut edges = Vec::new();

    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let weight = weight_generator(rng, edges.len());
                edges.push(Edge::new(source, target, weight));
            }
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let offset = rng.gen_range(0..1000) as f64;
    // The running edge index keeps every weight distinct.
    generate_probabilistic_graph(rng, WeightDistribution::Unique, move |_, index| {
        offset + index as f64
    })
}

fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let weight = rng.gen_range(1..=4) as f64;
    generate_probabilistic_graph(rng, WeightDistribution::ManyIdentical, move |_, _| weight)
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let edge_count = vertex_count + vertex_count / 2;
    let mut edges = Vec::with_capacity(edge_count);

    // Endpoints are drawn independently: duplicate edges and the occasional
    // self-loop are intended stress inputs here.
    for _ in 0..edge_count {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        let weight = rng.gen_range(1..=20) as f64;
        edges.push(Edge::new(source, target, weight));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let block_count = rng.gen_range(2..=4);
    let block_len = rng.gen_range(4..=12);
    let vertex_count = block_count * block_len;
    let mut edges = Vec::new();

    for block in 0..block_count {
        let base = block * block_len;
        // A path keeps the block connected; extras add in-block cycles.
        for offset in 1..block_len {
            let weight = rng.gen_range(1..=20) as f64;
            edges.push(Edge::new(base + offset - 1, base + offset, weight));
        }
        for _ in 0..block_len / 2 {
            let source = base + rng.gen_range(0..block_len);
            let target = base + rng.gen_range(0..block_len);
            let weight = rng.gen_range(1..=20) as f64;
            edges.push(Edge::new(source, target, weight));
        }
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}
