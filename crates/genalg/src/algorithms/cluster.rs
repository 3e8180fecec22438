//! K-means clustering (Lloyd's algorithm).
//!
//! ## Purpose
//!
//! Partitions points into `k` clusters minimizing the within-cluster sum of
//! squared Euclidean distances. Points are `Vec`s of members of an ordered
//! field algebra, read from any indexed data source.
//!
//! ## Design notes
//!
//! * **Seeding**: `k` distinct points are drawn as initial centroids with the seeded
//!   `SimpleRng` (partial Fisher-Yates), so runs are reproducible.
//! * **Ties**: A point equidistant to several centroids joins the lowest-numbered one.
//! * **Empty clusters**: Keep their previous centroid.
//!
//! ## Invariants
//!
//! * Every point has exactly one assignment in `0..k`.
//! * All centroids have the dimension of the input points.
//!
//! ## Non-goals
//!
//! * k-means++ seeding.
//! * Automatic selection of `k`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use tracing::debug;

// Internal dependencies
use crate::algebra::traits::{Additive, FromCount, Invertible, Ordered};
use crate::primitives::errors::AlgebraError;
use crate::primitives::random::SimpleRng;
use crate::primitives::storage::{IndexedDataSource, to_vec};

// ============================================================================
// Configuration and Result
// ============================================================================

/// K-means parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeansConfig {
    /// Lloyd iteration limit.
    pub max_iterations: usize,

    /// Seed for initial centroid selection.
    pub seed: u64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            seed: 42,
        }
    }
}

impl KMeansConfig {
    /// Set the iteration limit.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<(), AlgebraError> {
        if self.max_iterations == 0 {
            return Err(AlgebraError::InvalidInput(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansResult<M> {
    /// Final cluster centers.
    pub centroids: Vec<Vec<M>>,

    /// Cluster index of every input point.
    pub assignments: Vec<usize>,

    /// Lloyd iterations performed.
    pub iterations: usize,

    /// True when assignments stabilized before the iteration limit.
    pub converged: bool,
}

// ============================================================================
// Algorithm
// ============================================================================

/// Cluster `points` into `k` groups.
pub fn k_means<A, S>(
    alg: &A,
    k: usize,
    points: &S,
    config: &KMeansConfig,
) -> Result<KMeansResult<A::Member>, AlgebraError>
where
    A: Additive + Invertible + FromCount + Ordered,
    S: IndexedDataSource<Vec<A::Member>> + ?Sized,
{
    config.validate()?;
    let data = to_vec(points)?;
    let n = data.len();
    if k == 0 || k > n {
        return Err(AlgebraError::InvalidInput(format!(
            "k must be in 1..={n}, got {k}"
        )));
    }
    let dim = data[0].len();
    if let Some(bad) = data.iter().find(|p| p.len() != dim) {
        return Err(AlgebraError::ShapeMismatch {
            left: (1, dim),
            right: (1, bad.len()),
        });
    }

    // Initial centroids: k distinct points
    let mut rng = SimpleRng::new(config.seed);
    let mut order: Vec<usize> = (0..n).collect();
    for i in 0..k {
        let j = i + rng.gen_range(n - i);
        order.swap(i, j);
    }
    let mut centroids: Vec<Vec<A::Member>> =
        order[..k].iter().map(|&i| data[i].clone()).collect();

    let mut assignments = vec![usize::MAX; n];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        let mut changed = false;
        for (p, point) in data.iter().enumerate() {
            let nearest = nearest_centroid(alg, point, &centroids);
            if assignments[p] != nearest {
                assignments[p] = nearest;
                changed = true;
            }
        }
        if !changed {
            converged = true;
            break;
        }

        for (c, centroid) in centroids.iter_mut().enumerate() {
            let mut acc = vec![alg.zero(); dim];
            let mut members = 0;
            for (point, _) in data.iter().zip(&assignments).filter(|(_, a)| **a == c) {
                for (slot, x) in acc.iter_mut().zip(point) {
                    *slot = alg.add(slot, x);
                }
                members += 1;
            }
            if members > 0 {
                let count = alg.from_count(members)?;
                for (slot, x) in centroid.iter_mut().zip(&acc) {
                    *slot = alg.divide(x, &count)?;
                }
            }
        }
    }

    debug!(k, points = n, iterations, converged, "k-means finished");
    Ok(KMeansResult {
        centroids,
        assignments,
        iterations,
        converged,
    })
}

fn nearest_centroid<A>(alg: &A, point: &[A::Member], centroids: &[Vec<A::Member>]) -> usize
where
    A: Additive + Invertible + Ordered,
{
    let mut best = 0;
    let mut best_dist = squared_distance(alg, point, &centroids[0]);
    for (c, centroid) in centroids.iter().enumerate().skip(1) {
        let d = squared_distance(alg, point, centroid);
        if alg.is_less(&d, &best_dist) {
            best = c;
            best_dist = d;
        }
    }
    best
}

fn squared_distance<A>(alg: &A, a: &[A::Member], b: &[A::Member]) -> A::Member
where
    A: Additive + Invertible,
{
    a.iter().zip(b).fold(alg.zero(), |acc, (x, y)| {
        let d = alg.subtract(x, y);
        alg.add(&acc, &alg.multiply(&d, &d))
    })
}
