//! PAM: Partitioning Around Medoids.
//!
//! # The Algorithm (Kaufman & Rousseeuw, 1987)
//!
//! PAM is a k-medoids clustering algorithm. Like k-means it partitions data
//! into k clusters, but each cluster center is an actual data point (a
//! *medoid*) rather than a synthetic mean. That makes it:
//!
//! - Robust to outliers (no mean to drag around)
//! - Applicable whenever pairwise distances exist, even when averaging
//!   points makes no sense
//! - Interpretable: every cluster is represented by a real example
//!
//! ## Core Concepts
//!
//! - **Medoid**: a data point chosen as a cluster's representative.
//! - **Cost**: sum over all points of the distance to the nearest medoid.
//! - **Swap**: replacing a current medoid with a non-medoid candidate.
//!
//! ## Algorithm Steps
//!
//! 1. Compute the full pairwise distance matrix once; every cost evaluation
//!    afterwards is a matrix lookup, never a recomputation.
//!
//! 2. Draw k distinct points uniformly at random as the initial medoids.
//!
//! 3. Swap passes: for each current medoid, evaluate swapping it against
//!    every non-medoid point and keep the strict improvement. Repeat until a
//!    full pass leaves the medoid set unchanged.
//!
//! 4. Assign every point to its nearest surviving medoid.
//!
//! ## Complexity
//!
//! - **Time**: O(n²d) for the distance matrix, then O(k·(n−k)) candidate
//!   evaluations per swap pass, each an O(n·k) scan of the matrix.
//! - **Space**: O(n²) for the distance matrix.
//!
//! ## When to Use
//!
//! - Cluster centers must be actual data points
//! - Outliers would distort k-means centroids
//! - n is moderate (the dense distance matrix dominates memory)
//!
//! ## Limitations
//!
//! - O(n²) memory; not for very large n
//! - The result depends on the random initialization; fix a seed for
//!   reproducibility
//!
//! ## References
//!
//! Kaufman, L., Rousseeuw, P. J. (1987). "Clustering by means of Medoids."
//! Statistical Data Analysis Based on the L1-Norm and Related Methods.

use super::matrix::DistanceMatrix;
use super::traits::Clustering;
use crate::error::{Error, Result};
use rand::prelude::*;

const DEFAULT_MAX_PASSES: usize = 100;

/// PAM (k-medoids) clustering algorithm.
#[derive(Debug, Clone)]
pub struct Pam {
    /// Number of medoids to select.
    n_clusters: usize,
    /// Optional RNG seed for reproducible initialization.
    seed: Option<u64>,
    /// Maximum number of full swap passes.
    max_passes: usize,
}

/// Converged result of a PAM fit.
#[derive(Debug, Clone)]
pub struct PamFit {
    /// Indices of the k selected medoid points.
    pub medoids: Vec<usize>,
    /// One label per input point: a position into [`medoids`](Self::medoids).
    pub labels: Vec<usize>,
    /// Sum of distances from every point to its assigned medoid.
    pub cost: f32,
    /// Number of swap passes performed.
    pub passes: usize,
    /// Whether a full pass left the medoid set unchanged within the pass
    /// limit. `false` means the fit is the best set found when the limit
    /// ran out, not a local optimum.
    pub converged: bool,
}

impl PamFit {
    /// The medoid *point index* that `point` is assigned to.
    pub fn medoid_of(&self, point: usize) -> usize {
        self.medoids[self.labels[point]]
    }
}

impl Pam {
    /// Create a new PAM clusterer that selects `n_clusters` medoids.
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            seed: None,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Set the RNG seed used to draw the initial medoids.
    ///
    /// Two fits with the same seed on the same data are identical. Without a
    /// seed, initialization draws from the thread-local RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum number of swap passes (default 100).
    ///
    /// Cost strictly decreases on every adopted swap, so the loop always
    /// terminates on its own; the bound turns a pathologically long run into
    /// a reportable [`PamFit::converged`] `== false` outcome instead of an
    /// open-ended one.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Run PAM on `data` and return medoids, labels, and final cost.
    ///
    /// Swap candidates are scanned in ascending index order and compared
    /// against the running best cost with strict `<`, so among several
    /// equally-improving candidates the *last* one that strictly beat the
    /// running best is adopted. Given the same initial medoids the whole
    /// optimization is deterministic.
    ///
    /// # Errors
    ///
    /// Rejects, before any distance computation: empty `data`
    /// ([`Error::EmptyInput`]), `n_clusters == 0`
    /// ([`Error::InvalidParameter`]), `n_clusters` larger than the number of
    /// points ([`Error::InvalidClusterCount`]), ragged rows
    /// ([`Error::DimensionMismatch`]), and NaN coordinates
    /// ([`Error::NanInput`]).
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<PamFit> {
        validate(data, self.n_clusters)?;

        let n = data.len();
        let k = self.n_clusters;
        let dist = DistanceMatrix::from_points(data);

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        let mut medoids = rand::seq::index::sample(&mut *rng, n, k).into_vec();
        let mut is_medoid = vec![false; n];
        for &m in &medoids {
            is_medoid[m] = true;
        }

        let mut best_cost = total_cost(&dist, &medoids);
        let mut passes = 0;
        let mut converged = false;

        while passes < self.max_passes {
            passes += 1;

            // Medoids are replaced in place, so `snapshot[slot]` and
            // `medoids[slot]` stay aligned for the whole pass.
            let snapshot = medoids.clone();
            for (slot, &m) in snapshot.iter().enumerate() {
                let mut best_replacement = m;

                for candidate in 0..n {
                    if is_medoid[candidate] {
                        continue;
                    }
                    let trial = swap_cost(&dist, &medoids, m, candidate);
                    // Strict improvement only: the last candidate seen that
                    // beats the running best wins.
                    if trial < best_cost {
                        best_cost = trial;
                        best_replacement = candidate;
                    }
                }

                if best_replacement != m {
                    is_medoid[m] = false;
                    is_medoid[best_replacement] = true;
                    medoids[slot] = best_replacement;
                }
            }

            // |M| is invariant at k, so set equality with the snapshot
            // reduces to membership of every snapshot element.
            if snapshot.iter().all(|&m| is_medoid[m]) {
                converged = true;
                break;
            }
        }

        let (labels, cost) = assign(&dist, &medoids);
        Ok(PamFit {
            medoids,
            labels,
            cost,
            passes,
            converged,
        })
    }
}

impl Clustering for Pam {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}

/// Precondition gate. Pure: raises or passes through, no partial work.
fn validate(data: &[Vec<f32>], n_clusters: usize) -> Result<()> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }

    if n_clusters == 0 {
        return Err(Error::InvalidParameter {
            name: "n_clusters",
            message: "must be at least 1",
        });
    }

    if n_clusters > data.len() {
        return Err(Error::InvalidClusterCount {
            requested: n_clusters,
            n_items: data.len(),
        });
    }

    let d = data[0].len();
    for (row, point) in data.iter().enumerate() {
        if point.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: point.len(),
            });
        }
        for (col, value) in point.iter().enumerate() {
            if value.is_nan() {
                return Err(Error::NanInput { row, col });
            }
        }
    }

    Ok(())
}

/// Total cost of a medoid set: Σᵢ min over m ∈ `medoids` of D\[i\]\[m\].
fn total_cost(dist: &DistanceMatrix, medoids: &[usize]) -> f32 {
    (0..dist.len())
        .map(|i| {
            medoids
                .iter()
                .map(|&m| dist.get(i, m))
                .fold(f32::INFINITY, f32::min)
        })
        .sum()
}

/// Cost of the medoid set obtained by swapping `out` for `candidate`,
/// evaluated without materializing the trial set.
fn swap_cost(dist: &DistanceMatrix, medoids: &[usize], out: usize, candidate: usize) -> f32 {
    let mut cost = 0.0;
    for i in 0..dist.len() {
        let mut d = dist.get(i, candidate);
        for &m in medoids {
            if m == out {
                continue;
            }
            let dm = dist.get(i, m);
            if dm < d {
                d = dm;
            }
        }
        cost += d;
    }
    cost
}

/// Assign every point to its nearest medoid.
///
/// Returns one label per point (a position into `medoids`) and the total
/// cost. Ties go to the earliest medoid in the list. Pure in (D, M):
/// repeated calls yield identical results.
fn assign(dist: &DistanceMatrix, medoids: &[usize]) -> (Vec<usize>, f32) {
    let n = dist.len();
    let mut labels = Vec::with_capacity(n);
    let mut cost = 0.0;

    for i in 0..n {
        let mut best_slot = 0;
        let mut best_d = dist.get(i, medoids[0]);
        for (slot, &m) in medoids.iter().enumerate().skip(1) {
            let d = dist.get(i, m);
            if d < best_d {
                best_d = d;
                best_slot = slot;
            }
        }
        labels.push(best_slot);
        cost += best_d;
    }

    (labels, cost)
}
