//! Clustering around medoids.
//!
//! This module provides k-medoids clustering for dense vectors.
//!
//! ## Medoids vs Centroids
//!
//! A **centroid** (k-means) is the mean of a cluster's points: a synthetic
//! location that usually coincides with no actual data point. A **medoid**
//! is the cluster member that minimizes total distance to the others. Using
//! medoids keeps every cluster center interpretable as a real example and
//! makes the objective robust to outliers.
//!
//! ## PAM
//!
//! The implemented algorithm is PAM (Partitioning Around Medoids): a
//! best-improvement local search over medoid sets.
//!
//! **Objective**: minimize the total distance from every point to its
//! nearest medoid:
//!
//! ```text
//! J = Σ_i min_{m ∈ M} d(x_i, x_m)
//! ```
//!
//! Starting from k random medoids, each pass tries swapping every current
//! medoid against every non-medoid point, keeping strict improvements, until
//! a full pass changes nothing. All pairwise distances are precomputed once
//! in a [`DistanceMatrix`], so the search never touches raw coordinates.
//!
//! ## Usage
//!
//! ```rust
//! use exemplar::cluster::{Clustering, Pam};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 10.0],
//!     vec![10.0, 11.0],
//! ];
//!
//! // One medoid per pair; each pair-mate is distance 1 from its medoid.
//! let fit = Pam::new(2).with_seed(42).fit(&data).unwrap();
//! assert!((fit.cost - 2.0).abs() < 1e-6);
//! assert_eq!(fit.labels[0], fit.labels[1]);
//! assert_ne!(fit.labels[0], fit.labels[2]);
//!
//! // Or through the `Clustering` trait.
//! let labels = Pam::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels.len(), data.len());
//! ```

mod matrix;
mod pam;
mod traits;

pub use matrix::DistanceMatrix;
pub use pam::{Pam, PamFit};
pub use traits::Clustering;
