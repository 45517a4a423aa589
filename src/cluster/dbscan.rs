//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise,
//! specialized for one-dimensional data.
//!
//! # Why a 1D Variant?
//!
//! General DBSCAN (Ester et al., 1996) spends nearly all of its time on
//! neighborhood queries: O(n²) naive, O(n log n) with a spatial index. In one
//! dimension no index is needed, because sorting the samples makes every
//! eps-neighborhood a contiguous run of the sorted array. A neighborhood
//! query is then two binary searches plus one prefix-sum lookup, and the
//! whole fit is O(n log n) with O(n) scratch space.
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **min_samples**: Minimum cumulative neighbor weight for a point to be
//!   "core". With unit weights this is the usual MinPts count, including the
//!   point itself.
//! - **Core point**: Carries at least `min_samples` weight within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border; labeled [`NOISE`].
//!
//! ## Algorithm Steps
//!
//! 1. Stable-sort the samples (weights carried along), remembering the
//!    permutation needed to restore input order.
//! 2. Classify cores: a point is core when the total sample weight inside
//!    `[v - eps, v + eps]` is at least `min_samples`.
//! 3. Group cores: walk the core points in value order; a gap greater than
//!    `eps` between consecutive core points starts a new cluster id.
//! 4. Assign non-cores: each remaining point joins the cluster of its nearest
//!    core point if that core is within `eps`, otherwise it is noise.
//! 5. Scatter the labels back into input order.
//!
//! ## When to Use
//!
//! - Data is scalar (timestamps, positions along an axis, 1D projections)
//! - Number of clusters unknown
//! - Data has outliers
//!
//! For multi-dimensional data use a general DBSCAN implementation; this crate
//! intentionally supports only the 1D case.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use super::sorted::{prefix_sums, SortedView};
use crate::error::{Error, Result};

/// Label assigned to noise points.
pub const NOISE: i64 = -1;

/// DBSCAN estimator for one-dimensional data.
///
/// Follows the usual estimator calling convention: construct with parameters,
/// then [`fit`](Dbscan1D::fit) or [`fit_predict`](Dbscan1D::fit_predict).
/// Results of the last successful fit stay on the estimator until the next
/// successful fit overwrites them; a failed fit leaves them untouched.
#[derive(Debug, Clone)]
pub struct Dbscan1D {
    /// Epsilon: maximum distance for neighborhood.
    eps: f64,
    /// Minimum cumulative neighbor weight for core classification.
    min_samples: usize,
    /// Cluster label per input point, set by the last successful fit.
    labels: Option<Vec<i64>>,
    /// Ascending input indices of core points, set by the last successful fit.
    core_sample_indices: Option<Vec<usize>>,
}

impl Dbscan1D {
    /// Create a new estimator using the Euclidean metric.
    ///
    /// # Arguments
    ///
    /// * `eps` - Maximum distance between two points to be neighbors.
    /// * `min_samples` - Minimum cumulative neighbor weight (the point's own
    ///   weight counts) for a point to be core.
    pub fn new(eps: f64, min_samples: usize) -> Self {
        Self {
            eps,
            min_samples,
            labels: None,
            core_sample_indices: None,
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Set the minimum neighborhood weight for core classification.
    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Select the distance metric by name.
    ///
    /// Only `"euclidean"` (case-insensitive) is supported; any other name is
    /// rejected here, before any data is processed.
    pub fn with_metric(self, metric: &str) -> Result<Self> {
        if metric.eq_ignore_ascii_case("euclidean") {
            Ok(self)
        } else {
            Err(Error::UnsupportedMetric {
                requested: metric.to_string(),
            })
        }
    }

    /// Epsilon (neighborhood radius).
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Minimum neighborhood weight for core classification.
    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Labels from the last successful fit, in input order.
    ///
    /// Each label is a cluster id `>= 0`, or [`NOISE`]. `None` before the
    /// first successful fit.
    pub fn labels(&self) -> Option<&[i64]> {
        self.labels.as_deref()
    }

    /// Ascending input indices of the core points from the last successful
    /// fit. `None` before the first successful fit.
    pub fn core_sample_indices(&self) -> Option<&[usize]> {
        self.core_sample_indices.as_deref()
    }

    /// Cluster the samples in `x`, storing labels and core indices on the
    /// estimator. Returns the estimator for chaining.
    ///
    /// `sample_weight`, when given, must have one non-negative weight per
    /// sample; `None` means unit weights. An empty `x` is not an error: it
    /// produces empty results.
    pub fn fit(&mut self, x: &[f64], sample_weight: Option<&[f64]>) -> Result<&mut Self> {
        self.validate(x.len(), sample_weight)?;

        let unit_weights;
        let weights = match sample_weight {
            Some(w) => w,
            None => {
                unit_weights = vec![1.0f64; x.len()];
                &unit_weights
            }
        };

        let (labels, core_sample_indices) = cluster(x, weights, self.eps, self.min_samples as f64);
        self.labels = Some(labels);
        self.core_sample_indices = Some(core_sample_indices);
        Ok(self)
    }

    /// [`fit`](Dbscan1D::fit) for row-shaped (n×1) input.
    ///
    /// Accepts the common "column vector" layout where each sample is its own
    /// single-element row. Any row that is not exactly one-dimensional is
    /// rejected.
    pub fn fit_rows(
        &mut self,
        rows: &[Vec<f64>],
        sample_weight: Option<&[f64]>,
    ) -> Result<&mut Self> {
        let mut flat = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() != 1 {
                return Err(Error::DimensionMismatch {
                    expected: 1,
                    found: row.len(),
                });
            }
            flat.push(row[0]);
        }
        self.fit(&flat, sample_weight)
    }

    /// Fit and return the labels directly.
    pub fn fit_predict(&mut self, x: &[f64], sample_weight: Option<&[f64]>) -> Result<Vec<i64>> {
        self.fit(x, sample_weight)?;
        Ok(self.labels.clone().unwrap_or_default())
    }

    fn validate(&self, n_samples: usize, sample_weight: Option<&[f64]>) -> Result<()> {
        if !self.eps.is_finite() || self.eps < 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be finite and non-negative",
            });
        }

        if self.min_samples == 0 {
            return Err(Error::InvalidParameter {
                name: "min_samples",
                message: "must be at least 1",
            });
        }

        if let Some(w) = sample_weight {
            if w.len() != n_samples {
                return Err(Error::WeightLengthMismatch {
                    expected: n_samples,
                    found: w.len(),
                });
            }
        }

        Ok(())
    }
}

impl Default for Dbscan1D {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

/// Run the full pipeline: (labels in input order, ascending core indices).
fn cluster(x: &[f64], weights: &[f64], eps: f64, min_samples: f64) -> (Vec<i64>, Vec<usize>) {
    let n = x.len();
    let sorted = SortedView::new(x, weights);
    let is_core = classify_cores(&sorted.values, &sorted.weights, eps, min_samples);

    let mut cores = Vec::new();
    let mut non_cores = Vec::new();
    for (&v, &core) in sorted.values.iter().zip(is_core.iter()) {
        if core {
            cores.push(v);
        } else {
            non_cores.push(v);
        }
    }

    let core_ids = group_cores(&cores, eps);
    let non_core_labels = assign_non_cores(&non_cores, &cores, &core_ids, eps);

    // Interleave core and non-core labels back into sorted order.
    let mut sorted_labels = Vec::with_capacity(n);
    let (mut next_core, mut next_non_core) = (0, 0);
    for &core in &is_core {
        if core {
            sorted_labels.push(core_ids[next_core]);
            next_core += 1;
        } else {
            sorted_labels.push(non_core_labels[next_non_core]);
            next_non_core += 1;
        }
    }

    // Undo the sort.
    let mut labels = vec![NOISE; n];
    for (pos, &orig) in sorted.order.iter().enumerate() {
        labels[orig] = sorted_labels[pos];
    }
    let core_sample_indices = (0..n).filter(|&i| is_core[sorted.rank[i]]).collect();

    (labels, core_sample_indices)
}

/// Mark each sorted point whose eps-neighborhood weight reaches `min_samples`.
///
/// For a point with value `v` the neighborhood is the closed interval
/// `[v - eps, v + eps]`, located as a half-open index range `[lo, hi)` in the
/// sorted array. The point's own weight always lies inside that range. With
/// `eps == 0` only exactly-equal values count as neighbors.
fn classify_cores(values: &[f64], weights: &[f64], eps: f64, min_samples: f64) -> Vec<bool> {
    let prefix = prefix_sums(weights);
    values
        .iter()
        .map(|&v| {
            let lo = values.partition_point(|&u| u < v - eps);
            let hi = values.partition_point(|&u| u <= v + eps);
            prefix[hi] - prefix[lo] >= min_samples
        })
        .collect()
}

/// Assign increasing cluster ids to core points in ascending value order.
///
/// A gap greater than `eps` between consecutive core points starts a new id.
/// The first core point always gets id 0; it is never compared against a
/// wrapped-around last element, which would make the numbering depend on the
/// spread of the whole dataset.
fn group_cores(cores: &[f64], eps: f64) -> Vec<i64> {
    let mut ids = Vec::with_capacity(cores.len());
    let mut id: i64 = 0;
    for (k, &c) in cores.iter().enumerate() {
        if k > 0 && c - cores[k - 1] > eps {
            id += 1;
        }
        ids.push(id);
    }
    ids
}

/// Label each non-core point with its nearest core's cluster id, or [`NOISE`]
/// when the nearest core is farther than `eps` (or no cores exist).
///
/// `cores` is ascending, so the nearest core is one of the two around the
/// insertion position. With exactly one core both candidates clamp to the
/// same index.
fn assign_non_cores(non_cores: &[f64], cores: &[f64], core_ids: &[i64], eps: f64) -> Vec<i64> {
    if cores.is_empty() {
        return vec![NOISE; non_cores.len()];
    }

    let last = cores.len() - 1;
    non_cores
        .iter()
        .map(|&x| {
            let pos = cores.partition_point(|&c| c < x);
            let right = pos.min(last);
            let left = pos.saturating_sub(1).min(last);

            let dist_left = (x - cores[left]).abs();
            let dist_right = (x - cores[right]).abs();
            // Ties go to the left neighbor.
            let (idx, dist) = if dist_left <= dist_right {
                (left, dist_left)
            } else {
                (right, dist_right)
            };

            if dist <= eps {
                core_ids[idx]
            } else {
                NOISE
            }
        })
        .collect()
}
