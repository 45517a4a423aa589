//! Density clustering for one-dimensional data.
//!
//! ## Why 1D Gets Its Own Implementation
//!
//! General DBSCAN implementations pay for n-dimensional neighbor search: a
//! spatial index at best, all-pairs distances at worst. Scalar data can be
//! sorted instead, which makes every eps-neighborhood a contiguous slice of
//! the sorted array and drops the whole fit to O(n log n). The labels this
//! module produces match what a general DBSCAN would produce on the same 1D
//! data, so [`Dbscan1D`] can stand in for one wherever the data is scalar.
//!
//! ## Labels
//!
//! Each point receives an `i64` label: a cluster id starting at 0 and
//! contiguous in ascending value order, or [`NOISE`] (-1) for outliers.
//! Sample weights are supported; with unit weights `min_samples` is the
//! familiar MinPts neighbor count, the point itself included.
//!
//! ## Usage
//!
//! ```rust
//! use dbscan1d::{Dbscan1D, NOISE};
//!
//! let x = [1.0, 1.1, 1.2, 5.0, 5.1, 5.2, 42.0];
//!
//! let mut model = Dbscan1D::new(0.3, 2);
//! let labels = model.fit_predict(&x, None).unwrap();
//!
//! assert_eq!(labels, vec![0, 0, 0, 1, 1, 1, NOISE]);
//! assert_eq!(model.core_sample_indices().unwrap(), &[0, 1, 2, 3, 4, 5]);
//! ```

mod dbscan;
mod sorted;

pub use dbscan::{Dbscan1D, NOISE};
