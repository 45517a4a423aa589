//! DBSCAN for one-dimensional data.
//!
//! `dbscan1d` clusters scalar values by density: mutually close, densely
//! packed points form clusters, sparse points are flagged as noise, and the
//! number of clusters is discovered rather than chosen up front. Because the
//! data is 1D it is sorted once, and every neighborhood query becomes two
//! binary searches plus a prefix-sum lookup, so a fit runs in O(n log n)
//! instead of the O(n²) a naive DBSCAN would take.
//!
//! The primary public API is [`Dbscan1D`] under [`cluster`]: construct with
//! `eps` and `min_samples`, then call `fit` (results kept on the estimator)
//! or `fit_predict` (labels returned directly). Optional per-sample weights
//! are supported.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Dbscan1D, NOISE};
pub use error::{Error, Result};
