//! Iterative k-means clustering over fixed-dimension numeric points.
//!
//! Given N points of dimensionality D, a cluster count k, and an iteration
//! budget n, the engine seeds k centroids from a sample of the points,
//! assigns every point to its nearest centroid, recomputes centroid means n
//! times, and exposes the outcome as a lazy grouping of points by cluster.
//!
//! ## Core Types
//!
//! - [`Point`] — Fixed-dimension numeric tuple, `Copy`, const-generic in D
//! - [`Centroid`] — Identified cluster center in the promoted representation
//! - [`KMeans`] — Borrowed result view: centroids, sizes, lazy clusters
//!
//! ## Algorithms
//!
//! - [`cluster`] — Reference scheme: assign once, then n mean updates
//! - [`cluster_lloyd`] — Alternating scheme: re-assign after every update
//!
//! ## Collaborators
//!
//! - [`Element`] — Coordinate scalar with its promoted floating `Mean` type
//! - [`Sampler`] — "k distinct indices without replacement" primitive;
//!   [`RngSampler`] adapts any `rand::Rng`, [`FixedSampler`] pins a run
//!
//! The engine never installs a logger, spawns no I/O, and mutates nothing
//! but the caller's assignment slice.
mod centroid;
mod distance;
mod element;
mod engine;
mod error;
mod point;
mod result;
mod sample;

pub use centroid::*;
pub use distance::*;
pub use element::*;
pub use engine::*;
pub use error::*;
pub use point::*;
pub use result::*;
pub use sample::*;
