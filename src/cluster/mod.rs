//! K-means clustering of points.
//!
//! This module provides two implementations of the same algorithm:
//! - `cluster`: points as plain `Vec<f64>`s, one loop per point and centre
//! - `cluster_ndarray` / `KMeans`: points as rows of a `Matrix`, using
//!   whole-array operations
//!
//! Both start from randomly picked input points, then alternate between
//! assigning every point to its nearest centre and moving every centre to the
//! mean of its points, for a fixed number of iterations. A centre left with no
//! points stays where it is.
//!
//! # Examples
//!
//! ```rust
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use tracknaliser::{cluster, cluster_ndarray};
//!
//! let points = vec![
//!     vec![1.0, 1.0],
//!     vec![1.5, 2.0],
//!     vec![8.0, 8.0],
//!     vec![8.5, 9.0],
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let clusters = cluster(&points, 10, 2, &mut rng).unwrap();
//! println!("{}", clusters);
//!
//! let x = array![[1.0, 1.0], [1.5, 2.0], [8.0, 8.0], [8.5, 9.0]];
//! let clusters = cluster_ndarray(&x, 10, 2, &mut rng).unwrap();
//! assert_eq!(clusters.labels.len(), 4);
//! ```

mod clusters;
mod kmeans;
mod vectorised;

pub use clusters::{Cluster, Clusters};
pub use kmeans::cluster;
pub use vectorised::{KMeans, cluster_ndarray};

use crate::error::{Result, TrackError};

fn check_inputs(n_points: usize, clusters: usize) -> Result<()> {
    if clusters == 0 {
        return Err(TrackError::invalid_value("Number of clusters must be > 0."));
    }
    if clusters > n_points {
        return Err(TrackError::TooFewPoints {
            clusters,
            points: n_points,
        });
    }
    Ok(())
}
