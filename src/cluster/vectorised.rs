use ndarray::Axis;
use ndarray_rand::{RandomExt, SamplingStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::{Clusters, check_inputs};
use crate::Matrix;
use crate::error::{Result, TrackError};

/// Clusters the rows of `points` into `clusters` groups over
/// `max_iterations` rounds.
///
/// Same contract as [`cluster`](super::cluster), except that the initial
/// centres are distinct rows of `points`.
pub fn cluster_ndarray<R: Rng + ?Sized>(
    points: &Matrix,
    max_iterations: usize,
    clusters: usize,
    rng: &mut R,
) -> Result<Clusters> {
    check_inputs(points.nrows(), clusters)?;

    let mut kmeans = KMeans::new(clusters).max_iter(max_iterations);
    kmeans.fit_with_rng(points, rng)?;

    let rows: Vec<Vec<f64>> = points.rows().into_iter().map(|row| row.to_vec()).collect();
    let centers: Vec<Vec<f64>> = kmeans
        .cluster_centers
        .as_ref()
        .map(|c| c.rows().into_iter().map(|row| row.to_vec()).collect())
        .unwrap_or_default();
    let labels = kmeans.labels.unwrap_or_default();

    Ok(Clusters::from_labels(&rows, centers, labels))
}

#[derive(Clone, Debug)]
pub struct KMeans {
    pub cluster_centers: Option<Matrix>,
    pub labels: Option<Vec<usize>>,
    pub inertia: Option<f64>,
    n_clusters: usize,
    max_iter: usize,
    random_state: Option<u64>,
}

impl KMeans {
    pub fn new(n_clusters: usize) -> Self {
        if n_clusters == 0 {
            panic!("n_clusters must be > 0, got {}", n_clusters);
        }

        Self {
            cluster_centers: None,
            labels: None,
            inertia: None,
            n_clusters,
            max_iter: 10,
            random_state: None,
        }
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.fit_with_rng(x, &mut rng)
    }

    pub fn fit_with_rng<R: Rng + ?Sized>(&mut self, x: &Matrix, rng: &mut R) -> Result<()> {
        if x.ncols() == 0 {
            return Err(TrackError::invalid_value(
                "Input matrix must have at least one feature",
            ));
        }
        check_inputs(x.nrows(), self.n_clusters)?;

        let mut centroids = x.sample_axis_using(
            Axis(0),
            self.n_clusters,
            SamplingStrategy::WithoutReplacement,
            rng,
        );
        let mut labels = nearest_centroids(x, &centroids);

        for iteration in 0..self.max_iter {
            if iteration > 0 {
                labels = nearest_centroids(x, &centroids);
            }

            for k in 0..self.n_clusters {
                let members: Vec<usize> = labels
                    .iter()
                    .enumerate()
                    .filter(|&(_, &label)| label == k)
                    .map(|(i, _)| i)
                    .collect();

                match x.select(Axis(0), &members).mean_axis(Axis(0)) {
                    Some(mean) => {
                        centroids.row_mut(k).assign(&mean);
                    }
                    None => {
                        warn!(cluster = k, iteration, "empty cluster keeps its centre");
                    }
                }
            }
        }

        // within-cluster sum of squares
        let mut inertia = 0.0;
        for (i, &k) in labels.iter().enumerate() {
            let diff = &x.row(i) - &centroids.row(k);
            inertia += diff.dot(&diff);
        }

        debug!(n_clusters = self.n_clusters, max_iter = self.max_iter, inertia, "k-means fitted");
        self.cluster_centers = Some(centroids);
        self.labels = Some(labels);
        self.inertia = Some(inertia);

        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vec<usize>> {
        let centroids = self.cluster_centers.as_ref().ok_or_else(|| {
            TrackError::invalid_value("KMeans not fitted. Call fit() first.")
        })?;

        if x.ncols() != centroids.ncols() {
            return Err(TrackError::invalid_value(format!(
                "Number of features in X ({}) doesn't match training data ({})",
                x.ncols(),
                centroids.ncols()
            )));
        }

        Ok(nearest_centroids(x, centroids))
    }

    /// Distance from every row of `x` to every centre, shape (rows, clusters).
    pub fn transform(&self, x: &Matrix) -> Result<Matrix> {
        let centroids = self.cluster_centers.as_ref().ok_or_else(|| {
            TrackError::invalid_value("KMeans not fitted. Call fit() first.")
        })?;

        if x.ncols() != centroids.ncols() {
            return Err(TrackError::invalid_value(format!(
                "Number of features in X ({}) doesn't match training data ({})",
                x.ncols(),
                centroids.ncols()
            )));
        }

        Ok(distances(x, centroids).reversed_axes())
    }
}

/// Distance matrix of shape (centres, points).
fn distances(points: &Matrix, centroids: &Matrix) -> Matrix {
    let diff = &points.view().insert_axis(Axis(0)) - &centroids.view().insert_axis(Axis(1));
    diff.mapv(|v| v * v).sum_axis(Axis(2)).mapv(f64::sqrt)
}

/// For every point, the index of the closest centre. The first centre wins ties.
fn nearest_centroids(points: &Matrix, centroids: &Matrix) -> Vec<usize> {
    distances(points, centroids)
        .columns()
        .into_iter()
        .map(|column| {
            let mut best = 0;
            for (k, &d) in column.iter().enumerate() {
                if d < column[best] {
                    best = k;
                }
            }
            best
        })
        .collect()
}
