use rand::Rng;
use tracing::{debug, warn};

use super::{Clusters, check_inputs};
use crate::error::{Result, TrackError};

/// Clusters `points` into `clusters` groups over `max_iterations` rounds.
///
/// Initial centres are drawn from `points` with replacement, so two centres
/// can start on the same point; the second of them then stays empty.
pub fn cluster<R: Rng + ?Sized>(
    points: &[Vec<f64>],
    max_iterations: usize,
    clusters: usize,
    rng: &mut R,
) -> Result<Clusters> {
    check_inputs(points.len(), clusters)?;

    let dimension = points[0].len();
    if dimension == 0 || points.iter().any(|p| p.len() != dimension) {
        return Err(TrackError::invalid_value(
            "All points must have the same, non-zero number of coordinates.",
        ));
    }

    let mut centers: Vec<Vec<f64>> = (0..clusters)
        .map(|_| points[rng.gen_range(0..points.len())].clone())
        .collect();

    let mut labels = allocate(points, &centers);
    for iteration in 0..max_iterations {
        if iteration > 0 {
            labels = allocate(points, &centers);
        }

        for (cluster_id, center) in centers.iter_mut().enumerate() {
            let allocated: Vec<&Vec<f64>> = points
                .iter()
                .zip(&labels)
                .filter(|(_, label)| **label == cluster_id)
                .map(|(point, _)| point)
                .collect();

            match mid_point(&allocated, dimension) {
                Some(mid) => *center = mid,
                None => warn!(cluster = cluster_id, iteration, "empty cluster keeps its centre"),
            }
        }
        debug!(iteration, clusters, "k-means iteration");
    }

    Ok(Clusters::from_labels(points, centers, labels))
}

fn allocate(points: &[Vec<f64>], centers: &[Vec<f64>]) -> Vec<usize> {
    points.iter().map(|point| find_best_cluster(point, centers)).collect()
}

/// Index of the nearest centre; the first one wins ties.
fn find_best_cluster(point: &[f64], centers: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut min_distance = f64::INFINITY;
    for (cluster_id, center) in centers.iter().enumerate() {
        let distance = calculate_distance(center, point);
        if distance < min_distance {
            min_distance = distance;
            best = cluster_id;
        }
    }
    best
}

fn calculate_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

fn mid_point(points: &[&Vec<f64>], dimension: usize) -> Option<Vec<f64>> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    Some(
        (0..dimension)
            .map(|i| points.iter().map(|p| p[i]).sum::<f64>() / n)
            .collect(),
    )
}
