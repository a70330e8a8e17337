use ndarray::Array2;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracknaliser::{cluster, cluster_ndarray};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== K-Means Performance: Vec vs ndarray ===\n");
    println!("{:>8} {:>14} {:>14}", "samples", "vec (s)", "ndarray (s)");

    let mut rng = StdRng::seed_from_u64(2021);

    for n in (1000..=10_000).step_by(1000) {
        // three features in [0, 10), like (co2, time, distance) of a track set
        let x = Array2::random_using((n, 3), Uniform::new(0.0, 10.0), &mut rng);
        let points: Vec<Vec<f64>> = x.rows().into_iter().map(|row| row.to_vec()).collect();

        let start = Instant::now();
        cluster(&points, 10, 3, &mut rng)?;
        let plain = start.elapsed().as_secs_f64();

        let start = Instant::now();
        cluster_ndarray(&x, 10, 3, &mut rng)?;
        let vectorised = start.elapsed().as_secs_f64();

        println!("{:>8} {:>14.6} {:>14.6}", n, plain, vectorised);
    }

    Ok(())
}
