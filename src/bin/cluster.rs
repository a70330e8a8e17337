//! cluster
//!
//! Separates points read from a file into clusters. The file holds one point
//! per line, coordinates separated by commas.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use tracknaliser::{Matrix, cluster, cluster_ndarray};

/// Separating points into clusters.
#[derive(Parser, Debug)]
#[command(name = "cluster", version, about, long_about = None)]
struct Args {
    /// Input a dataset to analyse
    data: PathBuf,

    /// Number of iterations
    #[arg(long, default_value_t = 10)]
    iters: usize,

    /// Number of clusters
    #[arg(long, default_value_t = 3)]
    clusters: usize,

    /// Use the ndarray implementation
    #[arg(long)]
    vectorised: bool,

    /// Seed for picking the initial centres
    #[arg(long)]
    seed: Option<u64>,
}

fn read_points(path: &Path) -> Result<Vec<Vec<f64>>> {
    let content = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            line.trim()
                .split(',')
                .map(|v| v.trim().parse::<f64>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .with_context(|| format!("line {}: not a list of numbers", n + 1))
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let points = read_points(&args.data)?;
    if points.is_empty() {
        bail!("{} contains no points", args.data.display());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let clusters = if args.vectorised {
        let dimension = points[0].len();
        if points.iter().any(|p| p.len() != dimension) {
            bail!("all points must have the same number of coordinates");
        }
        let flat: Vec<f64> = points.iter().flatten().copied().collect();
        let matrix = Matrix::from_shape_vec((points.len(), dimension), flat)?;
        cluster_ndarray(&matrix, args.iters, args.clusters, &mut rng)?
    } else {
        cluster(&points, args.iters, args.clusters, &mut rng)?
    };

    print!("{}", clusters);
    Ok(())
}
