//! greentrack
//!
//! Finds the greenest of the tracks the track service offers between two
//! points and prints directions for it.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tracknaliser::load::DEFAULT_SERVICE_URL;
use tracknaliser::{Coord, HttpTrackService, Summary, TrackQuery};

/// Find the greenest path
#[derive(Parser, Debug)]
#[command(name = "greentrack", version, about, long_about = None)]
struct Args {
    /// Start point of the track
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, default_values_t = [0, 0])]
    start: Vec<i64>,

    /// End point of the track
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true, default_values_t = [299, 299])]
    end: Vec<i64>,

    /// Describe the greenest track turn by turn
    #[arg(long)]
    verbose: bool,

    /// Number of tracks to compare
    #[arg(long, default_value_t = 50)]
    n_tracks: i64,

    /// Track service endpoint
    #[arg(long, env = "TRACKNALISER_URL", default_value = DEFAULT_SERVICE_URL)]
    url: String,

    /// Request timeout in seconds
    #[arg(long, env = "TRACKNALISER_TIMEOUT", default_value_t = 30)]
    timeout: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let query = TrackQuery::new()
        .start(Coord::new(args.start[0], args.start[1]))
        .end(Coord::new(args.end[0], args.end[1]))
        .n_tracks(args.n_tracks);
    let service = HttpTrackService::new(args.url).timeout(Duration::from_secs(args.timeout));

    let tracks = match query.run(&service) {
        Ok(tracks) => tracks,
        Err(error) => Args::command()
            .error(clap::error::ErrorKind::ValueValidation, error)
            .exit(),
    };
    info!(%tracks, "tracks received");

    let greenest = tracks.greenest()?;
    println!("{}", Summary::from_track(greenest).render(args.verbose));

    Ok(())
}
