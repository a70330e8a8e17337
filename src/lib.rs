//! Tracknaliser loads and analyses tracks across landscapes.
//!
//! A landscape is a grid of at most 300 x 300 cells. A track walks across it
//! following a chain code, with a road and terrain type for every step and an
//! elevation for every cell it visits.
//!
//! - [`load`]: read track sets from JSON files or the track web service
//! - [`track`]: [`SingleTrack`] and [`Tracks`], with CO2, time and distance
//! - [`cluster`]: k-means over plain vectors and over `ndarray` matrices
//! - [`route`]: turn-by-turn directions for a chosen track
//!
//! # Examples
//! ```rust
//! use tracknaliser::{Coord, SingleTrack};
//!
//! let track = SingleTrack::new(
//!     Coord::new(2, 3),
//!     "11233344111",
//!     "llmmmmlrrrr",
//!     "pggppdddppg",
//!     vec![17, 18, 19, 24, 23, 22, 21, 16, 11, 12, 13, 14],
//! )
//! .unwrap();
//!
//! assert_eq!(track.to_string(), "<SingleTrack: starts at (2, 3) - 11 steps>");
//! assert_eq!(track.corners().len(), 6);
//! ```

pub use ndarray::Array2;

pub mod cluster;
pub mod error;
pub mod load;
pub mod route;
pub mod track;

pub use cluster::{Cluster, Clusters, KMeans, cluster, cluster_ndarray};
pub use error::{Result, TrackError};
pub use load::{
    HttpTrackService, TrackQuery, TrackService, load_tracksfile, save_tracksfile, tracks_from_value,
    tracks_to_value,
};
pub use route::{Route, Summary};
pub use track::{Coord, Road, RoadSpeeds, SingleTrack, Step, Terrain, Tracks, VehicleModel};

pub type Matrix = Array2<f64>;
