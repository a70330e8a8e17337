//! Tracks across a landscape and the measures computed on them.
//!
//! This module provides:
//! - `SingleTrack`: one chain-coded walk with road, terrain and elevation data
//! - `Tracks`: a set of tracks between the same two points, with selection
//!   of the greenest, fastest and shortest track and k-means grouping
//! - `VehicleModel` / `RoadSpeeds`: the consumption and speed tables used for
//!   CO2 and travel time
//!
//! # Examples
//!
//! ## Measuring a track
//! ```rust
//! use tracknaliser::{Coord, SingleTrack};
//!
//! let track = SingleTrack::new(Coord::new(1, 1), "212", "lmr", "pgd", vec![100, 150, 150, 100]).unwrap();
//!
//! println!("CO2: {:.3} kg", track.co2());
//! println!("Time: {:.3} h", track.time());
//! assert!((track.distance() - 3.002498439450079).abs() < 1e-12);
//! ```
//!
//! ## Picking the greenest track
//! ```rust
//! use chrono::NaiveDate;
//! use tracknaliser::{Coord, SingleTrack, Tracks};
//!
//! let start = Coord::new(2, 3);
//! let tracks = Tracks::new(
//!     start,
//!     Coord::new(4, 2),
//!     Coord::new(5, 5),
//!     NaiveDate::from_ymd_opt(2021, 12, 11).unwrap().and_hms_opt(21, 12, 20).unwrap(),
//!     vec![
//!         SingleTrack::new(start, "3341111", "llrrrrr", "ddddppg", vec![17, 16, 15, 10, 11, 12, 13, 14]).unwrap(),
//!         SingleTrack::new(start, "21144", "mmmlr", "ppggg", vec![17, 22, 23, 24, 19, 14]).unwrap(),
//!     ],
//! );
//!
//! let greenest = tracks.greenest().unwrap();
//! assert_eq!(greenest.to_string(), "<SingleTrack: starts at (2, 3) - 5 steps>");
//! ```

mod model;
mod single;
mod tracks;
mod types;

pub use model::{RoadSpeeds, VehicleModel};
pub use single::{SingleTrack, TrackProfile};
pub use tracks::Tracks;
pub use types::{Coord, Road, Step, Terrain};
