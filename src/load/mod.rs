//! Loading track sets from JSON files and from the track web service.
//!
//! A track document looks like:
//!
//! ```json
//! {"metadata": {"datetime": "2021-12-11T21:12:20", "start": [2, 3], "end": [4, 2], "mapsize": [5, 5]},
//!  "tracks": [{"cc": "21144", "road": "mmmlr", "terrain": "ppggg", "elevation": [17, 22, 23, 24, 19, 14]}]}
//! ```
//!
//! Every document is checked before it becomes a [`Tracks`](crate::Tracks):
//! the keys above must be present, chain codes, roads and terrains must use
//! their alphabets and agree in length with the elevations, the date must be
//! an ISO timestamp and all coordinates must fit in a 300 x 300 landscape.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use tracknaliser::tracks_from_value;
//!
//! let doc = json!({
//!     "metadata": {"datetime": "2021-12-11T21:12:20", "start": [2, 3], "end": [4, 2], "mapsize": [5, 5]},
//!     "tracks": [{"cc": "21144", "road": "mmmlr", "terrain": "ppggg", "elevation": [17, 22, 23, 24, 19, 14]}]
//! });
//!
//! let tracks = tracks_from_value(&doc).unwrap();
//! assert_eq!(tracks.to_string(), "<Tracks: 1 from (2, 3) to (4, 2)>");
//! ```

mod document;
mod file;
mod query;
mod validate;

pub use document::{tracks_from_value, tracks_to_value};
pub use file::{load_tracksfile, save_tracksfile};
pub use query::{DEFAULT_SERVICE_URL, HttpTrackService, TrackQuery, TrackService};
pub use validate::{MAX_MAP_SIZE, check_coordinate, check_structure};
