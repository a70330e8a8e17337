use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::document::{tracks_from_value, tracks_to_value};
use crate::error::{Result, TrackError};
use crate::track::Tracks;

/// Loads a track set from a `.json` track document.
pub fn load_tracksfile(path: impl AsRef<Path>) -> Result<Tracks> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(TrackError::FileAccess)?;

    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        return Err(TrackError::NotJson);
    }
    let doc: Value = serde_json::from_str(&content).map_err(|_| TrackError::NotJson)?;

    debug!(path = %path.display(), "loading tracks file");
    tracks_from_value(&doc)
}

/// Writes `tracks` as a track document that [`load_tracksfile`] reads back.
pub fn save_tracksfile(tracks: &Tracks, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let doc = tracks_to_value(tracks)?;
    fs::write(path, serde_json::to_string(&doc)?)?;

    info!(path = %path.display(), n_tracks = tracks.len(), "tracks saved");
    Ok(())
}
