use chrono::NaiveDateTime;
use serde_json::Value;
use std::fmt;

use crate::error::{Result, TrackError};
use crate::track::Coord;

/// Landscapes are at most this many cells along each axis.
pub const MAX_MAP_SIZE: i64 = 300;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const METADATA_KEYS: [&str; 4] = ["datetime", "end", "mapsize", "start"];
const TRACK_KEYS: [&str; 4] = ["cc", "elevation", "road", "terrain"];

/// Checks that a document has the metadata and per-track keys a track set
/// needs. Values are not inspected.
pub fn check_structure(doc: &Value) -> Result<()> {
    let doc = doc.as_object().ok_or(TrackError::NotAnObject)?;

    let (Some(metadata), Some(tracks)) = (doc.get("metadata"), doc.get("tracks")) else {
        return Err(TrackError::MissingKeys);
    };

    let metadata = metadata.as_object().ok_or(TrackError::MissingMetadata)?;
    if METADATA_KEYS.iter().any(|key| !metadata.contains_key(*key)) {
        return Err(TrackError::MissingMetadata);
    }

    let tracks = tracks
        .as_array()
        .ok_or_else(|| TrackError::invalid_type("Tracks must be a list."))?;
    for track in tracks {
        let complete = track
            .as_object()
            .is_some_and(|track| TRACK_KEYS.iter().all(|key| track.contains_key(*key)));
        if !complete {
            return Err(TrackError::MissingTrackData);
        }
    }

    Ok(())
}

/// Parses a JSON coordinate pair and checks it against the landscape bounds.
///
/// `name` is `"map size"`, `"start"` or `"end"`; map sizes may reach
/// [`MAX_MAP_SIZE`], start and end points must be strictly inside it.
pub fn check_coordinate(name: &str, value: &Value) -> Result<Coord> {
    let shown = Shown(value);
    let Some(items) = value.as_array() else {
        return Err(TrackError::invalid_type(format!(
            "Coordinate of {name} {shown} must be List or Tuple."
        )));
    };
    if items.len() != 2 {
        return Err(TrackError::invalid_value(format!(
            "Coordinate of {name} {shown} must be 2D."
        )));
    }

    let mut xy = [0i64; 2];
    for (slot, item) in xy.iter_mut().zip(items) {
        *slot = item.as_i64().ok_or_else(|| {
            TrackError::invalid_type(format!("Coordinate of {name} {shown} must be integer."))
        })?;
    }

    let coord = Coord::new(xy[0], xy[1]);
    check_bounds(name, coord, &shown.to_string())?;
    Ok(coord)
}

/// A JSON value as it appears in error messages:
/// `[1, 2]`, `'a'`, `{'x': 1}`.
struct Shown<'a>(&'a Value);

impl fmt::Display for Shown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "'{s}'"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", Shown(item))?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{key}': {}", Shown(item))?;
                }
                f.write_str("}")
            }
        }
    }
}

pub(crate) fn check_point(name: &str, coord: Coord) -> Result<()> {
    check_bounds(name, coord, &coord.to_string())
}

fn check_bounds(name: &str, coord: Coord, shown: &str) -> Result<()> {
    let limit = if name == "map size" { MAX_MAP_SIZE } else { MAX_MAP_SIZE - 1 };
    let inside = |v: i64| (0..=limit).contains(&v);
    if inside(coord.x) && inside(coord.y) {
        return Ok(());
    }

    if name == "map size" {
        Err(TrackError::invalid_value("The maximum map size is 300 x 300."))
    } else {
        Err(TrackError::invalid_value(format!(
            "Coordinate of {name} {shown} is outside of the maximum map size."
        )))
    }
}

/// Checks the metadata of a track set and returns (start, end, map size, date).
pub(crate) fn check_metadata(metadata: &Value) -> Result<(Coord, Coord, Coord, NaiveDateTime)> {
    let date = metadata["datetime"]
        .as_str()
        .ok_or_else(|| TrackError::invalid_type("The type of date must be string"))?;
    let date = NaiveDateTime::parse_from_str(date, DATE_FORMAT).map_err(|_| TrackError::InvalidDate)?;

    let map_size = check_coordinate("map size", &metadata["mapsize"])?;
    let end = check_coordinate("end", &metadata["end"])?;
    let start = check_coordinate("start", &metadata["start"])?;

    if end.x > map_size.x || end.y > map_size.y {
        return Err(TrackError::invalid_value("Coordinate of end is outside of map."));
    }
    if start.x > map_size.x || start.y > map_size.y {
        return Err(TrackError::invalid_value("Coordinate of start is outside of map."));
    }

    Ok((start, end, map_size, date))
}

/// Type checks for the raw fields of one track. Length and alphabet checks
/// happen in [`SingleTrack::new`](crate::SingleTrack::new).
pub(crate) fn check_track_fields(track: &Value) -> Result<(&str, &str, &str, Vec<i64>)> {
    let cc = track["cc"]
        .as_str()
        .ok_or_else(|| TrackError::invalid_type("Chain code must be string."))?;
    let road = track["road"]
        .as_str()
        .ok_or_else(|| TrackError::invalid_type("Road type must be string."))?;
    let terrain = track["terrain"]
        .as_str()
        .ok_or_else(|| TrackError::invalid_type("Terrain must be string."))?;

    let elevation = track["elevation"]
        .as_array()
        .ok_or_else(|| TrackError::invalid_type("The elevation of a single track should be a list."))?
        .iter()
        .map(|h| {
            h.as_i64().ok_or_else(|| {
                TrackError::invalid_type("Elements in the elevation list should be integer.")
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((cc, road, terrain, elevation))
}
