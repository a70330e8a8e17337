use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::validate::{DATE_FORMAT, check_metadata, check_structure, check_track_fields};
use crate::error::Result;
use crate::track::{Coord, SingleTrack, Tracks};

#[derive(Debug, Serialize)]
struct TracksDocument {
    metadata: Metadata,
    tracks: Vec<TrackRecord>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    datetime: String,
    start: Coord,
    end: Coord,
    mapsize: Coord,
}

#[derive(Debug, Serialize)]
struct TrackRecord {
    cc: String,
    road: String,
    terrain: String,
    elevation: Vec<i64>,
}

/// Builds a [`Tracks`] from a parsed track document, checking its structure
/// and every value in it.
pub fn tracks_from_value(doc: &Value) -> Result<Tracks> {
    check_structure(doc)?;

    let (start, end, map_size, date) = check_metadata(&doc["metadata"])?;

    let mut tracks = Vec::new();
    if let Some(records) = doc["tracks"].as_array() {
        for record in records {
            let (cc, road, terrain, elevation) = check_track_fields(record)?;
            tracks.push(SingleTrack::new(start, cc, road, terrain, elevation)?);
        }
    }

    debug!(n_tracks = tracks.len(), %start, %end, "track document accepted");
    Ok(Tracks::new(start, end, map_size, date, tracks))
}

/// The track document describing `tracks`, in the layout
/// [`tracks_from_value`] reads.
pub fn tracks_to_value(tracks: &Tracks) -> Result<Value> {
    let doc = TracksDocument {
        metadata: Metadata {
            datetime: tracks.date.format(DATE_FORMAT).to_string(),
            start: tracks.start,
            end: tracks.end,
            mapsize: tracks.map_size,
        },
        tracks: tracks
            .iter()
            .map(|track| TrackRecord {
                cc: track.chain_code(),
                road: track.road(),
                terrain: track.terrain(),
                elevation: track.elevation().to_vec(),
            })
            .collect(),
    };
    Ok(serde_json::to_value(doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackError;
    use serde_json::json;

    fn sample_doc() -> Value {
        json!({
            "metadata": {
                "datetime": "2021-12-11T21:12:20",
                "start": [2, 3],
                "end": [4, 2],
                "mapsize": [5, 5],
                "n_tracks": 2
            },
            "tracks": [
                {"cc": "3341111", "road": "llrrrrr", "terrain": "ddddppg", "elevation": [17, 16, 15, 10, 11, 12, 13, 14]},
                {"cc": "21144", "road": "mmmlr", "terrain": "ppggg", "elevation": [17, 22, 23, 24, 19, 14]}
            ]
        })
    }

    #[test]
    fn test_tracks_from_value() {
        let tracks = tracks_from_value(&sample_doc()).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks.start, Coord::new(2, 3));
        assert_eq!(tracks.end, Coord::new(4, 2));
        assert_eq!(tracks.map_size, Coord::new(5, 5));
        assert_eq!(tracks.get_track(1).unwrap().chain_code(), "21144");
    }

    #[test]
    fn test_document_written_back() {
        let tracks = tracks_from_value(&sample_doc()).unwrap();
        let value = tracks_to_value(&tracks).unwrap();

        assert_eq!(value["metadata"]["start"], json!([2, 3]));
        assert_eq!(value["metadata"]["datetime"], json!("2021-12-11T21:12:20"));
        assert_eq!(value["tracks"][0]["cc"], json!("3341111"));
        assert_eq!(tracks_from_value(&value).unwrap(), tracks);
    }

    #[test]
    fn test_bad_track_value() {
        let mut doc = sample_doc();
        doc["tracks"][0]["road"] = json!("llrrrrx");
        let err = tracks_from_value(&doc).unwrap_err();
        assert!(matches!(err, TrackError::InvalidValue(_)));
        assert_eq!(err.to_string(), "Road type must consist of the characters r, l or m.");
    }

    #[test]
    fn test_extreme_elevations_accepted() {
        let mut doc = sample_doc();
        doc["tracks"][1]["elevation"] = json!([i64::MIN, 0, i64::MAX, 0, 0, 0]);

        let tracks = tracks_from_value(&doc).unwrap();
        let track = tracks.get_track(1).unwrap();
        assert!(track.distance().is_finite());
        assert!(track.co2().is_finite());
        assert!(track.time().is_finite());
    }
}
