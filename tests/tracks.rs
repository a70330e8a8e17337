use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracknaliser::{Coord, Summary, load_tracksfile, save_tracksfile};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

#[test]
fn test_load_short_tracks() {
    let tracks = load_tracksfile(data("short_tracks.json")).unwrap();

    assert_eq!(tracks.len(), 5);
    assert_eq!(tracks.to_string(), "<Tracks: 5 from (2, 3) to (4, 2)>");
    assert_eq!(tracks.start, Coord::new(2, 3));
    assert_eq!(tracks.end, Coord::new(4, 2));
    assert_eq!(tracks.map_size, Coord::new(5, 5));
    assert_eq!(tracks.date.format("%Y-%m-%dT%H:%M:%S").to_string(), "2021-12-11T21:12:20");
}

#[test]
fn test_best_tracks() {
    let tracks = load_tracksfile(data("short_tracks.json")).unwrap();
    let expected = "<SingleTrack: starts at (2, 3) - 5 steps>";

    assert_eq!(tracks.greenest().unwrap().to_string(), expected);
    assert_eq!(tracks.shortest().unwrap().to_string(), expected);
    assert_eq!(tracks.fastest().unwrap().to_string(), expected);
}

#[test]
fn test_get_track() {
    let tracks = load_tracksfile(data("short_tracks.json")).unwrap();

    assert_eq!(tracks.get_track(0).unwrap().to_string(), "<SingleTrack: starts at (2, 3) - 11 steps>");
    assert_eq!(tracks.get_track(1).unwrap().to_string(), "<SingleTrack: starts at (2, 3) - 9 steps>");
    assert_eq!(tracks.get_track(2).unwrap().to_string(), "<SingleTrack: starts at (2, 3) - 7 steps>");
    assert!(tracks.get_track(5).is_err());
}

#[test]
fn test_every_track_ends_at_the_destination() {
    let tracks = load_tracksfile(data("short_tracks.json")).unwrap();
    for track in &tracks {
        assert_eq!(track.end(), tracks.end);
        assert_eq!(track.corners().last(), Some(&tracks.end));
    }
}

#[test]
fn test_greenest_summary() {
    let tracks = load_tracksfile(data("short_tracks.json")).unwrap();
    let summary = Summary::from_track(tracks.greenest().unwrap());

    assert_eq!(
        summary.render(false),
        "Path: [(2, 3), (2, 4), (4, 4), (4, 2)]\nCO2: 1.01 kg\nTime: 0:04:15"
    );
}

#[test]
fn test_kmeans_on_loaded_tracks() {
    let tracks = load_tracksfile(data("short_tracks.json")).unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let groups = tracks.kmeans_with_rng(10, 2, &mut rng).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups.iter().map(Vec::len).sum::<usize>(), 5);
}

#[test]
fn test_save_and_reload() {
    let tracks = load_tracksfile(data("short_tracks.json")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("copy.json");

    save_tracksfile(&tracks, &path).unwrap();
    let reloaded = load_tracksfile(&path).unwrap();
    assert_eq!(reloaded, tracks);
}
