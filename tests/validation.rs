use serde_json::{Value, json};
use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tracknaliser::{
    Coord, HttpTrackService, Result, TrackError, TrackQuery, TrackService, Tracks, load_tracksfile,
};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

/// Serves a fixed document and counts requests.
struct StubService {
    doc: Value,
    calls: Cell<usize>,
}

impl StubService {
    fn new(doc: Value) -> Self {
        Self { doc, calls: Cell::new(0) }
    }
}

impl TrackService for StubService {
    fn fetch(&self, _query: &TrackQuery) -> Result<Value> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.doc.clone())
    }
}

fn short_doc() -> Value {
    let content = fs::read_to_string(data("short_tracks.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// ---- loading ----

#[test]
fn test_no_file() {
    let err = load_tracksfile(data("dd/ss")).unwrap_err();
    assert!(matches!(err, TrackError::FileAccess(_)));
    assert!(err.to_string().contains("File is not accessible."));
}

#[test]
fn test_not_json() {
    let err = load_tracksfile(data("samples.csv")).unwrap_err();
    assert!(err.to_string().contains("Input data must be JSON."));
}

#[test]
fn test_invalid_structure() {
    let err = load_tracksfile(data("missing_tracks_key.json")).unwrap_err();
    assert!(err.to_string().contains("Missing keys in dictionary. Must have keys metadata and tracks."));

    let err = load_tracksfile(data("missing_metadata_key.json")).unwrap_err();
    assert!(err.to_string().contains(
        "Missing data in dictionary. Metadata must have keys datetime, end, mapsize and elevation."
    ));

    let err = load_tracksfile(data("missing_track_key.json")).unwrap_err();
    assert!(err.to_string().contains(
        "Missing data in track information. Must have keys cc, elevation, road and terrain."
    ));
}

#[test]
fn test_broken_json_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"metadata\": ").unwrap();

    assert!(matches!(load_tracksfile(&path), Err(TrackError::NotJson)));
}

// ---- querying ----

#[test]
fn test_query_validation() {
    let service = StubService::new(short_doc());

    let err = TrackQuery::new().start(Coord::new(-1, -1)).run(&service).unwrap_err();
    assert!(err.to_string().contains("Coordinate of start (-1, -1) is outside of the maximum map size."));

    let err = TrackQuery::new().end(Coord::new(300, 300)).run(&service).unwrap_err();
    assert!(err.to_string().contains("Coordinate of end (300, 300) is outside of the maximum map size."));

    let err = TrackQuery::new().min_steps_straight(-1).run(&service).unwrap_err();
    assert!(err.to_string().contains("The value of steps straight and n_tracks should be positive integer."));

    let err = TrackQuery::new().min_steps_straight(3).max_steps_straight(2).run(&service).unwrap_err();
    assert!(err.to_string().contains("max_steps_straight must be greater than min_steps_straight."));

    // invalid queries never reach the service
    assert_eq!(service.calls.get(), 0);
}

#[test]
fn test_query_run() {
    let service = StubService::new(short_doc());
    let tracks = TrackQuery::new()
        .start(Coord::new(2, 3))
        .end(Coord::new(4, 2))
        .n_tracks(5)
        .run(&service)
        .unwrap();

    assert_eq!(service.calls.get(), 1);
    assert_eq!(tracks.len(), 5);
    assert_eq!(tracks.greenest().unwrap().n_steps(), 5);
}

#[test]
fn test_query_rejects_malformed_document() {
    let service = StubService::new(json!({"tracks": []}));
    let err = TrackQuery::new().run(&service).unwrap_err();
    assert!(matches!(err, TrackError::MissingKeys));
}

#[test]
fn test_query_save() {
    let service = StubService::new(short_doc());
    let dir = tempfile::tempdir().unwrap();

    let path = TrackQuery::new()
        .start(Coord::new(2, 3))
        .end(Coord::new(4, 2))
        .n_tracks(5)
        .save(&service, dir.path())
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "tracks_20211211T211220_5_2_3_4_2.json"
    );
    let tracks = load_tracksfile(&path).unwrap();
    assert_eq!(tracks.to_string(), "<Tracks: 5 from (2, 3) to (4, 2)>");
}

// ---- http service ----

/// Runs `query` against `service` off the async runtime, as the blocking
/// client requires.
async fn run_blocking(query: TrackQuery, service: HttpTrackService) -> Result<Tracks> {
    tokio::task::spawn_blocking(move || query.run(&service)).await.unwrap()
}

#[test]
fn test_no_connection() {
    // nothing listens on the discard port
    let service = HttpTrackService::new("http://127.0.0.1:9/");
    let err = TrackQuery::new().run(&service).unwrap_err();
    assert!(matches!(err, TrackError::Connection(_)));
    assert_eq!(err.to_string(), "No Internet Connection.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_service_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/road-tracks/tracks/"))
        .and(query_param("start_point_x", "2"))
        .and(query_param("end_point_y", "2"))
        .and(query_param("n_tracks", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(short_doc()))
        .expect(1)
        .mount(&server)
        .await;

    let query = TrackQuery::new().start(Coord::new(2, 3)).end(Coord::new(4, 2)).n_tracks(5);
    let service = HttpTrackService::new(format!("{}/road-tracks/tracks/", server.uri()));
    let tracks = run_blocking(query, service).await.unwrap();

    assert_eq!(tracks.to_string(), "<Tracks: 5 from (2, 3) to (4, 2)>");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_service_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = HttpTrackService::new(format!("{}/tracks/", server.uri()));
    let err = run_blocking(TrackQuery::new(), service).await.unwrap_err();

    assert!(matches!(err, TrackError::Service(_)));
    assert_ne!(err.to_string(), "No Internet Connection.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_service_body_not_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let service = HttpTrackService::new(format!("{}/tracks/", server.uri()));
    let err = run_blocking(TrackQuery::new(), service).await.unwrap_err();

    assert!(matches!(err, TrackError::Service(_)));
}
