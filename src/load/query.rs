use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use super::document::tracks_from_value;
use super::validate::{check_point, check_structure};
use crate::error::{Result, TrackError};
use crate::track::{Coord, Tracks};

pub const DEFAULT_SERVICE_URL: &str = "http://ucl-rse-with-python.herokuapp.com/road-tracks/tracks/";

/// Source of raw track documents.
pub trait TrackService {
    fn fetch(&self, query: &TrackQuery) -> Result<Value>;
}

/// Fetches track documents over HTTP.
#[derive(Clone, Debug)]
pub struct HttpTrackService {
    base_url: String,
    timeout: Duration,
}

impl Default for HttpTrackService {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl HttpTrackService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl TrackService for HttpTrackService {
    fn fetch(&self, query: &TrackQuery) -> Result<Value> {
        let url = query.url(&self.base_url);
        info!(%url, "querying track service");

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TrackError::Service)?;

        let response = client.get(&url).send().map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                TrackError::Connection(e)
            } else {
                TrackError::Service(e)
            }
        })?;

        response
            .error_for_status()
            .map_err(TrackError::Service)?
            .json()
            .map_err(TrackError::Service)
    }
}

/// Parameters of a request for tracks between two points.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackQuery {
    start: Coord,
    end: Coord,
    min_steps_straight: i64,
    max_steps_straight: Option<i64>,
    n_tracks: i64,
}

impl Default for TrackQuery {
    fn default() -> Self {
        Self {
            start: Coord::new(0, 0),
            end: Coord::new(299, 299),
            min_steps_straight: 1,
            max_steps_straight: None,
            n_tracks: 300,
        }
    }
}

impl TrackQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: Coord) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: Coord) -> Self {
        self.end = end;
        self
    }

    pub fn min_steps_straight(mut self, steps: i64) -> Self {
        self.min_steps_straight = steps;
        self
    }

    pub fn max_steps_straight(mut self, steps: i64) -> Self {
        self.max_steps_straight = Some(steps);
        self
    }

    pub fn n_tracks(mut self, n_tracks: i64) -> Self {
        self.n_tracks = n_tracks;
        self
    }

    pub fn get_start(&self) -> Coord {
        self.start
    }

    pub fn get_end(&self) -> Coord {
        self.end
    }

    pub fn get_n_tracks(&self) -> i64 {
        self.n_tracks
    }

    /// Defaults to five more than the minimum.
    pub fn get_max_steps_straight(&self) -> i64 {
        self.max_steps_straight.unwrap_or(self.min_steps_straight + 5)
    }

    pub fn validate(&self) -> Result<()> {
        check_point("start", self.start)?;
        check_point("end", self.end)?;

        let max_steps = self.get_max_steps_straight();
        if self.min_steps_straight < 0 || max_steps < 0 || self.n_tracks < 0 {
            return Err(TrackError::invalid_value(
                "The value of steps straight and n_tracks should be positive integer.",
            ));
        }
        if self.min_steps_straight > max_steps {
            return Err(TrackError::invalid_value(
                "max_steps_straight must be greater than min_steps_straight.",
            ));
        }
        Ok(())
    }

    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}?start_point_x={}&start_point_y={}&n_tracks={}&end_point_x={}&end_point_y={}&min_steps_straight={}&max_steps_straight={}",
            base_url,
            self.start.x,
            self.start.y,
            self.n_tracks,
            self.end.x,
            self.end.y,
            self.min_steps_straight,
            self.get_max_steps_straight(),
        )
    }

    /// Queries `service` and returns the checked track set.
    pub fn run<S: TrackService + ?Sized>(&self, service: &S) -> Result<Tracks> {
        let doc = self.fetch_checked(service)?;
        tracks_from_value(&doc)
    }

    /// Queries `service` and stores the raw document in `dir`, named after the
    /// query and the document's timestamp. Returns the path written.
    pub fn save<S: TrackService + ?Sized>(&self, service: &S, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let doc = self.fetch_checked(service)?;
        let datetime = doc["metadata"]["datetime"]
            .as_str()
            .ok_or_else(|| TrackError::invalid_type("The type of date must be string"))?;

        let path = dir.as_ref().join(self.file_name(datetime));
        fs::write(&path, serde_json::to_string(&doc)?)?;

        info!(path = %path.display(), "track document saved");
        Ok(path)
    }

    /// `tracks_<datetime digits>_<n_tracks>_<start x>_<start y>_<end x>_<end y>.json`
    pub fn file_name(&self, datetime: &str) -> String {
        let stamp: String = datetime.chars().filter(|c| c.is_alphanumeric()).collect();
        format!(
            "tracks_{}_{}_{}_{}_{}_{}.json",
            stamp, self.n_tracks, self.start.x, self.start.y, self.end.x, self.end.y
        )
    }

    fn fetch_checked<S: TrackService + ?Sized>(&self, service: &S) -> Result<Value> {
        self.validate()?;
        let doc = service.fetch(self)?;
        check_structure(&doc)?;
        Ok(doc)
    }
}
