//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TrackError {
    #[error("File is not accessible.")]
    FileAccess(#[source] std::io::Error),

    #[error("Input data must be JSON.")]
    NotJson,

    #[error("The input data should be a dictionary")]
    NotAnObject,

    #[error("Missing keys in dictionary. Must have keys metadata and tracks.")]
    MissingKeys,

    #[error("Missing data in dictionary. Metadata must have keys datetime, end, mapsize and elevation.")]
    MissingMetadata,

    #[error("Missing data in track information. Must have keys cc, elevation, road and terrain.")]
    MissingTrackData,

    /// A value had the wrong JSON type, e.g. a chain code that is not a string.
    #[error("{0}")]
    InvalidType(String),

    /// A value had the right type but is not allowed, e.g. an unknown road letter.
    #[error("{0}")]
    InvalidValue(String),

    #[error("Date is not valid.")]
    InvalidDate,

    #[error("No tracks stored.")]
    NoTracks,

    #[error("Track number given is larger than the number of tracks stored ({len}).")]
    TrackIndex { index: usize, len: usize },

    #[error("Number of clusters must be smaller than the number of given points.")]
    TooFewPoints { clusters: usize, points: usize },

    #[error("No Internet Connection.")]
    Connection(#[source] reqwest::Error),

    #[error("Track service returned an error: {0}")]
    Service(#[source] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackError {
    pub(crate) fn invalid_type(message: impl Into<String>) -> Self {
        TrackError::InvalidType(message.into())
    }

    pub(crate) fn invalid_value(message: impl Into<String>) -> Self {
        TrackError::InvalidValue(message.into())
    }
}
