use chrono::NaiveDateTime;
use rand::Rng;
use std::fmt;

use super::single::SingleTrack;
use super::types::Coord;
use crate::Matrix;
use crate::cluster::KMeans;
use crate::error::{Result, TrackError};

/// A set of tracks between the same start and end points.
#[derive(Clone, Debug, PartialEq)]
pub struct Tracks {
    pub start: Coord,
    pub end: Coord,
    pub map_size: Coord,
    /// When the query producing these tracks was run.
    pub date: NaiveDateTime,
    pub tracks: Vec<SingleTrack>,
}

impl Tracks {
    pub fn new(start: Coord, end: Coord, map_size: Coord, date: NaiveDateTime, tracks: Vec<SingleTrack>) -> Self {
        Self {
            start,
            end,
            map_size,
            date,
            tracks,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SingleTrack> {
        self.tracks.iter()
    }

    /// The track releasing the least CO2.
    pub fn greenest(&self) -> Result<&SingleTrack> {
        self.min_by(SingleTrack::co2)
    }

    /// The track taking the least time.
    pub fn fastest(&self) -> Result<&SingleTrack> {
        self.min_by(SingleTrack::time)
    }

    /// The track covering the least distance.
    pub fn shortest(&self) -> Result<&SingleTrack> {
        self.min_by(SingleTrack::distance)
    }

    pub fn get_track(&self, index: usize) -> Result<&SingleTrack> {
        if self.is_empty() {
            return Err(TrackError::NoTracks);
        }
        self.tracks.get(index).ok_or(TrackError::TrackIndex {
            index,
            len: self.len(),
        })
    }

    /// Groups tracks with similar CO2, time and distance.
    ///
    /// Returns one list of track indices per cluster.
    pub fn kmeans(&self, iterations: usize, clusters: usize) -> Result<Vec<Vec<usize>>> {
        self.kmeans_with_rng(iterations, clusters, &mut rand::thread_rng())
    }

    pub fn kmeans_with_rng<R: Rng + ?Sized>(
        &self,
        iterations: usize,
        clusters: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec<usize>>> {
        if clusters == 0 {
            return Err(TrackError::invalid_value("Number of clusters must be > 0."));
        }

        let features = self.features();
        let mut kmeans = KMeans::new(clusters).max_iter(iterations);
        kmeans.fit_with_rng(&features, rng)?;

        let mut groups = vec![Vec::new(); clusters];
        if let Some(labels) = kmeans.labels.as_ref() {
            for (index, &label) in labels.iter().enumerate() {
                groups[label].push(index);
            }
        }
        Ok(groups)
    }

    /// One row per track: CO2, time, distance.
    pub fn features(&self) -> Matrix {
        let mut features = Matrix::zeros((self.len(), 3));
        for (i, track) in self.tracks.iter().enumerate() {
            features[[i, 0]] = track.co2();
            features[[i, 1]] = track.time();
            features[[i, 2]] = track.distance();
        }
        features
    }

    fn min_by(&self, measure: impl Fn(&SingleTrack) -> f64) -> Result<&SingleTrack> {
        let mut best: Option<(&SingleTrack, f64)> = None;
        for track in &self.tracks {
            let value = measure(track);
            match best {
                Some((_, best_value)) if value >= best_value => {}
                _ => best = Some((track, value)),
            }
        }
        best.map(|(track, _)| track).ok_or(TrackError::NoTracks)
    }
}

impl<'a> IntoIterator for &'a Tracks {
    type Item = &'a SingleTrack;
    type IntoIter = std::slice::Iter<'a, SingleTrack>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

impl fmt::Display for Tracks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Tracks: {} from {} to {}>", self.len(), self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_tracks() -> Tracks {
        let start = Coord::new(2, 3);
        let tracks = vec![
            SingleTrack::new(start, "11233344111", "llmmmmlrrrr", "pggppdddppg", vec![17, 18, 19, 24, 23, 22, 21, 16, 11, 12, 13, 14]),
            SingleTrack::new(start, "443411122", "rrrrrrrrr", "ppddppggg", vec![17, 12, 7, 6, 1, 2, 3, 4, 9, 14]),
            SingleTrack::new(start, "3341111", "llrrrrr", "ddddppg", vec![17, 16, 15, 10, 11, 12, 13, 14]),
            SingleTrack::new(start, "21144", "mmmlr", "ppggg", vec![17, 22, 23, 24, 19, 14]),
            SingleTrack::new(start, "343411121", "lrrrrrrrr", "dddddpppg", vec![17, 16, 11, 10, 5, 6, 7, 8, 13, 14]),
        ]
        .into_iter()
        .collect::<Result<Vec<_>>>()
        .unwrap();

        let date = NaiveDate::from_ymd_opt(2021, 12, 11).unwrap().and_hms_opt(21, 12, 20).unwrap();
        Tracks::new(start, Coord::new(4, 2), Coord::new(5, 5), date, tracks)
    }

    fn empty_tracks() -> Tracks {
        let date = NaiveDate::from_ymd_opt(2021, 12, 11).unwrap().and_hms_opt(0, 0, 0).unwrap();
        Tracks::new(Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2), date, Vec::new())
    }

    #[test]
    fn test_display_and_len() {
        let tracks = sample_tracks();
        assert_eq!(tracks.len(), 5);
        assert_eq!(tracks.to_string(), "<Tracks: 5 from (2, 3) to (4, 2)>");
    }

    #[test]
    fn test_best_tracks() {
        let tracks = sample_tracks();
        let expected = "<SingleTrack: starts at (2, 3) - 5 steps>";
        assert_eq!(tracks.greenest().unwrap().to_string(), expected);
        assert_eq!(tracks.fastest().unwrap().to_string(), expected);
        assert_eq!(tracks.shortest().unwrap().to_string(), expected);
    }

    #[test]
    fn test_get_track() {
        let tracks = sample_tracks();
        assert_eq!(tracks.get_track(0).unwrap().n_steps(), 11);
        assert_eq!(tracks.get_track(1).unwrap().n_steps(), 9);
        assert_eq!(tracks.get_track(2).unwrap().n_steps(), 7);
        assert!(matches!(tracks.get_track(5), Err(TrackError::TrackIndex { index: 5, len: 5 })));
    }

    #[test]
    fn test_empty_tracks() {
        let tracks = empty_tracks();
        assert!(matches!(tracks.greenest(), Err(TrackError::NoTracks)));
        assert!(matches!(tracks.fastest(), Err(TrackError::NoTracks)));
        assert!(matches!(tracks.shortest(), Err(TrackError::NoTracks)));
        assert!(matches!(tracks.get_track(0), Err(TrackError::NoTracks)));
    }

    #[test]
    fn test_kmeans_groups_every_track_once() {
        let tracks = sample_tracks();
        let mut rng = StdRng::seed_from_u64(7);
        let groups = tracks.kmeans_with_rng(10, 3, &mut rng).unwrap();

        assert_eq!(groups.len(), 3);
        let mut all: Vec<usize> = groups.into_iter().flatten().collect();
        all.sort_unstable();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_kmeans_too_many_clusters() {
        let tracks = sample_tracks();
        assert!(matches!(tracks.kmeans(10, 6), Err(TrackError::TooFewPoints { .. })));
    }

    #[test]
    fn test_features() {
        let features = sample_tracks().features();
        assert_eq!(features.shape(), &[5, 3]);
        assert!((features[[3, 2]] - 5.000038499765378).abs() < 1e-12);
    }
}
