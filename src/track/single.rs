use std::fmt;

use super::model::{RoadSpeeds, VehicleModel};
use super::types::{Coord, Road, Step, Terrain};
use crate::error::{Result, TrackError};

/// One track across a landscape.
///
/// A track with N steps visits N + 1 cells: `steps`, `road` and `terrain`
/// have one entry per step, `elevation` one entry (in metres) per cell.
#[derive(Clone, Debug, PartialEq)]
pub struct SingleTrack {
    pub start: Coord,
    steps: Vec<Step>,
    road: Vec<Road>,
    terrain: Vec<Terrain>,
    elevation: Vec<i64>,
}

/// Series describing the shape of a track, for plotting.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackProfile {
    /// Cumulative distance travelled (km) at each cell.
    pub distance: Vec<f64>,
    /// Elevation (m) at each cell.
    pub elevation: Vec<i64>,
    /// The corners of the track, in order.
    pub path: Vec<Coord>,
}

impl SingleTrack {
    pub fn new(start: Coord, cc: &str, road: &str, terrain: &str, elevation: Vec<i64>) -> Result<Self> {
        let n_steps = cc.chars().count();
        if n_steps + 1 != elevation.len()
            || n_steps != terrain.chars().count()
            || n_steps != road.chars().count()
        {
            return Err(TrackError::invalid_value(
                "Please ensure that for each single track, the lengths of chaincode, terrain, road are same and equal to elevation - 1.",
            ));
        }

        let steps = cc.chars().map(Step::try_from).collect::<Result<Vec<_>>>()?;
        let road = road.chars().map(Road::try_from).collect::<Result<Vec<_>>>()?;
        let terrain = terrain.chars().map(Terrain::try_from).collect::<Result<Vec<_>>>()?;

        Ok(Self {
            start,
            steps,
            road,
            terrain,
            elevation,
        })
    }

    /// Number of cells visited, one more than the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len() + 1
    }

    pub fn n_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn chain_code(&self) -> String {
        self.steps.iter().map(|s| s.code()).collect()
    }

    pub fn road(&self) -> String {
        self.road.iter().map(|r| r.code()).collect()
    }

    pub fn terrain(&self) -> String {
        self.terrain.iter().map(|t| t.code()).collect()
    }

    pub fn elevation(&self) -> &[i64] {
        &self.elevation
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Start, every cell where the track turns by 90 degrees, and end.
    pub fn corners(&self) -> Vec<Coord> {
        let mut position = self.start;
        let mut corners = vec![position];
        let mut prev: Option<Step> = None;

        for &step in &self.steps {
            if let Some(prev) = prev {
                if prev.is_perpendicular_to(step) {
                    corners.push(position);
                }
            }
            position = position.step(step);
            prev = Some(step);
        }

        corners.push(position);
        corners
    }

    /// The last cell of the track.
    pub fn end(&self) -> Coord {
        self.steps.iter().fold(self.start, |pos, &step| pos.step(step))
    }

    /// Length of the track in km, including the climb.
    pub fn distance(&self) -> f64 {
        self.step_distances().sum()
    }

    /// Travel time in hours at the default road speeds.
    pub fn time(&self) -> f64 {
        self.time_with(&RoadSpeeds::default())
    }

    pub fn time_with(&self, speeds: &RoadSpeeds) -> f64 {
        self.step_distances()
            .zip(&self.road)
            .map(|(distance, &road)| distance / speeds.get(road))
            .sum()
    }

    /// CO2 released over the track in kg with the default vehicle.
    pub fn co2(&self) -> f64 {
        self.co2_with(&VehicleModel::default())
    }

    pub fn co2_with(&self, model: &VehicleModel) -> f64 {
        self.height_diffs()
            .zip(self.road.iter().zip(&self.terrain))
            .map(|(height_diff, (&road, &terrain))| {
                // a 1 km step, so metres / 10 gives percent
                let slope = height_diff / 10.0;
                model.emission(road, terrain, slope, step_distance(height_diff))
            })
            .sum()
    }

    pub fn profile(&self) -> TrackProfile {
        let mut distance = Vec::with_capacity(self.elevation.len());
        let mut travelled = 0.0;
        distance.push(travelled);
        for d in self.step_distances() {
            travelled += d;
            distance.push(travelled);
        }

        TrackProfile {
            distance,
            elevation: self.elevation.clone(),
            path: self.corners(),
        }
    }

    fn step_distances(&self) -> impl Iterator<Item = f64> + '_ {
        self.height_diffs().map(step_distance)
    }

    /// Climb of every step in metres. Taken in f64 so any pair of stored
    /// elevations has a difference.
    fn height_diffs(&self) -> impl Iterator<Item = f64> + '_ {
        self.elevation.windows(2).map(|pair| pair[1] as f64 - pair[0] as f64)
    }
}

fn step_distance(height_diff: f64) -> f64 {
    (1.0 + (height_diff / 1000.0).powi(2)).sqrt()
}

impl fmt::Display for SingleTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<SingleTrack: starts at {} - {} steps>", self.start, self.steps.len())
    }
}
