//! Turn-by-turn directions along a track.
//!
//! A [`Route`] walks the corners of a track and describes every straight leg:
//! its compass heading, its length in km and the turn taken at its end. A
//! [`Summary`] adds the CO2 and travel time of the track and renders the text
//! printed by `greentrack`.

use std::fmt;

use crate::track::{Coord, SingleTrack};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    North,
    South,
    East,
    West,
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "north",
            Heading::South => "south",
            Heading::East => "east",
            Heading::West => "west",
        };
        f.write_str(name)
    }
}

/// Turns are named on the map, not relative to the driver: leaving a
/// north/south leg is `left` (towards smaller x) or `right`, leaving an
/// east/west leg is `down` (towards smaller y) or `up`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
    Up,
    Down,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Turn::Left => "left",
            Turn::Right => "right",
            Turn::Up => "up",
            Turn::Down => "down",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    pub heading: Heading,
    /// Length in km.
    pub length: i64,
    /// Corner the leg ends at.
    pub to: Coord,
    /// `None` on the final leg.
    pub turn: Option<Turn>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub start: Coord,
    pub legs: Vec<Leg>,
}

impl Route {
    /// Builds the legs between consecutive corners. Repeated corners are
    /// skipped.
    pub fn from_corners(corners: &[Coord]) -> Self {
        let mut points: Vec<Coord> = Vec::with_capacity(corners.len());
        for &corner in corners {
            if points.last() != Some(&corner) {
                points.push(corner);
            }
        }

        let start = points.first().copied().unwrap_or(Coord::new(0, 0));
        let mut legs = Vec::with_capacity(points.len().saturating_sub(1));

        for (i, pair) in points.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            let (dx, dy) = (to.x - from.x, to.y - from.y);
            let heading = if dx != 0 {
                if dx > 0 { Heading::East } else { Heading::West }
            } else if dy > 0 {
                Heading::North
            } else {
                Heading::South
            };

            let turn = points.get(i + 2).map(|next| match heading {
                Heading::North | Heading::South => {
                    if next.x < to.x { Turn::Left } else { Turn::Right }
                }
                Heading::East | Heading::West => {
                    if next.y < to.y { Turn::Down } else { Turn::Up }
                }
            });

            legs.push(Leg {
                heading,
                length: (dx + dy).abs(),
                to,
                turn,
            });
        }

        Self { start, legs }
    }

    pub fn destination(&self) -> Coord {
        self.legs.last().map(|leg| leg.to).unwrap_or(self.start)
    }
}

/// What `greentrack` reports about a track.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub corners: Vec<Coord>,
    /// kg
    pub co2: f64,
    /// hours
    pub time: f64,
}

impl Summary {
    pub fn from_track(track: &SingleTrack) -> Self {
        Self {
            corners: track.corners(),
            co2: track.co2(),
            time: track.time(),
        }
    }

    pub fn render(&self, verbose: bool) -> String {
        let mut out = String::new();

        if verbose {
            let route = Route::from_corners(&self.corners);
            out.push_str(&format!("Path:\n- Start from {}\n", route.start));
            for leg in &route.legs {
                match leg.turn {
                    Some(turn) => out.push_str(&format!(
                        "- Go {} for {} km, turn {} at {}\n",
                        leg.heading, leg.length, turn, leg.to
                    )),
                    None => out.push_str(&format!("- Go {} for {} km,\n", leg.heading, leg.length)),
                }
            }
            out.push_str(&format!("- reach your destination at {}\n", route.destination()));
        } else {
            let path: Vec<String> = self.corners.iter().map(Coord::to_string).collect();
            out.push_str(&format!("Path: [{}]\n", path.join(", ")));
        }

        out.push_str(&format!("CO2: {:.2} kg\nTime: {}", self.co2, format_duration(self.time)));
        out
    }
}

/// Formats hours as `H:MM:SS`, prefixed with the number of days past 24 h.
pub fn format_duration(hours: f64) -> String {
    let total = (hours * 3600.0).round_ties_even().max(0.0) as u64;
    let days = total / 86_400;
    let rest = total % 86_400;
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);

    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}
