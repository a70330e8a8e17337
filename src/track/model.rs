use super::types::{Road, Terrain};

/// Fuel and CO2 model of the vehicle driving a track.
///
/// Consumption per step is `base_consumption / 100` litres per km, scaled by
/// the road, terrain and slope factors of the step.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleModel {
    base_consumption: f64,
    co2_per_litre: f64,
    road_factors: [f64; 3],
    terrain_factors: [f64; 3],
    slope_factors: [f64; 6],
}

impl Default for VehicleModel {
    fn default() -> Self {
        Self {
            base_consumption: 5.4,
            co2_per_litre: 2.6391,
            // residential, local, motorway
            road_factors: [1.4, 1.0, 1.25],
            // dirt, gravel, paved
            terrain_factors: [2.5, 1.25, 1.0],
            // -8%, -4%, 0%, 4%, 8%, 12%
            slope_factors: [0.16, 0.45, 1.0, 1.3, 2.35, 2.9],
        }
    }
}

impl VehicleModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Litres per 100 km under normal conditions.
    pub fn base_consumption(mut self, litres_per_100km: f64) -> Self {
        self.base_consumption = litres_per_100km;
        self
    }

    /// Kilograms of CO2 per litre of fuel.
    pub fn co2_per_litre(mut self, kg: f64) -> Self {
        self.co2_per_litre = kg;
        self
    }

    pub fn road_factor(mut self, road: Road, factor: f64) -> Self {
        self.road_factors[road.index()] = factor;
        self
    }

    pub fn terrain_factor(mut self, terrain: Terrain, factor: f64) -> Self {
        self.terrain_factors[terrain.index()] = factor;
        self
    }

    /// Factors for the slope bands centred on -8, -4, 0, 4, 8 and 12 percent.
    pub fn slope_factors(mut self, factors: [f64; 6]) -> Self {
        self.slope_factors = factors;
        self
    }

    pub(crate) fn road(&self, road: Road) -> f64 {
        self.road_factors[road.index()]
    }

    pub(crate) fn terrain(&self, terrain: Terrain) -> f64 {
        self.terrain_factors[terrain.index()]
    }

    pub(crate) fn slope(&self, slope_percent: f64) -> f64 {
        let band = if slope_percent < -6.0 {
            0
        } else if slope_percent < -2.0 {
            1
        } else if slope_percent <= 2.0 {
            2
        } else if slope_percent <= 6.0 {
            3
        } else if slope_percent <= 10.0 {
            4
        } else {
            5
        };
        self.slope_factors[band]
    }

    /// Kilograms of CO2 emitted over `distance` km.
    pub(crate) fn emission(&self, road: Road, terrain: Terrain, slope_percent: f64, distance: f64) -> f64 {
        self.base_consumption
            * self.terrain(terrain)
            * self.road(road)
            * self.slope(slope_percent)
            * distance
            * self.co2_per_litre
            / 100.0
    }
}

/// Average speed in km/h on each road type.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadSpeeds {
    speeds: [f64; 3],
}

impl Default for RoadSpeeds {
    fn default() -> Self {
        Self { speeds: [30.0, 80.0, 120.0] }
    }
}

impl RoadSpeeds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speed(mut self, road: Road, km_per_hour: f64) -> Self {
        if km_per_hour <= 0.0 {
            panic!("speed must be > 0, got {}", km_per_hour);
        }
        self.speeds[road.index()] = km_per_hour;
        self
    }

    pub fn get(&self, road: Road) -> f64 {
        self.speeds[road.index()]
    }
}
