//! Road network components - intersections, segments, roads and restrictions

use std::str::FromStr;

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::{Error, NodeId, RoadId};

/// Speed limit in km/h for each speed class (0-6).
/// Classes outside the table fall back to the slowest entry.
/// The last entry doubles as the time-heuristic divisor
/// [`MAX_SPEED_KMH`](crate::MAX_SPEED_KMH).
pub(crate) const SPEED_LIMITS: [f64; 7] = [4.0, 18.0, 36.0, 54.0, 72.0, 90.0, 99.0];

/// Graph node: a point where road segments meet
#[derive(Debug, Clone)]
pub struct Intersection {
    /// Identifier assigned by the data source
    pub id: NodeId,
    /// Projected x/y coordinates
    pub geometry: Point<f64>,
}

/// Graph edge: one traversable direction of a road between two intersections
///
/// A two-way road produces a mirrored pair of segments, both referencing
/// the same [`Road`].
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    /// Owning road
    pub road: RoadId,
    /// Length in km
    pub length: f64,
}

/// A named road grouping one or more segments.
///
/// Immutable after loading; many segments may reference one road.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Road {
    pub id: RoadId,
    pub name: String,
    /// City qualifier for full-name uniqueness
    pub city: Option<String>,
    pub oneway: bool,
    /// Speed class 0-6, mapped to a fixed speed-limit table
    pub speed_class: u8,
    pub not_for_cars: bool,
    pub not_for_pedestrians: bool,
    pub not_for_bicycles: bool,
}

impl Road {
    pub fn new(id: RoadId, name: impl Into<String>, oneway: bool, speed_class: u8) -> Self {
        Road {
            id,
            name: name.into(),
            city: None,
            oneway,
            speed_class,
            not_for_cars: false,
            not_for_pedestrians: false,
            not_for_bicycles: false,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_exclusions(mut self, cars: bool, pedestrians: bool, bicycles: bool) -> Self {
        self.not_for_cars = cars;
        self.not_for_pedestrians = pedestrians;
        self.not_for_bicycles = bicycles;
        self
    }

    /// Name with the city qualifier appended, when present
    pub fn full_name(&self) -> String {
        match &self.city {
            Some(city) => format!("{} {}", self.name, city),
            None => self.name.clone(),
        }
    }

    /// Speed limit in km/h from the fixed speed-class table
    pub fn speed_limit(&self) -> f64 {
        SPEED_LIMITS
            .get(usize::from(self.speed_class))
            .copied()
            .unwrap_or(SPEED_LIMITS[0])
    }

    /// Whether the road is usable for the given travel mode
    pub fn allows(&self, mode: TravelMode) -> bool {
        match mode {
            TravelMode::Car => !self.not_for_cars,
            TravelMode::Bike => !self.not_for_bicycles,
            TravelMode::Walking => !self.not_for_pedestrians,
        }
    }
}

/// A forbidden three-node transition: arriving at `via` from `from`
/// and continuing to `to` is disallowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Restriction {
    pub from: NodeId,
    pub via: NodeId,
    pub to: NodeId,
}

/// Travel mode selecting which roads are traversable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Car,
    Bike,
    Walking,
}

impl FromStr for TravelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "car" => Ok(TravelMode::Car),
            "bike" => Ok(TravelMode::Bike),
            "walking" => Ok(TravelMode::Walking),
            other => Err(Error::InvalidTravelMode(other.to_string())),
        }
    }
}

/// Cost metric for path search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostMode {
    /// Path length in km
    Distance,
    /// Estimated traversal time in hours under the speed-limit table
    Time,
}

impl FromStr for CostMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "distance" => Ok(CostMode::Distance),
            "time" => Ok(CostMode::Time),
            other => Err(Error::InvalidCostMode(other.to_string())),
        }
    }
}
