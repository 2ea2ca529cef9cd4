//! Road network model and graph queries
//!
//! The crate represents a road network as a directed graph of intersections
//! and road segments, built once through [`loading::RoadNetworkBuilder`] and
//! immutable afterwards. Two query families run against it:
//!
//! - [`routing::find_path`]: A* shortest path between two intersections
//!   under a distance or travel-time metric, filtered by travel mode and
//!   honoring turn restrictions
//! - [`algo::find_articulation_points`]: intersections whose removal
//!   disconnects the network, computed over the undirected closure
//!
//! All per-query state lives in the query itself, so any number of queries
//! may run concurrently against a shared `&RoadNetwork`.

pub mod algo;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{CostMode, Intersection, Restriction, Road, RoadNetwork, Segment, TravelMode};

/// Identifier of an intersection, as assigned by the data source
pub type NodeId = i64;

/// Identifier of a road
pub type RoadId = i64;

/// Fastest speed limit in the speed-class table, km/h.
/// Used as the divisor for the admissible time heuristic.
pub const MAX_SPEED_KMH: f64 =
    model::components::SPEED_LIMITS[model::components::SPEED_LIMITS.len() - 1];
