//! Data model for the road network graph

pub mod components;
pub mod network;

pub use components::{CostMode, Intersection, Restriction, Road, Segment, TravelMode};
pub use network::{IndexedPoint, RoadNetwork};
