//! Structural analyses over the road network

mod articulation;

pub use articulation::find_articulation_points;
