//! Construction of the road network from provider-supplied data

mod builder;

pub use builder::RoadNetworkBuilder;
