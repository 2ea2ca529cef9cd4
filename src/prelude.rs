// Re-export key components
pub use crate::algo::find_articulation_points;
pub use crate::error::Error;
pub use crate::loading::RoadNetworkBuilder;
pub use crate::model::{
    CostMode, Intersection, Restriction, Road, RoadNetwork, Segment, TravelMode,
};
pub use crate::routing::{RoutePath, find_path, find_paths_one_to_many};

// Core identifier types
pub use crate::NodeId;
pub use crate::RoadId;
