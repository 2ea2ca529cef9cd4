use thiserror::Error;

use crate::{NodeId, RoadId};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown intersection id {0}")]
    UnknownNode(NodeId),
    #[error("Unknown road id {0}")]
    UnknownRoad(RoadId),
    #[error("Unrecognised travel mode: {0}")]
    InvalidTravelMode(String),
    #[error("Unrecognised cost mode: {0}")]
    InvalidCostMode(String),
    #[error("No intersections available for snapping")]
    NoPointsFound,
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
