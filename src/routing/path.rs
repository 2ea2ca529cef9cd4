use geo::{Coord, LineString};
use geojson::{Feature, Geometry, GeometryValue};
use serde::Serialize;
use serde_json::json;

use crate::model::RoadNetwork;
use crate::{Error, NodeId};

/// Result of a successful path search: the traversed intersections in
/// start-to-goal order and the accumulated cost under the query's cost mode
/// (km for distance, hours for time).
#[derive(Debug, Clone, Serialize)]
pub struct RoutePath {
    pub nodes: Vec<NodeId>,
    pub total_cost: f64,
}

impl RoutePath {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Converts the path to a `GeoJSON` `Feature` for the presentation layer:
    /// a `LineString` through the intersection coordinates.
    pub fn to_geojson(&self, network: &RoadNetwork) -> Result<Feature, Error> {
        let coords = self
            .nodes
            .iter()
            .map(|&id| network.location(id).map(Coord::from))
            .collect::<Result<Vec<_>, _>>()?;
        let geometry = Geometry::new(GeometryValue::from(&LineString::new(coords)));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "total_cost": self.total_cost,
                "node_count": self.nodes.len(),
            }
        });

        serde_json::from_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(&self, network: &RoadNetwork) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(network)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::RoadNetworkBuilder;
    use crate::model::Road;

    #[test]
    fn path_exports_as_linestring_feature() {
        let mut builder = RoadNetworkBuilder::new();
        builder.add_road(Road::new(1, "Main St", false, 3)).unwrap();
        builder.add_intersection(1, 0.0, 0.0).unwrap();
        builder.add_intersection(2, 1.0, 1.0).unwrap();
        builder.add_segment(1, 1, 2, 1.5).unwrap();
        let net = builder.build();

        let path = RoutePath {
            nodes: vec![1, 2],
            total_cost: 1.5,
        };
        let feature = path.to_geojson(&net).unwrap();

        // Assert on the serialized form: the wire format is the contract
        let value = serde_json::to_value(&feature).unwrap();
        assert_eq!(value["geometry"]["type"], "LineString");
        assert_eq!(value["geometry"]["coordinates"][0], json!([0.0, 0.0]));
        assert_eq!(value["geometry"]["coordinates"][1], json!([1.0, 1.0]));
        assert_eq!(value["properties"]["total_cost"], 1.5);
        assert_eq!(value["properties"]["node_count"], 2);

        assert!(path.to_geojson_string(&net).unwrap().contains("LineString"));
    }

    #[test]
    fn export_of_unknown_node_fails() {
        let net = RoadNetworkBuilder::new().build();
        let path = RoutePath {
            nodes: vec![42],
            total_cost: 0.0,
        };
        assert!(matches!(
            path.to_geojson(&net),
            Err(Error::UnknownNode(42))
        ));
    }
}
