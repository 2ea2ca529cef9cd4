use geo::Point;
use hashbrown::{HashMap, HashSet};
use log::{info, warn};
use petgraph::graph::DiGraph;
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::model::{Intersection, Restriction, Road, RoadNetwork, Segment};
use crate::{Error, NodeId, RoadId};

/// Incrementally assembles a validated [`RoadNetwork`].
///
/// Every reference is checked as it is added, so the query algorithms can
/// assume a well-formed graph: no dangling segment endpoints, no segments
/// on unknown roads, no negative lengths.
#[derive(Debug, Default)]
pub struct RoadNetworkBuilder {
    graph: DiGraph<Intersection, Segment>,
    node_index: HashMap<NodeId, petgraph::graph::NodeIndex>,
    roads: HashMap<RoadId, Road>,
    restrictions: HashSet<Restriction>,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_intersection(&mut self, id: NodeId, x: f64, y: f64) -> Result<(), Error> {
        if self.node_index.contains_key(&id) {
            return Err(Error::InvalidData(format!(
                "duplicate intersection id {id}"
            )));
        }
        let idx = self.graph.add_node(Intersection {
            id,
            geometry: Point::new(x, y),
        });
        self.node_index.insert(id, idx);
        Ok(())
    }

    pub fn add_road(&mut self, road: Road) -> Result<(), Error> {
        if self.roads.contains_key(&road.id) {
            return Err(Error::InvalidData(format!("duplicate road id {}", road.id)));
        }
        self.roads.insert(road.id, road);
        Ok(())
    }

    /// Adds a directed segment of `road` from `from` to `to`.
    ///
    /// For a two-way road the mirrored reverse segment is materialized as
    /// well, with the same length and the same road reference, so both
    /// directions are independently traversable.
    pub fn add_segment(
        &mut self,
        road: RoadId,
        from: NodeId,
        to: NodeId,
        length: f64,
    ) -> Result<(), Error> {
        let oneway = self.roads.get(&road).ok_or(Error::UnknownRoad(road))?.oneway;
        if !length.is_finite() || length < 0.0 {
            return Err(Error::InvalidData(format!(
                "segment of road {road} has invalid length {length}"
            )));
        }
        let from_idx = self.node_index.get(&from).copied().ok_or(Error::UnknownNode(from))?;
        let to_idx = self.node_index.get(&to).copied().ok_or(Error::UnknownNode(to))?;

        self.graph.add_edge(from_idx, to_idx, Segment { road, length });
        if !oneway {
            self.graph.add_edge(to_idx, from_idx, Segment { road, length });
        }
        Ok(())
    }

    /// Records a forbidden `from -> via -> to` transition. Duplicates are
    /// idempotent.
    pub fn add_restriction(&mut self, from: NodeId, via: NodeId, to: NodeId) -> Result<(), Error> {
        for id in [from, via, to] {
            if !self.node_index.contains_key(&id) {
                return Err(Error::UnknownNode(id));
            }
        }
        self.restrictions.insert(Restriction { from, via, to });
        Ok(())
    }

    pub fn build(self) -> RoadNetwork {
        let rtree = RTree::bulk_load(
            self.graph
                .node_indices()
                .map(|idx| {
                    let point = self.graph[idx].geometry;
                    GeomWithData::new([point.x(), point.y()], idx)
                })
                .collect(),
        );

        let network = RoadNetwork {
            graph: self.graph,
            node_index: self.node_index,
            roads: self.roads,
            restrictions: self.restrictions,
            rtree,
        };

        info!(
            "Road network built: {} intersections, {} segments, {} roads, {} restrictions",
            network.node_count(),
            network.segment_count(),
            network.road_count(),
            network.restrictions.len()
        );

        let orphans = network.orphan_count();
        if orphans > 0 {
            warn!("{orphans} intersections have no segments attached");
        }

        network
    }
}
