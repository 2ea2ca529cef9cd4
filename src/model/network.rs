//! The road network graph and lookups over it

use geo::{BoundingRect, MultiPoint, Point, Rect};
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use rstar::RTree;
use rstar::primitives::GeomWithData;

use crate::model::{Intersection, Restriction, Road, Segment};
use crate::{Error, NodeId, RoadId};

/// Intersection position indexed for nearest-neighbour snapping
pub type IndexedPoint = GeomWithData<[f64; 2], NodeIndex>;

/// In-memory road network: directed graph of intersections and segments,
/// the roads they belong to, and the turn restriction set.
///
/// Structurally immutable after [`build`](crate::loading::RoadNetworkBuilder::build);
/// queries borrow it shared and keep their own transient state.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    pub graph: DiGraph<Intersection, Segment>,
    pub(crate) node_index: HashMap<NodeId, NodeIndex>,
    pub(crate) roads: HashMap<RoadId, Road>,
    pub(crate) restrictions: HashSet<Restriction>,
    pub(crate) rtree: RTree<IndexedPoint>,
}

impl RoadNetwork {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed segments, mirrored reverse segments included
    pub fn segment_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of intersections with no segments attached in either direction
    pub fn orphan_count(&self) -> usize {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph.neighbors_undirected(idx).next().is_none())
            .count()
    }

    pub fn restrictions(&self) -> &HashSet<Restriction> {
        &self.restrictions
    }

    pub(crate) fn node_index(&self, id: NodeId) -> Result<NodeIndex, Error> {
        self.node_index.get(&id).copied().ok_or(Error::UnknownNode(id))
    }

    pub fn road(&self, id: RoadId) -> Result<&Road, Error> {
        self.roads.get(&id).ok_or(Error::UnknownRoad(id))
    }

    /// Whether the transition `from -> via -> to` is forbidden
    pub fn is_restricted(&self, from: NodeId, via: NodeId, to: NodeId) -> bool {
        self.restrictions.contains(&Restriction { from, via, to })
    }

    pub fn location(&self, id: NodeId) -> Result<Point<f64>, Error> {
        Ok(self.graph[self.node_index(id)?].geometry)
    }

    /// Snaps a coordinate to the closest intersection
    pub fn nearest_node(&self, point: Point<f64>) -> Result<NodeId, Error> {
        self.rtree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|indexed| self.graph[indexed.data].id)
            .ok_or(Error::NoPointsFound)
    }

    /// Unique, sorted names of the roads meeting at an intersection.
    /// Incoming segments count too, so the end of a one-way road still
    /// reports its name.
    pub fn road_names_at(&self, id: NodeId) -> Result<Vec<String>, Error> {
        let idx = self.node_index(id)?;
        let names = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .chain(self.graph.edges_directed(idx, Direction::Incoming))
            .map(|edge| self.road(edge.weight().road).map(Road::full_name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names.into_iter().unique().sorted().collect())
    }

    /// Bounding rectangle of all intersections, `None` for an empty network
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let points: MultiPoint<f64> = self
            .graph
            .node_weights()
            .map(|node| node.geometry)
            .collect();
        points.bounding_rect()
    }
}
