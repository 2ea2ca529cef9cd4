//! A* shortest-path search over the road network.
//!
//! Per-query state (fringe, closed set, predecessors) is local to each
//! call, so searches may run concurrently against a shared network.

use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use geo::{Distance, Euclidean};
use hashbrown::HashMap;
use log::debug;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use rayon::prelude::*;

use super::path::RoutePath;
use super::state::FringeEntry;
use crate::model::{CostMode, Intersection, RoadNetwork, TravelMode};
use crate::{Error, MAX_SPEED_KMH, NodeId};

/// Finds the lowest-cost path from `start` to `goal` under the given cost
/// metric and travel mode, honoring the network's turn restrictions.
///
/// Returns `Ok(None)` when the goal is unreachable; that is a normal
/// outcome in a directed network with mode filters, not an error.
///
/// # Errors
///
/// Fails with [`Error::UnknownNode`] if either endpoint is not in the
/// network, and with [`Error::UnknownRoad`] if a segment references a road
/// the network does not know (a malformed graph).
pub fn find_path(
    network: &RoadNetwork,
    start: NodeId,
    goal: NodeId,
    cost_mode: CostMode,
    travel_mode: TravelMode,
) -> Result<Option<RoutePath>, Error> {
    let start_idx = network.node_index(start)?;
    let goal_idx = network.node_index(goal)?;
    let goal_node = &network.graph[goal_idx];

    let mut closed = FixedBitSet::with_capacity(network.graph.node_count());
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut fringe = BinaryHeap::new();
    let mut seq = 0_u64;

    fringe.push(FringeEntry {
        estimate: heuristic(&network.graph[start_idx], goal_node, cost_mode),
        cost: 0.0,
        node: start_idx,
        prev: None,
        seq,
    });

    while let Some(entry) = fringe.pop() {
        // Lazy deletion: stale entries for already-closed nodes are dropped
        if closed.contains(entry.node.index()) {
            continue;
        }
        closed.insert(entry.node.index());
        if let Some(prev) = entry.prev {
            predecessors.insert(entry.node, prev);
        }

        if entry.node == goal_idx {
            let path = reconstruct(network, &predecessors, start_idx, goal_idx, entry.cost);
            debug!(
                "Path {start} -> {goal}: {} nodes, cost {:.4}",
                path.nodes.len(),
                path.total_cost
            );
            return Ok(Some(path));
        }

        let prev_id = entry.prev.map(|idx| network.graph[idx].id);
        let via_id = network.graph[entry.node].id;

        for edge in network.graph.edges(entry.node) {
            let segment = edge.weight();
            let road = network.road(segment.road)?;
            if !road.allows(travel_mode) {
                continue;
            }
            let next = edge.target();
            if closed.contains(next.index()) {
                continue;
            }
            // Restrictions apply uniformly in both cost modes and all
            // travel modes
            if let Some(prev_id) = prev_id
                && network.is_restricted(prev_id, via_id, network.graph[next].id)
            {
                continue;
            }

            let edge_cost = match cost_mode {
                CostMode::Distance => segment.length,
                CostMode::Time => segment.length / road.speed_limit(),
            };
            let next_cost = entry.cost + edge_cost;
            seq += 1;
            fringe.push(FringeEntry {
                estimate: next_cost + heuristic(&network.graph[next], goal_node, cost_mode),
                cost: next_cost,
                node: next,
                prev: Some(entry.node),
                seq,
            });
        }
    }

    debug!("No path from {start} to {goal}");
    Ok(None)
}

/// Runs independent [`find_path`] searches from one start to many goals in
/// parallel. The result vector is index-aligned with `goals`.
///
/// # Errors
///
/// Fails on the first search that fails; unreachable goals are `None`
/// entries, not errors.
pub fn find_paths_one_to_many(
    network: &RoadNetwork,
    start: NodeId,
    goals: &[NodeId],
    cost_mode: CostMode,
    travel_mode: TravelMode,
) -> Result<Vec<Option<RoutePath>>, Error> {
    goals
        .par_iter()
        .map(|&goal| find_path(network, start, goal, cost_mode, travel_mode))
        .collect()
}

/// Admissible estimate of the remaining cost to the goal: straight-line
/// distance, divided by the fastest table speed in time mode.
fn heuristic(from: &Intersection, goal: &Intersection, cost_mode: CostMode) -> f64 {
    let straight_line = Euclidean.distance(from.geometry, goal.geometry);
    match cost_mode {
        CostMode::Distance => straight_line,
        CostMode::Time => straight_line / MAX_SPEED_KMH,
    }
}

fn reconstruct(
    network: &RoadNetwork,
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
    total_cost: f64,
) -> RoutePath {
    let mut nodes = Vec::new();
    let mut current = goal;
    while current != start {
        nodes.push(network.graph[current].id);
        current = predecessors[&current];
    }
    nodes.push(network.graph[start].id);
    nodes.reverse();
    RoutePath { nodes, total_cost }
}
