//! Articulation-point detection over the road network.
//!
//! Classic low-point DFS generalized to a disconnected forest, run over
//! the undirected closure of the graph: a segment in either direction
//! counts as a connection. The traversal carries an explicit frame stack
//! instead of recursing, so DFS depth is bounded by heap, not call stack.

use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use log::debug;
use petgraph::graph::NodeIndex;

use crate::model::RoadNetwork;
use crate::NodeId;

const UNVISITED: u32 = u32::MAX;

struct Frame {
    node: NodeIndex,
    parent: NodeIndex,
    neighbors: Vec<NodeIndex>,
    cursor: usize,
    /// Minimum depth reachable from this subtree via a back edge
    reach_back: u32,
}

/// Returns the intersections whose removal disconnects the network,
/// treating every segment as an undirected connection.
///
/// Deterministic and idempotent; the network is only read. O(V + E) over
/// all components.
pub fn find_articulation_points(network: &RoadNetwork) -> HashSet<NodeId> {
    let graph = &network.graph;
    let mut depth = vec![UNVISITED; graph.node_count()];
    let mut flagged = FixedBitSet::with_capacity(graph.node_count());

    for root in graph.node_indices() {
        if depth[root.index()] != UNVISITED {
            continue;
        }
        depth[root.index()] = 0;
        let mut subtrees = 0_usize;

        for child in graph.neighbors_undirected(root) {
            if depth[child.index()] != UNVISITED {
                continue;
            }
            subtrees += 1;
            explore_subtree(network, child, root, &mut depth, &mut flagged);
        }

        // The root splits the graph iff it spawned more than one subtree
        if subtrees > 1 {
            flagged.insert(root.index());
        }
    }

    let points: HashSet<NodeId> = flagged.ones().map(|idx| graph[NodeIndex::new(idx)].id).collect();
    debug!(
        "Articulation analysis: {} of {} intersections flagged",
        points.len(),
        graph.node_count()
    );
    points
}

/// Depth-first walk of one subtree, propagating reach-back values upward.
/// A node is flagged when a child subtree cannot reach back above it.
fn explore_subtree(
    network: &RoadNetwork,
    start: NodeIndex,
    root: NodeIndex,
    depth: &mut [u32],
    flagged: &mut FixedBitSet,
) {
    let graph = &network.graph;
    depth[start.index()] = 1;
    let mut stack = vec![Frame {
        node: start,
        parent: root,
        neighbors: graph.neighbors_undirected(start).collect(),
        cursor: 0,
        reach_back: 1,
    }];

    while let Some(mut frame) = stack.pop() {
        if frame.cursor < frame.neighbors.len() {
            let neighbor = frame.neighbors[frame.cursor];
            frame.cursor += 1;

            // The tree edge back to the parent is not a back edge
            if neighbor == frame.parent {
                stack.push(frame);
            } else if depth[neighbor.index()] != UNVISITED {
                frame.reach_back = frame.reach_back.min(depth[neighbor.index()]);
                stack.push(frame);
            } else {
                let child_depth = depth[frame.node.index()] + 1;
                depth[neighbor.index()] = child_depth;
                let parent = frame.node;
                stack.push(frame);
                stack.push(Frame {
                    node: neighbor,
                    parent,
                    neighbors: graph.neighbors_undirected(neighbor).collect(),
                    cursor: 0,
                    reach_back: child_depth,
                });
            }
        } else if let Some(parent_frame) = stack.last_mut() {
            // Subtree exhausted; propagate its reach-back to the parent
            parent_frame.reach_back = parent_frame.reach_back.min(frame.reach_back);
            if frame.reach_back >= depth[parent_frame.node.index()] {
                flagged.insert(parent_frame.node.index());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::RoadNetworkBuilder;
    use crate::model::Road;

    /// Two-way chain of roads through the given node pairs
    fn chain_network(links: &[(NodeId, NodeId)]) -> RoadNetwork {
        let mut builder = RoadNetworkBuilder::new();
        builder.add_road(Road::new(1, "Link Rd", false, 3)).unwrap();
        let mut seen = std::collections::HashSet::new();
        for &(a, b) in links {
            for id in [a, b] {
                if seen.insert(id) {
                    builder.add_intersection(id, id as f64, 0.0).unwrap();
                }
            }
            builder.add_segment(1, a, b, 1.0).unwrap();
        }
        builder.build()
    }

    #[test]
    fn chain_interior_nodes_are_articulation_points() {
        let net = chain_network(&[(1, 2), (2, 3), (3, 4)]);
        let points = find_articulation_points(&net);
        assert_eq!(points, HashSet::from_iter([2, 3]));
    }

    #[test]
    fn cycle_has_no_articulation_points() {
        let net = chain_network(&[(1, 2), (2, 3), (3, 4), (4, 1)]);
        assert!(find_articulation_points(&net).is_empty());
    }

    #[test]
    fn shared_node_of_two_triangles() {
        let net = chain_network(&[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (5, 3)]);
        let points = find_articulation_points(&net);
        assert_eq!(points, HashSet::from_iter([3]));
    }

    #[test]
    fn disconnected_components_are_the_union() {
        // A chain (interior node 2) and a separate triangle (no points)
        let net = chain_network(&[(1, 2), (2, 3), (10, 11), (11, 12), (12, 10)]);
        let points = find_articulation_points(&net);
        assert_eq!(points, HashSet::from_iter([2]));
    }

    #[test]
    fn one_way_segment_still_connects() {
        // 1 -> 2 -> 3 with one-way roads: undirected closure makes 2 a cut node
        let mut builder = RoadNetworkBuilder::new();
        builder.add_road(Road::new(1, "One Way", true, 3)).unwrap();
        for id in [1, 2, 3] {
            builder.add_intersection(id, id as f64, 0.0).unwrap();
        }
        builder.add_segment(1, 1, 2, 1.0).unwrap();
        builder.add_segment(1, 2, 3, 1.0).unwrap();
        let net = builder.build();

        assert_eq!(find_articulation_points(&net), HashSet::from_iter([2]));
    }

    #[test]
    fn deep_chain_is_stack_safe() {
        let links: Vec<(NodeId, NodeId)> = (1..2000).map(|i| (i, i + 1)).collect();
        let net = chain_network(&links);
        let points = find_articulation_points(&net);
        assert_eq!(points.len(), 1998);
        assert!(!points.contains(&1));
        assert!(!points.contains(&2000));
    }

    #[test]
    fn analysis_is_idempotent() {
        let net = chain_network(&[(1, 2), (2, 3), (3, 4), (4, 2)]);
        let first = find_articulation_points(&net);
        let second = find_articulation_points(&net);
        assert_eq!(first, second);
    }
}
