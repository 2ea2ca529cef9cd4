use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

/// Fringe candidate: a node reached with accumulated cost `cost` and
/// estimated total cost `estimate` (`f = g + h`).
#[derive(Copy, Clone)]
pub(super) struct FringeEntry {
    /// Estimated total cost through this node
    pub(super) estimate: f64,
    /// Accumulated cost from the start
    pub(super) cost: f64,
    pub(super) node: NodeIndex,
    /// Node this entry was reached from, None for the start
    pub(super) prev: Option<NodeIndex>,
    /// Insertion sequence, breaks ties deterministically
    pub(super) seq: u64,
}

// Min-heap by estimate (reversed from standard Rust BinaryHeap),
// earlier-inserted entries pop first on equal estimates.
impl Ord for FringeEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FringeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FringeEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for FringeEntry {}
