//! The result of a successful path search.

use sky_core::NodeId;

/// An ordered node sequence plus the total traversed distance cost.
///
/// Always has at least one node; a single-node path (origin == destination)
/// has zero cost and no segments. Consecutive nodes always correspond to an
/// edge of the graph the search ran against.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightPath {
    /// Nodes to visit in order, origin first.
    pub nodes: Vec<NodeId>,

    /// Total `distance` cost over the traversed edges.
    pub total_distance: f32,
}

impl FlightPath {
    /// The trivial path: already at the destination.
    pub fn single(node: NodeId) -> Self {
        Self { nodes: vec![node], total_distance: 0.0 }
    }

    /// `true` if the path has no segments to traverse.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Number of edge segments (`nodes.len() - 1`).
    pub fn segment_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Iterator over consecutive `(from, to)` node pairs.
    pub fn steps(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}
