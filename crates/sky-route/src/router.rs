//! Routing contract and algorithm selection.
//!
//! # Pluggability
//!
//! Callers route via the [`Router`] trait, so applications can swap in
//! custom implementations without touching the rest of the engine. The
//! [`Algorithm`] enum is the tagged-variant form of the same contract —
//! what a UI's "algorithm" dropdown maps to.
//!
//! # Determinism
//!
//! Both built-in searches order their frontier by `(cost, node id)` using
//! [`f32::total_cmp`], so cost ties always break toward the ascending node
//! id. Equal-cost graphs therefore reproduce the same path on every run,
//! which the cross-algorithm tests rely on.

use std::cmp::Ordering;
use std::str::FromStr;

use sky_core::NodeId;
use sky_graph::AirNetwork;

use crate::{AStarRouter, DijkstraRouter, FlightPath, RouteResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine over the `distance` cost dimension.
pub trait Router {
    /// Compute an optimal path from `from` to `to`.
    ///
    /// - `from == to` → `Ok(Some(..))` with a single-node, zero-cost path.
    /// - No route → `Ok(None)` (a valid outcome, not an error).
    /// - Unknown node id → `Err(RouteError::UnknownNode)`.
    fn find_path(
        &self,
        network: &AirNetwork,
        from: NodeId,
        to: NodeId,
    ) -> RouteResult<Option<FlightPath>>;
}

// ── Algorithm selector ────────────────────────────────────────────────────────

/// Which search to run. Implements [`Router`] by dispatch.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Label-setting search over tentative distances.
    #[default]
    Dijkstra,
    /// Heuristic-guided search using straight-line distance to the goal.
    AStar,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar    => "astar",
        }
    }
}

impl Router for Algorithm {
    fn find_path(
        &self,
        network: &AirNetwork,
        from: NodeId,
        to: NodeId,
    ) -> RouteResult<Option<FlightPath>> {
        match self {
            Algorithm::Dijkstra => DijkstraRouter.find_path(network, from, to),
            Algorithm::AStar    => AStarRouter.find_path(network, from, to),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(format!("unknown algorithm {other:?}")),
        }
    }
}

// ── Shared frontier entry ─────────────────────────────────────────────────────

/// A frontier entry ordered by `(cost, node)`.
///
/// Wrapped in `std::cmp::Reverse` inside a `BinaryHeap` this pops the
/// smallest cost first, breaking ties by the smaller node id.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Candidate {
    pub cost: f32,
    pub node: NodeId,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}
