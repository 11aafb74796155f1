//! Per-route cost totals and savings against the unrouted estimate.

use sky_core::CostVector;
use sky_graph::AirNetwork;

use crate::{FlightPath, RouteError, RouteResult};

/// Accumulated costs of a found path, the direct (as-the-crow-flies)
/// estimate for the same endpoints, and the relative savings per dimension.
///
/// Built once per search request and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// Totals over the traversed edges of the adjusted graph.
    pub totals: CostVector,

    /// The unrouted straight-line estimate.
    pub baseline: CostVector,

    /// Percentage saved per dimension: `(baseline − routed) / baseline × 100`.
    /// `None` when the baseline dimension is zero (saving undefined).
    pub distance_saved_pct: Option<f32>,
    pub time_saved_pct:     Option<f32>,
    pub fuel_saved_pct:     Option<f32>,
}

/// Walk `path` through `network`, accumulating edge costs and comparing
/// against `baseline`.
///
/// # Errors
///
/// [`RouteError::MissingEdge`] when a consecutive node pair has no edge —
/// the path was not computed against this graph. Given a correct search
/// implementation this never happens; tests treat it as fatal.
pub fn summarize(
    path: &FlightPath,
    network: &AirNetwork,
    baseline: CostVector,
) -> RouteResult<RouteSummary> {
    let mut totals = CostVector::ZERO;
    for (from, to) in path.steps() {
        let edge = network
            .edge_between(from, to)
            .ok_or(RouteError::MissingEdge { from, to })?;
        totals += network.cost_of(edge);
    }

    Ok(RouteSummary {
        totals,
        baseline,
        distance_saved_pct: saved_pct(baseline.distance, totals.distance),
        time_saved_pct:     saved_pct(baseline.time, totals.time),
        fuel_saved_pct:     saved_pct(baseline.fuel, totals.fuel),
    })
}

/// Relative saving in percent, or `None` for a zero baseline.
fn saved_pct(baseline: f32, routed: f32) -> Option<f32> {
    (baseline != 0.0).then(|| (baseline - routed) / baseline * 100.0)
}

impl std::fmt::Display for RouteSummary {
    /// One-decimal display form, e.g.
    /// `distance 523.4 vs 606.2 (13.7% saved), time ..., fuel ...`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn dim(
            f: &mut std::fmt::Formatter<'_>,
            name: &str,
            routed: f32,
            baseline: f32,
            pct: Option<f32>,
        ) -> std::fmt::Result {
            write!(f, "{name} {routed:.1} vs {baseline:.1} (")?;
            match pct {
                Some(p) => write!(f, "{p:.1}% saved)"),
                None => write!(f, "n/a)"),
            }
        }
        dim(f, "distance", self.totals.distance, self.baseline.distance, self.distance_saved_pct)?;
        write!(f, ", ")?;
        dim(f, "time", self.totals.time, self.baseline.time, self.time_saved_pct)?;
        write!(f, ", ")?;
        dim(f, "fuel", self.totals.fuel, self.baseline.fuel, self.fuel_saved_pct)
    }
}
