//! The `RouteEngine` and the plan it produces.

use sky_core::Millis;
use sky_graph::AirNetwork;
use sky_playback::Playback;
use sky_route::{summarize, FlightPath, RouteSummary, Router};

use crate::{EngineResult, RouteQuery};

/// Owns the immutable base network and answers planning queries.
///
/// Each [`plan`](Self::plan) call derives a condition-adjusted view of the
/// network, runs the selected search over it, and packages the result with
/// its summary. The engine mutates nothing — repeated calls with the same
/// query return the same plan.
pub struct RouteEngine {
    network: AirNetwork,
}

impl RouteEngine {
    pub fn new(network: AirNetwork) -> Self {
        Self { network }
    }

    /// The base network (pre-adjustment).
    pub fn network(&self) -> &AirNetwork {
        &self.network
    }

    /// Plan an optimal route for `query`.
    ///
    /// Returns `Ok(None)` when the destination is unreachable — a valid
    /// outcome the caller presents as "no path", distinct from the error
    /// cases (unknown node ids, internal inconsistencies).
    pub fn plan(&self, query: &RouteQuery) -> EngineResult<Option<RoutePlan>> {
        let adjusted = self.network.adjust(&query.conditions);

        let Some(path) =
            query.algorithm.find_path(&adjusted, query.origin, query.destination)?
        else {
            log::debug!(
                "plan: no route {} -> {} ({} conditions)",
                query.origin,
                query.destination,
                query.conditions.len()
            );
            return Ok(None);
        };

        let baseline = self.network.direct_estimate(query.origin, query.destination)?;
        let summary = summarize(&path, &adjusted, baseline)?;
        log::debug!(
            "plan: {} -> {} via {} in {} hops, {}",
            query.origin,
            query.destination,
            query.algorithm,
            path.segment_count(),
            summary
        );

        Ok(Some(RoutePlan { path, summary }))
    }
}

// ── RoutePlan ─────────────────────────────────────────────────────────────────

/// A computed route with its cost summary. Immutable; superseded by the
/// next planning request.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    pub path:    FlightPath,
    pub summary: RouteSummary,
}

impl RoutePlan {
    /// A `Running` playback over this plan's path.
    ///
    /// The caller drives the returned scheduler with timestamps from its
    /// own timer and reads one sample per tick.
    pub fn start_playback(&self, duration_ms: u64, now: Millis) -> EngineResult<Playback> {
        let mut playback = Playback::new();
        playback.start(&self.path, duration_ms, now)?;
        Ok(playback)
    }
}
