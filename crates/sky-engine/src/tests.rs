//! End-to-end tests for sky-engine.

use sky_core::{CostFactors, Millis, NodeId, PlanarPoint};
use sky_graph::{AirNetwork, AirNetworkBuilder, Condition, ConditionSet};
use sky_route::Algorithm;

use crate::{EngineError, RouteEngine, RouteQuery};

// ── Fixture ───────────────────────────────────────────────────────────────────

/// Western slice of the demo airport map, plus an isolated island with no
/// corridors. Edge costs derive from the layout coordinates.
fn hub_network() -> (AirNetwork, [NodeId; 7]) {
    let mut b = AirNetworkBuilder::new();
    let sfo = b.add_node("SFO", PlanarPoint::new(100.0, 300.0));
    let lax = b.add_node("LAX", PlanarPoint::new(150.0, 350.0));
    let den = b.add_node("DEN", PlanarPoint::new(320.0, 300.0));
    let ord = b.add_node("ORD", PlanarPoint::new(580.0, 250.0));
    let atl = b.add_node("ATL", PlanarPoint::new(650.0, 420.0));
    let jfk = b.add_node("JFK", PlanarPoint::new(720.0, 280.0));
    let island = b.add_node("HNL", PlanarPoint::new(20.0, 550.0));

    b.add_corridor(sfo, lax);
    b.add_corridor(sfo, den);
    b.add_corridor(lax, den);
    b.add_corridor(den, ord);
    b.add_corridor(ord, atl);
    b.add_corridor(ord, jfk);
    b.add_corridor(atl, jfk);

    (b.build().unwrap(), [sfo, lax, den, ord, atl, jfk, island])
}

fn weather_over(nodes: Vec<NodeId>) -> ConditionSet {
    ConditionSet::new()
        .with(Condition::new("adverse-weather", nodes, CostFactors::new(1.3, 1.4, 1.3)).unwrap())
}

// ── Planning ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planning {
    use super::*;

    #[test]
    fn plans_a_route_with_summary() {
        let (net, [_, lax, den, ord, _, jfk, _]) = hub_network();
        let engine = RouteEngine::new(net);

        let plan = engine
            .plan(&RouteQuery::new(lax, jfk))
            .unwrap()
            .expect("LAX and JFK are connected");

        // The only sensible spine: LAX → DEN → ORD → JFK.
        assert_eq!(plan.path.nodes, vec![lax, den, ord, jfk]);
        assert!(plan.summary.totals.distance >= plan.summary.baseline.distance);
        // Derived costs follow the default ratios, so time/fuel track distance.
        assert!((plan.summary.totals.time - plan.summary.totals.distance * 0.8).abs() < 1e-2);
        assert!((plan.summary.totals.fuel - plan.summary.totals.distance * 1.2).abs() < 1e-2);
    }

    #[test]
    fn both_algorithms_agree_end_to_end() {
        let (net, [_, lax, ..]) = hub_network();
        let jfk = net.resolve("JFK").unwrap();
        let engine = RouteEngine::new(net);

        let dij = engine
            .plan(&RouteQuery::new(lax, jfk).with_algorithm(Algorithm::Dijkstra))
            .unwrap()
            .unwrap();
        let ast = engine
            .plan(&RouteQuery::new(lax, jfk).with_algorithm(Algorithm::AStar))
            .unwrap()
            .unwrap();

        assert!((dij.path.total_distance - ast.path.total_distance).abs() < 1e-3);
        assert!((dij.summary.totals.distance - ast.summary.totals.distance).abs() < 1e-3);
    }

    #[test]
    fn conditions_raise_cost_but_not_the_baseline() {
        let (net, [_, lax, den, ord, _, jfk, _]) = hub_network();
        let engine = RouteEngine::new(net);

        let clear = engine.plan(&RouteQuery::new(lax, jfk)).unwrap().unwrap();
        let stormy = engine
            .plan(&RouteQuery::new(lax, jfk).with_conditions(weather_over(vec![den, ord])))
            .unwrap()
            .unwrap();

        assert!(stormy.summary.totals.distance > clear.summary.totals.distance);
        assert!(stormy.summary.totals.time > clear.summary.totals.time);
        // The unrouted estimate ignores conditions.
        assert_eq!(stormy.summary.baseline, clear.summary.baseline);
    }

    #[test]
    fn planning_never_mutates_the_base_network() {
        let (net, [_, lax, den, ord, _, jfk, _]) = hub_network();
        let engine = RouteEngine::new(net);

        let before = engine.plan(&RouteQuery::new(lax, jfk)).unwrap().unwrap();
        let _stormy = engine
            .plan(&RouteQuery::new(lax, jfk).with_conditions(weather_over(vec![den, ord])))
            .unwrap();
        let after = engine.plan(&RouteQuery::new(lax, jfk)).unwrap().unwrap();

        assert_eq!(before.path, after.path);
        assert_eq!(before.summary, after.summary);
    }

    #[test]
    fn same_origin_and_destination() {
        let (net, [_, lax, ..]) = hub_network();
        let engine = RouteEngine::new(net);
        let plan = engine.plan(&RouteQuery::new(lax, lax)).unwrap().unwrap();

        assert_eq!(plan.path.nodes, vec![lax]);
        assert_eq!(plan.summary.totals.distance, 0.0);
        // Zero baseline → savings are not applicable, not a division blowup.
        assert_eq!(plan.summary.distance_saved_pct, None);
    }

    #[test]
    fn unreachable_destination_is_none() {
        let (net, [_, lax, .., island]) = hub_network();
        let engine = RouteEngine::new(net);
        assert!(engine.plan(&RouteQuery::new(lax, island)).unwrap().is_none());
    }

    #[test]
    fn unknown_node_surfaces_as_error() {
        let (net, [_, lax, ..]) = hub_network();
        let engine = RouteEngine::new(net);
        let err = engine.plan(&RouteQuery::new(lax, NodeId(999)));
        assert!(matches!(err, Err(EngineError::Route(_))));
    }
}

// ── Playback integration ──────────────────────────────────────────────────────

#[cfg(test)]
mod playback {
    use sky_playback::Phase;

    use super::*;

    #[test]
    fn plan_drives_a_full_playback() {
        let (net, [_, lax, ..]) = hub_network();
        let jfk = net.resolve("JFK").unwrap();
        let lax_pos = net.position(lax);
        let jfk_pos = net.position(jfk);
        let engine = RouteEngine::new(net);

        let plan = engine.plan(&RouteQuery::new(lax, jfk)).unwrap().unwrap();
        let mut playback = plan.start_playback(3_000, Millis(0)).unwrap();

        // First tick: at the origin.
        let first = playback.tick(Millis(0)).unwrap();
        assert_eq!(first.progress, 0.0);
        let pos = first.position(&plan.path, engine.network());
        assert_eq!((pos.x, pos.y), (lax_pos.x, lax_pos.y));

        // Mid-run: somewhere strictly between the endpoints.
        let mid = playback.tick(Millis(1_500)).unwrap();
        assert_eq!(mid.progress, 0.5);
        assert!(mid.segment < plan.path.segment_count());

        // Final tick: at the destination, Finished.
        let last = playback.tick(Millis(3_000)).unwrap();
        assert_eq!(last.progress, 1.0);
        assert_eq!(playback.phase(), Phase::Finished);
        let pos = last.position(&plan.path, engine.network());
        assert!((pos.x - jfk_pos.x).abs() < 1e-3);
        assert!((pos.y - jfk_pos.y).abs() < 1e-3);
    }

    #[test]
    fn reset_stops_the_stream() {
        let (net, [_, lax, ..]) = hub_network();
        let jfk = net.resolve("JFK").unwrap();
        let engine = RouteEngine::new(net);

        let plan = engine.plan(&RouteQuery::new(lax, jfk)).unwrap().unwrap();
        let mut playback = plan.start_playback(3_000, Millis(0)).unwrap();
        playback.tick(Millis(1_000));
        playback.reset();
        assert!(playback.tick(Millis(2_000)).is_none());
    }
}
