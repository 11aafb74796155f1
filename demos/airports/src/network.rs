//! The 10-airport US demo network.
//!
//! Coordinates are screen-layout units (not geographic); corridor costs
//! derive from them through the default cost model, so every edge satisfies
//! the distance-≥-straight-line precondition by construction.

use sky_core::{CostFactors, PlanarPoint};
use sky_graph::{AirNetwork, Condition, ConditionSet, GraphResult};

/// Build the demo network. Node codes resolve via [`AirNetwork::resolve`].
pub fn build_network() -> GraphResult<AirNetwork> {
    let mut b = sky_graph::AirNetworkBuilder::new();

    let jfk = b.add_node("JFK", PlanarPoint::new(720.0, 280.0));
    let lax = b.add_node("LAX", PlanarPoint::new(150.0, 350.0));
    let ord = b.add_node("ORD", PlanarPoint::new(580.0, 250.0));
    let dfw = b.add_node("DFW", PlanarPoint::new(450.0, 420.0));
    let den = b.add_node("DEN", PlanarPoint::new(320.0, 300.0));
    let atl = b.add_node("ATL", PlanarPoint::new(650.0, 420.0));
    let sfo = b.add_node("SFO", PlanarPoint::new(100.0, 300.0));
    let mia = b.add_node("MIA", PlanarPoint::new(700.0, 520.0));
    let sea = b.add_node("SEA", PlanarPoint::new(120.0, 150.0));
    let bos = b.add_node("BOS", PlanarPoint::new(750.0, 250.0));

    // Corridors (bidirectional, derived costs).
    b.add_corridor(jfk, bos);
    b.add_corridor(jfk, ord);
    b.add_corridor(jfk, atl);
    b.add_corridor(jfk, mia);
    b.add_corridor(lax, sfo);
    b.add_corridor(lax, den);
    b.add_corridor(lax, dfw);
    b.add_corridor(ord, den);
    b.add_corridor(ord, dfw);
    b.add_corridor(ord, atl);
    b.add_corridor(ord, sea);
    b.add_corridor(dfw, den);
    b.add_corridor(dfw, atl);
    b.add_corridor(dfw, mia);
    b.add_corridor(den, sfo);
    b.add_corridor(den, sea);
    b.add_corridor(atl, mia);
    b.add_corridor(sfo, sea);

    b.build()
}

/// Adverse weather over the Rockies/Midwest hubs: +30% distance and fuel,
/// +40% time on every corridor touching DEN or ORD.
pub fn adverse_weather(net: &AirNetwork) -> GraphResult<Condition> {
    let affected = ["DEN", "ORD"]
        .into_iter()
        .filter_map(|code| net.resolve(code))
        .collect();
    Condition::new("adverse-weather", affected, CostFactors::new(1.3, 1.4, 1.3))
}

/// Congestion around the busiest eastern hubs: +25% time on every corridor
/// touching ATL or JFK.
pub fn congestion(net: &AirNetwork) -> GraphResult<Condition> {
    let affected = ["ATL", "JFK"]
        .into_iter()
        .filter_map(|code| net.resolve(code))
        .collect();
    Condition::new("congestion", affected, CostFactors::time_only(1.25))
}

/// The full demo condition set, both conditions active.
pub fn all_conditions(net: &AirNetwork) -> GraphResult<ConditionSet> {
    Ok(ConditionSet::new()
        .with(adverse_weather(net)?)
        .with(congestion(net)?))
}
