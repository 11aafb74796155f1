//! CSV network loader.
//!
//! # CSV format
//!
//! Two files: one row per node, one row per directed edge.
//!
//! ```csv
//! code,x,y
//! JFK,720,280
//! LAX,150,350
//! ```
//!
//! ```csv
//! from,to,distance,time,fuel
//! JFK,LAX,,,
//! LAX,JFK,600,500,750
//! ```
//!
//! Edge cost columns may be left empty: a missing `distance` falls back to
//! the straight-line length between the endpoints' coordinates, and missing
//! `time`/`fuel` are derived from the edge distance through the cost model —
//! the same derivation [`AirNetworkBuilder::add_leg`] uses. Rows are
//! directed; list a connection twice for a bidirectional corridor.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sky_core::{CostModel, CostVector, NodeId, PlanarPoint};

use crate::{AirNetwork, AirNetworkBuilder, GraphError, GraphResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NodeRecord {
    code: String,
    x:    f32,
    y:    f32,
}

#[derive(Deserialize)]
struct EdgeRecord {
    from:     String,
    to:       String,
    distance: Option<f32>,
    time:     Option<f32>,
    fuel:     Option<f32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`AirNetwork`] from node and edge CSV files.
pub fn load_network_csv(
    nodes_path: &Path,
    edges_path: &Path,
    cost_model: CostModel,
) -> GraphResult<AirNetwork> {
    let nodes = std::fs::File::open(nodes_path).map_err(GraphError::Io)?;
    let edges = std::fs::File::open(edges_path).map_err(GraphError::Io)?;
    load_network_readers(nodes, edges, cost_model)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass `std::io::Cursor`s) or embedded datasets.
pub fn load_network_readers<N: Read, E: Read>(
    nodes: N,
    edges: E,
    cost_model: CostModel,
) -> GraphResult<AirNetwork> {
    let mut builder = AirNetworkBuilder::new().with_cost_model(cost_model);

    // ── Nodes ─────────────────────────────────────────────────────────────
    let mut codes: HashMap<String, NodeId> = HashMap::new();
    let mut node_reader = csv::Reader::from_reader(nodes);
    for result in node_reader.deserialize::<NodeRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let id = builder.add_node(&row.code, PlanarPoint::new(row.x, row.y));
        codes.insert(row.code, id);
    }

    // ── Edges ─────────────────────────────────────────────────────────────
    // Codes resolve against the nodes file just parsed; an edge naming an
    // absent code fails here rather than surfacing later as InvalidEdge.
    let mut edge_reader = csv::Reader::from_reader(edges);
    for result in edge_reader.deserialize::<EdgeRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let from = *codes
            .get(&row.from)
            .ok_or_else(|| GraphError::UnknownCode(row.from.clone()))?;
        let to = *codes
            .get(&row.to)
            .ok_or_else(|| GraphError::UnknownCode(row.to.clone()))?;

        let distance = row
            .distance
            .unwrap_or_else(|| builder.node_pos(from).distance(builder.node_pos(to)));
        let cost = CostVector {
            distance,
            time: row.time.unwrap_or(distance * cost_model.time_per_distance),
            fuel: row.fuel.unwrap_or(distance * cost_model.fuel_per_distance),
        };
        builder.add_edge(from, to, cost);
    }

    let network = builder.build()?;
    log::info!(
        "loaded air network from CSV: {} nodes, {} edges",
        network.node_count(),
        network.edge_count()
    );
    Ok(network)
}
