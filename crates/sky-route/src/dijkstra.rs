//! Label-setting (Dijkstra) search.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use sky_core::{EdgeId, NodeId};
use sky_graph::AirNetwork;

use crate::router::Candidate;
use crate::{FlightPath, RouteError, RouteResult, Router};

/// Standard Dijkstra's algorithm over the CSR air graph.
///
/// Relaxes the `distance` cost dimension; edge costs are non-negative by
/// the network's build invariant, so a node never needs revisiting after it
/// is settled. Terminates as soon as the destination is popped, or returns
/// `Ok(None)` when the heap runs dry (every reachable node settled without
/// meeting the destination).
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn find_path(
        &self,
        network: &AirNetwork,
        from: NodeId,
        to: NodeId,
    ) -> RouteResult<Option<FlightPath>> {
        if !network.contains(from) {
            return Err(RouteError::UnknownNode(from));
        }
        if !network.contains(to) {
            return Err(RouteError::UnknownNode(to));
        }
        if from == to {
            return Ok(Some(FlightPath::single(from)));
        }

        let n = network.node_count();
        // dist[v] = best known distance cost to reach v.
        let mut dist = vec![f32::INFINITY; n];
        // prev_edge[v] = edge that reached v; EdgeId::INVALID for unreached nodes.
        let mut prev_edge = vec![EdgeId::INVALID; n];

        dist[from.index()] = 0.0;

        let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
        heap.push(Reverse(Candidate { cost: 0.0, node: from }));

        while let Some(Reverse(Candidate { cost, node })) = heap.pop() {
            if node == to {
                log::debug!("dijkstra: reached {} at cost {cost:.1}", network.code(to));
                return Ok(Some(reconstruct(network, &prev_edge, to, cost)));
            }

            // Skip stale heap entries.
            if cost > dist[node.index()] {
                continue;
            }

            for edge in network.out_edges(node) {
                let neighbor = network.edge_to[edge.index()];
                let new_cost = cost + network.edge_cost[edge.index()].distance;

                if new_cost < dist[neighbor.index()] {
                    dist[neighbor.index()] = new_cost;
                    prev_edge[neighbor.index()] = edge;
                    heap.push(Reverse(Candidate { cost: new_cost, node: neighbor }));
                }
            }
        }

        log::debug!(
            "dijkstra: no route from {} to {}",
            network.code(from),
            network.code(to)
        );
        Ok(None)
    }
}

/// Walk `prev_edge` back from `to` and build the node sequence.
pub(crate) fn reconstruct(
    network: &AirNetwork,
    prev_edge: &[EdgeId],
    to: NodeId,
    total_distance: f32,
) -> FlightPath {
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = network.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    FlightPath { nodes, total_distance }
}
