//! Heuristic-guided (A*) search.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use sky_core::{EdgeId, NodeId};
use sky_graph::AirNetwork;

use crate::dijkstra::reconstruct;
use crate::router::Candidate;
use crate::{FlightPath, RouteError, RouteResult, Router};

/// A* over the CSR air graph with a straight-line distance heuristic.
///
/// The heuristic is admissible because every edge's distance cost is at
/// least the straight-line length between its endpoints (a network build
/// precondition) and condition factors only scale costs upward. It is also
/// consistent — the triangle inequality holds for the Euclidean metric — so
/// a node can be settled permanently on first expansion and the returned
/// path cost always equals Dijkstra's.
pub struct AStarRouter;

impl Router for AStarRouter {
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
        // g[v] = best known distance cost to reach v.
        let mut g = vec![f32::INFINITY; n];
        let mut prev_edge = vec![EdgeId::INVALID; n];
        // Settled on first expansion (valid: the heuristic is consistent).
        let mut settled = vec![false; n];

        g[from.index()] = 0.0;

        // Frontier ordered by f = g + straight-line-to-goal.
        let mut frontier: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
        frontier.push(Reverse(Candidate {
            cost: network.straight_line(from, to),
            node: from,
        }));

        while let Some(Reverse(Candidate { node, .. })) = frontier.pop() {
            if settled[node.index()] {
                continue;
            }
            settled[node.index()] = true;

            if node == to {
                let total = g[to.index()];
                log::debug!("astar: reached {} at cost {total:.1}", network.code(to));
                return Ok(Some(reconstruct(network, &prev_edge, to, total)));
            }

            for edge in network.out_edges(node) {
                let neighbor = network.edge_to[edge.index()];
                let tentative = g[node.index()] + network.edge_cost[edge.index()].distance;

                if tentative < g[neighbor.index()] {
                    g[neighbor.index()] = tentative;
                    prev_edge[neighbor.index()] = edge;
                    frontier.push(Reverse(Candidate {
                        cost: tentative + network.straight_line(neighbor, to),
                        node: neighbor,
                    }));
                }
            }
        }

        log::debug!(
            "astar: no route from {} to {}",
            network.code(from),
            network.code(to)
        );
        Ok(None)
    }
}
