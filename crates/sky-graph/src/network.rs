//! Air network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge columns (`edge_from`, `edge_to`, `edge_cost`) are sorted by
//! `(from, to)` and indexed by `EdgeId`. Iteration over a node's outgoing
//! edges is a contiguous memory scan, and `edge_between` is a short scan of
//! the same slice.
//!
//! # Immutability
//!
//! A built network is read-only. Condition adjustment
//! ([`AirNetwork::adjust`][crate::conditions]) returns a derived copy and
//! never touches the base graph.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(x, y)` to the nearest `NodeId`, so callers
//! can resolve a free coordinate (say, a pointer click) to the closest
//! location before asking for a route.

use std::collections::HashMap;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sky_core::{CostModel, CostVector, EdgeId, NodeId, PlanarPoint};

use crate::{GraphError, GraphResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `NodeId`.
#[derive(Clone, Debug)]
struct NodeEntry {
    point: [f32; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── AirNetwork ────────────────────────────────────────────────────────────────

/// Directed air-route graph in CSR format plus a spatial index.
///
/// Column fields are `pub` for direct indexed access on search hot paths.
/// Do not construct directly; use [`AirNetworkBuilder`].
#[derive(Clone, Debug)]
pub struct AirNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Planar position of each node. Indexed by `NodeId`.
    pub node_pos: Vec<PlanarPoint>,

    /// Human-readable code of each node (unique). Indexed by `NodeId`.
    pub node_code: Vec<String>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer. Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`. Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// The three cost dimensions of each edge.
    pub edge_cost: Vec<CostVector>,

    /// Ratios used to derive time/fuel from distance; shared with the
    /// direct estimate so routed and unrouted costs stay comparable.
    pub cost_model: CostModel,

    // ── Lookup structures ─────────────────────────────────────────────────
    code_index: HashMap<String, NodeId>,
    spatial_idx: RTree<NodeEntry>,
}

impl AirNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// `true` when `node` names a node of this network.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_pos.len()
    }

    /// All node ids, in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_pos.len() as u32).map(NodeId)
    }

    /// Position of `node`. Callers must pass a valid id.
    #[inline]
    pub fn position(&self, node: NodeId) -> PlanarPoint {
        self.node_pos[node.index()]
    }

    /// Code of `node`. Callers must pass a valid id.
    #[inline]
    pub fn code(&self, node: NodeId) -> &str {
        &self.node_code[node.index()]
    }

    /// Resolve a node code to its id.
    pub fn resolve(&self, code: &str) -> Option<NodeId> {
        self.code_index.get(code).copied()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// A node with no outgoing edges yields an empty iterator, not an error.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// The edge `from -> to`, if present.
    ///
    /// At most one such edge exists: the builder collapses exact duplicates
    /// and rejects conflicting ones.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.out_edges(from).find(|e| self.edge_to[e.index()] == to)
    }

    /// Cost vector of `edge`.
    #[inline]
    pub fn cost_of(&self, edge: EdgeId) -> CostVector {
        self.edge_cost[edge.index()]
    }

    /// Endpoints of `edge` as `(from, to)`.
    #[inline]
    pub fn edge_endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        (self.edge_from[edge.index()], self.edge_to[edge.index()])
    }

    // ── Straight-line metrics ─────────────────────────────────────────────

    /// Euclidean distance between two nodes' positions.
    ///
    /// Used as the A* heuristic and as the basis of the direct estimate.
    /// Callers must pass valid ids.
    #[inline]
    pub fn straight_line(&self, a: NodeId, b: NodeId) -> f32 {
        self.node_pos[a.index()].distance(self.node_pos[b.index()])
    }

    /// Unrouted as-the-crow-flies cost estimate between two nodes.
    ///
    /// Straight-line distance pushed through the network's [`CostModel`].
    /// A pure reference value for route comparison — never an input to
    /// search.
    pub fn direct_estimate(&self, from: NodeId, to: NodeId) -> GraphResult<CostVector> {
        if !self.contains(from) {
            return Err(GraphError::UnknownNode(from));
        }
        if !self.contains(to) {
            return Err(GraphError::UnknownNode(to));
        }
        Ok(self.cost_model.from_distance(self.straight_line(from, to)))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` nearest to `pos`.
    ///
    /// Returns `None` only if the network has no nodes.
    pub fn snap_to_node(&self, pos: PlanarPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }

    /// Return up to `k` nearest nodes to `pos`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, pos: PlanarPoint, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── AirNetworkBuilder ─────────────────────────────────────────────────────────

/// Construct an [`AirNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order; `build()`
/// validates the dataset, sorts edges by `(from, to)`, constructs the CSR
/// columns, and bulk-loads the R-tree.
///
/// # Admissibility precondition
///
/// Each edge's `distance` cost must be at least the Euclidean distance
/// between its endpoints' coordinates — the straight-line heuristic and the
/// direct estimate both rely on it. [`add_leg`](Self::add_leg) satisfies it
/// by construction; explicitly priced edges are debug-asserted.
///
/// # Example
///
/// ```
/// use sky_core::PlanarPoint;
/// use sky_graph::AirNetworkBuilder;
///
/// let mut b = AirNetworkBuilder::new();
/// let sfo = b.add_node("SFO", PlanarPoint::new(100.0, 300.0));
/// let lax = b.add_node("LAX", PlanarPoint::new(150.0, 350.0));
/// b.add_corridor(sfo, lax); // costs derived from coordinates, both directions
/// let net = b.build().unwrap();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2);
/// ```
pub struct AirNetworkBuilder {
    nodes:      Vec<(String, PlanarPoint)>,
    raw_edges:  Vec<RawEdge>,
    cost_model: CostModel,
}

struct RawEdge {
    from: NodeId,
    to:   NodeId,
    cost: CostVector,
}

impl AirNetworkBuilder {
    pub fn new() -> Self {
        Self {
            nodes:      Vec::new(),
            raw_edges:  Vec::new(),
            cost_model: CostModel::default(),
        }
    }

    /// Replace the default distance→time/fuel ratios.
    pub fn with_cost_model(mut self, model: CostModel) -> Self {
        self.cost_model = model;
        self
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, code: &str, pos: PlanarPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push((code.to_owned(), pos));
        id
    }

    /// Add a **directed** edge with explicit costs.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: CostVector) {
        self.raw_edges.push(RawEdge { from, to, cost });
    }

    /// Add a directed edge whose costs are derived from the endpoints'
    /// coordinates through the cost model.
    ///
    /// # Panics
    /// Panics if either id was not returned by [`add_node`](Self::add_node).
    pub fn add_leg(&mut self, from: NodeId, to: NodeId) {
        let d = self.nodes[from.index()].1.distance(self.nodes[to.index()].1);
        let cost = self.cost_model.from_distance(d);
        self.add_edge(from, to, cost);
    }

    /// Convenience: derived-cost edges in **both directions**.
    pub fn add_corridor(&mut self, a: NodeId, b: NodeId) {
        self.add_leg(a, b);
        self.add_leg(b, a);
    }

    /// Look up the position of a node added earlier.
    pub fn node_pos(&self, id: NodeId) -> PlanarPoint {
        self.nodes[id.index()].1
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a validated [`AirNetwork`].
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidEdge`] — an edge endpoint is not a known node
    /// - [`GraphError::NegativeCost`] — a cost dimension is negative or non-finite
    /// - [`GraphError::ConflictingEdge`] — duplicate `(from, to)` with different costs
    /// - [`GraphError::DuplicateCode`] — two nodes share a code
    pub fn build(self) -> GraphResult<AirNetwork> {
        let node_count = self.nodes.len();

        // ── Validate nodes ────────────────────────────────────────────────
        let mut code_index: HashMap<String, NodeId> = HashMap::with_capacity(node_count);
        for (i, (code, _)) in self.nodes.iter().enumerate() {
            if code_index.insert(code.clone(), NodeId(i as u32)).is_some() {
                return Err(GraphError::DuplicateCode(code.clone()));
            }
        }

        // ── Validate edges ────────────────────────────────────────────────
        for e in &self.raw_edges {
            if e.from.index() >= node_count || e.to.index() >= node_count {
                return Err(GraphError::InvalidEdge { from: e.from, to: e.to });
            }
            for (dim, value) in e.cost.components() {
                if !value.is_finite() || value < 0.0 {
                    return Err(GraphError::NegativeCost { from: e.from, to: e.to, dim });
                }
            }
            // Admissibility precondition (see type-level docs).
            debug_assert!(
                e.cost.distance + 1e-3
                    >= self.nodes[e.from.index()].1.distance(self.nodes[e.to.index()].1),
                "edge {} -> {} distance cost below straight-line length",
                e.from,
                e.to,
            );
        }

        // ── Sort by (from, to); collapse exact duplicates ─────────────────
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| (e.from.0, e.to.0));
        let mut edges: Vec<RawEdge> = Vec::with_capacity(raw.len());
        for e in raw {
            if let Some(prev) = edges.last()
                && prev.from == e.from
                && prev.to == e.to
            {
                if prev.cost != e.cost {
                    return Err(GraphError::ConflictingEdge { from: e.from, to: e.to });
                }
                continue; // exact duplicate — drop
            }
            edges.push(e);
        }

        // ── Build edge columns ────────────────────────────────────────────
        let edge_from: Vec<NodeId>     = edges.iter().map(|e| e.from).collect();
        let edge_to:   Vec<NodeId>     = edges.iter().map(|e| e.to).collect();
        let edge_cost: Vec<CostVector> = edges.iter().map(|e| e.cost).collect();

        // ── Build CSR row pointer ─────────────────────────────────────────
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &edges {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edges.len());

        // ── Bulk-load R-tree ──────────────────────────────────────────────
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, (_, pos))| NodeEntry {
                point: [pos.x, pos.y],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let (node_code, node_pos): (Vec<String>, Vec<PlanarPoint>) =
            self.nodes.into_iter().unzip();

        log::debug!(
            "built air network: {} nodes, {} edges",
            node_count,
            edge_to.len()
        );

        Ok(AirNetwork {
            node_pos,
            node_code,
            node_out_start,
            edge_from,
            edge_to,
            edge_cost,
            cost_model: self.cost_model,
            code_index,
            spatial_idx,
        })
    }
}

impl Default for AirNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
