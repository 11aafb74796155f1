//! Routing-subsystem error type.

use thiserror::Error;

use sky_core::NodeId;

/// Errors produced by `sky-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The caller asked for a node the network does not contain.
    #[error("node {0} not found in network")]
    UnknownNode(NodeId),

    /// A path step has no matching edge in the graph it was summarized
    /// against. Signals an inconsistency between path and graph — a defect,
    /// not a user input problem.
    #[error("path step {from} -> {to} has no matching edge")]
    MissingEdge { from: NodeId, to: NodeId },
}

pub type RouteResult<T> = Result<T, RouteError>;
