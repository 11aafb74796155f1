//! Graph-subsystem error type.

use thiserror::Error;

use sky_core::NodeId;

/// Errors produced by `sky-graph`.
///
/// The first four variants are malformed-dataset failures raised by
/// [`AirNetworkBuilder::build`][crate::AirNetworkBuilder::build] — fatal at
/// startup, never recoverable by the engine. `UnknownNode`/`UnknownCode`
/// mean the caller supplied an id the network does not contain.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge {from} -> {to} references a node not in the graph")]
    InvalidEdge { from: NodeId, to: NodeId },

    #[error("edge {from} -> {to} has a negative or non-finite {dim} cost")]
    NegativeCost { from: NodeId, to: NodeId, dim: &'static str },

    #[error("duplicate edge {from} -> {to} with conflicting costs")]
    ConflictingEdge { from: NodeId, to: NodeId },

    #[error("duplicate node code {0:?}")]
    DuplicateCode(String),

    #[error("node {0} not found in network")]
    UnknownNode(NodeId),

    #[error("node code {0:?} not found in network")]
    UnknownCode(String),

    #[error("condition {name:?} has a factor below 1.0 (or non-finite)")]
    FactorBelowOne { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Parse(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
