//! The per-request routing query.

use sky_core::NodeId;
use sky_graph::ConditionSet;
use sky_route::Algorithm;

/// Everything one planning request depends on: endpoints, the algorithm to
/// run, and the active conditions.
///
/// The caller owns this struct (typically mirroring its selection widgets)
/// and passes it by reference into [`RouteEngine::plan`][crate::RouteEngine];
/// the engine itself holds no per-request state.
#[derive(Clone, Debug)]
pub struct RouteQuery {
    pub origin:      NodeId,
    pub destination: NodeId,
    pub algorithm:   Algorithm,
    pub conditions:  ConditionSet,
}

impl RouteQuery {
    /// Query with the default algorithm and no active conditions.
    pub fn new(origin: NodeId, destination: NodeId) -> Self {
        Self {
            origin,
            destination,
            algorithm:  Algorithm::default(),
            conditions: ConditionSet::new(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_conditions(mut self, conditions: ConditionSet) -> Self {
        self.conditions = conditions;
        self
    }
}
