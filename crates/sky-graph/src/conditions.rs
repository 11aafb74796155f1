//! Named route conditions and the derived-cost adjustment.
//!
//! A [`Condition`] is a named set of affected nodes plus one multiplicative
//! [`CostFactors`] — "adverse weather over DEN and ORD scales distance ×1.3,
//! time ×1.4, fuel ×1.3". A condition applies to an edge when the edge
//! touches any affected node as source or destination.
//!
//! [`AirNetwork::adjust`] folds a [`ConditionSet`] over the base graph and
//! returns a complete derived copy; the base graph is never mutated. When
//! several conditions apply to the same edge their factors compose
//! multiplicatively, applied in the set's insertion order. Multiplication
//! makes the order invisible today; it is still fixed and documented so
//! future non-multiplicative terms cannot silently change results.
//!
//! Factors are validated to be ≥ 1: conditions only ever increase cost,
//! which keeps the straight-line search heuristic admissible on the
//! adjusted graph.

use sky_core::{CostFactors, NodeId};

use crate::{AirNetwork, GraphError, GraphResult};

// ── Condition ─────────────────────────────────────────────────────────────────

/// A named cost perturbation over the edges touching a set of nodes.
#[derive(Clone, Debug)]
pub struct Condition {
    name:     String,
    affected: Vec<NodeId>,
    factors:  CostFactors,
}

impl Condition {
    /// Create a condition, validating that every factor is finite and ≥ 1.
    pub fn new(name: &str, affected: Vec<NodeId>, factors: CostFactors) -> GraphResult<Self> {
        if !factors.is_valid() {
            return Err(GraphError::FactorBelowOne { name: name.to_owned() });
        }
        Ok(Self { name: name.to_owned(), affected, factors })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn factors(&self) -> CostFactors {
        self.factors
    }

    /// `true` when `node` is in the affected set.
    pub fn touches(&self, node: NodeId) -> bool {
        self.affected.contains(&node)
    }

    /// `true` when the edge `from -> to` touches any affected node.
    pub fn applies(&self, from: NodeId, to: NodeId) -> bool {
        self.touches(from) || self.touches(to)
    }
}

// ── ConditionSet ──────────────────────────────────────────────────────────────

/// An ordered collection of active conditions.
///
/// Iteration (and therefore factor application) follows insertion order.
#[derive(Clone, Debug, Default)]
pub struct ConditionSet {
    conditions: Vec<Condition>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `condition`, keeping insertion order.
    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, condition: Condition) -> Self {
        self.push(condition);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

// ── Adjustment ────────────────────────────────────────────────────────────────

impl AirNetwork {
    /// Derive a cost-adjusted copy of this network.
    ///
    /// Pure: `self` is untouched and the result is a complete, independent
    /// network of the same shape. Edges matched by no condition are copied
    /// unchanged. An empty set yields a plain copy.
    pub fn adjust(&self, conditions: &ConditionSet) -> AirNetwork {
        let mut derived = self.clone();
        if conditions.is_empty() {
            return derived;
        }

        for i in 0..derived.edge_cost.len() {
            let from = self.edge_from[i];
            let to   = self.edge_to[i];
            for condition in conditions.iter() {
                if condition.applies(from, to) {
                    derived.edge_cost[i] = derived.edge_cost[i].scaled(condition.factors());
                }
            }
        }
        derived
    }
}
