//! Edge cost dimensions and the coordinate-derived cost model.
//!
//! Every edge carries three independent non-negative costs: `distance`,
//! `time`, and `fuel`. Search optimizes `distance`; the other two ride along
//! for the route summary. [`CostFactors`] scales a [`CostVector`]
//! component-wise (condition adjustments), and [`CostModel`] holds the
//! ratios that derive time and fuel from distance when an edge's costs are
//! generated from its endpoints' coordinates.

/// One value per cost dimension.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostVector {
    pub distance: f32,
    pub time:     f32,
    pub fuel:     f32,
}

impl CostVector {
    pub const ZERO: CostVector = CostVector { distance: 0.0, time: 0.0, fuel: 0.0 };

    #[inline]
    pub fn new(distance: f32, time: f32, fuel: f32) -> Self {
        Self { distance, time, fuel }
    }

    /// Component-wise multiplication by a factor set.
    #[inline]
    pub fn scaled(self, f: CostFactors) -> CostVector {
        CostVector {
            distance: self.distance * f.distance,
            time:     self.time * f.time,
            fuel:     self.fuel * f.fuel,
        }
    }

    /// The dimensions as `(name, value)` pairs, for validation and display.
    pub fn components(self) -> [(&'static str, f32); 3] {
        [("distance", self.distance), ("time", self.time), ("fuel", self.fuel)]
    }
}

impl std::ops::Add for CostVector {
    type Output = CostVector;
    #[inline]
    fn add(self, rhs: CostVector) -> CostVector {
        CostVector {
            distance: self.distance + rhs.distance,
            time:     self.time + rhs.time,
            fuel:     self.fuel + rhs.fuel,
        }
    }
}

impl std::ops::AddAssign for CostVector {
    #[inline]
    fn add_assign(&mut self, rhs: CostVector) {
        *self = *self + rhs;
    }
}

impl std::fmt::Display for CostVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "distance {:.1}, time {:.1}, fuel {:.1}",
            self.distance, self.time, self.fuel
        )
    }
}

// ── CostFactors ───────────────────────────────────────────────────────────────

/// One multiplicative factor per cost dimension.
///
/// Factors below 1.0 would let an adjustment shrink an edge under its
/// straight-line length and break heuristic admissibility, so constructors
/// in `sky-graph` reject them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostFactors {
    pub distance: f32,
    pub time:     f32,
    pub fuel:     f32,
}

impl CostFactors {
    /// The identity factor set — leaves every dimension unchanged.
    pub const NONE: CostFactors = CostFactors { distance: 1.0, time: 1.0, fuel: 1.0 };

    #[inline]
    pub fn new(distance: f32, time: f32, fuel: f32) -> Self {
        Self { distance, time, fuel }
    }

    /// Scale only the `time` dimension (e.g. congestion delays).
    #[inline]
    pub fn time_only(time: f32) -> Self {
        CostFactors { time, ..CostFactors::NONE }
    }

    /// `true` when every factor is finite and at least 1.0.
    pub fn is_valid(self) -> bool {
        [self.distance, self.time, self.fuel]
            .iter()
            .all(|f| f.is_finite() && *f >= 1.0)
    }
}

impl Default for CostFactors {
    fn default() -> Self {
        Self::NONE
    }
}

// ── CostModel ─────────────────────────────────────────────────────────────────

/// Ratios deriving `time` and `fuel` from a `distance` value.
///
/// Used both when generating edge costs from endpoint coordinates and when
/// computing the unrouted direct estimate, so the two stay comparable.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    pub time_per_distance: f32,
    pub fuel_per_distance: f32,
}

impl CostModel {
    #[inline]
    pub fn new(time_per_distance: f32, fuel_per_distance: f32) -> Self {
        Self { time_per_distance, fuel_per_distance }
    }

    /// Full cost vector for a straight traversal of `distance` units.
    #[inline]
    pub fn from_distance(self, distance: f32) -> CostVector {
        CostVector {
            distance,
            time: distance * self.time_per_distance,
            fuel: distance * self.fuel_per_distance,
        }
    }
}

impl Default for CostModel {
    /// The reference ratios: 0.8 time units and 1.2 fuel units per distance unit.
    fn default() -> Self {
        Self { time_per_distance: 0.8, fuel_per_distance: 1.2 }
    }
}
