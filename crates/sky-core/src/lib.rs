//! `sky-core` — foundational types for the skyroute engine.
//!
//! This crate is a dependency of every other `sky-*` crate. It intentionally
//! has no `sky-*` dependencies and minimal external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                            |
//! |----------|-----------------------------------------------------|
//! | [`ids`]  | `NodeId`, `EdgeId`                                  |
//! | [`geo`]  | `PlanarPoint`, Euclidean distance, interpolation    |
//! | [`cost`] | `CostVector`, `CostFactors`, `CostModel`            |
//! | [`time`] | `Millis` — monotonic playback timestamps            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cost;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cost::{CostFactors, CostModel, CostVector};
pub use geo::PlanarPoint;
pub use ids::{EdgeId, NodeId};
pub use time::Millis;
