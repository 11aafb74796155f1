//! `sky-engine` — the planning front door of the skyroute workspace.
//!
//! # Request flow
//!
//! ```text
//! RouteQuery ─▶ adjust(base network, conditions)   sky-graph
//!            ─▶ find_path(adjusted, origin, dest)  sky-route
//!            ─▶ direct_estimate(origin, dest)      sky-graph
//!            ─▶ summarize(path, adjusted, est.)    sky-route
//!            ─▶ RoutePlan { path, summary }
//!                 └▶ start_playback(duration, now) sky-playback
//! ```
//!
//! The engine owns only the immutable base network; every query's state
//! (endpoints, algorithm, conditions) lives in the caller's [`RouteQuery`],
//! and the playback state lives in the `Playback` value handed back to the
//! caller. Nothing here blocks, retries, or spawns.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sky_engine::{RouteEngine, RouteQuery};
//! use sky_route::Algorithm;
//!
//! let engine = RouteEngine::new(network);
//! let query = RouteQuery::new(lax, jfk).with_algorithm(Algorithm::AStar);
//! if let Some(plan) = engine.plan(&query)? {
//!     println!("{}", plan.summary);
//!     let mut playback = plan.start_playback(3_000, now)?;
//!     // caller ticks `playback` from its timer...
//! }
//! ```

pub mod engine;
pub mod error;
pub mod query;

#[cfg(test)]
mod tests;

pub use engine::{RouteEngine, RoutePlan};
pub use error::{EngineError, EngineResult};
pub use query::RouteQuery;
