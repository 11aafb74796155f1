//! `sky-route` — shortest-path search and route summaries.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`router`]   | `Router` trait, `Algorithm` selector                  |
//! | [`dijkstra`] | `DijkstraRouter` — label-setting search               |
//! | [`astar`]    | `AStarRouter` — straight-line-guided search           |
//! | [`path`]     | `FlightPath`                                          |
//! | [`summary`]  | `RouteSummary`, `summarize`                           |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                        |
//!
//! Both searches optimize the `distance` cost dimension of the (possibly
//! condition-adjusted) network and agree on the optimal total; under cost
//! ties they may return different — equally cheap — node sequences, except
//! that the shared `(cost, node id)` frontier ordering keeps each of them
//! individually deterministic.

pub mod astar;
pub mod dijkstra;
pub mod error;
pub mod path;
pub mod router;
pub mod summary;


pub use astar::AStarRouter;
pub use dijkstra::DijkstraRouter;
pub use error::{RouteError, RouteResult};
pub use path::FlightPath;
pub use router::{Algorithm, Router};
pub use summary::{summarize, RouteSummary};
