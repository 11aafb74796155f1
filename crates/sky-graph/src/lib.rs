//! `sky-graph` — air network graph, cost adjustment, and spatial indexing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`network`]    | `AirNetwork` (CSR + R-tree), `AirNetworkBuilder`, direct estimate |
//! | [`conditions`] | `Condition`, `ConditionSet`, `AirNetwork::adjust`            |
//! | [`loader`]     | `load_network_csv` / `load_network_readers`                  |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Propagates `Serialize`/`Deserialize` to sky-core types.  |

pub mod conditions;
pub mod error;
pub mod loader;
pub mod network;


pub use conditions::{Condition, ConditionSet};
pub use error::{GraphError, GraphResult};
pub use loader::{load_network_csv, load_network_readers};
pub use network::{AirNetwork, AirNetworkBuilder};
