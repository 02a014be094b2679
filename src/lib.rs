//! # transitgraph
//!
//! A fast, reliable graph engine for modelling transit networks and
//! computing shortest routes.
//!
//! ## Core Principles
//!
//! - **Multi-edge by design**: a station pair may be joined by several
//!   parallel connections ("lines"), each independently closable
//! - **Closure-aware**: closed connections are excluded from every search
//!   and relaxation but stay in the structure, so they can be reopened
//! - **Zero Magic**: explicit over implicit, always; queries never mutate
//!   the graph
//! - **Deterministic when asked**: the identifier source is seedable and
//!   shortest-path tie-breaks are pinned to the lowest station ID
//!
//! ## Architecture
//!
//! transitgraph is organized in layers:
//!
//! ```text
//! User Tools (CLI, persistence frontends, servers)
//!     ↓
//! Helpers (convenience API, gated closures)
//!     ↓
//! Route Engine (Dijkstra, Bellman-Ford, path reconstruction)
//!     ↓
//! Core Graph (stations, connections, connectivity search)
//! ```
//!
//! ## Example
//!
//! ```
//! use transitgraph::{Algorithm, TransitGraph};
//!
//! # fn main() -> transitgraph::Result<()> {
//! let mut graph = TransitGraph::with_seed(7);
//! let a = graph.add_station();
//! let b = graph.add_station();
//! let c = graph.add_station();
//! graph.add_connection(a, b, 3)?;
//! graph.add_connection(b, c, 4)?;
//!
//! let path = graph.find_shortest_path(a, c, Algorithm::Dijkstra)?;
//! assert_eq!(path.total_weight, 7);
//! assert_eq!(path.stations().collect::<Vec<_>>(), vec![a, b, c]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod helpers;
pub mod route;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::search::{breadth_first_search, depth_first_search, is_connected, is_path_available};
pub use graph::{Connection, ConnectionId, Station, StationId, TransitGraph};
pub use route::{find_shortest_path, Algorithm, Path, PathStep};
