//! Convenience helpers for common transit-network operations.
//!
//! Higher-level wrappers over the [`TransitGraph`] store, reducing
//! boilerplate for labelled construction and for the reachability-gated
//! closure sequence interactive frontends apply.

use crate::error::Result;
use crate::graph::{search, ConnectionId, StationId, TransitGraph};
use log::debug;

/// Add a station and give it a display label.
///
/// # Returns
///
/// The ID of the created station.
pub fn add_labelled_station(graph: &mut TransitGraph, label: &str) -> Result<StationId> {
    let station_id = graph.add_station();
    graph.set_station_label(station_id, label)?;
    Ok(station_id)
}

/// Add a labelled connection (a "line") between two stations.
///
/// # Errors
///
/// Returns [`crate::GraphError::StationNotFound`] if either endpoint is absent.
pub fn add_line(
    graph: &mut TransitGraph,
    a: StationId,
    b: StationId,
    weight: i64,
    label: &str,
) -> Result<ConnectionId> {
    let connection_id = graph.add_connection(a, b, weight)?;
    graph.set_connection_label(connection_id, label)?;
    Ok(connection_id)
}

/// Find a station by its display label.
///
/// Labels are not required to be unique; the first match wins.
pub fn find_station_by_label(graph: &TransitGraph, label: &str) -> Option<StationId> {
    graph
        .stations()
        .find(|station| station.label.as_deref() == Some(label))
        .map(|station| station.id)
}

/// Close a connection only if its endpoints can still reach each other
/// afterwards.
///
/// The close is applied, reachability between the two endpoints is
/// re-checked, and the connection is reopened if the closure would leave
/// them disconnected. The whole sequence is cheap and side-effect
/// reversible.
///
/// # Returns
///
/// `true` if the closure was kept, `false` if it was rolled back.
///
/// # Errors
///
/// Returns [`crate::GraphError::ConnectionNotFound`] if the connection doesn't exist.
pub fn close_connection_checked(graph: &mut TransitGraph, id: ConnectionId) -> Result<bool> {
    let (a, b) = graph.connection(id)?.endpoints;

    graph.close_connection(id)?;
    if search::is_path_available(graph, a, b)? {
        Ok(true)
    } else {
        debug!("Closure of connection {id} would disconnect {a} and {b}; rolling back");
        graph.open_connection(id)?;
        Ok(false)
    }
}
