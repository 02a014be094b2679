//! JSON document format for transit graphs.
//!
//! A document is a list of station records, each carrying its adjacency as a
//! map from neighbour ID to the connections reaching it. Every connection
//! therefore appears under both of its endpoints; the loader deduplicates by
//! connection ID, so a document edited by hand only needs one of the two
//! entries.

use crate::error::{GraphError, Result};
use crate::graph::{ConnectionId, StationId, TransitGraph};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Serialized form of a whole graph.
#[derive(Debug, Serialize, Deserialize)]
struct GraphDocument {
    stations: Vec<StationRecord>,
}

/// Serialized form of one station and its adjacency.
#[derive(Debug, Serialize, Deserialize)]
struct StationRecord {
    id: StationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default)]
    adjacency: BTreeMap<StationId, Vec<ConnectionRecord>>,
}

/// Serialized form of one connection, stored under an endpoint's adjacency.
#[derive(Debug, Serialize, Deserialize)]
struct ConnectionRecord {
    id: ConnectionId,
    weight: i64,
    #[serde(default)]
    closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

/// Serialize a graph to a pretty-printed JSON document.
///
/// Output is deterministic: stations in ascending ID order, adjacency and
/// connection sets in their stored (ordered) form.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if encoding fails.
pub fn to_json(graph: &TransitGraph) -> Result<String> {
    let document = document_from_graph(graph)?;
    serde_json::to_string_pretty(&document)
        .map_err(|e| GraphError::serialization("Failed to encode graph document", Some(e)))
}

/// Deserialize a graph from a JSON document.
///
/// Stations are restored first with their persisted identifiers, then
/// connections; the duplicate (second-endpoint) record of each connection is
/// skipped.
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] for malformed JSON and propagates
/// store errors for documents that violate graph invariants (e.g. an
/// adjacency entry naming a station the document never declares).
pub fn from_json(json: &str) -> Result<TransitGraph> {
    let document: GraphDocument = serde_json::from_str(json)
        .map_err(|e| GraphError::serialization("Failed to decode graph document", Some(e)))?;
    graph_from_document(document)
}

/// Serialize a graph to a JSON file at `path`.
///
/// # Errors
///
/// Returns [`GraphError::Storage`] if the file cannot be written.
pub fn save_to_file(graph: &TransitGraph, path: &Path) -> Result<()> {
    info!("Saving graph to {:?}", path);
    let json = to_json(graph)?;
    fs::write(path, json).map_err(|e| {
        GraphError::storage(format!("Failed to write graph to {}", path.display()), Some(e))
    })
}

/// Load a graph from a JSON file at `path`.
///
/// # Errors
///
/// Returns [`GraphError::Storage`] if the file cannot be read.
pub fn load_from_file(path: &Path) -> Result<TransitGraph> {
    info!("Loading graph from {:?}", path);
    let json = fs::read_to_string(path).map_err(|e| {
        GraphError::storage(format!("Failed to read graph from {}", path.display()), Some(e))
    })?;
    from_json(&json)
}

fn document_from_graph(graph: &TransitGraph) -> Result<GraphDocument> {
    let mut stations: Vec<_> = graph.stations().collect();
    stations.sort_by_key(|station| station.id);

    let mut records = Vec::with_capacity(stations.len());
    for station in stations {
        let mut adjacency = BTreeMap::new();
        for (&neighbor, connection_ids) in station.adjacency() {
            let mut connections = Vec::with_capacity(connection_ids.len());
            for &connection_id in connection_ids {
                let connection = graph.connection(connection_id)?;
                connections.push(ConnectionRecord {
                    id: connection.id,
                    weight: connection.weight,
                    closed: connection.closed,
                    label: connection.label.clone(),
                });
            }
            adjacency.insert(neighbor, connections);
        }
        records.push(StationRecord {
            id: station.id,
            label: station.label.clone(),
            adjacency,
        });
    }

    Ok(GraphDocument { stations: records })
}

fn graph_from_document(document: GraphDocument) -> Result<TransitGraph> {
    let mut graph = TransitGraph::new();

    for record in &document.stations {
        graph.add_station_with_id(record.id)?;
        if let Some(label) = &record.label {
            graph.set_station_label(record.id, label.clone())?;
        }
    }

    let mut restored = 0usize;
    for record in &document.stations {
        for (&neighbor, connections) in &record.adjacency {
            for connection_record in connections {
                match graph.add_connection_with_id(
                    record.id,
                    neighbor,
                    connection_record.weight,
                    connection_record.id,
                ) {
                    Ok(connection_id) => {
                        if connection_record.closed {
                            graph.close_connection(connection_id)?;
                        }
                        if let Some(label) = &connection_record.label {
                            graph.set_connection_label(connection_id, label.clone())?;
                        }
                        restored += 1;
                    }
                    // The same connection listed under its other endpoint.
                    Err(GraphError::DuplicateConnectionId { .. }) => {}
                    Err(e) => return Err(e),
                }
            }
        }
    }

    debug!(
        "Restored {} stations and {} connections",
        graph.station_count(),
        restored
    );
    Ok(graph)
}
