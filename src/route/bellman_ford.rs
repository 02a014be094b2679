//! Relaxation-based shortest path with negative-cycle detection.
//!
//! Relaxes the full connection table |V| - 1 times. The store is undirected,
//! so every connection is relaxed in both directions per pass; a
//! single-direction relaxation would miss shorter paths discovered from the
//! far endpoint first.

use super::{build_arena, to_path, Path, WorkNode, INFINITE};
use crate::error::{GraphError, Result};
use crate::graph::{Connection, ConnectionId, StationId, TransitGraph};
use std::collections::HashMap;

pub(crate) fn shortest_path(
    graph: &TransitGraph,
    start: StationId,
    end: StationId,
) -> Result<Path> {
    graph.station(end)?;
    let (mut arena, index) = build_arena(graph, start)?;

    // Ascending ID order keeps the relaxation sequence deterministic from
    // run to run.
    let mut connection_ids: Vec<ConnectionId> =
        graph.connections().map(|connection| connection.id).collect();
    connection_ids.sort_unstable();

    let passes = arena.len().saturating_sub(1);
    for _ in 0..passes {
        for &connection_id in &connection_ids {
            if let Ok(connection) = graph.connection(connection_id) {
                if connection.closed {
                    continue;
                }
                let (a, b) = connection.endpoints;
                relax(&mut arena, &index, a, b, connection);
                relax(&mut arena, &index, b, a, connection);
            }
        }
    }

    // One more scan: a relaxation that still improves a distance means a
    // negative-weight cycle. Closed connections stay excluded here too;
    // they are structurally absent for the whole query.
    for &connection_id in &connection_ids {
        if let Ok(connection) = graph.connection(connection_id) {
            if connection.closed {
                continue;
            }
            let (a, b) = connection.endpoints;
            if improves(&arena, &index, a, b, connection)
                || improves(&arena, &index, b, a, connection)
            {
                return Err(GraphError::NegativeCycle);
            }
        }
    }

    let target = match index.get(&end) {
        Some(&position) => position,
        None => return Err(GraphError::StationNotFound { station_id: end }),
    };
    if arena[target].weight == INFINITE {
        return Err(GraphError::NoPathFound { start, end });
    }

    Ok(to_path(&arena, target))
}

/// Relax `connection` in the `from` -> `to` direction, updating the
/// destination's weight and back-references on strict improvement.
fn relax(
    arena: &mut [WorkNode],
    index: &HashMap<StationId, usize>,
    from: StationId,
    to: StationId,
    connection: &Connection,
) {
    if let (Some(&from_position), Some(&to_position)) = (index.get(&from), index.get(&to)) {
        if arena[from_position].weight == INFINITE {
            return;
        }
        let candidate = arena[from_position].weight + connection.weight;
        if candidate < arena[to_position].weight {
            arena[to_position].weight = candidate;
            arena[to_position].prev_node = Some(from_position);
            arena[to_position].prev_connection = Some(connection.id);
        }
    }
}

/// Whether relaxing `connection` in the `from` -> `to` direction would still
/// strictly improve the destination's weight.
fn improves(
    arena: &[WorkNode],
    index: &HashMap<StationId, usize>,
    from: StationId,
    to: StationId,
    connection: &Connection,
) -> bool {
    if let (Some(&from_position), Some(&to_position)) = (index.get(&from), index.get(&to)) {
        if arena[from_position].weight == INFINITE {
            return false;
        }
        arena[from_position].weight + connection.weight < arena[to_position].weight
    } else {
        false
    }
}
