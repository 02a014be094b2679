//! Priority-selection shortest path.
//!
//! Classical greedy single-source algorithm: once a working node is
//! finalized its distance is provably optimal, because all connection
//! weights are non-negative and no later relaxation could improve it.

use super::{build_arena, to_path, Path, INFINITE};
use crate::error::{GraphError, Result};
use crate::graph::{StationId, TransitGraph};
use log::trace;

pub(crate) fn shortest_path(
    graph: &TransitGraph,
    start: StationId,
    end: StationId,
) -> Result<Path> {
    graph.station(end)?;
    let (mut arena, index) = build_arena(graph, start)?;

    // Bounded loop rather than `loop`: each iteration finalizes exactly one
    // node, so station-count iterations are always enough.
    for _ in 0..arena.len() {
        // Select the non-finalized node with the minimum known weight. The
        // arena is in ascending station-ID order and the comparison is
        // strict, so ties resolve to the lowest station ID.
        let mut selected = None;
        let mut lightest = INFINITE;
        for (position, node) in arena.iter().enumerate() {
            if node.is_finalized() || node.weight >= lightest {
                continue;
            }
            selected = Some(position);
            lightest = node.weight;
        }

        let current = match selected {
            Some(position) => position,
            // Every remaining node is unreachable from the start.
            None => return Err(GraphError::NoPathFound { start, end }),
        };

        // All of this node's relaxations happened in earlier iterations, so
        // its distance is settled.
        arena[current].finalize()?;

        let current_station = arena[current].station;
        let current_weight = arena[current].weight;

        // The node is finalized, so if it is the target we can stop here.
        if current_station == end {
            return Ok(to_path(&arena, current));
        }

        // Relax every open connection to every non-finalized neighbour.
        let station = graph.station(current_station)?;
        for (&neighbor, connection_ids) in station.adjacency() {
            let neighbor_position = match index.get(&neighbor) {
                Some(&position) => position,
                None => continue,
            };
            if arena[neighbor_position].is_finalized() {
                continue;
            }

            for &connection_id in connection_ids {
                if let Ok(connection) = graph.connection(connection_id) {
                    if connection.closed {
                        continue;
                    }
                    let candidate = current_weight + connection.weight;
                    if candidate < arena[neighbor_position].weight {
                        trace!(
                            "Relaxing station {neighbor} to weight {candidate} via connection {connection_id}"
                        );
                        arena[neighbor_position].weight = candidate;
                        arena[neighbor_position].prev_node = Some(current);
                        arena[neighbor_position].prev_connection = Some(connection_id);
                    }
                }
            }
        }
    }

    // The loop ran out without finalizing the target; with a prior
    // reachability check this is unreachable.
    Err(GraphError::NoPathFound { start, end })
}
