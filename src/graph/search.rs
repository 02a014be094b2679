//! Closure-aware connectivity and reachability search.
//!
//! Provides BFS and DFS traversal over open connections, plus the
//! reachability predicates built on them. Both traversal orders are kept
//! because they discover stations differently (layer order vs. depth order);
//! for a pure reachability boolean they agree, and the tests cross-validate
//! them against each other.

use crate::error::Result;
use crate::graph::{StationId, TransitGraph};
use std::collections::{HashSet, VecDeque};

/// Breadth-First Search over open connections.
///
/// Starts a FIFO queue with `start`; repeatedly pops the front, skips it if
/// already visited, otherwise marks it visited and enqueues every neighbour
/// reachable via at least one open connection. A neighbour is enqueued once
/// per step even when several open connections lead to it; duplicate
/// enqueues are harmless since the visited check deduplicates on pop.
///
/// # Returns
///
/// The set of reachable stations, including `start` itself.
///
/// # Errors
///
/// Returns [`crate::GraphError::StationNotFound`] if `start` doesn't exist.
pub fn breadth_first_search(graph: &TransitGraph, start: StationId) -> Result<HashSet<StationId>> {
    graph.station(start)?;

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }

        let station = graph.station(current)?;
        for (&neighbor, connection_ids) in station.adjacency() {
            let has_open = connection_ids
                .iter()
                .filter_map(|&id| graph.connection(id).ok())
                .any(|connection| !connection.closed);

            if has_open && !visited.contains(&neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    Ok(visited)
}

/// Depth-First Search over open connections (iterative implementation).
///
/// Uses an explicit stack to avoid overflow on deep graphs. Applies the same
/// open-connection filter and visited semantics as
/// [`breadth_first_search`]; only the discovery order differs.
///
/// # Returns
///
/// The set of reachable stations, including `start` itself.
///
/// # Errors
///
/// Returns [`crate::GraphError::StationNotFound`] if `start` doesn't exist.
pub fn depth_first_search(graph: &TransitGraph, start: StationId) -> Result<HashSet<StationId>> {
    graph.station(start)?;

    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }

        let station = graph.station(current)?;
        for (&neighbor, connection_ids) in station.adjacency() {
            let has_open = connection_ids
                .iter()
                .filter_map(|&id| graph.connection(id).ok())
                .any(|connection| !connection.closed);

            if has_open && !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(visited)
}

/// Whether every station can reach every other over open connections.
///
/// Connectivity is tested, not reachability from a fixed root, so any
/// arbitrary start station suffices. An empty graph is vacuously connected.
pub fn is_connected(graph: &TransitGraph) -> bool {
    let start = match graph.stations().next() {
        Some(station) => station.id,
        None => return true,
    };

    breadth_first_search(graph, start)
        .map(|visited| visited.len() == graph.station_count())
        .unwrap_or(false)
}

/// Whether `end` is reachable from `start` over open connections.
///
/// Trivially true when `start == end` (zero-length reachability), provided
/// both stations exist.
///
/// # Errors
///
/// Returns [`crate::GraphError::StationNotFound`] if either station doesn't exist.
pub fn is_path_available(graph: &TransitGraph, start: StationId, end: StationId) -> Result<bool> {
    graph.station(end)?;
    let visited = breadth_first_search(graph, start)?;
    Ok(visited.contains(&end))
}
