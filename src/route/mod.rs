//! Shortest-path engine and path reconstruction.
//!
//! Two interchangeable algorithms produce an optimal-cost path tree rooted
//! at a source station:
//! - [`Algorithm::Dijkstra`]: greedy priority-selection, for non-negative weights
//! - [`Algorithm::BellmanFord`]: edge-list relaxation with negative-cycle detection
//!
//! Both must return equal-cost paths for the same (start, end, closure-state)
//! triple. Queries work on an ephemeral per-query arena of working nodes and
//! never mutate the graph.

mod bellman_ford;
mod dijkstra;

use crate::error::{GraphError, Result};
use crate::graph::{ConnectionId, StationId, TransitGraph};
use log::debug;
use std::collections::HashMap;

/// Sentinel path weight meaning "no path known yet"; larger than any
/// feasible path weight.
pub(crate) const INFINITE: i64 = i64::MAX;

/// Which shortest-path algorithm answers a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Priority-selection single-source algorithm (requires non-negative weights).
    Dijkstra,
    /// Relaxation-based algorithm; tolerates negative weights and reports
    /// negative cycles instead of looping.
    BellmanFord,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "Dijkstra"),
            Algorithm::BellmanFord => write!(f, "BellmanFord"),
        }
    }
}

/// One step of a computed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    /// Station reached at this step
    pub station: StationId,
    /// Connection used to arrive here; `None` for the source station
    pub connection: Option<ConnectionId>,
}

/// A computed route, ordered source to target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Ordered steps; the first step is the source with no arrival connection
    pub steps: Vec<PathStep>,
    /// Sum of the connection weights along the route
    pub total_weight: i64,
}

impl Path {
    /// The station sequence of the route, source first.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.steps.iter().map(|step| step.station)
    }

    /// Number of steps, including the source.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path has no steps at all.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Ephemeral per-query state for one station.
///
/// Created fresh for every query and discarded after reconstruction.
/// Back-references are indices into the query's arena, not pointers.
#[derive(Debug)]
pub(crate) struct WorkNode {
    pub(crate) station: StationId,
    pub(crate) weight: i64,
    pub(crate) prev_node: Option<usize>,
    pub(crate) prev_connection: Option<ConnectionId>,
    finalized: bool,
}

impl WorkNode {
    fn new(station: StationId) -> Self {
        Self {
            station,
            weight: INFINITE,
            prev_node: None,
            prev_connection: None,
            finalized: false,
        }
    }

    pub(crate) fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Set the one-way finalized flag.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::AlreadyFinalized`] if the flag is already set;
    /// a finalized node can never be un-finalized.
    pub(crate) fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Err(GraphError::AlreadyFinalized {
                station_id: self.station,
            });
        }
        self.finalized = true;
        Ok(())
    }
}

/// Build the per-query arena: one working node per station, ordered by
/// ascending station ID so that tie-breaks resolve to the lowest ID.
///
/// Returns the arena and an index from station ID to arena position. The
/// start node's weight is set to zero.
pub(crate) fn build_arena(
    graph: &TransitGraph,
    start: StationId,
) -> Result<(Vec<WorkNode>, HashMap<StationId, usize>)> {
    graph.station(start)?;

    let mut station_ids: Vec<StationId> = graph.stations().map(|station| station.id).collect();
    station_ids.sort_unstable();

    let mut arena: Vec<WorkNode> = station_ids.iter().map(|&id| WorkNode::new(id)).collect();
    let index: HashMap<StationId, usize> = station_ids
        .iter()
        .enumerate()
        .map(|(position, &id)| (id, position))
        .collect();

    if let Some(&start_index) = index.get(&start) {
        arena[start_index].weight = 0;
    }

    Ok((arena, index))
}

/// Reconstruct the route ending at `target` by walking back-references.
///
/// Emits (station, arrival-connection) pairs from the target back to the
/// node with no previous node (the source), then reverses so the path reads
/// source to target. The source step's connection is `None`.
pub(crate) fn to_path(arena: &[WorkNode], target: usize) -> Path {
    let mut steps = Vec::new();
    let mut current = Some(target);

    while let Some(position) = current {
        let node = &arena[position];
        steps.push(PathStep {
            station: node.station,
            connection: node.prev_connection,
        });
        current = node.prev_node;
    }

    steps.reverse();
    Path {
        steps,
        total_weight: arena[target].weight,
    }
}

/// Find an optimal route between two stations with the chosen algorithm.
///
/// Closed connections are treated as structurally absent for the duration of
/// the query; the graph itself is not mutated.
///
/// # Errors
///
/// Returns [`GraphError::StationNotFound`] if either station is absent,
/// [`GraphError::NoPathFound`] if `end` is unreachable from `start`, and
/// [`GraphError::NegativeCycle`] if the relaxation-based algorithm detects a
/// negative-weight cycle.
pub fn find_shortest_path(
    graph: &TransitGraph,
    start: StationId,
    end: StationId,
    algorithm: Algorithm,
) -> Result<Path> {
    debug!("Shortest path query: start={start}, end={end}, algorithm={algorithm}");
    match algorithm {
        Algorithm::Dijkstra => dijkstra::shortest_path(graph, start, end),
        Algorithm::BellmanFord => bellman_ford::shortest_path(graph, start, end),
    }
}
