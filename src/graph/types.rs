//! Core graph types: stations, connections, and IDs.

use std::collections::{BTreeMap, BTreeSet};

/// Unique identifier for a station (random, non-zero).
pub type StationId = u64;

/// Unique identifier for a connection (random, non-zero).
pub type ConnectionId = u64;

/// A station (vertex) in the transit network.
///
/// Stations do not own their neighbours; the adjacency relation maps each
/// neighbouring station ID to the set of connection IDs reaching it. The
/// connection data itself lives in the graph's owned connection table, so a
/// station pair may be joined by several parallel connections and a mutation
/// through either endpoint is visible to both.
#[derive(Debug, Clone)]
pub struct Station {
    /// Unique identifier (assigned by the graph)
    pub id: StationId,
    /// Optional display label (e.g. the station name)
    pub label: Option<String>,
    /// Neighbour station ID -> IDs of the connections reaching it
    pub(crate) adjacency: BTreeMap<StationId, BTreeSet<ConnectionId>>,
}

impl Station {
    /// Create a new station with an empty adjacency relation.
    pub(crate) fn new(id: StationId) -> Self {
        Self {
            id,
            label: None,
            adjacency: BTreeMap::new(),
        }
    }

    /// The full adjacency relation, in ascending neighbour-ID order.
    ///
    /// Traversals must iterate the inner connection sets to consider every
    /// parallel connection to a neighbour, not just one.
    pub fn adjacency(&self) -> &BTreeMap<StationId, BTreeSet<ConnectionId>> {
        &self.adjacency
    }

    /// IDs of the neighbouring stations, in ascending order.
    pub fn neighbors(&self) -> impl Iterator<Item = StationId> + '_ {
        self.adjacency.keys().copied()
    }

    /// IDs of the connections joining this station to `neighbor`.
    pub fn connections_to(&self, neighbor: StationId) -> impl Iterator<Item = ConnectionId> + '_ {
        self.adjacency
            .get(&neighbor)
            .into_iter()
            .flat_map(|ids| ids.iter().copied())
    }

    /// Number of incident connections, counting parallel ones.
    pub fn degree(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }
}

/// A connection (edge) between two stations.
///
/// Connections are weighted, closable links; closing one excludes it from
/// traversal and relaxation without removing it from the structure, so it
/// can be reopened later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// Unique identifier (assigned by the graph)
    pub id: ConnectionId,
    /// The unordered station pair this connection joins
    pub endpoints: (StationId, StationId),
    /// Travel cost; callers must keep this positive
    pub weight: i64,
    /// Whether the connection is currently closed to traffic
    pub closed: bool,
    /// Optional display label (e.g. the line name)
    pub label: Option<String>,
}

impl Connection {
    /// Create a new open connection between two stations.
    pub(crate) fn new(id: ConnectionId, a: StationId, b: StationId, weight: i64) -> Self {
        Self {
            id,
            endpoints: (a, b),
            weight,
            closed: false,
            label: None,
        }
    }

    /// The endpoint on the far side of `station`, or `None` if `station` is
    /// not an endpoint of this connection.
    pub fn other_endpoint(&self, station: StationId) -> Option<StationId> {
        let (a, b) = self.endpoints;
        if station == a {
            Some(b)
        } else if station == b {
            Some(a)
        } else {
            None
        }
    }

    /// Whether this connection joins the given unordered station pair.
    pub fn joins(&self, a: StationId, b: StationId) -> bool {
        self.endpoints == (a, b) || self.endpoints == (b, a)
    }
}
