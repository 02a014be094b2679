//! Main TransitGraph interface for graph operations.

use super::types::{Connection, ConnectionId, Station, StationId};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};

/// The transit network graph.
///
/// `TransitGraph` owns the full set of stations (keyed by identifier) and the
/// full set of connections (keyed by identifier). Adjacency relations on the
/// stations store connection identifiers only; the connection table is the
/// single owner of connection state, which guarantees that weight and closure
/// mutations are visible from both endpoints.
///
/// All operations are explicit with no hidden behavior. Queries never mutate
/// the graph; the only mutation paths are the `add_*`/`remove_*`/`set_*` and
/// open/close operations below.
///
/// The graph is single-threaded and synchronous. Embedders that need
/// concurrent readers and writers must wrap it in their own synchronization
/// boundary (e.g. a read-write lock held for the duration of one query or
/// one mutation).
#[derive(Debug)]
pub struct TransitGraph {
    stations: HashMap<StationId, Station>,
    connections: HashMap<ConnectionId, Connection>,
    // Identifier source. Seedable so tests get reproducible IDs.
    rng: ChaCha8Rng,
}

impl TransitGraph {
    /// Create an empty graph with an entropy-seeded identifier source.
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Create an empty graph whose identifier source is seeded with `seed`.
    ///
    /// Two graphs built with the same seed and the same operation sequence
    /// assign identical identifiers, which keeps test expectations stable.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        Self {
            stations: HashMap::new(),
            connections: HashMap::new(),
            rng,
        }
    }

    /// Add a station to the graph.
    ///
    /// # Returns
    ///
    /// The fresh unique non-zero identifier assigned to the station.
    pub fn add_station(&mut self) -> StationId {
        let station_id = self.fresh_station_id();
        debug!("Adding station: id={station_id}");
        self.stations.insert(station_id, Station::new(station_id));
        station_id
    }

    /// Add a station with an explicit identifier (used by deserialization).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidId`] for a zero identifier and
    /// [`GraphError::DuplicateStationId`] if the identifier is taken.
    pub fn add_station_with_id(&mut self, station_id: StationId) -> Result<StationId> {
        if station_id == 0 {
            return Err(GraphError::InvalidId);
        }
        if self.stations.contains_key(&station_id) {
            return Err(GraphError::DuplicateStationId { station_id });
        }
        debug!("Adding station: id={station_id} (explicit)");
        self.stations.insert(station_id, Station::new(station_id));
        Ok(station_id)
    }

    /// Get a station by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::StationNotFound`] if the station doesn't exist.
    pub fn station(&self, station_id: StationId) -> Result<&Station> {
        self.stations
            .get(&station_id)
            .ok_or(GraphError::StationNotFound { station_id })
    }

    /// Set the display label of a station.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::StationNotFound`] if the station doesn't exist.
    pub fn set_station_label(
        &mut self,
        station_id: StationId,
        label: impl Into<String>,
    ) -> Result<()> {
        let station = self
            .stations
            .get_mut(&station_id)
            .ok_or(GraphError::StationNotFound { station_id })?;
        station.label = Some(label.into());
        Ok(())
    }

    /// Remove a station and all connections incident to it.
    ///
    /// Incident connections are removed from the neighbours' adjacency
    /// relations and from the connection table before the station itself is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::StationNotFound`] if the station doesn't exist.
    pub fn remove_station(&mut self, station_id: StationId) -> Result<()> {
        debug!("Removing station: id={station_id}");
        let station = self
            .stations
            .get(&station_id)
            .ok_or(GraphError::StationNotFound { station_id })?;

        let incident: Vec<ConnectionId> = station
            .adjacency
            .values()
            .flat_map(|ids| ids.iter().copied())
            .collect();

        trace!(
            "Removing {} incident connections for station {}",
            incident.len(),
            station_id
        );
        for connection_id in incident {
            self.remove_connection(connection_id)?;
        }

        self.stations.remove(&station_id);
        Ok(())
    }

    /// Add a connection between two stations with a fresh identifier.
    ///
    /// The connection is registered under both stations' adjacency relations.
    /// `weight` must be a positive travel cost; callers are responsible for
    /// this.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::StationNotFound`] if either endpoint is absent.
    pub fn add_connection(
        &mut self,
        a: StationId,
        b: StationId,
        weight: i64,
    ) -> Result<ConnectionId> {
        let connection_id = self.fresh_connection_id();
        self.insert_connection(a, b, weight, connection_id)
    }

    /// Add a connection with an explicit identifier (used by deserialization
    /// and by callers that manage their own identifier space).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidId`] for a zero identifier,
    /// [`GraphError::DuplicateConnectionId`] if the identifier is taken, and
    /// [`GraphError::StationNotFound`] if either endpoint is absent.
    pub fn add_connection_with_id(
        &mut self,
        a: StationId,
        b: StationId,
        weight: i64,
        connection_id: ConnectionId,
    ) -> Result<ConnectionId> {
        if connection_id == 0 {
            return Err(GraphError::InvalidId);
        }
        if self.connections.contains_key(&connection_id) {
            return Err(GraphError::DuplicateConnectionId { connection_id });
        }
        self.insert_connection(a, b, weight, connection_id)
    }

    fn insert_connection(
        &mut self,
        a: StationId,
        b: StationId,
        weight: i64,
        connection_id: ConnectionId,
    ) -> Result<ConnectionId> {
        debug!("Adding connection: id={connection_id}, a={a}, b={b}, weight={weight}");
        // Verify both endpoints before mutating anything.
        if !self.stations.contains_key(&a) {
            return Err(GraphError::StationNotFound { station_id: a });
        }
        if !self.stations.contains_key(&b) {
            return Err(GraphError::StationNotFound { station_id: b });
        }

        self.connections
            .insert(connection_id, Connection::new(connection_id, a, b, weight));

        if let Some(station) = self.stations.get_mut(&a) {
            station.adjacency.entry(b).or_default().insert(connection_id);
        }
        if let Some(station) = self.stations.get_mut(&b) {
            station.adjacency.entry(a).or_default().insert(connection_id);
        }

        Ok(connection_id)
    }

    /// Get a connection by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ConnectionNotFound`] if the connection doesn't exist.
    pub fn connection(&self, connection_id: ConnectionId) -> Result<&Connection> {
        self.connections
            .get(&connection_id)
            .ok_or(GraphError::ConnectionNotFound { connection_id })
    }

    /// Remove a connection from both endpoints' adjacency and the table.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ConnectionNotFound`] if the connection doesn't exist.
    pub fn remove_connection(&mut self, connection_id: ConnectionId) -> Result<()> {
        debug!("Removing connection: id={connection_id}");
        let connection = self
            .connections
            .remove(&connection_id)
            .ok_or(GraphError::ConnectionNotFound { connection_id })?;

        let (a, b) = connection.endpoints;
        self.unregister_adjacency(a, b, connection_id);
        self.unregister_adjacency(b, a, connection_id);

        Ok(())
    }

    fn unregister_adjacency(
        &mut self,
        station_id: StationId,
        neighbor: StationId,
        connection_id: ConnectionId,
    ) {
        if let Some(station) = self.stations.get_mut(&station_id) {
            if let Some(ids) = station.adjacency.get_mut(&neighbor) {
                ids.remove(&connection_id);
                if ids.is_empty() {
                    station.adjacency.remove(&neighbor);
                }
            }
        }
    }

    /// Reopen a closed connection. Pure mutation, no structural change.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ConnectionNotFound`] if the connection doesn't exist.
    pub fn open_connection(&mut self, connection_id: ConnectionId) -> Result<()> {
        let connection = self.connection_mut(connection_id)?;
        connection.closed = false;
        trace!("Connection {connection_id} opened");
        Ok(())
    }

    /// Close a connection, excluding it from traversal until reopened.
    ///
    /// The operation is unconditional; callers that must not disconnect the
    /// network are expected to check reachability afterwards and roll back
    /// (see [`crate::helpers::close_connection_checked`]).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ConnectionNotFound`] if the connection doesn't exist.
    pub fn close_connection(&mut self, connection_id: ConnectionId) -> Result<()> {
        let connection = self.connection_mut(connection_id)?;
        connection.closed = true;
        trace!("Connection {connection_id} closed");
        Ok(())
    }

    /// Update the travel cost of a connection.
    ///
    /// The change is visible from both endpoints, since the connection table
    /// is the single owner of connection state.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ConnectionNotFound`] if the connection doesn't exist.
    pub fn set_connection_weight(&mut self, connection_id: ConnectionId, weight: i64) -> Result<()> {
        let connection = self.connection_mut(connection_id)?;
        connection.weight = weight;
        Ok(())
    }

    /// Set the display label of a connection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ConnectionNotFound`] if the connection doesn't exist.
    pub fn set_connection_label(
        &mut self,
        connection_id: ConnectionId,
        label: impl Into<String>,
    ) -> Result<()> {
        let connection = self.connection_mut(connection_id)?;
        connection.label = Some(label.into());
        Ok(())
    }

    /// Get all neighbour stations of `station_id`, in ascending ID order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::StationNotFound`] if the station doesn't exist.
    pub fn neighbors(&self, station_id: StationId) -> Result<Vec<StationId>> {
        Ok(self.station(station_id)?.neighbors().collect())
    }

    /// Get all connections joining two stations (there may be several
    /// parallel ones).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::StationNotFound`] if either station doesn't exist.
    pub fn connections_between(&self, a: StationId, b: StationId) -> Result<Vec<ConnectionId>> {
        self.station(b)?;
        Ok(self.station(a)?.connections_to(b).collect())
    }

    /// Iterate over all stations (arbitrary order).
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Iterate over all connections (arbitrary order).
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values()
    }

    /// Total number of stations in the graph.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Total number of connections in the graph, counting parallel ones.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    // ===== Query Methods =====

    /// Stations reachable from `start` over open connections, breadth-first.
    ///
    /// See [`crate::graph::search::breadth_first_search`].
    pub fn bfs(&self, start: StationId) -> Result<HashSet<StationId>> {
        super::search::breadth_first_search(self, start)
    }

    /// Stations reachable from `start` over open connections, depth-first.
    ///
    /// See [`crate::graph::search::depth_first_search`].
    pub fn dfs(&self, start: StationId) -> Result<HashSet<StationId>> {
        super::search::depth_first_search(self, start)
    }

    /// Whether every station can reach every other over open connections.
    pub fn is_connected(&self) -> bool {
        super::search::is_connected(self)
    }

    /// Whether `end` is reachable from `start` over open connections.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::StationNotFound`] if either station doesn't exist.
    pub fn is_path_available(&self, start: StationId, end: StationId) -> Result<bool> {
        super::search::is_path_available(self, start, end)
    }

    /// Find an optimal route between two stations with the chosen algorithm.
    ///
    /// See [`crate::route::find_shortest_path`].
    pub fn find_shortest_path(
        &self,
        start: StationId,
        end: StationId,
        algorithm: crate::route::Algorithm,
    ) -> Result<crate::route::Path> {
        crate::route::find_shortest_path(self, start, end, algorithm)
    }

    // Private helper methods

    fn connection_mut(&mut self, connection_id: ConnectionId) -> Result<&mut Connection> {
        self.connections
            .get_mut(&connection_id)
            .ok_or(GraphError::ConnectionNotFound { connection_id })
    }

    fn fresh_station_id(&mut self) -> StationId {
        // Generate, check membership, retry on collision. Zero is reserved.
        loop {
            let candidate: StationId = self.rng.gen();
            if candidate != 0 && !self.stations.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    fn fresh_connection_id(&mut self) -> ConnectionId {
        loop {
            let candidate: ConnectionId = self.rng.gen();
            if candidate != 0 && !self.connections.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for TransitGraph {
    fn default() -> Self {
        Self::new()
    }
}
