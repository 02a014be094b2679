//! Error types for transitgraph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use crate::graph::{ConnectionId, StationId};
use thiserror::Error;

/// Result type alias for transitgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Comprehensive error type for all graph and routing operations.
///
/// Errors are designed to fail fast and provide clear context about what went wrong.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Station not found in the graph
    #[error("Station not found: {station_id}")]
    StationNotFound {
        /// ID of the missing station
        station_id: StationId,
    },

    /// Connection not found in the graph
    #[error("Connection not found: {connection_id}")]
    ConnectionNotFound {
        /// ID of the missing connection
        connection_id: ConnectionId,
    },

    /// Explicit station identifier already in use
    #[error("Station with ID {station_id} already exists")]
    DuplicateStationId {
        /// The identifier that was already taken
        station_id: StationId,
    },

    /// Explicit connection identifier already in use
    #[error("Connection with ID {connection_id} already exists")]
    DuplicateConnectionId {
        /// The identifier that was already taken
        connection_id: ConnectionId,
    },

    /// Zero supplied as an explicit identifier (zero is the reserved non-id)
    #[error("Identifier 0 is reserved and cannot be assigned")]
    InvalidId,

    /// Attempt to finalize an already finalized working node.
    ///
    /// This is an internal invariant violation of the priority-selection
    /// algorithm, not a user-recoverable condition.
    #[error("Station {station_id} is already finalized")]
    AlreadyFinalized {
        /// Station whose working node was finalized twice
        station_id: StationId,
    },

    /// No route exists between the two stations under the current closure state
    #[error("No path from station {start} to station {end}")]
    NoPathFound {
        /// Station the query started from
        start: StationId,
        /// Station the query tried to reach
        end: StationId,
    },

    /// A relaxation pass still improves a distance after |V| - 1 rounds.
    ///
    /// Connection weights are defined to be positive, so this indicates a
    /// negative weight was inserted upstream.
    #[error("Negative weight cycle detected")]
    NegativeCycle,

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Storage error (file I/O around save/load)
    #[error("Storage error: {message}")]
    Storage {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a storage error from a message and optional source.
    pub fn storage<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_not_found_error() {
        let err = GraphError::StationNotFound { station_id: 42 };
        assert_eq!(err.to_string(), "Station not found: 42");
    }

    #[test]
    fn test_duplicate_connection_id_error() {
        let err = GraphError::DuplicateConnectionId { connection_id: 7 };
        assert_eq!(err.to_string(), "Connection with ID 7 already exists");
    }

    #[test]
    fn test_no_path_found_error() {
        let err = GraphError::NoPathFound { start: 1, end: 2 };
        assert_eq!(err.to_string(), "No path from station 1 to station 2");
    }

    #[test]
    fn test_storage_error() {
        let err = GraphError::storage("Failed to write to disk", None::<std::io::Error>);
        assert_eq!(err.to_string(), "Storage error: Failed to write to disk");
    }
}
