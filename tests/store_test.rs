//! Integration tests for the graph store: identifiers, adjacency symmetry,
//! multi-edge registration, and removal semantics.

use transitgraph::{GraphError, TransitGraph};

#[test]
fn test_station_ids_are_nonzero_and_unique() {
    let mut graph = TransitGraph::with_seed(1);

    let mut ids = Vec::new();
    for _ in 0..100 {
        ids.push(graph.add_station());
    }

    assert!(ids.iter().all(|&id| id != 0));
    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn test_seeded_graphs_assign_identical_ids() {
    let mut first = TransitGraph::with_seed(42);
    let mut second = TransitGraph::with_seed(42);

    for _ in 0..10 {
        assert_eq!(first.add_station(), second.add_station());
    }
}

#[test]
fn test_add_connection_registers_both_endpoints() {
    let mut graph = TransitGraph::with_seed(2);
    let a = graph.add_station();
    let b = graph.add_station();

    let connection_id = graph.add_connection(a, b, 3).unwrap();

    // Adjacency must be symmetric.
    assert_eq!(graph.neighbors(a).unwrap(), vec![b]);
    assert_eq!(graph.neighbors(b).unwrap(), vec![a]);
    assert_eq!(graph.connections_between(a, b).unwrap(), vec![connection_id]);
    assert_eq!(graph.connections_between(b, a).unwrap(), vec![connection_id]);

    let connection = graph.connection(connection_id).unwrap();
    assert!(connection.joins(a, b));
    assert_eq!(connection.weight, 3);
    assert!(!connection.closed);
}

#[test]
fn test_parallel_connections_between_same_pair() {
    let mut graph = TransitGraph::with_seed(3);
    let a = graph.add_station();
    let b = graph.add_station();

    let first = graph.add_connection(a, b, 1).unwrap();
    let second = graph.add_connection(a, b, 2).unwrap();

    assert_ne!(first, second);
    assert_eq!(graph.connection_count(), 2);

    let mut between = graph.connections_between(a, b).unwrap();
    between.sort_unstable();
    let mut expected = vec![first, second];
    expected.sort_unstable();
    assert_eq!(between, expected);
}

#[test]
fn test_explicit_connection_id_round_trip_and_duplicate() {
    let mut graph = TransitGraph::with_seed(4);
    let a = graph.add_station();
    let b = graph.add_station();

    let assigned = graph.add_connection_with_id(a, b, 5, 1234).unwrap();
    assert_eq!(assigned, 1234);

    let err = graph.add_connection_with_id(a, b, 5, 1234).unwrap_err();
    assert!(matches!(
        err,
        GraphError::DuplicateConnectionId { connection_id: 1234 }
    ));
}

#[test]
fn test_zero_identifier_is_rejected() {
    let mut graph = TransitGraph::with_seed(5);
    let a = graph.add_station();
    let b = graph.add_station();

    assert!(matches!(
        graph.add_connection_with_id(a, b, 1, 0),
        Err(GraphError::InvalidId)
    ));
    assert!(matches!(
        graph.add_station_with_id(0),
        Err(GraphError::InvalidId)
    ));
}

#[test]
fn test_missing_entities_are_not_found() {
    let mut graph = TransitGraph::with_seed(6);
    let a = graph.add_station();

    assert!(matches!(
        graph.station(999),
        Err(GraphError::StationNotFound { station_id: 999 })
    ));
    assert!(matches!(
        graph.connection(999),
        Err(GraphError::ConnectionNotFound { connection_id: 999 })
    ));
    assert!(matches!(
        graph.add_connection(a, 999, 1),
        Err(GraphError::StationNotFound { station_id: 999 })
    ));
    assert!(matches!(
        graph.remove_connection(999),
        Err(GraphError::ConnectionNotFound { connection_id: 999 })
    ));
    assert!(matches!(
        graph.remove_station(999),
        Err(GraphError::StationNotFound { station_id: 999 })
    ));
}

#[test]
fn test_remove_connection_clears_both_adjacencies() {
    let mut graph = TransitGraph::with_seed(7);
    let a = graph.add_station();
    let b = graph.add_station();
    let connection_id = graph.add_connection(a, b, 1).unwrap();

    graph.remove_connection(connection_id).unwrap();

    assert_eq!(graph.connection_count(), 0);
    assert!(graph.neighbors(a).unwrap().is_empty());
    assert!(graph.neighbors(b).unwrap().is_empty());
}

#[test]
fn test_remove_connection_keeps_parallel_sibling() {
    let mut graph = TransitGraph::with_seed(8);
    let a = graph.add_station();
    let b = graph.add_station();
    let slow = graph.add_connection(a, b, 5).unwrap();
    let fast = graph.add_connection(a, b, 1).unwrap();

    graph.remove_connection(slow).unwrap();

    assert_eq!(graph.neighbors(a).unwrap(), vec![b]);
    assert_eq!(graph.connections_between(a, b).unwrap(), vec![fast]);
}

#[test]
fn test_remove_station_removes_incident_connections() {
    let mut graph = TransitGraph::with_seed(9);
    let a = graph.add_station();
    let b = graph.add_station();
    let c = graph.add_station();
    let ab = graph.add_connection(a, b, 1).unwrap();
    let bc = graph.add_connection(b, c, 1).unwrap();
    let ac = graph.add_connection(a, c, 1).unwrap();

    graph.remove_station(b).unwrap();

    assert_eq!(graph.station_count(), 2);
    assert_eq!(graph.connection_count(), 1);
    assert!(graph.connection(ab).is_err());
    assert!(graph.connection(bc).is_err());
    assert!(graph.connection(ac).is_ok());
    assert_eq!(graph.neighbors(a).unwrap(), vec![c]);
}

#[test]
fn test_weight_mutation_is_visible_from_both_endpoints() {
    let mut graph = TransitGraph::with_seed(10);
    let a = graph.add_station();
    let b = graph.add_station();
    let connection_id = graph.add_connection(a, b, 1).unwrap();

    graph.set_connection_weight(connection_id, 9).unwrap();

    // Look the connection up through either endpoint's adjacency; the single
    // owned table means both see the new weight.
    let via_a = graph.connections_between(a, b).unwrap()[0];
    let via_b = graph.connections_between(b, a).unwrap()[0];
    assert_eq!(graph.connection(via_a).unwrap().weight, 9);
    assert_eq!(graph.connection(via_b).unwrap().weight, 9);
}

#[test]
fn test_close_and_reopen_toggle_in_place() {
    let mut graph = TransitGraph::with_seed(11);
    let a = graph.add_station();
    let b = graph.add_station();
    let connection_id = graph.add_connection(a, b, 1).unwrap();

    graph.close_connection(connection_id).unwrap();
    assert!(graph.connection(connection_id).unwrap().closed);
    // Closing is a pure mutation; the structure is untouched.
    assert_eq!(graph.connection_count(), 1);
    assert_eq!(graph.neighbors(a).unwrap(), vec![b]);

    graph.open_connection(connection_id).unwrap();
    assert!(!graph.connection(connection_id).unwrap().closed);
}

#[test]
fn test_labels_on_stations_and_connections() {
    let mut graph = TransitGraph::with_seed(12);
    let a = graph.add_station();
    let b = graph.add_station();
    let connection_id = graph.add_connection(a, b, 1).unwrap();

    assert_eq!(graph.station(a).unwrap().label, None);

    graph.set_station_label(a, "Victoria").unwrap();
    graph.set_connection_label(connection_id, "District").unwrap();

    assert_eq!(graph.station(a).unwrap().label.as_deref(), Some("Victoria"));
    assert_eq!(
        graph.connection(connection_id).unwrap().label.as_deref(),
        Some("District")
    );
}
