use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use transitgraph::{Algorithm, StationId, TransitGraph};

/// Build an n x n grid of stations with weight-1 connections.
fn build_grid(n: usize) -> (TransitGraph, Vec<StationId>) {
    let mut graph = TransitGraph::with_seed(99);
    let stations: Vec<StationId> = (0..n * n).map(|_| graph.add_station()).collect();

    for row in 0..n {
        for col in 0..n {
            let here = stations[row * n + col];
            if col + 1 < n {
                graph.add_connection(here, stations[row * n + col + 1], 1).unwrap();
            }
            if row + 1 < n {
                graph.add_connection(here, stations[(row + 1) * n + col], 1).unwrap();
            }
        }
    }

    (graph, stations)
}

fn bench_station_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("station_lookup");

    for size in [10, 30, 100].iter() {
        let (graph, stations) = build_grid(*size);
        let middle = stations[stations.len() / 2];

        group.bench_with_input(BenchmarkId::new("lookup", size * size), size, |b, _| {
            b.iter(|| {
                black_box(graph.station(middle).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability");

    for size in [10, 30].iter() {
        let (graph, stations) = build_grid(*size);
        let corner = stations[0];
        let opposite = stations[stations.len() - 1];

        group.bench_with_input(BenchmarkId::new("bfs", size * size), size, |b, _| {
            b.iter(|| {
                black_box(graph.is_path_available(corner, opposite).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");

    for size in [5, 10, 20].iter() {
        let (graph, stations) = build_grid(*size);
        let corner = stations[0];
        let opposite = stations[stations.len() - 1];

        group.bench_with_input(BenchmarkId::new("dijkstra", size * size), size, |b, _| {
            b.iter(|| {
                black_box(
                    graph
                        .find_shortest_path(corner, opposite, Algorithm::Dijkstra)
                        .unwrap(),
                );
            });
        });

        group.bench_with_input(BenchmarkId::new("bellman_ford", size * size), size, |b, _| {
            b.iter(|| {
                black_box(
                    graph
                        .find_shortest_path(corner, opposite, Algorithm::BellmanFord)
                        .unwrap(),
                );
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_station_lookup,
    bench_reachability,
    bench_shortest_path
);
criterion_main!(benches);
