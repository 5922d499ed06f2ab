use std::hint::black_box;

use courier_matrix::{
    distance_index::{DistanceIndex, DistanceIndexParams},
    node::{Node, NodeSet},
};
use courier_optimizer::solver::{
    builtin::{BuiltinSolver, BuiltinSolverParams},
    solver_matrix::SolverMatrix,
    tour_solver::TourSolver,
};
use criterion::{Criterion, criterion_group, criterion_main};

/// Stops on a small grid around the depot, about a kilometer apart.
fn create_node_set(count: usize) -> NodeSet {
    let customers = (0..count).map(|i| {
        let lon = 116.40 + (i % 8) as f64 * 0.01;
        let lat = 39.90 + (i / 8) as f64 * 0.01;
        Node::from_lon_lat(format!("ADDR-{i}"), lon, lat)
    });

    NodeSet::with_depot(Some(geo::Point::new(116.397, 39.909)), customers).unwrap()
}

fn distance_index_benchmark(c: &mut Criterion) {
    let nodes = create_node_set(200);
    let params = DistanceIndexParams {
        depot_distance: 2500.0,
    };

    c.bench_function("distance index (200 stops)", |b| {
        b.iter(|| DistanceIndex::build(black_box(nodes.clone()), &[], &params).unwrap())
    });
}

fn builtin_solver_benchmark(c: &mut Criterion) {
    let params = DistanceIndexParams {
        depot_distance: 2500.0,
    };

    let small = DistanceIndex::build(create_node_set(11), &[], &params).unwrap();
    let small = SolverMatrix::from_index(&small).unwrap();
    let exact = BuiltinSolver::default();

    c.bench_function("held-karp (12 nodes)", |b| {
        b.iter(|| exact.solve(black_box(&small)).unwrap())
    });

    let large = DistanceIndex::build(create_node_set(80), &[], &params).unwrap();
    let large = SolverMatrix::from_index(&large).unwrap();
    let heuristic = BuiltinSolver::new(BuiltinSolverParams { exact_limit: 12 });

    c.bench_function("nearest neighbour + 2-opt (81 nodes)", |b| {
        b.iter(|| heuristic.solve(black_box(&large)).unwrap())
    });
}

criterion_group!(benches, distance_index_benchmark, builtin_solver_benchmark);
criterion_main!(benches);
