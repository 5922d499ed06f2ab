use std::{fs, path::PathBuf};

use courier_optimizer::{
    json::types::JsonDispatchRequest, problem::dispatch_problem::DispatchProblem,
    solver::solver_matrix::SolverMatrix,
};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data/fixtures")
        .join(name)
}

pub fn load_problem(name: &str) -> DispatchProblem {
    let text = fs::read_to_string(fixture_path(name)).unwrap();

    JsonDispatchRequest::from_json(&text)
        .unwrap()
        .build_problem()
        .unwrap()
}

/// Cheapest closed tour over every row, found by trying all orders after row 0.
pub fn brute_force_cost(matrix: &SolverMatrix) -> i64 {
    fn permute(matrix: &SolverMatrix, tour: &mut Vec<usize>, left: &mut Vec<usize>) -> i64 {
        if left.is_empty() {
            return matrix.tour_cost(tour);
        }

        let mut best = i64::MAX;
        for k in 0..left.len() {
            let row = left.remove(k);
            tour.push(row);
            best = best.min(permute(matrix, tour, left));
            tour.pop();
            left.insert(k, row);
        }
        best
    }

    let mut left = (1..matrix.dimension()).collect::<Vec<_>>();
    permute(matrix, &mut vec![0], &mut left)
}
