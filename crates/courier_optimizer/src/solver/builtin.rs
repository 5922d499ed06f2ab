use tracing::debug;

use crate::{
    error::OptimizerResult,
    solver::{
        solver_matrix::SolverMatrix,
        tour_solver::{SolverOutput, TourSolver},
    },
};

/// Held-Karp keeps `2^(n-1) * (n-1)` states, so the exact path never runs
/// above this dimension whatever `exact_limit` asks for.
pub const MAX_EXACT_DIMENSION: usize = 20;

pub struct BuiltinSolverParams {
    /// Largest dimension solved exactly; bigger instances fall back to
    /// nearest neighbour followed by 2-opt. Capped at [`MAX_EXACT_DIMENSION`].
    pub exact_limit: usize,
}

impl Default for BuiltinSolverParams {
    fn default() -> Self {
        Self { exact_limit: 12 }
    }
}

/// In-process solver for instances small enough not to need Concorde.
///
/// Assumes symmetric weights, which is what a TSPLIB `TYPE: TSP` promises.
#[derive(Default)]
pub struct BuiltinSolver {
    params: BuiltinSolverParams,
}

impl BuiltinSolver {
    pub fn new(params: BuiltinSolverParams) -> Self {
        Self { params }
    }

    pub fn solves_exactly(&self, dimension: usize) -> bool {
        dimension <= self.params.exact_limit.min(MAX_EXACT_DIMENSION)
    }
}

impl TourSolver for BuiltinSolver {
    fn name(&self) -> &str {
        "builtin"
    }

    fn solve(&self, matrix: &SolverMatrix) -> OptimizerResult<SolverOutput> {
        let dimension = matrix.dimension();

        let tour = if self.solves_exactly(dimension) {
            debug!(dimension, "Solving exactly with Held-Karp");
            held_karp(matrix)
        } else {
            debug!(dimension, "Solving with nearest neighbour and 2-opt");
            two_opt(matrix, nearest_neighbor(matrix))
        };

        Ok(SolverOutput {
            found_tour: true,
            optimal_value: matrix.tour_cost(&tour) as f64,
            tour,
        })
    }
}

/// Exact dynamic program over subsets, rooted at row 0.
///
/// `cost[mask * m + last]` is the cheapest path leaving row 0, visiting the
/// rows in `mask` (bit `k` is row `k + 1`) and ending at row `last + 1`.
fn held_karp(matrix: &SolverMatrix) -> Vec<usize> {
    let n = matrix.dimension();
    if n <= 3 {
        return (0..n).collect();
    }

    let m = n - 1;
    let full = 1usize << m;
    let mut cost = vec![i64::MAX; full * m];
    let mut parent = vec![usize::MAX; full * m];

    for j in 0..m {
        cost[(1 << j) * m + j] = matrix.weight(0, j + 1);
    }

    for mask in 1..full {
        for last in 0..m {
            if mask & (1 << last) == 0 {
                continue;
            }

            let current = cost[mask * m + last];
            if current == i64::MAX {
                continue;
            }

            for next in 0..m {
                if mask & (1 << next) != 0 {
                    continue;
                }

                let slot = (mask | (1 << next)) * m + next;
                let candidate = current + matrix.weight(last + 1, next + 1);
                if candidate < cost[slot] {
                    cost[slot] = candidate;
                    parent[slot] = last;
                }
            }
        }
    }

    let all = full - 1;
    let mut last = 0;
    let mut best = i64::MAX;
    for j in 0..m {
        let closed = cost[all * m + j] + matrix.weight(j + 1, 0);
        if closed < best {
            best = closed;
            last = j;
        }
    }

    let mut tour = Vec::with_capacity(n);
    let mut mask = all;
    loop {
        tour.push(last + 1);
        let previous = parent[mask * m + last];
        mask &= !(1 << last);
        if previous == usize::MAX {
            break;
        }
        last = previous;
    }
    tour.push(0);
    tour.reverse();

    tour
}

fn nearest_neighbor(matrix: &SolverMatrix) -> Vec<usize> {
    let n = matrix.dimension();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = 0;
    visited[current] = true;
    tour.push(current);

    while tour.len() < n {
        let next = (0..n)
            .filter(|&candidate| !visited[candidate])
            .min_by_key(|&candidate| matrix.weight(current, candidate));

        let Some(next) = next else {
            break;
        };

        visited[next] = true;
        tour.push(next);
        current = next;
    }

    tour
}

/// Reverses segments while it shortens the closed tour. Row 0 keeps its slot.
fn two_opt(matrix: &SolverMatrix, mut tour: Vec<usize>) -> Vec<usize> {
    let n = tour.len();
    if n < 4 {
        return tour;
    }

    loop {
        let mut improved = false;

        for i in 0..n - 1 {
            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    continue;
                }

                let (a, b) = (tour[i], tour[i + 1]);
                let (c, d) = (tour[j], tour[(j + 1) % n]);
                let delta = matrix.weight(a, c) + matrix.weight(b, d)
                    - matrix.weight(a, b)
                    - matrix.weight(c, d);

                if delta < 0 {
                    tour[i + 1..=j].reverse();
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    tour
}
