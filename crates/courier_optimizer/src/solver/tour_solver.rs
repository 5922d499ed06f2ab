use crate::{error::OptimizerResult, solver::solver_matrix::SolverMatrix};

/// What a solver reports back: whether it found a tour, the objective value
/// it claims for it, and the visiting order as row indices of the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutput {
    pub found_tour: bool,
    pub optimal_value: f64,
    pub tour: Vec<usize>,
}

/// Orders the rows of a complete integer distance matrix into a closed tour
/// of minimal total weight.
pub trait TourSolver {
    fn name(&self) -> &str;

    fn solve(&self, matrix: &SolverMatrix) -> OptimizerResult<SolverOutput>;
}
