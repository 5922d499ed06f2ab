use courier_matrix::distance_index::DistanceIndex;
use tracing::{debug, info, instrument};

use crate::{
    error::{OptimizerError, OptimizerResult},
    problem::dispatch_problem::DispatchProblem,
    report::{dispatch_report::JsonDispatchReport, route_report::RouteReport},
    solver::{
        solver_matrix::SolverMatrix,
        tour_solver::{SolverOutput, TourSolver},
    },
    tour::normalize::TourNormalizer,
    tsplib::problem::TsplibProblem,
};

/// Result of one dispatch: the distances it was solved on and the route.
#[derive(Debug)]
pub struct DispatchOutcome {
    pub index: DistanceIndex,
    pub route: RouteReport,
}

impl DispatchOutcome {
    pub fn to_report(&self, problem: &DispatchProblem) -> OptimizerResult<JsonDispatchReport> {
        JsonDispatchReport::from_routes(problem, &self.index, std::slice::from_ref(&self.route))
    }
}

pub fn build_distance_index(problem: &DispatchProblem) -> OptimizerResult<DistanceIndex> {
    let index = DistanceIndex::build(
        problem.node_set()?,
        problem.overrides(),
        &problem.distance_index_params(),
    )?;

    Ok(index)
}

/// TSPLIB problem the external solver would be given for `problem`.
pub fn build_tsplib_problem(
    problem: &DispatchProblem,
    name: &str,
) -> OptimizerResult<TsplibProblem> {
    let index = build_distance_index(problem)?;
    let matrix = SolverMatrix::from_index(&index)?;

    let mut tsplib = TsplibProblem::from_matrix(name, &matrix);
    tsplib
        .comment_lines
        .push(format!("dispatch {}", problem.id()));
    tsplib
        .comment_lines
        .push(format!("nodes {}", matrix.node_ids().join(" ")));

    Ok(tsplib)
}

/// Orders the stops of `problem` into a single route for its first vehicle.
#[instrument(skip_all, level = "debug")]
pub fn solve_dispatch(
    problem: &DispatchProblem,
    solver: &dyn TourSolver,
) -> OptimizerResult<DispatchOutcome> {
    let index = build_distance_index(problem)?;
    let matrix = SolverMatrix::from_index(&index)?;

    let output = if matrix.dimension() < 3 {
        debug!(dimension = matrix.dimension(), "Trivial tour, skipping the solver");
        SolverOutput {
            found_tour: true,
            optimal_value: matrix.tour_cost(&(0..matrix.dimension()).collect::<Vec<_>>()) as f64,
            tour: (0..matrix.dimension()).collect(),
        }
    } else {
        solver.solve(&matrix)?
    };

    info!(
        solver = solver.name(),
        feasible = output.found_tour,
        best_value = output.optimal_value,
        "Solved dispatch {}",
        problem.id()
    );
    debug!(tour = ?output.tour, "Raw solver tour");

    if !output.found_tour {
        return Err(OptimizerError::Infeasible(solver.name().to_owned()));
    }

    let tour = TourNormalizer::new(&index).normalize(&output.tour, matrix.node_ids())?;

    info!(
        route = ?tour.route,
        total_distance = tour.total_distance,
        "Adjusted route"
    );

    let route = RouteReport::new(tour, problem.primary_vehicle().external_id());

    Ok(DispatchOutcome { index, route })
}
