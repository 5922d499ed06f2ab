//! Single-vehicle dispatch routing: decodes a dispatch request, asks a
//! [`TourSolver`](solver::tour_solver::TourSolver) for the stop order and
//! shapes the resulting route into a dispatch report.

pub mod dispatch;
pub mod error;
pub mod json;
pub mod problem;
pub mod report;
pub mod solver;
pub mod tour;
pub mod tsplib;

pub use error::{OptimizerError, OptimizerResult};
