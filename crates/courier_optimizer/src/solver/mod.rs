pub mod builtin;
pub mod concorde;
pub mod solver_matrix;
pub mod tour_solver;
