pub mod depot;
pub mod dispatch_problem;
pub mod stop;
pub mod vehicle;
