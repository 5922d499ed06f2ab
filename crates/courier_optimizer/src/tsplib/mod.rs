pub mod problem;
pub mod solution;

mod spec_writer;
