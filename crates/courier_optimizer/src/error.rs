use courier_matrix::MatrixError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("start node '{0}' is not part of the solved tour")]
    StartNodeNotFound(String),

    #[error("malformed solver output: {0}")]
    MalformedSolverOutput(String),

    #[error("solver '{0}' did not find a tour")]
    Infeasible(String),

    #[error("{context}.\nSTDOUT:\n{stdout}\nSTDERR:\n{stderr}")]
    ProcessFailed {
        context: String,
        stdout: String,
        stderr: String,
    },
}

pub type OptimizerResult<T> = std::result::Result<T, OptimizerError>;

impl OptimizerError {
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    pub fn malformed_solver_output(message: impl Into<String>) -> Self {
        Self::MalformedSolverOutput(message.into())
    }
}
