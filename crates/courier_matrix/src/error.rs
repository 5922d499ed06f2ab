use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    #[error("duplicate node identifier '{0}'")]
    DuplicateNode(String),

    #[error("node '{id}' has an invalid coordinate (lon = {lon}, lat = {lat})")]
    InvalidCoordinate { id: String, lon: f64, lat: f64 },

    #[error("distance {from} -> {to} is invalid: {distance}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },

    #[error("depot distance must be finite and non-negative, got {0}")]
    InvalidDepotDistance(f64),

    #[error("node set has no '{0}' node")]
    MissingDepotNode(&'static str),

    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("no distance between '{from}' and '{to}'")]
    MissingDistance { from: String, to: String },
}

pub type MatrixResult<T> = std::result::Result<T, MatrixError>;
