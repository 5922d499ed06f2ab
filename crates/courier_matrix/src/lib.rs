//! Distance index over the depot and customer stops of a single-vehicle route.
//!
//! Distances start from great-circle estimates, are replaced by provider
//! overrides where available, and finally follow the depot policy: a uniform
//! distance between `start` and every customer, and a free return to `end`.

pub mod distance_index;
pub mod distance_override;
pub mod error;
pub mod haversine;
pub mod node;

mod newtype_index;

pub use error::{MatrixError, MatrixResult};
