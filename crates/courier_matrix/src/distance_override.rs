use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A provider-supplied distance between two customer nodes, in meters.
///
/// Overrides are undirected: a record `A -> B` also covers `B -> A`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct DistanceOverride {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

impl DistanceOverride {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.distance.is_finite() && self.distance >= 0.0
    }
}
