use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Vehicle {
    external_id: String,
    dispatch_zone_code: String,
    max_weight: Option<f64>,
    max_volume: Option<f64>,
}

impl Vehicle {
    pub fn new(external_id: impl Into<String>, dispatch_zone_code: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
            dispatch_zone_code: dispatch_zone_code.into(),
            max_weight: None,
            max_volume: None,
        }
    }

    pub fn with_capacity(mut self, max_weight: Option<f64>, max_volume: Option<f64>) -> Self {
        self.max_weight = max_weight;
        self.max_volume = max_volume;
        self
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn dispatch_zone_code(&self) -> &str {
        &self.dispatch_zone_code
    }

    /// Informational only, capacities are not enforced on a single route.
    pub fn max_weight(&self) -> Option<f64> {
        self.max_weight
    }

    pub fn max_volume(&self) -> Option<f64> {
        self.max_volume
    }
}
