use courier_matrix::node::{END_NODE_ID, START_NODE_ID};
use serde::Serialize;

use crate::tour::normalize::NormalizedTour;

/// Final route of one vehicle: `start`, the stops in visiting order, `end`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteReport {
    route: Vec<String>,
    total_distance: f64,
    vehicle_id: String,
}

impl RouteReport {
    pub fn new(tour: NormalizedTour, vehicle_id: impl Into<String>) -> Self {
        let mut route = tour.route;
        route.push(END_NODE_ID.to_owned());

        Self {
            route,
            total_distance: tour.total_distance,
            vehicle_id: vehicle_id.into(),
        }
    }

    pub fn route(&self) -> &[String] {
        &self.route
    }

    /// Length of the closed tour, including the leg back to `start`.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    /// The customer stops, without the depot nodes.
    pub fn stops(&self) -> impl Iterator<Item = &str> {
        self.route
            .iter()
            .map(String::as_str)
            .filter(|id| *id != START_NODE_ID && *id != END_NODE_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_end() {
        let report = RouteReport::new(
            NormalizedTour {
                route: vec!["start".into(), "B".into(), "A".into()],
                total_distance: 42.0,
            },
            "V1",
        );

        assert_eq!(report.route(), &["start", "B", "A", "end"]);
        assert_eq!(report.stops().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(report.total_distance(), 42.0);
        assert_eq!(report.vehicle_id(), "V1");
    }
}
