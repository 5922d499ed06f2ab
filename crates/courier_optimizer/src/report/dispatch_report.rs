use courier_matrix::{distance_index::DistanceIndex, node::START_NODE_ID};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{OptimizerError, OptimizerResult},
    problem::dispatch_problem::DispatchProblem,
    report::route_report::RouteReport,
};

const NOT_SCHEDULED: &str = "-";

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "DispatchReport")]
pub struct JsonDispatchReport {
    pub code: i32,
    pub result: JsonDispatchResult,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "DispatchResult", rename_all = "camelCase")]
pub struct JsonDispatchResult {
    pub dispatch_id: String,
    pub dispatch: Vec<JsonDispatchEntry>,
}

/// One delivered stop of a waybill.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename = "DispatchEntry", rename_all = "camelCase")]
pub struct JsonDispatchEntry {
    pub dispatch_zone_id: String,
    pub waybill_no: String,
    pub vehicle_id: String,
    pub seq: usize,
    pub lon_lat: String,
    pub address_no: String,
    pub eta: String,
    pub etd: String,

    /// Leg distance from the previous node of the route, in meters.
    pub distance: f64,
    pub order_no: String,
    pub task_no: String,
}

impl JsonDispatchReport {
    /// Flattens the routes into waybills `BIL0001`, `BIL0002`, ... with one
    /// entry per stop; the depot nodes are left out.
    pub fn from_routes(
        problem: &DispatchProblem,
        index: &DistanceIndex,
        routes: &[RouteReport],
    ) -> OptimizerResult<Self> {
        let mut dispatch = Vec::new();

        for (route_number, route) in routes.iter().enumerate() {
            let waybill_no = format!("BIL000{}", route_number + 1);
            let dispatch_zone_id = problem
                .vehicles()
                .iter()
                .find(|vehicle| vehicle.external_id() == route.vehicle_id())
                .map(|vehicle| vehicle.dispatch_zone_code().to_owned())
                .ok_or_else(|| {
                    OptimizerError::malformed_input(format!(
                        "route assigned to unknown vehicle '{}'",
                        route.vehicle_id()
                    ))
                })?;

            let mut previous = START_NODE_ID;
            for (position, address_no) in route.stops().enumerate() {
                let stop = problem.stop(address_no).ok_or_else(|| {
                    OptimizerError::malformed_input(format!("unknown stop '{address_no}'"))
                })?;

                dispatch.push(JsonDispatchEntry {
                    dispatch_zone_id: dispatch_zone_id.clone(),
                    waybill_no: waybill_no.clone(),
                    vehicle_id: route.vehicle_id().to_owned(),
                    seq: position + 1,
                    lon_lat: stop.lon_lat(),
                    address_no: address_no.to_owned(),
                    eta: NOT_SCHEDULED.to_owned(),
                    etd: NOT_SCHEDULED.to_owned(),
                    distance: index.require(previous, address_no)?,
                    order_no: stop.joined_order_nos(),
                    task_no: stop.joined_task_nos(),
                });

                previous = address_no;
            }
        }

        Ok(Self {
            code: 0,
            result: JsonDispatchResult {
                dispatch_id: problem.id().to_owned(),
                dispatch,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        problem::{
            depot::Depot,
            dispatch_problem::DispatchProblemBuilder,
            stop::Order,
            vehicle::Vehicle,
        },
        tour::normalize::NormalizedTour,
    };

    fn problem() -> DispatchProblem {
        let order = |order_no: &str, address_no: &str, lon: f64| Order {
            order_no: order_no.to_owned(),
            task_no: format!("T{order_no}"),
            address_no: address_no.to_owned(),
            point: geo::Point::new(lon, 0.0),
            weight: 1.0,
            cubic: 1.0,
        };

        let mut builder = DispatchProblemBuilder::default();
        builder
            .set_id("D7")
            .set_depot(Depot::new("DEPOT", geo::Point::new(0.0, 0.0)))
            .add_vehicle(Vehicle::new("V1", "ZONE-9"))
            .set_orders(vec![
                order("1", "A", 0.01),
                order("2", "B", 0.02),
                order("3", "A", 0.01),
            ])
            .set_depot_distance(300.0);
        builder.build().unwrap()
    }

    #[test]
    fn test_report_entries() {
        let problem = problem();
        let index = DistanceIndex::build(
            problem.node_set().unwrap(),
            problem.overrides(),
            &problem.distance_index_params(),
        )
        .unwrap();

        let route = RouteReport::new(
            NormalizedTour {
                route: vec!["start".into(), "B".into(), "A".into()],
                total_distance: 0.0,
            },
            "V1",
        );

        let report = JsonDispatchReport::from_routes(&problem, &index, &[route]).unwrap();

        assert_eq!(report.code, 0);
        assert_eq!(report.result.dispatch_id, "D7");

        let entries = &report.result.dispatch;
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].address_no, "B");
        assert_eq!(entries[0].seq, 1);
        assert_eq!(entries[0].waybill_no, "BIL0001");
        assert_eq!(entries[0].dispatch_zone_id, "ZONE-9");
        assert_eq!(entries[0].lon_lat, "0.02,0");
        assert_eq!(entries[0].distance, 300.0);
        assert_eq!(entries[0].eta, "-");

        assert_eq!(entries[1].address_no, "A");
        assert_eq!(entries[1].seq, 2);
        assert_eq!(entries[1].order_no, "1;3");
        assert_eq!(entries[1].task_no, "T1;T3");
        assert_eq!(entries[1].distance, index.distance("B", "A").unwrap());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let problem = problem();
        let index = DistanceIndex::build(
            problem.node_set().unwrap(),
            &[],
            &problem.distance_index_params(),
        )
        .unwrap();
        let route = RouteReport::new(
            NormalizedTour {
                route: vec!["start".into(), "A".into(), "B".into()],
                total_distance: 0.0,
            },
            "V1",
        );

        let report = JsonDispatchReport::from_routes(&problem, &index, &[route]).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["code"], 0);
        assert_eq!(json["result"]["dispatchId"], "D7");
        assert_eq!(json["result"]["dispatch"][0]["waybillNo"], "BIL0001");
        assert_eq!(json["result"]["dispatch"][0]["dispatchZoneId"], "ZONE-9");
        assert_eq!(json["result"]["dispatch"][1]["orderNo"], "2");
    }

    #[test]
    fn test_unknown_vehicle() {
        let problem = problem();
        let index = DistanceIndex::build(
            problem.node_set().unwrap(),
            &[],
            &problem.distance_index_params(),
        )
        .unwrap();
        let route = RouteReport::new(
            NormalizedTour {
                route: vec!["start".into()],
                total_distance: 0.0,
            },
            "V404",
        );

        assert!(JsonDispatchReport::from_routes(&problem, &index, &[route]).is_err());
    }
}
