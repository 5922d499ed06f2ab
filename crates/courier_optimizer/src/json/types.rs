use courier_matrix::distance_override::DistanceOverride;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    error::{OptimizerError, OptimizerResult},
    problem::{
        depot::Depot,
        dispatch_problem::{DispatchProblem, DispatchProblemBuilder},
        stop::Order,
        vehicle::Vehicle,
    },
};

#[derive(Deserialize, JsonSchema)]
#[serde(rename = "DispatchRequest", rename_all = "camelCase")]
pub struct JsonDispatchRequest {
    pub dispatch_id: String,
    pub orders: Vec<JsonOrder>,
    pub depots: Vec<JsonDepot>,
    pub vehicles: Vec<JsonVehicle>,

    /// Provider distances between customer addresses, in meters.
    #[serde(default)]
    pub matrix: Vec<JsonMatrixEntry>,

    /// Distance between the depot and every customer. Falls back to the
    /// distance of the first `matrix` entry when absent.
    pub depot_distance: Option<f64>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Order", rename_all = "camelCase")]
pub struct JsonOrder {
    pub order_no: String,
    pub task_no: String,
    pub address_no: String,

    /// `"lon,lat"`
    pub lon_lat: String,

    #[serde(default)]
    pub weight: f64,

    #[serde(default)]
    pub cubic: f64,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Depot", rename_all = "camelCase")]
pub struct JsonDepot {
    pub address_no: String,

    /// `"lon,lat"`
    pub lon_lat: String,

    pub de_name: Option<String>,
    pub de_code: Option<String>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Vehicle", rename_all = "camelCase")]
pub struct JsonVehicle {
    pub vehicle_id: String,
    pub dispatch_zone_code: String,
    pub max_weight: Option<f64>,
    pub max_volume: Option<f64>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "MatrixEntry", rename_all = "camelCase")]
pub struct JsonMatrixEntry {
    pub from_address_no: String,
    pub to_address_no: String,
    pub distance: f64,
}

impl From<&JsonMatrixEntry> for DistanceOverride {
    fn from(value: &JsonMatrixEntry) -> Self {
        DistanceOverride::new(&value.from_address_no, &value.to_address_no, value.distance)
    }
}

impl From<JsonVehicle> for Vehicle {
    fn from(value: JsonVehicle) -> Self {
        Vehicle::new(value.vehicle_id, value.dispatch_zone_code)
            .with_capacity(value.max_weight, value.max_volume)
    }
}

impl JsonDispatchRequest {
    pub fn from_json(text: &str) -> OptimizerResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| OptimizerError::malformed_input(format!("invalid request: {e}")))
    }

    #[instrument(skip_all, level = "debug")]
    pub fn build_problem(self) -> OptimizerResult<DispatchProblem> {
        info!(
            orders = self.orders.len(),
            vehicles = self.vehicles.len(),
            "Reading dispatch {}",
            self.dispatch_id
        );

        let mut builder = DispatchProblemBuilder::default();
        builder.set_id(&self.dispatch_id);

        if let Some(depot) = self.depots.into_iter().next() {
            let mut built = Depot::new(depot.address_no, parse_lon_lat(&depot.lon_lat)?);
            if let Some(name) = depot.de_name {
                built = built.with_name(name);
            }
            if let Some(code) = depot.de_code {
                built = built.with_code(code);
            }
            builder.set_depot(built);
        }

        let orders = self
            .orders
            .into_iter()
            .map(|order| -> OptimizerResult<Order> {
                Ok(Order {
                    point: parse_lon_lat(&order.lon_lat)?,
                    order_no: order.order_no,
                    task_no: order.task_no,
                    address_no: order.address_no,
                    weight: order.weight,
                    cubic: order.cubic,
                })
            })
            .collect::<OptimizerResult<Vec<_>>>()?;
        builder.set_orders(orders);

        builder.set_vehicles(self.vehicles.into_iter().map(Vehicle::from).collect());
        builder.set_overrides(self.matrix.iter().map(DistanceOverride::from).collect());

        if let Some(depot_distance) = self
            .depot_distance
            .or_else(|| self.matrix.first().map(|entry| entry.distance))
        {
            builder.set_depot_distance(depot_distance);
        }

        let problem = builder.build()?;

        info!(
            depot = problem.depot().address_no(),
            depot_name = problem.depot().name().unwrap_or("-"),
            depot_code = problem.depot().code().unwrap_or("-"),
            total_weight = problem.total_weight(),
            total_cubic = problem.total_cubic(),
            stops = problem.stops().len(),
            "Dispatch loaded"
        );

        Ok(problem)
    }
}

/// Parses a `"lon,lat"` pair.
pub fn parse_lon_lat(value: &str) -> OptimizerResult<geo::Point> {
    let invalid = || OptimizerError::malformed_input(format!("invalid lonLat '{value}'"));

    let (lon, lat) = value.split_once(',').ok_or_else(invalid)?;
    let lon = lon.trim().parse::<f64>().map_err(|_| invalid())?;
    let lat = lat.trim().parse::<f64>().map_err(|_| invalid())?;

    Ok(geo::Point::new(lon, lat))
}
