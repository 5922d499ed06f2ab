use courier_matrix::{
    MatrixResult,
    distance_index::DistanceIndexParams,
    distance_override::DistanceOverride,
    node::{Node, NodeSet},
};
use fxhash::FxHashMap;

use crate::{
    error::{OptimizerError, OptimizerResult},
    problem::{
        depot::Depot,
        stop::{Order, Stop, group_orders},
        vehicle::Vehicle,
    },
};

/// Everything needed to order the stops of one dispatch.
#[derive(Debug, Clone)]
pub struct DispatchProblem {
    id: String,
    depot: Depot,
    orders: Vec<Order>,
    stops: Vec<Stop>,
    stop_by_address: FxHashMap<String, usize>,
    vehicles: Vec<Vehicle>,
    overrides: Vec<DistanceOverride>,
    depot_distance: f64,
}

impl DispatchProblem {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn depot(&self) -> &Depot {
        &self.depot
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, address_no: &str) -> Option<&Stop> {
        self.stop_by_address
            .get(address_no)
            .map(|&position| &self.stops[position])
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// The vehicle the single route is assigned to.
    pub fn primary_vehicle(&self) -> &Vehicle {
        &self.vehicles[0]
    }

    pub fn overrides(&self) -> &[DistanceOverride] {
        &self.overrides
    }

    pub fn depot_distance(&self) -> f64 {
        self.depot_distance
    }

    pub fn total_weight(&self) -> f64 {
        self.orders.iter().map(|order| order.weight).sum()
    }

    pub fn total_cubic(&self) -> f64 {
        self.orders.iter().map(|order| order.cubic).sum()
    }

    /// `start` and `end` at the depot, then one node per stop.
    pub fn node_set(&self) -> MatrixResult<NodeSet> {
        NodeSet::with_depot(
            Some(self.depot.point()),
            self.stops
                .iter()
                .map(|stop| Node::new(stop.address_no(), Some(stop.point()))),
        )
    }

    pub fn distance_index_params(&self) -> DistanceIndexParams {
        DistanceIndexParams {
            depot_distance: self.depot_distance,
        }
    }
}

#[derive(Default)]
pub struct DispatchProblemBuilder {
    id: Option<String>,
    depot: Option<Depot>,
    orders: Option<Vec<Order>>,
    vehicles: Option<Vec<Vehicle>>,
    overrides: Option<Vec<DistanceOverride>>,
    depot_distance: Option<f64>,
}

impl DispatchProblemBuilder {
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut DispatchProblemBuilder {
        self.id = Some(id.into());
        self
    }

    pub fn set_depot(&mut self, depot: Depot) -> &mut DispatchProblemBuilder {
        self.depot = Some(depot);
        self
    }

    pub fn set_orders(&mut self, orders: Vec<Order>) -> &mut DispatchProblemBuilder {
        self.orders = Some(orders);
        self
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> &mut DispatchProblemBuilder {
        if let Some(vehicles) = &mut self.vehicles {
            vehicles.push(vehicle);
        } else {
            self.vehicles = Some(vec![vehicle]);
        }

        self
    }

    pub fn set_vehicles(&mut self, vehicles: Vec<Vehicle>) -> &mut DispatchProblemBuilder {
        self.vehicles = Some(vehicles);
        self
    }

    pub fn set_overrides(
        &mut self,
        overrides: Vec<DistanceOverride>,
    ) -> &mut DispatchProblemBuilder {
        self.overrides = Some(overrides);
        self
    }

    pub fn set_depot_distance(&mut self, depot_distance: f64) -> &mut DispatchProblemBuilder {
        self.depot_distance = Some(depot_distance);
        self
    }

    pub fn build(self) -> OptimizerResult<DispatchProblem> {
        let depot = self
            .depot
            .ok_or_else(|| OptimizerError::malformed_input("the dispatch has no depot"))?;

        let vehicles = self.vehicles.unwrap_or_default();
        if vehicles.is_empty() {
            return Err(OptimizerError::malformed_input("the dispatch has no vehicle"));
        }

        let depot_distance = self.depot_distance.ok_or_else(|| {
            OptimizerError::malformed_input("no distance between the depot and the customers")
        })?;

        let orders = self.orders.unwrap_or_default();
        let stops = group_orders(&orders);
        let stop_by_address = stops
            .iter()
            .enumerate()
            .map(|(position, stop)| (stop.address_no().to_owned(), position))
            .collect();

        Ok(DispatchProblem {
            id: self.id.unwrap_or_default(),
            depot,
            orders,
            stops,
            stop_by_address,
            vehicles,
            overrides: self.overrides.unwrap_or_default(),
            depot_distance,
        })
    }
}
