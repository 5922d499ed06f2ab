use std::iter;

use courier_matrix::distance_index::DistanceIndex;

use crate::error::{OptimizerError, OptimizerResult};

/// Integer weight matrix handed to a [`TourSolver`](super::tour_solver::TourSolver).
///
/// Holds `start` followed by every customer; the `end` depot is left out and
/// appended to the route once the tour is normalized. Weights are meter
/// distances truncated toward zero, as TSPLIB only accepts integer weights.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverMatrix {
    node_ids: Vec<String>,
    weights: Vec<i64>,
}

/// Largest accepted weight, in meters. Keeps every tour sum inside `i64`.
pub const MAX_WEIGHT: i64 = 1 << 40;

#[inline(always)]
fn truncate(distance: f64) -> i64 {
    distance as i64
}

fn checked_weight(distance: f64, from: &str, to: &str) -> OptimizerResult<i64> {
    if !distance.is_finite() || distance < 0.0 || distance > MAX_WEIGHT as f64 {
        return Err(OptimizerError::malformed_input(format!(
            "invalid distance {distance} between '{from}' and '{to}'"
        )));
    }

    Ok(truncate(distance))
}

impl SolverMatrix {
    pub fn from_index(index: &DistanceIndex) -> OptimizerResult<Self> {
        let nodes = index.nodes();
        let members = iter::once(nodes.start())
            .chain(nodes.customers())
            .collect::<Vec<_>>();

        let mut weights = Vec::with_capacity(members.len() * members.len());
        for &from in &members {
            for &to in &members {
                let distance = index
                    .require_between(from, to)
                    .map_err(|error| OptimizerError::malformed_input(error.to_string()))?;
                weights.push(checked_weight(
                    distance,
                    nodes.node(from).id(),
                    nodes.node(to).id(),
                )?);
            }
        }

        Ok(Self {
            node_ids: members
                .iter()
                .map(|&member| nodes.node(member).id().to_owned())
                .collect(),
            weights,
        })
    }

    pub fn from_distances(node_ids: Vec<String>, distances: &[Vec<f64>]) -> OptimizerResult<Self> {
        let dimension = node_ids.len();

        if distances.len() != dimension || distances.iter().any(|row| row.len() != dimension) {
            return Err(OptimizerError::malformed_input(format!(
                "expected a {dimension}x{dimension} distance matrix"
            )));
        }

        let mut weights = Vec::with_capacity(dimension * dimension);
        for (i, row) in distances.iter().enumerate() {
            for (j, &distance) in row.iter().enumerate() {
                let weight = checked_weight(distance, &node_ids[i], &node_ids[j])?;
                weights.push(if i == j { 0 } else { weight });
            }
        }

        Ok(Self { node_ids, weights })
    }

    pub fn dimension(&self) -> usize {
        self.node_ids.len()
    }

    /// Identifier of every matrix row, indexed like the solver's tour.
    pub fn node_ids(&self) -> &[String] {
        &self.node_ids
    }

    #[inline(always)]
    pub fn weight(&self, from: usize, to: usize) -> i64 {
        self.weights[from * self.dimension() + to]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.weights.chunks(self.dimension().max(1))
    }

    /// Cost of the closed tour, including the edge back to the first node.
    pub fn tour_cost(&self, tour: &[usize]) -> i64 {
        if tour.len() < 2 {
            return 0;
        }

        tour.iter()
            .zip(tour.iter().cycle().skip(1))
            .fold(0i64, |cost, (&from, &to)| cost.saturating_add(self.weight(from, to)))
    }
}
