use tracing::{debug, instrument, warn};

use crate::{
    distance_override::DistanceOverride,
    error::{MatrixError, MatrixResult},
    haversine::haversine_distance,
    node::{NodeIdx, NodeSet},
};

/// Legacy marker some providers use for "no route found".
pub const UNREACHABLE_DISTANCE: f64 = 10_000.0;

#[derive(Debug, Clone, Copy)]
pub struct DistanceIndexParams {
    /// Distance charged between `start` and every customer, in both directions.
    pub depot_distance: f64,
}

/// Pairwise distances (meters) between every node of a [`NodeSet`].
///
/// Stored as a flat matrix, `index = from * num_nodes + to`. A `None` slot
/// means neither the coordinates, the overrides nor the depot policy could
/// produce a value for that pair.
#[derive(Debug, Clone)]
pub struct DistanceIndex {
    nodes: NodeSet,
    distances: Vec<Option<f64>>,
}

impl DistanceIndex {
    /// Builds the index in four passes: haversine estimates, overrides between
    /// customers, the `start` depot distance and the free return to `end`.
    #[instrument(skip_all, level = "debug")]
    pub fn build(
        nodes: NodeSet,
        overrides: &[DistanceOverride],
        params: &DistanceIndexParams,
    ) -> MatrixResult<Self> {
        if !params.depot_distance.is_finite() || params.depot_distance < 0.0 {
            return Err(MatrixError::InvalidDepotDistance(params.depot_distance));
        }

        if let Some(invalid) = overrides.iter().find(|o| !o.is_valid()) {
            return Err(MatrixError::InvalidDistance {
                from: invalid.from.clone(),
                to: invalid.to.clone(),
                distance: invalid.distance,
            });
        }

        let num_nodes = nodes.len();
        let mut index = Self {
            nodes,
            distances: vec![None; num_nodes * num_nodes],
        };

        index.fill_haversine();
        index.apply_overrides(overrides);
        index.apply_depot_policy(params.depot_distance);
        index.report_missing_end_distances();

        debug!(
            nodes = num_nodes,
            missing = index.missing_pairs().len(),
            "Built distance index"
        );

        Ok(index)
    }

    #[inline(always)]
    fn slot(&self, from: NodeIdx, to: NodeIdx) -> usize {
        from.get() * self.nodes.len() + to.get()
    }

    fn set(&mut self, from: NodeIdx, to: NodeIdx, distance: f64) {
        let slot = self.slot(from, to);
        self.distances[slot] = Some(distance);
    }

    fn set_both_ways(&mut self, a: NodeIdx, b: NodeIdx, distance: f64) {
        self.set(a, b, distance);
        self.set(b, a, distance);
    }

    fn fill_haversine(&mut self) {
        let points = self
            .nodes
            .nodes()
            .iter()
            .map(|node| node.point())
            .collect::<Vec<_>>();

        for (i, from) in points.iter().enumerate() {
            for (j, to) in points.iter().enumerate() {
                if i == j {
                    continue;
                }

                if let (Some(from), Some(to)) = (from, to) {
                    self.set(NodeIdx::new(i), NodeIdx::new(j), haversine_distance(*from, *to));
                }
            }
        }
    }

    fn apply_overrides(&mut self, overrides: &[DistanceOverride]) {
        for record in overrides {
            let (Some(from), Some(to)) = (
                self.nodes.index_of(&record.from),
                self.nodes.index_of(&record.to),
            ) else {
                debug!(
                    "Skipping override {} -> {}: unknown node",
                    record.from, record.to
                );
                continue;
            };

            if from == to || self.is_depot(from) || self.is_depot(to) {
                continue;
            }

            self.set_both_ways(from, to, record.distance);
        }
    }

    fn apply_depot_policy(&mut self, depot_distance: f64) {
        let start = self.nodes.start();
        let end = self.nodes.end();
        let customers = self.nodes.customers().collect::<Vec<_>>();

        for customer in customers {
            self.set_both_ways(start, customer, depot_distance);
        }

        let all = self.nodes.indices().collect::<Vec<_>>();
        for node in all {
            if node != end {
                self.set_both_ways(node, end, 0.0);
            }
        }
    }

    /// Warns about customers without a usable distance to `end`.
    fn report_missing_end_distances(&self) {
        let end = self.nodes.end();

        for customer in self.nodes.customers() {
            match self.distance_between(customer, end) {
                Some(distance) if distance.is_finite() && distance != UNREACHABLE_DISTANCE => {}
                _ => warn!(
                    "{} and '{}' distance not found",
                    self.nodes.node(customer).id(),
                    self.nodes.node(end).id()
                ),
            }
        }
    }

    fn is_depot(&self, index: NodeIdx) -> bool {
        index == self.nodes.start() || index == self.nodes.end()
    }

    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// Distance between two nodes; a node is always at distance zero from itself.
    #[inline(always)]
    pub fn distance_between(&self, from: NodeIdx, to: NodeIdx) -> Option<f64> {
        if from == to {
            return Some(0.0);
        }

        self.distances[self.slot(from, to)]
    }

    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.nodes.index_of(from)?;
        let to = self.nodes.index_of(to)?;

        self.distance_between(from, to)
    }

    pub fn require_between(&self, from: NodeIdx, to: NodeIdx) -> MatrixResult<f64> {
        self.distance_between(from, to)
            .ok_or_else(|| MatrixError::MissingDistance {
                from: self.nodes.node(from).id().to_owned(),
                to: self.nodes.node(to).id().to_owned(),
            })
    }

    pub fn require(&self, from: &str, to: &str) -> MatrixResult<f64> {
        let from = self
            .nodes
            .index_of(from)
            .ok_or_else(|| MatrixError::UnknownNode(from.to_owned()))?;
        let to = self
            .nodes
            .index_of(to)
            .ok_or_else(|| MatrixError::UnknownNode(to.to_owned()))?;

        self.require_between(from, to)
    }

    /// Ordered pairs of distinct nodes without a distance.
    pub fn missing_pairs(&self) -> Vec<(NodeIdx, NodeIdx)> {
        let mut missing = Vec::new();

        for from in self.nodes.indices() {
            for to in self.nodes.indices() {
                if from != to && self.distance_between(from, to).is_none() {
                    missing.push((from, to));
                }
            }
        }

        missing
    }

    pub fn is_complete(&self) -> bool {
        self.distances
            .iter()
            .enumerate()
            .all(|(slot, d)| d.is_some() || slot % (self.nodes.len() + 1) == 0)
    }
}
