use courier_matrix::{distance_index::DistanceIndex, node::START_NODE_ID};
use tracing::debug;

use crate::error::{OptimizerError, OptimizerResult};

/// Tour anchored at `start`, with the length of the closed cycle it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTour {
    pub route: Vec<String>,
    pub total_distance: f64,
}

/// Turns the index tour of a solver back into node identifiers.
pub struct TourNormalizer<'a> {
    index: &'a DistanceIndex,
}

impl<'a> TourNormalizer<'a> {
    pub fn new(index: &'a DistanceIndex) -> Self {
        Self { index }
    }

    /// `node_ids` is the row mapping the solver was fed, so `tour[k]` names
    /// the row `node_ids[tour[k]]`.
    pub fn normalize(&self, tour: &[usize], node_ids: &[String]) -> OptimizerResult<NormalizedTour> {
        let mapped = map_indices(tour, node_ids)?;
        let route = rotate_cycle(&mapped, START_NODE_ID)?;
        let total_distance = cycle_distance(&route, self.index)?;

        debug!(?route, total_distance, "Normalized tour");

        Ok(NormalizedTour {
            route,
            total_distance,
        })
    }
}

/// Maps a permutation of `0..node_ids.len()` to identifiers.
pub fn map_indices(tour: &[usize], node_ids: &[String]) -> OptimizerResult<Vec<String>> {
    if tour.len() != node_ids.len() {
        return Err(OptimizerError::malformed_solver_output(format!(
            "tour visits {} nodes, expected {}",
            tour.len(),
            node_ids.len()
        )));
    }

    let mut seen = vec![false; node_ids.len()];
    let mut mapped = Vec::with_capacity(tour.len());

    for &index in tour {
        match seen.get_mut(index) {
            None => {
                return Err(OptimizerError::malformed_solver_output(format!(
                    "node index {index} is out of range"
                )));
            }
            Some(true) => {
                return Err(OptimizerError::malformed_solver_output(format!(
                    "node index {index} is visited twice"
                )));
            }
            Some(visited) => *visited = true,
        }

        mapped.push(node_ids[index].clone());
    }

    Ok(mapped)
}

/// `tour[pos..] ++ tour[..pos]` where `tour[pos] == start`.
pub fn rotate_cycle(tour: &[String], start: &str) -> OptimizerResult<Vec<String>> {
    let pos = tour
        .iter()
        .position(|id| id == start)
        .ok_or_else(|| OptimizerError::StartNodeNotFound(start.to_owned()))?;

    let mut rotated = Vec::with_capacity(tour.len());
    rotated.extend_from_slice(&tour[pos..]);
    rotated.extend_from_slice(&tour[..pos]);

    Ok(rotated)
}

/// Sum of consecutive legs plus the edge from the last node back to the first.
pub fn cycle_distance(route: &[String], index: &DistanceIndex) -> OptimizerResult<f64> {
    if route.len() < 2 {
        return Ok(0.0);
    }

    let mut total = 0.0;
    for (from, to) in route.iter().zip(route.iter().cycle().skip(1)) {
        total += index.require(from, to)?;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use courier_matrix::{
        MatrixError,
        distance_index::DistanceIndexParams,
        node::{Node, NodeSet},
    };

    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn example_index() -> DistanceIndex {
        let nodes = NodeSet::with_depot(
            Some(geo::Point::new(0.0, 0.0)),
            vec![
                Node::from_lon_lat("A", 0.0, 1.0),
                Node::from_lon_lat("B", 1.0, 1.0),
            ],
        )
        .unwrap();

        DistanceIndex::build(nodes, &[], &DistanceIndexParams { depot_distance: 5.0 }).unwrap()
    }

    #[test]
    fn test_normalize_rotates_to_start() {
        let index = example_index();
        let normalizer = TourNormalizer::new(&index);

        // solver rows are [start, A, B]; the raw tour reads [A, start, B]
        let normalized = normalizer
            .normalize(&[1, 0, 2], &ids(&["start", "A", "B"]))
            .unwrap();

        assert_eq!(normalized.route, ids(&["start", "B", "A"]));

        let expected = index.distance("start", "B").unwrap()
            + index.distance("B", "A").unwrap()
            + index.distance("A", "start").unwrap();
        assert_eq!(normalized.total_distance, expected);
    }

    #[test]
    fn test_rotation_is_a_bijection() {
        let tour = ids(&["c", "d", "start", "a", "b"]);

        let rotated = rotate_cycle(&tour, "start").unwrap();
        assert_eq!(rotated, ids(&["start", "a", "b", "c", "d"]));

        let mut sorted_in = tour.clone();
        let mut sorted_out = rotated.clone();
        sorted_in.sort();
        sorted_out.sort();
        assert_eq!(sorted_in, sorted_out);

        // rotating back to the old head restores the input
        let restored = rotate_cycle(&rotated, "c").unwrap();
        assert_eq!(restored, tour);
    }

    #[test]
    fn test_rotation_keeps_the_cycle_cost() {
        let index = example_index();
        let tour = ids(&["A", "start", "B"]);

        let rotated = rotate_cycle(&tour, "start").unwrap();

        let before = cycle_distance(&tour, &index).unwrap();
        let after = cycle_distance(&rotated, &index).unwrap();
        assert!((before - after).abs() < 1e-9);
    }

    #[test]
    fn test_missing_start() {
        let result = rotate_cycle(&ids(&["A", "B"]), "start");
        assert!(matches!(result, Err(OptimizerError::StartNodeNotFound(ref s)) if s == "start"));
    }

    #[test]
    fn test_map_indices_rejects_bad_tours() {
        let node_ids = ids(&["start", "A", "B"]);

        assert!(matches!(
            map_indices(&[0, 1], &node_ids),
            Err(OptimizerError::MalformedSolverOutput(_))
        ));
        assert!(matches!(
            map_indices(&[0, 1, 3], &node_ids),
            Err(OptimizerError::MalformedSolverOutput(_))
        ));
        assert!(matches!(
            map_indices(&[0, 1, 1], &node_ids),
            Err(OptimizerError::MalformedSolverOutput(_))
        ));
        assert_eq!(
            map_indices(&[2, 0, 1], &node_ids).unwrap(),
            ids(&["B", "start", "A"])
        );
    }

    #[test]
    fn test_cycle_distance_edge_cases() {
        let index = example_index();

        assert_eq!(cycle_distance(&ids(&["start"]), &index).unwrap(), 0.0);
        assert_eq!(cycle_distance(&[], &index).unwrap(), 0.0);

        let result = cycle_distance(&ids(&["start", "Z"]), &index);
        assert!(matches!(
            result,
            Err(OptimizerError::Matrix(MatrixError::UnknownNode(ref id))) if id == "Z"
        ));
    }

    #[test]
    fn test_missing_pair_is_reported() {
        let nodes = NodeSet::with_depot(
            Some(geo::Point::new(0.0, 0.0)),
            vec![
                Node::from_lon_lat("A", 0.0, 1.0),
                Node::without_coordinate("B"),
            ],
        )
        .unwrap();
        let index =
            DistanceIndex::build(nodes, &[], &DistanceIndexParams { depot_distance: 5.0 })
                .unwrap();

        let result = cycle_distance(&ids(&["start", "A", "B"]), &index);

        assert!(matches!(
            result,
            Err(OptimizerError::Matrix(MatrixError::MissingDistance { .. }))
        ));
    }
}
