use fxhash::FxHashMap;

use crate::{
    define_index_newtype,
    error::{MatrixError, MatrixResult},
};

/// Identifier of the depot node a route leaves from.
pub const START_NODE_ID: &str = "start";

/// Identifier of the depot node a route returns to.
pub const END_NODE_ID: &str = "end";

define_index_newtype!(NodeIdx, Node);

/// A named stop, optionally positioned on the globe.
///
/// Nodes without a coordinate can only be connected through override
/// distances or the depot policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    point: Option<geo::Point>,
}

impl Node {
    pub fn new(id: impl Into<String>, point: Option<geo::Point>) -> Self {
        Self {
            id: id.into(),
            point,
        }
    }

    pub fn from_lon_lat(id: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self::new(id, Some(geo::Point::new(lon, lat)))
    }

    pub fn without_coordinate(id: impl Into<String>) -> Self {
        Self::new(id, None)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn point(&self) -> Option<geo::Point> {
        self.point
    }

    pub fn lon(&self) -> Option<f64> {
        self.point.map(|p| p.x())
    }

    pub fn lat(&self) -> Option<f64> {
        self.point.map(|p| p.y())
    }

    pub fn is_depot(&self) -> bool {
        self.id == START_NODE_ID || self.id == END_NODE_ID
    }

    fn validate(&self) -> MatrixResult<()> {
        if let Some(point) = self.point {
            let (lon, lat) = (point.x(), point.y());
            let valid = lon.is_finite()
                && lat.is_finite()
                && (-180.0..=180.0).contains(&lon)
                && (-90.0..=90.0).contains(&lat);

            if !valid {
                return Err(MatrixError::InvalidCoordinate {
                    id: self.id.clone(),
                    lon,
                    lat,
                });
            }
        }

        Ok(())
    }
}

/// Validated set of nodes, always containing both depot nodes.
#[derive(Debug, Clone)]
pub struct NodeSet {
    nodes: Vec<Node>,
    index_by_id: FxHashMap<String, NodeIdx>,
    start: NodeIdx,
    end: NodeIdx,
}

impl NodeSet {
    pub fn new(nodes: Vec<Node>) -> MatrixResult<Self> {
        let mut index_by_id = FxHashMap::default();

        for (index, node) in nodes.iter().enumerate() {
            node.validate()?;

            if index_by_id
                .insert(node.id.clone(), NodeIdx::new(index))
                .is_some()
            {
                return Err(MatrixError::DuplicateNode(node.id.clone()));
            }
        }

        let start = *index_by_id
            .get(START_NODE_ID)
            .ok_or(MatrixError::MissingDepotNode(START_NODE_ID))?;
        let end = *index_by_id
            .get(END_NODE_ID)
            .ok_or(MatrixError::MissingDepotNode(END_NODE_ID))?;

        Ok(Self {
            nodes,
            index_by_id,
            start,
            end,
        })
    }

    /// Builds the node set of a single-depot route: `start` and `end` share
    /// the depot coordinate, followed by the customer stops.
    pub fn with_depot(
        depot: Option<geo::Point>,
        customers: impl IntoIterator<Item = Node>,
    ) -> MatrixResult<Self> {
        let mut nodes = vec![
            Node::new(START_NODE_ID, depot),
            Node::new(END_NODE_ID, depot),
        ];
        nodes.extend(customers);

        Self::new(nodes)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: NodeIdx) -> &Node {
        &self.nodes[index]
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIdx> {
        self.index_by_id.get(id).copied()
    }

    pub fn start(&self) -> NodeIdx {
        self.start
    }

    pub fn end(&self) -> NodeIdx {
        self.end
    }

    pub fn indices(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        (0..self.nodes.len()).map(NodeIdx::new)
    }

    /// Every node that is neither `start` nor `end`, in insertion order.
    pub fn customers(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        self.indices()
            .filter(move |&index| index != self.start && index != self.end)
    }

    pub fn customer_count(&self) -> usize {
        self.nodes.len() - 2
    }
}
