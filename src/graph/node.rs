use std::fmt;

use crate::collections::FxIndexMap;
use crate::geometry::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Identifier of a graph node
/// Either an integer (auto-assigned or caller supplied) or a caller supplied name
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum NodeId {
    Index(u64),
    Name(String),
}

impl From<u64> for NodeId {
    fn from(index: u64) -> Self {
        NodeId::Index(index)
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        NodeId::Name(name.to_string())
    }
}

impl From<String> for NodeId {
    fn from(name: String) -> Self {
        NodeId::Name(name)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Index(index) => write!(f, "{index}"),
            NodeId::Name(name) => f.write_str(name),
        }
    }
}


/// Waypoint on a [`PathGraph`](super::PathGraph)
/// Neighbour distances are computed once, when the edge is connected
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    point: Point,
    neighbours: FxIndexMap<NodeId, f64>, // neighbour id -> edge length
}

impl Node {

    pub(crate) fn new(id: NodeId, point: Point) -> Self {
        Self {
            id,
            point,
            neighbours: FxIndexMap::default(),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn point(&self) -> Point {
        self.point
    }

    /// Neighbour ids with their cached edge lengths
    pub fn neighbours(&self) -> impl Iterator<Item = (&NodeId, f64)> {
        self.neighbours.iter().map(|(id, distance)| (id, *distance))
    }

    /// Cached edge length to a neighbour, None if not adjacent
    pub fn distance_to(&self, id: &NodeId) -> Option<f64> {
        self.neighbours.get(id).copied()
    }

    pub fn is_adjacent(&self, id: &NodeId) -> bool {
        self.neighbours.contains_key(id)
    }

    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    /// Record an edge, returns true if the neighbour is new
    pub(crate) fn add_neighbour(&mut self, id: NodeId, distance: f64) -> bool {
        self.neighbours.insert(id, distance).is_none()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -", self.id, self.point)?;
        for (id, distance) in &self.neighbours {
            write!(f, "\n  {id}: {distance} m")?;
        }
        Ok(())
    }
}
