use crate::geometry::Point;
use super::{Node, NodeId};


/// Ordered sequence of nodes from a search start to its goal
#[derive(Clone, Debug, PartialEq)]
pub struct Route<'a> {
    nodes: Vec<&'a Node>,
    cost: f64,
}

impl<'a> Route<'a> {

    pub(crate) fn new(nodes: Vec<&'a Node>, cost: f64) -> Self {
        Self { nodes, cost }
    }

    pub fn nodes(&self) -> &[&'a Node] {
        &self.nodes
    }

    /// Sum of the edge lengths along the route
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of nodes, including both endpoints
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&'a Node> {
        self.nodes.first().copied()
    }

    pub fn goal(&self) -> Option<&'a Node> {
        self.nodes.last().copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'a NodeId> + '_ {
        self.nodes.iter().map(|node| node.id())
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|node| node.point())
    }

    /// Consecutive point pairs, one per edge walked
    /// This is what a renderer needs to highlight the route
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0].point(), pair[1].point()))
    }

    /// Owned copy of the node ids, detached from the graph borrow
    pub fn to_ids(&self) -> Vec<NodeId> {
        self.ids().cloned().collect()
    }
}
