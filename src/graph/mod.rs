//! Waypoint graph with A* route search
//!
//! Nodes are 2D points joined by undirected edges whose weight is the
//! Euclidean distance between the endpoints. The same distance to the goal is
//! the search heuristic, which is admissible and consistent for this metric,
//! so returned routes are shortest paths.
//!
//! Searching borrows the graph immutably and keeps its g-scores and parent
//! links local to the call, so a shared graph can serve concurrent searches.
//! Mutation (creating and connecting nodes) needs exclusive access.
//!
//! Cost: O((V + E) log V) heap work, plus one queue entry per improvement
//! since the open list has no decrease-key.

mod node;
mod route;
mod waypoints;

pub use node::{Node, NodeId};
pub use route::Route;
pub use waypoints::{Waypoint, WaypointMap, parse_neighbours};

use crate::collections::FxIndexMap;
use crate::errors::{GraphError, PathPlannerError};
use crate::geometry::Point;
use crate::graph_algos::a_star::AStar;


/// Result of [`PathGraph::create_node`]
#[derive(Clone, Debug, PartialEq)]
pub struct Insertion {
    pub id: NodeId,
    /// Node previously stored under `id`, if any. Its edges are gone
    pub replaced: Option<Node>,
}

/// Result of [`PathGraph::connect`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connection {
    /// The two nodes were not adjacent before
    Created,
    /// The edge existed, its length was recomputed
    Refreshed,
}


/// Undirected graph of waypoints
#[derive(Clone, Debug, Default)]
pub struct PathGraph {
    nodes: FxIndexMap<NodeId, Node>,
    next_index: u64, // auto-id probe, only moves forward
}

impl PathGraph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at `point`
    ///
    /// Without an id the node gets the smallest free integer at or above an
    /// internal counter. The counter only moves forward.
    ///
    /// Reusing an id replaces the stored node and drops its edges. Neighbours
    /// still point at the id, with distances cached from the old position.
    /// The replaced node is returned so callers can decide what to do.
    pub fn create_node(&mut self, point: Point, id: Option<NodeId>) -> Insertion {
        let id = match id {
            Some(id) => id,
            None => self.next_free_index(),
        };

        let replaced = self.nodes.insert(id.clone(), Node::new(id.clone(), point));
        if replaced.is_some() {
            log::warn!("graph node {id} has been overwritten");
        }

        Insertion { id, replaced }
    }

    /// Like `create_node`, but refuses to overwrite an existing id
    pub fn try_create_node(&mut self, point: Point, id: Option<NodeId>) -> Result<NodeId, GraphError> {
        if let Some(id) = &id {
            if self.nodes.contains_key(id) {
                return Err(GraphError::DuplicateNode(id.clone()));
            }
        }
        Ok(self.create_node(point, id).id)
    }

    fn next_free_index(&mut self) -> NodeId {
        while self.nodes.contains_key(&NodeId::Index(self.next_index)) {
            self.next_index += 1;
        }
        NodeId::Index(self.next_index)
    }

    /// Join two nodes with an edge as long as the distance between them
    /// Connecting an already adjacent pair recomputes the same length
    pub fn connect(&mut self, a: &NodeId, b: &NodeId) -> Result<Connection, GraphError> {
        let point_a = self.point_of(a)?;
        let point_b = self.point_of(b)?;
        let distance = point_a.distance(&point_b);

        let mut created = false;
        if let Some(node) = self.nodes.get_mut(a) {
            created |= node.add_neighbour(b.clone(), distance);
        }
        if let Some(node) = self.nodes.get_mut(b) {
            created |= node.add_neighbour(a.clone(), distance);
        }

        if created {
            log::trace!("connected {a} <-> {b} ({distance} m)");
            Ok(Connection::Created)
        } else {
            log::debug!("edge {a} <-> {b} already present, length refreshed");
            Ok(Connection::Refreshed)
        }
    }

    fn point_of(&self, id: &NodeId) -> Result<Point, GraphError> {
        self.nodes
            .get(id)
            .map(Node::point)
            .ok_or_else(|| GraphError::UnknownNode(id.clone()))
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        let half_edges: usize = self
            .nodes()
            .map(|node| {
                node.neighbours()
                    .map(|(id, _)| if id == node.id() { 2 } else { 1 })
                    .sum::<usize>()
            })
            .sum();
        half_edges / 2
    }

    /// Shortest route from `start` to `goal` using A*
    ///
    /// An unreachable goal is `NoPathFound`; an id missing from the graph is
    /// `UnknownNode`. Searching the same graph twice gives the same route.
    pub fn shortest_path(&self, start: &NodeId, goal: &NodeId) -> Result<Route<'_>, PathPlannerError> {
        let start_node = self.nodes.get(start).ok_or_else(|| PathPlannerError::UnknownNode(start.clone()))?;
        let goal_node = self.nodes.get(goal).ok_or_else(|| PathPlannerError::UnknownNode(goal.clone()))?;
        let target = goal_node.point();

        let (ids, cost) = AStar::default().plan_with_cost(
            start_node.id(),
            |id: &&NodeId| self.edges_from(id),
            // straight line distance never overestimates the remaining walk
            |id: &&NodeId| self.nodes.get(*id).map_or(0.0, |node| node.point().distance(&target)),
            |id: &&NodeId| *id == goal,
        )?;

        let nodes = ids
            .into_iter()
            .map(|id| self.nodes.get(id).ok_or_else(|| PathPlannerError::UnknownNode(id.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("route {start} -> {goal}: {} nodes, {cost} m", nodes.len());
        Ok(Route::new(nodes, cost))
    }

    /// Neighbours of `id` with edge lengths, empty for an unknown id
    fn edges_from(&self, id: &NodeId) -> Vec<(&NodeId, f64)> {
        match self.nodes.get(id) {
            Some(node) => node.neighbours().collect(),
            None => Vec::new(),
        }
    }

    /// Node nearest to `point` by straight line distance
    ///
    /// Linear scan in creation order. On a tie the earliest created node wins.
    /// None if the graph is empty.
    pub fn closest_node(&self, point: Point) -> Option<&Node> {
        let mut closest = None;
        let mut shortest = f64::INFINITY;

        for node in self.nodes.values() {
            let distance = node.point().squared_distance(&point);
            if distance < shortest {
                shortest = distance;
                closest = Some(node);
            }
        }

        closest
    }

    /// Snap a position sample to its closest node and route from there to `goal`
    pub fn route_from(&self, position: Point, goal: &NodeId) -> Result<Route<'_>, PathPlannerError> {
        let start = self.closest_node(position).ok_or(PathPlannerError::EmptyGraph)?;
        self.shortest_path(start.id(), goal)
    }
}
