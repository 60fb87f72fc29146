//! Route planning over a graph of 2D waypoints
//!
//! - [`PriorityQueue`]: binary heap ordered by a three-way comparison
//! - [`PathGraph`]: undirected waypoint graph with Euclidean edges, A* routes
//!   and nearest-waypoint lookup
//! - [`AStar`]: the generic planner behind `PathGraph`, usable with any
//!   neighbour / heuristic / goal closures

pub mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use collections::{Order, Prioritized, PriorityQueue};
pub use errors::{GraphError, PathPlannerError};
pub use geometry::Point;
pub use graph::{Connection, Insertion, Node, NodeId, PathGraph, Route, Waypoint, WaypointMap};
pub use graph_algos::a_star::AStar;
