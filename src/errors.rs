use thiserror::Error;
use crate::graph::NodeId;


/// Outcome of a route search that did not produce a path
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathPlannerError {
    /// Start and goal are in different components
    #[error("no path found")]
    NoPathFound,
    #[error("unknown endpoint: {0}")]
    UnknownNode(NodeId),
    /// Graph has no nodes to snap a position to
    #[error("graph is empty")]
    EmptyGraph,
}

/// Graph construction problems
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),
    #[error("node id already in use: {0}")]
    DuplicateNode(NodeId),
}
