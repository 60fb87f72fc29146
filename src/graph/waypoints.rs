use crate::errors::GraphError;
use crate::geometry::Point;
use super::{NodeId, PathGraph};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// One waypoint of a map description
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    /// Comma separated neighbour references, e.g. "2,5,11"
    #[cfg_attr(feature = "serde", serde(default))]
    pub neighbours: String,
}

/// Waypoints and their adjacency, as loaded at startup
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaypointMap {
    /// Prepended to every neighbour reference to form the neighbour's id
    #[cfg_attr(feature = "serde", serde(default))]
    pub neighbour_prefix: String,
    pub waypoints: Vec<Waypoint>,
}

/// Split a neighbour list on commas, trimming entries and skipping empty ones
pub fn parse_neighbours(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

impl PathGraph {

    /// Build a graph from a waypoint map
    /// All nodes are created before any edge, so references may point forward.
    /// Duplicate waypoint ids and references to missing waypoints are errors.
    pub fn from_waypoints(map: &WaypointMap) -> Result<PathGraph, GraphError> {
        let mut graph = PathGraph::new();

        for waypoint in &map.waypoints {
            graph.try_create_node(Point::new(waypoint.x, waypoint.y), Some(waypoint.id.clone()))?;
        }

        for waypoint in &map.waypoints {
            for entry in parse_neighbours(&waypoint.neighbours) {
                let reference = format!("{}{}", map.neighbour_prefix, entry);
                let neighbour = graph
                    .resolve(&reference)
                    .ok_or_else(|| GraphError::UnknownNode(NodeId::from(reference)))?;
                graph.connect(&waypoint.id, &neighbour)?;
            }
        }

        log::debug!("loaded {} waypoints, {} edges", graph.len(), graph.edge_count());
        Ok(graph)
    }

    /// Match a textual reference to a node id
    /// Names take precedence; a numeric reference falls back to the integer id
    fn resolve(&self, reference: &str) -> Option<NodeId> {
        let name = NodeId::from(reference);
        if self.contains(&name) {
            return Some(name);
        }
        reference
            .parse::<u64>()
            .ok()
            .map(NodeId::Index)
            .filter(|id| self.contains(id))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(id: impl Into<NodeId>, x: f64, y: f64, neighbours: &str) -> Waypoint {
        Waypoint {
            id: id.into(),
            x,
            y,
            neighbours: neighbours.to_string(),
        }
    }

    #[test]
    fn test_parse_neighbours() {
        let entries: Vec<&str> = parse_neighbours(" 1, 2,,3 ,").collect();
        assert_eq!(entries, vec!["1", "2", "3"]);
        assert_eq!(parse_neighbours("").count(), 0);
    }

    #[test]
    fn test_from_waypoints_with_prefix() {
        let map = WaypointMap {
            neighbour_prefix: "w".to_string(),
            waypoints: vec![
                waypoint("w1", 0.0, 0.0, "2"),
                waypoint("w2", 3.0, 4.0, "1,3"),
                waypoint("w3", 3.0, 0.0, "2"),
            ],
        };

        let graph = PathGraph::from_waypoints(&map).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node(&NodeId::from("w1")).unwrap().distance_to(&NodeId::from("w2")), Some(5.0));

        let route = graph.shortest_path(&NodeId::from("w1"), &NodeId::from("w3")).unwrap();
        assert_eq!(route.to_ids(), vec![NodeId::from("w1"), NodeId::from("w2"), NodeId::from("w3")]);
        assert_eq!(route.cost(), 9.0);
    }

    #[test]
    fn test_numeric_references_resolve_to_integer_ids() {
        let map = WaypointMap {
            neighbour_prefix: String::new(),
            waypoints: vec![
                waypoint(0u64, 0.0, 0.0, "1"),
                waypoint(1u64, 1.0, 0.0, ""),
            ],
        };

        let graph = PathGraph::from_waypoints(&map).unwrap();
        assert!(graph.node(&NodeId::from(0u64)).unwrap().is_adjacent(&NodeId::from(1u64)));
    }

    #[test]
    fn test_unknown_reference_is_an_error() {
        let map = WaypointMap {
            neighbour_prefix: "w".to_string(),
            waypoints: vec![waypoint("w1", 0.0, 0.0, "9")],
        };

        assert_eq!(PathGraph::from_waypoints(&map).unwrap_err(), GraphError::UnknownNode(NodeId::from("w9")));
    }

    #[test]
    fn test_duplicate_waypoint_is_an_error() {
        let map = WaypointMap {
            neighbour_prefix: String::new(),
            waypoints: vec![
                waypoint("a", 0.0, 0.0, ""),
                waypoint("a", 1.0, 1.0, ""),
            ],
        };

        assert_eq!(PathGraph::from_waypoints(&map).unwrap_err(), GraphError::DuplicateNode(NodeId::from("a")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_waypoint_map() {
        let json = r#"{
            "neighbour_prefix": "w",
            "waypoints": [
                { "id": "w1", "x": 0.0, "y": 0.0, "neighbours": "2" },
                { "id": "w2", "x": 0.0, "y": 2.0 },
                { "id": 7, "x": 1.0, "y": 1.0 }
            ]
        }"#;

        let map: WaypointMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.waypoints[1].neighbours, "");
        assert_eq!(map.waypoints[2].id, NodeId::Index(7));

        let graph = PathGraph::from_waypoints(&map).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.closest_node(Point::new(0.9, 1.2)).map(|n| n.id().clone()), Some(NodeId::Index(7)));
    }
}
