use crate::errors::PathPlannerError;
use super::GraphNodeMap;

/// Walk parent links from the goal back to the start
/// Returns the path ordered start -> goal along with the goal's cost
/// A map can never hold a chain longer than its size, so a longer walk means a broken parent link
pub(crate) fn reconstruct_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<(Vec<N>, C), PathPlannerError>
where
    N: Clone,
    C: Copy,
{
    let (_, &(_, goal_cost)) = node_map.get_index(goal_index).ok_or(PathPlannerError::NoPathFound)?;

    let mut path = Vec::new();
    let mut current_index = goal_index;

    while current_index != usize::MAX {
        if path.len() >= node_map.len() {
            return Err(PathPlannerError::NoPathFound);
        }

        let (node, &(parent_index, _)) = node_map.get_index(current_index).ok_or(PathPlannerError::NoPathFound)?;
        path.push(node.clone());
        current_index = parent_index;
    }

    path.reverse();

    Ok((path, goal_cost))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_path() {
        let mut node_map: GraphNodeMap<&str, u32> = GraphNodeMap::default();

        let a = node_map.insert_full("A", (usize::MAX, 0)).0;
        let b = node_map.insert_full("B", (a, 1)).0;
        let c = node_map.insert_full("C", (a, 3)).0;
        let d = node_map.insert_full("D", (c, 4)).0;

        assert_eq!(reconstruct_path(&node_map, d).unwrap(), (vec!["A", "C", "D"], 4));
        assert_eq!(reconstruct_path(&node_map, b).unwrap(), (vec!["A", "B"], 1));
        assert_eq!(reconstruct_path(&node_map, a).unwrap(), (vec!["A"], 0));
    }

    #[test]
    fn test_reconstruct_path_rejects_bad_links() {
        let mut node_map: GraphNodeMap<&str, u32> = GraphNodeMap::default();

        // goal index outside the map
        assert_eq!(reconstruct_path(&node_map, 0), Err(PathPlannerError::NoPathFound));

        // parent points past the end
        node_map.insert("A", (7, 0));
        assert_eq!(reconstruct_path(&node_map, 0), Err(PathPlannerError::NoPathFound));

        // A <-> B cycle never reaches a root
        node_map.insert("A", (1, 0));
        node_map.insert("B", (0, 1));
        assert_eq!(reconstruct_path(&node_map, 1), Err(PathPlannerError::NoPathFound));
    }
}
