pub mod a_star;
mod shortest_path;

use shortest_path::reconstruct_path;

use crate::collections::FxIndexMap;

/// Per-search node map used by the path planners
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map, usize::MAX for the start
/// - cost is the best known cost to reach this node from the start (g-score)
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;
