use crate::errors::PathPlannerError;
use crate::collections::{Prioritized, PriorityQueue};
use super::{GraphNodeMap, reconstruct_path};

use std::{
    hash::Hash,
    fmt::Debug,
    cmp::Ordering
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};



/// Open list entry
/// Carries the costs it was queued with, so an entry can be recognised as stale once a cheaper one exists
#[derive(Debug)]
struct Node<T> {
    index: usize, // index in the closed_list - maps to the Id of the node
    cost: T, // Cost to reach this node (g)
    f_cost: T, // Total cost = cost + h(n) aka estimated cost
}

impl<T: PartialOrd> Prioritized for Node<T> {
    type Id = usize;

    fn id(&self) -> usize {
        self.index
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        self.f_cost.partial_cmp(&other.f_cost)
    }
}

/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// All search state lives in the call, so one planner (and the graph behind the
/// closures) can serve any number of searches at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until node meets goal criteria
    /// The Approach has 2 requirements:
    /// 1. The heuristic function must be admissible (never overestimates the true cost to reach the goal)
    /// 2. Edge costs are non-negative
    /// Returns NoPathFound if the goal cannot be reached
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<Vec<N>, PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + PartialOrd + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {
        let (path, _) = self.plan_with_cost(start, neighbors, heuristic_fn, goal_fn)?;
        Ok(path)
    }

    /// Same as `plan`, also returning the total cost of the path
    pub fn plan_with_cost<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<(Vec<N>, C), PathPlannerError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        H: Fn(&N) -> C,
        IT: IntoIterator<Item = (N, C)>,
        C: Zero + PartialOrd + Copy + Debug,
        G: Fn(&N) -> bool,
        {
        let (node_map, goal_index) = self.build_graph(start, neighbors, heuristic_fn, goal_fn);

        match goal_index {
            Some(goal_index) => reconstruct_path(&node_map, goal_index),
            None => Err(PathPlannerError::NoPathFound)
        }
    }


    /// Traverses the graph using A* algorithm
    /// Returns a map of nodes with their smallest costs along with the index of the goal node
    fn build_graph<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        C: Zero + PartialOrd + Copy + Debug,
        H: Fn(&N) -> C,
        G: Fn(&N) -> bool
    {
        // Open List
        // Nodes that need to be evaluated, ordered by f_cost (cost + heuristic)
        // No decrease-key: an improved node is queued again and the old entry is skipped when popped
        let mut open_list: PriorityQueue<Node<C>> = PriorityQueue::new();

        // Best known cost and parent for every node seen so far
        // The tuple contains (parent_index, cost); the start node's parent_index is usize::MAX
        let mut closed_list: GraphNodeMap<N, C> = GraphNodeMap::default();

        let start_f_cost = heuristic_fn(&start);
        let start_index = closed_list.insert_full(start, (usize::MAX, Zero::zero())).0;
        open_list.enqueue(Node {
            index: start_index,
            cost: Zero::zero(),
            f_cost: start_f_cost,
        });

        let mut expanded = 0usize;

        while let Some(Node { index, cost, .. }) = open_list.dequeue() {

            // the index always comes from closed_list, which never shrinks
            let Some((node, &(_, c))) = closed_list.get_index(index) else {
                continue;
            };

            // A cheaper entry for this node was queued after this one
            if cost > c {
                continue;
            }

            if goal_fn(node) {
                log::debug!("a*: reached goal {node:?} at cost {c:?} after {expanded} expansions");
                return (closed_list, Some(index));
            }

            expanded += 1;
            let node = node.clone();

            for (neighbor, edge_cost) in neighbors(&node) {

                // confirmed cost through the current node, not heuristic
                let new_cost = c + edge_cost;

                let h_cost: C = heuristic_fn(&neighbor);

                let neighbor_index = match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        let neighbor_index = e.index();
                        e.insert((index, new_cost));
                        neighbor_index
                    }
                    Occupied(mut e) => {
                        if e.get().1 > new_cost {
                            e.insert((index, new_cost));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };

                // Only add to the queue if we've found a better path
                open_list.enqueue(Node {
                    index: neighbor_index,
                    cost: new_cost,
                    f_cost: new_cost + h_cost,
                });
            }
        }

        log::debug!("a*: open list exhausted after {expanded} expansions, goal unreachable");
        (closed_list, None)
    }
}
