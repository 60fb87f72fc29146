use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

mod priority_queue;

pub use priority_queue::{Order, Prioritized, PriorityQueue};


/// Insertion-ordered map with fast hashing
/// Iteration order is the order keys were first inserted, which keeps scans deterministic
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
