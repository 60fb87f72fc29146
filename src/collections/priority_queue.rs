use std::cmp::Ordering;
use std::slice;


/// Element stored in a [`PriorityQueue`]
///
/// Identity and priority are separate concerns: two elements with the same
/// priority are still distinct entries unless their ids match.
pub trait Prioritized {
    /// Identity of the element, used by [`PriorityQueue::contains`]
    type Id: PartialEq;

    fn id(&self) -> Self::Id;

    /// Three-way comparison of priorities
    /// - `Less` if `self` sorts earlier than `other`
    /// - `Equal` if both have the same priority
    /// - `Greater` if `self` sorts later
    /// - `None` if the two cannot be compared (e.g. a NaN cost)
    fn compare(&self, other: &Self) -> Option<Ordering>;
}


/// Which end of the comparison order is dequeued first
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Order {
    /// Smallest element first
    #[default]
    Min,
    /// Largest element first
    Max,
}


/// Binary heap priority queue
///
/// Storage is a complete binary tree laid out in a vector. Between operations
/// every parent outranks or ties with its children.
///
/// There is no decrease-key: when an element's priority improves the caller
/// enqueues it again and tolerates the outdated entry when it surfaces.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T> {
    heap: Vec<T>,
    order: Order,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self {
            heap: Vec::new(),
            order: Order::Min,
        }
    }
}

impl<T: Prioritized> PriorityQueue<T> {

    /// Empty min-queue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(order: Order) -> Self {
        Self {
            heap: Vec::new(),
            order,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            order: Order::Min,
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Check whether an element with the same id is queued
    /// Linear scan over the heap
    pub fn contains(&self, item: &T) -> bool {
        let id = item.id();
        self.heap.iter().any(|queued| queued.id() == id)
    }

    /// Add an element at the next free leaf, then sift it up
    pub fn enqueue(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the highest priority element
    pub fn dequeue(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        // moves the last leaf into the root slot
        let item = self.heap.swap_remove(0);
        if self.heap.len() > 1 {
            self.sift_down(0);
        }
        Some(item)
    }

    /// Highest priority element, without removing it
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Iterate over the queued elements in heap order (not sorted)
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.heap.iter()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// True if the element at `a` must sit above the element at `b`
    /// Ties and incomparable pairs never outrank each other
    fn outranks(&self, a: usize, b: usize) -> bool {
        matches!(
            (self.heap[a].compare(&self.heap[b]), self.order),
            (Some(Ordering::Less), Order::Min) | (Some(Ordering::Greater), Order::Max)
        )
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.outranks(index, parent) {
                break;
            }
            swap(&mut self.heap, index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            // pick whichever child strictly outranks the current slot
            let mut target = index;
            if left < len && self.outranks(left, target) {
                target = left;
            }
            if right < len && self.outranks(right, target) {
                target = right;
            }

            if target == index {
                break;
            }
            swap(&mut self.heap, index, target);
            index = target;
        }
    }
}

impl<T: Prioritized> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T: Prioritized> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}


/// Swap two slots, ignoring indices outside the heap
fn swap<T>(heap: &mut [T], a: usize, b: usize) {
    if a < heap.len() && b < heap.len() {
        heap.swap(a, b);
    }
}
