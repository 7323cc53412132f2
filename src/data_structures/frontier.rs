use std::cmp::Ordering;
use std::collections::HashMap;

/// A decrease-key priority queue over discovered-but-not-yet-finalized
/// states.
///
/// The queue holds at most one pending entry per state: inserting a state
/// that is already pending keeps only the smaller of the two priorities.
/// Bounding pending entries to one per state keeps the queue size at the
/// number of distinct discovered states rather than the number of edges,
/// giving `O(E log V)` total relaxation cost instead of `O(E log E)`.
///
/// Implemented as an array-backed binary min-heap plus a side index from
/// state to heap slot, so decrease and removal are `O(log n)`. Ordering is
/// delegated to the comparison closure supplied at construction; ties are
/// broken arbitrarily.
#[derive(Debug)]
pub struct Frontier<S, P, F>
where
    S: Clone + Eq + std::hash::Hash,
    F: Fn(&P, &P) -> Ordering,
{
    /// Binary min-heap of (state, priority) entries
    heap: Vec<(S, P)>,

    /// Heap slot of every pending state
    slots: HashMap<S, usize>,

    /// Total order over priorities
    order: F,
}

impl<S, P, F> Frontier<S, P, F>
where
    S: Clone + Eq + std::hash::Hash,
    F: Fn(&P, &P) -> Ordering,
{
    /// Creates an empty frontier ordered by `order`.
    pub fn new(order: F) -> Self {
        Frontier {
            heap: Vec::new(),
            slots: HashMap::new(),
            order,
        }
    }

    /// Returns the number of pending entries.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no entries are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts `state` with `priority`, or lowers its pending priority.
    ///
    /// If `state` has no pending entry it is inserted. If it is already
    /// pending with priority `p_old`, the entry is replaced only when
    /// `priority < p_old`; otherwise this is a no-op. States that were
    /// already extracted are not affected and may be inserted again.
    pub fn insert_or_decrease(&mut self, state: S, priority: P) {
        match self.slots.get(&state).copied() {
            Some(slot) => {
                if (self.order)(&priority, &self.heap[slot].1) == Ordering::Less {
                    self.heap[slot].1 = priority;
                    self.sift_up(slot);
                }
            }
            None => {
                let slot = self.heap.len();
                self.slots.insert(state.clone(), slot);
                self.heap.push((state, priority));
                self.sift_up(slot);
            }
        }
    }

    /// Removes and returns the pending entry with the smallest priority,
    /// or `None` when no entries remain.
    pub fn pop(&mut self) -> Option<(S, P)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (state, priority) = self.heap.pop()?;
        self.slots.remove(&state);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((state, priority))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].0.clone(), a);
        self.slots.insert(self.heap[b].0.clone(), b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if (self.order)(&self.heap[slot].1, &self.heap[parent].1) != Ordering::Less {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;
            if left < self.heap.len()
                && (self.order)(&self.heap[left].1, &self.heap[smallest].1) == Ordering::Less
            {
                smallest = left;
            }
            if right < self.heap.len()
                && (self.order)(&self.heap[right].1, &self.heap[smallest].1) == Ordering::Less
            {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
