//! Heuristic-guided best-first search (the A* algorithm) over a lazily
//! expanded state graph.
//!
//! The frontier is ordered by `(best_guess, traversed)` lexicographically,
//! where `best_guess` is the caller's estimate of the total cost to a goal
//! through the neighbor. With an admissible estimate the result equals the
//! uninformed search's; an inadmissible one may return a suboptimal but
//! still terminating result. Overall performance depends on the reliability
//! of the estimate.
//!
//! Unlike the uninformed loop, neighbors are enqueued even when their state
//! already has a ledger entry, and a staleness guard at extraction decides
//! whether the entry is processed or discarded. Costs must be non-negative
//! and additive; violating that has undefined behavior.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::Zero;

use crate::algorithm::path::reconstruct;
use crate::algorithm::{CostOrder, ExpandGuided, PathNode, SearchConfig};
use crate::data_structures::Frontier;
use crate::{Error, Result};

/// Calculates the cost of the shortest path from `start` to `end`.
///
/// Fails with [`Error::NoPathToTarget`] when the map is entirely explored
/// and no path to `end` is found.
pub fn shortest_path_cost<S, C, E>(start: S, expand: E, end: S) -> Result<C>
where
    S: Clone + Eq + Hash,
    C: Clone + Ord + Zero,
    E: ExpandGuided<S, C>,
{
    shortest_path_cost_with(start, expand, end, &SearchConfig::new())
}

/// Calculates the cost of the shortest path from `start` to `end`, comparing
/// costs through the order in `config`.
pub fn shortest_path_cost_with<S, C, E, O>(
    start: S,
    expand: E,
    end: S,
    config: &SearchConfig<O>,
) -> Result<C>
where
    S: Clone + Eq + Hash,
    C: Clone + Zero,
    E: ExpandGuided<S, C>,
    O: CostOrder<C>,
{
    shortest_path_cost_by_with(start, expand, move |s: &S| *s == end, config)
}

/// Calculates the cost of the shortest path from `start` to the first state
/// satisfying `is_goal`.
pub fn shortest_path_cost_by<S, C, E, P>(start: S, expand: E, is_goal: P) -> Result<C>
where
    S: Clone + Eq + Hash,
    C: Clone + Ord + Zero,
    E: ExpandGuided<S, C>,
    P: FnMut(&S) -> bool,
{
    shortest_path_cost_by_with(start, expand, is_goal, &SearchConfig::new())
}

/// Calculates the cost of the shortest path from `start` to the first state
/// satisfying `is_goal`, comparing costs through the order in `config`.
///
/// The guided cost-only core loop; the other guided cost queries are thin
/// wrappers around it.
pub fn shortest_path_cost_by_with<S, C, E, P, O>(
    start: S,
    mut expand: E,
    mut is_goal: P,
    config: &SearchConfig<O>,
) -> Result<C>
where
    S: Clone + Eq + Hash,
    C: Clone + Zero,
    E: ExpandGuided<S, C>,
    P: FnMut(&S) -> bool,
    O: CostOrder<C>,
{
    let order = &config.cost_order;
    let mut total_cost: HashMap<S, C> = HashMap::new();
    let mut frontier = Frontier::new(|a: &(C, C), b: &(C, C)| match order.cmp(&a.0, &b.0) {
        Ordering::Equal => order.cmp(&a.1, &b.1),
        unequal => unequal,
    });

    let mut current = start;
    // (best guess at total cost through the state, cost traversed so far)
    let mut costs = (C::zero(), C::zero());
    loop {
        // Staleness guard: decrease-key only dedups pending entries, so a
        // worse duplicate of an already-extracted state can still surface.
        // Process an extraction only if the state is unledgered or the
        // extracted traversed cost is strictly cheaper than the record.
        let fresh = match total_cost.get(&current) {
            None => true,
            Some(recorded) => order.cmp(&costs.1, recorded) == Ordering::Less,
        };
        if fresh {
            total_cost.insert(current.clone(), costs.1.clone());
            if is_goal(&current) {
                debug!(
                    "astar: goal reached after finalizing {} states",
                    total_cost.len()
                );
                return Ok(costs.1);
            }

            for (next, traversed, best_guess) in expand.expand(&current, &costs.1) {
                frontier.insert_or_decrease(next, (best_guess, traversed));
            }
            trace!(
                "astar: {} finalized, {} pending",
                total_cost.len(),
                frontier.len()
            );
        }

        match frontier.pop() {
            Some((state, priority)) => {
                current = state;
                costs = priority;
            }
            None => return Err(Error::NoPathToTarget),
        }
    }
}

/// Finds the shortest path from `start` to `end` as a sequence of
/// `(state, accumulated cost)` pairs, both endpoints inclusive.
pub fn shortest_path<S, C, E>(start: S, expand: E, end: S) -> Result<Vec<(S, C)>>
where
    S: Clone + Eq + Hash,
    C: Clone + Ord + Zero,
    E: ExpandGuided<S, C>,
{
    shortest_path_with(start, expand, end, &SearchConfig::new())
}

/// Finds the shortest path from `start` to `end`, comparing costs through
/// the order in `config`.
pub fn shortest_path_with<S, C, E, O>(
    start: S,
    expand: E,
    end: S,
    config: &SearchConfig<O>,
) -> Result<Vec<(S, C)>>
where
    S: Clone + Eq + Hash,
    C: Clone + Zero,
    E: ExpandGuided<S, C>,
    O: CostOrder<C>,
{
    shortest_path_by_with(start, expand, move |s: &S| *s == end, config)
}

/// Finds the shortest path from `start` to the first state satisfying
/// `is_goal`.
pub fn shortest_path_by<S, C, E, P>(start: S, expand: E, is_goal: P) -> Result<Vec<(S, C)>>
where
    S: Clone + Eq + Hash,
    C: Clone + Ord + Zero,
    E: ExpandGuided<S, C>,
    P: FnMut(&S) -> bool,
{
    shortest_path_by_with(start, expand, is_goal, &SearchConfig::new())
}

/// Finds the shortest path from `start` to the first state satisfying
/// `is_goal`, comparing costs through the order in `config`.
///
/// The guided single-path core loop. The ledger entry for a state may be
/// overwritten, predecessor included, when a strictly cheaper traversed
/// cost for it is extracted later; the reconstruction at the end therefore
/// always follows the cheapest recorded predecessors.
pub fn shortest_path_by_with<S, C, E, P, O>(
    start: S,
    mut expand: E,
    mut is_goal: P,
    config: &SearchConfig<O>,
) -> Result<Vec<(S, C)>>
where
    S: Clone + Eq + Hash,
    C: Clone + Zero,
    E: ExpandGuided<S, C>,
    P: FnMut(&S) -> bool,
    O: CostOrder<C>,
{
    let order = &config.cost_order;
    let mut ledger: HashMap<S, PathNode<S, C>> = HashMap::new();
    let mut frontier =
        Frontier::new(|a: &(S, C, C), b: &(S, C, C)| match order.cmp(&a.1, &b.1) {
            Ordering::Equal => order.cmp(&a.2, &b.2),
            unequal => unequal,
        });

    let mut current = start.clone();
    let mut predecessor: Option<S> = None;
    let mut traversed = C::zero();
    let goal = loop {
        let fresh = match ledger.get(&current) {
            None => true,
            Some(recorded) => order.cmp(&traversed, &recorded.cost) == Ordering::Less,
        };
        if fresh {
            ledger.insert(
                current.clone(),
                PathNode {
                    predecessor: predecessor.take(),
                    cost: traversed.clone(),
                },
            );
            if is_goal(&current) {
                break current;
            }

            for (next, next_traversed, best_guess) in expand.expand(&current, &traversed) {
                frontier.insert_or_decrease(next, (current.clone(), best_guess, next_traversed));
            }
        }

        match frontier.pop() {
            Some((state, (parent, _best_guess, next_traversed))) => {
                current = state;
                predecessor = Some(parent);
                traversed = next_traversed;
            }
            None => return Err(Error::NoPathToTarget),
        }
    };
    debug!("astar: goal reached after finalizing {} states", ledger.len());

    reconstruct(&ledger, &start, &goal)
}
