//! Uninformed best-first search (Dijkstra's algorithm) over a lazily
//! expanded state graph.
//!
//! Every query explores the map through the caller's [`Expand`]
//! implementation, so the graph is never stored and may be infinite: the
//! targeted queries visit only the states needed to reach the goal, while
//! [`shortest_paths`] visits the whole reachable set and therefore assumes
//! it is finite.
//!
//! All costs must be non-negative and additive. The greedy finalize-once
//! property this loop relies on is only valid under that assumption, and
//! violating it has undefined behavior rather than a detected error.

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::Zero;

use crate::algorithm::path::reconstruct;
use crate::algorithm::{CostOrder, Expand, PathNode, SearchConfig};
use crate::data_structures::Frontier;
use crate::{Error, Result};

/// Calculates the cost of the shortest path from `start` to `end`.
///
/// Loops and cycles are detected and handled: only the cheapest path to a
/// given state is used and other paths are discarded.
///
/// Fails with [`Error::NoPathToTarget`] when the map is entirely explored
/// and no path to `end` is found.
pub fn shortest_path_cost<S, C, E>(start: S, expand: E, end: S) -> Result<C>
where
    S: Clone + Eq + Hash,
    C: Clone + Ord + Zero,
    E: Expand<S, C>,
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
    E: Expand<S, C>,
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
    E: Expand<S, C>,
    P: FnMut(&S) -> bool,
{
    shortest_path_cost_by_with(start, expand, is_goal, &SearchConfig::new())
}

/// Calculates the cost of the shortest path from `start` to the first state
/// satisfying `is_goal`, comparing costs through the order in `config`.
///
/// This is the cost-only core loop; the other cost queries are thin
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
    E: Expand<S, C>,
    P: FnMut(&S) -> bool,
    O: CostOrder<C>,
{
    let order = &config.cost_order;
    let mut total_cost: HashMap<S, C> = HashMap::new();
    let mut frontier = Frontier::new(|a: &C, b: &C| order.cmp(a, b));

    let mut current = start;
    let mut cost = C::zero();
    loop {
        // A state is enqueued only while unledgered, so this finalizes each
        // state exactly once.
        total_cost.insert(current.clone(), cost.clone());
        if is_goal(&current) {
            debug!(
                "dijkstra: goal reached after finalizing {} states",
                total_cost.len()
            );
            return Ok(cost);
        }

        for (next, traversed) in expand.expand(&current, &cost) {
            if !total_cost.contains_key(&next) {
                frontier.insert_or_decrease(next, traversed);
            }
        }
        trace!(
            "dijkstra: {} finalized, {} pending",
            total_cost.len(),
            frontier.len()
        );

        match frontier.pop() {
            Some((state, traversed)) => {
                current = state;
                cost = traversed;
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
    E: Expand<S, C>,
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
    E: Expand<S, C>,
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
    E: Expand<S, C>,
    P: FnMut(&S) -> bool,
{
    shortest_path_by_with(start, expand, is_goal, &SearchConfig::new())
}

/// Finds the shortest path from `start` to the first state satisfying
/// `is_goal`, comparing costs through the order in `config`.
///
/// The single-path core loop: identical to the cost-only loop except that
/// the ledger records the predecessor alongside the cost, and the frontier
/// priority carries the predecessor so it can be attached at extraction.
pub fn shortest_path_by_with<S, C, E, P, O>(
    start: S,
    mut expand: E,
    mut is_goal: P,
    config: &SearchConfig<O>,
) -> Result<Vec<(S, C)>>
where
    S: Clone + Eq + Hash,
    C: Clone + Zero,
    E: Expand<S, C>,
    P: FnMut(&S) -> bool,
    O: CostOrder<C>,
{
    let order = &config.cost_order;
    let mut ledger: HashMap<S, PathNode<S, C>> = HashMap::new();
    let mut frontier = Frontier::new(|a: &(S, C), b: &(S, C)| order.cmp(&a.1, &b.1));

    let mut current = start.clone();
    let mut predecessor: Option<S> = None;
    let mut cost = C::zero();
    let goal = loop {
        ledger.insert(
            current.clone(),
            PathNode {
                predecessor: predecessor.take(),
                cost: cost.clone(),
            },
        );
        if is_goal(&current) {
            break current;
        }

        for (next, traversed) in expand.expand(&current, &cost) {
            if !ledger.contains_key(&next) {
                frontier.insert_or_decrease(next, (current.clone(), traversed));
            }
        }

        match frontier.pop() {
            Some((state, (parent, traversed))) => {
                current = state;
                predecessor = Some(parent);
                cost = traversed;
            }
            None => return Err(Error::NoPathToTarget),
        }
    };
    debug!(
        "dijkstra: goal reached after finalizing {} states",
        ledger.len()
    );

    reconstruct(&ledger, &start, &goal)
}

/// Finds the shortest path from `start` to every reachable state.
///
/// Returns, for each reached state, its predecessor on the cheapest path
/// and the total cost to reach it; the predecessors form a tree rooted at
/// `start`. The loop only terminates once every state produced by `expand`
/// has been finalized, so on an infinite map this runs forever — targeted
/// queries are the ones that support infinite maps.
pub fn shortest_paths<S, C, E>(start: S, expand: E) -> HashMap<S, PathNode<S, C>>
where
    S: Clone + Eq + Hash,
    C: Clone + Ord + Zero,
    E: Expand<S, C>,
{
    shortest_paths_with(start, expand, &SearchConfig::new())
}

/// Finds the shortest path from `start` to every reachable state, comparing
/// costs through the order in `config`.
pub fn shortest_paths_with<S, C, E, O>(
    start: S,
    mut expand: E,
    config: &SearchConfig<O>,
) -> HashMap<S, PathNode<S, C>>
where
    S: Clone + Eq + Hash,
    C: Clone + Zero,
    E: Expand<S, C>,
    O: CostOrder<C>,
{
    let order = &config.cost_order;
    let mut ledger: HashMap<S, PathNode<S, C>> = HashMap::new();
    let mut frontier = Frontier::new(|a: &(S, C), b: &(S, C)| order.cmp(&a.1, &b.1));

    let mut current = start;
    let mut predecessor: Option<S> = None;
    let mut cost = C::zero();
    loop {
        ledger.insert(
            current.clone(),
            PathNode {
                predecessor: predecessor.take(),
                cost: cost.clone(),
            },
        );

        for (next, traversed) in expand.expand(&current, &cost) {
            if !ledger.contains_key(&next) {
                frontier.insert_or_decrease(next, (current.clone(), traversed));
            }
        }

        match frontier.pop() {
            Some((state, (parent, traversed))) => {
                current = state;
                predecessor = Some(parent);
                cost = traversed;
            }
            None => break,
        }
    }
    debug!("dijkstra: full map finalized {} states", ledger.len());

    ledger
}
