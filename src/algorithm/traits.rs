use std::cmp::Ordering;

/// One finalized entry of a search: the predecessor on the cheapest known
/// path to a state, and the accumulated cost of that path.
///
/// `predecessor` is `None` exactly for the start state of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNode<S, C> {
    /// Previous state on the cheapest path from the start
    pub predecessor: Option<S>,

    /// Total traversal cost from the start to this state
    pub cost: C,
}

/// Total order over traversal costs.
///
/// The engine compares costs only through this trait, so a caller can search
/// with an order other than the type's natural one (for example a reversed
/// or projected order) without wrapping the cost type.
pub trait CostOrder<C> {
    fn cmp(&self, a: &C, b: &C) -> Ordering;
}

/// The default cost order: the type's own `Ord`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<C: Ord> CostOrder<C> for NaturalOrder {
    fn cmp(&self, a: &C, b: &C) -> Ordering {
        a.cmp(b)
    }
}

/// Per-query configuration with named defaults.
///
/// Every query has a convenience form using [`NaturalOrder`] and a `_with`
/// form taking this struct explicitly.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig<O = NaturalOrder> {
    /// Order used for every cost comparison during the search
    pub cost_order: O,
}

impl SearchConfig<NaturalOrder> {
    pub fn new() -> Self {
        SearchConfig {
            cost_order: NaturalOrder,
        }
    }
}

impl Default for SearchConfig<NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> SearchConfig<O> {
    /// Replaces the cost order used by the search.
    pub fn with_cost_order<O2>(self, cost_order: O2) -> SearchConfig<O2> {
        SearchConfig { cost_order }
    }
}

/// Capability to expand the implicit graph at a state.
///
/// `expand` receives the state being finalized and the total cost traversed
/// to reach it, and returns the neighbors as `(next, traversed)` records
/// where `traversed` is the *total* accumulated cost to reach `next` (the
/// implementation adds its own edge increment to the cost it was given).
/// Returning an empty sequence marks a dead end and is handled normally.
///
/// Implemented for any `FnMut(&S, &C) -> IntoIterator<Item = (S, C)>`, so a
/// closure is enough at most call sites.
pub trait Expand<S, C> {
    type Neighbors: IntoIterator<Item = (S, C)>;

    fn expand(&mut self, state: &S, traversed: &C) -> Self::Neighbors;
}

impl<S, C, F, I> Expand<S, C> for F
where
    F: FnMut(&S, &C) -> I,
    I: IntoIterator<Item = (S, C)>,
{
    type Neighbors = I;

    fn expand(&mut self, state: &S, traversed: &C) -> I {
        self(state, traversed)
    }
}

/// Capability to expand the implicit graph with a heuristic estimate.
///
/// Neighbor records are `(next, traversed, best_guess)` where `best_guess`
/// is a lower-bound estimate of the total cost to a goal through `next`.
/// An admissible estimate (never overstating the remaining cost) makes the
/// guided search return the true minimum; an inadmissible one still
/// terminates but may return a suboptimal result.
pub trait ExpandGuided<S, C> {
    type Neighbors: IntoIterator<Item = (S, C, C)>;

    fn expand(&mut self, state: &S, traversed: &C) -> Self::Neighbors;
}

impl<S, C, F, I> ExpandGuided<S, C> for F
where
    F: FnMut(&S, &C) -> I,
    I: IntoIterator<Item = (S, C, C)>,
{
    type Neighbors = I;

    fn expand(&mut self, state: &S, traversed: &C) -> I {
        self(state, traversed)
    }
}
