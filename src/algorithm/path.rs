use std::collections::HashMap;
use std::hash::Hash;

use crate::algorithm::PathNode;
use crate::{Error, Result};

/// Walks predecessor links backward from `goal` to `start` and reverses the
/// result into a forward path of `(state, accumulated cost)` pairs, both
/// endpoints inclusive.
///
/// The walk is bounded by the ledger size: a chain that fails to reach the
/// start within that many steps, or that leaves the ledger, is reported as
/// [`Error::DisconnectedLedger`] rather than looping. This cannot happen
/// with a ledger produced by a completed search.
pub(crate) fn reconstruct<S, C>(
    ledger: &HashMap<S, PathNode<S, C>>,
    start: &S,
    goal: &S,
) -> Result<Vec<(S, C)>>
where
    S: Clone + Eq + Hash,
    C: Clone,
{
    let mut path = Vec::new();
    let mut current = goal.clone();
    loop {
        let node = ledger.get(&current).ok_or(Error::DisconnectedLedger)?;
        path.push((current.clone(), node.cost.clone()));
        if current == *start {
            break;
        }
        if path.len() > ledger.len() {
            return Err(Error::DisconnectedLedger);
        }
        current = node.predecessor.clone().ok_or(Error::DisconnectedLedger)?;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(predecessor: Option<u32>, cost: u32) -> PathNode<u32, u32> {
        PathNode { predecessor, cost }
    }

    #[test]
    fn walks_back_to_start_and_reverses() {
        let ledger = HashMap::from([
            (1, node(None, 0)),
            (2, node(Some(1), 3)),
            (3, node(Some(2), 7)),
        ]);

        let path = reconstruct(&ledger, &1, &3).unwrap();
        assert_eq!(path, vec![(1, 0), (2, 3), (3, 7)]);
    }

    #[test]
    fn goal_equal_to_start_is_a_single_entry() {
        let ledger = HashMap::from([(1, node(None, 0))]);

        let path = reconstruct(&ledger, &1, &1).unwrap();
        assert_eq!(path, vec![(1, 0)]);
    }

    #[test]
    fn chain_missing_from_ledger_is_an_error() {
        let ledger = HashMap::from([(3, node(Some(2), 7))]);

        assert_eq!(reconstruct(&ledger, &1, &3), Err(Error::DisconnectedLedger));
    }

    #[test]
    fn cyclic_chain_is_an_error_not_a_hang() {
        // Corrupted ledger: 2 and 3 point at each other, start unreachable.
        let ledger = HashMap::from([
            (1, node(None, 0)),
            (2, node(Some(3), 3)),
            (3, node(Some(2), 7)),
        ]);

        assert_eq!(reconstruct(&ledger, &1, &3), Err(Error::DisconnectedLedger));
    }
}
