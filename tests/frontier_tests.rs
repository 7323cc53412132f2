use lazysp::data_structures::Frontier;

fn min_order(a: &u32, b: &u32) -> std::cmp::Ordering {
    a.cmp(b)
}

#[test]
fn test_pop_returns_minimum_priority_first() {
    let mut frontier = Frontier::new(min_order);

    frontier.insert_or_decrease("b", 7);
    frontier.insert_or_decrease("a", 2);
    frontier.insert_or_decrease("c", 11);
    frontier.insert_or_decrease("d", 5);

    assert_eq!(frontier.pop(), Some(("a", 2)));
    assert_eq!(frontier.pop(), Some(("d", 5)));
    assert_eq!(frontier.pop(), Some(("b", 7)));
    assert_eq!(frontier.pop(), Some(("c", 11)));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn test_pending_state_keeps_smaller_priority() {
    let mut frontier = Frontier::new(min_order);

    frontier.insert_or_decrease("a", 9);
    frontier.insert_or_decrease("a", 4);

    assert_eq!(frontier.len(), 1, "one pending entry per state");
    assert_eq!(frontier.pop(), Some(("a", 4)));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn test_larger_priority_for_pending_state_is_a_no_op() {
    let mut frontier = Frontier::new(min_order);

    frontier.insert_or_decrease("a", 4);
    frontier.insert_or_decrease("a", 9);

    assert_eq!(frontier.len(), 1);
    assert_eq!(frontier.pop(), Some(("a", 4)));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn test_extracted_state_is_not_affected_by_later_inserts() {
    let mut frontier = Frontier::new(min_order);

    frontier.insert_or_decrease("a", 4);
    assert_eq!(frontier.pop(), Some(("a", 4)));

    // Re-inserting after extraction starts a fresh entry, even when the new
    // priority is worse than the extracted one.
    frontier.insert_or_decrease("a", 10);
    assert_eq!(frontier.pop(), Some(("a", 10)));
}

#[test]
fn test_decrease_reorders_the_heap() {
    let mut frontier = Frontier::new(min_order);

    frontier.insert_or_decrease("a", 10);
    frontier.insert_or_decrease("b", 5);
    frontier.insert_or_decrease("c", 8);

    // "a" is the worst entry until its priority drops below the others.
    frontier.insert_or_decrease("a", 1);

    assert_eq!(frontier.pop(), Some(("a", 1)));
    assert_eq!(frontier.pop(), Some(("b", 5)));
    assert_eq!(frontier.pop(), Some(("c", 8)));
}

#[test]
fn test_len_and_is_empty_track_pending_entries() {
    let mut frontier = Frontier::new(min_order);
    assert!(frontier.is_empty());

    frontier.insert_or_decrease("a", 1);
    frontier.insert_or_decrease("b", 2);
    frontier.insert_or_decrease("a", 3);
    assert_eq!(frontier.len(), 2);

    frontier.pop();
    assert_eq!(frontier.len(), 1);
    frontier.pop();
    assert!(frontier.is_empty());
}

#[test]
fn test_interleaved_inserts_and_pops_stay_ordered() {
    let mut frontier = Frontier::new(min_order);

    for (state, priority) in [(1u32, 30u32), (2, 10), (3, 20)] {
        frontier.insert_or_decrease(state, priority);
    }
    assert_eq!(frontier.pop(), Some((2, 10)));

    frontier.insert_or_decrease(4, 15);
    frontier.insert_or_decrease(1, 12);

    assert_eq!(frontier.pop(), Some((1, 12)));
    assert_eq!(frontier.pop(), Some((4, 15)));
    assert_eq!(frontier.pop(), Some((3, 20)));
    assert_eq!(frontier.pop(), None);
}
