use super::*;

/// Builds `values` as a chain in a fresh pool, returning the pool and ids.
fn chain<T>(values: Vec<T>) -> (NodePool<T>, Vec<NodeId>) {
    let mut pool = NodePool::new();
    let ids: Vec<NodeId> = values.into_iter().map(|v| pool.push(v)).collect();
    for pair in ids.windows(2) {
        pool.link(pair[0], Some(pair[1]));
    }
    (pool, ids)
}

#[test]
fn test_insert_and_display() {
    let list: LinkedList<_> = ["a", "b", "c"].into_iter().collect();
    assert_eq!(list.to_string(), "a -> b -> c");
    assert_eq!(list.len(), 3);
    assert_eq!(list.peek_first(), Some(&"a"));
    assert_eq!(list.peek(), Some(&"c"));
}

#[test]
fn test_empty_list() {
    let mut list: LinkedList<i32> = LinkedList::new();
    assert_eq!(list.to_string(), "Empty List");
    assert!(list.is_empty());
    assert_eq!(list.pop(), None);
    assert_eq!(list.shift(), None);
    assert_eq!(list.peek(), None);
    assert_eq!(list.peek_first(), None);
    assert_eq!(list.delete(&1), None);
}

#[test]
fn test_delete_head_middle_tail() {
    let mut list: LinkedList<_> = (1..=5).collect();

    assert_eq!(list.delete(&1), Some(1));
    assert_eq!(list.peek_first(), Some(&2));

    assert_eq!(list.delete(&3), Some(3));
    assert_eq!(list.to_string(), "2 -> 4 -> 5");

    assert_eq!(list.delete(&5), Some(5));
    assert_eq!(list.peek(), Some(&4));

    // tail still appendable after the tail was removed
    list.insert(6);
    assert_eq!(list.to_string(), "2 -> 4 -> 6");
    assert_eq!(list.len(), 3);

    assert_eq!(list.delete(&42), None);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_delete_only_element() {
    let mut list: LinkedList<_> = std::iter::once(7).collect();
    assert_eq!(list.delete(&7), Some(7));
    assert!(list.is_empty());
    assert_eq!(list.peek(), None);
    list.insert(8);
    assert_eq!(list.peek_first(), Some(&8));
    assert_eq!(list.peek(), Some(&8));
}

#[test]
fn test_delete_by_first_match_only() {
    let mut list: LinkedList<_> = vec![1, 4, 6, 8].into_iter().collect();
    assert_eq!(list.delete_by(|v| v % 2 == 0), Some(4));
    assert_eq!(list.to_string(), "1 -> 6 -> 8");
}

#[test]
fn test_pop_and_shift() {
    let mut list: LinkedList<_> = (1..=3).collect();
    assert_eq!(list.pop(), Some(3));
    assert_eq!(list.peek(), Some(&2));
    assert_eq!(list.shift(), Some(1));
    assert_eq!(list.peek_first(), Some(&2));
    assert_eq!(list.pop(), Some(2));
    assert!(list.is_empty());
    assert_eq!(list.to_string(), "Empty List");
}

#[test]
fn test_search_and_find() {
    let list: LinkedList<_> = vec!["apple", "banana", "cherry"].into_iter().collect();
    assert!(list.search(&"banana"));
    assert!(!list.search(&"durian"));
    assert_eq!(list.find(|fruit| fruit.starts_with('c')), Some(&"cherry"));
    assert_eq!(list.find(|fruit| fruit.is_empty()), None);
}

#[test]
fn test_iter_is_restartable() {
    let list: LinkedList<_> = (1..=4).collect();
    let first: Vec<_> = list.iter().copied().collect();
    let second: Vec<_> = (&list).into_iter().copied().collect();
    assert_eq!(first, vec![1, 2, 3, 4]);
    assert_eq!(first, second);
    assert_eq!(format!("{:?}", list), "[1, 2, 3, 4]");
}

#[test]
fn test_cycle_detection_finds_entry() {
    // root -> n2 -> n3 -> n4 -> n2
    let (mut pool, ids) = chain(vec!["root", "n2", "n3", "n4"]);
    pool.link(ids[3], Some(ids[1]));
    assert_eq!(LinkedList::cycle(&pool, ids[0]), Some(ids[1]));
}

#[test]
fn test_cycle_detection_acyclic() {
    let (pool, ids) = chain(vec![1, 2, 3, 4, 5]);
    assert_eq!(LinkedList::cycle(&pool, ids[0]), None);

    let (pool, ids) = chain(vec![1]);
    assert_eq!(LinkedList::cycle(&pool, ids[0]), None);
}

#[test]
fn test_cycle_detection_self_loop_and_full_ring() {
    let (mut pool, ids) = chain(vec![1]);
    pool.link(ids[0], Some(ids[0]));
    assert_eq!(LinkedList::cycle(&pool, ids[0]), Some(ids[0]));

    let (mut pool, ids) = chain(vec![1, 2, 3]);
    pool.link(ids[2], Some(ids[0]));
    assert_eq!(LinkedList::cycle(&pool, ids[0]), Some(ids[0]));
}

#[test]
fn test_cycle_detection_long_tail() {
    // 0 -> 1 -> ... -> 9 -> 6
    let (mut pool, ids) = chain((0..10).collect());
    pool.link(ids[9], Some(ids[6]));
    assert_eq!(LinkedList::cycle(&pool, ids[0]), Some(ids[6]));
}

#[test]
fn test_from_chain_severs_cycle() {
    let (mut pool, ids) = chain(vec!["root", "n2", "n3", "n4"]);
    pool.link(ids[3], Some(ids[1]));

    let list = LinkedList::from_chain(pool, ids[0]);
    assert_eq!(list.len(), 4);
    assert_eq!(list.peek(), Some(&"n4"));
    assert_eq!(list.to_string(), "root -> n2 -> n3 -> n4");
}

#[test]
fn test_from_chain_ring_through_root() {
    let (mut pool, ids) = chain(vec![1, 2, 3]);
    pool.link(ids[2], Some(ids[0]));

    let mut list = LinkedList::from_chain(pool, ids[0]);
    assert_eq!(list.to_string(), "1 -> 2 -> 3");
    assert_eq!(list.pop(), Some(3));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_from_chain_acyclic_and_partial() {
    let (pool, ids) = chain(vec![1, 2, 3, 4]);

    // Starting mid-chain drops the unreachable prefix
    let mut list = LinkedList::from_chain(pool, ids[2]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.to_string(), "3 -> 4");

    list.insert(5);
    assert_eq!(list.to_string(), "3 -> 4 -> 5");
}

#[test]
fn test_from_chain_unknown_root() {
    let (mut pool, ids) = chain(vec![1, 2]);
    pool.remove(ids[0]);
    let list = LinkedList::from_chain(pool, ids[0]);
    assert!(list.is_empty());
}

#[test]
fn test_from_chain_list_is_fully_usable() {
    let (mut pool, ids) = chain(vec![10, 20, 30]);
    pool.link(ids[2], Some(ids[1]));

    let mut list = LinkedList::from_chain(pool, ids[0]);
    assert_eq!(list.delete(&30), Some(30));
    assert_eq!(list.peek(), Some(&20));
    list.insert(40);
    assert_eq!(list.to_string(), "10 -> 20 -> 40");
    assert_eq!(list.iter().count(), list.len());
}
