use sportstock::prelude::*;

const DEPTH: u32 = 20_000;

#[test]
fn sorted_inserts_build_a_degenerate_tree() {
    let mut map = OrderedMap::new();
    for key in 0..DEPTH {
        map.insert(key, key * 2);
    }

    assert_eq!(map.height(), DEPTH as usize);
    assert_eq!(map.search(&(DEPTH - 1)), Some(&((DEPTH - 1) * 2)));
    assert_eq!(map.search(&DEPTH), None);
    assert_eq!(map.traverse().len(), DEPTH as usize);
    assert!(map.keys().copied().eq(0..DEPTH));

    drop(map);
}

#[test]
fn reverse_sorted_inserts_are_searchable() {
    let map: OrderedMap<u32, u32> = (0..DEPTH).rev().map(|k| (k, k)).collect();

    assert_eq!(map.height(), DEPTH as usize);
    assert_eq!(map.search(&0), Some(&0));
    assert_eq!(map.traverse().next(), Some(&0));
}
