use std::collections::BTreeMap;

use proptest::prelude::*;
use sportstock::prelude::*;

mod deep;

#[test]
fn traverse_yields_values_in_key_order() {
    let mut map = OrderedMap::new();
    map.insert("B".to_string(), 20);
    map.insert("A".to_string(), 10);
    map.insert("C".to_string(), 30);

    let values: Vec<i32> = map.traverse().copied().collect();
    assert_eq!(values, vec![10, 20, 30]);
}

#[test]
fn search_on_empty_map_is_absent() {
    let map = OrderedMap::<String, i32>::new();

    assert_eq!(map.search("anything"), None);
    assert_eq!(map.traverse().count(), 0);
}

#[test]
fn second_insert_of_key_is_reported_and_ignored() {
    let mut map = OrderedMap::new();

    assert!(map.insert("sku", 1).is_inserted());
    assert_eq!(map.insert("sku", 2), InsertOutcome::Ignored);
    assert_eq!(map.search(&"sku"), Some(&1));
}

proptest! {
    #[test]
    fn traversal_is_strictly_ascending(keys in prop::collection::vec(any::<i32>(), 0..256)) {
        let map: OrderedMap<i32, i32> = keys.iter().map(|k| (*k, *k)).collect();

        let traversed: Vec<i32> = map.keys().copied().collect();
        prop_assert!(traversed.windows(2).all(|w| w[0] < w[1]));
        let values: Vec<i32> = map.traverse().copied().collect();
        prop_assert_eq!(values, traversed);
    }

    #[test]
    fn first_insert_wins(pairs in prop::collection::vec((0u8..32, any::<u16>()), 0..128)) {
        let mut map = OrderedMap::new();
        let mut expected = BTreeMap::new();
        for (key, value) in &pairs {
            let outcome = map.insert(*key, *value);
            let fresh = !expected.contains_key(key);
            expected.entry(*key).or_insert(*value);
            prop_assert_eq!(outcome.is_inserted(), fresh);
        }

        prop_assert_eq!(map.len(), expected.len());
        for (key, value) in &expected {
            prop_assert_eq!(map.search(key), Some(value));
        }
        let entries: Vec<(u8, u16)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(u8, u16)> = expected.into_iter().collect();
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn insert_then_search_round_trips(key in ".{1,16}", value in any::<u64>()) {
        let mut map = OrderedMap::new();
        map.insert(key.clone(), value);

        prop_assert_eq!(map.search(key.as_str()), Some(&value));
    }

    #[test]
    fn absent_keys_are_not_found(
        keys in prop::collection::btree_set(0u32..1000, 0..64),
        probe in 1000u32..2000
    ) {
        let map: OrderedMap<u32, ()> = keys.into_iter().map(|k| (k, ())).collect();

        prop_assert_eq!(map.search(&probe), None);
        prop_assert!(!map.contains_key(&probe));
    }
}
