use sportstock::prelude::*;

use crate::{product, sizes};

mod edit;

#[test]
fn add_and_find_by_both_keys() {
    let mut catalog = Catalog::new();
    let shirt = product("123", "Shirt", "d", &[("M", 5), ("L", 3)]);

    let outcome = catalog.add_product(shirt.clone()).unwrap();

    assert!(outcome.is_fully_indexed());
    assert_eq!(catalog.find_by_sku("123"), Some(&shirt));
    assert_eq!(catalog.find_by_name("Shirt"), Some(&shirt));
    assert_eq!(catalog.find_by_sku("999"), None);
    assert_eq!(catalog.find_by_name("Pants"), None);
}

#[test]
fn both_lookups_resolve_to_the_same_record() {
    let mut catalog = Catalog::new();
    catalog
        .add_product(product("123", "Shirt", "d", &[]))
        .unwrap();

    let by_sku = catalog.find_by_sku("123").unwrap();
    let by_name = catalog.find_by_name("Shirt").unwrap();
    assert!(std::ptr::eq(by_sku, by_name));
}

#[test]
fn duplicate_sku_returns_first_record() {
    let mut catalog = Catalog::new();
    let first = product("A", "Running shoe", "first", &[("42", 1)]);
    let second = product("A", "Trail shoe", "second", &[("43", 2)]);

    catalog.add_product(first.clone()).unwrap();
    let outcome = catalog.add_product(second.clone()).unwrap();

    assert_eq!(outcome.sku, InsertOutcome::Ignored);
    assert_eq!(outcome.name, InsertOutcome::Inserted);
    assert_eq!(catalog.find_by_sku("A"), Some(&first));
    // The name index still accepted the second record.
    assert_eq!(catalog.find_by_name("Trail shoe"), Some(&second));
}

#[test]
fn duplicate_name_keeps_first_in_name_index() {
    let mut catalog = Catalog::new();
    let first = product("1", "Cap", "first", &[]);
    let second = product("2", "Cap", "second", &[]);

    catalog.add_product(first.clone()).unwrap();
    let outcome = catalog.add_product(second.clone()).unwrap();

    assert_eq!(outcome.sku, InsertOutcome::Inserted);
    assert_eq!(outcome.name, InsertOutcome::Ignored);
    assert_eq!(catalog.find_by_name("Cap"), Some(&first));
    assert_eq!(catalog.find_by_sku("2"), Some(&second));
}

#[test]
fn lists_are_ordered_by_their_key() {
    let mut catalog = Catalog::new();
    for (sku, name) in [("300", "Ball"), ("100", "Shorts"), ("200", "Jersey")] {
        catalog.add_product(product(sku, name, "", &[])).unwrap();
    }

    let skus: Vec<&str> = catalog.list_by_sku().map(|p| p.sku()).collect();
    let names: Vec<&str> = catalog.list_by_name().map(|p| p.name()).collect();

    assert_eq!(skus, vec!["100", "200", "300"]);
    assert_eq!(names, vec!["Ball", "Jersey", "Shorts"]);
}

#[test]
fn empty_catalog_lists_nothing() {
    let catalog = Catalog::new();

    assert!(catalog.is_empty());
    assert_eq!(catalog.list_by_sku().count(), 0);
    assert_eq!(catalog.list_by_name().count(), 0);
}

#[test]
fn membership_of_both_indexes_matches_when_keys_are_unique() {
    let mut catalog = Catalog::new();
    for i in 0..50 {
        let sku = format!("{:03}", (i * 37) % 50);
        let name = format!("Product {}", (i * 13) % 50);
        catalog
            .add_product(product(&sku, &name, "", &[("M", i)]))
            .unwrap();
    }

    let mut by_sku: Vec<&Product> = catalog.list_by_sku().collect();
    let mut by_name: Vec<&Product> = catalog.list_by_name().collect();
    by_sku.sort_by(|a, b| a.sku().cmp(b.sku()));
    by_name.sort_by(|a, b| a.sku().cmp(b.sku()));

    assert_eq!(by_sku.len(), 50);
    assert_eq!(by_sku, by_name);
    assert_eq!(catalog.find_by_sku("007").unwrap().sizes(), &sizes(&[("M", 11)]));
}
