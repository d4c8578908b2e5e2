use sportstock::prelude::*;

use crate::{product, sizes};

#[test]
fn edit_description_is_visible_through_name_index() {
    let mut catalog = Catalog::new();
    catalog
        .add_product(product("123", "Shirt", "d", &[("M", 5)]))
        .unwrap();

    catalog.edit_description("123", "X").unwrap();

    assert_eq!(catalog.find_by_name("Shirt").unwrap().description(), "X");
    assert_eq!(catalog.find_by_sku("123").unwrap().description(), "X");
}

#[test]
fn edit_sizes_replaces_instead_of_merging() {
    let mut catalog = Catalog::new();
    catalog
        .add_product(product("123", "Shirt", "d", &[("M", 5), ("L", 3)]))
        .unwrap();

    catalog.edit_sizes("123", sizes(&[("S", 10)])).unwrap();

    let shirt = catalog.find_by_name("Shirt").unwrap();
    assert_eq!(shirt.sizes(), &sizes(&[("S", 10)]));
}

#[test]
fn edit_of_missing_sku_reports_not_found() {
    let mut catalog = Catalog::new();
    catalog.add_product(product("1", "Ball", "", &[])).unwrap();

    let err = catalog.edit_description("2", "nope").unwrap_err();

    assert_eq!(err, CatalogError::NotFound("2".to_string()));
    assert_eq!(catalog.find_by_sku("1").unwrap().description(), "");
}

#[test]
fn edit_goes_to_the_record_held_by_the_sku_index() {
    let mut catalog = Catalog::new();
    catalog.add_product(product("A", "First", "", &[])).unwrap();
    catalog.add_product(product("A", "Second", "", &[])).unwrap();

    catalog.edit_description("A", "edited").unwrap();

    assert_eq!(catalog.find_by_name("First").unwrap().description(), "edited");
    assert_eq!(catalog.find_by_name("Second").unwrap().description(), "");
}

#[test]
fn identity_fields_survive_edits() {
    let mut catalog = Catalog::new();
    catalog.add_product(product("9", "Glove", "", &[])).unwrap();

    catalog.edit_description("9", "leather").unwrap();
    catalog.edit_sizes("9", sizes(&[("XL", 1)])).unwrap();

    let glove = catalog.find_by_sku("9").unwrap();
    assert_eq!(glove.sku(), "9");
    assert_eq!(glove.name(), "Glove");
}
