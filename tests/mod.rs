use sportstock::prelude::*;

mod catalog;
mod ordered_map;

pub fn sizes(pairs: &[(&str, u32)]) -> Sizes {
    pairs
        .iter()
        .map(|(label, quantity)| (label.to_string(), *quantity))
        .collect()
}

pub fn product(sku: &str, name: &str, description: &str, pairs: &[(&str, u32)]) -> Product {
    Product::new(sku, name, description, sizes(pairs)).unwrap()
}
