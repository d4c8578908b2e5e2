use prettytable::{Table, format, row};
use sportstock::{Product, Sizes};

/// Sizes in the same `label:quantity|...` form the inventory file uses.
pub fn format_sizes(sizes: &Sizes) -> String {
    sizes
        .iter()
        .map(|(label, quantity)| format!("{label}:{quantity}"))
        .collect::<Vec<_>>()
        .join("|")
}

pub fn product_table<'a>(products: impl IntoIterator<Item = &'a Product>) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["SKU", "Name", "Description", "Sizes", "Total"]);
    for product in products {
        table.add_row(row![
            product.sku(),
            product.name(),
            product.description(),
            format_sizes(product.sizes()),
            product.total_quantity()
        ]);
    }
    table
}
