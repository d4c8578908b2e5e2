use std::io::{self, BufRead, Write};

use sportstock::{Catalog, CatalogError, Product, Sizes};

use crate::render;

/// Word that ends size entry.
const DONE: &str = "done";

/// Interactive console menu over a [`Catalog`].
///
/// Reads commands line by line from `input` until `0` or end of input.
pub struct Menu<'a, R, W> {
    catalog: &'a mut Catalog,
    input: R,
    output: W,
}

impl<'a, R, W> Menu<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(catalog: &'a mut Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.add_product()?,
                "2" => self.find_by_sku()?,
                "3" => self.find_by_name()?,
                "4" => self.list_by_sku()?,
                "5" => self.list_by_name()?,
                "6" => self.edit_product()?,
                "7" => self.system_info()?,
                "0" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option, try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- SPORTING GOODS INVENTORY ---")?;
        writeln!(self.output, "1. Add product")?;
        writeln!(self.output, "2. Find product by SKU")?;
        writeln!(self.output, "3. Find product by name")?;
        writeln!(self.output, "4. List products by SKU")?;
        writeln!(self.output, "5. List products by name")?;
        writeln!(self.output, "6. Edit product")?;
        writeln!(self.output, "7. System info")?;
        writeln!(self.output, "0. Exit")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()
    }

    /// Next input line without the line terminator, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks for a quantity until a non-negative integer is entered.
    fn prompt_quantity(&mut self, label: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(raw) = self.prompt(&format!("Enter quantity for {label}: "))? else {
                return Ok(None);
            };
            match raw.parse::<u32>() {
                Ok(quantity) => return Ok(Some(quantity)),
                Err(_) => writeln!(self.output, "Quantity must be a non-negative integer.")?,
            }
        }
    }

    /// Reads `size`/`quantity` pairs into `sizes` until `done`.
    /// Returns `false` if input ended first.
    fn prompt_sizes(&mut self, sizes: &mut Sizes, text: &str) -> io::Result<bool> {
        loop {
            let Some(label) = self.prompt(text)? else {
                return Ok(false);
            };
            if label.eq_ignore_ascii_case(DONE) {
                return Ok(true);
            }
            if label.is_empty() {
                continue;
            }
            let Some(quantity) = self.prompt_quantity(&label)? else {
                return Ok(false);
            };
            sizes.insert(label, quantity);
        }
    }

    fn add_product(&mut self) -> io::Result<()> {
        let Some(sku) = self.prompt("Enter SKU: ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(());
        };
        let mut sizes = Sizes::new();
        if !self.prompt_sizes(&mut sizes, &format!("Enter size (or '{DONE}' to finish): "))? {
            return Ok(());
        }

        let product = match Product::new(sku, name, description, sizes) {
            Ok(product) => product,
            Err(e) => return writeln!(self.output, "Product not added: {e}."),
        };
        match self.catalog.add_product(product) {
            Ok(outcome) if outcome.is_fully_indexed() => {
                writeln!(self.output, "Product added.")
            }
            Ok(outcome) if outcome.is_ignored() => writeln!(
                self.output,
                "Product not added: SKU and name already exist."
            ),
            Ok(outcome) => {
                let taken = if outcome.sku.is_inserted() { "name" } else { "SKU" };
                writeln!(
                    self.output,
                    "Product added, but its {taken} already exists; that lookup keeps the existing product."
                )
            }
            Err(e) => writeln!(self.output, "Product not added: {e}."),
        }
    }

    fn find_by_sku(&mut self) -> io::Result<()> {
        let Some(sku) = self.prompt("Enter the SKU to search: ")? else {
            return Ok(());
        };
        let found = self.catalog.find_by_sku(&sku);
        Self::write_found(&mut self.output, found)
    }

    fn find_by_name(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter the name to search: ")? else {
            return Ok(());
        };
        let found = self.catalog.find_by_name(&name);
        Self::write_found(&mut self.output, found)
    }

    fn write_found(output: &mut W, product: Option<&Product>) -> io::Result<()> {
        match product {
            Some(product) => {
                writeln!(output, "Product found:")?;
                writeln!(output, "{product}")
            }
            None => writeln!(output, "Product not found."),
        }
    }

    fn list_by_sku(&mut self) -> io::Result<()> {
        writeln!(self.output, "Products by SKU:")?;
        let table = render::product_table(self.catalog.list_by_sku());
        self.write_table(table)
    }

    fn list_by_name(&mut self) -> io::Result<()> {
        writeln!(self.output, "Products by name:")?;
        let table = render::product_table(self.catalog.list_by_name());
        self.write_table(table)
    }

    fn write_table(&mut self, table: prettytable::Table) -> io::Result<()> {
        if table.is_empty() {
            return writeln!(self.output, "No products.");
        }
        table.print(&mut self.output).map(|_| ())
    }

    fn edit_product(&mut self) -> io::Result<()> {
        let Some(sku) = self.prompt("Enter the SKU of the product to edit: ")? else {
            return Ok(());
        };
        let Some(product) = self.catalog.find_by_sku(&sku).cloned() else {
            return writeln!(self.output, "Product not found.");
        };
        writeln!(self.output, "Current product:")?;
        writeln!(self.output, "{product}")?;
        writeln!(self.output)?;
        writeln!(self.output, "1. Edit description")?;
        writeln!(self.output, "2. Edit sizes and quantities")?;
        let Some(choice) = self.prompt("Choose an option: ")? else {
            return Ok(());
        };

        let result = match choice.as_str() {
            "1" => {
                let Some(description) = self.prompt("Enter new description: ")? else {
                    return Ok(());
                };
                self.catalog
                    .edit_description(&sku, description)
                    .map(|_| "Description updated.")
            }
            "2" => {
                let mut sizes = product.sizes().clone();
                let text = format!("Enter size to change (or '{DONE}' to finish): ");
                if !self.prompt_sizes(&mut sizes, &text)? {
                    return Ok(());
                }
                self.catalog
                    .edit_sizes(&sku, sizes)
                    .map(|_| "Sizes and quantities updated.")
            }
            _ => return writeln!(self.output, "Invalid option."),
        };
        match result {
            Ok(message) => writeln!(self.output, "{message}"),
            Err(CatalogError::NotFound(_)) => writeln!(self.output, "Product not found."),
            Err(e) => writeln!(self.output, "Edit failed: {e}."),
        }
    }

    fn system_info(&mut self) -> io::Result<()> {
        let info = self.catalog.system_info();
        writeln!(self.output, "{info}")
    }
}
