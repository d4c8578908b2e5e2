use std::collections::BTreeMap;
use std::fmt;

use derive_more::{Display, Error};

use crate::mem_stat::MemStat;

/// Available quantity per size label.
pub type Sizes = BTreeMap<String, u32>;

/// Sporting-goods product stored in the catalog.
///
/// `sku` and `name` identify the product and are used as index keys, so they
/// are fixed at construction. `description` and `sizes` may be edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    sku: String,
    name: String,
    description: String,
    sizes: Sizes,
}

impl Product {
    /// Creates a product. Blank `sku` or `name` is rejected.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        sizes: Sizes,
    ) -> Result<Self, ProductError> {
        let sku = sku.into();
        let name = name.into();
        if sku.trim().is_empty() {
            return Err(ProductError::EmptySku);
        }
        if name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }

        Ok(Self {
            sku,
            name,
            description: description.into(),
            sizes,
        })
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sizes(&self) -> &Sizes {
        &self.sizes
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the whole size map.
    pub fn set_sizes(&mut self, sizes: Sizes) {
        self.sizes = sizes;
    }

    /// Sum of quantities over all sizes.
    pub fn total_quantity(&self) -> u64 {
        self.sizes.values().map(|&q| u64::from(q)).sum()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SKU: {}, Name: {}, Description: {}, Sizes: {{",
            self.sku, self.name, self.description
        )?;
        for (i, (label, quantity)) in self.sizes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{label}={quantity}")?;
        }
        f.write_str("}")
    }
}

impl MemStat for Product {
    fn heap_size(&self) -> usize {
        self.sku.heap_size()
            + self.name.heap_size()
            + self.description.heap_size()
            + self.sizes.heap_size()
    }

    fn used_size(&self) -> usize {
        self.sku.used_size()
            + self.name.used_size()
            + self.description.used_size()
            + self.sizes.used_size()
    }
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProductError {
    #[display("product SKU must not be empty")]
    EmptySku,
    #[display("product name must not be empty")]
    EmptyName,
}
