pub mod shared;
pub mod system_info;

use derive_more::{Display, Error};

use crate::in_memory::{self, RecordStore};
use crate::index::{InsertOutcome, OrderedMap};
use crate::product::{Product, Sizes};
use crate::util::Link;

/// Product catalog indexed by SKU and by name.
///
/// Products live once in the [`RecordStore`]. Both indexes map their key to
/// the product's [`Link`], so an edit made through one lookup path is seen
/// through the other.
#[derive(Debug, Default)]
pub struct Catalog {
    data: RecordStore<Product>,

    by_sku: OrderedMap<String, Link>,

    by_name: OrderedMap<String, Link>,
}

/// Per-index result of [`Catalog::add_product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    pub sku: InsertOutcome,
    pub name: InsertOutcome,
}

impl AddOutcome {
    /// Product is reachable through both indexes.
    pub fn is_fully_indexed(&self) -> bool {
        self.sku.is_inserted() && self.name.is_inserted()
    }

    /// Both keys were taken, product was not stored.
    pub fn is_ignored(&self) -> bool {
        !self.sku.is_inserted() && !self.name.is_inserted()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of stored products.
    pub fn len(&self) -> usize {
        self.data.row_count()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Adds `product` to both indexes.
    ///
    /// An index that already holds the product's key keeps its existing
    /// entry; the other index still takes the new product. If both keys are
    /// taken the product is dropped.
    pub fn add_product(&mut self, product: Product) -> Result<AddOutcome, CatalogError> {
        let sku_taken = self.by_sku.contains_key(product.sku());
        let name_taken = self.by_name.contains_key(product.name());
        if sku_taken && name_taken {
            tracing::debug!(
                sku = product.sku(),
                name = product.name(),
                "product ignored, SKU and name already indexed"
            );
            return Ok(AddOutcome {
                sku: InsertOutcome::Ignored,
                name: InsertOutcome::Ignored,
            });
        }

        let sku = product.sku().to_string();
        let name = product.name().to_string();
        let link = self
            .data
            .insert(product)
            .map_err(CatalogError::StoreError)?;

        let outcome = AddOutcome {
            sku: self.by_sku.insert(sku.clone(), link),
            name: self.by_name.insert(name.clone(), link),
        };
        if outcome.is_fully_indexed() {
            tracing::trace!(%link, sku = %sku, name = %name, "product added");
        } else {
            tracing::debug!(
                %link,
                sku = %sku,
                name = %name,
                sku_taken,
                name_taken,
                "product only partially indexed, key already present"
            );
        }

        Ok(outcome)
    }

    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        let link = self.by_sku.search(sku)?;
        self.data.select(*link).ok()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        let link = self.by_name.search(name)?;
        self.data.select(*link).ok()
    }

    /// Products in ascending SKU order.
    pub fn list_by_sku(&self) -> impl Iterator<Item = &Product> + '_ {
        self.by_sku
            .traverse()
            .filter_map(move |link| self.data.select(*link).ok())
    }

    /// Products in ascending name order.
    pub fn list_by_name(&self) -> impl Iterator<Item = &Product> + '_ {
        self.by_name
            .traverse()
            .filter_map(move |link| self.data.select(*link).ok())
    }

    pub fn edit_description(
        &mut self,
        sku: &str,
        description: impl Into<String>,
    ) -> Result<(), CatalogError> {
        let description = description.into();
        self.update_by_sku(sku, |product| product.set_description(description))?;
        tracing::debug!(sku, "description updated");
        Ok(())
    }

    /// Replaces the sizes of the product with `sku`. Sizes are not merged.
    pub fn edit_sizes(&mut self, sku: &str, sizes: Sizes) -> Result<(), CatalogError> {
        self.update_by_sku(sku, |product| product.set_sizes(sizes))?;
        tracing::debug!(sku, "sizes updated");
        Ok(())
    }

    fn update_by_sku<Op>(&mut self, sku: &str, op: Op) -> Result<(), CatalogError>
    where
        Op: FnOnce(&mut Product),
    {
        let Some(link) = self.by_sku.search(sku).copied() else {
            return Err(CatalogError::NotFound(sku.to_string()));
        };
        self.data
            .with_mut_ref(link, op)
            .map_err(CatalogError::StoreError)
    }
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[display("product with SKU `{}` not found", _0)]
    NotFound(#[error(not(source))] String),
    StoreError(in_memory::ExecutionError),
}
