use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::{AddOutcome, Catalog, CatalogError};
use crate::product::{Product, Sizes};

/// [`Catalog`] handle that can be shared between threads.
///
/// Writers take the lock exclusively, readers share it. Each convenience
/// method holds the lock only for the duration of the call; use
/// [`SharedCatalog::write`] to group several operations.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write()
    }

    pub fn add_product(&self, product: Product) -> Result<AddOutcome, CatalogError> {
        self.inner.write().add_product(product)
    }

    pub fn find_by_sku(&self, sku: &str) -> Option<Product> {
        self.inner.read().find_by_sku(sku).cloned()
    }

    pub fn find_by_name(&self, name: &str) -> Option<Product> {
        self.inner.read().find_by_name(name).cloned()
    }

    pub fn edit_description(
        &self,
        sku: &str,
        description: impl Into<String>,
    ) -> Result<(), CatalogError> {
        self.inner.write().edit_description(sku, description)
    }

    pub fn edit_sizes(&self, sku: &str, sizes: Sizes) -> Result<(), CatalogError> {
        self.inner.write().edit_sizes(sku, sizes)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
