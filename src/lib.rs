pub mod catalog;
pub mod in_memory;
mod index;
pub mod mem_stat;
mod product;
pub mod util;

pub use catalog::shared::SharedCatalog;
pub use catalog::system_info::CatalogInfo;
pub use catalog::{AddOutcome, Catalog, CatalogError};
pub use index::*;
pub use product::{Product, ProductError, Sizes};

pub mod prelude {
    pub use crate::in_memory::{ExecutionError, RecordStore};
    pub use crate::mem_stat::MemStat;
    pub use crate::util::Link;
    pub use crate::{
        AddOutcome, Catalog, CatalogError, CatalogInfo, IndexInfo, InsertOutcome, OrderedMap,
        Product, ProductError, SharedCatalog, Sizes,
    };
}
