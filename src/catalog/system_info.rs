use std::fmt::{self, Display};

use prettytable::{Table, format, row};

use crate::catalog::Catalog;
use crate::index::IndexInfo;
use crate::mem_stat::MemStat;

/// Snapshot of catalog size and index shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogInfo {
    pub records: usize,
    pub sku_index: IndexInfo,
    pub name_index: IndexInfo,
    pub heap_size: usize,
    pub used_size: usize,
}

impl Catalog {
    pub fn system_info(&self) -> CatalogInfo {
        let sku_index = IndexInfo::of("sku", &self.by_sku);
        let name_index = IndexInfo::of("name", &self.by_name);
        CatalogInfo {
            records: self.len(),
            heap_size: self.data.heap_size() + sku_index.heap_size + name_index.heap_size,
            used_size: self.data.used_size() + self.by_sku.used_size() + self.by_name.used_size(),
            sku_index,
            name_index,
        }
    }
}

impl CatalogInfo {
    pub fn pretty(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Index", "Entries", "Height", "Heap (bytes)"]);
        for index in [&self.sku_index, &self.name_index] {
            table.add_row(row![index.name, index.entries, index.height, index.heap_size]);
        }
        table
    }
}

impl Display for CatalogInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Records: {} | Heap: {} bytes | Used: {} bytes",
            self.records, self.heap_size, self.used_size
        )?;
        write!(f, "{}", self.pretty())
    }
}
