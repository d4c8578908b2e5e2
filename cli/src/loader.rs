//! Inventory file ingestion.
//!
//! The file is a comma separated table with a header line followed by
//! `sku,name,description,sizes` records, where `sizes` is encoded as
//! `label:quantity` pairs joined with `|` (for example `S:10|M:15|L:8`).

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use derive_more::{Display, Error};
use serde::Deserialize;
use sportstock::{Catalog, CatalogError, Product, ProductError, Sizes};

const FIELD_COUNT: usize = 4;

#[derive(Debug, Deserialize)]
struct InventoryRow {
    sku: String,
    name: String,
    description: String,
    sizes: String,
}

/// Counters collected while loading an inventory file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Records stored in the catalog.
    pub loaded: usize,
    /// Records whose SKU or name was already indexed.
    pub duplicates: usize,
    /// Malformed lines that were skipped.
    pub skipped: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} loaded, {} with duplicate keys, {} skipped",
            self.loaded, self.duplicates, self.skipped
        )
    }
}

pub fn load_file(path: &Path, catalog: &mut Catalog, strict: bool) -> Result<LoadReport, LoadError> {
    let file = File::open(path).map_err(LoadError::Io)?;
    let report = load_from_reader(file, catalog, strict)?;
    tracing::info!(path = %path.display(), %report, "inventory loaded");
    Ok(report)
}

/// Loads records from `reader` into `catalog`.
///
/// Malformed lines are skipped with a warning, or abort the load when
/// `strict` is set.
pub fn load_from_reader<R: Read>(
    reader: R,
    catalog: &mut Catalog,
    strict: bool,
) -> Result<LoadReport, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut report = LoadReport::default();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            // Errors without a position come from the underlying reader.
            Err(e) if e.is_io_error() || e.position().is_none() => return Err(LoadError::Csv(e)),
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                let source = LineError::Decode(e.to_string());
                if strict {
                    return Err(LoadError::Malformed { line, source });
                }
                tracing::warn!(line, %source, "skipping undecodable inventory line");
                report.skipped += 1;
                continue;
            }
        };
        let line = record.position().map_or(0, |p| p.line());

        let product = match parse_record(&record) {
            Ok(product) => product,
            Err(source) if strict => return Err(LoadError::Malformed { line, source }),
            Err(source) => {
                tracing::warn!(line, %source, "skipping malformed inventory line");
                report.skipped += 1;
                continue;
            }
        };

        let outcome = catalog.add_product(product).map_err(LoadError::Catalog)?;
        if !outcome.is_ignored() {
            report.loaded += 1;
        }
        if !outcome.is_fully_indexed() {
            tracing::warn!(line, ?outcome, "inventory line repeats an existing SKU or name");
            report.duplicates += 1;
        }
    }

    Ok(report)
}

fn parse_record(record: &StringRecord) -> Result<Product, LineError> {
    if record.len() != FIELD_COUNT {
        return Err(LineError::FieldCount(record.len()));
    }
    let row: InventoryRow = record
        .deserialize(None)
        .map_err(|e| LineError::Decode(e.to_string()))?;
    let sizes = parse_sizes(&row.sizes)?;

    Product::new(row.sku, row.name, row.description, sizes).map_err(LineError::Product)
}

/// Parses `S:10|M:15|L:8` into a size map. An empty string yields no sizes.
pub fn parse_sizes(raw: &str) -> Result<Sizes, LineError> {
    let mut sizes = Sizes::new();
    for entry in raw.split('|').map(str::trim).filter(|e| !e.is_empty()) {
        let (label, quantity) = entry
            .split_once(':')
            .ok_or_else(|| LineError::SizeEntry(entry.to_string()))?;
        let label = label.trim();
        if label.is_empty() {
            return Err(LineError::SizeEntry(entry.to_string()));
        }
        let quantity = quantity.trim();
        let quantity = quantity
            .parse::<u32>()
            .map_err(|_| LineError::Quantity(quantity.to_string()))?;
        sizes.insert(label.to_string(), quantity);
    }
    Ok(sizes)
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum LineError {
    #[display("expected {} fields, found {}", FIELD_COUNT, _0)]
    FieldCount(#[error(not(source))] usize),
    #[display("size entry `{}` is not `label:quantity`", _0)]
    SizeEntry(#[error(not(source))] String),
    #[display("quantity `{}` is not a non-negative integer", _0)]
    Quantity(#[error(not(source))] String),
    #[display("cannot decode record: {}", _0)]
    Decode(#[error(not(source))] String),
    Product(ProductError),
}

#[derive(Debug, Display, Error)]
pub enum LoadError {
    #[display("cannot open inventory file: {}", _0)]
    Io(std::io::Error),
    #[display("cannot read inventory: {}", _0)]
    Csv(csv::Error),
    #[display("line {}: {}", line, source)]
    Malformed { line: u64, source: LineError },
    Catalog(CatalogError),
}
