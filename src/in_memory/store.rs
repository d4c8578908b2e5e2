use derive_more::{Display, Error};

use crate::mem_stat::MemStat;
use crate::util::Link;

/// Canonical storage of records.
///
/// Every record is stored exactly once and addressed by the [`Link`] returned
/// from [`RecordStore::insert`]. Records are never removed, so a link stays
/// valid for the lifetime of the store.
#[derive(Debug)]
pub struct RecordStore<Row> {
    rows: Vec<Row>,
}

impl<Row> Default for RecordStore<Row> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Row> RecordStore<Row> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn insert(&mut self, row: Row) -> Result<Link, ExecutionError> {
        let index = u32::try_from(self.rows.len()).map_err(|_| ExecutionError::StoreIsFull)?;
        self.rows.push(row);
        Ok(Link::from(index))
    }

    pub fn select(&self, link: Link) -> Result<&Row, ExecutionError> {
        self.rows
            .get(link.index())
            .ok_or(ExecutionError::InvalidLink(link))
    }

    pub fn with_mut_ref<Op, Res>(&mut self, link: Link, op: Op) -> Result<Res, ExecutionError>
    where
        Op: FnOnce(&mut Row) -> Res,
    {
        let row = self
            .rows
            .get_mut(link.index())
            .ok_or(ExecutionError::InvalidLink(link))?;
        Ok(op(row))
    }

    /// Count of saved rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<Row: MemStat> MemStat for RecordStore<Row> {
    fn heap_size(&self) -> usize {
        self.rows.heap_size()
    }

    fn used_size(&self) -> usize {
        self.rows.used_size()
    }
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ExecutionError {
    #[display("link {} does not point to a stored row", _0)]
    InvalidLink(#[error(not(source))] Link),

    #[display("record store cannot address more rows")]
    StoreIsFull,
}
