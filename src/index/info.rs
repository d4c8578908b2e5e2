use crate::mem_stat::MemStat;
use crate::index::OrderedMap;

/// Shape and size of one catalog index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexInfo {
    pub name: &'static str,
    pub entries: usize,
    pub height: usize,
    pub heap_size: usize,
}

impl IndexInfo {
    pub fn of<K, V>(name: &'static str, index: &OrderedMap<K, V>) -> Self
    where
        K: MemStat,
        V: MemStat,
    {
        Self {
            name,
            entries: index.len(),
            height: index.height(),
            heap_size: index.heap_size(),
        }
    }
}
