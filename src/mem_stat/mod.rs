use std::collections::BTreeMap;

use crate::index::OrderedMap;

pub trait MemStat {
    fn heap_size(&self) -> usize;
    fn used_size(&self) -> usize;
}

macro_rules! impl_plain_mem_stat {
    ($($t:ty),*) => {
        $(
            impl MemStat for $t {
                fn heap_size(&self) -> usize {
                    0
                }
                fn used_size(&self) -> usize {
                    0
                }
            }
        )*
    };
}

impl_plain_mem_stat!(u8, u16, u32, u64, i32, i64, usize, ());

impl<T: MemStat> MemStat for Vec<T> {
    fn heap_size(&self) -> usize {
        self.capacity() * std::mem::size_of::<T>()
            + self.iter().map(|v| v.heap_size()).sum::<usize>()
    }
    fn used_size(&self) -> usize {
        self.len() * std::mem::size_of::<T>() + self.iter().map(|v| v.used_size()).sum::<usize>()
    }
}

impl MemStat for String {
    fn heap_size(&self) -> usize {
        self.capacity()
    }
    fn used_size(&self) -> usize {
        self.len()
    }
}

impl<K: MemStat, V: MemStat> MemStat for BTreeMap<K, V> {
    // Node layout of the std B-tree is private, so only entries are counted.
    fn heap_size(&self) -> usize {
        let entry_size = std::mem::size_of::<(K, V)>();
        self.iter()
            .map(|(k, v)| entry_size + k.heap_size() + v.heap_size())
            .sum()
    }
    fn used_size(&self) -> usize {
        let entry_size = std::mem::size_of::<(K, V)>();
        self.iter()
            .map(|(k, v)| entry_size + k.used_size() + v.used_size())
            .sum()
    }
}

impl<K: MemStat, V: MemStat> MemStat for OrderedMap<K, V> {
    fn heap_size(&self) -> usize {
        let base_heap = self.len() * OrderedMap::<K, V>::NODE_SIZE;

        let kv_heap: usize = self
            .iter()
            .map(|(k, v)| k.heap_size() + v.heap_size())
            .sum();

        base_heap + kv_heap
    }

    fn used_size(&self) -> usize {
        let base = self.len() * OrderedMap::<K, V>::NODE_SIZE;

        let used: usize = self
            .iter()
            .map(|(k, v)| k.used_size() + v.used_size())
            .sum();

        base + used
    }
}
