//! Stable handle of a record inside the [`RecordStore`].
//!
//! Indexes hold a [`Link`] instead of a copy of the record, so every index
//! resolves to the same stored instance.
//!
//! [`RecordStore`]: crate::in_memory::RecordStore

use derive_more::{Display, From, Into};

use crate::mem_stat::MemStat;

#[derive(Copy, Clone, Debug, Display, From, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("#{}", _0)]
pub struct Link(u32);

impl Link {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl MemStat for Link {
    fn heap_size(&self) -> usize {
        0
    }

    fn used_size(&self) -> usize {
        0
    }
}
