mod info;
mod ordered_map;

pub use info::IndexInfo;
pub use ordered_map::{InsertOutcome, Iter, Keys, OrderedMap, Values};
