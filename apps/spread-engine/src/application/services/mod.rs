//! Application Services
//!
//! Application services coordinate domain logic over batches of orders and
//! positions.

mod spread_collection;

pub use spread_collection::{ClassifiedBatch, SpreadCollection, classify_all};
