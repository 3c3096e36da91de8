pub mod reader;

pub use reader::*;

use std::collections::BTreeMap;

/// Flat tag mapping: tag name → rendered value. BTreeMap keeps the keys
/// lexicographically sorted, which is also the output order.
pub type TagMap = BTreeMap<String, String>;
