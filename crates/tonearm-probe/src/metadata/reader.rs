#[cfg(feature = "lofty")]
pub mod lofty;

#[cfg(feature = "lofty")]
pub use self::lofty::LoftyReader;

use crate::error::Error;
use crate::metadata::TagMap;
use std::path::Path;

pub trait MetadataReader {
    /// Read the embedded tags of `path` into a flat mapping.
    /// An untagged file yields an empty map, not an error.
    fn read(&self, path: &Path) -> Result<TagMap, Error>;
}

#[derive(Default)]
pub struct NoopReader;

impl MetadataReader for NoopReader {
    fn read(&self, _path: &Path) -> Result<TagMap, Error> {
        Err(Error::MetadataUnavailable)
    }
}
