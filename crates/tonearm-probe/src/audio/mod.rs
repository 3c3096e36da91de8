pub mod decoder;

use crate::error::Error;
use std::path::Path;

/// Resolves the total playback length of an audio file.
pub trait AudioDecoder {
    /// Duration in seconds, with sub-second precision.
    fn duration(&self, path: &Path) -> Result<f64, Error>;
}
