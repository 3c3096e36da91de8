#[cfg(feature = "symphonia")]
pub mod symphonia_native;

#[cfg(feature = "symphonia")]
pub use symphonia_native::SymphoniaDecoder;

use crate::audio::AudioDecoder;
use crate::error::Error;
use std::path::Path;

#[derive(Default)]
pub struct NoopDecoder;

impl AudioDecoder for NoopDecoder {
    fn duration(&self, _path: &Path) -> Result<f64, Error> {
        Err(Error::DecodingUnavailable)
    }
}
