pub mod audio;
pub mod error;
pub mod format;
pub mod metadata;
pub mod pipeline;

use std::path::Path;

pub use error::Error;
pub use pipeline::{Inspection, Probe, ProbeBuilder};

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::format::{SupportedFormat, is_supported_media};
    pub use crate::metadata::TagMap;
    pub use crate::pipeline::{Inspection, Probe, ProbeBuilder};
}

/// Inspect `path` with the default capabilities.
pub fn inspect<P: AsRef<Path>>(path: P) -> Result<Inspection, Error> {
    Probe::default().inspect(path)
}
