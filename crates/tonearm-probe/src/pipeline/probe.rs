use std::path::{Path, PathBuf};

use tracing::debug;

use crate::audio::AudioDecoder;
use crate::error::Error;
use crate::format::{SupportedFormat, raw_extension};
use crate::metadata::{MetadataReader, TagMap};

#[derive(Default)]
pub struct ProbeBuilder {
    decoder: Option<Box<dyn AudioDecoder + Send + Sync>>,
    reader: Option<Box<dyn MetadataReader + Send + Sync>>,
}

impl ProbeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decoder<D: AudioDecoder + Send + Sync + 'static>(mut self, d: D) -> Self {
        self.decoder = Some(Box::new(d));
        self
    }

    pub fn with_reader<R: MetadataReader + Send + Sync + 'static>(mut self, r: R) -> Self {
        self.reader = Some(Box::new(r));
        self
    }

    pub fn build(self) -> Probe {
        Probe {
            decoder: self.decoder.unwrap_or_else(default_decoder),
            reader: self.reader.unwrap_or_else(default_reader),
        }
    }
}

pub fn default_decoder() -> Box<dyn AudioDecoder + Send + Sync> {
    #[cfg(feature = "symphonia")]
    {
        Box::new(crate::audio::decoder::SymphoniaDecoder::new())
    }
    #[cfg(not(feature = "symphonia"))]
    {
        Box::new(crate::audio::decoder::NoopDecoder)
    }
}

pub fn default_reader() -> Box<dyn MetadataReader + Send + Sync> {
    #[cfg(feature = "lofty")]
    {
        Box::new(crate::metadata::LoftyReader::new())
    }
    #[cfg(not(feature = "lofty"))]
    {
        Box::new(crate::metadata::NoopReader)
    }
}

/// One full inspection of a single file. Only the duration lookup is
/// fatal; the tag outcome is carried as data so callers can downgrade a
/// metadata failure to a warning.
#[derive(Debug)]
pub struct Inspection {
    pub path: PathBuf,
    pub format: SupportedFormat,
    pub duration_secs: f64,
    pub tags: Result<TagMap, Error>,
}

pub struct Probe {
    decoder: Box<dyn AudioDecoder + Send + Sync>,
    reader: Box<dyn MetadataReader + Send + Sync>,
}

impl Probe {
    pub fn builder() -> ProbeBuilder {
        ProbeBuilder::default()
    }

    /// Playback length of `path` in seconds.
    pub fn duration<P: AsRef<Path>>(&self, path: P) -> Result<f64, Error> {
        self.decoder.duration(path.as_ref())
    }

    /// Embedded tags of `path`, flattened.
    pub fn tags<P: AsRef<Path>>(&self, path: P) -> Result<TagMap, Error> {
        self.reader.read(path.as_ref())
    }

    /// Validate the path and extension, then run both lookups.
    pub fn inspect<P: AsRef<Path>>(&self, path: P) -> Result<Inspection, Error> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let format = SupportedFormat::from_path(path)
            .ok_or_else(|| Error::UnsupportedFormat(raw_extension(path)))?;

        debug!(path = %path.display(), %format, "inspecting");
        let duration_secs = self.duration(path)?;
        let tags = self.tags(path);

        Ok(Inspection {
            path: path.to_path_buf(),
            format,
            duration_secs,
            tags,
        })
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::builder().build()
    }
}
