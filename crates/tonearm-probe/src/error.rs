use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("unsupported format: {0:?} (only mp3 and wav are allowed)")]
    UnsupportedFormat(String),

    #[error("audio decoder not enabled (build with the `symphonia` feature)")]
    DecodingUnavailable,

    #[error("could not decode audio: {0}. Check that the file is intact and the codec is supported")]
    Decode(String),

    #[error("metadata reader not enabled (build with the `lofty` feature)")]
    MetadataUnavailable,

    #[error("could not read metadata: {0}")]
    MetadataRead(String),

    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
}
