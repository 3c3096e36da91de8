use std::fs::File;
use std::path::Path;

use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use thiserror::Error;
use tracing::debug;

use crate::audio::AudioDecoder;
use crate::error::Error;

#[derive(Debug, Error)]
pub enum SymphoniaDecodeError {
    #[error("unrecognized or corrupt container: {0}")]
    Probe(String),

    #[error("no supported audio track found")]
    NoAudioTrack,

    #[error("decoder init failed: {0}")]
    DecoderInit(String),

    #[error("error while decoding packets: {0}")]
    Decode(String),

    #[error("no audio frames could be decoded")]
    NoFrames,

    #[error("stream does not declare a sample rate")]
    UnknownSampleRate,
}

impl From<SymphoniaDecodeError> for Error {
    fn from(e: SymphoniaDecodeError) -> Self {
        Error::Decode(e.to_string())
    }
}

#[derive(Default)]
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl AudioDecoder for SymphoniaDecoder {
    /// Decode the whole default track and derive the length from the
    /// decoded frame count, rather than trusting container headers.
    fn duration(&self, path: &Path) -> Result<f64, Error> {
        let file = File::open(path)?;
        let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
            .map_err(|e| SymphoniaDecodeError::Probe(e.to_string()))?;

        let mut format = probed.format;
        let track = format
            .default_track()
            .ok_or(SymphoniaDecodeError::NoAudioTrack)?;
        let track_id = track.id;
        let codec_params = track.codec_params.clone();

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| SymphoniaDecodeError::DecoderInit(e.to_string()))?;

        let mut sample_rate = codec_params.sample_rate;
        let mut total_frames: u64 = 0;

        loop {
            let packet = match format.next_packet() {
                Ok(p) => p,
                // Symphonia signals end of stream as an I/O error.
                Err(SymphoniaError::IoError(_)) => break,
                Err(SymphoniaError::ResetRequired) => {
                    decoder.reset();
                    continue;
                }
                Err(e) => return Err(SymphoniaDecodeError::Decode(e.to_string()).into()),
            };

            if packet.track_id() != track_id {
                continue;
            }

            match decoder.decode(&packet) {
                Ok(decoded) => {
                    sample_rate = Some(decoded.spec().rate);
                    total_frames += decoded.frames() as u64;
                }
                // Corrupt packet; skip it.
                Err(SymphoniaError::DecodeError(_)) => continue,
                Err(SymphoniaError::IoError(_)) => break,
                Err(SymphoniaError::ResetRequired) => decoder.reset(),
                Err(e) => return Err(SymphoniaDecodeError::Decode(e.to_string()).into()),
            }
        }

        if total_frames == 0 {
            return Err(SymphoniaDecodeError::NoFrames.into());
        }
        let rate = sample_rate.ok_or(SymphoniaDecodeError::UnknownSampleRate)?;

        let secs = total_frames as f64 / rate as f64;
        debug!(frames = total_frames, rate, secs, "decoded audio stream");
        Ok(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_wav(path: &Path, seconds: f64) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        let frames = (seconds * 44_100.0).round() as u32;
        for i in 0..frames {
            let sample = ((i as f32 * 0.03).sin() * 8_000.0) as i16;
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn reports_wav_duration_with_subsecond_precision() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        write_wav(&path, 3.0);

        let secs = SymphoniaDecoder::new().duration(&path).unwrap();
        assert!((secs - 3.0).abs() < 0.01, "got {secs}");
    }

    #[test]
    fn fractional_durations_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.wav");
        write_wav(&path, 1.25);

        let secs = SymphoniaDecoder::new().duration(&path).unwrap();
        assert!((secs - 1.25).abs() < 0.01, "got {secs}");
    }

    #[test]
    fn corrupt_bytes_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.mp3");
        std::fs::write(&path, b"this is not audio data, just text padding").unwrap();

        let err = SymphoniaDecoder::new().duration(&path).unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "got {err:?}");
    }

    #[test]
    fn missing_file_surfaces_io_error() {
        let err = SymphoniaDecoder::new()
            .duration(Path::new("/no/such/file.wav"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)), "got {err:?}");
    }
}
