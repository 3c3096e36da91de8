use std::path::Path;

/// Supported container formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportedFormat {
    Mp3,
    Wav,
}

impl SupportedFormat {
    pub const ALL: &'static [SupportedFormat] = &[SupportedFormat::Mp3, SupportedFormat::Wav];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedFormat::Mp3 => "mp3",
            SupportedFormat::Wav => "wav",
        }
    }

    /// Classify a path by its extension alone. Case-insensitive,
    /// an extensionless path yields `None`.
    pub fn from_path(path: &Path) -> Option<SupportedFormat> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        ext.parse().ok()
    }
}

impl std::str::FromStr for SupportedFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim_start_matches('.').to_ascii_lowercase();
        SupportedFormat::ALL
            .iter()
            .find(|fmt| fmt.as_str() == lower)
            .copied()
            .ok_or_else(|| format!("Extension not supported: {}", s))
    }
}

impl std::fmt::Display for SupportedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn is_supported_media(path: &Path) -> bool {
    SupportedFormat::from_path(path).is_some()
}

/// The raw extension of a path, lower-cased and dot-stripped.
/// Used for error messages; `""` when the path has none.
pub fn raw_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn classifies_supported_extensions() {
        assert_eq!(
            SupportedFormat::from_path(Path::new("song.mp3")),
            Some(SupportedFormat::Mp3)
        );
        assert_eq!(
            SupportedFormat::from_path(Path::new("take.wav")),
            Some(SupportedFormat::Wav)
        );
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(
            SupportedFormat::from_path(Path::new("SONG.MP3")),
            Some(SupportedFormat::Mp3)
        );
        assert_eq!(
            SupportedFormat::from_path(Path::new("take.WaV")),
            Some(SupportedFormat::Wav)
        );
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!is_supported_media(Path::new("notes.txt")));
        assert!(!is_supported_media(Path::new("album.flac")));
        assert!(!is_supported_media(Path::new("song.mp3.bak")));
    }

    #[test]
    fn rejects_extensionless_paths() {
        assert!(!is_supported_media(Path::new("noext")));
        // ".mp3" is a hidden file with no extension, not an mp3
        assert!(!is_supported_media(&PathBuf::from(".mp3")));
    }

    #[test]
    fn parses_with_or_without_leading_dot() {
        assert_eq!("mp3".parse::<SupportedFormat>(), Ok(SupportedFormat::Mp3));
        assert_eq!(".wav".parse::<SupportedFormat>(), Ok(SupportedFormat::Wav));
        assert!("ogg".parse::<SupportedFormat>().is_err());
    }

    #[test]
    fn raw_extension_normalizes() {
        assert_eq!(raw_extension(Path::new("A.MP3")), "mp3");
        assert_eq!(raw_extension(Path::new("noext")), "");
    }
}
