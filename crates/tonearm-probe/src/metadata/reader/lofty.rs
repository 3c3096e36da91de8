use std::collections::BTreeMap;
use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::probe::Probe;
use lofty::tag::{ItemKey, ItemValue, Tag};

use tracing::debug;

use crate::error::Error;
use crate::metadata::{MetadataReader, TagMap};

/// Friendly names for the simplified view, one stable name per well-known
/// item key, in the spirit of "easy" tag frontends.
const SIMPLIFIED_KEYS: &[(&str, ItemKey)] = &[
    ("album", ItemKey::AlbumTitle),
    ("albumartist", ItemKey::AlbumArtist),
    ("artist", ItemKey::TrackArtist),
    ("comment", ItemKey::Comment),
    ("composer", ItemKey::Composer),
    ("conductor", ItemKey::Conductor),
    ("copyright", ItemKey::CopyrightMessage),
    ("date", ItemKey::RecordingDate),
    ("discnumber", ItemKey::DiscNumber),
    ("disctotal", ItemKey::DiscTotal),
    ("encodedby", ItemKey::EncodedBy),
    ("genre", ItemKey::Genre),
    ("isrc", ItemKey::Isrc),
    ("language", ItemKey::Language),
    ("lyricist", ItemKey::Lyricist),
    ("publisher", ItemKey::Publisher),
    ("title", ItemKey::TrackTitle),
    ("tracknumber", ItemKey::TrackNumber),
    ("tracktotal", ItemKey::TrackTotal),
    ("year", ItemKey::Year),
];

/// Simplified view: well-known keys under friendly names.
/// Multi-valued keys are joined with ", ".
pub(crate) fn simplified_entries(tag: &Tag) -> TagMap {
    let mut out = TagMap::new();
    for (name, key) in SIMPLIFIED_KEYS {
        let values: Vec<&str> = tag.get_strings(key).collect();
        if values.is_empty() {
            continue;
        }
        out.insert((*name).to_string(), values.join(", "));
    }
    out
}

/// Raw view: every textual item under its native key. Unknown keys pass
/// through verbatim; binary payloads are skipped.
pub(crate) fn raw_entries(tag: &Tag) -> TagMap {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for item in tag.items() {
        let value = match item.value() {
            ItemValue::Text(s) | ItemValue::Locator(s) => s.clone(),
            ItemValue::Binary(_) => continue,
        };
        let key = match item.key() {
            ItemKey::Unknown(k) => k.clone(),
            other => format!("{other:?}"),
        };
        grouped.entry(key).or_default().push(value);
    }
    grouped.into_iter().map(|(k, v)| (k, v.join(", "))).collect()
}

#[derive(Default)]
pub struct LoftyReader;

impl LoftyReader {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataReader for LoftyReader {
    fn read(&self, path: &Path) -> Result<TagMap, Error> {
        let tagged = Probe::open(path)
            .map_err(|e| Error::MetadataRead(e.to_string()))?
            .read()
            .map_err(|e| Error::MetadataRead(e.to_string()))?;

        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            debug!(path = %path.display(), "no tag block present");
            return Ok(TagMap::new());
        };

        let simplified = simplified_entries(tag);
        if !simplified.is_empty() {
            return Ok(simplified);
        }
        Ok(raw_entries(tag))
    }
}
