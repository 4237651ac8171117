//! ReplayGain tag reading
//!
//! Supports the common tag spellings:
//! - `REPLAYGAIN_TRACK_GAIN` / `REPLAYGAIN_ALBUM_GAIN` (e.g. "-6.54 dB")
//! - `REPLAYGAIN_*_GAIN_DB` variants written by some taggers
//! - Opus `R128_TRACK_GAIN` / `R128_ALBUM_GAIN` (Q7.8 fixed point, -23 LUFS reference)

use crate::error::{GainError, Result};
use crate::replaygain::{volume_multiplier, GainConfig, ReplayGainValues};
use crate::R128_TO_REPLAYGAIN_OFFSET_DB;
use lofty::TaggedFileExt;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

const TRACK_GAIN_KEYS: [&str; 3] = [
    "REPLAYGAIN_TRACK_GAIN",
    "REPLAYGAIN_TRACK_GAIN_DB",
    "R128_TRACK_GAIN",
];

const ALBUM_GAIN_KEYS: [&str; 3] = [
    "REPLAYGAIN_ALBUM_GAIN",
    "REPLAYGAIN_ALBUM_GAIN_DB",
    "R128_ALBUM_GAIN",
];

/// Parse a gain value from a string (e.g., "-5.23 dB" -> -5.23)
///
/// The "dB" suffix is optional and matched case-insensitively.
pub fn parse_gain(raw: &str) -> Option<f32> {
    let s = raw.trim();
    let s = match s.len().checked_sub(2) {
        Some(cut) if s.is_char_boundary(cut) && s[cut..].eq_ignore_ascii_case("db") => &s[..cut],
        _ => s,
    };
    s.trim().parse().ok()
}

/// Parse an Opus R128 gain (Q7.8 integer) into a ReplayGain dB value
fn parse_r128_gain(raw: &str) -> Option<f32> {
    let q78: i32 = raw.trim().parse().ok()?;
    Some(q78 as f32 / 256.0 + R128_TO_REPLAYGAIN_OFFSET_DB)
}

/// First present key wins, even when its value does not parse
fn extract_gain(properties: &HashMap<String, String>, keys: &[&str]) -> Option<f32> {
    let (key, raw) = keys
        .iter()
        .find_map(|key| properties.get(*key).map(|raw| (*key, raw)))?;

    if key.starts_with("R128_") {
        parse_r128_gain(raw)
    } else {
        parse_gain(raw)
    }
}

impl ReplayGainValues {
    /// Build gain values from tag key/value pairs
    ///
    /// Keys are matched case-insensitively; the first occurrence of a key is
    /// used. Returns `None` when neither a track nor an album gain is found.
    pub fn from_properties<I, K, V>(properties: I) -> Option<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map: HashMap<String, String> = HashMap::new();
        for (key, value) in properties {
            map.entry(key.as_ref().to_ascii_uppercase())
                .or_insert_with(|| value.as_ref().to_string());
        }

        let values = Self {
            track_gain_db: extract_gain(&map, &TRACK_GAIN_KEYS),
            album_gain_db: extract_gain(&map, &ALBUM_GAIN_KEYS),
        };

        if values.is_empty() {
            None
        } else {
            Some(values)
        }
    }
}

/// Read ReplayGain values from an audio file
///
/// # Returns
/// - `Ok(None)` for a blank path or a file without gain tags
/// - `Err(GainError::FileNotFound)` when the file does not exist
pub fn read_replaygain<P: AsRef<Path>>(path: P) -> Result<Option<ReplayGainValues>> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Ok(None);
    }

    if !path.exists() {
        return Err(GainError::FileNotFound(path.display().to_string()));
    }

    let tagged_file = lofty::read_from_path(path)?;

    // Primary tag first so its values win over secondary tags
    let primary_type = tagged_file.primary_tag_type();
    let mut tags: Vec<&lofty::Tag> = tagged_file.tags().iter().collect();
    tags.sort_by_key(|tag| tag.tag_type() != primary_type);

    let properties = tags.into_iter().flat_map(|tag| {
        let tag_type = tag.tag_type();
        tag.items().filter_map(move |item| {
            let key = item.key().map_key(tag_type, true)?;
            let value = item.value().text()?;
            Some((key.to_string(), value.to_string()))
        })
    });

    let values = ReplayGainValues::from_properties(properties);

    if let Some(v) = &values {
        debug!(
            "ReplayGain for {:?}: track={:?} dB, album={:?} dB",
            path, v.track_gain_db, v.album_gain_db
        );
    }

    Ok(values)
}

/// Volume multiplier for an audio file
///
/// Unreadable files are logged and played without adjustment.
pub fn volume_for_file<P: AsRef<Path>>(path: P, config: &GainConfig) -> f32 {
    let path = path.as_ref();
    match read_replaygain(path) {
        Ok(values) => volume_multiplier(values.as_ref(), config),
        Err(e) => {
            warn!("Failed to read ReplayGain from {:?}: {}", path, e);
            1.0
        }
    }
}
