//! ReplayGain volume levelling
//!
//! Turns stored ReplayGain values into a playback volume multiplier.
//!
//! # Conversion
//!
//! - Linear multiplier = 10^((gain + pre-amp) / 20)
//! - The multiplier is clamped to [0.0, 1.0]: loud tracks are attenuated,
//!   quiet tracks are never boosted past unity (no clipping).

use crate::{DEFAULT_PRE_AMP_DB, MAX_PREAMP_DB, MIN_PREAMP_DB};
use serde::{Deserialize, Serialize};

/// ReplayGain values for a single track, in dB
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayGainValues {
    /// Track gain in dB
    pub track_gain_db: Option<f32>,
    /// Album gain in dB
    pub album_gain_db: Option<f32>,
}

impl ReplayGainValues {
    /// Check if any gain value is present
    pub fn is_empty(&self) -> bool {
        self.track_gain_db.is_none() && self.album_gain_db.is_none()
    }

    /// Pick the gain for the given mode, falling back to the other one
    pub fn preferred_gain(&self, mode: GainMode) -> Option<f32> {
        match mode {
            GainMode::Track => self.track_gain_db.or(self.album_gain_db),
            GainMode::Album => self.album_gain_db.or(self.track_gain_db),
        }
    }
}

/// Which stored gain to prefer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GainMode {
    /// Per-track levelling (default)
    #[default]
    Track,

    /// Keep relative loudness within an album
    Album,
}

/// Configuration for volume levelling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GainConfig {
    /// Preferred gain (default: Track)
    pub mode: GainMode,

    /// Pre-amp added to every gain, in dB (default: 0.0, clamped to +-12)
    pub pre_amp_db: f32,
}

impl GainConfig {
    /// Pre-amp limited to the supported range
    pub fn effective_pre_amp_db(&self) -> f32 {
        self.pre_amp_db.clamp(MIN_PREAMP_DB, MAX_PREAMP_DB)
    }
}

impl Default for GainConfig {
    fn default() -> Self {
        Self {
            mode: GainMode::Track,
            pre_amp_db: DEFAULT_PRE_AMP_DB,
        }
    }
}

/// Convert a dB gain to a linear volume multiplier in [0.0, 1.0]
pub fn gain_db_to_volume(gain_db: f32, pre_amp_db: f32) -> f32 {
    let linear = 10.0_f32.powf((gain_db + pre_amp_db) / 20.0);
    if linear.is_nan() {
        return 1.0;
    }
    linear.clamp(0.0, 1.0)
}

/// Volume multiplier for a track
///
/// Falls back to the other gain when the preferred one is missing, and to
/// 1.0 (no adjustment) when the track has no gain at all.
pub fn volume_multiplier(values: Option<&ReplayGainValues>, config: &GainConfig) -> f32 {
    values
        .and_then(|v| v.preferred_gain(config.mode))
        .map(|gain| gain_db_to_volume(gain, config.effective_pre_amp_db()))
        .unwrap_or(1.0)
}
