//! ReplayGain volume levelling for Cadence
//!
//! This crate provides:
//! - ReplayGain tag reading (ReplayGain 1/2 text tags and Opus R128 gains)
//! - dB to linear volume conversion with clipping protection
//! - Track/album mode selection with fallback
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ Audio File  │ ──► │  Tag Reader  │ ──► │ ReplayGainValues │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                                                   │
//!                                                   ▼
//!                                          ┌──────────────────┐
//!                                          │ Volume (0.0-1.0) │
//!                                          └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use cadence_gain::{volume_multiplier, GainConfig, GainMode, ReplayGainValues};
//!
//! let values = ReplayGainValues::from_properties([
//!     ("REPLAYGAIN_TRACK_GAIN", "-6.00 dB"),
//!     ("REPLAYGAIN_ALBUM_GAIN", "-8.00 dB"),
//! ])
//! .unwrap();
//!
//! let config = GainConfig { mode: GainMode::Track, pre_amp_db: 0.0 };
//! let volume = volume_multiplier(Some(&values), &config);
//! assert!((volume - 0.501).abs() < 0.01);
//! ```

#![deny(unsafe_code)]

mod error;
mod replaygain;
mod tags;

pub use error::{GainError, Result};
pub use replaygain::{gain_db_to_volume, volume_multiplier, GainConfig, GainMode, ReplayGainValues};
pub use tags::{parse_gain, read_replaygain, volume_for_file};

/// Pre-amp applied when none is configured (dB)
pub const DEFAULT_PRE_AMP_DB: f32 = 0.0;

/// Maximum pre-amp gain in dB
pub const MAX_PREAMP_DB: f32 = 12.0;

/// Minimum pre-amp gain in dB
pub const MIN_PREAMP_DB: f32 = -12.0;

/// R128 gains are relative to -23 LUFS, ReplayGain 2.0 to -18 LUFS
pub const R128_TO_REPLAYGAIN_OFFSET_DB: f32 = 5.0;
