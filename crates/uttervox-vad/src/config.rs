use serde::{Deserialize, Serialize};

use crate::constants::{SAMPLE_RATE_HZ, WINDOW_DURATION_MS};
use uttervox_foundation::SegmenterError;

/// What happens after a max-length force-cut: whether the continuation
/// segment announces itself with a fresh `SentenceBegin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCutPolicy {
    /// Keep accumulating the continuation without a new begin event
    SilentContinuation,
    /// Re-fire `SentenceBegin` at the cut boundary
    ReannounceOnset,
}

impl Default for ForceCutPolicy {
    fn default() -> Self {
        Self::SilentContinuation
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Must match the oracle's required rate (16 kHz)
    pub sample_rate_hz: u32,

    /// Nominal incoming chunk duration; informational only, chunks of any
    /// even byte length are accepted
    pub ms_per_frame: u32,

    /// Rolling retention of audio preceding a confirmed onset
    pub pre_speech_ms: u32,

    /// Consecutive speech required to confirm an onset
    pub begin_of_utterance_ms: u32,

    /// Consecutive silence required to close an utterance
    pub end_of_utterance_ms: u32,

    /// Hard ceiling on a single utterance's duration
    pub max_speech_length_ms: u32,

    pub force_cut_policy: ForceCutPolicy,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: SAMPLE_RATE_HZ,
            ms_per_frame: 20,
            pre_speech_ms: 1200,
            begin_of_utterance_ms: 500,
            end_of_utterance_ms: 550,
            max_speech_length_ms: 7000,
            force_cut_policy: ForceCutPolicy::default(),
        }
    }
}

impl SegmenterConfig {
    pub fn validate(&self) -> Result<(), SegmenterError> {
        if self.sample_rate_hz != SAMPLE_RATE_HZ {
            return Err(SegmenterError::Config(format!(
                "sample_rate_hz must be {}, got {}",
                SAMPLE_RATE_HZ, self.sample_rate_hz
            )));
        }
        if self.pre_speech_ms == 0
            || self.begin_of_utterance_ms == 0
            || self.end_of_utterance_ms == 0
            || self.max_speech_length_ms == 0
        {
            return Err(SegmenterError::Config(
                "all duration fields must be positive".into(),
            ));
        }
        if self.max_speech_length_ms <= self.begin_of_utterance_ms {
            return Err(SegmenterError::Config(format!(
                "max_speech_length_ms ({}) must exceed begin_of_utterance_ms ({})",
                self.max_speech_length_ms, self.begin_of_utterance_ms
            )));
        }
        Ok(())
    }

    /// Windows needed to confirm an onset (ceiling)
    pub fn begin_windows(&self) -> u32 {
        (self.begin_of_utterance_ms as f32 / WINDOW_DURATION_MS).ceil() as u32
    }

    /// Windows of consecutive silence needed to close an utterance (ceiling)
    pub fn end_windows(&self) -> u32 {
        (self.end_of_utterance_ms as f32 / WINDOW_DURATION_MS).ceil() as u32
    }

    /// Windows after which a running utterance is force-cut (ceiling)
    pub fn max_speech_windows(&self) -> u32 {
        (self.max_speech_length_ms as f32 / WINDOW_DURATION_MS).ceil() as u32
    }

    /// Pre-speech retention converted to samples
    pub fn pre_speech_samples(&self) -> usize {
        (self.pre_speech_ms as usize * self.sample_rate_hz as usize) / 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SegmenterConfig::default().validate().is_ok());
    }

    #[test]
    fn default_window_counts() {
        let cfg = SegmenterConfig::default();
        // 32ms windows: 500ms -> 16, 550ms -> 18, 7000ms -> 219
        assert_eq!(cfg.begin_windows(), 16);
        assert_eq!(cfg.end_windows(), 18);
        assert_eq!(cfg.max_speech_windows(), 219);
        assert_eq!(cfg.pre_speech_samples(), 19_200);
    }

    #[test]
    fn rejects_wrong_sample_rate() {
        let cfg = SegmenterConfig {
            sample_rate_hz: 8_000,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_durations() {
        let cfg = SegmenterConfig {
            end_of_utterance_ms: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_max_length_below_begin() {
        let cfg = SegmenterConfig {
            begin_of_utterance_ms: 500,
            max_speech_length_ms: 400,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
