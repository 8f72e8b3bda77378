use serde::{Deserialize, Serialize};

/// Outcome of classifying one analysis window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OracleVerdict {
    /// Speech probability in [0, 1]
    pub probability: f32,
    /// Whether the probability cleared the oracle's detection threshold
    pub is_speech: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentState {
    /// No speech candidate
    Idle,
    /// Candidate onset being timed
    Confirming,
    /// Confirmed utterance accumulating
    InUtterance,
    /// Candidate end being timed
    EndConfirming,
}

impl Default for SegmentState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Why an utterance was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Enough consecutive silence accumulated
    Silence,
    /// The maximum utterance length was reached (force-cut)
    MaxDuration,
}

/// Transition events produced by the hysteresis detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectorEvent {
    OnsetConfirmed {
        timestamp_ms: u64,
    },
    UtteranceEnded {
        timestamp_ms: u64,
        /// Elapsed duration since the start of the confirmed onset run,
        /// hangover silence included
        speech_ms: u64,
        reason: EndReason,
    },
}

/// Public events raised by the segmenter controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentEvent {
    /// A new utterance onset was confirmed
    SentenceBegin { timestamp_ms: u64 },
    /// An utterance closed; `audio` is its full PCM, pre-speech prefix
    /// included, as 16-bit little-endian bytes
    SentenceCompleted {
        timestamp_ms: u64,
        audio: Vec<u8>,
        speech_ms: u64,
        reason: EndReason,
    },
}

/// Running counters for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmenterMetrics {
    pub windows_classified: u64,

    pub sentences_begun: u64,

    pub sentences_completed: u64,

    pub force_cuts: u64,

    pub total_speech_ms: u64,

    pub last_probability: f32,
}
