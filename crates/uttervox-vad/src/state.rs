use crate::config::SegmenterConfig;
use crate::constants::WINDOW_DURATION_MS;
use crate::types::{DetectorEvent, EndReason, SegmentState};

/// Hysteresis state machine over per-window speech verdicts.
///
/// Converts the oracle's window-level flicker into confirmed begin/end
/// transitions by requiring minimum sustained durations, and enforces the
/// maximum utterance length. Holds no audio; time is counted in whole
/// analysis windows.
pub struct HysteresisDetector {
    state: SegmentState,

    begin_windows: u32,

    end_windows: u32,

    max_speech_windows: u32,

    /// Consecutive speech windows while a candidate onset is timed
    speech_run: u32,

    /// Consecutive silence windows while a candidate end is timed
    silence_run: u32,

    /// Windows elapsed since the start of the confirmed onset run
    utterance_windows: u32,

    windows_processed: u64,
}

impl HysteresisDetector {
    pub fn new(config: &SegmenterConfig) -> Self {
        Self {
            state: SegmentState::Idle,
            begin_windows: config.begin_windows(),
            end_windows: config.end_windows(),
            max_speech_windows: config.max_speech_windows(),
            speech_run: 0,
            silence_run: 0,
            utterance_windows: 0,
            windows_processed: 0,
        }
    }

    /// Feed one verdict; returns at most one transition event.
    pub fn update(&mut self, is_speech: bool) -> Option<DetectorEvent> {
        self.windows_processed += 1;

        match self.state {
            SegmentState::Idle => {
                if is_speech {
                    self.state = SegmentState::Confirming;
                    self.speech_run = 1;
                    return self.try_confirm_onset();
                }
                None
            }

            SegmentState::Confirming => {
                if is_speech {
                    self.speech_run += 1;
                    return self.try_confirm_onset();
                }
                // A single negative verdict discards the candidate
                self.state = SegmentState::Idle;
                self.speech_run = 0;
                None
            }

            SegmentState::InUtterance | SegmentState::EndConfirming => {
                self.utterance_windows += 1;

                if self.state == SegmentState::InUtterance {
                    if !is_speech {
                        self.state = SegmentState::EndConfirming;
                        self.silence_run = 1;
                    }
                } else if is_speech {
                    // Speech resumed before the close threshold; the silence
                    // candidate resets with no event
                    self.state = SegmentState::InUtterance;
                    self.silence_run = 0;
                } else {
                    self.silence_run += 1;
                }

                // When both thresholds are crossed by the same window, the
                // silence close wins over the force-cut
                if self.state == SegmentState::EndConfirming
                    && self.silence_run >= self.end_windows
                {
                    let event = DetectorEvent::UtteranceEnded {
                        timestamp_ms: self.timestamp_ms(),
                        speech_ms: self.utterance_ms(),
                        reason: EndReason::Silence,
                    };
                    self.state = SegmentState::Idle;
                    self.speech_run = 0;
                    self.silence_run = 0;
                    self.utterance_windows = 0;
                    return Some(event);
                }

                if self.utterance_windows >= self.max_speech_windows {
                    let event = DetectorEvent::UtteranceEnded {
                        timestamp_ms: self.timestamp_ms(),
                        speech_ms: self.utterance_ms(),
                        reason: EndReason::MaxDuration,
                    };
                    // Continue into a fresh utterance with no re-confirmation
                    // wait, so long speech is only ever segmented, never lost
                    self.state = SegmentState::InUtterance;
                    self.speech_run = 0;
                    self.silence_run = 0;
                    self.utterance_windows = 0;
                    return Some(event);
                }

                None
            }
        }
    }

    fn try_confirm_onset(&mut self) -> Option<DetectorEvent> {
        if self.speech_run >= self.begin_windows {
            self.state = SegmentState::InUtterance;
            // The onset run itself counts toward the max-length ceiling
            self.utterance_windows = self.speech_run;
            self.speech_run = 0;
            return Some(DetectorEvent::OnsetConfirmed {
                timestamp_ms: self.timestamp_ms(),
            });
        }
        None
    }

    pub fn current_state(&self) -> SegmentState {
        self.state
    }

    /// Elapsed duration of the utterance in progress, zero when idle.
    pub fn utterance_ms(&self) -> u64 {
        (self.utterance_windows as f32 * WINDOW_DURATION_MS) as u64
    }

    pub fn reset(&mut self) {
        self.state = SegmentState::Idle;
        self.speech_run = 0;
        self.silence_run = 0;
        self.utterance_windows = 0;
        self.windows_processed = 0;
    }

    fn timestamp_ms(&self) -> u64 {
        (self.windows_processed as f32 * WINDOW_DURATION_MS) as u64
    }
}
