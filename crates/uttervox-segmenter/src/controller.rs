use tracing::{debug, info, trace};

use uttervox_foundation::SegmenterError;
use uttervox_vad::constants::WINDOW_SIZE_SAMPLES;
use uttervox_vad::{
    DetectorEvent, EndReason, ForceCutPolicy, HysteresisDetector, SegmentEvent, SegmentState,
    SegmenterConfig, SegmenterMetrics, VadOracle,
};

use crate::accumulator::SegmentAccumulator;
use crate::ring::PreSpeechRing;
use crate::windower::{FrameWindower, StagedWindows};

/// Turns a continuous mono PCM stream into discrete utterances.
///
/// Synchronous and non-reentrant: one logical producer calls `push_frame`
/// sequentially, and all work (windowing, inference, hysteresis, buffer
/// routing) happens inline before the call returns. One oracle per
/// segmenter; independent streams get independent segmenter instances.
pub struct SpeechSegmenter {
    config: SegmenterConfig,
    oracle: Box<dyn VadOracle>,
    windower: FrameWindower,
    ring: PreSpeechRing,
    accumulator: SegmentAccumulator,
    detector: HysteresisDetector,
    metrics: SegmenterMetrics,
}

impl SpeechSegmenter {
    pub fn new(
        config: SegmenterConfig,
        oracle: Box<dyn VadOracle>,
    ) -> Result<Self, SegmenterError> {
        config.validate()?;
        if oracle.required_sample_rate() != config.sample_rate_hz {
            return Err(SegmenterError::Config(format!(
                "oracle requires {} Hz, config says {} Hz",
                oracle.required_sample_rate(),
                config.sample_rate_hz
            )));
        }
        if oracle.required_window_size_samples() != WINDOW_SIZE_SAMPLES {
            return Err(SegmenterError::Config(format!(
                "oracle window of {} samples is unsupported, expected {}",
                oracle.required_window_size_samples(),
                WINDOW_SIZE_SAMPLES
            )));
        }

        let windower = FrameWindower::new(WINDOW_SIZE_SAMPLES, config.sample_rate_hz);
        let ring = PreSpeechRing::new(config.pre_speech_samples());
        let detector = HysteresisDetector::new(&config);

        info!(
            sample_rate_hz = config.sample_rate_hz,
            pre_speech_ms = config.pre_speech_ms,
            begin_of_utterance_ms = config.begin_of_utterance_ms,
            end_of_utterance_ms = config.end_of_utterance_ms,
            max_speech_length_ms = config.max_speech_length_ms,
            "speech segmenter ready"
        );

        Ok(Self {
            config,
            oracle,
            windower,
            ring,
            accumulator: SegmentAccumulator::new(),
            detector,
            metrics: SegmenterMetrics::default(),
        })
    }

    /// Feed one chunk of mono 16-bit little-endian PCM.
    ///
    /// `frame_length_ms` documents the nominal chunk duration; the actual
    /// byte length may vary per call. Returns the segment events the chunk
    /// produced, in order. On error no segmenter state has changed, except
    /// that an oracle failure may have advanced the oracle's own recurrent
    /// state.
    pub fn push_frame(
        &mut self,
        mono_pcm: &[u8],
        sample_rate: u32,
        frame_length_ms: u32,
    ) -> Result<Vec<SegmentEvent>, SegmenterError> {
        let StagedWindows { windows, carry } = self.windower.stage(mono_pcm, sample_rate)?;
        trace!(
            bytes = mono_pcm.len(),
            frame_length_ms,
            windows = windows.len(),
            "chunk staged"
        );

        // Classify every staged window before mutating anything, so a failed
        // inference leaves windower, ring, accumulator and detector exactly
        // as they were.
        let mut verdicts = Vec::with_capacity(windows.len());
        for window in &windows {
            verdicts.push(self.oracle.classify(window)?);
        }
        self.windower.commit(carry);

        let mut events = Vec::new();
        for (window, verdict) in windows.iter().zip(&verdicts) {
            self.metrics.windows_classified += 1;
            self.metrics.last_probability = verdict.probability;

            match self.detector.update(verdict.is_speech) {
                None => match self.detector.current_state() {
                    SegmentState::Idle | SegmentState::Confirming => self.ring.append(window),
                    SegmentState::InUtterance | SegmentState::EndConfirming => {
                        self.accumulator.append(window)
                    }
                },

                Some(DetectorEvent::OnsetConfirmed { timestamp_ms }) => {
                    // The confirming window joins the ring before it drains,
                    // so the prefix covers the whole onset run
                    self.ring.append(window);
                    let prefix = self.ring.drain_as_prefix();
                    debug!(
                        timestamp_ms,
                        prefix_samples = prefix.len(),
                        "utterance onset confirmed"
                    );
                    self.accumulator.begin_with_prefix(prefix);
                    self.metrics.sentences_begun += 1;
                    events.push(SegmentEvent::SentenceBegin { timestamp_ms });
                }

                Some(DetectorEvent::UtteranceEnded {
                    timestamp_ms,
                    speech_ms,
                    reason,
                }) => {
                    // Hangover: the window that confirmed the end belongs to
                    // the utterance
                    self.accumulator.append(window);
                    let samples = self.accumulator.take_completed();
                    debug!(
                        timestamp_ms,
                        speech_ms,
                        ?reason,
                        payload_samples = samples.len(),
                        "utterance ended"
                    );
                    self.metrics.sentences_completed += 1;
                    self.metrics.total_speech_ms += speech_ms;
                    events.push(SegmentEvent::SentenceCompleted {
                        timestamp_ms,
                        audio: samples_to_bytes(&samples),
                        speech_ms,
                        reason,
                    });

                    if reason == EndReason::MaxDuration {
                        // Continuation segment: no gap in the byte stream,
                        // re-confirmation is skipped
                        self.metrics.force_cuts += 1;
                        self.accumulator.begin_with_prefix(Vec::new());
                        if self.config.force_cut_policy == ForceCutPolicy::ReannounceOnset {
                            self.metrics.sentences_begun += 1;
                            events.push(SegmentEvent::SentenceBegin { timestamp_ms });
                        }
                    }
                }
            }
        }

        Ok(events)
    }

    /// True from confirmed onset until the utterance closes.
    pub fn is_sentence_in_progress(&self) -> bool {
        matches!(
            self.detector.current_state(),
            SegmentState::InUtterance | SegmentState::EndConfirming
        )
    }

    pub fn current_state(&self) -> SegmentState {
        self.detector.current_state()
    }

    pub fn metrics(&self) -> &SegmenterMetrics {
        &self.metrics
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Return every component, the oracle's recurrent state included, to its
    /// initial state.
    pub fn reset(&mut self) {
        self.windower.reset();
        self.ring.clear();
        self.accumulator.clear();
        self.detector.reset();
        self.oracle.reset();
        self.metrics = SegmenterMetrics::default();
        debug!("segmenter reset");
    }
}

fn samples_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for s in samples {
        bytes.extend_from_slice(&s.to_le_bytes());
    }
    bytes
}
