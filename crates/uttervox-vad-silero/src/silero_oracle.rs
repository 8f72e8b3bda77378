use crate::config::SileroOracleConfig;
use uttervox_foundation::OracleError;
use uttervox_vad::constants::{SAMPLE_RATE_HZ, WINDOW_SIZE_SAMPLES};
use uttervox_vad::{OracleVerdict, VadOracle};
use voice_activity_detector::VoiceActivityDetector;

#[derive(Copy, Clone, Default)]
struct I16Sample(i16);

impl voice_activity_detector::Sample for I16Sample {
    fn to_f32(self) -> f32 {
        self.0 as f32 / i16::MAX as f32
    }
}

/// Silero v5 oracle. The detector owns the model's recurrent state, which
/// persists across `classify` calls until `reset`.
pub struct SileroOracle {
    detector: VoiceActivityDetector,
    config: SileroOracleConfig,
    windows_classified: u64,
    last_probability: f32,
}

impl SileroOracle {
    pub fn new(config: SileroOracleConfig) -> Result<Self, OracleError> {
        let detector = VoiceActivityDetector::builder()
            .sample_rate(SAMPLE_RATE_HZ as i64)
            .chunk_size(config.window_size_samples)
            .build()
            .map_err(|e| OracleError::ModelLoad(e.to_string()))?;

        tracing::info!(
            threshold = config.threshold,
            window = config.window_size_samples,
            "Silero oracle ready"
        );

        Ok(Self {
            detector,
            config,
            windows_classified: 0,
            last_probability: 0.0,
        })
    }

    /// Probability from the most recent classification, for diagnostics.
    pub fn last_probability(&self) -> f32 {
        self.last_probability
    }
}

impl VadOracle for SileroOracle {
    fn classify(&mut self, window: &[i16]) -> Result<OracleVerdict, OracleError> {
        if window.len() != self.config.window_size_samples {
            return Err(OracleError::WindowSize {
                actual: window.len(),
                required: self.config.window_size_samples,
            });
        }

        let probability = self.detector.predict(window.iter().map(|&s| I16Sample(s)));
        self.last_probability = probability;
        self.windows_classified += 1;

        Ok(OracleVerdict {
            probability,
            is_speech: probability > self.config.threshold,
        })
    }

    fn reset(&mut self) {
        self.detector.reset();
        self.windows_classified = 0;
        self.last_probability = 0.0;
    }

    fn required_sample_rate(&self) -> u32 {
        SAMPLE_RATE_HZ
    }

    fn required_window_size_samples(&self) -> usize {
        WINDOW_SIZE_SAMPLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_reports_requirements() {
        let oracle = SileroOracle::new(SileroOracleConfig::default())
            .expect("oracle should build from the embedded model");
        assert_eq!(oracle.required_sample_rate(), 16_000);
        assert_eq!(oracle.required_window_size_samples(), 512);
    }

    #[test]
    fn silence_window_is_not_speech() {
        let mut oracle = SileroOracle::new(SileroOracleConfig::default())
            .expect("oracle should build from the embedded model");
        let silence = vec![0i16; 512];
        let verdict = oracle.classify(&silence).expect("classification succeeds");
        assert!(!verdict.is_speech, "digital silence must not be speech");
        assert!(verdict.probability < 0.5);
        assert_eq!(oracle.last_probability(), verdict.probability);
    }

    #[test]
    fn wrong_window_length_is_rejected() {
        let mut oracle = SileroOracle::new(SileroOracleConfig::default())
            .expect("oracle should build from the embedded model");
        let short = vec![0i16; 511];
        match oracle.classify(&short) {
            Err(OracleError::WindowSize { actual, required }) => {
                assert_eq!(actual, 511);
                assert_eq!(required, 512);
            }
            other => panic!("expected WindowSize error, got {:?}", other.map(|_| ())),
        }
    }
}
