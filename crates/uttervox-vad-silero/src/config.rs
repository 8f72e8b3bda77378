use serde::{Deserialize, Serialize};
use uttervox_vad::constants::WINDOW_SIZE_SAMPLES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SileroOracleConfig {
    /// Probability above which a window counts as speech (strict)
    pub threshold: f32,
    pub window_size_samples: usize,
}

impl Default for SileroOracleConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            window_size_samples: WINDOW_SIZE_SAMPLES,
        }
    }
}
