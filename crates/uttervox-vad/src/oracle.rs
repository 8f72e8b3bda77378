use crate::types::OracleVerdict;
use uttervox_foundation::OracleError;

/// A trait for VAD oracles.
///
/// An oracle classifies one fixed-size analysis window at a time and carries
/// opaque recurrent state across calls for the lifetime of the instance. One
/// oracle serves exactly one segmenter; instances are never shared.
pub trait VadOracle: Send {
    /// Classify a single window of mono PCM samples.
    fn classify(&mut self, window: &[i16]) -> Result<OracleVerdict, OracleError>;

    /// Clear the recurrent state.
    fn reset(&mut self);

    fn required_sample_rate(&self) -> u32;

    fn required_window_size_samples(&self) -> usize;
}
