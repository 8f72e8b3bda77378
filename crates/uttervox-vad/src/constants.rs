//! Audio constants for the segmentation pipeline

/// Sample rate required by the Silero v5 oracle (Hz)
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Analysis window consumed per oracle invocation (samples)
/// At 16kHz, 512 samples = 32ms
pub const WINDOW_SIZE_SAMPLES: usize = 512;

/// Bytes per 16-bit PCM sample
pub const BYTES_PER_SAMPLE: usize = 2;

/// Standard number of channels for mono audio processing
pub const CHANNELS_MONO: u16 = 1;

/// Window duration in milliseconds (derived constant)
pub const WINDOW_DURATION_MS: f32 = (WINDOW_SIZE_SAMPLES as f32 * 1000.0) / SAMPLE_RATE_HZ as f32;
