pub mod config;
pub mod constants;
pub mod oracle;
pub mod state;
pub mod types;

// Core exports - grouped and sorted alphabetically
pub use config::{ForceCutPolicy, SegmenterConfig};
pub use constants::{BYTES_PER_SAMPLE, SAMPLE_RATE_HZ, WINDOW_DURATION_MS, WINDOW_SIZE_SAMPLES};
pub use oracle::VadOracle;
pub use state::HysteresisDetector;
pub use types::{
    DetectorEvent, EndReason, OracleVerdict, SegmentEvent, SegmentState, SegmenterMetrics,
};
