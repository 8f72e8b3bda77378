pub mod accumulator;
pub mod controller;
pub mod ring;
pub mod windower;

pub use accumulator::SegmentAccumulator;
pub use controller::SpeechSegmenter;
pub use ring::PreSpeechRing;
pub use windower::{FrameWindower, StagedWindows};

// Re-export the types callers need alongside the controller
pub use uttervox_foundation::{OracleError, SegmenterError};
pub use uttervox_vad::{
    EndReason, ForceCutPolicy, OracleVerdict, SegmentEvent, SegmentState, SegmenterConfig,
    SegmenterMetrics, VadOracle,
};
