use thiserror::Error;

/// Errors surfaced by the segmentation pipeline.
#[derive(Error, Debug)]
pub enum SegmenterError {
    #[error("unsupported sample rate {actual} Hz, required {required} Hz")]
    InvalidRate { actual: u32, required: u32 },

    #[error("malformed audio: {reason}")]
    MalformedAudio { reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("VAD oracle failure: {0}")]
    Oracle(#[from] OracleError),
}

/// Errors from a VAD oracle implementation.
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("failed to load VAD model: {0}")]
    ModelLoad(String),

    #[error("oracle requires {required} samples per window, got {actual}")]
    WindowSize { actual: usize, required: usize },

    #[error("inference failed: {0}")]
    Inference(String),
}
