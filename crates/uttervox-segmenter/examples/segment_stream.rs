//! Feeds a synthetic 16 kHz stream through the segmenter in 20ms chunks.
//!
//! The Silero model only confirms real speech, so the tone bursts here will
//! usually stay below threshold; pipe actual speech PCM through stdin-style
//! integration for detections. This example demonstrates the wiring.

use uttervox_segmenter::{SegmentEvent, SegmenterConfig, SpeechSegmenter};
use uttervox_vad_silero::{SileroOracle, SileroOracleConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let oracle = SileroOracle::new(SileroOracleConfig::default())?;
    let mut segmenter = SpeechSegmenter::new(SegmenterConfig::default(), Box::new(oracle))?;

    // 1s silence, 2s of a 220 Hz tone, 1s silence
    let chunk_samples = 320; // 20ms at 16 kHz
    let mut samples = Vec::new();
    samples.extend(std::iter::repeat(0i16).take(16_000));
    samples.extend((0..32_000).map(|i| {
        let phase = 2.0 * std::f32::consts::PI * 220.0 * i as f32 / 16_000.0;
        (phase.sin() * 12_000.0) as i16
    }));
    samples.extend(std::iter::repeat(0i16).take(16_000));

    let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

    for chunk in bytes.chunks(chunk_samples * 2) {
        for event in segmenter.push_frame(chunk, 16_000, 20)? {
            match event {
                SegmentEvent::SentenceBegin { timestamp_ms } => {
                    println!("sentence begin at {timestamp_ms}ms");
                }
                SegmentEvent::SentenceCompleted {
                    timestamp_ms,
                    audio,
                    speech_ms,
                    reason,
                } => {
                    println!(
                        "sentence completed at {timestamp_ms}ms: {} bytes, {speech_ms}ms, {reason:?}",
                        audio.len()
                    );
                }
            }
        }
    }

    let m = segmenter.metrics();
    println!(
        "{} windows classified, {} sentences, last probability {:.3}",
        m.windows_classified, m.sentences_completed, m.last_probability
    );
    Ok(())
}
