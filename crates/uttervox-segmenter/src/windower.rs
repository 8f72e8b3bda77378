use uttervox_foundation::SegmenterError;

/// Reshapes variable-length PCM chunks into fixed-size analysis windows,
/// carrying leftover samples across calls.
///
/// Staging and committing are split so a caller can abandon a staged chunk
/// (e.g. after an oracle failure) without the carry-over being consumed.
pub struct FrameWindower {
    window_size: usize,
    required_rate: u32,
    carry: Vec<i16>,
}

/// Windows formed from the carry plus one staged chunk, and the carry that
/// remains once those windows are consumed. Always shorter than one window.
pub struct StagedWindows {
    pub windows: Vec<Vec<i16>>,
    pub carry: Vec<i16>,
}

impl FrameWindower {
    pub fn new(window_size: usize, required_rate: u32) -> Self {
        Self {
            window_size,
            required_rate,
            carry: Vec::with_capacity(window_size),
        }
    }

    /// Validate and decode a chunk, returning the complete windows it forms
    /// together with the existing carry. Does not mutate the windower.
    pub fn stage(&self, mono_pcm: &[u8], sample_rate: u32) -> Result<StagedWindows, SegmenterError> {
        if sample_rate != self.required_rate {
            return Err(SegmenterError::InvalidRate {
                actual: sample_rate,
                required: self.required_rate,
            });
        }
        if mono_pcm.len() % 2 != 0 {
            return Err(SegmenterError::MalformedAudio {
                reason: format!("odd PCM16 byte length {}", mono_pcm.len()),
            });
        }

        let mut samples = Vec::with_capacity(self.carry.len() + mono_pcm.len() / 2);
        samples.extend_from_slice(&self.carry);
        samples.extend(
            mono_pcm
                .chunks_exact(2)
                .map(|b| i16::from_le_bytes([b[0], b[1]])),
        );

        let mut windows = Vec::with_capacity(samples.len() / self.window_size);
        let mut offset = 0;
        while samples.len() - offset >= self.window_size {
            windows.push(samples[offset..offset + self.window_size].to_vec());
            offset += self.window_size;
        }

        Ok(StagedWindows {
            windows,
            carry: samples[offset..].to_vec(),
        })
    }

    /// Install the carry left over from a successfully processed stage.
    pub fn commit(&mut self, carry: Vec<i16>) {
        debug_assert!(carry.len() < self.window_size);
        self.carry = carry;
    }

    pub fn pending_samples(&self) -> usize {
        self.carry.len()
    }

    pub fn reset(&mut self) {
        self.carry.clear();
    }
}
