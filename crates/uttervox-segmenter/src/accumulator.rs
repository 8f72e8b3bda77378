/// Owns the growing buffer of one in-progress utterance, from pre-speech
/// prefix through confirmed end.
pub struct SegmentAccumulator {
    buf: Vec<i16>,
    active: bool,
}

impl SegmentAccumulator {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            active: false,
        }
    }

    /// Start a new utterance seeded with the pre-speech tail. An empty
    /// prefix starts the continuation segment after a force-cut.
    pub fn begin_with_prefix(&mut self, prefix: Vec<i16>) {
        debug_assert!(!self.active, "accumulator already holds an utterance");
        self.buf = prefix;
        self.active = true;
    }

    pub fn append(&mut self, samples: &[i16]) {
        debug_assert!(self.active, "append outside an utterance");
        self.buf.extend_from_slice(samples);
    }

    /// Hand the finished utterance to the caller and deactivate.
    pub fn take_completed(&mut self) -> Vec<i16> {
        self.active = false;
        std::mem::take(&mut self.buf)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn len_samples(&self) -> usize {
        self.buf.len()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.active = false;
    }
}

impl Default for SegmentAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_then_appends_form_one_buffer() {
        let mut acc = SegmentAccumulator::new();
        acc.begin_with_prefix(vec![1, 2]);
        acc.append(&[3, 4]);
        acc.append(&[5]);
        assert_eq!(acc.take_completed(), vec![1, 2, 3, 4, 5]);
        assert!(!acc.is_active());
    }

    #[test]
    fn take_leaves_the_accumulator_empty() {
        let mut acc = SegmentAccumulator::new();
        acc.begin_with_prefix(vec![7; 10]);
        let _ = acc.take_completed();
        assert_eq!(acc.len_samples(), 0);
    }

    #[test]
    fn force_cut_split_is_lossless() {
        let mut acc = SegmentAccumulator::new();
        acc.begin_with_prefix(vec![1, 2, 3]);
        acc.append(&[4, 5]);
        let first = acc.take_completed();
        // Continuation restarts with an empty prefix, no gap
        acc.begin_with_prefix(Vec::new());
        acc.append(&[6, 7]);
        let second = acc.take_completed();

        let mut joined = first;
        joined.extend(second);
        assert_eq!(joined, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
