use std::collections::VecDeque;

/// Bounded rolling buffer of the most recent audio, so an emitted utterance
/// can include the moments just before its confirmed onset.
pub struct PreSpeechRing {
    buf: VecDeque<i16>,
    capacity: usize,
}

impl PreSpeechRing {
    pub fn new(capacity_samples: usize) -> Self {
        Self {
            buf: VecDeque::with_capacity(capacity_samples),
            capacity: capacity_samples,
        }
    }

    /// Append samples, discarding the oldest beyond capacity.
    pub fn append(&mut self, samples: &[i16]) {
        self.buf.extend(samples);
        while self.buf.len() > self.capacity {
            self.buf.pop_front();
        }
    }

    /// Hand back the retained tail in arrival order and leave the ring empty.
    pub fn drain_as_prefix(&mut self) -> Vec<i16> {
        self.buf.drain(..).collect()
    }

    pub fn len_samples(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity_samples(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_up_to_capacity() {
        let mut ring = PreSpeechRing::new(8);
        ring.append(&[1, 2, 3, 4, 5]);
        assert_eq!(ring.len_samples(), 5);
        ring.append(&[6, 7, 8]);
        assert_eq!(ring.len_samples(), 8);
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut ring = PreSpeechRing::new(4);
        ring.append(&[1, 2, 3, 4]);
        ring.append(&[5, 6]);
        assert_eq!(ring.drain_as_prefix(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn oversized_append_keeps_newest_tail() {
        let mut ring = PreSpeechRing::new(3);
        ring.append(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(ring.drain_as_prefix(), vec![5, 6, 7]);
    }

    #[test]
    fn drain_empties_the_ring() {
        let mut ring = PreSpeechRing::new(8);
        ring.append(&[1, 2, 3]);
        assert_eq!(ring.drain_as_prefix(), vec![1, 2, 3]);
        assert!(ring.is_empty());
        // Refills from empty afterwards
        ring.append(&[9]);
        assert_eq!(ring.drain_as_prefix(), vec![9]);
    }
}
