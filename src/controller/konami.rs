use std::collections::VecDeque;

/// Up, up, down, down, left, right, left, right, B, A.
pub const KONAMI_SEQUENCE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Sliding window over the most recent key codes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KonamiDetector {
    recent: VecDeque<u32>,
}

impl KonamiDetector {
    /// Records a key. Returns `true` when the window matches the sequence;
    /// the window is cleared on a match.
    pub fn push(&mut self, key_code: u32) -> bool {
        self.recent.push_back(key_code);
        if self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }

        if self.recent.iter().eq(KONAMI_SEQUENCE.iter()) {
            self.recent.clear();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(detector: &mut KonamiDetector, keys: &[u32]) -> Vec<bool> {
        keys.iter().map(|k| detector.push(*k)).collect()
    }

    #[test]
    fn matches_only_on_the_last_key() {
        let mut detector = KonamiDetector::default();
        let hits = feed(&mut detector, &KONAMI_SEQUENCE);
        assert_eq!(hits.iter().filter(|h| **h).count(), 1);
        assert!(hits[9]);
    }

    #[test]
    fn noise_before_the_sequence_is_forgotten() {
        let mut detector = KonamiDetector::default();
        feed(&mut detector, &[13, 27, 38, 65, 66]);
        assert!(*feed(&mut detector, &KONAMI_SEQUENCE).last().unwrap());
    }

    #[test]
    fn a_match_resets_the_window() {
        let mut detector = KonamiDetector::default();
        feed(&mut detector, &KONAMI_SEQUENCE);
        // the tail of a finished sequence must not count towards the next one
        assert!(!detector.push(65));
        assert!(!feed(&mut detector, &KONAMI_SEQUENCE[1..]).into_iter().any(|h| h));
    }

    #[test]
    fn broken_sequence_does_not_match() {
        let mut detector = KonamiDetector::default();
        let mut keys = KONAMI_SEQUENCE.to_vec();
        keys[4] = 39;
        assert!(!feed(&mut detector, &keys).into_iter().any(|h| h));
    }
}
