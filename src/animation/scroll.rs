use super::easing::ease_in_out_cubic;

pub const SMOOTH_SCROLL_MS: f64 = 1000.0;
/// Breathing room left above an anchor target, on top of the navbar height.
pub const ANCHOR_GAP_PX: f64 = 20.0;

pub fn anchor_destination(target_offset_top: f64, navbar_height: f64) -> f64 {
    target_offset_top - navbar_height - ANCHOR_GAP_PX
}

/// A window scroll tween. The clock starts on the first frame, not on
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    distance: f64,
    duration: f64,
    started_at: Option<f64>,
    done: bool,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            distance: to - from,
            duration: SMOOTH_SCROLL_MS,
            started_at: None,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Scroll position for the frame at `now`, or `None` once finished.
    pub fn frame(&mut self, now: f64) -> Option<f64> {
        if self.done {
            return None;
        }
        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now - started_at;
        if elapsed >= self.duration {
            self.done = true;
            return Some(self.from + self.distance);
        }
        Some(ease_in_out_cubic(elapsed, self.from, self.distance, self.duration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_offsets_clear_the_navbar() {
        assert_eq!(anchor_destination(1500.0, 80.0), 1400.0);
    }

    #[test]
    fn tween_starts_on_first_frame_and_lands_on_target() {
        let mut scroll = ScrollAnimation::new(0.0, 1000.0);
        assert_eq!(scroll.frame(5000.0), Some(0.0));
        let mid = scroll.frame(5500.0).unwrap();
        assert!((mid - 500.0).abs() < 1e-9);
        assert_eq!(scroll.frame(6000.0), Some(1000.0));
        assert!(scroll.is_done());
        assert_eq!(scroll.frame(6016.0), None);
    }

    #[test]
    fn upward_scrolls_work_too() {
        let mut scroll = ScrollAnimation::new(2000.0, 500.0);
        scroll.frame(0.0);
        let quarter = scroll.frame(250.0).unwrap();
        assert!(quarter < 2000.0 && quarter > 1250.0);
        assert_eq!(scroll.frame(1200.0), Some(500.0));
    }
}
