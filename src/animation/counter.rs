use super::easing::ease_out_quart;

pub const BASE_DURATION_MS: f64 = 2000.0;
pub const DURATION_STEP_MS: f64 = 200.0;
pub const START_STEP_MS: f64 = 100.0;

/// Renders a counter value. Targets of 10 and above show a truncated integer,
/// smaller targets show one decimal. The rule looks at the target, never at
/// the intermediate value.
pub fn format_counter(target: f64, value: f64) -> String {
    if target >= 10.0 {
        format!("{}", value.trunc())
    } else {
        format!("{:.1}", value)
    }
}

/// Parses a `data-target` attribute. Anything that is not a finite number is
/// rejected so the counter is skipped.
pub fn parse_target(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterPhase {
    Pending,
    Running,
    Complete,
}

/// One number counting up from zero.
///
/// Elapsed time is measured from `invoked_at` even though the first frame only
/// lands at `invoked_at + index * 100ms`, so later counters start part-way in.
#[derive(Clone, Debug)]
pub struct CounterAnimation<K> {
    pub node: K,
    target: f64,
    invoked_at: f64,
    start_at: f64,
    duration: f64,
    phase: CounterPhase,
    display: Option<String>,
}

impl<K: Clone> CounterAnimation<K> {
    pub fn new(node: K, target: f64, index: usize, invoked_at: f64) -> Self {
        Self {
            node,
            target,
            invoked_at,
            start_at: invoked_at + index as f64 * START_STEP_MS,
            duration: BASE_DURATION_MS + index as f64 * DURATION_STEP_MS,
            phase: CounterPhase::Pending,
            display: None,
        }
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn start_at(&self) -> f64 {
        self.start_at
    }

    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    /// Advances the counter to `now`. Returns the new text when a frame was
    /// rendered; completed or not-yet-started counters return `None`.
    pub fn tick(&mut self, now: f64) -> Option<String> {
        match self.phase {
            CounterPhase::Complete => return None,
            CounterPhase::Pending if now < self.start_at => return None,
            CounterPhase::Pending => self.phase = CounterPhase::Running,
            CounterPhase::Running => {}
        }

        let elapsed = (now - self.invoked_at).max(0.0);
        let progress = (elapsed / self.duration).min(1.0);
        let value = self.target * ease_out_quart(progress);
        let text = format_counter(self.target, value);

        if progress >= 1.0 {
            self.phase = CounterPhase::Complete;
        }
        self.display = Some(text.clone());
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_the_raw_target() {
        assert_eq!(format_counter(42.0, 42.0), "42");
        assert_eq!(format_counter(7.3, 7.3), "7.3");
        assert_eq!(format_counter(10.0, 10.0), "10");
        assert_eq!(format_counter(9.999, 9.999), "10.0");
        // mid-animation value below 10 still renders as an integer
        assert_eq!(format_counter(42.0, 9.5), "9");
        assert_eq!(format_counter(99.5, 99.5), "99");
    }

    #[test]
    fn large_targets_finish_on_the_exact_integer() {
        assert_eq!(format_counter(1.0e20, 1.0e20), "100000000000000000000");

        let mut counter = CounterAnimation::new((), 1.0e20, 0, 0.0);
        assert_eq!(counter.tick(5000.0), Some("100000000000000000000".to_string()));
        assert_eq!(counter.phase(), CounterPhase::Complete);
    }

    #[test]
    fn parses_numeric_targets_only() {
        assert_eq!(parse_target("98.5"), Some(98.5));
        assert_eq!(parse_target(" 3 "), Some(3.0));
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target("NaN"), None);
        assert_eq!(parse_target("inf"), None);
    }

    #[test]
    fn final_frame_equals_formatted_target_and_stays_there() {
        let mut counter = CounterAnimation::new((), 42.0, 0, 0.0);
        assert_eq!(counter.tick(1000.0).is_some(), true);
        assert_eq!(counter.tick(2000.0), Some("42".to_string()));
        assert_eq!(counter.phase(), CounterPhase::Complete);

        for t in [2016.0, 5000.0, 1.0e9] {
            assert_eq!(counter.tick(t), None);
            assert_eq!(counter.display(), Some("42"));
        }
    }

    #[test]
    fn decimal_target_lands_exactly() {
        let mut counter = CounterAnimation::new((), 7.3, 0, 0.0);
        counter.tick(500.0);
        assert_eq!(counter.tick(2500.0), Some("7.3".to_string()));
    }

    #[test]
    fn later_counters_start_later_and_run_longer() {
        let mut third = CounterAnimation::new((), 100.0, 2, 1000.0);
        assert_eq!(third.start_at(), 1200.0);
        assert_eq!(third.duration(), 2400.0);

        assert_eq!(third.tick(1199.0), None);
        assert_eq!(third.phase(), CounterPhase::Pending);

        // first frame already reflects 200ms of progress
        let first = third.tick(1200.0).unwrap();
        assert_ne!(first, "0");
        assert_eq!(third.phase(), CounterPhase::Running);

        assert_eq!(third.tick(3399.0).map(|s| s != "100"), Some(true));
        assert_eq!(third.tick(3400.0), Some("100".to_string()));
        assert_eq!(third.phase(), CounterPhase::Complete);
    }

    #[test]
    fn values_never_decrease() {
        let mut counter = CounterAnimation::new((), 250.0, 0, 0.0);
        let mut last = -1i64;
        let mut t = 0.0;
        while counter.phase() != CounterPhase::Complete {
            if let Some(text) = counter.tick(t) {
                let value: i64 = text.parse().unwrap();
                assert!(value >= last);
                last = value;
            }
            t += 16.0;
        }
        assert_eq!(last, 250);
    }
}
