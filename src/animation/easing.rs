/// Quartic ease-out, `1 - (1 - p)^4`. Input is clamped to `[0, 1]`.
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}

/// Penner-style cubic ease-in-out.
///
/// `t` is the elapsed time, `start` the initial value, `change` the total
/// distance and `duration` the length of the tween, all in the same units.
pub fn ease_in_out_cubic(t: f64, start: f64, change: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return start + change;
    }
    let mut t = t / (duration / 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t * t + start;
    }
    t -= 2.0;
    change / 2.0 * (t * t * t + 2.0) + start
}

/// CSS timing functions used by the page transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// `cubic-bezier(0.4, 0, 0.2, 1)`
    Standard,
    Ease,
    Linear,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Standard => "cubic-bezier(0.4, 0, 0.2, 1)",
            Easing::Ease => "ease",
            Easing::Linear => "linear",
        }
    }
}

/// A transition rule applied to both `opacity` and `transform`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self { duration_ms, easing }
    }

    pub fn css(&self) -> String {
        let seconds = format_seconds(self.duration_ms);
        format!(
            "opacity {secs}s {curve}, transform {secs}s {curve}",
            secs = seconds,
            curve = self.easing.css()
        )
    }
}

fn format_seconds(ms: u32) -> String {
    let seconds = ms as f64 / 1000.0;
    if seconds.fract() == 0.0 {
        format!("{}", seconds as u64)
    } else {
        format!("{}", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quartic_hits_endpoints_exactly() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(1.7), 1.0);
        assert!(ease_out_quart(0.5) > 0.9);
    }

    #[test]
    fn cubic_in_out_is_symmetric_around_midpoint() {
        let mid = ease_in_out_cubic(500.0, 0.0, 1000.0, 1000.0);
        assert!((mid - 500.0).abs() < 1e-9);
        assert_eq!(ease_in_out_cubic(0.0, 200.0, 300.0, 1000.0), 200.0);
        assert!((ease_in_out_cubic(1000.0, 200.0, 300.0, 1000.0) - 500.0).abs() < 1e-9);
        assert!((ease_in_out_cubic(1000.0, 800.0, -300.0, 1000.0) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn transition_css_matches_stylesheet_syntax() {
        let t = Transition::new(1200, Easing::Standard);
        assert_eq!(
            t.css(),
            "opacity 1.2s cubic-bezier(0.4, 0, 0.2, 1), transform 1.2s cubic-bezier(0.4, 0, 0.2, 1)"
        );
        assert_eq!(Transition::new(600, Easing::Ease).css(), "opacity 0.6s ease, transform 0.6s ease");
        assert_eq!(Transition::new(2000, Easing::Linear).css(), "opacity 2s linear, transform 2s linear");
    }
}
