/// Navbar state driven by scrolling and the hamburger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    last_scroll_top: f64,
    pub scrolled: bool,
    pub hidden: bool,
    pub menu_open: bool,
    pub active_section: Option<String>,
}

impl NavState {
    /// Applies a scroll position. Returns `true` if anything visible changed.
    pub fn on_scroll(&mut self, scroll_top: f64, threshold: f64) -> bool {
        let before = (self.scrolled, self.hidden);

        self.scrolled = scroll_top > threshold;
        // hide while moving down past the threshold, show on any upward move
        self.hidden = scroll_top > self.last_scroll_top && scroll_top > threshold;
        self.last_scroll_top = scroll_top.max(0.0);

        before != (self.scrolled, self.hidden)
    }

    pub fn set_active_section(&mut self, section: Option<String>) -> bool {
        if self.active_section == section {
            return false;
        }
        self.active_section = section;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }
}

/// The last section whose top, less `offset`, has been scrolled past.
/// `sections` holds `(id, offset_top)` in document order.
pub fn active_section(scroll_top: f64, sections: &[(String, f64)], offset: f64) -> Option<String> {
    sections
        .iter()
        .filter(|(_, top)| scroll_top >= top - offset)
        .last()
        .map(|(id, _)| id.clone())
}

/// Delay before the menu closes after the link at `index` was clicked.
pub fn menu_close_delay(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_on_the_way_down_and_shows_on_the_way_up() {
        let mut nav = NavState::default();

        assert!(!nav.on_scroll(50.0, 100.0));
        assert!(!nav.scrolled && !nav.hidden);

        assert!(nav.on_scroll(300.0, 100.0));
        assert!(nav.scrolled && nav.hidden);

        assert!(nav.on_scroll(250.0, 100.0));
        assert!(nav.scrolled && !nav.hidden);

        nav.on_scroll(40.0, 100.0);
        assert!(!nav.scrolled && !nav.hidden);
    }

    #[test]
    fn overscroll_clamps_the_last_position() {
        let mut nav = NavState::default();
        nav.on_scroll(-30.0, 100.0);
        // moving from the clamped 0 to 120 counts as scrolling down
        nav.on_scroll(120.0, 100.0);
        assert!(nav.hidden);
    }

    #[test]
    fn picks_the_last_section_scrolled_past() {
        let sections = vec![
            ("home".to_string(), 0.0),
            ("features".to_string(), 900.0),
            ("outcomes".to_string(), 1800.0),
        ];
        assert_eq!(active_section(0.0, &sections, 100.0).as_deref(), Some("home"));
        assert_eq!(active_section(799.0, &sections, 100.0).as_deref(), Some("home"));
        assert_eq!(active_section(800.0, &sections, 100.0).as_deref(), Some("features"));
        assert_eq!(active_section(5000.0, &sections, 100.0).as_deref(), Some("outcomes"));

        let late = vec![("pricing".to_string(), 400.0)];
        assert_eq!(active_section(0.0, &late, 100.0), None);
    }

    #[test]
    fn active_section_changes_are_reported_once() {
        let mut nav = NavState::default();
        assert!(nav.set_active_section(Some("home".into())));
        assert!(!nav.set_active_section(Some("home".into())));
        assert!(nav.set_active_section(None));
    }

    #[test]
    fn menu_links_close_in_a_cascade() {
        assert_eq!(menu_close_delay(0, 50), 0);
        assert_eq!(menu_close_delay(3, 50), 150);

        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        assert!(nav.close_menu());
        assert!(!nav.close_menu());
    }
}
