//! The single owner of transient page state.
//!
//! Event listeners hand their event data to a [`PageController`] method and
//! get back what the host still has to do (arm a timer, leave fullscreen,
//! redraw). The controller itself never touches the DOM.

use log::info;

use super::konami::KonamiDetector;
use super::modal::ImagePreview;
use super::nav::{active_section, NavState};
use crate::config::LandingConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayPhase {
    Visible,
    Fading,
    Gone,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MessagePhase {
    Hidden,
    Shown,
    Fading,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notice {
    pub visible: bool,
    generation: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EasterEgg {
    pub logo_spinning: bool,
    pub message: MessagePhase,
    generation: u32,
}

impl Default for EasterEgg {
    fn default() -> Self {
        Self {
            logo_spinning: false,
            message: MessagePhase::Hidden,
            generation: 0,
        }
    }
}

/// Which modal an Escape press dismissed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dismissed {
    Preview,
    Demo,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyOutcome {
    pub dismissed: Option<Dismissed>,
    /// Generation of a freshly started Easter egg.
    pub easter_egg: Option<u32>,
}

impl KeyOutcome {
    pub fn changed(&self) -> bool {
        self.dismissed.is_some() || self.easter_egg.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageController {
    config: LandingConfig,
    pub nav: NavState,
    konami: KonamiDetector,
    pub preview: ImagePreview,
    pub demo_open: bool,
    pub notice: Notice,
    pub easter_egg: EasterEgg,
    pub overlay: OverlayPhase,
}

impl PageController {
    pub fn new(config: LandingConfig) -> Self {
        Self {
            config,
            nav: NavState::default(),
            konami: KonamiDetector::default(),
            preview: ImagePreview::default(),
            demo_open: false,
            notice: Notice::default(),
            easter_egg: EasterEgg::default(),
            overlay: OverlayPhase::Visible,
        }
    }

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    /// Whether the page behind an overlay must stop scrolling.
    pub fn body_locked(&self) -> bool {
        self.nav.menu_open || self.preview.open || self.demo_open
    }

    pub fn navbar_background(&self) -> &'static str {
        if self.nav.menu_open {
            self.config.nav_theme.open_background
        } else {
            self.config.nav_theme.closed_background
        }
    }

    /// `sections` are `(id, offset_top)` pairs in document order.
    pub fn on_scroll(&mut self, scroll_top: f64, sections: &[(String, f64)]) -> bool {
        let moved = self.nav.on_scroll(scroll_top, self.config.navbar_threshold);
        let current = active_section(scroll_top, sections, self.config.active_section_offset);
        let relinked = self.nav.set_active_section(current);
        moved || relinked
    }

    pub fn toggle_menu(&mut self) {
        self.nav.toggle_menu();
    }

    pub fn close_menu(&mut self) -> bool {
        self.nav.close_menu()
    }

    pub fn open_demo(&mut self) -> bool {
        !std::mem::replace(&mut self.demo_open, true)
    }

    pub fn close_demo(&mut self) -> bool {
        std::mem::replace(&mut self.demo_open, false)
    }

    /// `key` is `KeyboardEvent.key`, `key_code` the legacy numeric code.
    pub fn on_key(&mut self, key: &str, key_code: u32) -> KeyOutcome {
        let mut outcome = KeyOutcome::default();

        if key == "Escape" {
            // only the top-most modal goes away
            if self.preview.open {
                self.preview.close();
                outcome.dismissed = Some(Dismissed::Preview);
            } else if self.demo_open {
                self.demo_open = false;
                outcome.dismissed = Some(Dismissed::Demo);
            }
        }

        if self.konami.push(key_code) {
            info!("Easter egg found");
            self.easter_egg.generation = self.easter_egg.generation.wrapping_add(1);
            self.easter_egg.logo_spinning = true;
            self.easter_egg.message = MessagePhase::Shown;
            outcome.easter_egg = Some(self.easter_egg.generation);
        }

        outcome
    }

    pub fn stop_logo_spin(&mut self, generation: u32) -> bool {
        if generation != self.easter_egg.generation || !self.easter_egg.logo_spinning {
            return false;
        }
        self.easter_egg.logo_spinning = false;
        true
    }

    pub fn fade_easter_egg(&mut self, generation: u32) -> bool {
        if generation != self.easter_egg.generation || self.easter_egg.message != MessagePhase::Shown {
            return false;
        }
        self.easter_egg.message = MessagePhase::Fading;
        true
    }

    pub fn remove_easter_egg(&mut self, generation: u32) -> bool {
        if generation != self.easter_egg.generation || self.easter_egg.message != MessagePhase::Fading {
            return false;
        }
        self.easter_egg.message = MessagePhase::Hidden;
        true
    }

    /// The user left fullscreen on their own. Returns `true` if that closed
    /// the preview.
    pub fn on_fullscreen_exit(&mut self) -> bool {
        if !self.preview.open {
            return false;
        }
        self.preview.close()
    }

    /// Shows the success notification; the returned generation must be handed
    /// back to [`PageController::hide_notice`].
    pub fn show_notice(&mut self) -> u32 {
        self.notice.generation = self.notice.generation.wrapping_add(1);
        self.notice.visible = true;
        self.notice.generation
    }

    pub fn hide_notice(&mut self, generation: u32) -> bool {
        if generation != self.notice.generation || !self.notice.visible {
            return false;
        }
        self.notice.visible = false;
        true
    }

    pub fn fade_overlay(&mut self) -> bool {
        if self.overlay != OverlayPhase::Visible {
            return false;
        }
        self.overlay = OverlayPhase::Fading;
        true
    }

    pub fn remove_overlay(&mut self) -> bool {
        if self.overlay != OverlayPhase::Fading {
            return false;
        }
        self.overlay = OverlayPhase::Gone;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::konami::KONAMI_SEQUENCE;

    fn controller() -> PageController {
        PageController::new(LandingConfig::default())
    }

    fn open_preview(page: &mut PageController) {
        let generation = page.preview.begin().unwrap();
        page.preview.open(generation);
    }

    #[test]
    fn escape_closes_the_preview_before_the_demo_modal() {
        let mut page = controller();
        page.open_demo();
        open_preview(&mut page);

        let first = page.on_key("Escape", 27);
        assert_eq!(first.dismissed, Some(Dismissed::Preview));
        assert!(page.demo_open);

        let second = page.on_key("Escape", 27);
        assert_eq!(second.dismissed, Some(Dismissed::Demo));
        assert!(!page.demo_open);

        assert!(!page.on_key("Escape", 27).changed());
    }

    #[test]
    fn konami_sequence_starts_the_easter_egg() {
        let mut page = controller();
        let mut generation = None;
        for code in KONAMI_SEQUENCE {
            generation = page.on_key("x", code).easter_egg.or(generation);
        }
        let generation = generation.unwrap();
        assert!(page.easter_egg.logo_spinning);
        assert_eq!(page.easter_egg.message, MessagePhase::Shown);

        assert!(page.fade_easter_egg(generation));
        assert!(page.remove_easter_egg(generation));
        assert!(page.stop_logo_spin(generation));
        assert_eq!(page.easter_egg, EasterEgg { generation, ..EasterEgg::default() });
    }

    #[test]
    fn stale_notice_timer_does_not_hide_a_newer_notice() {
        let mut page = controller();
        let first = page.show_notice();
        let second = page.show_notice();
        assert!(!page.hide_notice(first));
        assert!(page.notice.visible);
        assert!(page.hide_notice(second));
        assert!(!page.notice.visible);
    }

    #[test]
    fn body_lock_follows_every_overlay() {
        let mut page = controller();
        assert!(!page.body_locked());
        page.toggle_menu();
        assert!(page.body_locked());
        assert_eq!(page.navbar_background(), "rgba(255, 255, 255, 0.95)");
        page.close_menu();
        assert!(!page.body_locked());
        assert_eq!(page.navbar_background(), "rgba(255, 255, 255, 0.05)");

        page.open_demo();
        page.toggle_menu();
        page.close_menu();
        // the demo modal still holds the lock
        assert!(page.body_locked());
    }

    #[test]
    fn manual_fullscreen_exit_only_matters_while_open() {
        let mut page = controller();
        assert!(!page.on_fullscreen_exit());
        open_preview(&mut page);
        assert!(page.on_fullscreen_exit());
        assert!(!page.preview.open);
    }

    #[test]
    fn scroll_reports_link_and_navbar_changes() {
        let mut page = controller();
        let sections = vec![("home".to_string(), 0.0), ("features".to_string(), 1000.0)];
        assert!(page.on_scroll(0.0, &sections));
        assert!(!page.on_scroll(10.0, &sections));
        assert!(page.on_scroll(950.0, &sections));
        assert_eq!(page.nav.active_section.as_deref(), Some("features"));
        assert!(page.nav.hidden);
    }

    #[test]
    fn overlay_fades_then_goes() {
        let mut page = controller();
        assert!(!page.remove_overlay());
        assert!(page.fade_overlay());
        assert!(!page.fade_overlay());
        assert!(page.remove_overlay());
        assert_eq!(page.overlay, OverlayPhase::Gone);
    }
}
