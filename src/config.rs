use crate::animation::reveal::RevealConfig;

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    "http://localhost:3001/demo-request"  // Local echo endpoint while developing
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    "https://script.google.com/macros/s/AKfycbynkW3ZcW9Dw8JfbLOdViQLs-Z9Wn4yRBbFlyMpcL48iGfYWSX-BYaU5WKUzzZgq-y7Tg/exec"
}

/// Elements whose appearance cascades inside a revealed section.
pub const STAGGER_CHILDREN: &str = ".problem-card, .advantage-card, .feature-card, .stat-item, .step-card, .outcome-card, .highlight-card, .credential-item, .security-item, .pricing-card";

/// Elements that also get revealed one by one as they scroll in.
pub const REVEAL_CARDS: &str = ".problem-card, .advantage-card, .feature-card, .stat-item";

/// Cards with the hover lift and magnetic tilt.
pub const HOVER_CARDS: &str = ".problem-card, .advantage-card, .feature-card, .solution-card, .hero-card";

pub const COUNTER_SELECTOR: &str = ".stat-number";

#[derive(Clone, Debug, PartialEq)]
pub struct NavTheme {
    pub open_background: &'static str,
    pub closed_background: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LandingConfig {
    pub sections: RevealConfig,
    /// Second, card-level pass. `None` turns it off.
    pub cards: Option<RevealConfig>,
    /// Scroll distance after which the navbar compacts and may hide.
    pub navbar_threshold: f64,
    /// Offset applied when deciding which section a nav link highlights.
    pub active_section_offset: f64,
    /// Per-link delay when closing the mobile menu.
    pub menu_close_step_ms: u32,
    pub nav_theme: NavTheme,
    pub notification_ms: u32,
    pub overlay_hold_ms: u32,
    pub overlay_fade_ms: u32,
    pub preview_loader_fade_in_ms: u32,
    pub preview_open_delay_ms: u32,
    pub preview_loader_fade_out_ms: u32,
    pub easter_egg_spin_ms: u32,
    pub easter_egg_message_ms: u32,
    pub easter_egg_fade_ms: u32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            sections: RevealConfig::sections("outcomes"),
            cards: Some(RevealConfig::cards()),
            navbar_threshold: 100.0,
            active_section_offset: 100.0,
            menu_close_step_ms: 50,
            nav_theme: NavTheme {
                open_background: "rgba(255, 255, 255, 0.95)",
                closed_background: "rgba(255, 255, 255, 0.05)",
            },
            notification_ms: 5000,
            overlay_hold_ms: 1000,
            overlay_fade_ms: 500,
            preview_loader_fade_in_ms: 10,
            preview_open_delay_ms: 800,
            preview_loader_fade_out_ms: 300,
            easter_egg_spin_ms: 4000,
            easter_egg_message_ms: 3000,
            easter_egg_fade_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_triggers_counters_from_outcomes() {
        let config = LandingConfig::default();
        let stats = config.sections.stats.as_ref().unwrap();
        assert_eq!(stats.section_id, "outcomes");
        assert_eq!(stats.delay_ms, 500.0);
        assert_eq!(config.sections.threshold, 0.15);
        assert_eq!(config.cards.as_ref().map(|c| c.threshold), Some(0.1));
    }

    #[test]
    fn every_revealed_card_is_also_a_stagger_child() {
        let children: Vec<&str> = STAGGER_CHILDREN.split(", ").collect();
        for card in REVEAL_CARDS.split(", ") {
            assert!(children.contains(&card), "{card}");
        }
    }
}
