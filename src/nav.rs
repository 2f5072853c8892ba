use serde::{Deserialize, Serialize};

use crate::motion::interpolate;

/// Fixed header height subtracted from programmatic scroll targets.
pub const HEADER_OFFSET: f64 = 80.0;
/// Fraction of a section that must be visible before it becomes active.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub section_id: String,
}

impl NavItem {
    pub fn new(label: &str, section_id: &str) -> Self {
        Self {
            label: label.to_string(),
            section_id: section_id.to_string(),
        }
    }
}

pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "hero"),
        NavItem::new("About", "about"),
        NavItem::new("Profile", "profile"),
        NavItem::new("Projects", "projects"),
        NavItem::new("Contact", "contact"),
    ]
}

/// A single visibility report for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation<'a> {
    pub section_id: &'a str,
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

impl Observation<'_> {
    fn crosses_threshold(&self) -> bool {
        self.is_intersecting && self.intersection_ratio >= VISIBILITY_THRESHOLD
    }
}

/// Tracks which navigation entry is active.
///
/// Reports are applied in arrival order and the last crossing report wins.
/// Reports of a section dropping below the threshold never clear the active
/// entry, so the last section scrolled into view stays highlighted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavHighlighter {
    items: Vec<NavItem>,
    active: Option<usize>,
    menu_open: bool,
}

impl NavHighlighter {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            active: None,
            menu_open: false,
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn active(&self) -> Option<&NavItem> {
        self.active.and_then(|i| self.items.get(i))
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active().map(|item| item.section_id.as_str())
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_id() == Some(section_id)
    }

    /// Applies one observation, returning `true` when the active entry changed.
    pub fn observe(&mut self, observation: Observation<'_>) -> bool {
        if !observation.crosses_threshold() {
            return false;
        }
        let Some(index) = self
            .items
            .iter()
            .position(|item| item.section_id == observation.section_id)
        else {
            return false;
        };
        let changed = self.active != Some(index);
        self.active = Some(index);
        changed
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Absolute scroll position that brings a section to just below the header.
///
/// `element_top` is the section's bounding rect top relative to the viewport.
pub fn scroll_target(element_top: f64, page_y_offset: f64) -> f64 {
    (element_top + page_y_offset - HEADER_OFFSET).max(0.0)
}

/// Scroll distance over which the navigation bar settles into its
/// condensed look.
const NAV_SETTLE_DISTANCE: f64 = 200.0;

/// Navigation bar look derived from the absolute scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavBarStyle {
    pub background_alpha: f64,
    pub shadow_alpha: f64,
    pub logo_scale: f64,
}

impl NavBarStyle {
    pub fn at(offset: f64) -> Self {
        let range = [0.0, NAV_SETTLE_DISTANCE];
        Self {
            background_alpha: interpolate(offset, &range, &[0.0, 0.8]),
            shadow_alpha: interpolate(offset, &range, &[0.0, 0.1]),
            logo_scale: interpolate(offset, &range, &[1.0, 0.9]),
        }
    }

    pub fn bar_style(&self) -> String {
        let shadow = if self.shadow_alpha > 0.0 {
            format!("0 4px 20px rgba(0, 0, 0, {:.3})", self.shadow_alpha)
        } else {
            "none".to_string()
        };
        format!(
            "background-color: rgba(236, 253, 245, {:.3}); box-shadow: {shadow};",
            self.background_alpha
        )
    }

    pub fn logo_style(&self) -> String {
        format!("transform: scale({:.3});", self.logo_scale)
    }
}

/// Section id named by a location hash such as `#projects`.
pub fn section_from_hash(hash: &str) -> Option<&str> {
    let id = hash.trim_start_matches('#').trim();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(section_id: &str, ratio: f64) -> Observation<'_> {
        Observation {
            section_id,
            is_intersecting: ratio > 0.0,
            intersection_ratio: ratio,
        }
    }

    #[test]
    fn test_no_active_section_initially() {
        let nav = NavHighlighter::new(default_items());
        assert_eq!(nav.active(), None);
        assert!(!nav.is_active("hero"));
    }

    #[test]
    fn test_section_becomes_active_at_half_visibility() {
        let mut nav = NavHighlighter::new(default_items());
        assert!(!nav.observe(seen("about", 0.3)));
        assert_eq!(nav.active_id(), None);
        assert!(nav.observe(seen("about", 0.5)));
        assert_eq!(nav.active_id(), Some("about"));
        assert_eq!(nav.active().map(|i| i.label.as_str()), Some("About"));
    }

    #[test]
    fn test_just_under_half_visibility_does_not_activate() {
        let mut nav = NavHighlighter::new(default_items());
        assert!(!nav.observe(seen("about", 0.4995)));
        assert_eq!(nav.active_id(), None);
    }

    #[test]
    fn test_simultaneous_crossings_last_event_wins() {
        let mut nav = NavHighlighter::new(default_items());
        nav.observe(seen("about", 0.6));
        nav.observe(seen("profile", 0.55));
        assert_eq!(nav.active_id(), Some("profile"));
    }

    #[test]
    fn test_leaving_section_keeps_highlight() {
        let mut nav = NavHighlighter::new(default_items());
        nav.observe(seen("projects", 0.9));
        assert!(!nav.observe(seen("projects", 0.0)));
        assert_eq!(nav.active_id(), Some("projects"));
    }

    #[test]
    fn test_unknown_section_ignored() {
        let mut nav = NavHighlighter::new(default_items());
        nav.observe(seen("hero", 1.0));
        assert!(!nav.observe(seen("footer", 1.0)));
        assert_eq!(nav.active_id(), Some("hero"));
    }

    #[test]
    fn test_repeat_observation_reports_no_change() {
        let mut nav = NavHighlighter::new(default_items());
        assert!(nav.observe(seen("contact", 0.7)));
        assert!(!nav.observe(seen("contact", 0.8)));
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = NavHighlighter::new(default_items());
        assert!(!nav.is_menu_open());
        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_scroll_target_applies_header_offset() {
        assert_eq!(scroll_target(400.0, 1200.0), 1520.0);
        assert_eq!(scroll_target(-300.0, 1200.0), 820.0);
        assert_eq!(scroll_target(20.0, 0.0), 0.0);
    }

    #[test]
    fn test_nav_bar_settles_after_two_hundred_pixels() {
        let top = NavBarStyle::at(0.0);
        assert_eq!(top.background_alpha, 0.0);
        assert_eq!(top.logo_scale, 1.0);
        assert_eq!(
            top.bar_style(),
            "background-color: rgba(236, 253, 245, 0.000); box-shadow: none;"
        );

        let settled = NavBarStyle::at(450.0);
        assert_eq!(settled, NavBarStyle::at(200.0));
        assert_eq!(settled.logo_style(), "transform: scale(0.900);");
        assert_eq!(
            settled.bar_style(),
            "background-color: rgba(236, 253, 245, 0.800); box-shadow: 0 4px 20px rgba(0, 0, 0, 0.100);"
        );
    }

    #[test]
    fn test_section_from_hash() {
        assert_eq!(section_from_hash("#projects"), Some("projects"));
        assert_eq!(section_from_hash("about"), Some("about"));
        assert_eq!(section_from_hash("#"), None);
        assert_eq!(section_from_hash(""), None);
    }
}
