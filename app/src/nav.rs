//! Navigation model for the landing page header.
//!
//! Holds the static menu entries, the tunable thresholds, and the small state
//! machine behind the navbar. Nothing in here touches the DOM, so every
//! transition can be exercised from plain unit tests.

use icondata::{BsBuilding, BsHouse, BsInfoCircle, BsTelephone, Icon};
use serde::Deserialize;

/// A single entry of the navigation menu.
#[derive(Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

impl NavItem {
    /// Id of the section this entry scrolls to.
    #[must_use]
    pub fn anchor_id(&self) -> &'static str {
        anchor_id(self.href)
    }
}

/// The fixed menu, in display order.
#[must_use]
pub fn nav_items() -> [NavItem; 4] {
    [
        NavItem {
            label: "Home",
            href: "/#home",
            icon: BsHouse,
        },
        NavItem {
            label: "About",
            href: "/#about",
            icon: BsInfoCircle,
        },
        NavItem {
            label: "Properties",
            href: "/#properties",
            icon: BsBuilding,
        },
        NavItem {
            label: "Contact",
            href: "/#contact",
            icon: BsTelephone,
        },
    ]
}

/// Section targeted by the brand link.
pub const HOME_ANCHOR: &str = "home";
/// Section targeted by the "Get in touch" call to action.
pub const CONTACT_ANCHOR: &str = "contact";

/// Extracts the fragment of `href`: everything after the last `#`.
///
/// Links without a fragment yield an empty id, which the scroll handler
/// treats as a no-op.
#[must_use]
pub fn anchor_id(href: &str) -> &str {
    href.rsplit_once('#').map_or("", |(_, id)| id)
}

/// Whether a pointer-down `target` lies inside the mobile panel or its toggle.
///
/// A missing target (e.g. an event from a non-node) counts as outside.
pub fn pointer_inside_menu<T>(
    target: Option<T>,
    in_panel: impl Fn(&T) -> bool,
    in_toggle: impl Fn(&T) -> bool,
) -> bool {
    target.is_some_and(|target| in_panel(&target) || in_toggle(&target))
}

/// Pixel thresholds driving the navbar behavior.
///
/// Missing fields fall back to the defaults when deserialized, so a partial
/// override such as `{"header_offset": 96}` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Vertical scroll position past which the header switches to its compact style.
    pub scroll_threshold: f64,
    /// Viewport width at which the desktop layout takes over.
    pub desktop_breakpoint: f64,
    /// Space reserved above a scroll target for the fixed header.
    pub header_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 20.0,
            desktop_breakpoint: 768.0,
            header_offset: 80.0,
        }
    }
}

impl NavConfig {
    #[must_use]
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scroll_threshold
    }

    #[must_use]
    pub fn is_desktop(&self, width: f64) -> bool {
        width >= self.desktop_breakpoint
    }

    /// Absolute scroll position that brings an element just below the header.
    ///
    /// `element_top` is relative to the viewport, as reported by
    /// `getBoundingClientRect`.
    #[must_use]
    pub fn scroll_target(&self, element_top: f64, scroll_offset: f64) -> f64 {
        element_top + scroll_offset - self.header_offset
    }
}

/// UI state of the navbar.
///
/// Every transition returns `Some(next)` only when the state actually
/// changes, letting callers skip redundant signal writes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    #[must_use]
    pub const fn close(self) -> Option<Self> {
        if self.menu_open {
            Some(Self {
                menu_open: false,
                ..self
            })
        } else {
            None
        }
    }

    #[must_use]
    pub fn on_scroll(self, scroll_y: f64, config: &NavConfig) -> Option<Self> {
        let scrolled = config.is_scrolled(scroll_y);
        (scrolled != self.scrolled).then_some(Self { scrolled, ..self })
    }

    #[must_use]
    pub fn on_resize(self, width: f64, config: &NavConfig) -> Option<Self> {
        if config.is_desktop(width) {
            self.close()
        } else {
            None
        }
    }

    /// Pointer-down anywhere on the page. `inside_menu` covers both the
    /// mobile panel and the toggle button.
    #[must_use]
    pub const fn on_pointer_down(self, inside_menu: bool) -> Option<Self> {
        if inside_menu { None } else { self.close() }
    }

    /// Navigating to a section always dismisses the mobile menu.
    #[must_use]
    pub const fn on_link_click(self) -> Option<Self> {
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: NavState = NavState {
        menu_open: true,
        scrolled: false,
    };

    #[test]
    fn anchor_id_takes_fragment_after_last_hash() {
        assert_eq!(anchor_id("/#properties"), "properties");
        assert_eq!(anchor_id("#contact"), "contact");
        assert_eq!(anchor_id("/a#b#c"), "c");
        assert_eq!(anchor_id("/about"), "");
        assert_eq!(anchor_id("/#"), "");
    }

    #[test]
    fn nav_items_resolve_to_sections() {
        let items = nav_items();
        let ids: Vec<_> = items.iter().map(NavItem::anchor_id).collect();
        assert_eq!(ids, ["home", "about", "properties", "contact"]);
        assert_eq!(items[3].anchor_id(), CONTACT_ANCHOR);
        assert_eq!(items[0].anchor_id(), HOME_ANCHOR);
    }

    #[test]
    fn toggle_flips_menu_only() {
        let state = NavState {
            menu_open: false,
            scrolled: true,
        };
        let opened = state.toggled();
        assert!(opened.menu_open);
        assert!(opened.scrolled);
        assert_eq!(opened.toggled(), state);
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        let config = NavConfig::default();
        let state = NavState::default();
        assert_eq!(state.on_scroll(20.0, &config), None);
        let scrolled = state.on_scroll(21.0, &config).unwrap();
        assert!(scrolled.scrolled);
        assert_eq!(scrolled.on_scroll(500.0, &config), None);
        assert_eq!(scrolled.on_scroll(0.0, &config), Some(NavState::default()));
    }

    #[test]
    fn resize_closes_open_menu_on_desktop() {
        let config = NavConfig::default();
        assert_eq!(OPEN.on_resize(767.0, &config), None);
        assert_eq!(OPEN.on_resize(768.0, &config), Some(NavState::default()));
        assert_eq!(NavState::default().on_resize(1280.0, &config), None);
    }

    #[test]
    fn pointer_down_outside_closes() {
        assert_eq!(OPEN.on_pointer_down(true), None);
        assert_eq!(OPEN.on_pointer_down(false), Some(NavState::default()));
        assert_eq!(NavState::default().on_pointer_down(false), None);
    }

    #[test]
    fn pointer_containment_checks_panel_and_toggle() {
        // Targets modelled as element paths; containers match by prefix.
        let in_panel = |path: &&str| path.starts_with("nav/mobile-menu");
        let in_toggle = |path: &&str| path.starts_with("nav/menu-toggle");

        assert!(pointer_inside_menu(Some("nav/mobile-menu/a/span"), in_panel, in_toggle));
        assert!(pointer_inside_menu(Some("nav/menu-toggle/svg"), in_panel, in_toggle));
        assert!(!pointer_inside_menu(Some("main/section#about"), in_panel, in_toggle));
        assert!(!pointer_inside_menu(None, in_panel, in_toggle));
    }

    #[test]
    fn click_inside_open_menu_keeps_it_open() {
        let in_panel = |path: &&str| path.starts_with("nav/mobile-menu");
        let in_toggle = |path: &&str| path.starts_with("nav/menu-toggle");

        let inside = pointer_inside_menu(Some("nav/mobile-menu/a"), in_panel, in_toggle);
        assert_eq!(OPEN.on_pointer_down(inside), None);

        let outside = pointer_inside_menu(Some("main/section#home"), in_panel, in_toggle);
        assert_eq!(OPEN.on_pointer_down(outside), Some(NavState::default()));
    }

    #[test]
    fn link_click_closes_menu() {
        assert_eq!(OPEN.on_link_click(), Some(NavState::default()));
        assert_eq!(NavState::default().on_link_click(), None);
    }

    #[test]
    fn scroll_target_reserves_header_space() {
        let config = NavConfig::default();
        assert!((config.scroll_target(400.0, 1200.0) - 1520.0).abs() < f64::EPSILON);
        assert!((config.scroll_target(-300.0, 1200.0) - 820.0).abs() < f64::EPSILON);
    }

    #[test]
    fn config_overrides_keep_defaults() {
        let config: NavConfig = serde_json::from_str(r#"{"header_offset": 96}"#).unwrap();
        assert!((config.header_offset - 96.0).abs() < f64::EPSILON);
        assert!((config.scroll_threshold - 20.0).abs() < f64::EPSILON);
        assert!((config.desktop_breakpoint - 768.0).abs() < f64::EPSILON);

        let empty: NavConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, NavConfig::default());
    }
}
