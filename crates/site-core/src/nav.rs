//! Navigation Bar State
//!
//! One navigation model shared by every page: a link set, a visual
//! variant, and two independent flags driven by scroll and by the mobile
//! menu button.

use serde::Serialize;

use crate::route::Route;

/// Vertical scroll offset (px) at which the bar turns opaque
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// A navigation link
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(name: &'static str, href: &'static str) -> Self {
        Self { name, href }
    }

    /// In-page anchors (`#section`) scroll instead of routing
    pub fn is_anchor(&self) -> bool {
        self.href.starts_with('#')
    }
}

/// Links used by the inner pages
pub const PAGE_LINKS: &[NavLink] = &[
    NavLink::new("About Us", Route::AboutUs.path()),
    NavLink::new("Solutions", Route::Solutions.path()),
    NavLink::new("Industries", Route::Industries.path()),
    NavLink::new("Regulations", Route::Regulations.path()),
];

/// Links used by the home page, which jump to its own sections
pub const HOME_LINKS: &[NavLink] = &[
    NavLink::new("About Us", "#about"),
    NavLink::new("Solutions", "#solutions"),
    NavLink::new("Industries", "#industries"),
    NavLink::new("Regulations", "#regulations"),
    NavLink::new("News", "#news"),
];

/// How the bar looks before the visitor scrolls
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum NavVariant {
    /// Transparent over the hero, opaque once scrolled
    #[default]
    Overlay,
    /// Always opaque
    Solid,
}

/// Per-page navigation configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavConfig {
    pub links: &'static [NavLink],
    pub variant: NavVariant,
}

impl NavConfig {
    pub const HOME: Self = Self {
        links: HOME_LINKS,
        variant: NavVariant::Overlay,
    };

    pub const PAGE: Self = Self {
        links: PAGE_LINKS,
        variant: NavVariant::Overlay,
    };

    pub const SOLID: Self = Self {
        links: PAGE_LINKS,
        variant: NavVariant::Solid,
    };
}

impl Default for NavConfig {
    fn default() -> Self {
        Self::PAGE
    }
}

/// Live state of the navigation bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub const fn new() -> Self {
        Self {
            scrolled: false,
            menu_open: false,
        }
    }

    /// Apply a window scroll offset. Leaves the menu untouched.
    ///
    /// Returns `true` when the scrolled flag changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y >= SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        if changed {
            tracing::debug!(scroll_y, scrolled, "nav style changed");
        }
        self.scrolled = scrolled;
        changed
    }

    /// Flip the mobile menu
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu after a link is followed
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Whether the bar renders with an opaque background
    pub const fn is_opaque(&self, variant: NavVariant) -> bool {
        match variant {
            NavVariant::Solid => true,
            NavVariant::Overlay => self.scrolled,
        }
    }

    /// CSS class list for the `<nav>` element
    pub const fn class(&self, variant: NavVariant) -> &'static str {
        if self.is_opaque(variant) {
            "site-nav site-nav--opaque"
        } else {
            "site-nav site-nav--transparent"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let mut nav = NavState::new();
        assert!(!nav.on_scroll(49.9));
        assert!(!nav.scrolled);
        assert!(nav.on_scroll(50.0));
        assert!(nav.scrolled);
        assert!(!nav.on_scroll(600.0));
        assert!(nav.on_scroll(0.0));
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_scroll_does_not_touch_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        nav.on_scroll(800.0);
        assert!(nav.menu_open);
        nav.on_scroll(0.0);
        assert!(nav.menu_open);
    }

    #[test]
    fn test_close_menu() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.menu_open);
        nav.close_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_solid_variant_always_opaque() {
        let nav = NavState::new();
        assert!(nav.is_opaque(NavVariant::Solid));
        assert!(!nav.is_opaque(NavVariant::Overlay));
        assert_eq!(nav.class(NavVariant::Overlay), "site-nav site-nav--transparent");
    }

    #[test]
    fn test_link_sets() {
        assert!(HOME_LINKS.iter().all(NavLink::is_anchor));
        assert!(PAGE_LINKS.iter().all(|link| !link.is_anchor()));
        assert_eq!(PAGE_LINKS[0].href, "/about-us");
    }
}
