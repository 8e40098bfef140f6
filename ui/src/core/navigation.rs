//! Navigation model: the ordered menu table and active-link derivation.
//!
//! The table is a constant; the active flag is recomputed from the current
//! route path on every render and never stored.

use super::pages::Page;
use crate::i18n;

#[derive(Debug, PartialEq, Eq)]
pub struct NavigationItem {
    /// Fluent message id of the visible label.
    pub title_id: &'static str,
    pub target_page: Page,
}

impl NavigationItem {
    /// Localized label.
    pub fn title(&self) -> String {
        i18n::message(self.title_id)
    }

    pub fn url(&self) -> String {
        self.target_page.url()
    }

    /// Exact string equality against the current path.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.url() == current_path
    }
}

static NAVIGATION_ITEMS: [NavigationItem; 7] = [
    NavigationItem {
        title_id: "nav-home",
        target_page: Page::Home,
    },
    NavigationItem {
        title_id: "nav-comparison",
        target_page: Page::Comparison,
    },
    NavigationItem {
        title_id: "nav-rentals",
        target_page: Page::Rentals,
    },
    NavigationItem {
        title_id: "nav-guides",
        target_page: Page::Guides,
    },
    NavigationItem {
        title_id: "nav-hidden-gems",
        target_page: Page::HiddenGems,
    },
    NavigationItem {
        title_id: "nav-activities",
        target_page: Page::Activities,
    },
    NavigationItem {
        title_id: "nav-about",
        target_page: Page::About,
    },
];

/// Menu entries in on-screen order.
pub fn navigation_items() -> &'static [NavigationItem] {
    &NAVIGATION_ITEMS
}

/// One rendered row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub item: &'static NavigationItem,
    pub url: String,
    pub active: bool,
}

pub fn nav_entries(current_path: &str) -> Vec<NavEntry> {
    navigation_items()
        .iter()
        .map(|item| {
            let url = item.url();
            let active = url == current_path;
            NavEntry { item, url, active }
        })
        .collect()
}

pub fn active_item(current_path: &str) -> Option<&'static NavigationItem> {
    navigation_items()
        .iter()
        .find(|item| item.is_active(current_path))
}

/// Presentational variant of the menu. Both variants list the same entries;
/// the stylesheet decides which one is visible for the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    Desktop,
    Drawer,
}

impl NavLayout {
    pub fn container_class(self) -> &'static str {
        match self {
            NavLayout::Desktop => "site-nav site-nav--desktop",
            NavLayout::Drawer => "site-nav site-nav--drawer",
        }
    }

    pub fn link_class(self, active: bool) -> &'static str {
        match (self, active) {
            (NavLayout::Desktop, true) => "nav-link nav-link--active",
            (NavLayout::Desktop, false) => "nav-link nav-link--idle",
            (NavLayout::Drawer, true) => "drawer-link drawer-link--active",
            (NavLayout::Drawer, false) => "drawer-link drawer-link--idle",
        }
    }
}
