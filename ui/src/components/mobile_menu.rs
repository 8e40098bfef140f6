use dioxus::prelude::*;
use tracing::{info, warn};

use super::brand::{BrandMark, BrandSize};
use super::nav_list::NavList;
use super::sheet::{SheetContent, SheetTrigger};
use crate::core::config::SITE;
use crate::core::drawer::{DrawerState, Navigate};
use crate::core::navigation::NavLayout;
use crate::i18n;
use crate::t;

impl Navigate for Navigator {
    fn navigate_to(&mut self, path: &str) {
        info!(path, "navigation requested");
        if let Some(failure) = self.push(path.to_string()) {
            warn!(path, ?failure, "navigation rejected by router");
        }
    }
}

/// Menu button shown in the header on narrow viewports.
#[component]
pub fn MobileMenuTrigger(drawer: Signal<DrawerState>) -> Element {
    let _lang = i18n::use_language();
    let mut drawer = drawer;

    rsx! {
        div { class: "mobile-menu",
            SheetTrigger {
                open: drawer().is_open(),
                on_open_change: move |open: bool| drawer.with_mut(|state| state.set_open(open)),
                label: t!("nav-open-menu"),
            }
        }
    }
}

/// Drawer overlay listing the same entries as the desktop row. Each entry
/// closes the drawer and issues a single navigation request.
#[component]
pub fn MobileMenu(current_path: String, drawer: Signal<DrawerState>) -> Element {
    let _lang = i18n::use_language();
    let mut drawer = drawer;
    let navigator = use_navigator();

    rsx! {
        div { class: "mobile-menu",
            SheetContent {
                open: drawer().is_open(),
                on_open_change: move |open: bool| drawer.with_mut(|state| state.set_open(open)),
                close_label: t!("nav-close-menu"),

                div { class: "sheet__brand",
                    BrandMark { size: BrandSize::Small }
                    span { class: "sheet__brand-name", "{SITE.brand_name}" }
                }
                NavList {
                    layout: NavLayout::Drawer,
                    current_path,
                    on_select: move |path: String| {
                        let mut router = navigator;
                        drawer.with_mut(|state| state.follow_link(&path, &mut router));
                    },
                }
            }
        }
    }
}
