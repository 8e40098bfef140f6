use dioxus::prelude::*;

use super::brand::{BrandMark, BrandSize};
use super::locale_switcher::LocaleSwitcher;
use super::mobile_menu::MobileMenuTrigger;
use super::nav_list::NavList;
use crate::core::config::SITE;
use crate::core::drawer::DrawerState;
use crate::core::navigation::NavLayout;
use crate::core::pages::Page;

/// Sticky header: brand link, desktop link row, locale picker, menu button.
/// The drawer overlay itself is rendered by `SiteFrame`, outside the header.
#[component]
pub fn SiteHeader(current_path: String, drawer: Signal<DrawerState>) -> Element {
    rsx! {
        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                Link { class: "site-header__brand", to: Page::Home.url(),
                    BrandMark { size: BrandSize::Large }
                    span { class: "site-header__brand-name", "{SITE.brand_name}" }
                }

                NavList { layout: NavLayout::Desktop, current_path }

                div { class: "site-header__actions",
                    LocaleSwitcher {}
                    MobileMenuTrigger { drawer }
                }
            }
        }
    }
}
