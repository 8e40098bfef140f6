use dioxus::prelude::*;
use tracing::debug;

use super::mobile_menu::MobileMenu;
use super::site_footer::SiteFooter;
use super::site_header::SiteHeader;
use crate::core::drawer::DrawerState;
use crate::core::navigation::active_item;
use crate::i18n;

// Shared theme. The desktop shell additionally inlines it (see desktop/src/main.rs).
const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Page chrome shared by every route: header, body slot, footer.
///
/// Shells pass the router's current path on every render (from
/// `use_route::<Route>()`), so the active link is always derived from the
/// live route. The drawer flag is the only state this component owns.
///
/// ```ignore
/// #[component]
/// fn WebLayout() -> Element {
///     let route: Route = use_route();
///     rsx! {
///         SiteLayout { current_path: route.to_string(), Outlet::<Route> {} }
///     }
/// }
/// ```
#[component]
pub fn SiteLayout(
    current_path: String,
    on_subscribe: Option<EventHandler<String>>,
    children: Element,
) -> Element {
    i18n::init();
    let drawer = use_signal(DrawerState::default);

    debug!(
        path = %current_path,
        active = ?active_item(&current_path).map(|item| item.target_page),
        "layout render"
    );

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        SiteFrame { current_path, drawer, on_subscribe, {children} }
    }
}

/// Markup of the layout around an externally owned drawer signal.
///
/// The drawer overlay is a sibling of the header, never a descendant, so its
/// fixed backdrop and panel resolve against the viewport.
#[component]
pub fn SiteFrame(
    current_path: String,
    drawer: Signal<DrawerState>,
    on_subscribe: Option<EventHandler<String>>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "site",
            SiteHeader { current_path: current_path.clone(), drawer }
            MobileMenu { current_path, drawer }
            main { class: "site__main", {children} }
            SiteFooter { on_subscribe }
        }
    }
}
