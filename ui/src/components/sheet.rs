//! Slide-in sheet primitive, split in two parts.
//!
//! `SheetTrigger` sits wherever the menu button goes. `SheetContent` (backdrop
//! and right-hand panel) must be rendered outside any ancestor that creates a
//! containing block for fixed elements (`backdrop-filter`, `transform`, ...),
//! otherwise it is clipped to that ancestor; `SiteFrame` places it next to the
//! header for that reason.
//!
//! Neither part owns state. Every change they initiate (trigger, close button,
//! backdrop click, Escape) is reported through `on_open_change`.

use dioxus::prelude::*;
use tracing::debug;

use super::icons::{CloseIcon, MenuIcon};

pub const SHEET_PANEL_ID: &str = "site-drawer";

#[component]
pub fn SheetTrigger(open: bool, on_open_change: EventHandler<bool>, label: String) -> Element {
    rsx! {
        button {
            class: "sheet__trigger button button--ghost",
            r#type: "button",
            aria_label: "{label}",
            aria_expanded: "{open}",
            aria_controls: SHEET_PANEL_ID,
            onclick: move |_| on_open_change.call(!open),
            MenuIcon {}
        }
    }
}

#[component]
pub fn SheetContent(
    open: bool,
    on_open_change: EventHandler<bool>,
    close_label: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "sheet__backdrop",
            onclick: move |_| on_open_change.call(false),
        }
        aside {
            id: SHEET_PANEL_ID,
            class: "sheet__panel sheet__panel--right",
            role: "dialog",
            aria_modal: "true",
            tabindex: "-1",
            onmounted: move |evt: MountedEvent| async move {
                // Focus the panel so Escape reaches it.
                if let Err(err) = evt.set_focus(true).await {
                    debug!(?err, "could not focus drawer panel; Escape will not close it");
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_open_change.call(false);
                }
            },
            button {
                class: "sheet__close button button--ghost",
                r#type: "button",
                aria_label: "{close_label}",
                onclick: move |_| on_open_change.call(false),
                CloseIcon {}
            }
            {children}
        }
    }
}
