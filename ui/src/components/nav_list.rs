use dioxus::prelude::*;

use crate::core::navigation::{nav_entries, NavLayout};
use crate::i18n;
use crate::t;

/// Single renderer for both menu variants.
///
/// Without `on_select` each entry is a router `Link`. With it, entries are
/// plain anchors whose default action is cancelled: the handler receives the
/// target path and is the only thing that navigates.
#[component]
pub fn NavList(
    layout: NavLayout,
    current_path: String,
    on_select: Option<EventHandler<String>>,
) -> Element {
    let _lang = i18n::use_language();
    let entries = nav_entries(&current_path);

    rsx! {
        nav { class: layout.container_class(), aria_label: t!("nav-primary-label"),
            for entry in entries {
                {
                    let link_class = layout.link_class(entry.active);
                    let title = entry.item.title();
                    match on_select {
                        Some(handler) => {
                            let target = entry.url.clone();
                            rsx! {
                                a {
                                    key: "{entry.url}",
                                    href: "{entry.url}",
                                    class: "{link_class}",
                                    onclick: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        handler.call(target.clone());
                                    },
                                    "{title}"
                                }
                            }
                        }
                        None => rsx! {
                            Link {
                                key: "{entry.url}",
                                to: entry.url.clone(),
                                class: "{link_class}",
                                "{title}"
                            }
                        },
                    }
                }
            }
        }
    }
}
