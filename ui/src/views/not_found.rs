use dioxus::prelude::*;
use tracing::info;

use crate::core::pages::Page;
use crate::i18n;
use crate::t;

/// Catch-all body. No navigation entry is active on these paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let _lang = i18n::use_language();
    let path = format!("/{}", segments.join("/"));
    info!(%path, "unmatched route");

    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body", path = path.as_str())} }
            Link { class: "button button--primary", to: Page::Home.url(),
                {t!("not-found-home")}
            }
        }
    }
}
