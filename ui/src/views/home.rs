use dioxus::prelude::*;

use crate::core::pages::Page;
use crate::i18n;

#[component]
pub fn Home() -> Element {
    // Subscribe to the language context so the page re-renders on switch.
    let _lang = i18n::use_language();

    rsx! {
        section { class: "page page-home",
            div { class: "page-home__hero brand-gradient",
                h1 { {crate::t!("home-title")} }
                p { {crate::t!("home-tagline")} }
                Link { class: "button button--accent", to: Page::Comparison.url(),
                    {crate::t!("nav-comparison")}
                }
            }
        }
    }
}
