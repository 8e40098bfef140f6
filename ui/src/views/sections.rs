//! Content pages. Bodies are placeholders until each section gets its own
//! data source; the layout is what these routes exercise today.

use dioxus::prelude::*;

use crate::i18n;
use crate::t;

#[component]
fn PageSection(modifier: String, title: String, intro: String) -> Element {
    rsx! {
        section { class: "page {modifier}",
            h1 { "{title}" }
            p { "{intro}" }
        }
    }
}

#[component]
pub fn Comparison() -> Element {
    let _lang = i18n::use_language();
    rsx! {
        PageSection {
            modifier: "page-comparison",
            title: t!("page-comparison-title"),
            intro: t!("page-comparison-intro"),
        }
    }
}

#[component]
pub fn Rentals() -> Element {
    let _lang = i18n::use_language();
    rsx! {
        PageSection {
            modifier: "page-rentals",
            title: t!("page-rentals-title"),
            intro: t!("page-rentals-intro"),
        }
    }
}

#[component]
pub fn Guides() -> Element {
    let _lang = i18n::use_language();
    rsx! {
        PageSection {
            modifier: "page-guides",
            title: t!("page-guides-title"),
            intro: t!("page-guides-intro"),
        }
    }
}

#[component]
pub fn HiddenGems() -> Element {
    let _lang = i18n::use_language();
    rsx! {
        PageSection {
            modifier: "page-hidden-gems",
            title: t!("page-hidden-gems-title"),
            intro: t!("page-hidden-gems-intro"),
        }
    }
}

#[component]
pub fn Activities() -> Element {
    let _lang = i18n::use_language();
    rsx! {
        PageSection {
            modifier: "page-activities",
            title: t!("page-activities-title"),
            intro: t!("page-activities-intro"),
        }
    }
}

#[component]
pub fn About() -> Element {
    let _lang = i18n::use_language();
    rsx! {
        PageSection {
            modifier: "page-about",
            title: t!("page-about-title"),
            intro: t!("page-about-intro"),
        }
    }
}
