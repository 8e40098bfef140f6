use dioxus::prelude::*;

use super::icons::CompassIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandSize {
    Small,
    Medium,
    Large,
}

impl BrandSize {
    fn class(self) -> &'static str {
        match self {
            BrandSize::Small => "brand-mark--sm",
            BrandSize::Medium => "brand-mark--md",
            BrandSize::Large => "brand-mark--lg",
        }
    }
}

/// Gradient tile with the compass glyph. The word mark is rendered by callers
/// since header, drawer and footer style it differently.
#[component]
pub fn BrandMark(size: BrandSize) -> Element {
    let size_class = size.class();
    rsx! {
        div { class: "brand-mark brand-gradient {size_class}", aria_hidden: "true",
            CompassIcon {}
        }
    }
}
