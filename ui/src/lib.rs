//! Shared UI crate for the CloakTrip site. The navigation model, layout
//! components and page views live here; platform crates only add routing.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod brand;
    mod icons;
    mod locale_switcher;
    mod mobile_menu;
    mod nav_list;
    mod sheet;
    mod site_footer;
    mod site_header;
    mod site_layout;

    pub use brand::{BrandMark, BrandSize};
    pub use locale_switcher::LocaleSwitcher;
    pub use mobile_menu::{MobileMenu, MobileMenuTrigger};
    pub use nav_list::NavList;
    pub use sheet::{SheetContent, SheetTrigger};
    pub use site_footer::{SiteFooter, SubscribeForm};
    pub use site_header::SiteHeader;
    pub use site_layout::{SiteFrame, SiteLayout};
}

pub use components::SiteLayout;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
    mod render;
}
