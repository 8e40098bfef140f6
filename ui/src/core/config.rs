//! Compile-time site configuration.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary_teal: &'static str,
    pub primary_navy: &'static str,
    pub accent_orange: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand_name: &'static str,
    pub copyright_year: u16,
    pub palette: Palette,
}

pub const SITE: SiteConfig = SiteConfig {
    brand_name: "CloakTrip",
    copyright_year: 2024,
    palette: Palette {
        primary_teal: "#1ABC9C",
        primary_navy: "#0A1F44",
        accent_orange: "#FF7F50",
    },
};

impl SiteConfig {
    /// `© 2024 CloakTrip. <rights>` with the localized rights sentence appended.
    pub fn copyright_line(&self, rights: &str) -> String {
        format!("© {} {}. {rights}", self.copyright_year, self.brand_name)
    }
}
