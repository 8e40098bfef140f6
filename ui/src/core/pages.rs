//! Logical page names and their resolved URL paths.
//!
//! Shells route on the paths produced here, so `Page::url` is the single
//! source of truth shared by the navigation model and each platform `Route`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Comparison,
    Rentals,
    Guides,
    HiddenGems,
    Activities,
    About,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("unknown page name `{0}`")]
    UnknownPage(String),
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::Comparison,
        Page::Rentals,
        Page::Guides,
        Page::HiddenGems,
        Page::Activities,
        Page::About,
    ];

    /// Logical name, as used by links and content authors (`"HiddenGems"`).
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Comparison => "Comparison",
            Page::Rentals => "Rentals",
            Page::Guides => "Guides",
            Page::HiddenGems => "HiddenGems",
            Page::Activities => "Activities",
            Page::About => "About",
        }
    }

    /// Resolved path: `/` + lower-cased name, spaces become dashes.
    pub fn url(self) -> String {
        format!("/{}", self.name().to_lowercase().replace(' ', "-"))
    }

    /// Reverse lookup used for not-found detection; exact match only.
    pub fn from_path(path: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.url() == path)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = PageError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.name() == name)
            .ok_or_else(|| PageError::UnknownPage(name.to_string()))
    }
}

/// Resolve a logical page name straight to its path.
pub fn create_page_url(name: &str) -> Result<String, PageError> {
    Ok(name.parse::<Page>()?.url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_logical_names_to_lowercase_paths() {
        assert_eq!(create_page_url("Home").unwrap(), "/home");
        assert_eq!(create_page_url("Comparison").unwrap(), "/comparison");
        assert_eq!(create_page_url("HiddenGems").unwrap(), "/hiddengems");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = create_page_url("Blog").unwrap_err();
        assert_eq!(err, PageError::UnknownPage("Blog".into()));
        assert_eq!(err.to_string(), "unknown page name `Blog`");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("comparison".parse::<Page>().is_err());
    }

    #[test]
    fn every_page_round_trips_through_its_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(&page.url()), Some(page));
        }
        assert_eq!(Page::from_path("/comparison/"), None);
        assert_eq!(Page::from_path("/"), None);
    }
}
