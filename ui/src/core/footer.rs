//! Static footer content. Labels are Fluent message ids.

use super::pages::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Page(Page),
    /// Not yet backed by a page; renders as `#`.
    Placeholder,
}

impl LinkTarget {
    pub fn href(self) -> String {
        match self {
            LinkTarget::Page(page) => page.url(),
            LinkTarget::Placeholder => "#".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label_id: &'static str,
    pub target: LinkTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterColumn {
    Brand {
        blurb_id: &'static str,
    },
    Links {
        heading_id: &'static str,
        links: &'static [FooterLink],
    },
    Subscribe {
        heading_id: &'static str,
        blurb_id: &'static str,
    },
}

const EXPLORE_LINKS: [FooterLink; 4] = [
    FooterLink {
        label_id: "footer-link-comparison",
        target: LinkTarget::Page(Page::Comparison),
    },
    FooterLink {
        label_id: "footer-link-guides",
        target: LinkTarget::Page(Page::Guides),
    },
    FooterLink {
        label_id: "footer-link-hidden-gems",
        target: LinkTarget::Page(Page::HiddenGems),
    },
    FooterLink {
        label_id: "footer-link-activities",
        target: LinkTarget::Page(Page::Activities),
    },
];

const COMPANY_LINKS: [FooterLink; 4] = [
    FooterLink {
        label_id: "footer-link-about",
        target: LinkTarget::Page(Page::About),
    },
    FooterLink {
        label_id: "footer-link-partnerships",
        target: LinkTarget::Placeholder,
    },
    FooterLink {
        label_id: "footer-link-investors",
        target: LinkTarget::Placeholder,
    },
    FooterLink {
        label_id: "footer-link-faqs",
        target: LinkTarget::Placeholder,
    },
];

pub static FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn::Brand {
        blurb_id: "footer-blurb",
    },
    FooterColumn::Links {
        heading_id: "footer-explore",
        links: &EXPLORE_LINKS,
    },
    FooterColumn::Links {
        heading_id: "footer-company",
        links: &COMPANY_LINKS,
    },
    FooterColumn::Subscribe {
        heading_id: "footer-stay-updated",
        blurb_id: "footer-updates-blurb",
    },
];

/// Bottom bar links next to the copyright line.
pub static LEGAL_LINKS: [FooterLink; 3] = [
    FooterLink {
        label_id: "footer-privacy",
        target: LinkTarget::Placeholder,
    },
    FooterLink {
        label_id: "footer-terms",
        target: LinkTarget::Placeholder,
    },
    FooterLink {
        label_id: "footer-contact",
        target: LinkTarget::Placeholder,
    },
];
