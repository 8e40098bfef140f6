//! Route bodies rendered inside `SiteLayout`.

mod home;
mod not_found;
mod sections;

pub use home::Home;
pub use not_found::NotFound;
pub use sections::{About, Activities, Comparison, Guides, HiddenGems, Rentals};
