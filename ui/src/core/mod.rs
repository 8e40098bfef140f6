//! Platform-agnostic site model: pages, navigation, drawer state, footer content.

pub mod config;
pub mod drawer;
pub mod footer;
pub mod navigation;
pub mod pages;
