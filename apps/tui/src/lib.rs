// Export our modules for use in binaries and tests
pub mod config;
pub mod data;
pub mod domain;
pub mod search;
pub mod view;

pub use domain::{card_slug, CardSource, PortraitLayout, Record, SymbolicTheme, Theme, Variation};
