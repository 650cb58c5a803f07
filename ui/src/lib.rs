//! Shared UI crate for jestview: the interactive results table of a test
//! report, used by the web and desktop launchers.

pub mod components;
pub mod core;
pub mod i18n;
pub mod results;
pub mod views;

/// Shared theme, inlined by every launcher.
pub const THEME_CSS: &str = include_str!("../assets/theme/main.css");
