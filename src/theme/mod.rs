//! Theme enumeration and document synchronization.
//!
//! This module provides:
//!
//! - [`Theme`]: the fixed set of visual themes a configuration can select
//! - [`ThemeSync`]: the effect keeping the document root's theme marker
//!   class consistent with the active configuration
//! - [`set_theme_detector`]: test/host override for OS color-mode detection
//!
//! Exactly one theme, or none, is active at a time. The active theme is
//! signalled to stylesheets by a single marker class on the document root,
//! `<prefix>-theme-<name>`.

mod detect;
mod sync;

pub use detect::set_theme_detector;
pub use sync::ThemeSync;

use serde::{Deserialize, Serialize};

use crate::prefix::prefixed;

/// A visual theme selectable through the configuration.
///
/// Serializes to its kebab-case wire name (`"light"`, `"dark"`,
/// `"high-contrast"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    Dark,
    HighContrast,
}

impl Theme {
    /// Every theme, in declaration order.
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::HighContrast];

    /// The theme's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::HighContrast => "high-contrast",
        }
    }

    /// The marker class signalling this theme under the given prefix,
    /// e.g. `Theme::Dark.marker_class("ut")` is `"ut-theme-dark"`.
    pub fn marker_class(&self, prefix: &str) -> String {
        prefixed(prefix, &format!("theme-{}", self.as_str()))
    }

    /// Picks [`Theme::Light`] or [`Theme::Dark`] from the operating system's
    /// color mode. Hosts that want an OS-following default can pass the
    /// result as the instance `theme`.
    pub fn detect() -> Theme {
        detect::detect_theme()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
