//! Process-wide class-name prefix and prefixed class-name generation.
//!
//! Every CSS class name this library (or a widget consuming it) produces is
//! namespaced under a prefix. The prefix normally comes from the resolved
//! configuration; when an instance supplies none, the process-wide default
//! configured here is used instead.

use once_cell::sync::Lazy;
use std::sync::RwLock;

/// The built-in default class-name prefix.
pub const DEFAULT_CLASS_PREFIX: &str = "ut";

static CLASS_PREFIX: Lazy<RwLock<String>> =
    Lazy::new(|| RwLock::new(DEFAULT_CLASS_PREFIX.to_string()));

/// Sets the process-wide default class-name prefix.
///
/// Call this once at application startup, before any provider or widget is
/// constructed. Changing it afterwards does not retroactively re-prefix
/// configurations that were already resolved.
///
/// An empty prefix is ignored: the effective prefix is never empty.
pub fn set_class_prefix(prefix: impl Into<String>) {
    let prefix = prefix.into();
    if prefix.is_empty() {
        return;
    }
    let mut guard = CLASS_PREFIX.write().unwrap();
    *guard = prefix;
}

/// Returns the process-wide default class-name prefix.
pub fn class_prefix() -> String {
    CLASS_PREFIX.read().unwrap().clone()
}

/// Joins a prefix and a class-name segment: `prefixed("ut", "theme-dark")`
/// yields `"ut-theme-dark"`.
pub fn prefixed(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, name)
}

/// Prefixed class-name generator for a single widget.
///
/// Widgets derive their root and element class names from the resolved
/// configuration's prefix and their own component name:
///
/// ```rust
/// use undertone::ClassNames;
///
/// let names = ClassNames::with_prefix("ut", "picker-search-bar");
/// assert_eq!(names.root(), "ut-picker-search-bar");
/// assert_eq!(names.element("input"), "ut-picker-search-bar-input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    prefix: String,
    component: String,
}

impl ClassNames {
    /// Creates a generator using the process-wide default prefix.
    pub fn new(component: &str) -> Self {
        Self::with_prefix(&class_prefix(), component)
    }

    /// Creates a generator with an explicit prefix, normally the
    /// `class_prefix` of the nearest resolved configuration.
    pub fn with_prefix(prefix: &str, component: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            component: component.to_string(),
        }
    }

    /// The widget's root class name.
    pub fn root(&self) -> String {
        prefixed(&self.prefix, &self.component)
    }

    /// A class name for an element inside the widget.
    pub fn element(&self, name: &str) -> String {
        format!("{}-{}", self.root(), name)
    }
}
