//! The effect keeping the document's theme marker class in sync.

use super::Theme;
use crate::dom::DocumentRoot;

/// Applies theme marker classes to a document root.
///
/// Runs after a configuration is published, never during resolution. Each
/// run adds the active theme's marker class first and only then removes
/// every other theme's class for the same prefix, so an observer never sees
/// the root without a marker once one was active. At most one marker class
/// is present at any observation point.
///
/// Runs are idempotent: the synchronizer remembers the last applied
/// `(prefix, theme)` pair and re-running with the same pair mutates nothing.
///
/// Two behaviors intentionally follow the non-clearing model:
///
/// - a run with `theme: None` leaves previously applied marker classes in
///   place rather than removing them; hosts that want an eager reset must
///   clear the class list themselves
/// - sibling markers are removed for the current prefix only, so changing
///   the prefix does not retroactively clean classes minted under the old one
///
/// Without a document handle the synchronizer is a total no-op; resolution
/// and reads are unaffected.
pub struct ThemeSync {
    document: Option<DocumentRoot>,
    last_applied: Option<(String, Theme)>,
}

impl ThemeSync {
    /// Creates a synchronizer targeting the given document root.
    pub fn new(document: DocumentRoot) -> Self {
        Self {
            document: Some(document),
            last_applied: None,
        }
    }

    /// Creates a synchronizer with no mutable document available.
    pub fn headless() -> Self {
        Self {
            document: None,
            last_applied: None,
        }
    }

    /// Whether a mutable document is available.
    pub fn can_mutate_document(&self) -> bool {
        self.document.is_some()
    }

    /// Synchronizes the document's marker class with `(prefix, theme)`.
    pub fn run(&mut self, prefix: &str, theme: Option<Theme>) {
        let Some(document) = &self.document else {
            return;
        };
        let Some(theme) = theme else {
            return;
        };
        if let Some((last_prefix, last_theme)) = &self.last_applied {
            if last_prefix == prefix && *last_theme == theme {
                return;
            }
        }

        let mut root = document.borrow_mut();
        root.add_class(&theme.marker_class(prefix));
        for other in Theme::ALL {
            if other != theme {
                root.remove_class(&other.marker_class(prefix));
            }
        }
        drop(root);

        log::debug!("applied theme marker class {}", theme.marker_class(prefix));
        self.last_applied = Some((prefix.to_string(), theme));
    }
}
