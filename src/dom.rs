//! Document class-list abstraction.
//!
//! The theme synchronizer's only side effect is toggling classes on a
//! document root. That target is abstracted behind [`ClassList`] so the
//! library never assumes a particular render environment: a browser-backed
//! host implements the trait over its real DOM element, a test or headless
//! host uses [`ElementClasses`], and a host with no mutable document at all
//! simply provides no handle ([`ThemeSync`](crate::ThemeSync) degrades to a
//! no-op in that case).

use std::cell::RefCell;
use std::rc::Rc;

/// Mutable set of CSS classes on a single element.
///
/// Implementations must be idempotent the way a DOM `classList` is: adding a
/// class that is already present, or removing one that is absent, changes
/// nothing.
pub trait ClassList {
    /// Adds `name` if not already present.
    fn add_class(&mut self, name: &str);

    /// Removes `name` if present.
    fn remove_class(&mut self, name: &str);

    /// Whether `name` is currently present.
    fn contains(&self, name: &str) -> bool;
}

/// Shared handle to a document root's class list.
///
/// Single-threaded by design: configuration resolution and effects run
/// cooperatively on one logical thread, so the handle is `Rc`-shared rather
/// than locked.
pub type DocumentRoot = Rc<RefCell<dyn ClassList>>;

/// In-memory [`ClassList`], preserving insertion order.
///
/// # Example
///
/// ```rust
/// use undertone::dom::{ClassList, ElementClasses};
///
/// let mut classes = ElementClasses::new();
/// classes.add_class("ut-theme-dark");
/// classes.add_class("ut-theme-dark"); // already present, no duplicate
/// assert_eq!(classes.as_slice(), ["ut-theme-dark"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementClasses {
    classes: Vec<String>,
}

impl ElementClasses {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The classes currently present, in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.classes
    }

    /// Wraps the list in a shared [`DocumentRoot`] handle.
    pub fn into_root(self) -> Rc<RefCell<ElementClasses>> {
        Rc::new(RefCell::new(self))
    }
}

impl ClassList for ElementClasses {
    fn add_class(&mut self, name: &str) {
        if !self.contains(name) {
            self.classes.push(name.to_string());
        }
    }

    fn remove_class(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }

    fn contains(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }
}
