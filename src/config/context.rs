//! Tree-scoped configuration store.

use std::rc::Rc;

use super::value::ConfigValue;

thread_local! {
    static EMPTY: Rc<ConfigValue> = Rc::new(ConfigValue::empty());
}

/// A position in the widget tree from which configuration is read.
///
/// A context carries the nearest enclosing published configuration, if any.
/// Widgets receive their parent's context during construction and call
/// [`Context::read`] instead of having every configuration field threaded to
/// them explicitly.
///
/// Publishing is **not cumulative**: [`Context::with_value`] fully replaces
/// any outer published configuration rather than deep-merging with it. A
/// nested publishing point that wants to inherit fields from its parent must
/// read the parent's resolved value and copy the wanted fields into its own
/// instance props explicitly.
///
/// # Example
///
/// ```rust
/// use undertone::Context;
///
/// let root = Context::root();
/// assert!(root.read().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    value: Option<Rc<ConfigValue>>,
}

impl Context {
    /// The root context: no publisher above it.
    pub fn root() -> Self {
        Self::default()
    }

    /// Whether a publisher exists at or above this context.
    pub fn has_publisher(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the nearest enclosing published configuration, or the empty
    /// configuration if none was published.
    pub fn read(&self) -> Rc<ConfigValue> {
        match &self.value {
            Some(value) => Rc::clone(value),
            None => EMPTY.with(Rc::clone),
        }
    }

    /// Creates the context for a subtree below a publishing point.
    ///
    /// The published `value` fully replaces whatever this context held; see
    /// the type-level note on non-merging behavior.
    pub fn with_value(&self, value: Rc<ConfigValue>) -> Context {
        Context { value: Some(value) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProviderProps, Resolver};
    use crate::theme::Theme;

    #[test]
    fn test_root_reads_empty_default() {
        let ctx = Context::root();
        let value = ctx.read();
        assert!(value.is_empty());
        assert!(value.theme.is_none());
        assert!(value.class_prefix.is_none());
    }

    #[test]
    fn test_repeated_root_reads_share_identity() {
        let ctx = Context::root();
        assert!(Rc::ptr_eq(&ctx.read(), &ctx.read()));
    }

    #[test]
    fn test_read_nearest_published_value() {
        let mut resolver = Resolver::new();
        let value = resolver.resolve(&ProviderProps::new().theme(Theme::Dark));

        let ctx = Context::root().with_value(Rc::clone(&value));
        assert!(Rc::ptr_eq(&ctx.read(), &value));
    }

    #[test]
    fn test_nested_publish_replaces_not_merges() {
        let mut outer_resolver = Resolver::new();
        let outer = outer_resolver
            .resolve(&ProviderProps::new().class_prefix("rs").theme(Theme::Dark));

        let mut inner_resolver = Resolver::new();
        let inner = inner_resolver.resolve(&ProviderProps::new().theme(Theme::Light));

        let ctx = Context::root().with_value(outer).with_value(inner);
        let read = ctx.read();
        assert_eq!(read.theme, Some(Theme::Light));
        // The outer prefix is gone: the inner publish replaced it wholesale.
        assert_ne!(read.class_prefix.as_deref(), Some("rs"));
    }
}
