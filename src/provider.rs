//! The publishing entry point for a configuration subtree.

use std::rc::Rc;

use crate::config::{ConfigValue, Context, ProviderProps, Resolver};
use crate::dom::DocumentRoot;
use crate::theme::{Theme, ThemeSync};

/// Handle identifying a raw subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Rc<ConfigValue>)>;

/// A configuration publishing point.
///
/// The provider resolves instance props into a [`ConfigValue`], publishes it
/// to the subtree reachable through [`Provider::context`], and keeps the
/// document's theme marker class in sync as props change over time.
///
/// Publishing is split into two phases, mirroring a render/commit cycle:
///
/// - [`Provider::set_props`] resolves and publishes. It performs no document
///   mutation; it only *stages* a theme synchronization when
///   `(class_prefix, theme)` changed.
/// - [`Provider::flush`] runs the latest staged synchronization. A staged run
///   superseded by a newer `set_props` before the flush is skipped entirely;
///   only the latest value's effect executes.
///
/// [`Provider::update`] combines both for hosts without a distinct commit
/// phase.
///
/// # Example
///
/// ```rust
/// use undertone::{ClassList, ElementClasses, Provider, ProviderProps, Theme};
///
/// let doc = ElementClasses::new().into_root();
/// let mut provider = Provider::with_document(doc.clone());
///
/// provider.update(&ProviderProps::new().theme(Theme::Dark));
/// assert!(doc.borrow().contains("ut-theme-dark"));
///
/// let config = provider.context().read();
/// assert_eq!(config.theme, Some(Theme::Dark));
/// ```
pub struct Provider {
    resolver: Resolver,
    current: Option<Rc<ConfigValue>>,
    sync: ThemeSync,
    staged: Option<(String, Option<Theme>)>,
    effect_key: Option<(String, Option<Theme>)>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl Provider {
    /// Creates a provider with no mutable document: theme synchronization is
    /// a no-op, resolution and reads work normally.
    pub fn new() -> Self {
        Self::with_sync(ThemeSync::headless())
    }

    /// Creates a provider that synchronizes theme marker classes onto the
    /// given document root.
    pub fn with_document(document: DocumentRoot) -> Self {
        Self::with_sync(ThemeSync::new(document))
    }

    fn with_sync(sync: ThemeSync) -> Self {
        Self {
            resolver: Resolver::new(),
            current: None,
            sync,
            staged: None,
            effect_key: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Resolves and publishes instance props.
    ///
    /// Pure with respect to the document. When resolution yields the same
    /// value identity as the current one (no field changed), nothing is
    /// republished, no subscriber fires and no synchronization is staged.
    pub fn set_props(&mut self, props: &ProviderProps) -> Rc<ConfigValue> {
        let value = self.resolver.resolve(props);
        if let Some(current) = &self.current {
            if Rc::ptr_eq(current, &value) {
                return value;
            }
        }

        log::debug!(
            "publishing configuration (prefix {:?}, theme {:?})",
            value.class_prefix,
            value.theme
        );
        self.current = Some(Rc::clone(&value));
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&value);
        }

        let key = (value.class_prefix(), value.theme);
        if self.effect_key.as_ref() != Some(&key) {
            self.effect_key = Some(key.clone());
            self.staged = Some(key);
        }
        value
    }

    /// Runs the latest staged theme synchronization, if any.
    pub fn flush(&mut self) {
        if let Some((prefix, theme)) = self.staged.take() {
            self.sync.run(&prefix, theme);
        }
    }

    /// [`set_props`](Provider::set_props) followed by
    /// [`flush`](Provider::flush).
    pub fn update(&mut self, props: &ProviderProps) -> Rc<ConfigValue> {
        let value = self.set_props(props);
        self.flush();
        value
    }

    /// Whether a staged synchronization is awaiting [`Provider::flush`].
    pub fn has_pending_sync(&self) -> bool {
        self.staged.is_some()
    }

    /// The context handed to this provider's subtree.
    ///
    /// Before the first publish, this is the root context: descendants read
    /// the empty configuration.
    pub fn context(&self) -> Context {
        match &self.current {
            Some(value) => Context::root().with_value(Rc::clone(value)),
            None => Context::root(),
        }
    }

    /// The currently published configuration, if any.
    pub fn current(&self) -> Option<Rc<ConfigValue>> {
        self.current.clone()
    }

    /// Registers a raw change notification, fired on every publish with the
    /// newly published value. No merge semantics are applied; most consumers
    /// should read through [`Provider::context`] instead.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Rc<ConfigValue>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}
