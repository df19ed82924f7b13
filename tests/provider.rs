//! End-to-end behavior of the provider: publication, theme marker
//! synchronization, override precedence, and the store's read semantics.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use serde_json::json;
use serial_test::serial;
use undertone::{
    resolve_component_props, ClassList, ComponentOverrides, Context, ElementClasses, PartialProps,
    Provider, ProviderProps, Theme, DEFAULT_CLASS_PREFIX,
};

/// Class list that records every state the document root passes through,
/// letting tests assert on intermediate observations, not just the final one.
#[derive(Default)]
struct RecordingClasses {
    classes: ElementClasses,
    history: Vec<Vec<String>>,
    mutations: usize,
}

impl RecordingClasses {
    fn into_root(self) -> Rc<RefCell<RecordingClasses>> {
        Rc::new(RefCell::new(self))
    }

    fn snapshot(&mut self) {
        self.history.push(self.classes.as_slice().to_vec());
    }

    fn marker_count(classes: &[String], prefix: &str) -> usize {
        Theme::ALL
            .iter()
            .filter(|t| classes.contains(&t.marker_class(prefix)))
            .count()
    }
}

impl ClassList for RecordingClasses {
    fn add_class(&mut self, name: &str) {
        self.classes.add_class(name);
        self.mutations += 1;
        self.snapshot();
    }

    fn remove_class(&mut self, name: &str) {
        self.classes.remove_class(name);
        self.mutations += 1;
        self.snapshot();
    }

    fn contains(&self, name: &str) -> bool {
        self.classes.contains(name)
    }
}

fn partial(value: serde_json::Value) -> PartialProps {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn read_without_publisher_is_empty_default() {
    let config = Context::root().read();
    assert!(config.is_empty());
    assert!(config.locale.is_none());
    assert!(config.rtl.is_none());
    assert!(config.class_prefix.is_none());
    assert!(config.theme.is_none());
    assert!(config.component_overrides.is_none());
    assert!(config.extra.is_empty());
}

#[test]
#[serial]
fn nested_publish_replaces_outer_entirely() {
    undertone::set_class_prefix(DEFAULT_CLASS_PREFIX);

    let mut outer = Provider::new();
    outer.update(&ProviderProps::new().class_prefix("rs").theme(Theme::Dark));

    // The inner publishing point supplies only a theme. It does not inherit
    // the outer prefix: its publish fully replaces the outer configuration.
    let mut inner = Provider::new();
    inner.update(&ProviderProps::new().theme(Theme::Light));

    let descendant = inner.context().read();
    assert_eq!(descendant.theme, Some(Theme::Light));
    assert_eq!(descendant.class_prefix.as_deref(), Some(DEFAULT_CLASS_PREFIX));
}

#[test]
fn republishing_same_key_mutates_nothing_further() {
    let doc = RecordingClasses::default().into_root();
    let mut provider = Provider::with_document(doc.clone());

    provider.update(&ProviderProps::new().class_prefix("rs").theme(Theme::Dark));
    let after_first = doc.borrow().mutations;

    provider.update(&ProviderProps::new().class_prefix("rs").theme(Theme::Dark));
    assert_eq!(doc.borrow().mutations, after_first);
}

#[test]
fn unrelated_field_change_triggers_no_sync_run() {
    let doc = RecordingClasses::default().into_root();
    let mut provider = Provider::with_document(doc.clone());

    provider.update(
        &ProviderProps::new()
            .class_prefix("rs")
            .theme(Theme::Dark)
            .extra("sibling", json!(1)),
    );
    let after_first = doc.borrow().mutations;

    // A new value is published (the extra field changed) but the
    // (class_prefix, theme) pair did not: no synchronization runs.
    provider.update(
        &ProviderProps::new()
            .class_prefix("rs")
            .theme(Theme::Dark)
            .extra("sibling", json!(2)),
    );
    assert!(!provider.has_pending_sync());
    assert_eq!(doc.borrow().mutations, after_first);
}

#[test]
fn theme_switch_is_atomic_for_observers() {
    let doc = RecordingClasses::default().into_root();
    let mut provider = Provider::with_document(doc.clone());

    provider.update(&ProviderProps::new().class_prefix("rs").theme(Theme::Dark));
    provider.update(
        &ProviderProps::new()
            .class_prefix("rs")
            .theme(Theme::HighContrast),
    );

    let root = doc.borrow();
    assert!(root.contains("rs-theme-high-contrast"));
    assert!(!root.contains("rs-theme-dark"));

    // Once a marker was active, no intermediate state ever dropped to zero.
    let activation = root
        .history
        .iter()
        .position(|state| RecordingClasses::marker_count(state, "rs") > 0)
        .unwrap();
    for state in &root.history[activation..] {
        assert!(RecordingClasses::marker_count(state, "rs") >= 1);
    }
    // And the final observation holds exactly one marker.
    let last = root.history.last().unwrap();
    assert_eq!(RecordingClasses::marker_count(last, "rs"), 1);
}

#[test]
fn superseded_configuration_effect_never_runs() {
    let doc = RecordingClasses::default().into_root();
    let mut provider = Provider::with_document(doc.clone());

    provider.set_props(&ProviderProps::new().class_prefix("rs").theme(Theme::Dark));
    provider.set_props(&ProviderProps::new().class_prefix("rs").theme(Theme::Light));
    provider.flush();

    let root = doc.borrow();
    assert!(root.contains("rs-theme-light"));
    // The superseded dark marker never touched the document.
    for state in &root.history {
        assert!(!state.contains(&"rs-theme-dark".to_string()));
    }
}

#[test]
fn headless_provider_resolves_and_reads_normally() {
    let mut provider = Provider::new();
    let value = provider.update(
        &ProviderProps::new()
            .class_prefix("rs")
            .theme(Theme::Dark)
            .rtl(true),
    );
    assert_eq!(value.theme, Some(Theme::Dark));
    assert_eq!(provider.context().read().rtl, Some(true));
}

#[test]
fn override_precedence_chain() {
    let mut provider = Provider::new();
    provider.update(&ProviderProps::new().component_overrides(
        ComponentOverrides::new().with("Button", json!({"size": "lg"})),
    ));
    let config = provider.context().read();
    let builtin = partial(json!({"size": "md"}));

    // Explicit instance prop beats both the override and the builtin.
    let effective = resolve_component_props(&config, "Button", &builtin, &partial(json!({"size": "sm"})));
    assert_eq!(effective["size"], json!("sm"));

    // Without an instance prop, the ambient override wins.
    let effective = resolve_component_props(&config, "Button", &builtin, &partial(json!({})));
    assert_eq!(effective["size"], json!("lg"));

    // Without either, the builtin default prevails.
    let bare = Context::root().read();
    let effective = resolve_component_props(&bare, "Button", &builtin, &partial(json!({})));
    assert_eq!(effective["size"], json!("md"));
}

#[test]
fn raw_subscription_reports_every_publish() {
    let mut provider = Provider::new();
    let themes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&themes);
    provider.subscribe(move |value| sink.borrow_mut().push(value.theme));

    provider.update(&ProviderProps::new().class_prefix("rs").theme(Theme::Dark));
    provider.update(&ProviderProps::new().class_prefix("rs").theme(Theme::Light));
    provider.update(&ProviderProps::new().class_prefix("rs").theme(Theme::Light));

    assert_eq!(
        *themes.borrow(),
        vec![Some(Theme::Dark), Some(Theme::Light)]
    );
}

fn theme_option() -> impl Strategy<Value = Option<Theme>> {
    prop_oneof![
        Just(None),
        Just(Some(Theme::Light)),
        Just(Some(Theme::Dark)),
        Just(Some(Theme::HighContrast)),
    ]
}

proptest! {
    /// For every sequence of published configurations, at most one theme
    /// marker class is present on the document root at any observation
    /// point.
    #[test]
    fn at_most_one_marker_class_ever(themes in proptest::collection::vec(theme_option(), 1..24)) {
        let doc = RecordingClasses::default().into_root();
        let mut provider = Provider::with_document(doc.clone());

        for theme in themes {
            let mut props = ProviderProps::new().class_prefix("rs");
            if let Some(theme) = theme {
                props = props.theme(theme);
            }
            provider.update(&props);

            let root = doc.borrow();
            let current = root.classes.as_slice().to_vec();
            prop_assert!(RecordingClasses::marker_count(&current, "rs") <= 1);
        }

        // Once a marker became active, no intermediate mutation ever left
        // the root with zero markers (switches add before they remove).
        let root = doc.borrow();
        if let Some(activation) = root
            .history
            .iter()
            .position(|state| RecordingClasses::marker_count(state, "rs") > 0)
        {
            for state in &root.history[activation..] {
                prop_assert!(RecordingClasses::marker_count(state, "rs") >= 1);
            }
        }
    }
}
