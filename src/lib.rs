//! Ambient configuration and theme propagation for widget trees.
//!
//! This crate is the configuration backbone of a widget library: a
//! publishing point resolves instance props — locale and date formatting,
//! text direction, class-name prefix, active visual theme, per-component
//! default-prop overrides — into one coherent [`ConfigValue`], distributes
//! it to every descendant widget, and keeps the document root's theme marker
//! class in sync as the configuration changes over time.
//!
//! # Overview
//!
//! - [`Provider`] resolves and publishes instance props, staging a theme
//!   synchronization that runs at commit time ([`Provider::flush`])
//! - [`Context`] is the tree-scoped store: widgets read the nearest
//!   enclosing configuration, or the empty default when none was published
//! - [`ThemeSync`] applies `<prefix>-theme-<name>` marker classes to a
//!   document root, keeping at most one present at a time
//! - [`resolve_component_props`] defines the precedence every widget follows
//!   when consulting ambient per-component overrides: explicit instance prop
//!   over ambient override over built-in default
//!
//! # Example
//!
//! ```rust
//! use undertone::{
//!     resolve_component_props, ClassList, ClassNames, ComponentOverrides, ElementClasses,
//!     Provider, ProviderProps, Theme,
//! };
//! use serde_json::json;
//!
//! let doc = ElementClasses::new().into_root();
//! let mut provider = Provider::with_document(doc.clone());
//!
//! provider.update(
//!     &ProviderProps::new()
//!         .theme(Theme::Dark)
//!         .component_overrides(ComponentOverrides::new().with("Button", json!({"size": "lg"}))),
//! );
//! assert!(doc.borrow().contains("ut-theme-dark"));
//!
//! // A widget somewhere below the provider:
//! let config = provider.context().read();
//! let names = ClassNames::with_prefix(&config.class_prefix(), "button");
//! assert_eq!(names.root(), "ut-button");
//!
//! let builtin = json!({"size": "md"}).as_object().unwrap().clone();
//! let instance = json!({}).as_object().unwrap().clone();
//! let effective = resolve_component_props(&config, "Button", &builtin, &instance);
//! assert_eq!(effective["size"], json!("lg"));
//! ```
//!
//! # Model
//!
//! Everything runs single-threaded and cooperatively: resolution is a pure
//! computation safe to repeat and discard, document mutation is confined to
//! the flush phase, and a staged synchronization superseded before its flush
//! is skipped entirely. The only process-wide state is the default class
//! prefix ([`set_class_prefix`]) and the OS color-mode detector
//! ([`set_theme_detector`]), both with documented initialization points.

pub mod config;
pub mod dom;
pub mod overrides;
pub mod prefix;
mod provider;
pub mod theme;

pub use config::{ConfigValue, Context, DateFormatter, DateParser, ProviderProps, Resolver};
pub use dom::{ClassList, DocumentRoot, ElementClasses};
pub use overrides::{resolve_component_props, ComponentOverrides, PartialProps};
pub use prefix::{class_prefix, prefixed, set_class_prefix, ClassNames, DEFAULT_CLASS_PREFIX};
pub use provider::{Provider, SubscriptionId};
pub use theme::{set_theme_detector, Theme, ThemeSync};
