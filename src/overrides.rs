//! Per-component default-prop overrides.
//!
//! A configuration may carry a table of partial default-props records keyed
//! by component identifier (`"Button"`, `"Message"`, ...). Every widget in
//! the library consults that table through [`resolve_component_props`] when
//! computing its effective props.
//!
//! NOTICE: this protocol is still under development and its shape — a table
//! keyed by component identifier — is provisional. It is versioned
//! independently from the rest of the configuration contract, and consumers
//! must tolerate it changing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::ConfigValue;

/// A partial default-props record for one component.
pub type PartialProps = Map<String, Value>;

/// Table of per-component default-prop overrides.
///
/// # Example
///
/// ```rust
/// use undertone::ComponentOverrides;
/// use serde_json::json;
///
/// let overrides = ComponentOverrides::new()
///     .with("Button", json!({"size": "lg"}))
///     .with("Message", json!({"closable": true}));
///
/// assert!(overrides.get("Button").is_some());
/// assert!(overrides.get("Input").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentOverrides {
    table: BTreeMap<String, PartialProps>,
}

impl ComponentOverrides {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the partial defaults for one component, returning an updated
    /// table for chaining. `defaults` must be a JSON object; any other value
    /// records an empty override.
    pub fn with(mut self, component: impl Into<String>, defaults: Value) -> Self {
        let record = match defaults {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self.table.insert(component.into(), record);
        self
    }

    /// The partial defaults for `component`, if any were supplied.
    pub fn get(&self, component: &str) -> Option<&PartialProps> {
        self.table.get(component)
    }

    /// Whether the table holds no overrides.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Computes a widget's effective props.
///
/// Precedence, highest to lowest:
///
/// 1. a field set directly in the instance's own props
/// 2. the ambient override record for `component`, if present
/// 3. the widget's built-in defaults
///
/// A missing override record, or a configuration with no override table at
/// all, is not an error: built-in defaults prevail.
///
/// # Example
///
/// ```rust
/// use undertone::{resolve_component_props, ComponentOverrides, ProviderProps, Resolver};
/// use serde_json::json;
///
/// let mut resolver = Resolver::new();
/// let config = resolver.resolve(&ProviderProps::new().component_overrides(
///     ComponentOverrides::new().with("Button", json!({"size": "lg"})),
/// ));
///
/// let builtin = json!({"size": "md"}).as_object().unwrap().clone();
/// let instance = json!({"size": "sm"}).as_object().unwrap().clone();
///
/// let effective = resolve_component_props(&config, "Button", &builtin, &instance);
/// assert_eq!(effective["size"], json!("sm"));
/// ```
pub fn resolve_component_props(
    config: &ConfigValue,
    component: &str,
    builtin_defaults: &PartialProps,
    instance_props: &PartialProps,
) -> PartialProps {
    let mut effective = builtin_defaults.clone();

    if let Some(overrides) = &config.component_overrides {
        if let Some(record) = overrides.get(component) {
            for (key, value) in record {
                effective.insert(key.clone(), value.clone());
            }
        }
    }

    for (key, value) in instance_props {
        effective.insert(key.clone(), value.clone());
    }

    effective
}
