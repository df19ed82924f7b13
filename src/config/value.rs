//! The resolved configuration value propagated to a subtree.

use std::rc::Rc;

use chrono::{NaiveDateTime, ParseError};
use serde_json::{Map, Value};

use crate::overrides::ComponentOverrides;
use crate::theme::Theme;

/// Locale-aware date formatting function.
///
/// Receives the date and an strftime-style pattern; returns the formatted
/// string. Configured by hosts that need locale-dependent output.
pub type DateFormatter = Rc<dyn Fn(NaiveDateTime, &str) -> String>;

/// Locale-aware date parsing function.
///
/// The inverse of [`DateFormatter`]: parses `text` against the pattern,
/// failing on malformed input with the same rules the format side uses.
pub type DateParser = Rc<dyn Fn(&str, &str) -> Result<NaiveDateTime, ParseError>>;

/// The single configuration value distributed to every widget in a subtree.
///
/// Every field is optional: downstream widgets must treat the value as
/// potentially partial and never assume it fully populated. The empty value
/// (all fields absent) is what consumers read when no publisher exists above
/// them.
///
/// `extra` carries instance fields this library does not interpret; they pass
/// through opaquely for forward compatibility.
#[derive(Clone, Default)]
pub struct ConfigValue {
    /// Opaque locale payload. Never validated or interpreted here.
    pub locale: Option<Value>,
    /// Right-to-left text direction.
    pub rtl: Option<bool>,
    /// Locale-dependent date formatting, if configured.
    pub format_date: Option<DateFormatter>,
    /// Locale-dependent date parsing, if configured.
    pub parse_date: Option<DateParser>,
    /// CSS class-name prefix. Absent only in the empty value; resolution
    /// always fills it in, and it is never empty once resolved.
    pub class_prefix: Option<String>,
    /// The active visual theme, if one is selected.
    pub theme: Option<Theme>,
    /// Per-component default-prop overrides. Unstable shape, see
    /// [`ComponentOverrides`].
    pub component_overrides: Option<Rc<ComponentOverrides>>,
    /// Uninterpreted pass-through fields.
    pub extra: Map<String, Value>,
}

impl ConfigValue {
    /// The empty configuration: every field absent.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether every field is absent.
    pub fn is_empty(&self) -> bool {
        self.locale.is_none()
            && self.rtl.is_none()
            && self.format_date.is_none()
            && self.parse_date.is_none()
            && self.class_prefix.is_none()
            && self.theme.is_none()
            && self.component_overrides.is_none()
            && self.extra.is_empty()
    }

    /// The effective class prefix: the resolved one, or the process-wide
    /// default when reading the empty value.
    pub fn class_prefix(&self) -> String {
        self.class_prefix
            .clone()
            .unwrap_or_else(crate::prefix::class_prefix)
    }

    /// Formats a date with the configured formatter, falling back to plain
    /// strftime formatting when none is configured.
    pub fn format_date(&self, date: NaiveDateTime, pattern: &str) -> String {
        match &self.format_date {
            Some(format) => format(date, pattern),
            None => date.format(pattern).to_string(),
        }
    }

    /// Parses a date with the configured parser, falling back to plain
    /// strftime parsing. Malformed input fails with the parser's own error,
    /// propagated unchanged.
    pub fn parse_date(&self, text: &str, pattern: &str) -> Result<NaiveDateTime, ParseError> {
        match &self.parse_date {
            Some(parse) => parse(text, pattern),
            None => NaiveDateTime::parse_from_str(text, pattern),
        }
    }
}

impl std::fmt::Debug for ConfigValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigValue")
            .field("locale", &self.locale)
            .field("rtl", &self.rtl)
            .field("format_date", &self.format_date.as_ref().map(|_| "<fn>"))
            .field("parse_date", &self.parse_date.as_ref().map(|_| "<fn>"))
            .field("class_prefix", &self.class_prefix)
            .field("theme", &self.theme)
            .field("component_overrides", &self.component_overrides)
            .field("extra", &self.extra)
            .finish()
    }
}
