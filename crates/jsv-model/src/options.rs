//! Output format tags and the loosely typed format option set.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ReportError;

/// One of the five supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    /// Terminal-oriented text with optional ANSI colors.
    Human,
    /// Array of record objects.
    Json,
    /// Three-column text table.
    Table,
    /// Markdown document with per-error anchors.
    Markdown,
    /// Prose or key/value blocks aimed at a language model.
    Llm,
}

impl FormatTag {
    pub const ALL: [FormatTag; 5] = [
        FormatTag::Human,
        FormatTag::Json,
        FormatTag::Table,
        FormatTag::Markdown,
        FormatTag::Llm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatTag::Human => "human",
            FormatTag::Json => "json",
            FormatTag::Table => "table",
            FormatTag::Markdown => "markdown",
            FormatTag::Llm => "llm",
        }
    }

    /// Comma-separated list of every valid tag.
    pub fn valid_tags() -> String {
        Self::ALL
            .iter()
            .map(FormatTag::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormatTag {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(FormatTag::Human),
            "json" => Ok(FormatTag::Json),
            "table" => Ok(FormatTag::Table),
            "markdown" => Ok(FormatTag::Markdown),
            "llm" => Ok(FormatTag::Llm),
            _ => Err(ReportError::UnsupportedFormat {
                tag: s.to_string(),
                valid: Self::valid_tags(),
            }),
        }
    }
}

/// Format options keyed by name.
///
/// Values stay untyped until a formatter checks them against the option
/// schema of its format, so one option set can be shared across formats:
/// keys a format does not recognize are ignored by it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatOptions {
    values: BTreeMap<String, Value>,
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary option.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    #[must_use]
    pub fn merged(mut self, other: FormatOptions) -> Self {
        self.values.extend(other.values);
        self
    }

    #[must_use]
    pub fn color(self, enable: bool) -> Self {
        self.set("color", enable)
    }

    #[must_use]
    pub fn pretty(self, enable: bool) -> Self {
        self.set("pretty", enable)
    }

    #[must_use]
    pub fn compact(self, enable: bool) -> Self {
        self.set("compact", enable)
    }

    #[must_use]
    pub fn heading_level(self, level: u8) -> Self {
        self.set("heading_level", level)
    }

    #[must_use]
    pub fn include_toc(self, enable: bool) -> Self {
        self.set("include_toc", enable)
    }

    #[must_use]
    pub fn structured(self, enable: bool) -> Self {
        self.set("structured", enable)
    }

    #[must_use]
    pub fn include_schema_context(self, enable: bool) -> Self {
        self.set("include_schema_context", enable)
    }

    #[must_use]
    pub fn max_errors(self, limit: usize) -> Self {
        self.set("max_errors", limit)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FormatOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
