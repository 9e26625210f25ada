//! The validation error record consumed by the formatter and the analyzer.
//!
//! Records are produced by an external validation engine and are only read
//! here. Optional fields are explicit `Option`s; serialization drops every
//! field that is absent, `null`, or an empty collection so the emitted
//! objects stay minimal.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ReportError, Result};

/// Placeholder shown wherever an empty instance path is rendered.
pub const ROOT_LOCATION: &str = "(root)";

/// A single validation failure reported by the validation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// JSON Pointer into the validated document (empty for the root).
    pub instance_path: String,
    /// JSON Pointer into the schema (may be empty).
    pub schema_path: String,
    /// Human-readable description of the failure.
    pub message: String,
    /// Name of the violated rule, e.g. `minimum` or `required`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// The offending value.
    #[serde(default, skip_serializing_if = "is_absent_value")]
    pub instance_value: Option<Value>,
    /// The constraint value that was violated.
    #[serde(default, skip_serializing_if = "is_absent_value")]
    pub schema_value: Option<Value>,
    /// Extra diagnostic pairs such as `expected` and `actual`.
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub context: Option<BTreeMap<String, Value>>,
    /// Schema metadata (title, description) at the failure site.
    #[serde(default, skip_serializing_if = "is_empty_map")]
    pub annotations: Option<BTreeMap<String, Value>>,
    /// Advisory fix text.
    #[serde(default, skip_serializing_if = "is_empty_list")]
    pub suggestions: Option<Vec<String>>,
}

fn is_absent_value(value: &Option<Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn is_empty_map(map: &Option<BTreeMap<String, Value>>) -> bool {
    map.as_ref().is_none_or(BTreeMap::is_empty)
}

fn is_empty_list(list: &Option<Vec<String>>) -> bool {
    list.as_ref().is_none_or(Vec::is_empty)
}

impl ErrorRecord {
    /// Minimal record carrying only the fields every engine must supply.
    pub fn new(
        instance_path: impl Into<String>,
        schema_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            instance_path: instance_path.into(),
            schema_path: schema_path.into(),
            message: message.into(),
            keyword: None,
            instance_value: None,
            schema_value: None,
            context: None,
            annotations: None,
            suggestions: None,
        }
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    #[must_use]
    pub fn with_instance_value(mut self, value: Value) -> Self {
        self.instance_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_schema_value(mut self, value: Value) -> Self {
        self.schema_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: Value) -> Self {
        self.context
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: Value) -> Self {
        self.annotations
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions
            .get_or_insert_with(Vec::new)
            .push(suggestion.into());
        self
    }

    /// The violated keyword, if any.
    pub fn keyword_name(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Instance path for display, with the root shown as `(root)`.
    pub fn location(&self) -> &str {
        if self.instance_path.is_empty() {
            ROOT_LOCATION
        } else {
            &self.instance_path
        }
    }

    /// Context entries, empty when the record carries none.
    pub fn context_entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.context.iter().flatten()
    }

    /// Suggestions, empty when the record carries none.
    pub fn suggestion_list(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or_default()
    }

    /// The offending value, treating an explicit `null` as absent.
    pub fn present_instance_value(&self) -> Option<&Value> {
        self.instance_value.as_ref().filter(|value| !value.is_null())
    }

    /// The violated constraint value, treating an explicit `null` as absent.
    pub fn present_schema_value(&self) -> Option<&Value> {
        self.schema_value.as_ref().filter(|value| !value.is_null())
    }

    pub fn has_context(&self) -> bool {
        !is_empty_map(&self.context)
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.message)
    }
}

/// Decode the engine's JSON output into records.
///
/// # Errors
///
/// Returns [`ReportError::InvalidInput`] when `value` is not an array or
/// when an element is not a well-formed record.
pub fn parse_error_list(value: &Value) -> Result<Vec<ErrorRecord>> {
    let Value::Array(items) = value else {
        return Err(ReportError::invalid_input(format!(
            "expected a list of error records, got {}",
            json_kind(value)
        )));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            ErrorRecord::deserialize(item).map_err(|error| {
                ReportError::invalid_input(format!("error record at index {index}: {error}"))
            })
        })
        .collect()
}

/// Parse a JSON document and decode it with [`parse_error_list`].
///
/// # Errors
///
/// Returns [`ReportError::InvalidInput`] for malformed JSON or a non-list document.
pub fn parse_error_list_str(input: &str) -> Result<Vec<ErrorRecord>> {
    let value: Value = serde_json::from_str(input)
        .map_err(|error| ReportError::invalid_input(format!("malformed JSON: {error}")))?;
    parse_error_list(&value)
}

/// Article-prefixed name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
