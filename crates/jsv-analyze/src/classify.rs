//! Keyword lookup tables: error category and severity tier.

use std::fmt;

use jsv_model::ErrorRecord;
use serde::{Deserialize, Serialize};

/// Broad class of a validation failure, derived from its keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    TypeMismatch,
    ConstraintViolation,
    Structural,
    Format,
    Custom,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::ConstraintViolation => "constraint_violation",
            Self::Structural => "structural",
            Self::Format => "format",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived priority of a failure. Ordered most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keywords whose failures are numeric, length or size bounds.
pub const CONSTRAINT_KEYWORDS: &[&str] = &[
    "minimum",
    "maximum",
    "minLength",
    "maxLength",
    "minItems",
    "maxItems",
    "multipleOf",
];

/// Keywords whose failures concern the shape of a value.
pub const FORMAT_KEYWORDS: &[&str] = &["format", "pattern", "enum", "const"];

const CATEGORY_TABLE: &[(&str, ErrorCategory)] = &[
    ("type", ErrorCategory::TypeMismatch),
    ("minimum", ErrorCategory::ConstraintViolation),
    ("maximum", ErrorCategory::ConstraintViolation),
    ("minLength", ErrorCategory::ConstraintViolation),
    ("maxLength", ErrorCategory::ConstraintViolation),
    ("minItems", ErrorCategory::ConstraintViolation),
    ("maxItems", ErrorCategory::ConstraintViolation),
    ("multipleOf", ErrorCategory::ConstraintViolation),
    ("required", ErrorCategory::Structural),
    ("additionalProperties", ErrorCategory::Structural),
    ("properties", ErrorCategory::Structural),
    ("items", ErrorCategory::Structural),
    ("uniqueItems", ErrorCategory::Structural),
    ("format", ErrorCategory::Format),
    ("pattern", ErrorCategory::Format),
    ("enum", ErrorCategory::Format),
    ("const", ErrorCategory::Format),
];

const SEVERITY_TABLE: &[(&str, Severity)] = &[
    ("type", Severity::Critical),
    ("required", Severity::Critical),
    ("minimum", Severity::High),
    ("maximum", Severity::High),
    ("minLength", Severity::High),
    ("maxLength", Severity::High),
    ("format", Severity::Medium),
    ("pattern", Severity::Medium),
    ("enum", Severity::High),
    ("const", Severity::High),
];

fn lookup<T: Copy>(table: &[(&str, T)], keyword: Option<&str>) -> Option<T> {
    let keyword = keyword?;
    table
        .iter()
        .find(|(name, _)| *name == keyword)
        .map(|&(_, value)| value)
}

/// Category of `error`; unknown or missing keywords are `Custom`.
pub fn categorize_error(error: &ErrorRecord) -> ErrorCategory {
    lookup(CATEGORY_TABLE, error.keyword_name()).unwrap_or(ErrorCategory::Custom)
}

/// Severity tier of `error`.
///
/// Keywords without a fixed tier are `High` when the instance path is at
/// most one character long (`""` or `"/"`) and `Medium` otherwise.
pub fn classify_severity(error: &ErrorRecord) -> Severity {
    lookup(SEVERITY_TABLE, error.keyword_name()).unwrap_or_else(|| {
        if error.instance_path.chars().count() <= 1 {
            Severity::High
        } else {
            Severity::Medium
        }
    })
}

pub(crate) fn has_keyword_in(error: &ErrorRecord, keywords: &[&str]) -> bool {
    error
        .keyword_name()
        .is_some_and(|keyword| keywords.contains(&keyword))
}
