//! Per-format option schemas.
//!
//! Each format recognizes a small fixed set of option names. A recognized
//! option with the wrong type or an out-of-range value is rejected; any
//! other key is ignored so one option set can be passed to every format.

use jsv_model::{FormatOptions, FormatTag, ReportError, Result};
use serde_json::Value;

/// Shape a recognized option value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    PositiveInt,
    HeadingLevel,
}

impl OptionKind {
    fn expected(self) -> &'static str {
        match self {
            OptionKind::Bool => "a boolean",
            OptionKind::PositiveInt => "a positive integer",
            OptionKind::HeadingLevel => "an integer between 1 and 6",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            OptionKind::Bool => value.is_boolean(),
            OptionKind::PositiveInt => value.as_u64().is_some_and(|n| n > 0),
            OptionKind::HeadingLevel => value.as_u64().is_some_and(|n| (1..=6).contains(&n)),
        }
    }
}

/// A recognized option name and the shape of its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
}

const fn spec(name: &'static str, kind: OptionKind) -> OptionSpec {
    OptionSpec { name, kind }
}

const MAX_ERRORS: OptionSpec = spec("max_errors", OptionKind::PositiveInt);

const HUMAN_SCHEMA: &[OptionSpec] = &[spec("color", OptionKind::Bool), MAX_ERRORS];
const JSON_SCHEMA: &[OptionSpec] = &[spec("pretty", OptionKind::Bool), MAX_ERRORS];
const TABLE_SCHEMA: &[OptionSpec] = &[spec("compact", OptionKind::Bool), MAX_ERRORS];
const MARKDOWN_SCHEMA: &[OptionSpec] = &[
    spec("heading_level", OptionKind::HeadingLevel),
    spec("include_toc", OptionKind::Bool),
    MAX_ERRORS,
];
const LLM_SCHEMA: &[OptionSpec] = &[
    spec("structured", OptionKind::Bool),
    spec("include_schema_context", OptionKind::Bool),
    MAX_ERRORS,
];

/// Options recognized by `tag`.
pub fn option_schema(tag: FormatTag) -> &'static [OptionSpec] {
    match tag {
        FormatTag::Human => HUMAN_SCHEMA,
        FormatTag::Json => JSON_SCHEMA,
        FormatTag::Table => TABLE_SCHEMA,
        FormatTag::Markdown => MARKDOWN_SCHEMA,
        FormatTag::Llm => LLM_SCHEMA,
    }
}

/// Check every option `tag` recognizes; unrecognized keys pass through.
///
/// # Errors
///
/// Returns [`ReportError::InvalidOption`] naming the first offending option.
pub fn validate_options(tag: FormatTag, options: &FormatOptions) -> Result<()> {
    for spec in option_schema(tag) {
        if let Some(value) = options.get(spec.name)
            && !spec.kind.accepts(value)
        {
            return Err(ReportError::InvalidOption {
                option: spec.name.to_string(),
                format: tag.to_string(),
                expected: spec.kind.expected(),
            });
        }
    }
    Ok(())
}

/// Options that have passed [`validate_options`] for one format.
struct Checked<'a> {
    options: &'a FormatOptions,
}

impl<'a> Checked<'a> {
    fn new(tag: FormatTag, options: &'a FormatOptions) -> Result<Self> {
        validate_options(tag, options)?;
        Ok(Self { options })
    }

    fn flag(&self, name: &str, default: bool) -> bool {
        self.options
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    fn count(&self, name: &str) -> Option<usize> {
        self.options
            .get(name)
            .and_then(Value::as_u64)
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
    }
}

pub const DEFAULT_HUMAN_MAX_ERRORS: usize = 20;
pub const DEFAULT_TABLE_MAX_ERRORS: usize = 50;
pub const DEFAULT_MARKDOWN_MAX_ERRORS: usize = 100;
pub const DEFAULT_LLM_MAX_ERRORS: usize = 20;
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanOptions {
    pub color: bool,
    pub max_errors: usize,
}

impl HumanOptions {
    pub fn from_options(options: &FormatOptions) -> Result<Self> {
        let checked = Checked::new(FormatTag::Human, options)?;
        Ok(Self {
            color: checked.flag("color", false),
            max_errors: checked
                .count("max_errors")
                .unwrap_or(DEFAULT_HUMAN_MAX_ERRORS),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    pub pretty: bool,
    /// `None` renders every record.
    pub max_errors: Option<usize>,
}

impl JsonOptions {
    pub fn from_options(options: &FormatOptions) -> Result<Self> {
        let checked = Checked::new(FormatTag::Json, options)?;
        Ok(Self {
            pretty: checked.flag("pretty", true),
            max_errors: checked.count("max_errors"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub compact: bool,
    pub max_errors: usize,
}

impl TableOptions {
    pub fn from_options(options: &FormatOptions) -> Result<Self> {
        let checked = Checked::new(FormatTag::Table, options)?;
        Ok(Self {
            compact: checked.flag("compact", false),
            max_errors: checked
                .count("max_errors")
                .unwrap_or(DEFAULT_TABLE_MAX_ERRORS),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Level of the top heading, 1 through 6.
    pub heading_level: u8,
    pub include_toc: bool,
    pub max_errors: usize,
}

impl MarkdownOptions {
    pub fn from_options(options: &FormatOptions) -> Result<Self> {
        let checked = Checked::new(FormatTag::Markdown, options)?;
        let heading_level = checked
            .count("heading_level")
            .and_then(|level| u8::try_from(level).ok())
            .unwrap_or(DEFAULT_HEADING_LEVEL);
        Ok(Self {
            heading_level,
            include_toc: checked.flag("include_toc", false),
            max_errors: checked
                .count("max_errors")
                .unwrap_or(DEFAULT_MARKDOWN_MAX_ERRORS),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmOptions {
    pub structured: bool,
    pub include_schema_context: bool,
    pub max_errors: usize,
}

impl LlmOptions {
    pub fn from_options(options: &FormatOptions) -> Result<Self> {
        let checked = Checked::new(FormatTag::Llm, options)?;
        Ok(Self {
            structured: checked.flag("structured", false),
            include_schema_context: checked.flag("include_schema_context", true),
            max_errors: checked
                .count("max_errors")
                .unwrap_or(DEFAULT_LLM_MAX_ERRORS),
        })
    }
}
