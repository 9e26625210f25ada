//! Public entry point: validate options, truncate, dispatch to a renderer.

use jsv_model::{ErrorRecord, FormatOptions, FormatTag, Result, parse_error_list};
use serde_json::Value;
use tracing::debug;

use crate::options::{HumanOptions, JsonOptions, LlmOptions, MarkdownOptions, TableOptions};
use crate::render::{self, Window};

pub const HUMAN_EMPTY: &str = "No validation errors found.";
pub const JSON_EMPTY: &str = "[]";
pub const TABLE_EMPTY: &str = "No validation errors found.";
pub const MARKDOWN_EMPTY: &str = "## Validation Errors\n\nNo validation errors found.";
pub const LLM_EMPTY: &str = "VALIDATION_STATUS: PASSED\nNo validation errors found.";

/// Fixed output for an empty error list.
pub fn empty_output(tag: FormatTag) -> &'static str {
    match tag {
        FormatTag::Human => HUMAN_EMPTY,
        FormatTag::Json => JSON_EMPTY,
        FormatTag::Table => TABLE_EMPTY,
        FormatTag::Markdown => MARKDOWN_EMPTY,
        FormatTag::Llm => LLM_EMPTY,
    }
}

/// Renders error lists in any of the supported formats.
///
/// Stateless: identical input always yields identical output, and the
/// formatter can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorFormatter;

impl ErrorFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Render `errors` as `tag`.
    ///
    /// Options recognized by `tag` are checked first; unrecognized keys are
    /// ignored. An empty list yields [`empty_output`]. Longer lists are cut to
    /// the format's `max_errors` before rendering, and the output states how
    /// many records were left out.
    ///
    /// # Errors
    ///
    /// Returns [`jsv_model::ReportError::InvalidOption`] for a malformed
    /// recognized option.
    pub fn format(
        &self,
        errors: &[ErrorRecord],
        tag: FormatTag,
        options: &FormatOptions,
    ) -> Result<String> {
        match tag {
            FormatTag::Human => {
                let options = HumanOptions::from_options(options)?;
                Ok(render_with(errors, tag, Some(options.max_errors), |window| {
                    render::human::render(window, &options)
                }))
            }
            FormatTag::Json => {
                let options = JsonOptions::from_options(options)?;
                if errors.is_empty() {
                    return Ok(JSON_EMPTY.to_string());
                }
                let window = window_for(errors, tag, options.max_errors);
                render::json::render(&window, &options)
            }
            FormatTag::Table => {
                let options = TableOptions::from_options(options)?;
                Ok(render_with(errors, tag, Some(options.max_errors), |window| {
                    render::table::render(window, &options)
                }))
            }
            FormatTag::Markdown => {
                let options = MarkdownOptions::from_options(options)?;
                Ok(render_with(errors, tag, Some(options.max_errors), |window| {
                    render::markdown::render(window, &options)
                }))
            }
            FormatTag::Llm => {
                let options = LlmOptions::from_options(options)?;
                Ok(render_with(errors, tag, Some(options.max_errors), |window| {
                    render::llm::render(window, &options)
                }))
            }
        }
    }

    /// Like [`ErrorFormatter::format`], with the tag given by name.
    ///
    /// # Errors
    ///
    /// Returns [`jsv_model::ReportError::UnsupportedFormat`] for an unknown tag.
    pub fn format_named(
        &self,
        errors: &[ErrorRecord],
        tag: &str,
        options: &FormatOptions,
    ) -> Result<String> {
        let tag: FormatTag = tag.parse()?;
        self.format(errors, tag, options)
    }

    /// Render an error list still in its raw JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`jsv_model::ReportError::InvalidInput`] when `errors` is not a
    /// list of records, before the tag or the options are looked at.
    pub fn format_value(
        &self,
        errors: &Value,
        tag: &str,
        options: &FormatOptions,
    ) -> Result<String> {
        let records = parse_error_list(errors)?;
        self.format_named(&records, tag, options)
    }
}

fn render_with<F>(errors: &[ErrorRecord], tag: FormatTag, limit: Option<usize>, render: F) -> String
where
    F: FnOnce(&Window<'_>) -> String,
{
    if errors.is_empty() {
        return empty_output(tag).to_string();
    }
    render(&window_for(errors, tag, limit))
}

fn window_for(errors: &[ErrorRecord], tag: FormatTag, limit: Option<usize>) -> Window<'_> {
    let window = Window::new(errors, limit);
    debug!(
        format = %tag,
        total = window.total,
        shown = window.shown.len(),
        "rendering validation errors"
    );
    if window.is_truncated() {
        debug!(format = %tag, omitted = window.omitted(), "truncated error list");
    }
    window
}

/// Shorthand for [`ErrorFormatter::format`].
///
/// # Errors
///
/// See [`ErrorFormatter::format`].
pub fn format(errors: &[ErrorRecord], tag: FormatTag, options: &FormatOptions) -> Result<String> {
    ErrorFormatter::new().format(errors, tag, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsv_model::ReportError;
    use serde_json::json;

    #[test]
    fn empty_list_returns_sentinel_for_every_format() {
        let formatter = ErrorFormatter::new();
        for tag in FormatTag::ALL {
            let output = formatter.format(&[], tag, &FormatOptions::new()).unwrap();
            assert_eq!(output, empty_output(tag));
        }
    }

    #[test]
    fn options_are_checked_even_for_empty_lists() {
        let options = FormatOptions::new().set("pretty", 1);
        let error = format(&[], FormatTag::Json, &options).unwrap_err();
        assert!(matches!(error, ReportError::InvalidOption { .. }));
    }

    #[test]
    fn unknown_tag_is_rejected_by_name() {
        let error = ErrorFormatter::new()
            .format_named(&[], "xml", &FormatOptions::new())
            .unwrap_err();
        assert!(matches!(error, ReportError::UnsupportedFormat { .. }));
    }

    #[test]
    fn raw_input_must_be_a_list() {
        let formatter = ErrorFormatter::new();
        let error = formatter
            .format_value(&json!("not a list"), "human", &FormatOptions::new())
            .unwrap_err();
        assert!(matches!(error, ReportError::InvalidInput { .. }));

        // Input is checked before the tag.
        let error = formatter
            .format_value(&json!(42), "xml", &FormatOptions::new())
            .unwrap_err();
        assert!(matches!(error, ReportError::InvalidInput { .. }));
    }

    #[test]
    fn raw_input_renders_like_records() {
        let raw = json!([{
            "instance_path": "/age",
            "schema_path": "/properties/age/minimum",
            "message": "15 is less than the minimum of 18",
            "keyword": "minimum"
        }]);
        let output = ErrorFormatter::new()
            .format_value(&raw, "human", &FormatOptions::new())
            .unwrap();
        assert!(output.contains("/age"));
        assert!(output.contains("(minimum)"));
    }
}
