//! Markdown rendering with `error-N` anchors and an optional table of contents.

use jsv_model::ErrorRecord;
use serde_json::{Map, Value};

use super::{Window, omission_notice, plural};
use crate::options::MarkdownOptions;

const MAX_HEADING_LEVEL: u8 = 6;

pub fn render(window: &Window<'_>, options: &MarkdownOptions) -> String {
    let level = options.heading_level.clamp(1, MAX_HEADING_LEVEL);
    let section_level = (level + 1).min(MAX_HEADING_LEVEL);
    let mut blocks = vec![
        format!("{} Validation Errors", heading(level)),
        count_line(window),
    ];

    if options.include_toc {
        // One level above the error sections, beside the top heading.
        let mut toc = vec![format!("{} Table of Contents", heading(level)), String::new()];
        for (index, error) in window.shown.iter().enumerate() {
            let number = index + 1;
            toc.push(format!(
                "- [Error {number}: {}](#{})",
                code_span(error.location()),
                anchor(number)
            ));
        }
        blocks.push(toc.join("\n"));
    }

    for (index, error) in window.shown.iter().enumerate() {
        blocks.push(error_section(index + 1, error, section_level));
    }

    if window.is_truncated() {
        blocks.push(format!("*{}*", omission_notice(window.omitted())));
    }
    blocks.join("\n\n")
}

fn count_line(window: &Window<'_>) -> String {
    if window.is_truncated() {
        format!(
            "Showing {} of {} validation errors.",
            window.shown.len(),
            window.total
        )
    } else {
        format!(
            "Found {} validation {}.",
            window.total,
            plural(window.total, "error", "errors")
        )
    }
}

fn error_section(number: usize, error: &ErrorRecord, level: u8) -> String {
    let mut parts = vec![
        format!(
            "<a id=\"{}\"></a>\n{} Error {number}",
            anchor(number),
            heading(level)
        ),
        format!("**Location:** {}", code_span(error.location())),
        format!("**Message:** {}", escape(&error.message)),
    ];
    if let Some(keyword) = error.keyword_name() {
        parts.push(format!("**Keyword:** {}", code_span(keyword)));
    }
    if !error.schema_path.is_empty() {
        parts.push(format!("**Schema Path:** {}", code_span(&error.schema_path)));
    }
    if let Some(context) = error.context.as_ref().filter(|context| !context.is_empty()) {
        let object: Map<String, Value> = context
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        parts.push(format!(
            "**Context:**\n\n```json\n{:#}\n```",
            Value::Object(object)
        ));
    }
    let suggestions = error.suggestion_list();
    if !suggestions.is_empty() {
        let bullets: Vec<String> = suggestions
            .iter()
            .map(|suggestion| format!("- {}", escape(suggestion)))
            .collect();
        parts.push(format!("**Suggestions:**\n\n{}", bullets.join("\n")));
    }
    parts.join("\n\n")
}

/// Anchor id for the 1-based error `number`.
pub fn anchor(number: usize) -> String {
    format!("error-{number}")
}

fn heading(level: u8) -> String {
    "#".repeat(usize::from(level))
}

/// Backslash-escape characters with inline markdown meaning.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '*' | '_' | '`' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn code_span(text: &str) -> String {
    if text.contains('`') {
        format!("`` {text} ``")
    } else {
        format!("`{text}`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn options(heading_level: u8, include_toc: bool) -> MarkdownOptions {
        MarkdownOptions {
            heading_level,
            include_toc,
            max_errors: 100,
        }
    }

    #[test]
    fn escapes_markdown_significant_characters() {
        assert_eq!(escape("a*b_c`d[e]f"), "a\\*b\\_c\\`d\\[e\\]f");
        assert_eq!(escape("plain text"), "plain text");
    }

    #[test]
    fn full_section_layout() {
        let errors = vec![
            ErrorRecord::new("/user_name", "/properties/user_name/pattern", "does not match [a-z]*")
                .with_keyword("pattern")
                .with_context("pattern", json!("[a-z]*"))
                .with_suggestion("Use lower_case letters"),
        ];
        let output = render(&Window::new(&errors, Some(100)), &options(2, false));
        assert_eq!(
            output,
            "## Validation Errors\n\
             \n\
             Found 1 validation error.\n\
             \n\
             <a id=\"error-1\"></a>\n\
             ### Error 1\n\
             \n\
             **Location:** `/user_name`\n\
             \n\
             **Message:** does not match \\[a-z\\]\\*\n\
             \n\
             **Keyword:** `pattern`\n\
             \n\
             **Schema Path:** `/properties/user_name/pattern`\n\
             \n\
             **Context:**\n\
             \n\
             ```json\n{\n  \"pattern\": \"[a-z]*\"\n}\n```\n\
             \n\
             **Suggestions:**\n\
             \n\
             - Use lower\\_case letters"
        );
    }

    #[test]
    fn toc_links_each_anchor() {
        let errors = vec![
            ErrorRecord::new("/a", "", "first"),
            ErrorRecord::new("/b", "", "second"),
        ];
        let output = render(&Window::new(&errors, Some(100)), &options(2, true));
        assert!(output.starts_with("## Validation Errors\n"));
        assert!(output.contains(
            "\n\n## Table of Contents\n\n- [Error 1: `/a`](#error-1)\n- [Error 2: `/b`](#error-2)"
        ));
        assert!(!output.contains("### Table of Contents"));
        assert!(output.contains("<a id=\"error-2\"></a>\n### Error 2"));
    }

    #[test]
    fn deepest_heading_level_is_capped() {
        let errors = vec![ErrorRecord::new("/a", "", "first")];
        let output = render(&Window::new(&errors, Some(100)), &options(6, false));
        assert!(output.starts_with("###### Validation Errors"));
        assert!(output.contains("\n###### Error 1"));
        assert!(!output.contains("#######"));
    }

    #[test]
    fn truncated_output_reports_omitted_count() {
        let errors: Vec<ErrorRecord> = (0..5)
            .map(|i| ErrorRecord::new(format!("/{i}"), "", "bad"))
            .collect();
        let output = render(&Window::new(&errors, Some(3)), &options(2, false));
        assert!(output.contains("Showing 3 of 5 validation errors."));
        assert!(output.ends_with("*... and 2 more errors*"));
        assert!(!output.contains("error-4"));
    }
}
