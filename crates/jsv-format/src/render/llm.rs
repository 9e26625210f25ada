//! Rendering for consumption by a language-model assistant.
//!
//! Prose mode writes one numbered sentence per error. Structured mode writes
//! a status header followed by one upper-case key/value block per error;
//! absent fields are left out rather than printed empty.

use jsv_model::ErrorRecord;

use super::{Window, omission_notice, plural};
use crate::options::LlmOptions;

pub fn render(window: &Window<'_>, options: &LlmOptions) -> String {
    if options.structured {
        render_structured(window, options)
    } else {
        render_prose(window, options)
    }
}

fn render_prose(window: &Window<'_>, options: &LlmOptions) -> String {
    let noun = plural(window.total, "error", "errors");
    let header = if window.is_truncated() {
        format!(
            "Validation failed with {} {noun} (showing the first {}):",
            window.total,
            window.shown.len()
        )
    } else {
        format!("Validation failed with {} {noun}:", window.total)
    };

    let sentences: Vec<String> = window
        .shown
        .iter()
        .enumerate()
        .map(|(index, error)| prose_sentence(index + 1, error, options))
        .collect();

    let mut blocks = vec![header, sentences.join("\n")];
    if window.is_truncated() {
        blocks.push(omission_notice(window.omitted()));
    }
    blocks.join("\n\n")
}

fn prose_sentence(number: usize, error: &ErrorRecord, options: &LlmOptions) -> String {
    let mut sentence = format!(
        "{number}. At location `{}`: {}",
        error.location(),
        error.message
    );
    if options.include_schema_context && !error.schema_path.is_empty() {
        sentence.push_str(&format!(" (Schema path: `{}`)", error.schema_path));
    }
    let suggestions = error.suggestion_list();
    if !suggestions.is_empty() {
        sentence.push_str(&format!(" Suggestions: {}", suggestions.join("; ")));
    }
    sentence
}

fn render_structured(window: &Window<'_>, options: &LlmOptions) -> String {
    let mut header = vec![
        "VALIDATION_STATUS: FAILED".to_string(),
        format!("ERROR_COUNT: {}", window.total),
        format!("ERRORS_SHOWN: {}", window.shown.len()),
    ];
    if window.is_truncated() {
        header.push(format!("ERRORS_OMITTED: {}", window.omitted()));
    }

    let mut blocks = vec![header.join("\n")];
    for (index, error) in window.shown.iter().enumerate() {
        blocks.push(structured_block(index + 1, error, options));
    }
    blocks.join("\n\n")
}

fn structured_block(number: usize, error: &ErrorRecord, options: &LlmOptions) -> String {
    let mut lines = vec![
        format!("ERROR {number}:"),
        format!("LOCATION: {}", error.location()),
        format!("MESSAGE: {}", error.message),
    ];
    if let Some(keyword) = error.keyword_name() {
        lines.push(format!("KEYWORD: {keyword}"));
    }
    if options.include_schema_context && !error.schema_path.is_empty() {
        lines.push(format!("SCHEMA_PATH: {}", error.schema_path));
    }
    if let Some(value) = error.present_instance_value() {
        lines.push(format!("INVALID_VALUE: {value}"));
    }
    if options.include_schema_context
        && let Some(value) = error.present_schema_value()
    {
        lines.push(format!("EXPECTED_VALUE: {value}"));
    }
    let suggestions = error.suggestion_list();
    if !suggestions.is_empty() {
        lines.push("SUGGESTIONS:".to_string());
        lines.extend(
            suggestions
                .iter()
                .map(|suggestion| format!("  - {suggestion}")),
        );
    }
    lines.join("\n")
}
