//! End-to-end rendering scenarios through the public formatter.

use jsv_format::{ErrorFormatter, ErrorRecord, FormatOptions, FormatTag, ReportError};
use serde_json::{Value, json};

fn age_error() -> ErrorRecord {
    ErrorRecord::new(
        "/age",
        "/properties/age/minimum",
        "15 is less than the minimum of 18",
    )
    .with_keyword("minimum")
    .with_instance_value(json!(15))
    .with_schema_value(json!(18))
}

fn distinct_errors(count: usize) -> Vec<ErrorRecord> {
    (0..count)
        .map(|i| {
            ErrorRecord::new(
                format!("/items/{i}"),
                format!("/properties/items/items/{i}"),
                format!("item {i} is invalid"),
            )
            .with_keyword("type")
        })
        .collect()
}

fn render(errors: &[ErrorRecord], tag: FormatTag, options: &FormatOptions) -> String {
    ErrorFormatter::new()
        .format(errors, tag, options)
        .expect("render")
}

#[test]
fn empty_sentinels_are_exact() {
    let none = FormatOptions::new();
    assert_eq!(
        render(&[], FormatTag::Human, &none),
        "No validation errors found."
    );
    assert_eq!(render(&[], FormatTag::Json, &none), "[]");
    assert_eq!(
        render(&[], FormatTag::Table, &none),
        "No validation errors found."
    );
    assert_eq!(
        render(&[], FormatTag::Markdown, &none),
        "## Validation Errors\n\nNo validation errors found."
    );
    assert_eq!(
        render(&[], FormatTag::Llm, &none),
        "VALIDATION_STATUS: PASSED\nNo validation errors found."
    );
}

#[test]
fn single_minimum_error_in_human_and_table() {
    let errors = vec![age_error()];
    let human = render(&errors, FormatTag::Human, &FormatOptions::new());
    assert!(human.contains("/age"));
    assert!(human.contains("15 is less than the minimum of 18"));

    let table = render(&errors, FormatTag::Table, &FormatOptions::new());
    let header = table
        .lines()
        .find(|line| line.contains("Path"))
        .expect("header row");
    assert!(header.contains("Error"));
    assert!(header.contains("Keyword"));
    assert!(table.contains("minimum"));
}

#[test]
fn human_default_limit_truncates_to_twenty() {
    let errors = distinct_errors(25);
    let output = render(&errors, FormatTag::Human, &FormatOptions::new());
    assert!(output.starts_with("20 Validation Errors Found"));
    assert!(output.contains("Error 20:"));
    assert!(!output.contains("Error 21:"));
    assert!(output.ends_with("... and 5 more errors"));
}

#[test]
fn human_multi_error_layout() {
    let errors = vec![
        age_error().with_suggestion("Use a value of at least 18"),
        ErrorRecord::new("", "/required", "\"email\" is a required property")
            .with_keyword("required")
            .with_context("missing", json!("email")),
    ];
    let output = render(&errors, FormatTag::Human, &FormatOptions::new());
    insta::assert_snapshot!(output, @r#"
2 Validation Errors Found

Error 1:
  Location: /age
  Message: 15 is less than the minimum of 18 (minimum)
  Suggestions:
    • Use a value of at least 18

Error 2:
  Location: (root)
  Message: "email" is a required property (required)
  Context:
    missing: email
"#);
}

#[test]
fn markdown_heading_level_one() {
    let errors = vec![age_error(), ErrorRecord::new("/name", "", "too short")];
    let options = FormatOptions::new().heading_level(1);
    let output = render(&errors, FormatTag::Markdown, &options);
    assert!(output.starts_with("# Validation Errors\n"));
    assert!(output.contains("\n## Error 1\n"));
    assert!(output.contains("\n## Error 2\n"));
    assert!(output.contains("<a id=\"error-1\"></a>"));
    assert!(!output.contains("### "));
}

#[test]
fn llm_structured_omits_missing_suggestions() {
    let errors = vec![age_error()];
    let options = FormatOptions::new().structured(true);
    let output = render(&errors, FormatTag::Llm, &options);
    assert!(!output.contains("SUGGESTIONS:"));
    insta::assert_snapshot!(output, @r"
VALIDATION_STATUS: FAILED
ERROR_COUNT: 1
ERRORS_SHOWN: 1

ERROR 1:
LOCATION: /age
MESSAGE: 15 is less than the minimum of 18
KEYWORD: minimum
SCHEMA_PATH: /properties/age/minimum
INVALID_VALUE: 15
EXPECTED_VALUE: 18
");
}

#[test]
fn json_round_trips_record_count() {
    let errors = distinct_errors(7);
    let output = render(&errors, FormatTag::Json, &FormatOptions::new().pretty(false));
    let parsed: Vec<Value> = serde_json::from_str(&output).expect("array");
    assert_eq!(parsed.len(), 7);
    assert_eq!(parsed[3]["instance_path"], json!("/items/3"));
    assert!(parsed[3].get("context").is_none());
}

#[test]
fn shared_option_set_works_across_formats() {
    let shared = FormatOptions::new()
        .color(false)
        .compact(true)
        .heading_level(3)
        .structured(true)
        .max_errors(2)
        .set("theme", "solarized");
    let errors = distinct_errors(3);
    for tag in FormatTag::ALL {
        let output = render(&errors, tag, &shared);
        assert!(!output.is_empty(), "{tag} rendered nothing");
    }
}

#[test]
fn invalid_recognized_option_names_the_option() {
    let options = FormatOptions::new().set("max_errors", 0);
    let error = ErrorFormatter::new()
        .format(&distinct_errors(1), FormatTag::Llm, &options)
        .unwrap_err();
    match error {
        ReportError::InvalidOption {
            option, expected, ..
        } => {
            assert_eq!(option, "max_errors");
            assert_eq!(expected, "a positive integer");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unsupported_format_lists_valid_tags() {
    let error = ErrorFormatter::new()
        .format_named(&distinct_errors(1), "yaml", &FormatOptions::new())
        .unwrap_err();
    let message = error.to_string();
    for tag in FormatTag::ALL {
        assert!(message.contains(tag.as_str()));
    }
}
