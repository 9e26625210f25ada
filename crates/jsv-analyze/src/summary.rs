//! Plain-text summary of an analysis.

use std::collections::BTreeMap;
use std::fmt::Display;

use jsv_model::ErrorRecord;

use crate::analyzer::{AnalysisResult, ErrorPattern, analyze};

/// Number of recommendations listed in a summary.
pub const SUMMARY_RECOMMENDATIONS: usize = 3;

/// Analyze `errors` and describe the result in a few short paragraphs.
pub fn summarize(errors: &[ErrorRecord]) -> String {
    summarize_result(&analyze(errors))
}

/// Describe an existing analysis.
pub fn summarize_result(result: &AnalysisResult) -> String {
    let noun = if result.total_errors == 1 {
        "error"
    } else {
        "errors"
    };
    let mut paragraphs = vec![format!(
        "Found {} validation {noun}.",
        result.total_errors
    )];

    if !result.categories.is_empty() {
        paragraphs.push(format!("Categories: {}.", counted(&result.categories)));
    }
    if !result.severities.is_empty() {
        paragraphs.push(format!("Severities: {}.", counted(&result.severities)));
    }
    if !result.patterns.is_empty() {
        let names: Vec<&str> = result.patterns.iter().map(ErrorPattern::as_str).collect();
        paragraphs.push(format!("Patterns: {}.", names.join(", ")));
    }

    let mut recommendations = vec!["Top recommendations:".to_string()];
    recommendations.extend(
        result
            .recommendations
            .iter()
            .take(SUMMARY_RECOMMENDATIONS)
            .enumerate()
            .map(|(index, line)| format!("{}. {line}", index + 1)),
    );
    paragraphs.push(recommendations.join("\n"));

    paragraphs.join("\n\n")
}

fn counted<K: Display>(counts: &BTreeMap<K, usize>) -> String {
    counts
        .iter()
        .map(|(key, count)| format!("{key} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::DEFAULT_RECOMMENDATION;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_summary_has_count_and_fallback() {
        assert_eq!(
            summarize(&[]),
            format!("Found 0 validation errors.\n\nTop recommendations:\n1. {DEFAULT_RECOMMENDATION}")
        );
    }

    #[test]
    fn summary_lists_counts_in_enum_order() {
        let errors = vec![
            ErrorRecord::new("/age", "", "too small").with_keyword("minimum"),
            ErrorRecord::new("", "", "missing").with_keyword("required"),
            ErrorRecord::new("/age", "", "too big").with_keyword("maximum"),
        ];
        let summary = summarize(&errors);
        let paragraphs: Vec<&str> = summary.split("\n\n").collect();
        assert_eq!(paragraphs[0], "Found 3 validation errors.");
        assert_eq!(paragraphs[1], "Categories: constraint_violation (2), structural (1).");
        assert_eq!(paragraphs[2], "Severities: critical (1), high (2).");
        assert_eq!(paragraphs[3], "Patterns: missing_properties, range_violations.");
        assert!(paragraphs[4].starts_with("Top recommendations:\n1. Review required fields"));
        assert_eq!(paragraphs[4].lines().count(), 4);
    }
}
