//! Properties of the analyzer over arbitrary keyword mixes.

use jsv_analyze::{ErrorPattern, analyze, detect_error_patterns, summarize};
use jsv_model::ErrorRecord;
use proptest::prelude::*;

const KEYWORDS: &[&str] = &[
    "type",
    "required",
    "minimum",
    "maxLength",
    "multipleOf",
    "format",
    "pattern",
    "enum",
    "const",
    "additionalProperties",
    "uniqueItems",
    "oneOf",
    "if",
];

fn record_strategy() -> impl Strategy<Value = ErrorRecord> {
    (
        prop::option::of(prop::sample::select(KEYWORDS)),
        prop::sample::select(vec!["", "/", "/a", "/a/b", "/items/0"]),
    )
        .prop_map(|(keyword, path)| {
            let record = ErrorRecord::new(path, "/schema", "failed");
            match keyword {
                Some(keyword) => record.with_keyword(keyword),
                None => record,
            }
        })
}

fn keyword_count(errors: &[ErrorRecord], keyword: &str) -> usize {
    errors
        .iter()
        .filter(|error| error.keyword_name() == Some(keyword))
        .count()
}

proptest! {
    #[test]
    fn totals_match_input(errors in prop::collection::vec(record_strategy(), 0..40)) {
        let result = analyze(&errors);
        prop_assert_eq!(result.total_errors, errors.len());
        prop_assert_eq!(result.categories.values().sum::<usize>(), errors.len());
        prop_assert_eq!(result.severities.values().sum::<usize>(), errors.len());
        prop_assert!(!result.recommendations.is_empty());
        prop_assert!(result.most_common_paths.len() <= 5);
    }

    #[test]
    fn pattern_conditions(errors in prop::collection::vec(record_strategy(), 0..40)) {
        let patterns = detect_error_patterns(&errors);
        prop_assert_eq!(
            patterns.contains(&ErrorPattern::MissingProperties),
            keyword_count(&errors, "required") > 0
        );
        prop_assert_eq!(
            patterns.contains(&ErrorPattern::TypeConflicts),
            keyword_count(&errors, "type") > 1
        );
    }

    #[test]
    fn analysis_is_deterministic(errors in prop::collection::vec(record_strategy(), 0..40)) {
        prop_assert_eq!(analyze(&errors), analyze(&errors));
        prop_assert_eq!(summarize(&errors), summarize(&errors));
    }
}

#[test]
fn analysis_serializes_with_snake_case_names() {
    let errors = vec![
        ErrorRecord::new("", "/required", "missing").with_keyword("required"),
        ErrorRecord::new("/n", "/properties/n/type", "wrong type").with_keyword("type"),
    ];
    let value = serde_json::to_value(analyze(&errors)).unwrap();
    assert_eq!(value["total_errors"], 2);
    assert_eq!(value["categories"]["structural"], 1);
    assert_eq!(value["categories"]["type_mismatch"], 1);
    assert_eq!(value["severities"]["critical"], 2);
    assert_eq!(value["patterns"], serde_json::json!(["missing_properties"]));
}
