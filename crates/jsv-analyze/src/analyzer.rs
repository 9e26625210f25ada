//! Whole-list analysis built from the per-record classifiers.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use jsv_model::ErrorRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::classify::{
    CONSTRAINT_KEYWORDS, ErrorCategory, FORMAT_KEYWORDS, Severity, categorize_error,
    classify_severity, has_keyword_in,
};

/// Number of paths reported in [`AnalysisResult::most_common_paths`].
pub const TOP_PATHS: usize = 5;

pub const DEFAULT_RECOMMENDATION: &str =
    "Review the validation errors above and correct the data accordingly";

/// A recurring shape across the whole error list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPattern {
    MissingProperties,
    TypeConflicts,
    RangeViolations,
    FormatIssues,
}

impl ErrorPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingProperties => "missing_properties",
            Self::TypeConflicts => "type_conflicts",
            Self::RangeViolations => "range_violations",
            Self::FormatIssues => "format_issues",
        }
    }

    fn recommendation(self) -> &'static str {
        match self {
            Self::MissingProperties => {
                "Review required fields - some mandatory properties are missing"
            }
            Self::TypeConflicts => "Check data types - multiple values have the wrong type",
            Self::RangeViolations => {
                "Validate value constraints - some values are outside the allowed ranges or sizes"
            }
            Self::FormatIssues => {
                "Verify data formats - some values do not match the expected format, pattern or allowed values"
            }
        }
    }
}

impl fmt::Display for ErrorPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of [`analyze`]. Recomputed on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_errors: usize,
    /// Count per category; categories with no errors are absent.
    pub categories: BTreeMap<ErrorCategory, usize>,
    /// Count per severity; severities with no errors are absent.
    pub severities: BTreeMap<Severity, usize>,
    pub patterns: BTreeSet<ErrorPattern>,
    /// Up to five instance paths, most frequent first.
    pub most_common_paths: Vec<String>,
    /// Never empty.
    pub recommendations: Vec<String>,
}

impl AnalysisResult {
    pub fn category_count(&self, category: ErrorCategory) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    pub fn severity_count(&self, severity: Severity) -> usize {
        self.severities.get(&severity).copied().unwrap_or(0)
    }

    pub fn has_pattern(&self, pattern: ErrorPattern) -> bool {
        self.patterns.contains(&pattern)
    }
}

/// Errors grouped by category.
pub fn group_by_type(errors: &[ErrorRecord]) -> BTreeMap<ErrorCategory, Vec<&ErrorRecord>> {
    let mut groups: BTreeMap<ErrorCategory, Vec<&ErrorRecord>> = BTreeMap::new();
    for error in errors {
        let category = categorize_error(error);
        trace!(path = %error.instance_path, %category, "categorized error");
        groups.entry(category).or_default().push(error);
    }
    groups
}

/// Errors grouped by instance path.
pub fn group_by_path(errors: &[ErrorRecord]) -> BTreeMap<&str, Vec<&ErrorRecord>> {
    let mut groups: BTreeMap<&str, Vec<&ErrorRecord>> = BTreeMap::new();
    for error in errors {
        groups
            .entry(error.instance_path.as_str())
            .or_default()
            .push(error);
    }
    groups
}

/// Errors grouped by severity tier.
pub fn analyze_severity(errors: &[ErrorRecord]) -> BTreeMap<Severity, Vec<&ErrorRecord>> {
    let mut groups: BTreeMap<Severity, Vec<&ErrorRecord>> = BTreeMap::new();
    for error in errors {
        groups.entry(classify_severity(error)).or_default().push(error);
    }
    groups
}

/// Patterns present in the list, in check order.
pub fn detect_error_patterns(errors: &[ErrorRecord]) -> BTreeSet<ErrorPattern> {
    let mut patterns = BTreeSet::new();
    if errors.iter().any(|error| has_keyword_in(error, &["required"])) {
        patterns.insert(ErrorPattern::MissingProperties);
    }
    if errors
        .iter()
        .filter(|error| has_keyword_in(error, &["type"]))
        .count()
        > 1
    {
        patterns.insert(ErrorPattern::TypeConflicts);
    }
    if errors
        .iter()
        .any(|error| has_keyword_in(error, CONSTRAINT_KEYWORDS))
    {
        patterns.insert(ErrorPattern::RangeViolations);
    }
    if errors.iter().any(|error| has_keyword_in(error, FORMAT_KEYWORDS)) {
        patterns.insert(ErrorPattern::FormatIssues);
    }
    patterns
}

/// The `limit` most frequent instance paths.
///
/// Paths with equal counts keep the order in which they first appear.
pub fn most_common_paths(errors: &[ErrorRecord], limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for error in errors {
        let path = error.instance_path.as_str();
        match positions.get(path) {
            Some(&position) => counts[position].1 += 1,
            None => {
                positions.insert(path, counts.len());
                counts.push((path, 1));
            }
        }
    }
    // Stable sort: ties stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(path, _)| path.to_string())
        .collect()
}

/// Ordered fix recommendations; falls back to a single generic line.
pub fn generate_recommendations(
    total_errors: usize,
    categories: &BTreeMap<ErrorCategory, usize>,
    patterns: &BTreeSet<ErrorPattern>,
) -> Vec<String> {
    let mut recommendations: Vec<String> = patterns
        .iter()
        .map(|pattern| pattern.recommendation().to_string())
        .collect();

    let count = |category| categories.get(&category).copied().unwrap_or(0);
    if count(ErrorCategory::TypeMismatch) > 0 {
        recommendations
            .push("Consider data transformation or type coercion before validation".to_string());
    }
    if count(ErrorCategory::Structural) > 0 {
        recommendations.push("Review object structure and nesting against the schema".to_string());
    }
    if total_errors > 5 {
        recommendations.push(
            "Consider validating data earlier in your pipeline to catch errors sooner".to_string(),
        );
    }
    if total_errors > 10 {
        recommendations.push(
            "High error count suggests systematic data quality issues - review the data source"
                .to_string(),
        );
    }

    if recommendations.is_empty() {
        recommendations.push(DEFAULT_RECOMMENDATION.to_string());
    }
    recommendations
}

/// Fix recommendations for `errors`.
pub fn suggest_fixes(errors: &[ErrorRecord]) -> Vec<String> {
    let categories = count_groups(group_by_type(errors));
    let patterns = detect_error_patterns(errors);
    generate_recommendations(errors.len(), &categories, &patterns)
}

/// Full analysis of an error list.
pub fn analyze(errors: &[ErrorRecord]) -> AnalysisResult {
    let categories = count_groups(group_by_type(errors));
    let severities = count_groups(analyze_severity(errors));
    let patterns = detect_error_patterns(errors);
    let recommendations = generate_recommendations(errors.len(), &categories, &patterns);
    debug!(
        total = errors.len(),
        categories = categories.len(),
        patterns = patterns.len(),
        "analyzed validation errors"
    );
    AnalysisResult {
        total_errors: errors.len(),
        categories,
        severities,
        patterns,
        most_common_paths: most_common_paths(errors, TOP_PATHS),
        recommendations,
    }
}

fn count_groups<K: Ord, V>(groups: BTreeMap<K, Vec<V>>) -> BTreeMap<K, usize> {
    groups
        .into_iter()
        .map(|(key, members)| (key, members.len()))
        .collect()
}
