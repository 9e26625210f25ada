//! Analysis of validation error lists.
//!
//! Every function here is a pure function of its input list: errors are
//! categorized and given a severity tier from fixed keyword tables, the list
//! is scanned for recurring patterns, and fix recommendations are derived
//! from the result.

pub mod analyzer;
pub mod classify;
pub mod summary;

pub use analyzer::{
    AnalysisResult, DEFAULT_RECOMMENDATION, ErrorPattern, TOP_PATHS, analyze, analyze_severity,
    detect_error_patterns, generate_recommendations, group_by_path, group_by_type,
    most_common_paths, suggest_fixes,
};
pub use classify::{
    CONSTRAINT_KEYWORDS, ErrorCategory, FORMAT_KEYWORDS, Severity, categorize_error,
    classify_severity,
};
pub use summary::{summarize, summarize_result};
