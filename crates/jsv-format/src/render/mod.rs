//! One renderer per output format.
//!
//! Renderers receive a [`Window`] that has already been truncated to the
//! format's `max_errors`, so they never touch records that will not be shown.

pub mod human;
pub mod json;
pub mod llm;
pub mod markdown;
pub mod table;

use jsv_model::ErrorRecord;
use serde_json::Value;

/// The leading slice of an error list that will actually be rendered.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    pub shown: &'a [ErrorRecord],
    pub total: usize,
}

impl<'a> Window<'a> {
    /// Keep the first `limit` records in input order; `None` keeps all.
    pub fn new(errors: &'a [ErrorRecord], limit: Option<usize>) -> Self {
        let keep = limit.map_or(errors.len(), |limit| limit.min(errors.len()));
        Self {
            shown: &errors[..keep],
            total: errors.len(),
        }
    }

    pub fn omitted(&self) -> usize {
        self.total - self.shown.len()
    }

    pub fn is_truncated(&self) -> bool {
        self.omitted() > 0
    }
}

/// `"... and N more errors"`, singular for one.
pub fn omission_notice(omitted: usize) -> String {
    format!("... and {omitted} more {}", plural(omitted, "error", "errors"))
}

pub(crate) fn plural<'s>(count: usize, one: &'s str, many: &'s str) -> &'s str {
    if count == 1 { one } else { many }
}

/// Strings render bare, everything else as compact JSON.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<ErrorRecord> {
        (0..count)
            .map(|i| ErrorRecord::new(format!("/items/{i}"), "", format!("error {i}")))
            .collect()
    }

    #[test]
    fn window_keeps_leading_records() {
        let errors = records(5);
        let window = Window::new(&errors, Some(3));
        assert_eq!(window.shown.len(), 3);
        assert_eq!(window.shown[0].instance_path, "/items/0");
        assert_eq!(window.omitted(), 2);
        assert!(window.is_truncated());
    }

    #[test]
    fn unbounded_window_keeps_everything() {
        let errors = records(4);
        let window = Window::new(&errors, None);
        assert_eq!(window.shown.len(), 4);
        assert!(!window.is_truncated());
    }

    #[test]
    fn notice_is_singular_for_one() {
        assert_eq!(omission_notice(1), "... and 1 more error");
        assert_eq!(omission_notice(5), "... and 5 more errors");
    }

    #[test]
    fn strings_display_without_quotes() {
        assert_eq!(display_value(&Value::from("abc")), "abc");
        assert_eq!(display_value(&serde_json::json!([1, 2])), "[1,2]");
    }
}
