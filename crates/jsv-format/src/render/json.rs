//! Structured-data rendering.
//!
//! Records serialize through their own serde attributes, which drop every
//! absent, `null` or empty field. A truncated list is wrapped in an envelope
//! that carries the omitted count next to the shown records.

use jsv_model::{ErrorRecord, Result};
use serde::Serialize;

use super::Window;
use crate::options::JsonOptions;

#[derive(Serialize)]
struct TruncatedEnvelope<'a> {
    errors: &'a [ErrorRecord],
    truncated: bool,
    total_errors: usize,
    shown_errors: usize,
    omitted_errors: usize,
}

pub fn render(window: &Window<'_>, options: &JsonOptions) -> Result<String> {
    if window.is_truncated() {
        let envelope = TruncatedEnvelope {
            errors: window.shown,
            truncated: true,
            total_errors: window.total,
            shown_errors: window.shown.len(),
            omitted_errors: window.omitted(),
        };
        to_json(&envelope, options.pretty)
    } else {
        to_json(&window.shown, options.pretty)
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
