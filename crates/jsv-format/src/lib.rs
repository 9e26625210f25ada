//! Rendering of validation error lists.
//!
//! [`ErrorFormatter`] is the entry point. It checks the options the chosen
//! [`FormatTag`] recognizes, truncates the list to that format's
//! `max_errors`, and hands the remaining records to one of five renderers.

pub mod formatter;
pub mod options;
pub mod render;

pub use formatter::{ErrorFormatter, empty_output, format};
pub use jsv_model::{ErrorRecord, FormatOptions, FormatTag, ReportError, Result};
pub use options::{
    HumanOptions, JsonOptions, LlmOptions, MarkdownOptions, OptionKind, OptionSpec, TableOptions,
    option_schema, validate_options,
};
pub use render::omission_notice;
