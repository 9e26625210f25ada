pub mod error;
pub mod options;
pub mod record;

pub use error::{ReportError, Result};
pub use options::{FormatOptions, FormatTag};
pub use record::{ErrorRecord, ROOT_LOCATION, json_kind, parse_error_list, parse_error_list_str};
