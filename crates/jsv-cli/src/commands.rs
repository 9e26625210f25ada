use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;
use tracing::{debug, info, info_span, warn};

use jsv_analyze::{analyze, summarize_result};
use jsv_format::ErrorFormatter;
use jsv_model::{ErrorRecord, FormatOptions, FormatTag, json_kind, parse_error_list_str};

use crate::cli::{AnalyzeArgs, FormatArgs, InputArgs};
use crate::report::render_analysis;

/// Text produced by a command plus the number of errors it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub error_count: usize,
}

impl CommandOutput {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Render the error list with the chosen format.
///
/// `stdout_color` is used for the human format's `color` option when the
/// caller did not set it explicitly.
pub fn run_format(args: &FormatArgs, stdout_color: bool) -> Result<CommandOutput> {
    let tag = FormatTag::from(args.format);
    let span = info_span!("format", format = %tag);
    let _guard = span.enter();

    let errors = load_errors(&args.input)?;
    let mut options = build_options(&args.options, args.options_file.as_deref())?;
    if tag == FormatTag::Human && !options.contains("color") {
        options.insert("color", stdout_color);
    }
    debug!(options = options.iter().count(), "resolved format options");

    let text = ErrorFormatter::new()
        .format(&errors, tag, &options)
        .with_context(|| format!("render {tag} output"))?;
    info!(errors = errors.len(), "rendered error list");
    Ok(CommandOutput {
        text,
        error_count: errors.len(),
    })
}

/// Analyze the error list and render the result as tables or JSON.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<CommandOutput> {
    let errors = load_errors(&args.input)?;
    let result = analyze(&errors);
    info!(
        errors = result.total_errors,
        patterns = result.patterns.len(),
        "analyzed error list"
    );
    let text = if args.json {
        serde_json::to_string_pretty(&result).context("serialize analysis")?
    } else {
        render_analysis(&result)
    };
    Ok(CommandOutput {
        text,
        error_count: errors.len(),
    })
}

/// Print a short plain-text summary of the error list.
pub fn run_summarize(args: &InputArgs) -> Result<CommandOutput> {
    let errors = load_errors(args)?;
    let result = analyze(&errors);
    Ok(CommandOutput {
        text: summarize_result(&result),
        error_count: errors.len(),
    })
}

/// Print a command failure with its context chain as one `error:` line.
///
/// Failures are reported here only, never through the log subscriber.
pub fn report_failure(error: &anyhow::Error, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "error: {error:#}")
}

/// Read an error list from the input file, or stdin for `None` and `-`.
pub fn load_errors(input: &InputArgs) -> Result<Vec<ErrorRecord>> {
    let (source, raw) = match input.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read error list {}", path.display()))?;
            (path.display().to_string(), raw)
        }
        _ => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("read error list from stdin")?;
            ("stdin".to_string(), raw)
        }
    };
    if raw.trim().is_empty() {
        warn!(%source, "error list input is empty");
    }
    let errors =
        parse_error_list_str(&raw).with_context(|| format!("parse error list from {source}"))?;
    debug!(%source, count = errors.len(), "loaded error list");
    Ok(errors)
}

/// Merge the options file (if any) with `KEY=VALUE` pairs; pairs win.
pub fn build_options(pairs: &[String], options_file: Option<&Path>) -> Result<FormatOptions> {
    let mut options = match options_file {
        Some(path) => load_options_file(path)?,
        None => FormatOptions::new(),
    };
    for pair in pairs {
        let (key, value) = parse_option_pair(pair)?;
        options.insert(key, value);
    }
    Ok(options)
}

fn load_options_file(path: &Path) -> Result<FormatOptions> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read options file {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("parse options file {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => Err(anyhow!(
            "options file {} must hold a JSON object, got {}",
            path.display(),
            json_kind(&other)
        )),
    }
}

/// Split `KEY=VALUE`. The value is parsed as JSON and kept as a plain
/// string when that fails, so `-o color=true` and `-o label=x` both work.
pub fn parse_option_pair(pair: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = pair.split_once('=') else {
        bail!("option '{pair}' must be written as KEY=VALUE");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("option '{pair}' has an empty key");
    }
    let value = serde_json::from_str(raw.trim()).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
