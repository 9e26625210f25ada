//! CLI argument definitions for the validation error reporter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use jsv_model::FormatTag;

#[derive(Parser)]
#[command(
    name = "jsv",
    version,
    about = "Render and analyze JSON Schema validation errors",
    long_about = "Render and analyze JSON Schema validation errors.\n\n\
                  Reads the error list produced by a validation engine (a JSON array of\n\
                  error records) from a file or stdin and renders it as human, json,\n\
                  table, markdown or llm output, or summarizes recurring problems."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render an error list in one of the output formats.
    Format(FormatArgs),

    /// Categorize the errors and list fix recommendations.
    Analyze(AnalyzeArgs),

    /// Print a short plain-text summary of the errors.
    Summarize(InputArgs),
}

#[derive(Args, Clone, Default)]
pub struct InputArgs {
    /// JSON file holding the error list (stdin when omitted or "-").
    #[arg(value_name = "ERRORS")]
    pub input: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct FormatArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long = "format", short = 'f', value_enum, default_value = "human")]
    pub format: FormatArg,

    /// Format option as KEY=VALUE; VALUE is read as JSON, else as a string.
    ///
    /// May be repeated. Options the chosen format does not recognize are
    /// ignored, so one set can be reused across formats.
    #[arg(long = "option", short = 'o', value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// JSON object of format options; --option values take precedence.
    #[arg(long = "options-file", value_name = "PATH")]
    pub options_file: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the analysis as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Human,
    Json,
    Table,
    Markdown,
    Llm,
}

impl From<FormatArg> for FormatTag {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => FormatTag::Human,
            FormatArg::Json => FormatTag::Json,
            FormatArg::Table => FormatTag::Table,
            FormatArg::Markdown => FormatTag::Markdown,
            FormatArg::Llm => FormatTag::Llm,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
