//! `jsv`: render and analyze JSON Schema validation errors.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

use jsv_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use jsv_cli::commands::{CommandOutput, report_failure, run_analyze, run_format, run_summarize};
use jsv_cli::logging::{LogConfig, LogFormat, init_logging};

/// Exit status when the input holds at least one validation error.
const EXIT_HAS_ERRORS: u8 = 1;
/// Exit status for unreadable input or invalid options.
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::from(EXIT_USAGE);
    }
    let stdout_color = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal(),
    };
    let outcome = match &cli.command {
        Command::Format(args) => run_format(args, stdout_color),
        Command::Analyze(args) => run_analyze(args),
        Command::Summarize(args) => run_summarize(args),
    };
    match outcome {
        Ok(output) => finish(&output),
        Err(error) => {
            let _ = report_failure(&error, &mut io::stderr());
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn finish(output: &CommandOutput) -> ExitCode {
    println!("{}", output.text);
    if output.has_errors() {
        ExitCode::from(EXIT_HAS_ERRORS)
    } else {
        ExitCode::SUCCESS
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
